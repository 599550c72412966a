//! User CRUD endpoints

use axum::{extract::State, http::StatusCode, routing::get, Router};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, DataResponse, Json, UserIdPath, UserRequest, UserResponse};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Returned when a body decodes but leaves a field empty
pub const MISSING_FIELDS_MESSAGE: &str =
    "please provide first name, last name and biography for the user";

/// User routes, merged into the top-level router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// A `null` body decodes to an empty request and fails the required-fields check
fn required_fields(request: Option<UserRequest>) -> Result<UserRequest, ApiError> {
    let request = request.unwrap_or_default();
    if request.has_missing_fields() {
        return Err(ApiError::bad_request(MISSING_FIELDS_MESSAGE));
    }
    Ok(request)
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<Option<UserRequest>>,
) -> Result<(StatusCode, Json<DataResponse<UserResponse>>), ApiError> {
    debug!("Creating user");

    let request = required_fields(request)?;

    let user = state
        .user_service
        .create(CreateUserRequest {
            first_name: request.first_name,
            last_name: request.last_name,
            biography: request.biography,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(UserResponse::from(&user))),
    ))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<UserResponse>>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await?;
    let data = users.iter().map(UserResponse::from).collect();

    Ok(Json(DataResponse::new(data)))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<DataResponse<UserResponse>>, ApiError> {
    debug!(id = %id, "Getting user");

    let user = state.user_service.get(&id).await?;

    Ok(Json(DataResponse::new(UserResponse::from(&user))))
}

/// PUT /api/users/{id}
///
/// The id is checked before the body is decoded.
pub async fn update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    Json(request): Json<Option<UserRequest>>,
) -> Result<Json<DataResponse<UserResponse>>, ApiError> {
    debug!(id = %id, "Updating user");

    let request = required_fields(request)?;

    let user = state
        .user_service
        .update(
            &id,
            UpdateUserRequest {
                first_name: request.first_name,
                last_name: request.last_name,
                biography: request.biography,
            },
        )
        .await?;

    Ok(Json(DataResponse::new(UserResponse::from(&user))))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "Deleting user");

    state.user_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
