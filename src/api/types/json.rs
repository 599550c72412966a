//! Custom JSON extractor that returns errors in the API envelope

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::ApiError;

/// Message returned for any body that cannot be decoded
pub const UNPROCESSABLE_BODY_MESSAGE: &str = "unable to process body";

/// JSON extractor whose rejections are always 422 with `{"message": ...}`
///
/// The body is decoded whatever the `Content-Type` header says. Syntax
/// errors and type mismatches are reported the same way; the precise reason
/// is logged at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

/// JSON rejection rendered through `ApiError`
#[derive(Debug)]
pub struct JsonRejection(ApiError);

impl JsonRejection {
    fn unprocessable(reason: impl std::fmt::Display) -> Self {
        debug!(reason = %reason, "Rejected request body");
        Self(ApiError::unprocessable(UNPROCESSABLE_BODY_MESSAGE))
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| JsonRejection::unprocessable(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(Json)
            .map_err(JsonRejection::unprocessable)
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        name: String,
    }

    fn request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_json_rejection_into_response() {
        let rejection = JsonRejection(ApiError::unprocessable(UNPROCESSABLE_BODY_MESSAGE));

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_decodes_without_content_type() {
        let Json(payload) = Json::<Payload>::from_request(request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();

        assert_eq!(payload.name, "x");
    }

    #[tokio::test]
    async fn test_null_decodes_into_option() {
        let Json(payload) = Json::<Option<Payload>>::from_request(request("null"), &())
            .await
            .unwrap();

        assert!(payload.is_none());
    }

    #[tokio::test]
    async fn test_syntax_error_is_unprocessable() {
        let rejection = Json::<Payload>::from_request(request("{not json"), &())
            .await
            .unwrap_err();

        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
