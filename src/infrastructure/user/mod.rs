//! User infrastructure module
//!
//! This module provides the in-memory record store, identifier generation and
//! the user service the HTTP layer talks to.

mod id_generator;
mod repository;
mod service;

pub use id_generator::{IdGenerator, UuidV7Generator};
#[cfg(test)]
pub use id_generator::MockIdGenerator;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
