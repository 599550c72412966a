//! Infrastructure layer - Store, id generation and runtime setup

pub mod logging;
pub mod user;
