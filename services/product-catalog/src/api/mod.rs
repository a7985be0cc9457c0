//! HTTP API 层

mod dto;
mod error;
mod handlers;
mod routes;

pub use dto::{MessageResponse, ProductPayload};
pub use error::ApiError;
pub use routes::router;
