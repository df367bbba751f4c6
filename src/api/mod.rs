//! Wire types and HTTP client for the animation generation service.

mod client;
mod error;
mod types;

pub use client::{parse_response, resolve_media_url, GenerationClient};
pub use error::ApiError;
pub use types::{GenerationBackend, GenerationRequest, GenerationResponse, GenerationSuccess};
