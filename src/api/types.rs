use std::future::Future;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Request body for `POST /api/generate-animation`.
///
/// The prompt is passed through verbatim: no trimming, no validation,
/// an empty prompt is submitted as-is and the server decides what to do
/// with it.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
}

/// Raw response body as the server sends it.
///
/// Only responses with `success == true` and a non-empty `video_url` count
/// as well-formed successes; every other shape is a failure, whatever the
/// HTTP status said.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A settled, well-formed success.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSuccess {
    /// Absolute URL of the rendered video.
    pub video_url: String,
    /// Optional server-side note ("Animation generated successfully!").
    pub message: Option<String>,
}

/// Seam between the request lifecycle and the transport.
///
/// The production impl is [`GenerationClient`](super::GenerationClient);
/// tests drive the controller with a scripted stub instead of a live
/// server.
pub trait GenerationBackend {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<GenerationSuccess, ApiError>> + Send;
}
