//! HTTP client for `POST /api/generate-animation`.
//!
//! Thin reqwest wrapper; everything that can be tested without a socket
//! lives in [`parse_response`].

use std::time::Duration;

use reqwest::StatusCode;

use crate::config::ServerConfig;

use super::error::ApiError;
use super::types::{GenerationBackend, GenerationRequest, GenerationResponse, GenerationSuccess};

const GENERATE_PATH: &str = "/api/generate-animation";

/// Client for the animation generation endpoint.
///
/// Carries explicit request and connect timeouts so a hung server settles
/// as a transport failure instead of leaving the trigger disabled forever.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    base_url: String,
}

impl GenerationClient {
    pub fn new(config: &ServerConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(|e| ApiError::ClientBuild {
                detail: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl GenerationBackend for GenerationClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationSuccess, ApiError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);

        tracing::debug!(
            url = %url,
            prompt_len = request.prompt.len(),
            "submitting generation request"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = %status, body_len = body.len(), "generation request settled");

        parse_response(status, &body).map(|mut success| {
            success.video_url = resolve_media_url(&self.base_url, &success.video_url);
            success
        })
    }
}

/// Classify a settled HTTP exchange.
///
/// Success requires all three at once: a 2xx status, `success == true`,
/// and a non-empty `video_url`. A body that does not decode is a malformed
/// response regardless of status, matching the single catch-all failure
/// path of the protocol.
pub fn parse_response(status: StatusCode, body: &str) -> Result<GenerationSuccess, ApiError> {
    let response: GenerationResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed {
            detail: e.to_string(),
        })?;

    let video_url = response.video_url.filter(|url| !url.is_empty());

    match video_url {
        Some(video_url) if status.is_success() && response.success => Ok(GenerationSuccess {
            video_url,
            message: response.message,
        }),
        _ => Err(ApiError::Rejected {
            message: response.message,
        }),
    }
}

/// Resolve a possibly server-relative media URL against the API base.
///
/// The server hands back paths like `/generated_media/scene.mp4`; absolute
/// URLs pass through untouched.
pub fn resolve_media_url(base_url: &str, video_url: &str) -> String {
    if video_url.starts_with("http://") || video_url.starts_with("https://") {
        video_url.to_string()
    } else if let Some(path) = video_url.strip_prefix('/') {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), video_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ServerConfig {
        ServerConfig {
            base_url: "http://127.0.0.1:5000".to_string(),
            timeout_seconds: 300,
            connect_timeout_seconds: 5,
        }
    }

    #[test]
    fn client_strips_trailing_slash() {
        let config = ServerConfig {
            base_url: "http://127.0.0.1:5000/".to_string(),
            ..test_config()
        };
        let client = GenerationClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn request_body_is_plain_json() {
        let request = GenerationRequest {
            prompt: "a bouncing ball".to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"prompt":"a bouncing ball"}"#);
    }

    #[test]
    fn request_body_escapes_json_special_characters() {
        let prompt = "quote \" brace { newline \n backslash \\";
        let request = GenerationRequest {
            prompt: prompt.to_string(),
        };
        let body = serde_json::to_string(&request).unwrap();

        let decoded: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded["prompt"], prompt);
    }

    #[test]
    fn request_body_allows_empty_prompt() {
        let request = GenerationRequest {
            prompt: String::new(),
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"prompt":""}"#);
    }

    #[test]
    fn parse_success_response() {
        let result = parse_response(
            StatusCode::OK,
            r#"{"success": true, "video_url": "https://x/y.mp4", "message": "done"}"#,
        );
        let success = result.unwrap();
        assert_eq!(success.video_url, "https://x/y.mp4");
        assert_eq!(success.message.as_deref(), Some("done"));
    }

    #[test]
    fn parse_rejection_keeps_server_message() {
        let result = parse_response(
            StatusCode::OK,
            r#"{"success": false, "message": "quota exceeded"}"#,
        );
        match result.unwrap_err() {
            ApiError::Rejected { message } => {
                assert_eq!(message.as_deref(), Some("quota exceeded"));
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn parse_success_flag_without_video_url_is_rejection() {
        let result = parse_response(StatusCode::OK, r#"{"success": true}"#);
        assert!(matches!(result, Err(ApiError::Rejected { .. })));
    }

    #[test]
    fn parse_empty_video_url_is_rejection() {
        let result = parse_response(StatusCode::OK, r#"{"success": true, "video_url": ""}"#);
        assert!(matches!(result, Err(ApiError::Rejected { .. })));
    }

    #[test]
    fn parse_non_2xx_with_well_formed_body_is_rejection() {
        let result = parse_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"success": true, "video_url": "https://x/y.mp4"}"#,
        );
        assert!(matches!(result, Err(ApiError::Rejected { .. })));
    }

    #[test]
    fn parse_unparseable_body_is_malformed() {
        let result = parse_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Malformed { .. })));
    }

    #[test]
    fn parse_missing_fields_default_to_rejection() {
        let result = parse_response(StatusCode::OK, "{}");
        assert!(matches!(
            result,
            Err(ApiError::Rejected { message: None })
        ));
    }

    #[test]
    fn resolve_keeps_absolute_urls() {
        assert_eq!(
            resolve_media_url("http://127.0.0.1:5000", "https://cdn/x.mp4"),
            "https://cdn/x.mp4"
        );
    }

    #[test]
    fn resolve_joins_server_relative_paths() {
        assert_eq!(
            resolve_media_url("http://127.0.0.1:5000", "/generated_media/scene.mp4"),
            "http://127.0.0.1:5000/generated_media/scene.mp4"
        );
    }

    #[test]
    fn resolve_joins_bare_relative_paths() {
        assert_eq!(
            resolve_media_url("http://127.0.0.1:5000/", "scene.mp4"),
            "http://127.0.0.1:5000/scene.mp4"
        );
    }
}
