use thiserror::Error;

/// Failure modes of one generation call.
///
/// The sub-causes only exist to pick the message text; at the control-flow
/// level they are all handled the same way: converted to a status line and
/// the trigger re-enabled. None of them are fatal.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {detail}")]
    ClientBuild { detail: String },

    /// The request never produced a response: connection refused, DNS
    /// failure, timeout.
    #[error("request failed: {detail}")]
    Transport { detail: String },

    /// The server answered but declined: `success` false or absent, or no
    /// usable `video_url`. Carries the server-supplied reason when present.
    #[error("server rejected the request: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    /// The response body was not decodable JSON.
    #[error("malformed response body: {detail}")]
    Malformed { detail: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport {
            detail: err.to_string(),
        }
    }
}

impl ApiError {
    /// The string shown in the status line.
    ///
    /// Server rejections surface the server's own message with a generic
    /// fallback; everything that failed before a parseable response gets
    /// one generic connectivity message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message } => {
                let reason = message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or("Failed to generate animation.");
                format!("Error: {reason}")
            }
            ApiError::ClientBuild { .. }
            | ApiError::Transport { .. }
            | ApiError::Malformed { .. } => {
                "Error: Could not connect to the server or an unexpected error occurred."
                    .to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_uses_server_message() {
        let err = ApiError::Rejected {
            message: Some("quota exceeded".to_string()),
        };
        assert_eq!(err.user_message(), "Error: quota exceeded");
    }

    #[test]
    fn rejected_without_message_uses_fallback() {
        let err = ApiError::Rejected { message: None };
        assert_eq!(err.user_message(), "Error: Failed to generate animation.");
    }

    #[test]
    fn rejected_with_empty_message_uses_fallback() {
        let err = ApiError::Rejected {
            message: Some(String::new()),
        };
        assert_eq!(err.user_message(), "Error: Failed to generate animation.");
    }

    #[test]
    fn transport_and_malformed_share_generic_text() {
        let transport = ApiError::Transport {
            detail: "connection refused".to_string(),
        };
        let malformed = ApiError::Malformed {
            detail: "expected value at line 1".to_string(),
        };
        assert_eq!(transport.user_message(), malformed.user_message());
        assert!(transport.user_message().contains("Could not connect"));
    }
}
