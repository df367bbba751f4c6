use crate::mvi::UiState;

pub const PENDING_STATUS: &str = "Processing... Please wait, this can take a moment.";
pub const SUCCESS_STATUS: &str = "Animation generated successfully!";

/// Visual weight of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Success,
    Error,
}

/// How the last cycle ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success { video_url: String },
    Failure { message: String },
}

/// Lifecycle of one generation request.
///
/// Everything the view needs is derived from this value, never stored
/// beside it: trigger enablement, status line, and which of the video
/// panel or placeholder is visible. That keeps the presentation states
/// mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Pending,
    Resolved(Outcome),
}

impl UiState for GenerationState {}

impl GenerationState {
    /// The trigger is disabled only while a request is in flight. A
    /// resolved state, success or failure, is interactable again.
    pub fn trigger_enabled(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Status line text and tone, `None` before the first submission.
    pub fn status_line(&self) -> Option<(String, StatusTone)> {
        match self {
            Self::Idle => None,
            Self::Pending => Some((PENDING_STATUS.to_string(), StatusTone::Pending)),
            Self::Resolved(Outcome::Success { .. }) => {
                Some((SUCCESS_STATUS.to_string(), StatusTone::Success))
            }
            Self::Resolved(Outcome::Failure { message }) => {
                Some((message.clone(), StatusTone::Error))
            }
        }
    }

    /// URL of the video panel, present only after a successful cycle.
    pub fn video_url(&self) -> Option<&str> {
        match self {
            Self::Resolved(Outcome::Success { video_url }) => Some(video_url),
            _ => None,
        }
    }

    /// The placeholder fills the result area whenever no video is shown.
    pub fn placeholder_visible(&self) -> bool {
        self.video_url().is_none()
    }
}
