use crate::api::{ApiError, GenerationSuccess};
use crate::mvi::Intent;

/// Events that move a generation cycle forward.
#[derive(Debug, Clone)]
pub enum GenerationIntent {
    /// The user fired the trigger. Ignored while a request is in flight.
    Submit,
    /// The network call settled, one way or the other. Every error path
    /// funnels into this same intent, which is what makes trigger
    /// re-enablement unconditional.
    Settled(Result<GenerationSuccess, ApiError>),
    /// Drop any resolved outcome and return to a blank idle screen.
    Reset,
}

impl Intent for GenerationIntent {}
