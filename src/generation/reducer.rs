use crate::generation::intent::GenerationIntent;
use crate::generation::state::{GenerationState, Outcome};
use crate::mvi::Reducer;

pub struct GenerationReducer;

impl Reducer for GenerationReducer {
    type State = GenerationState;
    type Intent = GenerationIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // A submit while already pending lands on the same state; the
            // caller is responsible for not issuing a second request (it
            // checks `trigger_enabled` before firing).
            GenerationIntent::Submit => GenerationState::Pending,
            GenerationIntent::Settled(result) => match result {
                Ok(success) => GenerationState::Resolved(Outcome::Success {
                    video_url: success.video_url,
                }),
                Err(err) => GenerationState::Resolved(Outcome::Failure {
                    message: err.user_message(),
                }),
            },
            GenerationIntent::Reset => GenerationState::Idle,
        }
    }
}
