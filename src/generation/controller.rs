use crate::api::{GenerationBackend, GenerationRequest};
use crate::generation::intent::GenerationIntent;
use crate::generation::reducer::GenerationReducer;
use crate::generation::state::GenerationState;
use crate::mvi::Reducer;
use crate::player::VideoPlayer;

/// Mediates exactly one request/response cycle per trigger activation.
///
/// The controller owns no UI: it applies intents to the reducer and hands
/// the resulting state to whoever renders it. Backend and player are
/// injected so the whole cycle runs against stubs in tests and against
/// reqwest plus an external player in production.
pub struct RequestController<B> {
    backend: B,
    player: Box<dyn VideoPlayer>,
    state: GenerationState,
}

impl<B: GenerationBackend> RequestController<B> {
    pub fn new(backend: B, player: Box<dyn VideoPlayer>) -> Self {
        Self {
            backend,
            player,
            state: GenerationState::default(),
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    /// Run one full cycle: pending, network call, resolved.
    ///
    /// Whatever the backend does, the one `Settled` intent at the end is
    /// what re-enables the trigger, so re-enablement happens exactly once
    /// per cycle. Playback is attempted only after the state is resolved;
    /// a refusing player is logged and swallowed, never an error.
    pub async fn submit(&mut self, prompt: &str) -> &GenerationState {
        if !self.state.trigger_enabled() {
            tracing::debug!("submit ignored, request already in flight");
            return &self.state;
        }

        self.apply(GenerationIntent::Submit);

        let request = GenerationRequest {
            prompt: prompt.to_string(),
        };
        let settled = self.backend.generate(&request).await;

        let play_url = settled
            .as_ref()
            .ok()
            .map(|success| success.video_url.clone());

        self.apply(GenerationIntent::Settled(settled));

        if let Some(url) = play_url {
            if let Err(err) = self.player.play(&url) {
                tracing::warn!(error = %err, url = %url, "playback was refused");
            }
        }

        &self.state
    }

    pub fn apply(&mut self, intent: GenerationIntent) {
        self.state = GenerationReducer::reduce(self.state.clone(), intent);
    }
}
