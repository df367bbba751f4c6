use std::sync::mpsc::Sender;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{ApiError, GenerationBackend, GenerationClient, GenerationRequest, GenerationSuccess};
use crate::generation::{GenerationIntent, GenerationReducer, GenerationState};
use crate::mvi::Reducer;
use crate::player::VideoPlayer;
use crate::ui::events::AppEvent;

/// UI-side application state.
///
/// Holds the prompt buffer and the generation state machine; the network
/// call runs on the tokio runtime and reports back through the event
/// channel, so the `Pending` phase never blocks input handling.
pub struct App {
    state: GenerationState,
    prompt: String,
    client: GenerationClient,
    player: Box<dyn VideoPlayer>,
    events_tx: Sender<AppEvent>,
    runtime: tokio::runtime::Handle,
    ticks_pending: u64,
    should_quit: bool,
}

impl App {
    pub fn new(
        client: GenerationClient,
        player: Box<dyn VideoPlayer>,
        events_tx: Sender<AppEvent>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            state: GenerationState::default(),
            prompt: String::new(),
            client,
            player,
            events_tx,
            runtime,
            ticks_pending: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Monotonic while a request is in flight; drives the spinner.
    pub fn ticks_pending(&self) -> u64 {
        self.ticks_pending
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.prompt.clear(),
            KeyCode::Enter => self.on_trigger(),
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.prompt.push(c);
            }
            _ => {}
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        self.prompt.push_str(text);
    }

    pub fn on_tick(&mut self) {
        if matches!(self.state, GenerationState::Pending) {
            self.ticks_pending += 1;
        } else {
            self.ticks_pending = 0;
        }
    }

    /// Fire the trigger: transition to pending and launch the request.
    ///
    /// A disabled trigger (request already in flight) makes this a no-op,
    /// so at most one request is outstanding at a time.
    fn on_trigger(&mut self) {
        if !self.state.trigger_enabled() {
            return;
        }

        let request = GenerationRequest {
            prompt: self.prompt.clone(),
        };

        self.apply(GenerationIntent::Submit);

        let client = self.client.clone();
        let tx = self.events_tx.clone();
        self.runtime.spawn(async move {
            let settled = client.generate(&request).await;
            // Receiver gone means the UI is shutting down; nothing to do.
            let _ = tx.send(AppEvent::Settled(settled));
        });
    }

    /// Apply the settlement posted by the request task.
    ///
    /// `Settled` always yields a resolved state, which re-enables the
    /// trigger whatever happened on the wire. Playback refusals are
    /// expected (headless boxes, missing player) and only logged.
    pub fn on_settled(&mut self, settled: Result<GenerationSuccess, ApiError>) {
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
    }

    fn apply(&mut self, intent: GenerationIntent) {
        self.state = GenerationReducer::reduce(self.state.clone(), intent);
    }
}
