//! The generation request lifecycle as an explicit state machine.
//!
//! One cycle per trigger: `Idle --(Submit)--> Pending --(Settled)-->
//! Resolved`, and `Resolved` already behaves like an interactable idle
//! state. Transitions live in the reducer; the controller wires the
//! reducer to a backend and a player for headless use.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::RequestController;
pub use intent::GenerationIntent;
pub use reducer::GenerationReducer;
pub use state::{GenerationState, Outcome, StatusTone};
