//! Unidirectional data-flow primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! State transitions happen in one place only: the reducer. Views render
//! from state and never mutate it directly, which is what makes the
//! request lifecycle (idle → pending → resolved) checkable in isolation.

/// Marker trait for state objects.
///
/// States are immutable snapshots: cloned to produce successors, comparable
/// to detect changes, and self-contained enough to render a view from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and settlement events that a
/// reducer turns into new states.
pub trait Intent: Send + 'static {}

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
