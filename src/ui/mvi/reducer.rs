use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform I/O.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
