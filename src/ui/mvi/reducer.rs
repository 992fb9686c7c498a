use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not perform side effects. Owners run effects after inspecting
    /// the returned state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
