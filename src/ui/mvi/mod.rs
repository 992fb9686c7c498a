//! Unidirectional data flow primitives for the UI layer.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views read a state snapshot once per frame and report interaction as
//! intents. Only the reducer produces new states.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
