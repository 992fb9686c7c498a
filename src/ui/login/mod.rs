//! Login screen feature module.
//!
//! - `state.rs` - view state enum
//! - `intent.rs` - messages reported by the screen
//! - `reducer.rs` - state transitions performed by the owner
//! - `screen.rs` - composition and rendering
//! - `focus.rs` - which control receives keys

mod focus;
mod intent;
mod reducer;
mod screen;
mod state;

pub use focus::Focus;
pub use intent::LoginIntent;
pub use reducer::LoginReducer;
pub use screen::{
    ButtonModel, FieldModel, LoginScreen, LoginScreenModel, ScreenLayout, ScreenSettings,
    DEFAULT_MASK, DEFAULT_MAX_WIDTH, MIN_COLUMN_WIDTH,
};
pub use state::LoginViewState;
