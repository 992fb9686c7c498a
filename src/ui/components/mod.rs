//! Stateless form widgets shared across screens.
//!
//! Widgets are plain values built from props every frame. Interaction is
//! expressed as methods returning an optional message, so the owner decides
//! what to do with it and nothing is captured across renders.

mod busy;
mod button;
mod text_field;

pub use busy::{spinner_frame, BusyIndicator, SPINNER_FRAMES};
pub use button::{ActionButton, ButtonEmphasis, BUTTON_HEIGHT};
pub use text_field::{Obfuscation, TextField, FIELD_HEIGHT};
