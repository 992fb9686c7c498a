pub mod app;
pub mod components;
pub mod events;
pub mod input;
pub mod layout;
pub mod login;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod text;
pub mod theme;
