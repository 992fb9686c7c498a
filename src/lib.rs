pub mod config;
pub mod credentials;
pub mod logging;
pub mod preview;
pub mod service;
pub mod ui;
