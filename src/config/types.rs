use crate::service::ScriptedOutcome;
use crate::ui::login::{ScreenSettings, DEFAULT_MASK, DEFAULT_MAX_WIDTH};
use crate::ui::text::{StringId, Strings};
use crate::ui::theme::{Theme, ThemeMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub login: LoginConfig,
    /// Overrides for the built-in string table.
    pub strings: HashMap<StringId, String>,
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color palette (default: dark).
    pub theme: ThemeMode,
    /// Render button labels upper-cased (default: true).
    pub uppercase_buttons: bool,
    /// Glyph drawn for each password character. Exactly one char.
    pub mask_char: String,
    /// Spinner and input poll interval in milliseconds (default: 100).
    pub tick_rate_ms: u64,
    /// Maximum width of the form column (default: 48).
    pub max_width: u16,
}

/// Behaviour of the scripted login service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Answer returned for every submission (default: unavailable).
    pub outcome: ScriptedOutcome,
    /// Simulated latency in milliseconds (default: 1200).
    pub delay_ms: u64,
}

fn default_mask_char() -> String {
    DEFAULT_MASK.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            uppercase_buttons: true,
            mask_char: default_mask_char(),
            tick_rate_ms: 100,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            outcome: ScriptedOutcome::default(),
            delay_ms: 1200,
        }
    }
}

impl UiConfig {
    /// First char of `mask_char`, or the default glyph if it is empty.
    pub fn mask_glyph(&self) -> char {
        self.mask_char.chars().next().unwrap_or(DEFAULT_MASK)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            theme: Theme::for_mode(self.theme),
            uppercase_buttons: self.uppercase_buttons,
            mask: self.mask_glyph(),
            max_width: self.max_width,
        }
    }
}

impl LoginConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Config {
    pub fn strings(&self) -> Strings {
        Strings::with_overrides(self.strings.clone())
    }
}
