use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const TOA_GREEN: Color = Color::Rgb(0x1e, 0xb9, 0x80);
pub const TOA_GREEN_DARK: Color = Color::Rgb(0x0f, 0x7a, 0x55);
pub const NIGHT_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const NIGHT_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const NIGHT_DISABLED: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const DAY_TEXT: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const DAY_BORDER: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const DAY_DISABLED: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ON_PRIMARY: Color = Color::Rgb(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Color tokens shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub on_primary: Color,
    pub text: Color,
    pub border: Color,
    pub disabled: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: TOA_GREEN,
            on_primary: ON_PRIMARY,
            text: NIGHT_TEXT,
            border: NIGHT_BORDER,
            disabled: NIGHT_DISABLED,
            error: STATUS_ERROR,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: TOA_GREEN_DARK,
            on_primary: ON_PRIMARY,
            text: DAY_TEXT,
            border: DAY_BORDER,
            disabled: DAY_DISABLED,
            error: STATUS_ERROR,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}
