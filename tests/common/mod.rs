//! Shared rendering helpers.

#![allow(dead_code)]

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use toa_login::preview::{buffer_to_text, render_preview};
use toa_login::ui::login::{LoginScreen, LoginScreenModel, LoginViewState, ScreenLayout, ScreenSettings};
use toa_login::ui::text::Strings;

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 32;

pub struct Rendered {
    pub buffer: Buffer,
    pub text: String,
    pub model: LoginScreenModel,
    pub layout: ScreenLayout,
}

pub fn render(state: &LoginViewState) -> Rendered {
    let settings = ScreenSettings::default();
    let strings = Strings::new();
    let buffer = render_preview(state, settings, &strings, WIDTH, HEIGHT);
    let text = buffer_to_text(&buffer);
    let model = LoginScreenModel::compose(state, &strings);
    let layout = LoginScreen::new(&model, settings).layout(area());
    Rendered {
        buffer,
        text,
        model,
        layout,
    }
}

pub fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

/// Text of one row inside `rect`, with box-drawing borders stripped.
pub fn row_text(buf: &Buffer, rect: Rect, dy: u16) -> String {
    let y = rect.y + dy;
    let row: String = (rect.x..rect.x + rect.width)
        .map(|x| buf[(x, y)].symbol())
        .collect();
    row.trim_matches(|c: char| c.is_whitespace() || "│┃╭╮╰╯┏┓┗┛─━".contains(c))
        .to_string()
}

/// Row index of the first line containing `needle`.
pub fn line_of(text: &str, needle: &str) -> Option<usize> {
    text.lines().position(|line| line.contains(needle))
}

pub fn has_fg(buf: &Buffer, color: Color) -> bool {
    buf.content.iter().any(|cell| cell.fg == color)
}
