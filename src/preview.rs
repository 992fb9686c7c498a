//! Headless rendering of canned login states.

use crate::credentials::Credentials;
use crate::ui::login::{LoginScreen, LoginScreenModel, LoginViewState, ScreenSettings};
use crate::ui::text::{TextResolver, UiText};
use clap::ValueEnum;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

pub const SAMPLE_EMAIL: &str = "Test@testface.com";
pub const SAMPLE_PASSWORD: &str = "PASSWORD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewState {
    Initial,
    Active,
    Submitting,
    SubmissionError,
    FieldErrors,
}

impl PreviewState {
    pub const ALL: [PreviewState; 5] = [
        PreviewState::Initial,
        PreviewState::Active,
        PreviewState::Submitting,
        PreviewState::SubmissionError,
        PreviewState::FieldErrors,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PreviewState::Initial => "initial",
            PreviewState::Active => "active",
            PreviewState::Submitting => "submitting",
            PreviewState::SubmissionError => "submission-error",
            PreviewState::FieldErrors => "field-errors",
        }
    }

    pub fn view_state(self) -> LoginViewState {
        let credentials = Credentials::new(SAMPLE_EMAIL, SAMPLE_PASSWORD);
        match self {
            PreviewState::Initial => LoginViewState::Initial,
            PreviewState::Active => LoginViewState::active(credentials),
            PreviewState::Submitting => LoginViewState::Submitting { credentials },
            PreviewState::SubmissionError => LoginViewState::SubmissionError {
                credentials,
                error_message: UiText::plain("Something went wrong."),
            },
            PreviewState::FieldErrors => LoginViewState::Active {
                credentials,
                email_error: Some(UiText::plain("Please enter an email.")),
                password_error: Some(UiText::plain("Please enter a password")),
            },
        }
    }
}

/// Renders `state` into a fresh buffer of the given size.
pub fn render_preview(
    state: &LoginViewState,
    settings: ScreenSettings,
    strings: &dyn TextResolver,
    width: u16,
    height: u16,
) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let model = LoginScreenModel::compose(state, strings);
    let screen = LoginScreen::new(&model, settings);
    (&screen).render(area, &mut buf);
    buf
}

/// Buffer contents as text, one line per row, trailing spaces trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect();
        rows.push(row.trim_end().to_string());
    }
    rows.join("\n")
}
