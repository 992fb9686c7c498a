//! Composition of the login screen.
//!
//! [`LoginScreenModel::compose`] maps a [`LoginViewState`] to a fully
//! resolved description of what is on screen. [`LoginScreen`] lays that
//! model out with the shared form widgets. Neither keeps state between
//! frames.

use crate::ui::components::{
    ActionButton, BusyIndicator, ButtonEmphasis, Obfuscation, TextField, BUTTON_HEIGHT,
};
use crate::ui::layout::{centered_column, centered_rect_by_size, take_rows};
use crate::ui::login::focus::Focus;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginViewState;
use crate::ui::text::{StringId, TextResolver, UiText};
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

pub const DEFAULT_MASK: char = '_';
pub const DEFAULT_MAX_WIDTH: u16 = 48;
pub const MIN_COLUMN_WIDTH: u16 = 20;
const SCREEN_PADDING: u16 = 2;

const APP_LOGO: [&str; 3] = [
    "╔╦╗╔═╗╔═╗  ✓",
    " ║ ║ ║╠═╣   ",
    " ╩ ╚═╝╩ ╩   ",
];

/// Presentation options that do not depend on the view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    pub theme: Theme,
    pub uppercase_buttons: bool,
    pub mask: char,
    pub max_width: u16,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            theme: Theme::dark(),
            uppercase_buttons: true,
            mask: DEFAULT_MASK,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldModel {
    pub text: String,
    pub label: String,
    pub error: Option<String>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonModel {
    pub label: String,
    pub enabled: bool,
}

/// Everything the login screen shows for one view state, with all text
/// already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreenModel {
    pub email: FieldModel,
    pub password: FieldModel,
    pub banner: Option<String>,
    pub login: ButtonModel,
    pub sign_up: ButtonModel,
    pub busy: bool,
    pub busy_message: String,
    pub hints: String,
}

impl LoginScreenModel {
    pub fn compose(state: &LoginViewState, strings: &dyn TextResolver) -> Self {
        let (email_error, password_error, banner) = match state {
            LoginViewState::Initial | LoginViewState::Submitting { .. } => (None, None, None),
            LoginViewState::Active {
                email_error,
                password_error,
                ..
            } => (
                resolve_message(email_error.as_ref(), strings),
                resolve_message(password_error.as_ref(), strings),
                None,
            ),
            LoginViewState::SubmissionError { error_message, .. } => {
                (None, None, resolve_message(Some(error_message), strings))
            }
        };

        let credentials = state.credentials();
        let input_enabled = state.input_enabled();
        let button_enabled = state.button_enabled();

        Self {
            email: FieldModel {
                text: credentials.email.as_str().to_string(),
                label: strings.resolve(StringId::Email).to_string(),
                error: email_error,
                enabled: input_enabled,
            },
            password: FieldModel {
                text: credentials.password.as_str().to_string(),
                label: strings.resolve(StringId::Password).to_string(),
                error: password_error,
                enabled: input_enabled,
            },
            banner,
            login: ButtonModel {
                label: strings.resolve(StringId::LogIn).to_string(),
                enabled: button_enabled,
            },
            sign_up: ButtonModel {
                label: strings.resolve(StringId::SignUp).to_string(),
                enabled: button_enabled,
            },
            busy: state.is_busy(),
            busy_message: strings.resolve(StringId::SigningIn).to_string(),
            hints: strings.resolve(StringId::KeyHints).to_string(),
        }
    }

    pub fn shows_inline_errors(&self) -> bool {
        self.email.error.is_some() || self.password.error.is_some()
    }

    pub fn is_enabled(&self, focus: Focus) -> bool {
        match focus {
            Focus::Email => self.email.enabled,
            Focus::Password => self.password.enabled,
            Focus::Login => self.login.enabled,
            Focus::SignUp => self.sign_up.enabled,
        }
    }
}

fn resolve_message(message: Option<&UiText>, strings: &dyn TextResolver) -> Option<String> {
    message
        .map(|text| text.resolve(strings))
        .filter(|text| !text.is_empty())
}

/// Rows assigned to each part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub logo: Rect,
    pub email: Rect,
    pub password: Rect,
    pub banner: Option<Rect>,
    pub login: Rect,
    pub sign_up: Rect,
    /// Span from the first input to the last button.
    pub inputs: Rect,
    pub hints: Rect,
}

pub struct LoginScreen<'a> {
    model: &'a LoginScreenModel,
    settings: ScreenSettings,
    focus: Option<Focus>,
    spinner_tick: u8,
}

impl<'a> LoginScreen<'a> {
    pub fn new(model: &'a LoginScreenModel, settings: ScreenSettings) -> Self {
        Self {
            model,
            settings,
            focus: None,
            spinner_tick: 0,
        }
    }

    pub fn focus(mut self, focus: Option<Focus>) -> Self {
        self.focus = focus;
        self
    }

    pub fn spinner_tick(mut self, tick: u8) -> Self {
        self.spinner_tick = tick;
        self
    }

    fn is_focused(&self, control: Focus) -> bool {
        self.focus == Some(control)
    }

    pub fn email_field(&self) -> TextField<'a> {
        let model: &'a LoginScreenModel = self.model;
        let field = &model.email;
        TextField::new(&field.text, &field.label, self.settings.theme)
            .error(field.error.as_deref())
            .enabled(field.enabled)
            .focused(self.is_focused(Focus::Email))
    }

    pub fn password_field(&self) -> TextField<'a> {
        let model: &'a LoginScreenModel = self.model;
        let field = &model.password;
        TextField::new(&field.text, &field.label, self.settings.theme)
            .error(field.error.as_deref())
            .obfuscation(Obfuscation::Masked(self.settings.mask))
            .enabled(field.enabled)
            .focused(self.is_focused(Focus::Password))
    }

    pub fn login_button(&self) -> ActionButton<'a, LoginIntent> {
        let model: &'a LoginScreenModel = self.model;
        let button = &model.login;
        ActionButton::new(&button.label, LoginIntent::LoginClicked, self.settings.theme)
            .emphasis(ButtonEmphasis::Primary)
            .enabled(button.enabled)
            .uppercase(self.settings.uppercase_buttons)
            .focused(self.is_focused(Focus::Login))
    }

    pub fn sign_up_button(&self) -> ActionButton<'a, LoginIntent> {
        let model: &'a LoginScreenModel = self.model;
        let button = &model.sign_up;
        ActionButton::new(&button.label, LoginIntent::SignUpClicked, self.settings.theme)
            .emphasis(ButtonEmphasis::Secondary)
            .enabled(button.enabled)
            .uppercase(self.settings.uppercase_buttons)
            .focused(self.is_focused(Focus::SignUp))
    }

    pub fn layout(&self, area: Rect) -> ScreenLayout {
        let column = centered_column(
            area,
            self.settings.max_width.max(MIN_COLUMN_WIDTH),
            SCREEN_PADDING,
        );
        let mut cursor = column.y;

        take_rows(column, &mut cursor, 1);
        let logo = take_rows(column, &mut cursor, APP_LOGO.len() as u16);
        take_rows(column, &mut cursor, 1);
        let email = take_rows(column, &mut cursor, self.email_field().height());
        take_rows(column, &mut cursor, 1);
        let password = take_rows(column, &mut cursor, self.password_field().height());
        let banner = self.model.banner.as_ref().map(|_| {
            take_rows(column, &mut cursor, 1);
            take_rows(column, &mut cursor, 1)
        });
        take_rows(column, &mut cursor, 2);
        let login = take_rows(column, &mut cursor, BUTTON_HEIGHT);
        take_rows(column, &mut cursor, 1);
        let sign_up = take_rows(column, &mut cursor, BUTTON_HEIGHT);

        let inputs = Rect {
            x: column.x,
            y: email.y,
            width: column.width,
            height: (sign_up.y + sign_up.height).saturating_sub(email.y),
        };

        // Hints stay on the last row when there is room below the buttons.
        let last_row = area.y + area.height.saturating_sub(1);
        let hints = if area.height > 0 && last_row > cursor {
            Rect::new(area.x, last_row, area.width, 1)
        } else {
            Rect::new(area.x, last_row, area.width, 0)
        };

        ScreenLayout {
            logo,
            email,
            password,
            banner,
            login,
            sign_up,
            inputs,
            hints,
        }
    }

    /// Where the terminal cursor belongs, if a field has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let layout = self.layout(area);
        match self.focus? {
            Focus::Email => self.email_field().cursor_position(layout.email),
            Focus::Password => self.password_field().cursor_position(layout.password),
            Focus::Login | Focus::SignUp => None,
        }
    }
}

impl Widget for &LoginScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.settings.theme;
        let layout = self.layout(area);

        let logo_lines: Vec<Line> = APP_LOGO
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(theme.primary))))
            .collect();
        Paragraph::new(logo_lines)
            .alignment(Alignment::Center)
            .render(layout.logo, buf);

        (&self.email_field()).render(layout.email, buf);
        (&self.password_field()).render(layout.password, buf);

        if let (Some(banner), Some(rect)) = (&self.model.banner, layout.banner) {
            Paragraph::new(Span::styled(
                banner.as_str(),
                Style::default().fg(theme.error),
            ))
            .wrap(Wrap { trim: true })
            .render(rect, buf);
        }

        (&self.login_button()).render(layout.login, buf);
        (&self.sign_up_button()).render(layout.sign_up, buf);

        Paragraph::new(Span::styled(
            self.model.hints.as_str(),
            Style::default().fg(theme.border).add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center)
        .render(layout.hints, buf);

        // Drawn last so the column keeps its layout and contents underneath.
        if self.model.busy {
            let indicator =
                BusyIndicator::new(&self.model.busy_message, self.spinner_tick, theme);
            let (width, height) = indicator.size();
            let overlay = centered_rect_by_size(layout.inputs, width, height);
            (&indicator).render(overlay, buf);
        }
    }
}
