use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use std::borrow::Cow;

pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonEmphasis {
    /// Filled with the primary color.
    #[default]
    Primary,
    /// Outlined in the primary color.
    Secondary,
}

/// Full-width button that yields `message` when activated while enabled.
#[derive(Debug, Clone)]
pub struct ActionButton<'a, M> {
    label: &'a str,
    message: M,
    theme: Theme,
    emphasis: ButtonEmphasis,
    enabled: bool,
    uppercase: bool,
    focused: bool,
}

impl<'a, M: Clone> ActionButton<'a, M> {
    pub fn new(label: &'a str, message: M, theme: Theme) -> Self {
        Self {
            label,
            message,
            theme,
            emphasis: ButtonEmphasis::Primary,
            enabled: true,
            uppercase: true,
            focused: false,
        }
    }

    pub fn emphasis(mut self, emphasis: ButtonEmphasis) -> Self {
        self.emphasis = emphasis;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Returns the button's message, or `None` while disabled.
    pub fn activate(&self) -> Option<M> {
        self.enabled.then(|| self.message.clone())
    }

    pub fn display_label(&self) -> Cow<'a, str> {
        if self.uppercase {
            Cow::Owned(self.label.to_uppercase())
        } else {
            Cow::Borrowed(self.label)
        }
    }

    fn styles(&self) -> (Style, Style, Style) {
        let theme = &self.theme;
        if !self.enabled {
            let muted = Style::default()
                .fg(theme.disabled)
                .add_modifier(Modifier::DIM);
            return (Style::default(), muted, muted);
        }

        let (fill, border, label) = match self.emphasis {
            ButtonEmphasis::Primary => (
                Style::default().bg(theme.primary),
                Style::default().fg(theme.primary),
                Style::default()
                    .fg(theme.on_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            ButtonEmphasis::Secondary => (
                Style::default(),
                Style::default().fg(theme.primary),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
        };

        if self.focused {
            (fill, border, label.add_modifier(Modifier::UNDERLINED))
        } else {
            (fill, border, label)
        }
    }
}

impl<M: Clone> Widget for &ActionButton<'_, M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            height: area.height.min(BUTTON_HEIGHT),
            ..area
        };
        if area.is_empty() {
            return;
        }

        let (fill, border, label) = self.styles();
        let border_type = if self.focused && self.enabled {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border)
            .style(fill);

        Paragraph::new(Line::from(Span::styled(self.display_label(), label)))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
