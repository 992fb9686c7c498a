use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};
use std::borrow::Cow;

/// Height of the bordered input box, without the error row.
pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Obfuscation {
    #[default]
    None,
    /// Every character is drawn as the given glyph.
    Masked(char),
}

impl Obfuscation {
    pub fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            Obfuscation::None => Cow::Borrowed(text),
            Obfuscation::Masked(glyph) => Cow::Owned(text.chars().map(|_| *glyph).collect()),
        }
    }
}

/// Bordered single-line input with the label in its top border and an
/// optional error line underneath.
#[derive(Debug, Clone)]
pub struct TextField<'a> {
    text: &'a str,
    label: &'a str,
    error: Option<&'a str>,
    theme: Theme,
    obfuscation: Obfuscation,
    enabled: bool,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(text: &'a str, label: &'a str, theme: Theme) -> Self {
        Self {
            text,
            label,
            error: None,
            theme,
            obfuscation: Obfuscation::None,
            enabled: true,
            focused: false,
        }
    }

    /// Empty messages count as no error.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error.filter(|message| !message.is_empty());
        self
    }

    pub fn obfuscation(mut self, obfuscation: Obfuscation) -> Self {
        self.obfuscation = obfuscation;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error_message(&self) -> Option<&'a str> {
        self.error
    }

    pub fn displayed_text(&self) -> Cow<'a, str> {
        self.obfuscation.apply(self.text)
    }

    pub fn height(&self) -> u16 {
        if self.error.is_some() {
            FIELD_HEIGHT + 1
        } else {
            FIELD_HEIGHT
        }
    }

    /// Applies an edit key and returns the complete new text.
    ///
    /// Returns `None` when disabled or when the key does not edit the text.
    pub fn apply_key(&self, key: KeyEvent) -> Option<String> {
        if !self.enabled || key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(ch) if ctrl && ch.eq_ignore_ascii_case(&'u') => {
                (!self.text.is_empty()).then(String::new)
            }
            KeyCode::Char(ch)
                if !ctrl && !ch.is_control() && !key.modifiers.contains(KeyModifiers::ALT) =>
            {
                let mut text = self.text.to_string();
                text.push(ch);
                Some(text)
            }
            KeyCode::Backspace => {
                let mut chars = self.text.chars();
                chars.next_back()?;
                Some(chars.as_str().to_string())
            }
            _ => None,
        }
    }

    /// Appends pasted text with line breaks and other control characters removed.
    pub fn apply_paste(&self, pasted: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let pasted: String = pasted.chars().filter(|ch| !ch.is_control()).collect();
        if pasted.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.text, pasted))
    }

    /// Terminal cursor position when this field has focus.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.enabled || area.width < 3 || area.height < FIELD_HEIGHT {
            return None;
        }
        let inner_width = area.width - 2;
        let visible = visible_tail(&self.displayed_text(), inner_width.saturating_sub(1) as usize)
            .chars()
            .count() as u16;
        Some((area.x + 1 + visible.min(inner_width - 1), area.y + 1))
    }

    fn border_style(&self) -> Style {
        let theme = &self.theme;
        if self.error.is_some() {
            Style::default().fg(theme.error)
        } else if !self.enabled {
            Style::default().fg(theme.disabled)
        } else if self.focused {
            Style::default().fg(theme.primary)
        } else {
            Style::default().fg(theme.border)
        }
    }
}

impl Widget for &TextField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let theme = &self.theme;
        let field_area = Rect {
            height: area.height.min(FIELD_HEIGHT),
            ..area
        };

        let label_style = if self.enabled {
            self.border_style()
        } else {
            self.border_style().add_modifier(Modifier::DIM)
        };
        let border_type = if self.focused && self.enabled {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(self.border_style())
            .title(Span::styled(format!(" {} ", self.label), label_style));

        let text_style = if self.enabled {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.disabled)
        };
        let displayed = self.displayed_text();
        let inner_width = field_area.width.saturating_sub(3) as usize;
        let visible = visible_tail(&displayed, inner_width).to_string();

        Paragraph::new(Line::from(Span::styled(visible, text_style)))
            .block(block)
            .render(field_area, buf);

        if let Some(error) = self.error {
            if area.height > FIELD_HEIGHT {
                let error_area = Rect {
                    x: area.x + 1,
                    y: area.y + FIELD_HEIGHT,
                    width: area.width.saturating_sub(1),
                    height: 1,
                };
                Paragraph::new(Span::styled(error, Style::default().fg(theme.error)))
                    .render(error_area, buf);
            }
        }
    }
}

/// Last `width` characters of `text`, so the end of the input stays visible.
fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_emits_full_text() {
        let field = TextField::new("ab", "Email", Theme::dark());
        assert_eq!(field.apply_key(key(KeyCode::Char('c'))), Some("abc".to_string()));
    }

    #[test]
    fn backspace_removes_last_char() {
        let field = TextField::new("héé", "Email", Theme::dark());
        assert_eq!(field.apply_key(key(KeyCode::Backspace)), Some("hé".to_string()));
        let empty = TextField::new("", "Email", Theme::dark());
        assert_eq!(empty.apply_key(key(KeyCode::Backspace)), None);
    }

    #[test]
    fn ctrl_u_clears() {
        let field = TextField::new("abc", "Email", Theme::dark());
        let clear = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(field.apply_key(clear), Some(String::new()));
    }

    #[test]
    fn disabled_field_ignores_edits() {
        let field = TextField::new("abc", "Email", Theme::dark()).enabled(false);
        assert_eq!(field.apply_key(key(KeyCode::Char('d'))), None);
        assert_eq!(field.apply_paste("xyz"), None);
    }

    #[test]
    fn paste_drops_line_breaks() {
        let field = TextField::new("a", "Email", Theme::dark());
        assert_eq!(field.apply_paste("b\r\nc"), Some("abc".to_string()));
        assert_eq!(field.apply_paste("\n"), None);
    }

    #[test]
    fn paste_drops_tabs_and_escape_sequences() {
        let field = TextField::new("a", "Password", Theme::dark());
        assert_eq!(
            field.apply_paste("b\tc\u{1b}[2J"),
            Some("abc[2J".to_string())
        );
        assert_eq!(field.apply_paste("\t\u{7f}"), None);
    }

    #[test]
    fn empty_error_is_no_error() {
        let field = TextField::new("", "Email", Theme::dark()).error(Some(""));
        assert_eq!(field.error_message(), None);
        assert_eq!(field.height(), FIELD_HEIGHT);
    }

    #[test]
    fn mask_replaces_every_char() {
        let field = TextField::new("pässword", "Password", Theme::dark())
            .obfuscation(Obfuscation::Masked('•'));
        assert_eq!(field.displayed_text(), "••••••••");
    }

    #[test]
    fn visible_tail_keeps_end() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 5), "abc");
    }
}
