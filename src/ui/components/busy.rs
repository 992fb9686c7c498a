use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget};

pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

/// Spinner box drawn on top of other content. Only its own area is cleared.
pub struct BusyIndicator<'a> {
    message: &'a str,
    tick: u8,
    theme: Theme,
}

impl<'a> BusyIndicator<'a> {
    pub fn new(message: &'a str, tick: u8, theme: Theme) -> Self {
        Self {
            message,
            tick,
            theme,
        }
    }

    /// Box size that fits the message, spinner and borders.
    pub fn size(&self) -> (u16, u16) {
        let chars = u16::try_from(self.message.chars().count()).unwrap_or(u16::MAX);
        (chars.saturating_add(8), 3)
    }
}

impl Widget for &BusyIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.primary));
        let line = Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(self.tick)),
                Style::default().fg(self.theme.primary),
            ),
            Span::styled(self.message, Style::default().fg(self.theme.text)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER_FRAMES.len() as u8));
    }

    #[test]
    fn size_saturates_for_long_messages() {
        let message = "x".repeat(70_000);
        let busy = BusyIndicator::new(&message, 0, Theme::dark());
        assert_eq!(busy.size(), (u16::MAX, 3));
        assert_eq!(BusyIndicator::new("Wait", 0, Theme::dark()).size(), (12, 3));
    }
}
