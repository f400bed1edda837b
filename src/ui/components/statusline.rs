//! Status Line Component
//!
//! Displays mode indicator, messages, and list position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    item_count: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            item_count: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn item_count(mut self, selected: usize, total: usize) -> Self {
        self.item_count = Some((selected, total));
        self
    }
}

impl<'a> Widget for StatusLine<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mode_bg = match self.mode {
            InputMode::Normal => Color::Blue,
            InputMode::Search => Color::Magenta,
        };
        let mode_style = Style::default().fg(Color::Black).bg(mode_bg).add_modifier(Modifier::BOLD);
        let mode_text = format!(" {} ", self.mode.indicator());
        buf.set_string(area.x, area.y, &mode_text, mode_style);
        let x = area.x.saturating_add(mode_text.len() as u16 + 1);

        if let Some((msg, msg_type)) = self.message.filter(|_| x < area.right()) {
            let max = (area.right() - x) as usize;
            let style = Style::default().fg(msg_type.color()).bg(Color::DarkGray);
            buf.set_stringn(x, area.y, msg, max, style);
        }

        let Some((selected, total)) = self.item_count else { return };
        let right_text = format!("{}/{}", selected + 1, total);
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        let right_style = Style::default().fg(Color::Gray).bg(Color::DarkGray);
        buf.set_string(right_x, area.y, &right_text, right_style);
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn for_mode(mode: InputMode) -> Self {
        let hints = match mode {
            InputMode::Normal => vec![
                ("j/k", "navigate"),
                ("/", "search"),
                ("s", "show passwords"),
                ("C-r", "reload"),
                ("q", "quit"),
            ],
            InputMode::Search => vec![
                ("Enter", "filter"),
                ("Esc", "back"),
                ("C-u", "clear"),
            ],
        };
        Self { hints }
    }
}

impl<'a> Widget for HelpBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            let key_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(widget: impl Widget, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_status_line_shows_mode_message_and_position() {
        let status = StatusLine::new(InputMode::Search)
            .message("Stored logins are corrupt", MessageType::Error)
            .item_count(0, 2);

        let text = render_text(status, 60);
        assert!(text.starts_with(" SEARCH "));
        assert!(text.contains("Stored logins are corrupt"));
        assert!(text.trim_end().ends_with("1/2"));
    }

    #[test]
    fn test_zero_height_area_draws_nothing() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let empty = Rect::new(0, 1, 20, 0);

        StatusLine::new(InputMode::Normal).item_count(0, 3).render(empty, &mut buf);
        HelpBar::for_mode(InputMode::Normal).render(empty, &mut buf);

        assert_eq!(buf, Buffer::empty(Rect::new(0, 0, 20, 1)));
    }

    #[test]
    fn test_narrow_status_line_skips_message() {
        let status = StatusLine::new(InputMode::Search).message("hidden", MessageType::Error);
        let text = render_text(status, 6);
        assert!(!text.contains("hidden"));
    }

    #[test]
    fn test_help_bar_hints() {
        let text = render_text(HelpBar::for_mode(InputMode::Search), 60);
        assert!(text.contains("Enter filter"));
    }
}
