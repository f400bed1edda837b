//! Search Bar Component
//!
//! Single-line input showing the search buffer, or a placeholder when empty.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const PLACEHOLDER: &str = "Qual senha você procura?";

pub struct SearchBar<'a> {
    value: &'a str,
    focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value, focused: false }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Terminal position of the cursor when `cursor` chars have been typed
    pub fn cursor_position(area: Rect, cursor: usize) -> Position {
        let max_x = area.right().saturating_sub(2);
        let x = (area.x + 3).saturating_add(cursor as u16).min(max_x);
        Position::new(x, area.y + 1)
    }
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { Color::Magenta } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let text = if self.value.is_empty() {
            Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.value, Style::default().fg(Color::White))
        };
        let line = Line::from(vec![Span::styled("/ ", Style::default().fg(border_color)), text]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}
