//! Title row above the list, with the summary on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

pub const TITLE: &str = "Suas senhas";

pub struct Metadata<'a> {
    summary: &'a str,
}

impl<'a> Metadata<'a> {
    pub fn new(summary: &'a str) -> Self {
        Self { summary }
    }
}

impl<'a> Widget for Metadata<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        if area.width > 1 {
            let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
            let max = (area.width - 1) as usize;
            buf.set_stringn(area.x + 1, area.y, TITLE, max, title_style);
        }

        let width = self.summary.chars().count() as u16;
        let x = area.x + area.width.saturating_sub(width + 1);
        buf.set_string(x, area.y, self.summary, Style::default().fg(Color::Gray));
    }
}
