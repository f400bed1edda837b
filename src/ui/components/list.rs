//! List View Component
//!
//! Displays logins in a scrollable list, one row per entry.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::logins::LoginData;
use crate::ui::renderer::Renderer;

const PASSWORD_MASK: &str = "••••••••";

#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    pub selected: Option<usize>,
    pub total: usize,
    list_state: ListState,
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
        self.list_state.select(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.select(compute_selection_after_total_change(self.selected, total));
    }

    pub fn move_up(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.unwrap_or(0).saturating_sub(1);
        self.select(Some(new_index));
    }

    pub fn move_down(&mut self) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.map_or(0, |i| (i + 1).min(self.total - 1));
        self.select(Some(new_index));
    }

    pub fn move_to_top(&mut self) {
        if self.total > 0 {
            self.select(Some(0));
        }
    }

    pub fn move_to_bottom(&mut self) {
        if self.total > 0 {
            self.select(Some(self.total - 1));
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.unwrap_or(0).saturating_sub(page_size);
        self.select(Some(new_index));
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.total == 0 {
            return;
        }
        let new_index = self.selected.map_or(0, |i| (i + page_size).min(self.total - 1));
        self.select(Some(new_index));
    }

    pub fn list_state_mut(&mut self) -> &mut ListState {
        &mut self.list_state
    }
}

fn compute_selection_after_total_change(selected: Option<usize>, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    match selected {
        Some(sel) if sel >= total => Some(total - 1),
        Some(sel) => Some(sel),
        None => Some(0),
    }
}

pub struct LoginList<'a> {
    items: &'a [LoginData],
    block: Option<Block<'a>>,
    highlight_style: Style,
    show_password: bool,
}

impl<'a> LoginList<'a> {
    pub fn new(items: &'a [LoginData]) -> Self {
        Self {
            items,
            block: None,
            highlight_style: Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD),
            show_password: false,
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn show_password(mut self, show: bool) -> Self {
        self.show_password = show;
        self
    }
}

fn build_selection_symbol(is_selected: bool) -> Span<'static> {
    if is_selected {
        Span::styled("▌ ", Style::default().fg(Color::Magenta).bg(Color::DarkGray))
    } else {
        Span::raw("  ")
    }
}

fn password_text(item: &LoginData, show_password: bool) -> &str {
    if show_password {
        item.password.as_str()
    } else {
        PASSWORD_MASK
    }
}

fn build_list_item<'a>(
    item: &'a LoginData,
    is_selected: bool,
    highlight_style: Style,
    show_password: bool,
) -> ListItem<'a> {
    let base_style = if is_selected { highlight_style } else { Style::default() };
    let dim = base_style.fg(Renderer::hex_color(0x4C566A));

    let title = Line::from(vec![
        build_selection_symbol(is_selected),
        Span::styled(item.service_name.as_str(), base_style.fg(Color::White)),
        Span::styled(format!("  {}", item.email), dim),
    ]);
    let secret = Line::from(vec![
        build_selection_symbol(is_selected),
        Span::styled(password_text(item, show_password), base_style.fg(Color::Green)),
    ]);

    let list_item = ListItem::new(vec![title, secret]);
    if is_selected {
        return list_item.style(highlight_style);
    }
    list_item
}

impl<'a> StatefulWidget for LoginList<'a> {
    type State = ListViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let selected = state.selected();

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = Some(i) == selected;
                build_list_item(item, is_selected, self.highlight_style, self.show_password)
            })
            .collect();

        let list = List::new(items);
        let list = match self.block {
            Some(block) => list.block(block),
            None => list,
        };

        StatefulWidget::render(list, area, buf, state.list_state_mut());
    }
}

pub struct EmptyState<'a> {
    message: &'a str,
    hint: Option<&'a str>,
}

impl<'a> EmptyState<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message, hint: None }
    }

    pub fn hint(mut self, hint: &'a str) -> Self {
        self.hint = Some(hint);
        self
    }
}

fn center_x(area: &Rect, text: &str) -> u16 {
    let width = text.chars().count() as u16;
    area.x + area.width.saturating_sub(width) / 2
}

impl<'a> Widget for EmptyState<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let center_y = area.y + area.height / 2;
        let style = Style::default().fg(Color::DarkGray);
        buf.set_string(center_x(&area, self.message), center_y, self.message, style);

        let Some(hint) = self.hint else { return };
        if center_y + 1 >= area.bottom() {
            return;
        }
        let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
        buf.set_string(center_x(&area, hint), center_y + 1, hint, style);
    }
}
