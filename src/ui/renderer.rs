//! Renderer
//!
//! Lays out the login list screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::components::{
    EmptyState, HelpBar, ListViewState, LoginList, MessageType, Metadata, SearchBar, StatusLine,
};
use crate::input::InputMode;
use crate::logins::LoginData;

pub struct UiState<'a> {
    pub mode: InputMode,
    pub search_buffer: &'a str,
    pub search_cursor: usize,
    pub summary: &'a str,
    pub logins: &'a [LoginData],
    pub list_state: &'a mut ListViewState,
    pub show_passwords: bool,
    pub message: Option<(&'a str, MessageType)>,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    pub fn render(frame: &mut Frame, state: &mut UiState) {
        let chunks = create_main_layout(frame.area());

        render_search_bar(frame, chunks[0], state);
        frame.render_widget(Metadata::new(state.summary), chunks[1]);
        render_list(frame, chunks[2], state);
        render_status_line(frame, chunks[3], state);
        frame.render_widget(HelpBar::for_mode(state.mode), chunks[4]);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &UiState) {
    let focused = state.mode.is_text_input();
    // Shows the edit buffer, not the model's search text: clearing the box
    // must look empty even though the model keeps the previous text.
    frame.render_widget(SearchBar::new(state.search_buffer).focused(focused), area);

    if focused && area.height >= 3 {
        frame.set_cursor_position(SearchBar::cursor_position(area, state.search_cursor));
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &mut UiState) {
    if state.logins.is_empty() {
        let empty = EmptyState::new(state.summary).hint("Use `savepass add` to register one");
        frame.render_widget(empty, area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Magenta));
    let list = LoginList::new(state.logins)
        .block(block)
        .show_password(state.show_passwords);
    frame.render_stateful_widget(list, area, state.list_state);
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.mode);

    if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    if let Some(selected) = state.list_state.selected() {
        status = status.item_count(selected, state.list_state.total);
    }

    frame.render_widget(status, area);
}
