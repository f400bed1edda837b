//! Application State
//!
//! Ties the login list view-model to the terminal screen.

mod config;
mod input;

use std::time::Instant;

use ratatui::Frame;

use crate::db::KeyValueStore;
use crate::input::ModeState;
use crate::logins::LoginListModel;
use crate::ui::components::{ListViewState, MessageType};
use crate::ui::renderer::{Renderer, UiState};

pub use config::AppConfig;

pub struct App<S> {
    pub config: AppConfig,
    pub model: LoginListModel<S>,
    pub mode_state: ModeState,
    pub list_state: ListViewState,
    pub show_passwords: bool,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(config: AppConfig, store: S) -> Self {
        Self {
            config,
            model: LoginListModel::new(store),
            mode_state: ModeState::new(),
            list_state: ListViewState::new(),
            show_passwords: false,
            message: None,
            should_quit: false,
        }
    }

    /// The screen became visible: on first draw and on every terminal
    /// focus gain. Always re-reads storage.
    pub fn on_focus(&mut self) {
        tracing::debug!("screen focused");
        self.reload();
    }

    /// Reload on user request, confirming the result in the status line
    pub fn refresh(&mut self) {
        if self.reload() {
            let msg = format!("Reloaded: {}", self.model.summary());
            self.set_message(&msg, MessageType::Success);
        }
    }

    fn reload(&mut self) -> bool {
        let result = self.model.reload();
        self.sync_list();

        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to load logins");
                self.set_message(&e.to_string(), MessageType::Error);
                false
            }
        }
    }

    fn search_text_changed(&mut self) {
        let text = self.mode_state.get_buffer().to_string();
        self.model.on_search_text_change(&text);
        self.sync_list();
    }

    fn submit_search(&mut self) {
        self.model.submit_filter();
        self.sync_list();
    }

    fn sync_list(&mut self) {
        self.list_state.set_total(self.model.display_set().len());
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.check_message_expiry();

        let summary = self.model.summary();
        let message = self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t));

        let mut state = UiState {
            mode: self.mode_state.mode,
            search_buffer: self.mode_state.get_buffer(),
            search_cursor: self.mode_state.cursor,
            summary: &summary,
            logins: self.model.display_set(),
            list_state: &mut self.list_state,
            show_passwords: self.show_passwords,
            message,
        };

        Renderer::render(frame, &mut state);
    }

    fn check_message_expiry(&mut self) {
        let timeout = self.config.message_timeout;
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > timeout);

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }
}
