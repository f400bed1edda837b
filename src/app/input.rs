use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::db::KeyValueStore;
use crate::input::keymap::{normal_mode_action, text_input_action, Action};
use crate::input::InputMode;

use super::App;

const HALF_PAGE: usize = 5;

impl<S: KeyValueStore> App<S> {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::FocusGained => self.on_focus(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.mode_state.mode {
            InputMode::Normal => {
                let (action, pending) = normal_mode_action(key, self.mode_state.pending);
                self.mode_state.pending = pending;
                action
            }
            InputMode::Search => self.handle_text_input(text_input_action(key)),
        };

        self.execute_action(action);
    }

    /// Apply buffer edits, reporting every content change to the model.
    /// Returns the action still left to execute.
    fn handle_text_input(&mut self, action: Action) -> Action {
        let changed = match action {
            Action::InsertChar(c) => {
                self.mode_state.insert_char(c);
                true
            }
            Action::DeleteChar => self.mode_state.delete_char(),
            Action::DeleteCharForward => self.mode_state.delete_char_forward(),
            Action::ClearLine => {
                let had_text = !self.mode_state.get_buffer().is_empty();
                self.mode_state.clear_buffer();
                had_text
            }
            Action::CursorLeft => {
                self.mode_state.cursor_left();
                false
            }
            Action::CursorRight => {
                self.mode_state.cursor_right();
                false
            }
            Action::CursorHome => {
                self.mode_state.cursor_home();
                false
            }
            Action::CursorEnd => {
                self.mode_state.cursor_end();
                false
            }
            _ => return action,
        };

        if changed {
            self.search_text_changed();
        }
        Action::None
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.list_state.move_up(),
            Action::MoveDown => self.list_state.move_down(),
            Action::MoveToTop => self.list_state.move_to_top(),
            Action::MoveToBottom => self.list_state.move_to_bottom(),
            Action::HalfPageUp => self.list_state.page_up(HALF_PAGE),
            Action::HalfPageDown => self.list_state.page_down(HALF_PAGE),
            Action::TogglePasswordVisibility => self.show_passwords = !self.show_passwords,
            Action::EnterSearch => self.mode_state.to_search(),
            Action::Refresh => self.refresh(),
            Action::Quit => self.should_quit = true,
            Action::Submit => {
                self.submit_search();
                self.mode_state.to_normal();
            }
            Action::Cancel => self.mode_state.to_normal(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::app::AppConfig;
    use crate::db::MemoryStore;
    use crate::logins::LOGINS_KEY;

    const TWO_LOGINS: &str = r#"[
        {"id":"1","service_name":"GitHub","email":"a@x.com","password":"p1"},
        {"id":"2","service_name":"GitLab","email":"b@x.com","password":"p2"}
    ]"#;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut App<MemoryStore>, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    fn focused_app(raw: &str) -> App<MemoryStore> {
        let mut app = App::new(AppConfig::default(), MemoryStore::with_item(LOGINS_KEY, raw));
        app.on_focus();
        app
    }

    fn screen_text(app: &mut App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().buffer().content.iter().map(|c| c.symbol()).collect()
    }

    fn displayed_ids(app: &App<MemoryStore>) -> Vec<&str> {
        app.model.display_set().iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_focus_loads_and_selects_first() {
        let mut app = focused_app(TWO_LOGINS);

        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
        assert_eq!(app.list_state.selected(), Some(0));
        assert!(screen_text(&mut app).contains("02 ao total"));
    }

    #[test]
    fn test_focus_gained_rereads_storage() {
        let mut app = App::new(AppConfig::default(), MemoryStore::new());
        app.on_focus();
        assert!(app.model.display_set().is_empty());

        app.model.store().set_item(LOGINS_KEY, TWO_LOGINS).unwrap();
        app.handle_event(Event::FocusGained);
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);

        app.handle_event(Event::FocusLost);
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
    }

    #[test]
    fn test_search_submit_and_clear() {
        let mut app = focused_app(TWO_LOGINS);

        app.handle_event(key(KeyCode::Char('/')));
        type_text(&mut app, "GitHub");
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(displayed_ids(&app), vec!["1"]);
        assert!(screen_text(&mut app).contains("01 ao total"));

        app.handle_event(key(KeyCode::Char('/')));
        app.handle_event(ctrl('u'));
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
        assert_eq!(app.model.search_text(), "GitHub");
        assert!(screen_text(&mut app).contains("02 ao total"));
    }

    #[test]
    fn test_backspace_to_empty_restores_full_list() {
        let mut app = focused_app(TWO_LOGINS);
        app.handle_event(key(KeyCode::Char('/')));
        type_text(&mut app, "GitLab");
        app.handle_event(key(KeyCode::Enter));
        assert_eq!(displayed_ids(&app), vec!["2"]);

        app.handle_event(key(KeyCode::Char('/')));
        for _ in 0.."GitLab".len() {
            app.handle_event(key(KeyCode::Backspace));
        }

        assert_eq!(app.mode_state.get_buffer(), "");
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
    }

    #[test]
    fn test_no_match_shows_nothing_to_display() {
        let mut app = focused_app(TWO_LOGINS);
        app.handle_event(key(KeyCode::Char('/')));
        type_text(&mut app, "Git");
        app.handle_event(key(KeyCode::Enter));

        assert!(app.model.display_set().is_empty());
        assert_eq!(app.list_state.selected(), None);
        assert!(screen_text(&mut app).contains("Nada a ser exibido"));
    }

    #[test]
    fn test_escape_leaves_display_untouched() {
        let mut app = focused_app(TWO_LOGINS);
        app.handle_event(key(KeyCode::Char('/')));
        type_text(&mut app, "GitHub");
        app.handle_event(key(KeyCode::Esc));

        assert_eq!(app.mode_state.mode, InputMode::Normal);
        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
        assert_eq!(app.mode_state.get_buffer(), "GitHub");
    }

    #[test]
    fn test_corrupt_storage_reports_without_crashing() {
        let mut app = focused_app("{not json");

        assert!(app.model.display_set().is_empty());
        let (msg, msg_type, _) = app.message.as_ref().unwrap();
        assert_eq!(*msg_type, crate::ui::components::MessageType::Error);
        assert!(msg.starts_with("Stored logins are corrupt"));
        assert!(screen_text(&mut app).contains("Nada a ser exibido"));
    }

    #[test]
    fn test_navigation_and_password_toggle() {
        let mut app = focused_app(TWO_LOGINS);

        app.handle_event(key(KeyCode::Char('j')));
        assert_eq!(app.list_state.selected(), Some(1));
        app.handle_event(key(KeyCode::Char('g')));
        app.handle_event(key(KeyCode::Char('g')));
        assert_eq!(app.list_state.selected(), Some(0));

        assert!(!screen_text(&mut app).contains("p1"));
        app.handle_event(key(KeyCode::Char('s')));
        assert!(app.show_passwords);
        assert!(screen_text(&mut app).contains("p1"));
    }

    #[test]
    fn test_renders_on_tiny_terminals() {
        for raw in ["[]", TWO_LOGINS] {
            let mut app = focused_app(raw);
            app.set_message("Stored logins are corrupt", crate::ui::components::MessageType::Error);
            app.handle_event(key(KeyCode::Char('/')));
            type_text(&mut app, "Git");

            for (width, height) in [(60, 5), (60, 0), (1, 1), (5, 2), (10, 4), (2, 9)] {
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal.draw(|frame| app.render(frame)).unwrap();
            }
        }
    }

    #[test]
    fn test_unavailable_storage_reports_without_crashing() {
        let mut app = focused_app(TWO_LOGINS);
        app.model.store().set_offline(true);

        app.handle_event(Event::FocusGained);

        assert_eq!(displayed_ids(&app), vec!["1", "2"]);
        let (msg, msg_type, _) = app.message.as_ref().unwrap();
        assert_eq!(*msg_type, crate::ui::components::MessageType::Error);
        assert!(msg.starts_with("Storage unavailable"));
        assert!(screen_text(&mut app).contains("Storage unavailable"));
    }

    #[test]
    fn test_refresh_failure_keeps_error_message() {
        let mut app = focused_app(TWO_LOGINS);
        app.model.store().set_offline(true);

        app.handle_event(ctrl('r'));

        let (_, msg_type, _) = app.message.as_ref().unwrap();
        assert_eq!(*msg_type, crate::ui::components::MessageType::Error);
    }

    #[test]
    fn test_refresh_and_quit() {
        let mut app = focused_app("[]");
        app.model.store().set_item(LOGINS_KEY, TWO_LOGINS).unwrap();

        app.handle_event(ctrl('r'));
        assert_eq!(displayed_ids(&app).len(), 2);
        let (msg, msg_type, _) = app.message.as_ref().unwrap();
        assert_eq!(*msg_type, crate::ui::components::MessageType::Success);
        assert_eq!(msg, "Reloaded: 02 ao total");

        app.handle_event(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
