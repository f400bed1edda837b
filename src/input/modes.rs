//! Input Modes
//!
//! Modal editing state for the list screen.

/// Input mode enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// List navigation
    Normal,
    /// Typing in the search bar
    Search,
}

impl InputMode {
    /// Get mode indicator for status line
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Search => "SEARCH",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, Self::Search)
    }
}

/// Mode state plus the search bar's edit buffer.
///
/// The buffer survives mode switches: it is what the search bar shows.
#[derive(Debug, Clone)]
pub struct ModeState {
    pub mode: InputMode,
    pub buffer: String,
    /// Cursor position, in chars
    pub cursor: usize,
    /// Pending key sequence (for multi-key commands like gg)
    pub pending: Option<char>,
}

impl Default for ModeState {
    fn default() -> Self {
        Self {
            mode: InputMode::Normal,
            buffer: String::new(),
            cursor: 0,
            pending: None,
        }
    }
}

impl ModeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn to_normal(&mut self) {
        self.mode = InputMode::Normal;
        self.pending = None;
    }

    /// Focus the search bar with the cursor at the end of its text
    pub fn to_search(&mut self) {
        self.mode = InputMode::Search;
        self.pending = None;
        self.cursor_end();
    }

    /// Insert character at cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor, returning whether the buffer changed
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        true
    }

    /// Delete character at cursor, returning whether the buffer changed
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.buffer.remove(at);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn get_buffer(&self) -> &str {
        &self.buffer
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_pos)
            .map_or(self.buffer.len(), |(i, _)| i)
    }
}
