//! Login List
//!
//! View-model behind the login list screen. It owns the full set loaded
//! from storage, the set currently displayed, and the search text.
//!
//! Filtering is deferred: typing only records the search text, and the
//! display set changes when the search is submitted. Clearing the text is
//! the exception and restores the full set at once, without recording the
//! empty text.

use crate::db::KeyValueStore;

use super::login::{parse_logins, LoginData};
use super::{LoginResult, LOGINS_KEY};

/// Summary shown when there is nothing in the display set
pub const EMPTY_SUMMARY: &str = "Nada a ser exibido";
const TOTAL_SUFFIX: &str = "ao total";

pub struct LoginListModel<S> {
    store: S,
    search_text: String,
    full_set: Vec<LoginData>,
    display_set: Vec<LoginData>,
}

impl<S: KeyValueStore> LoginListModel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            search_text: String::new(),
            full_set: Vec::new(),
            display_set: Vec::new(),
        }
    }

    /// Replace both sets with whatever is stored.
    ///
    /// An unset key, or an empty stored string, leaves the state as it was.
    /// Errors also leave the state untouched, so a corrupt payload never
    /// yields partial records.
    pub fn reload(&mut self) -> LoginResult<()> {
        let stored = self.store.get_item(LOGINS_KEY)?;
        let Some(raw) = stored.filter(|raw| !raw.is_empty()) else {
            tracing::debug!(key = LOGINS_KEY, "no stored logins");
            return Ok(());
        };

        let logins = parse_logins(&raw)?;
        tracing::info!(count = logins.len(), "logins reloaded");

        self.display_set = logins.clone();
        self.full_set = logins;
        Ok(())
    }

    pub fn on_search_text_change(&mut self, text: &str) {
        if text.is_empty() {
            self.display_set = self.full_set.clone();
        } else {
            self.search_text = text.to_string();
        }
    }

    /// Keep only logins whose service name equals the search text exactly.
    pub fn submit_filter(&mut self) {
        if self.search_text.is_empty() {
            return;
        }

        self.display_set = self
            .full_set
            .iter()
            .filter(|l| l.service_name == self.search_text)
            .cloned()
            .collect();

        tracing::debug!(matches = self.display_set.len(), "filter applied");
    }

    #[cfg(test)]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[cfg(test)]
    pub fn full_set(&self) -> &[LoginData] {
        &self.full_set
    }

    pub fn display_set(&self) -> &[LoginData] {
        &self.display_set
    }

    pub fn summary(&self) -> String {
        summary_text(self.display_set.len())
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// "NN ao total" with the count padded to two digits, or the empty message.
pub fn summary_text(count: usize) -> String {
    if count == 0 {
        return EMPTY_SUMMARY.to_string();
    }
    format!("{:02} {}", count, TOTAL_SUFFIX)
}
