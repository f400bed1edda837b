//! UI Components
//!
//! Widgets that make up the login list screen.

pub mod list;
pub mod metadata;
pub mod search_bar;
pub mod statusline;

// Re-exports
pub use list::{EmptyState, ListViewState, LoginList};
pub use metadata::Metadata;
pub use search_bar::SearchBar;
pub use statusline::{HelpBar, MessageType, StatusLine};
