use std::path::PathBuf;
use std::time::Duration;

use crate::db::connection::default_db_path;

pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_path: PathBuf,
    /// How long the event loop waits for input before redrawing
    pub tick_rate: Duration,
    pub message_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let db_path = default_db_path();
        let log_path = db_path.with_file_name("savepass.log");

        Self {
            db_path,
            log_path,
            tick_rate: Duration::from_millis(100),
            message_timeout: Duration::from_secs(5),
        }
    }
}
