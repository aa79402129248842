use crate::Config;
use crate::reminder::ReminderConfig;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_dir: PathBuf) -> Config {
    Config {
        data_dir,
        editor: None,
        date_format: "%A, %d %b %Y".to_string(),
        time_format: "%H:%M".to_string(),
        input_date_formats: vec!["%Y-%m-%d".to_string(), "%d/%m/%Y".to_string()],
        extra_productive: Vec::new(),
        extra_unproductive: Vec::new(),
        reminder: ReminderConfig::default(),
    }
}
