mod analyze_mode;
mod cli_mode;
mod editor_utils;
mod export_mode;
mod read_mode;
mod reminder_mode;
mod write_mode;

pub use analyze_mode::analyze_mode;
pub use cli_mode::CliModeResult;
pub use export_mode::export_mode;
pub use read_mode::{read_mode, recent_mode};
pub use reminder_mode::reminder_mode;
pub use write_mode::{editor_mode, write_mode};
