use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use super::ExportArg;
use crate::render::ColorMode;

/// hourlog — what did you do last hour?
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("read_mode").args(["on", "from", "to", "recent"]).multiple(true)),
    group(ArgGroup::new("write_mode").args(["text"]).conflicts_with("read_mode")),
    group(ArgGroup::new("solo").args(["path", "analyze", "register_token", "remind"]).conflicts_with_all(["read_mode", "write_mode"])),
)]
pub struct Cli {
    /// Prints the data directory
    #[arg(long, short)]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Show the score, timeline and suggestions of a day (e.g., `hourlog --on yesterday`)
    #[arg(long)]
    pub on: Option<String>,
    /// Show one score line per day from this date (e.g., `hourlog --from monday`)
    #[arg(long, conflicts_with = "on")]
    pub from: Option<String>,
    /// End of the `--from` range, inclusive. Defaults to today.
    #[arg(long, conflicts_with = "on", requires = "from")]
    pub to: Option<String>,
    /// Show the most recent entries, newest first.
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "5", conflicts_with_all = ["on", "from"])]
    pub recent: Option<usize>,

    /// Write the `--on` day as a report file (e.g., `hourlog --on today --export text`)
    #[arg(long, value_enum, requires = "on")]
    pub export: Option<ExportArg>,
    /// Where to write the export. Defaults to `productivity_YYYY-MM-DD.<ext>` in the current directory.
    #[arg(long, requires = "export")]
    pub out: Option<PathBuf>,

    /// Analyze a JSON array of `{id, text, timestamp}` records and print the result as JSON.
    /// Use `-` to read from stdin.
    #[arg(long, value_name = "FILE")]
    pub analyze: Option<String>,

    /// Registers a push token for hourly reminders.
    #[arg(long, value_name = "TOKEN")]
    pub register_token: Option<String>,
    /// Builds the reminder for every registered token and prints it instead of delivering it.
    #[arg(long)]
    pub remind: bool,

    /// Free text for a new entry (e.g., `hourlog Fixed the login bug`).
    /// Without any text your $EDITOR is opened.
    #[arg()]
    pub text: Vec<String>,
}
