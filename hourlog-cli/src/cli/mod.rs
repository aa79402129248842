mod cli;
mod export_arg;

pub use cli::Cli;
pub use export_arg::ExportArg;
