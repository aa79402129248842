mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use cli_modes::{
    CliModeResult, analyze_mode, editor_mode, export_mode, read_mode, recent_mode, reminder_mode,
    write_mode,
};
use hourlog_core::EntryStore;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hourlog: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::enable_logging()?;
    let store = EntryStore::new()?;
    debug!(data_dir = %store.config.data_dir.display(), "loaded config");

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: store.config.date_format.to_string(),
        time_format: store.config.time_format.to_string(),
        use_color: cli.color.use_color(),
    }));

    if cli.path {
        renderer.print_info(&format!("{}", store.config.data_dir.display()));
        return Ok(());
    }

    if let CliModeResult::Finish = analyze_mode(&cli, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = reminder_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = export_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = read_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = recent_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    if let CliModeResult::Finish = write_mode(&cli, &renderer, &store)? {
        return Ok(());
    }

    editor_mode(&cli, &renderer, &store)?;
    Ok(())
}
