use super::CliModeResult;
use crate::Cli;
use anyhow::{Context, Result};
use hourlog_core::{Analyzer, EntryRecord, EntryStore, export::render_json};
use std::{
    fs,
    io::{self, Read},
};

/// Scores records from a file or stdin and prints the analysis as JSON.
///
/// A record without text aborts the whole run.
pub fn analyze_mode(cli: &Cli, store: &EntryStore) -> Result<CliModeResult> {
    let Some(source) = cli.analyze.as_deref() else {
        return Ok(CliModeResult::NothingToDo);
    };

    let raw = if source == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading records from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("reading {source}"))?
    };

    let records: Vec<EntryRecord> =
        serde_json::from_str(&raw).with_context(|| format!("parsing records from {source}"))?;
    let analysis = Analyzer::new(store.config.keyword_set()).analyze_records(&records)?;
    println!("{}", render_json(&analysis)?);
    Ok(CliModeResult::Finish)
}
