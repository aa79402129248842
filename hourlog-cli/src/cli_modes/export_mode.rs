use super::{CliModeResult, read_mode::resolve_dates};
use crate::{Cli, render::Renderer};
use anyhow::{Context, Result, bail};
use hourlog_core::{
    Analyzer, EntryStore, ExportFormat,
    dates::DateFilter,
    export::{export_file_name, render},
};
use std::fs;

pub fn export_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    let (Some(format), Some(on)) = (cli.export, cli.on.as_deref()) else {
        return Ok(CliModeResult::NothingToDo);
    };
    let format = ExportFormat::from(format);
    let date = match resolve_dates(store, on, None)? {
        DateFilter::Single(date) => date,
        DateFilter::Range(..) => bail!("exports cover a single day, '{on}' is a range"),
    };

    let result = store.read_day(date);
    let analysis = Analyzer::new(store.config.keyword_set()).analyze(&result.entries);
    let label = date.format(&store.config.date_format).to_string();
    let content = render(format, &label, &analysis, &store.config.time_format)?;

    let path = cli
        .out
        .clone()
        .unwrap_or_else(|| export_file_name(date, format).into());
    fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;

    renderer.print_info(&format!("Exported report to {}", path.display()));
    renderer.print_errors(&result.errors);
    Ok(CliModeResult::Finish)
}
