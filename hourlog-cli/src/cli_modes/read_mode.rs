use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use hourlog_core::{Analyzer, EntryStore, dates::DateFilter};

pub fn read_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    let analyzer = Analyzer::new(store.config.keyword_set());

    if let Some(on) = &cli.on {
        match resolve_dates(store, on, None)? {
            DateFilter::Single(date) => print_day(renderer, store, &analyzer, date),
            range => print_history(renderer, store, &analyzer, range),
        }
        return Ok(CliModeResult::Finish);
    }

    if let Some(from) = &cli.from {
        let to = cli.to.as_deref().unwrap_or("today");
        let range = resolve_dates(store, from, Some(to))?;
        print_history(renderer, store, &analyzer, range);
        return Ok(CliModeResult::Finish);
    }

    Ok(CliModeResult::NothingToDo)
}

pub fn recent_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    let Some(limit) = cli.recent else {
        return Ok(CliModeResult::NothingToDo);
    };
    let analyzer = Analyzer::new(store.config.keyword_set());
    let result = store.recent(limit);
    if result.entries.is_empty() {
        renderer.print_info("No entries found");
    }
    for entry in &result.entries {
        let kind = analyzer.score_entry(entry).kind;
        renderer.print_entry_line(entry, Some(kind));
    }
    renderer.print_errors(&result.errors);
    Ok(CliModeResult::Finish)
}

/// Resolves date tokens, failing with a readable message when they are not dates.
pub(super) fn resolve_dates(store: &EntryStore, start: &str, end: Option<&str>) -> Result<DateFilter> {
    match store.parse_dates(start, end, None) {
        Some(filter) => Ok(filter),
        None => bail!("'{start}' is not a valid date or keyword"),
    }
}

fn print_day(renderer: &Renderer, store: &EntryStore, analyzer: &Analyzer, date: NaiveDate) {
    let result = store.read_day(date);
    let analysis = analyzer.analyze(&result.entries);
    renderer.print_dashboard(date, &analysis, analyzer.keywords());
    renderer.print_errors(&result.errors);
}

fn print_history(renderer: &Renderer, store: &EntryStore, analyzer: &Analyzer, range: DateFilter) {
    let mut days = Vec::new();
    let mut errors = Vec::new();
    for date in range.days() {
        let result = store.read_day(date);
        days.push((date, analyzer.analyze(&result.entries)));
        errors.extend(result.errors);
    }
    if days.is_empty() {
        renderer.print_info("No days in range");
        return;
    }
    renderer.print_history(&days);
    renderer.print_errors(&errors);
}
