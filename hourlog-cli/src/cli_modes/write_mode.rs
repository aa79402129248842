use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use hourlog_core::{Analyzer, EntryStore, paths::day_path};

pub fn write_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let inline = cli.text.join(" ");
    save(&inline, renderer, store)?;
    Ok(CliModeResult::Finish)
}

pub fn editor_mode(cli: &Cli, renderer: &Renderer, store: &EntryStore) -> Result<CliModeResult> {
    if !cli.text.is_empty() {
        return write_mode(cli, renderer, store);
    }

    let editor = resolve_editor(&store.config.editor)?;
    let input = create_editor_buffer(&editor)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        renderer.print_info("No entry to save, because no text was received.");
        return Ok(CliModeResult::Finish);
    }
    save(trimmed, renderer, store)?;
    Ok(CliModeResult::Finish)
}

fn save(text: &str, renderer: &Renderer, store: &EntryStore) -> Result<()> {
    let entry = store.create_entry(text, None)?;
    let path = day_path(&store.config.data_dir, entry.timestamp.date_naive());
    let kind = Analyzer::new(store.config.keyword_set())
        .score_entry(&entry)
        .kind;
    renderer.print_info(&format!("Added new entry to {}", path.display()));
    renderer.print_entry_line(&entry, Some(kind));
    Ok(())
}
