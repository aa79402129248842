use anyhow::Result;
use chrono::NaiveDate;
use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

pub fn entries_dir(root: &Path) -> PathBuf {
    root.join("entries")
}

pub fn tokens_file(root: &Path) -> PathBuf {
    root.join("tokens.jsonl")
}

pub fn day_file_name(date: NaiveDate) -> String {
    format!("{}.jsonl", date.format("%Y-%m-%d"))
}

pub fn day_dir(root: &Path, date: NaiveDate) -> PathBuf {
    entries_dir(root)
        .join(date.format("%Y").to_string())
        .join(date.format("%m").to_string())
}

/// `{root}/entries/YYYY/MM/YYYY-MM-DD.jsonl`
pub fn day_path(root: &Path, date: NaiveDate) -> PathBuf {
    day_dir(root, date).join(day_file_name(date))
}

/// Recursively collects every day file below `path`.
pub fn scan_dir_for_day_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut file_paths = Vec::new();
    if !path.exists() {
        return Ok(file_paths);
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let p = entry.path();

        if p.is_dir() {
            file_paths.extend(scan_dir_for_day_files(&p)?);
        } else if p.is_file() && is_day_file(&p) {
            file_paths.push(p);
        }
    }

    Ok(file_paths)
}

fn is_day_file(p: &Path) -> bool {
    p.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("jsonl"))
        .unwrap_or(false)
}
