//! Plain-text and JSON reports of a day's analysis.
use anyhow::Result;
use chrono::NaiveDate;
use strum_macros::{AsRefStr, EnumString};

use crate::analyzer::AnalysisResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    Text,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
        }
    }
}

/// `productivity_2025-08-15.txt`
pub fn export_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "productivity_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Renders the timeline of a day as text:
///
/// ```text
/// Productivity Analysis for Fri Aug 15 2025
/// ========================================
///
/// Entries:
/// --------------------
/// [09:00] Coded a new feature
///
/// [10:00] Watched Netflix
/// ```
pub fn render_text(date_label: &str, analysis: &AnalysisResult, time_format: &str) -> String {
    let mut content = format!("Productivity Analysis for {date_label}\n{}\n\n", "=".repeat(40));

    if analysis.processed_entries.is_empty() {
        content.push_str("No entries recorded for this day.");
        return content;
    }

    content.push_str(&format!("Entries:\n{}\n", "-".repeat(20)));
    let lines: Vec<String> = analysis
        .processed_entries
        .iter()
        .map(|scored| {
            let time = scored.entry.timestamp.format(time_format);
            format!("[{time}] {}", scored.entry.text)
        })
        .collect();
    content.push_str(&lines.join("\n\n"));
    content
}

/// The full analysis, pretty-printed.
pub fn render_json(analysis: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

pub fn render(
    format: ExportFormat,
    date_label: &str,
    analysis: &AnalysisResult,
    time_format: &str,
) -> Result<String> {
    match format {
        ExportFormat::Text => Ok(render_text(date_label, analysis, time_format)),
        ExportFormat::Json => render_json(analysis),
    }
}
