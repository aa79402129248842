use super::theme::OneDark;
use chrono::NaiveDate;
use hourlog_core::{AnalysisResult, Classification, Entry, KeywordSet, QueryError};
use regex::Regex;
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub time_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    time_format: "%H:%M".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
            if !md.ends_with('\n') {
                println!();
            }
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_entry_line(&self, entry: &Entry, kind: Option<Classification>) {
        let mut date = entry.timestamp.date_naive().to_string();
        let mut time = entry.timestamp.format(&self.opts.time_format).to_string();
        let mut text = entry.text.trim().to_string();
        let mut label = kind
            .map(|k| format!("[{}]", k.as_ref().to_uppercase()))
            .unwrap_or_default();
        if self.opts.use_color {
            date = date.with(Color::Cyan).to_string();
            time = time.with(Color::Blue).to_string();
            text = text.with(Color::Yellow).to_string();
            label = match kind {
                Some(Classification::Productive) => label.with(OneDark::GREEN).to_string(),
                Some(Classification::Unproductive) => label.with(OneDark::RED).to_string(),
                _ => label.with(OneDark::COMMENT).to_string(),
            };
        }
        println!("{date} {time} - {text} {label}");
    }

    pub fn print_dashboard(&self, date: NaiveDate, analysis: &AnalysisResult, keywords: &KeywordSet) {
        let md = self.dashboard_markdown(date, analysis, keywords);
        self.print_md(&md);
    }

    pub fn print_history(&self, days: &[(NaiveDate, AnalysisResult)]) {
        let mut md = String::from("|:-|-:|-:|-:|-:|\n|Day|Score|Productive|Unproductive|Entries|\n|-|-|-|-|-|\n");
        for (date, analysis) in days {
            md.push_str(&format!(
                "|{}|{}/100|{}|{}|{}|\n",
                date.format(&self.opts.date_format),
                analysis.overall_score,
                analysis.stats.productive,
                analysis.stats.unproductive,
                analysis.stats.total
            ));
        }
        md.push_str("|-|\n");
        self.print_md(&md);
    }

    pub fn print_errors(&self, errors: &[QueryError]) {
        if errors.is_empty() {
            return;
        }
        let mut md = String::from("\n# Errors:\n");
        for error in errors {
            md.push_str(&format!("* {error}\n"));
        }
        self.print_md(&md);
    }

    fn dashboard_markdown(
        &self,
        date: NaiveDate,
        analysis: &AnalysisResult,
        keywords: &KeywordSet,
    ) -> String {
        let mut md = format!(
            "# {}\n**Productivity Score:** {}/100\n\n",
            date.format(&self.opts.date_format),
            analysis.overall_score
        );
        md.push_str(&format!(
            "|:-:|:-:|:-:|\n|Productive|Unproductive|Total Entries|\n|-|-|-|\n|{}|{}|{}|\n|-|\n\n",
            analysis.stats.productive, analysis.stats.unproductive, analysis.stats.total
        ));

        md.push_str("## Timeline\n");
        if analysis.processed_entries.is_empty() {
            md.push_str("*No activities recorded.*\n");
        }
        for scored in &analysis.processed_entries {
            let time = scored.entry.timestamp.format(&self.opts.time_format);
            let text = scored.entry.text.trim();
            let text = if self.opts.use_color {
                highlight_keywords(&escape_markdown(text), &keywords.matches(text))
            } else {
                text.to_string()
            };
            md.push_str(&format!(
                "* **{time}** {text} *{} · score {}*\n",
                scored.kind.as_ref().to_uppercase(),
                scored.score
            ));
        }

        md.push_str("\n## Suggestions\n");
        if analysis.suggestions.is_empty() {
            md.push_str("Great job! No immediate improvements needed.\n");
        }
        for suggestion in &analysis.suggestions {
            md.push_str(&format!("* {suggestion}\n"));
        }
        md
    }
}

/// Backslash-escapes the characters termimad reads as inline markup or table cells.
fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '~' | '|') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Wraps every matched keyword in backticks so the skin paints it as inline code.
fn highlight_keywords(text: &str, matched: &[&str]) -> String {
    if matched.is_empty() {
        return text.to_string();
    }
    let mut words: Vec<&str> = matched.to_vec();
    // longest first so "gaming" is not cut down to "game"
    words.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let pattern = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!("(?i)({pattern})")) {
        Ok(re) => re.replace_all(text, "`$1`").to_string(),
        Err(_) => text.to_string(),
    }
}
