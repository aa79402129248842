//! The local entry store: one JSON-lines file per day, plus a push token list.
use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::dates::{DateFilter, ParseOptions, get_dates_in_range, parse_date_token};
use crate::entry::{Entry, EntryRecord};
use crate::error::{AnalyzeError, QueryError};
use crate::paths::{day_path, entries_dir, scan_dir_for_day_files, tokens_file};

/// The complete result of a query, containing successfully read entries and any warnings.
#[derive(Debug, Default)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<QueryError>,
}

impl QueryResult {
    fn extend(&mut self, other: QueryResult) {
        self.entries.extend(other.entries);
        self.errors.extend(other.errors);
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenRecord {
    token: String,
    created_at: DateTime<Local>,
}

/// The central struct for reading and writing entries.
#[derive(Debug)]
pub struct EntryStore {
    pub config: Config,
}

impl EntryStore {
    /// Creates a new `EntryStore`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `EntryStore` with a specific `Config`.
    ///
    /// This also ensures that the data directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("creating {}", config.data_dir.display()))?;
        Ok(Self { config })
    }

    /// Saves a new entry and returns it.
    ///
    /// - Rejects text that is blank once trimmed; the text is otherwise stored as given.
    /// - Assigns a fresh id and stamps `timestamp`, or now if `None`.
    /// - Appends one JSON line to `{data_dir}/entries/YYYY/MM/YYYY-MM-DD.jsonl`.
    pub fn create_entry(&self, text: &str, timestamp: Option<DateTime<Local>>) -> Result<Entry> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyText.into());
        }
        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            timestamp: timestamp.unwrap_or_else(Local::now),
        };

        let path = day_path(&self.config.data_dir, entry.timestamp.date_naive());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating parent directory {}", parent.display()))?;
        }
        let line = serde_json::to_string(&EntryRecord::from(&entry))?;
        append_line(&path, &line)?;
        debug!(id = %entry.id, path = %path.display(), "created entry");
        Ok(entry)
    }

    /// Reads entries for a date token or a pair of them.
    ///
    /// # Arguments
    ///
    /// * `start_date` - A string that can be parsed into a date (e.g., "yesterday", "2025-08-15").
    /// * `end_date` - Optional end of the range.
    /// * `reference_date` - Optional date that relative words (yesterday, tomorrow...) are
    ///   resolved against. Defaults to today.
    pub fn read_entries(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        reference_date: Option<NaiveDate>,
    ) -> QueryResult {
        match self.parse_dates(start_date, end_date, reference_date) {
            Some(DateFilter::Single(date)) => self.read_day(date),
            Some(DateFilter::Range(start, end)) => self.read_range(start, end),
            None => QueryResult {
                entries: Vec::new(),
                errors: vec![QueryError::InvalidDate {
                    input: start_date.to_string(),
                    error: "Not a valid date or keyword.".to_string(),
                }],
            },
        }
    }

    /// Resolves date tokens with the configured input formats.
    pub fn parse_dates(
        &self,
        start_date: &str,
        end_date: Option<&str>,
        reference_date: Option<NaiveDate>,
    ) -> Option<DateFilter> {
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_date,
            formats: Some(&format_strs),
        };
        parse_date_token(start_date, end_date, Some(opts))
    }

    /// Entries of one day, oldest first. A day without a file is simply empty.
    pub fn read_day(&self, date: NaiveDate) -> QueryResult {
        let path = day_path(&self.config.data_dir, date);
        if !path.exists() {
            return QueryResult::default();
        }
        let mut result = self.parse_file(&path);
        result.entries.sort_by_key(|e| e.timestamp);
        result
    }

    pub fn read_range(&self, start: NaiveDate, end: NaiveDate) -> QueryResult {
        let mut result = QueryResult::default();
        for date in get_dates_in_range(start, end) {
            result.extend(self.read_day(date));
        }
        result
    }

    /// The `limit` most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> QueryResult {
        let mut result = QueryResult::default();
        let root = entries_dir(&self.config.data_dir);
        let mut files = match scan_dir_for_day_files(&root) {
            Ok(files) => files,
            Err(error) => {
                result.errors.push(QueryError::FileError { path: root, error });
                return result;
            }
        };
        // YYYY/MM/YYYY-MM-DD sorts chronologically
        files.sort();

        for path in files.iter().rev() {
            if result.entries.len() >= limit {
                break;
            }
            let mut day = self.parse_file(path);
            day.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
            let room = limit - result.entries.len();
            day.entries.truncate(room);
            result.extend(day);
        }
        result
    }

    /// Reads every line of a day file.
    ///
    /// Lines that are not valid records, or records without text, are skipped
    /// and reported as [`QueryError::InvalidEntry`].
    pub fn parse_file(&self, path: &Path) -> QueryResult {
        let mut result = QueryResult::default();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) => {
                result.errors.push(QueryError::FileError {
                    path: path.to_path_buf(),
                    error: error.into(),
                });
                return result;
            }
        };

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let parsed = serde_json::from_str::<EntryRecord>(line)
                .map_err(anyhow::Error::from)
                .and_then(|record| Entry::try_from(record).map_err(|e| anyhow!(e)));
            match parsed {
                Ok(entry) => result.entries.push(entry),
                Err(error) => {
                    warn!(path = %path.display(), line = i + 1, "skipping entry: {error}");
                    result.errors.push(QueryError::InvalidEntry {
                        path: path.to_path_buf(),
                        line: i + 1,
                        error,
                    });
                }
            }
        }
        result
    }

    /// Stores a push token for reminders.
    pub fn register_token(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            anyhow::bail!("push token is empty");
        }
        let record = TokenRecord {
            token: token.to_string(),
            created_at: Local::now(),
        };
        append_line(&self.tokens_path(), &serde_json::to_string(&record)?)
    }

    /// Registered push tokens, de-duplicated in first-seen order.
    pub fn tokens(&self) -> Result<Vec<String>> {
        let path = self.tokens_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let mut tokens: Vec<String> = Vec::new();
        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record: TokenRecord = serde_json::from_str(line)
                .with_context(|| format!("parsing line {} of {}", i + 1, path.display()))?;
            if !tokens.contains(&record.token) {
                tokens.push(record.token);
            }
        }
        Ok(tokens)
    }

    fn tokens_path(&self) -> PathBuf {
        tokens_file(&self.config.data_dir)
    }
}

fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    writeln!(file, "{line}").with_context(|| format!("appending to {}", path.display()))
}
