pub mod analyzer;
pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod export;
pub mod keywords;
pub mod paths;
pub mod reminder;
pub mod store;
pub mod suggestion;

#[cfg(test)]
mod tests;

pub use analyzer::{
    AnalysisResult, Analyzer, Classification, ScoredEntry, Stats, analyze, analyze_records,
};
pub use config::Config;
pub use entry::{Entry, EntryRecord};
pub use error::{AnalyzeError, QueryError};
pub use export::ExportFormat;
pub use keywords::KeywordSet;
pub use store::{EntryStore, QueryResult};
