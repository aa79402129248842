//! Rule-based productivity scoring over a day's entries.
//!
//! Each entry is classified by keyword matching, the per-entry scores are
//! averaged into a 0-100 score and a few fixed suggestions are derived.
//! Everything here is pure: the same entries always give the same result.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::debug;

use crate::entry::{Entry, EntryRecord};
use crate::error::AnalyzeError;
use crate::keywords::KeywordSet;
use crate::suggestion::Suggestion;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    EnumString,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    Productive,
    Neutral,
    Unproductive,
}

impl Classification {
    /// Per-entry score: 10 productive, 5 neutral, 2 unproductive.
    pub fn score(self) -> u8 {
        match self {
            Classification::Productive => 10,
            Classification::Neutral => 5,
            Classification::Unproductive => 2,
        }
    }
}

/// An [`Entry`] together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub score: u8,
    #[serde(rename = "type")]
    pub kind: Classification,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub productive: usize,
    pub unproductive: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub processed_entries: Vec<ScoredEntry>,
    pub overall_score: u8,
    pub stats: Stats,
    pub suggestions: Vec<String>,
}

static DEFAULT_ANALYZER: Lazy<Analyzer> = Lazy::new(Analyzer::default);

/// Scores entries with the built-in keyword lists.
pub fn analyze(entries: &[Entry]) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(entries)
}

/// Validates raw records and scores them with the built-in keyword lists.
///
/// Fails on the first record without text; nothing is scored in that case.
pub fn analyze_records(records: &[EntryRecord]) -> Result<AnalysisResult, AnalyzeError> {
    DEFAULT_ANALYZER.analyze_records(records)
}

/// Scores entries against a [`KeywordSet`].
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    keywords: KeywordSet,
}

impl Analyzer {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn score_entry(&self, entry: &Entry) -> ScoredEntry {
        let kind = self.keywords.classify(&entry.text);
        ScoredEntry {
            entry: entry.clone(),
            score: kind.score(),
            kind,
        }
    }

    pub fn analyze(&self, entries: &[Entry]) -> AnalysisResult {
        let processed_entries: Vec<ScoredEntry> =
            entries.iter().map(|e| self.score_entry(e)).collect();

        let mut stats = Stats {
            total: processed_entries.len(),
            ..Default::default()
        };
        let mut total_score: u64 = 0;
        for scored in &processed_entries {
            if scored.score > Classification::Neutral.score() {
                stats.productive += 1;
            }
            if scored.score < Classification::Neutral.score() {
                stats.unproductive += 1;
            }
            total_score += u64::from(scored.score);
        }

        let overall_score = overall_score(total_score, stats.total);
        let suggestions = Suggestion::evaluate(overall_score, &stats)
            .into_iter()
            .map(|s| s.message().to_string())
            .collect();

        debug!(
            total = stats.total,
            productive = stats.productive,
            unproductive = stats.unproductive,
            overall_score,
            "analyzed entries"
        );

        AnalysisResult {
            processed_entries,
            overall_score,
            stats,
            suggestions,
        }
    }

    pub fn analyze_records(&self, records: &[EntryRecord]) -> Result<AnalysisResult, AnalyzeError> {
        let entries = records
            .iter()
            .cloned()
            .map(Entry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.analyze(&entries))
    }
}

/// `round(total / count * 10)`, rounding halves up, or 0 for no entries.
///
/// Computed on integers so that e.g. an exact 32.5 always becomes 33.
fn overall_score(total_score: u64, count: usize) -> u8 {
    if count == 0 {
        return 0;
    }
    let count = count as u64;
    let rounded = (total_score * 20 + count) / (count * 2);
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, TimeZone};
    use std::str::FromStr;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 15, hour, 0, 0).unwrap()
    }

    fn entries(texts: &[&str]) -> Vec<Entry> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Entry {
                id: format!("e{i}"),
                text: text.to_string(),
                timestamp: at(8 + i as u32),
            })
            .collect()
    }

    #[test]
    fn empty_input_scores_zero() {
        let result = analyze(&[]);
        assert_eq!(result.overall_score, 0);
        assert_eq!(result.stats, Stats::default());
        assert!(result.processed_entries.is_empty());
        assert_eq!(
            result.suggestions,
            vec![
                "Low productivity detected. Try focusing on one task at a time.",
                "Tracking more activities gives better insights."
            ]
        );
    }

    #[test]
    fn mixed_day() {
        let result = analyze(&entries(&[
            "Coded a new feature",
            "Watched Netflix",
            "Took a nap",
        ]));
        let scores: Vec<u8> = result.processed_entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![10, 2, 2]);
        assert_eq!(result.overall_score, 47);
        assert_eq!(
            result.stats,
            Stats {
                productive: 1,
                unproductive: 2,
                total: 3
            }
        );
        assert_eq!(
            result.suggestions,
            vec![
                "Low productivity detected. Try focusing on one task at a time.",
                "You have more unproductive entries than productive ones."
            ]
        );
    }

    #[test]
    fn fully_productive_short_day_only_asks_for_more_tracking() {
        let result = analyze(&entries(&["Study session: algorithms", "Exercised at gym"]));
        assert_eq!(result.overall_score, 100);
        assert_eq!(
            result.stats,
            Stats {
                productive: 2,
                unproductive: 0,
                total: 2
            }
        );
        // two entries is still fewer than three
        assert_eq!(
            result.suggestions,
            vec!["Tracking more activities gives better insights."]
        );
    }

    #[test]
    fn inflected_words_only_match_literal_substrings() {
        // "studied" does not contain "study"
        let result = analyze(&entries(&["Studied algorithms", "Exercised at gym"]));
        assert_eq!(result.processed_entries[0].kind, Classification::Neutral);
        assert_eq!(result.processed_entries[1].kind, Classification::Productive);
        assert_eq!(result.overall_score, 75);
    }

    #[test]
    fn single_neutral_entry() {
        let result = analyze(&entries(&["Had lunch"]));
        assert_eq!(result.processed_entries[0].score, 5);
        assert_eq!(result.processed_entries[0].kind, Classification::Neutral);
        assert_eq!(result.overall_score, 50);
        assert_eq!(
            result.suggestions,
            vec!["Tracking more activities gives better insights."]
        );
    }

    #[test]
    fn processed_entries_keep_order_and_fields() {
        let input = entries(&["Had lunch", "Fixed the build", "Scrolled twitter"]);
        let result = analyze(&input);
        let kept: Vec<&Entry> = result.processed_entries.iter().map(|e| &e.entry).collect();
        assert_eq!(kept, input.iter().collect::<Vec<_>>());
        let kinds: Vec<Classification> = result.processed_entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Classification::Neutral,
                Classification::Productive,
                Classification::Unproductive
            ]
        );
    }

    #[test]
    fn neutral_entries_count_in_total_only() {
        let result = analyze(&entries(&["Had lunch", "Walked the dog", "Coded"]));
        assert_eq!(result.stats.total, 3);
        assert_eq!(result.stats.productive + result.stats.unproductive, 1);
    }

    #[test]
    fn halves_round_up() {
        let texts = ["code", "nap", "nap", "nap", "nap", "nap", "nap", "lunch"];
        // (10 + 6 * 2 + 5) / 8 * 10 = 33.75
        assert_eq!(analyze(&entries(&texts)).overall_score, 34);
        // 32.5 and 65.5
        assert_eq!(overall_score(26, 8), 33);
        assert_eq!(overall_score(131, 20), 66);
    }

    #[test]
    fn analysis_is_idempotent() {
        let input = entries(&["Design review meeting", "Reddit", "Cooked dinner"]);
        assert_eq!(analyze(&input), analyze(&input));
    }

    #[test]
    fn records_without_text_fail_fast() {
        let records = vec![
            EntryRecord {
                id: "ok".into(),
                text: Some("Planned the week".into()),
                timestamp: at(9),
            },
            EntryRecord {
                id: "broken".into(),
                text: None,
                timestamp: at(10),
            },
        ];
        assert_eq!(
            analyze_records(&records),
            Err(AnalyzeError::MissingText {
                id: "broken".into()
            })
        );
    }

    #[test]
    fn records_with_text_are_analyzed() {
        let records = vec![EntryRecord {
            id: "ok".into(),
            text: Some("Planned the week".into()),
            timestamp: at(9),
        }];
        let result = analyze_records(&records).unwrap();
        assert_eq!(result.overall_score, 100);
    }

    #[test]
    fn custom_keywords_change_classification() {
        let mut keywords = KeywordSet::default();
        keywords.extend(&["read".into()], &[]);
        let analyzer = Analyzer::new(keywords);
        let result = analyzer.analyze(&entries(&["Read a novel"]));
        assert_eq!(result.processed_entries[0].kind, Classification::Productive);
        assert_eq!(analyze(&entries(&["Read a novel"])).overall_score, 50);
    }

    #[test]
    fn classification_string_forms() {
        assert_eq!(Classification::Productive.as_ref(), "productive");
        assert_eq!(
            Classification::from_str("unproductive").unwrap(),
            Classification::Unproductive
        );
    }

    #[test]
    fn serializes_with_camel_case_and_type() {
        let result = analyze(&entries(&["Had lunch"]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["overallScore"], 50);
        assert_eq!(json["stats"]["total"], 1);
        let first = &json["processedEntries"][0];
        assert_eq!(first["type"], "neutral");
        assert_eq!(first["score"], 5);
        assert_eq!(first["text"], "Had lunch");
        assert_eq!(first["id"], "e0");
    }
}
