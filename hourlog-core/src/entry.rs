use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// A single timestamped note about what the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// The raw shape of an entry as read from disk or from an imported file.
///
/// `text` is optional here so that a record without it can be rejected
/// explicitly instead of being read as an empty note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub id: String,
    #[serde(default)]
    pub text: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl TryFrom<EntryRecord> for Entry {
    type Error = AnalyzeError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        match record.text {
            Some(text) => Ok(Entry {
                id: record.id,
                text,
                timestamp: record.timestamp,
            }),
            None => Err(AnalyzeError::MissingText { id: record.id }),
        }
    }
}

impl From<&Entry> for EntryRecord {
    fn from(entry: &Entry) -> Self {
        EntryRecord {
            id: entry.id.clone(),
            text: Some(entry.text.clone()),
            timestamp: entry.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn record_with_text_converts() {
        let record = EntryRecord {
            id: "a".into(),
            text: Some(String::new()),
            timestamp: ts(),
        };
        let entry = Entry::try_from(record).unwrap();
        assert_eq!(entry.id, "a");
        assert_eq!(entry.text, "");
    }

    #[test]
    fn record_without_text_is_rejected() {
        let record = EntryRecord {
            id: "b".into(),
            text: None,
            timestamp: ts(),
        };
        assert_eq!(
            Entry::try_from(record),
            Err(AnalyzeError::MissingText { id: "b".into() })
        );
    }

    #[test]
    fn missing_and_null_text_deserialize_to_none() {
        let missing: EntryRecord =
            serde_json::from_str(r#"{"id":"c","timestamp":"2025-08-15T09:30:00+00:00"}"#).unwrap();
        let null: EntryRecord = serde_json::from_str(
            r#"{"id":"d","text":null,"timestamp":"2025-08-15T09:30:00+00:00"}"#,
        )
        .unwrap();
        assert!(missing.text.is_none());
        assert!(null.text.is_none());
    }
}
