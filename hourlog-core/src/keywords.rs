use crate::analyzer::Classification;

/// Substrings that mark an entry as productive.
pub const PRODUCTIVE_KEYWORDS: &[&str] = &[
    "code",
    "coding",
    "debug",
    "fix",
    "implement",
    "study",
    "learn",
    "work",
    "meeting",
    "plan",
    "design",
    "write",
    "exercise",
    "gym",
    "cook",
];

/// Substrings that mark an entry as unproductive.
pub const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    "youtube",
    "netflix",
    "scroll",
    "reddit",
    "twitter",
    "game",
    "gaming",
    "sleep",
    "nap",
    "waste",
    "procrastinate",
];

/// The two keyword lists an entry is classified against.
///
/// All keywords are stored lowercased; matching lowercases the text and
/// looks for each keyword anywhere in it, so `"code"` also matches `"coder"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    pub productive: Vec<String>,
    pub unproductive: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            productive: PRODUCTIVE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            unproductive: UNPRODUCTIVE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl KeywordSet {
    /// Appends user-defined keywords to both lists.
    ///
    /// Keywords are trimmed and lowercased. Blank ones and ones already
    /// present in the same list are skipped.
    ///
    /// Typical call site: `Config::keyword_set()`, after reading `[keywords]`
    /// from `config.toml`:
    ///
    /// ```toml
    /// [keywords]
    /// productive = ["read", "refactor"]
    /// unproductive = ["tiktok"]
    /// ```
    pub fn extend(&mut self, productive: &[String], unproductive: &[String]) {
        push_unique(&mut self.productive, productive);
        push_unique(&mut self.unproductive, unproductive);
    }

    /// Classifies a text. A productive keyword always wins over an
    /// unproductive one.
    pub fn classify(&self, text: &str) -> Classification {
        let lower = text.to_lowercase();
        if self.productive.iter().any(|k| lower.contains(k.as_str())) {
            Classification::Productive
        } else if self.unproductive.iter().any(|k| lower.contains(k.as_str())) {
            Classification::Unproductive
        } else {
            Classification::Neutral
        }
    }

    /// Returns every keyword (from both lists) found in `text`, productive first.
    pub fn matches(&self, text: &str) -> Vec<&str> {
        let lower = text.to_lowercase();
        self.productive
            .iter()
            .chain(self.unproductive.iter())
            .filter(|k| lower.contains(k.as_str()))
            .map(String::as_str)
            .collect()
    }
}

fn push_unique(list: &mut Vec<String>, extra: &[String]) {
    for keyword in extra {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || list.contains(&keyword) {
            continue;
        }
        list.push(keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lists_are_lowercase() {
        let set = KeywordSet::default();
        assert_eq!(set.productive.len(), 15);
        assert_eq!(set.unproductive.len(), 11);
        assert!(set
            .productive
            .iter()
            .chain(set.unproductive.iter())
            .all(|k| *k == k.to_lowercase()));
    }

    #[test]
    fn classify_is_case_insensitive() {
        let set = KeywordSet::default();
        assert_eq!(set.classify("DEBUGGED the parser"), Classification::Productive);
        assert_eq!(set.classify("Watched YouTube"), Classification::Unproductive);
        assert_eq!(set.classify("Had lunch"), Classification::Neutral);
    }

    #[test]
    fn classify_matches_inside_words() {
        let set = KeywordSet::default();
        assert_eq!(set.classify("Paired with a coder"), Classification::Productive);
        assert_eq!(set.classify("Took a snap"), Classification::Unproductive);
    }

    #[test]
    fn productive_wins_over_unproductive() {
        let set = KeywordSet::default();
        assert_eq!(
            set.classify("Fixed a bug after scrolling reddit"),
            Classification::Productive
        );
    }

    #[test]
    fn empty_text_is_neutral() {
        assert_eq!(KeywordSet::default().classify(""), Classification::Neutral);
    }

    #[test]
    fn extend_lowercases_and_skips_duplicates() {
        let mut set = KeywordSet::default();
        set.extend(
            &["Read".into(), "code".into(), "  ".into()],
            &["TikTok".into()],
        );
        assert_eq!(set.productive.len(), 16);
        assert_eq!(set.productive.last().map(String::as_str), Some("read"));
        assert_eq!(set.unproductive.last().map(String::as_str), Some("tiktok"));
        assert_eq!(set.classify("Read a book"), Classification::Productive);
        assert_eq!(set.classify("tiktok binge"), Classification::Unproductive);
    }

    #[test]
    fn matches_lists_every_hit() {
        let set = KeywordSet::default();
        assert_eq!(set.matches("Coded, then gaming"), vec!["code", "gaming"]);
        assert!(set.matches("Had lunch").is_empty());
    }
}
