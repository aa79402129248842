use strum_macros::EnumIter;

use crate::analyzer::Stats;

/// A rule-triggered recommendation attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Suggestion {
    LowProductivity,
    MoreUnproductive,
    TrackMore,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::LowProductivity => {
                "Low productivity detected. Try focusing on one task at a time."
            }
            Suggestion::MoreUnproductive => {
                "You have more unproductive entries than productive ones."
            }
            Suggestion::TrackMore => "Tracking more activities gives better insights.",
        }
    }

    fn applies(self, overall_score: u8, stats: &Stats) -> bool {
        match self {
            Suggestion::LowProductivity => overall_score < 50,
            Suggestion::MoreUnproductive => stats.unproductive > stats.productive,
            Suggestion::TrackMore => stats.total < 3,
        }
    }

    /// Every suggestion whose rule holds, in declaration order.
    ///
    /// An empty day still gets `LowProductivity` and `TrackMore`: its score is 0.
    pub fn evaluate(overall_score: u8, stats: &Stats) -> Vec<Suggestion> {
        use strum::IntoEnumIterator;
        Suggestion::iter()
            .filter(|s| s.applies(overall_score, stats))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(productive: usize, unproductive: usize, total: usize) -> Stats {
        Stats {
            productive,
            unproductive,
            total,
        }
    }

    #[test]
    fn rules_keep_declaration_order() {
        assert_eq!(
            Suggestion::evaluate(20, &stats(0, 2, 2)),
            vec![
                Suggestion::LowProductivity,
                Suggestion::MoreUnproductive,
                Suggestion::TrackMore
            ]
        );
    }

    #[test]
    fn score_threshold_is_strict() {
        assert!(Suggestion::evaluate(50, &stats(0, 0, 5)).is_empty());
        assert_eq!(
            Suggestion::evaluate(49, &stats(0, 0, 5)),
            vec![Suggestion::LowProductivity]
        );
    }

    #[test]
    fn equal_counts_do_not_trigger_more_unproductive() {
        assert!(Suggestion::evaluate(60, &stats(2, 2, 4)).is_empty());
    }

    #[test]
    fn empty_day_triggers_low_and_track_more() {
        assert_eq!(
            Suggestion::evaluate(0, &stats(0, 0, 0)),
            vec![Suggestion::LowProductivity, Suggestion::TrackMore]
        );
    }
}
