//! Draw result sources.
//!
//! Published results reach the checker through the [`ResultSource`] trait
//! so the settlement path never reads ambient global state; the storefront
//! ships with a fixture source standing in for a real results feed.

use crate::games::types::{DrawResult, GameKind, NumberPick};
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

/// Read-side contract for published draw results
pub trait ResultSource {
    /// All published results for a game, unordered
    fn results_for(&self, game: GameKind) -> Vec<DrawResult>;

    /// Most recently drawn result for a game, if any is published
    fn latest(&self, game: GameKind) -> Option<DrawResult> {
        self.results_for(game)
            .into_iter()
            .max_by_key(|r| r.draw_date)
    }
}

static PUBLISHED_FIXTURES: Lazy<Vec<DrawResult>> = Lazy::new(|| {
    vec![
        DrawResult {
            game: GameKind::Lotto,
            draw_date: Utc.with_ymd_and_hms(2026, 8, 22, 20, 30, 0).unwrap(),
            numbers: NumberPick::new(vec![12, 18, 23, 34, 42, 47], vec![7]),
        },
        DrawResult {
            game: GameKind::Lotto,
            draw_date: Utc.with_ymd_and_hms(2026, 8, 19, 20, 30, 0).unwrap(),
            numbers: NumberPick::new(vec![3, 9, 26, 31, 44, 55], vec![18]),
        },
        DrawResult {
            game: GameKind::AfroMillions,
            draw_date: Utc.with_ymd_and_hms(2026, 8, 21, 20, 0, 0).unwrap(),
            numbers: NumberPick::new(vec![3, 11, 24, 38, 44], vec![2, 9]),
        },
        DrawResult {
            game: GameKind::Thunderball,
            draw_date: Utc.with_ymd_and_hms(2026, 8, 22, 20, 0, 0).unwrap(),
            numbers: NumberPick::new(vec![5, 13, 21, 29, 33], vec![10]),
        },
        DrawResult {
            game: GameKind::SetForLife,
            draw_date: Utc.with_ymd_and_hms(2026, 8, 20, 20, 0, 0).unwrap(),
            numbers: NumberPick::new(vec![2, 14, 27, 35, 41], vec![4]),
        },
    ]
});

/// Static fixture feed: the hardcoded results the demo storefront ships
/// with in place of an external draw authority
#[derive(Debug, Clone, Default)]
pub struct FixtureResultSource {
    results: Vec<DrawResult>,
}

impl FixtureResultSource {
    /// Source backed by an arbitrary result list (used by tests)
    pub fn new(results: Vec<DrawResult>) -> Self {
        Self { results }
    }

    /// The shipped fixture list, one or more draws per game
    pub fn published() -> Self {
        Self::new(PUBLISHED_FIXTURES.clone())
    }
}

impl ResultSource for FixtureResultSource {
    fn results_for(&self, game: GameKind) -> Vec<DrawResult> {
        self.results
            .iter()
            .filter(|r| r.game == game)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_fixtures_cover_every_game() {
        let source = FixtureResultSource::published();
        for game in GameKind::all() {
            let results = source.results_for(game);
            assert!(!results.is_empty(), "no fixture for {}", game);
            for result in &results {
                assert_eq!(result.numbers.main.len(), game.main_count());
                assert_eq!(result.numbers.bonus.len(), game.bonus_count());
            }
        }
    }

    #[test]
    fn test_latest_picks_newest_draw() {
        let source = FixtureResultSource::published();
        let latest = source.latest(GameKind::Lotto).unwrap();
        assert_eq!(latest.numbers.main, vec![12, 18, 23, 34, 42, 47]);
    }

    #[test]
    fn test_empty_source_has_no_latest() {
        let source = FixtureResultSource::new(vec![]);
        assert!(source.latest(GameKind::Lotto).is_none());
    }
}
