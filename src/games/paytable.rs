//! Per-game prize tables.
//!
//! Each game's paytable is literal data ordered from the top tier down;
//! `lookup` returns the first rule a match count pair satisfies, so tiers
//! are mutually exclusive and a ticket never credits two tiers at once.
//! The tables are not derivable from a formula and must mirror the
//! published game rules exactly.

use crate::games::types::GameKind;
use serde::Serialize;

/// How a tier treats the bonus match count. Published paytables are not
/// consistent here: Lotto, AfroMillions and Set For Life tiers pay on
/// "at least N" bonus matches, while Thunderball tiers pay only on an
/// exact Thunderball match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BonusRule {
    AtLeast(u8),
    Exactly(u8),
}

impl BonusRule {
    fn satisfied_by(&self, bonus_matches: usize) -> bool {
        match *self {
            BonusRule::AtLeast(n) => bonus_matches >= n as usize,
            BonusRule::Exactly(n) => bonus_matches == n as usize,
        }
    }
}

/// One winning condition in a game's paytable
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierRule {
    /// Exact main-number match count this tier requires
    pub main_required: u8,
    pub bonus: BonusRule,
    /// Marketing label, e.g. "Match 5 + Bonus"
    pub tier: &'static str,
    /// Prize at the minimum stake, in minor currency units
    pub base_prize: u64,
}

const fn tier(main_required: u8, bonus: BonusRule, tier: &'static str, base_prize: u64) -> TierRule {
    TierRule {
        main_required,
        bonus,
        tier,
        base_prize,
    }
}

/// Lotto: 6 main from 1-59 plus a Bonus Ball
const LOTTO_TABLE: &[TierRule] = &[
    tier(6, BonusRule::AtLeast(0), "Jackpot", 500_000_000),
    tier(5, BonusRule::AtLeast(1), "Match 5 + Bonus", 1_750),
    tier(5, BonusRule::AtLeast(0), "Match 5", 850),
    tier(4, BonusRule::AtLeast(0), "Match 4", 140),
    tier(3, BonusRule::AtLeast(0), "Match 3", 30),
];

/// AfroMillions: 5 main from 1-50 plus 2 Lucky Stars from 1-12
const AFROMILLIONS_TABLE: &[TierRule] = &[
    tier(5, BonusRule::AtLeast(2), "Jackpot", 1_400_000_000),
    tier(5, BonusRule::AtLeast(1), "Match 5 + 1 Star", 13_000_000),
    tier(5, BonusRule::AtLeast(0), "Match 5", 1_300_000),
    tier(4, BonusRule::AtLeast(2), "Match 4 + 2 Stars", 84_500),
    tier(4, BonusRule::AtLeast(1), "Match 4 + 1 Star", 7_700),
    tier(3, BonusRule::AtLeast(2), "Match 3 + 2 Stars", 3_600),
];

/// Thunderball: 5 main from 1-39 plus the Thunderball from 1-14.
/// Bonus conditions are exact-match per the published table.
const THUNDERBALL_TABLE: &[TierRule] = &[
    tier(5, BonusRule::Exactly(1), "Match 5 + Thunderball", 50_000_000),
    tier(5, BonusRule::Exactly(0), "Match 5", 500_000),
    tier(4, BonusRule::Exactly(1), "Match 4 + Thunderball", 25_000),
    tier(4, BonusRule::Exactly(0), "Match 4", 10_000),
    tier(3, BonusRule::Exactly(1), "Match 3 + Thunderball", 2_000),
    tier(3, BonusRule::Exactly(0), "Match 3", 1_000),
];

/// Set For Life: 5 main from 1-47 plus the Life Ball from 1-10
const SET_FOR_LIFE_TABLE: &[TierRule] = &[
    tier(5, BonusRule::AtLeast(1), "Match 5 + Life Ball", 360_000_000),
    tier(5, BonusRule::AtLeast(0), "Match 5", 12_000_000),
    tier(4, BonusRule::AtLeast(1), "Match 4 + Life Ball", 25_000),
    tier(4, BonusRule::AtLeast(0), "Match 4", 5_000),
    tier(3, BonusRule::AtLeast(1), "Match 3 + Life Ball", 3_000),
];

/// The full paytable for a game, top tier first
pub fn table(game: GameKind) -> &'static [TierRule] {
    match game {
        GameKind::Lotto => LOTTO_TABLE,
        GameKind::AfroMillions => AFROMILLIONS_TABLE,
        GameKind::Thunderball => THUNDERBALL_TABLE,
        GameKind::SetForLife => SET_FOR_LIFE_TABLE,
    }
}

/// Resolve a match count pair to the highest qualifying tier, or `None`
/// for the "No Prize" outcome. Never an error: unmatched counts are a
/// valid losing result.
pub fn lookup(game: GameKind, main_matches: usize, bonus_matches: usize) -> Option<&'static TierRule> {
    table(game)
        .iter()
        .find(|rule| main_matches == rule.main_required as usize && rule.bonus.satisfied_by(bonus_matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_ordered_top_tier_first() {
        for game in GameKind::all() {
            let rules = table(game);
            assert!(!rules.is_empty());
            for pair in rules.windows(2) {
                assert!(
                    pair[0].base_prize > pair[1].base_prize,
                    "{} table not ordered by prize",
                    game
                );
            }
        }
    }

    #[test]
    fn test_lotto_jackpot_ignores_bonus() {
        let rule = lookup(GameKind::Lotto, 6, 0).unwrap();
        assert_eq!(rule.tier, "Jackpot");
        // Excess bonus matches do not change the tier
        let rule = lookup(GameKind::Lotto, 6, 1).unwrap();
        assert_eq!(rule.tier, "Jackpot");
    }

    #[test]
    fn test_highest_qualifying_tier_wins() {
        // 5 main + bonus also satisfies the plain Match 5 condition but
        // must resolve to the bonus tier.
        let rule = lookup(GameKind::Lotto, 5, 1).unwrap();
        assert_eq!(rule.tier, "Match 5 + Bonus");
        assert_eq!(rule.base_prize, 1_750);

        let rule = lookup(GameKind::Lotto, 5, 0).unwrap();
        assert_eq!(rule.tier, "Match 5");
    }

    #[test]
    fn test_thunderball_bonus_is_exact() {
        assert_eq!(lookup(GameKind::Thunderball, 3, 1).unwrap().tier, "Match 3 + Thunderball");
        assert_eq!(lookup(GameKind::Thunderball, 3, 0).unwrap().tier, "Match 3");
    }

    #[test]
    fn test_afromillions_star_tiers() {
        assert_eq!(lookup(GameKind::AfroMillions, 5, 2).unwrap().tier, "Jackpot");
        assert_eq!(lookup(GameKind::AfroMillions, 5, 1).unwrap().tier, "Match 5 + 1 Star");
        assert_eq!(lookup(GameKind::AfroMillions, 4, 2).unwrap().tier, "Match 4 + 2 Stars");
        // 3 main with fewer than 2 stars wins nothing
        assert!(lookup(GameKind::AfroMillions, 3, 1).is_none());
    }

    #[test]
    fn test_no_prize_is_none_not_an_error() {
        assert!(lookup(GameKind::Lotto, 0, 1).is_none());
        assert!(lookup(GameKind::Lotto, 2, 0).is_none());
        assert!(lookup(GameKind::SetForLife, 2, 1).is_none());
    }
}
