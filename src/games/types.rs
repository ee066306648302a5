use crate::errors::TicketError;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use uuid::Uuid;

/// Supported lottery games
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Lotto,
    AfroMillions,
    Thunderball,
    SetForLife,
}

impl GameKind {
    pub fn all() -> [GameKind; 4] {
        [
            GameKind::Lotto,
            GameKind::AfroMillions,
            GameKind::Thunderball,
            GameKind::SetForLife,
        ]
    }

    /// How many main numbers a pick (and a draw) carries for this game
    pub fn main_count(&self) -> usize {
        match self {
            GameKind::Lotto => 6,
            GameKind::AfroMillions => 5,
            GameKind::Thunderball => 5,
            GameKind::SetForLife => 5,
        }
    }

    /// How many bonus numbers the game uses
    pub fn bonus_count(&self) -> usize {
        match self {
            GameKind::Lotto => 1,
            GameKind::AfroMillions => 2,
            GameKind::Thunderball => 1,
            GameKind::SetForLife => 1,
        }
    }

    pub fn main_range(&self) -> RangeInclusive<u8> {
        match self {
            GameKind::Lotto => 1..=59,
            GameKind::AfroMillions => 1..=50,
            GameKind::Thunderball => 1..=39,
            GameKind::SetForLife => 1..=47,
        }
    }

    pub fn bonus_range(&self) -> RangeInclusive<u8> {
        match self {
            GameKind::Lotto => 1..=59,
            GameKind::AfroMillions => 1..=12,
            GameKind::Thunderball => 1..=14,
            GameKind::SetForLife => 1..=10,
        }
    }

    /// Minimum stake per line, in minor currency units
    pub fn min_stake(&self) -> u64 {
        match self {
            GameKind::Lotto => 200,
            GameKind::AfroMillions => 250,
            GameKind::Thunderball => 100,
            GameKind::SetForLife => 150,
        }
    }

    /// Marketing name of the game's bonus ball pool
    pub fn bonus_name(&self) -> &'static str {
        match self {
            GameKind::Lotto => "Bonus Ball",
            GameKind::AfroMillions => "Lucky Stars",
            GameKind::Thunderball => "Thunderball",
            GameKind::SetForLife => "Life Ball",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameKind::Lotto => write!(f, "lotto"),
            GameKind::AfroMillions => write!(f, "afromillions"),
            GameKind::Thunderball => write!(f, "thunderball"),
            GameKind::SetForLife => write!(f, "setforlife"),
        }
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lotto" => Ok(GameKind::Lotto),
            "afromillions" => Ok(GameKind::AfroMillions),
            "thunderball" => Ok(GameKind::Thunderball),
            "setforlife" | "set-for-life" => Ok(GameKind::SetForLife),
            other => Err(format!("Unknown game: {}", other)),
        }
    }
}

/// A set of chosen or drawn numbers, split into the main pool and the
/// game's bonus pool. Order is irrelevant for matching but the pick
/// order is preserved for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumberPick {
    pub main: Vec<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bonus: Vec<u8>,
}

impl NumberPick {
    pub fn new(main: Vec<u8>, bonus: Vec<u8>) -> Self {
        Self { main, bonus }
    }
}

/// A published draw result. Immutable once published; the evaluator only
/// ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawResult {
    pub game: GameKind,
    pub draw_date: DateTime<Utc>,
    pub numbers: NumberPick,
}

/// Ticket lifecycle state. `Drawn` is reserved for a future "result
/// published but not yet checked" display state; the checker never
/// sets it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Pending,
    Won,
    Lost,
    Drawn,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketStatus::Pending => write!(f, "pending"),
            TicketStatus::Won => write!(f, "won"),
            TicketStatus::Lost => write!(f, "lost"),
            TicketStatus::Drawn => write!(f, "drawn"),
        }
    }
}

/// A player's purchased line. Created pending, settled exactly once by the
/// checker, never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub player_id: String,
    pub game: GameKind,
    pub numbers: NumberPick,
    /// Stake in minor currency units; a positive multiple of the game's
    /// minimum stake.
    pub stake: u64,
    pub status: TicketStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
    pub purchased_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Create a validated pending ticket. All malformed-input rejection
    /// happens here; downstream code assumes a well-formed ticket.
    pub fn new(
        player_id: impl Into<String>,
        game: GameKind,
        numbers: NumberPick,
        stake: u64,
    ) -> Result<Self, TicketError> {
        validate_pick(game, &numbers)?;
        validate_stake(game, stake)?;

        Ok(Self {
            id: Uuid::new_v4(),
            player_id: player_id.into(),
            game,
            numbers,
            stake,
            status: TicketStatus::Pending,
            win_amount: None,
            tier: None,
            purchased_at: Utc::now(),
            settled_at: None,
        })
    }

    /// Quick-pick a random line for the game (the storefront's lucky dip).
    pub fn lucky_dip<R: Rng>(
        player_id: impl Into<String>,
        game: GameKind,
        stake: u64,
        rng: &mut R,
    ) -> Result<Self, TicketError> {
        let main = draw_distinct(rng, game.main_range(), game.main_count());
        let bonus = draw_distinct(rng, game.bonus_range(), game.bonus_count());
        Self::new(player_id, game, NumberPick::new(main, bonus), stake)
    }

    /// Stake divided by the game's minimum stake unit; scales prize
    /// payouts linearly. Always >= 1 for a valid ticket.
    pub fn stake_multiplier(&self) -> f64 {
        self.stake as f64 / self.game.min_stake() as f64
    }
}

fn validate_pick(game: GameKind, numbers: &NumberPick) -> Result<(), TicketError> {
    if numbers.main.len() != game.main_count() {
        return Err(TicketError::WrongMainCount {
            game,
            expected: game.main_count(),
            actual: numbers.main.len(),
        });
    }
    if numbers.bonus.len() != game.bonus_count() {
        return Err(TicketError::WrongBonusCount {
            game,
            expected: game.bonus_count(),
            actual: numbers.bonus.len(),
        });
    }

    check_pool(&numbers.main, game.main_range())?;
    check_pool(&numbers.bonus, game.bonus_range())?;

    Ok(())
}

fn check_pool(numbers: &[u8], range: RangeInclusive<u8>) -> Result<(), TicketError> {
    for (i, n) in numbers.iter().enumerate() {
        if !range.contains(n) {
            return Err(TicketError::NumberOutOfRange {
                number: *n,
                min: *range.start(),
                max: *range.end(),
            });
        }
        if numbers[..i].contains(n) {
            return Err(TicketError::DuplicateNumber(*n));
        }
    }
    Ok(())
}

fn validate_stake(game: GameKind, stake: u64) -> Result<(), TicketError> {
    if stake == 0 || stake % game.min_stake() != 0 {
        return Err(TicketError::InvalidStake {
            stake,
            min_stake: game.min_stake(),
        });
    }
    Ok(())
}

fn draw_distinct<R: Rng>(rng: &mut R, range: RangeInclusive<u8>, count: usize) -> Vec<u8> {
    let lo = *range.start();
    let hi = *range.end();
    let mut picked: Vec<u8> = Vec::with_capacity(count);
    while picked.len() < count {
        let n = rng.gen_range(lo..=hi);
        if !picked.contains(&n) {
            picked.push(n);
        }
    }
    picked
}

/// Format a minor-unit amount as pounds and pence.
pub fn format_amount(minor: u64) -> String {
    format!("\u{a3}{}.{:02}", minor / 100, minor % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lotto_pick() -> NumberPick {
        NumberPick::new(vec![12, 18, 23, 34, 42, 47], vec![7])
    }

    #[test]
    fn test_valid_ticket_starts_pending() {
        let ticket = Ticket::new("alice", GameKind::Lotto, lotto_pick(), 200).unwrap();
        assert_eq!(ticket.status, TicketStatus::Pending);
        assert_eq!(ticket.win_amount, None);
        assert_eq!(ticket.tier, None);
    }

    #[test]
    fn test_wrong_main_count_rejected() {
        let pick = NumberPick::new(vec![1, 2, 3, 4, 5], vec![7]);
        let err = Ticket::new("alice", GameKind::Lotto, pick, 200).unwrap_err();
        assert!(matches!(
            err,
            TicketError::WrongMainCount {
                expected: 6,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_bonus_count_rejected() {
        let pick = NumberPick::new(vec![1, 2, 3, 4, 5], vec![6]);
        let err = Ticket::new("alice", GameKind::AfroMillions, pick, 250).unwrap_err();
        assert!(matches!(err, TicketError::WrongBonusCount { expected: 2, .. }));
    }

    #[test]
    fn test_number_out_of_range_rejected() {
        let pick = NumberPick::new(vec![12, 18, 23, 34, 42, 60], vec![7]);
        let err = Ticket::new("alice", GameKind::Lotto, pick, 200).unwrap_err();
        assert!(matches!(
            err,
            TicketError::NumberOutOfRange {
                number: 60,
                max: 59,
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_number_rejected() {
        let pick = NumberPick::new(vec![12, 18, 23, 34, 42, 12], vec![7]);
        let err = Ticket::new("alice", GameKind::Lotto, pick, 200).unwrap_err();
        assert!(matches!(err, TicketError::DuplicateNumber(12)));
    }

    #[test]
    fn test_stake_must_be_multiple_of_minimum() {
        assert!(Ticket::new("alice", GameKind::Lotto, lotto_pick(), 0).is_err());
        assert!(Ticket::new("alice", GameKind::Lotto, lotto_pick(), 150).is_err());
        assert!(Ticket::new("alice", GameKind::Lotto, lotto_pick(), 800).is_ok());
    }

    #[test]
    fn test_stake_multiplier() {
        let ticket = Ticket::new("alice", GameKind::Lotto, lotto_pick(), 800).unwrap();
        assert_eq!(ticket.stake_multiplier(), 4.0);
    }

    #[test]
    fn test_lucky_dip_is_always_valid() {
        let mut rng = rand::thread_rng();
        for game in GameKind::all() {
            let ticket = Ticket::lucky_dip("alice", game, game.min_stake(), &mut rng).unwrap();
            assert_eq!(ticket.numbers.main.len(), game.main_count());
            assert_eq!(ticket.numbers.bonus.len(), game.bonus_count());
        }
    }

    #[test]
    fn test_game_kind_round_trips_through_str() {
        for game in GameKind::all() {
            assert_eq!(game.to_string().parse::<GameKind>().unwrap(), game);
        }
        assert!("bingo".parse::<GameKind>().is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1750), "\u{a3}17.50");
        assert_eq!(format_amount(5), "\u{a3}0.05");
    }
}
