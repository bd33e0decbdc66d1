//! End-of-game comparison.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap};
use crate::sheet::{ScoreSheet, SheetTotals};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher grand total.
    Winner(Player),
    /// Equal grand totals.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Both players' totals and the outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTally {
    pub totals: PlayerMap<SheetTotals>,
    pub result: GameResult,
}

impl FinalTally {
    #[must_use]
    pub fn from_sheets(sheets: &PlayerMap<ScoreSheet>) -> Self {
        let totals = PlayerMap::new(|p| sheets[p].totals());
        let user = totals[Player::User].grand_total;
        let ai = totals[Player::Ai].grand_total;
        let result = match user.cmp(&ai) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::User),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Ai),
            std::cmp::Ordering::Equal => GameResult::Draw,
        };
        Self { totals, result }
    }

    #[must_use]
    pub fn grand_total(&self, player: Player) -> u32 {
        self.totals[player].grand_total
    }
}
