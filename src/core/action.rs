//! Input events and committed-move records.
//!
//! `GameEvent` is everything a front end can send to a session.
//! `MoveRecord` is what the session remembers about each commit.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::dice::{DiceValues, DieId};
use super::player::Player;

/// A user intent fed into a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// Leave the name prompt and start play.
    StartGame(String),
    /// Roll every unheld die.
    Roll,
    /// Flip one die's held flag.
    ToggleHold(DieId),
    /// Commit the current dice to a category.
    SelectCategory(Category),
    /// Restart with the same names.
    PlayAgain,
    /// Full reset back to the name prompt.
    NewGame,
}

/// A committed category, as recorded in the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who committed.
    pub player: Player,

    /// Category that was filled.
    pub category: Category,

    /// Score written into the category.
    pub score: u32,

    /// Copy of the dice values at commit time.
    pub dice: DiceValues,

    /// Round number (starts at 1, shared by both players' turns).
    pub turn: u32,

    /// Whether this commit also earned a +100 Yahtzee bonus.
    pub yahtzee_bonus: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, category: Category, score: u32, dice: DiceValues, turn: u32) -> Self {
        Self {
            player,
            category,
            score,
            dice,
            turn,
            yahtzee_bonus: false,
        }
    }

    /// Mark the bonus flag.
    #[must_use]
    pub fn with_yahtzee_bonus(mut self, awarded: bool) -> Self {
        self.yahtzee_bonus = awarded;
        self
    }
}
