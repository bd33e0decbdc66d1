//! Single-turn state machine.
//!
//! ```text
//! AwaitingRoll --begin_roll--> Rolling --finish_roll--> AwaitingDecision
//!      AwaitingDecision --begin_roll--> Rolling          (rolls left)
//!      Rolling --finish_roll--> AwaitingCommit            (last roll)
//!      AwaitingDecision | AwaitingCommit --commit--> Committed
//! ```
//!
//! A `TurnController` never outlives its turn: the session replaces it with
//! a fresh one for the opponent after a commit.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::Strategy;
use crate::core::{Category, DiceSet, DiceValues, DieId, Player, RandomSource, NUM_DICE};
use crate::scoring::{
    forced_category, is_yahtzee_roll, joker_active, possible_scores, score_category,
    PossibleScores,
};
use crate::sheet::{ScoreSheet, SheetError};

use super::pacing::{AiStep, Pacer};

/// Rolls available per turn.
pub const MAX_ROLLS: u8 = 3;

/// Rejected turn or session action. Rejection never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error("game has not started")]
    NotStarted,
    #[error("game has already started")]
    AlreadyStarted,
    #[error("game is over")]
    GameOver,
    #[error("it is {0}'s turn")]
    NotYourTurn(Player),
    #[error("no rolls left this turn")]
    NoRollsLeft,
    #[error("a roll is in progress")]
    RollInProgress,
    #[error("no roll is in progress")]
    NoRollInProgress,
    #[error("dice have not been rolled this turn")]
    NoRollYet,
    #[error("no die {0}")]
    InvalidDie(DieId),
    #[error("{0} is already filled")]
    CategoryFilled(Category),
    #[error("joker roll must fill {forced}, not {requested}")]
    JokerForced { forced: Category, requested: Category },
    #[error("turn already committed")]
    TurnOver,
    #[error("no category can be selected")]
    NothingSelectable,
}

impl From<SheetError> for TurnError {
    fn from(err: SheetError) -> Self {
        match err {
            SheetError::AlreadyFilled(category) => TurnError::CategoryFilled(category),
        }
    }
}

/// Where a turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No roll yet.
    AwaitingRoll,
    /// Between `begin_roll` and `finish_roll`.
    Rolling,
    /// Rolled, with rolls remaining.
    AwaitingDecision,
    /// All rolls used; only a commit is possible.
    AwaitingCommit,
    /// A category was filled.
    Committed,
}

/// Outcome of a successful commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub player: Player,
    pub category: Category,
    pub score: u32,
    pub dice: DiceValues,
    pub yahtzee_bonus: bool,
}

/// Dice, rolls and phase for one player's turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    player: Player,
    dice: DiceSet,
    rolls_left: u8,
    phase: TurnPhase,
}

impl TurnController {
    /// Fresh turn: default dice, nothing held, full rolls.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            dice: DiceSet::new(),
            rolls_left: MAX_ROLLS,
            phase: TurnPhase::AwaitingRoll,
        }
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn rolls_left(&self) -> u8 {
        self.rolls_left
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.phase == TurnPhase::Rolling
    }

    /// At least one roll has resolved this turn.
    #[must_use]
    pub fn has_rolled(&self) -> bool {
        matches!(
            self.phase,
            TurnPhase::AwaitingDecision | TurnPhase::AwaitingCommit | TurnPhase::Committed
        )
    }

    /// Enter the rolling phase. Dice do not change until `finish_roll`.
    pub fn begin_roll(&mut self) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::Rolling => return Err(TurnError::RollInProgress),
            TurnPhase::Committed => return Err(TurnError::TurnOver),
            _ => {}
        }
        if self.rolls_left == 0 {
            return Err(TurnError::NoRollsLeft);
        }
        self.phase = TurnPhase::Rolling;
        Ok(())
    }

    /// Resolve every unheld die and consume one roll.
    pub fn finish_roll(&mut self, rng: &mut impl RandomSource) -> Result<DiceValues, TurnError> {
        if self.phase != TurnPhase::Rolling {
            return Err(TurnError::NoRollInProgress);
        }
        self.dice.roll(rng);
        self.rolls_left -= 1;
        self.phase = if self.rolls_left == 0 {
            TurnPhase::AwaitingCommit
        } else {
            TurnPhase::AwaitingDecision
        };
        Ok(self.dice.values())
    }

    /// `begin_roll` followed immediately by `finish_roll`.
    pub fn roll(&mut self, rng: &mut impl RandomSource) -> Result<DiceValues, TurnError> {
        self.begin_roll()?;
        self.finish_roll(rng)
    }

    /// Flip one die's held flag. Returns the new flag.
    pub fn toggle_hold(&mut self, id: DieId) -> Result<bool, TurnError> {
        self.check_rolled()?;
        self.dice.toggle_hold(id).ok_or(TurnError::InvalidDie(id))
    }

    /// Hold exactly `ids`, releasing every other die.
    pub fn apply_holds(&mut self, ids: &[DieId]) -> Result<(), TurnError> {
        self.check_rolled()?;
        if let Some(&bad) = ids.iter().find(|id| !id.is_valid()) {
            return Err(TurnError::InvalidDie(bad));
        }
        self.dice.hold_only(ids);
        Ok(())
    }

    /// What each category would score now. Empty before the first roll
    /// and while a roll is in progress.
    #[must_use]
    pub fn possible_scores(&self, sheet: &ScoreSheet) -> PossibleScores {
        match self.phase {
            TurnPhase::AwaitingDecision | TurnPhase::AwaitingCommit => {
                possible_scores(&self.dice.values(), sheet)
            }
            _ => PossibleScores::empty(),
        }
    }

    /// The current dice are a Joker roll against `sheet`.
    #[must_use]
    pub fn joker_active(&self, sheet: &ScoreSheet) -> bool {
        self.has_rolled() && joker_active(&self.dice.values(), sheet)
    }

    /// Write the current dice into `category` on `sheet`.
    ///
    /// Awards the Yahtzee bonus first when the dice are a Yahtzee and the
    /// Yahtzee box already holds 50. Nothing changes on error.
    pub fn commit(&mut self, category: Category, sheet: &mut ScoreSheet) -> Result<Commit, TurnError> {
        self.check_rolled()?;

        let dice = self.dice.values();
        if sheet.is_filled(category) {
            return Err(TurnError::CategoryFilled(category));
        }
        if let Some(forced) = forced_category(&dice, sheet) {
            if forced != category {
                return Err(TurnError::JokerForced {
                    forced,
                    requested: category,
                });
            }
        }

        let joker = joker_active(&dice, sheet);
        let bonus = is_yahtzee_roll(&dice) && sheet.has_scored_yahtzee();
        let score = score_category(category, &dice, joker);

        sheet.fill(category, score)?;
        if bonus {
            sheet.award_yahtzee_bonus();
        }
        self.phase = TurnPhase::Committed;

        Ok(Commit {
            player: self.player,
            category,
            score,
            dice,
            yahtzee_bonus: bonus,
        })
    }

    /// Play the whole turn with `strategy`, pausing at each step.
    ///
    /// Rolls, then holds and rerolls while rolls remain, stopping early once
    /// the strategy keeps all five dice. A strategy pick that cannot be
    /// committed falls back to the forced category or the first open one.
    pub fn play_automated(
        &mut self,
        sheet: &mut ScoreSheet,
        strategy: &dyn Strategy,
        rng: &mut impl RandomSource,
        pacer: &mut dyn Pacer,
    ) -> Result<Commit, TurnError> {
        pacer.pause(AiStep::TurnStart);
        loop {
            pacer.pause(AiStep::Roll);
            self.roll(rng)?;
            pacer.pause(AiStep::Reveal);

            if self.rolls_left == 0 {
                break;
            }
            let hold = strategy.choose_hold(&self.dice, sheet, self.rolls_left);
            if hold.len() == NUM_DICE {
                break;
            }
            self.apply_holds(&hold)?;
            pacer.pause(AiStep::Think);
        }

        let possible = self.possible_scores(sheet);
        let choice = strategy
            .choose_category(&possible, sheet)
            .ok_or(TurnError::NothingSelectable)?;

        match self.commit(choice, sheet) {
            Ok(commit) => Ok(commit),
            Err(TurnError::CategoryFilled(_) | TurnError::JokerForced { .. }) => {
                let fallback = possible
                    .forced()
                    .or_else(|| sheet.unfilled().next())
                    .ok_or(TurnError::NothingSelectable)?;
                tracing::warn!(
                    target: "rust_yahtzee::ai",
                    requested = %choice,
                    fallback = %fallback,
                    "strategy picked an unusable category"
                );
                self.commit(fallback, sheet)
            }
            Err(err) => Err(err),
        }
    }

    fn check_rolled(&self) -> Result<(), TurnError> {
        match self.phase {
            TurnPhase::Rolling => Err(TurnError::RollInProgress),
            TurnPhase::Committed => Err(TurnError::TurnOver),
            TurnPhase::AwaitingRoll => Err(TurnError::NoRollYet),
            TurnPhase::AwaitingDecision | TurnPhase::AwaitingCommit => Ok(()),
        }
    }
}
