//! Bot decision policy.
//!
//! The turn controller only talks to the bot through `Strategy`, so a test
//! can script decisions without touching the heuristics.

use crate::core::{Category, DiceSet};
use crate::scoring::PossibleScores;
use crate::sheet::ScoreSheet;

use super::category::choose_category;
use super::hold::{choose_hold, HoldSet};

/// Decisions the bot makes during its turn.
pub trait Strategy: Send + Sync {
    /// Dice to keep before the next roll.
    fn choose_hold(&self, dice: &DiceSet, sheet: &ScoreSheet, rolls_left: u8) -> HoldSet;

    /// Category to commit. `None` only when nothing on `sheet` is open.
    fn choose_category(&self, possible: &PossibleScores, sheet: &ScoreSheet) -> Option<Category>;
}

/// The fixed hold and category heuristics.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    fn choose_hold(&self, dice: &DiceSet, sheet: &ScoreSheet, rolls_left: u8) -> HoldSet {
        choose_hold(dice, sheet, rolls_left)
    }

    fn choose_category(&self, possible: &PossibleScores, sheet: &ScoreSheet) -> Option<Category> {
        choose_category(possible, sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::possible_scores;

    #[test]
    fn test_heuristic_strategy_delegates() {
        let strategy = HeuristicStrategy;
        let sheet = ScoreSheet::new();
        let dice = DiceSet::from_values([6, 6, 6, 6, 1]);

        assert_eq!(strategy.choose_hold(&dice, &sheet, 2).len(), 4);

        let table = possible_scores(&dice.values(), &sheet);
        assert_eq!(strategy.choose_category(&table, &sheet), Some(Category::Sixes));
    }

    #[test]
    fn test_strategy_is_object_safe() {
        let boxed: Box<dyn Strategy> = Box::new(HeuristicStrategy);
        let sheet = ScoreSheet::new();
        let table = possible_scores(&[1, 2, 3, 4, 5], &sheet);
        assert_eq!(boxed.choose_category(&table, &sheet), Some(Category::LargeStraight));
    }
}
