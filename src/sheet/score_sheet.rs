//! Per-player scorecard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Category;

/// Upper subtotal needed for the upper bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// Points added when the upper subtotal reaches the threshold.
pub const UPPER_BONUS: u32 = 35;

/// Points per extra Yahtzee once the Yahtzee box holds 50.
pub const YAHTZEE_BONUS: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    #[error("{0} is already filled")]
    AlreadyFilled(Category),
}

/// Filled categories plus the accumulated Yahtzee bonus.
///
/// A filled category is never overwritten. The upper bonus is derived from
/// the six upper scores on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreSheet {
    scores: [Option<u32>; Category::COUNT],
    yahtzee_bonus_count: u32,
}

/// Derived totals for display and the final tally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetTotals {
    pub upper_subtotal: u32,
    pub upper_bonus: u32,
    /// `upper_subtotal + upper_bonus`
    pub upper_total: u32,
    pub lower_subtotal: u32,
    pub yahtzee_bonus: u32,
    /// `lower_subtotal + yahtzee_bonus`
    pub lower_total: u32,
    pub grand_total: u32,
}

impl ScoreSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score in `category`, or `None` while unfilled.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    #[must_use]
    pub fn is_filled(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Write a score into an unfilled category.
    pub fn fill(&mut self, category: Category, score: u32) -> Result<(), SheetError> {
        let slot = &mut self.scores[category.index()];
        if slot.is_some() {
            return Err(SheetError::AlreadyFilled(category));
        }
        *slot = Some(score);
        Ok(())
    }

    /// Count one more Yahtzee bonus.
    pub fn award_yahtzee_bonus(&mut self) {
        self.yahtzee_bonus_count += 1;
    }

    #[must_use]
    pub fn yahtzee_bonus_count(&self) -> u32 {
        self.yahtzee_bonus_count
    }

    /// Accumulated Yahtzee bonus points.
    #[must_use]
    pub fn yahtzee_bonus(&self) -> u32 {
        self.yahtzee_bonus_count * YAHTZEE_BONUS
    }

    /// Whether the Yahtzee box holds 50, which makes further Yahtzees earn a bonus.
    #[must_use]
    pub fn has_scored_yahtzee(&self) -> bool {
        self.get(Category::Yahtzee) == Some(crate::scoring::YAHTZEE_SCORE)
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    /// All 13 categories filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_count() == Category::COUNT
    }

    /// Unfilled categories in scorecard order.
    pub fn unfilled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| !self.is_filled(*c))
    }

    /// Sum of the six upper boxes; unfilled boxes count as 0.
    #[must_use]
    pub fn upper_subtotal(&self) -> u32 {
        Category::UPPER.iter().map(|c| self.get(*c).unwrap_or(0)).sum()
    }

    #[must_use]
    pub fn upper_bonus(&self) -> u32 {
        if self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// Sum of the seven lower boxes, excluding the Yahtzee bonus.
    #[must_use]
    pub fn lower_subtotal(&self) -> u32 {
        Category::ALL
            .iter()
            .filter(|c| !c.is_upper())
            .map(|c| self.get(*c).unwrap_or(0))
            .sum()
    }

    #[must_use]
    pub fn grand_total(&self) -> u32 {
        self.totals().grand_total
    }

    #[must_use]
    pub fn totals(&self) -> SheetTotals {
        let upper_subtotal = self.upper_subtotal();
        let upper_bonus = self.upper_bonus();
        let lower_subtotal = self.lower_subtotal();
        let yahtzee_bonus = self.yahtzee_bonus();
        SheetTotals {
            upper_subtotal,
            upper_bonus,
            upper_total: upper_subtotal + upper_bonus,
            lower_subtotal,
            yahtzee_bonus,
            lower_total: lower_subtotal + yahtzee_bonus,
            grand_total: upper_subtotal + upper_bonus + lower_subtotal + yahtzee_bonus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper_sheet(scores: [u32; 6]) -> ScoreSheet {
        let mut sheet = ScoreSheet::new();
        for (category, score) in Category::UPPER.into_iter().zip(scores) {
            sheet.fill(category, score).unwrap();
        }
        sheet
    }

    #[test]
    fn test_new_sheet_is_empty() {
        let sheet = ScoreSheet::new();
        assert_eq!(sheet.filled_count(), 0);
        assert!(!sheet.is_complete());
        assert_eq!(sheet.unfilled().count(), 13);
        assert_eq!(sheet.totals(), SheetTotals::default());
    }

    #[test]
    fn test_fill_once() {
        let mut sheet = ScoreSheet::new();
        sheet.fill(Category::Chance, 22).unwrap();
        assert_eq!(sheet.get(Category::Chance), Some(22));

        let err = sheet.fill(Category::Chance, 30).unwrap_err();
        assert_eq!(err, SheetError::AlreadyFilled(Category::Chance));
        assert_eq!(sheet.get(Category::Chance), Some(22));
    }

    #[test]
    fn test_zero_counts_as_filled() {
        let mut sheet = ScoreSheet::new();
        sheet.fill(Category::Yahtzee, 0).unwrap();
        assert!(sheet.is_filled(Category::Yahtzee));
        assert!(!sheet.has_scored_yahtzee());
    }

    #[test]
    fn test_upper_bonus_at_threshold() {
        let sheet = upper_sheet([3, 6, 9, 12, 15, 18]);
        assert_eq!(sheet.upper_subtotal(), 63);
        assert_eq!(sheet.upper_bonus(), 35);
    }

    #[test]
    fn test_no_upper_bonus_below_threshold() {
        let sheet = upper_sheet([2, 6, 9, 12, 15, 18]);
        assert_eq!(sheet.upper_subtotal(), 62);
        assert_eq!(sheet.upper_bonus(), 0);
    }

    #[test]
    fn test_upper_bonus_with_partial_section() {
        let mut sheet = ScoreSheet::new();
        sheet.fill(Category::Fives, 25).unwrap();
        sheet.fill(Category::Sixes, 30).unwrap();
        sheet.fill(Category::Fours, 8).unwrap();
        assert_eq!(sheet.upper_subtotal(), 63);
        assert_eq!(sheet.upper_bonus(), 35);
    }

    #[test]
    fn test_totals_include_yahtzee_bonus() {
        let mut sheet = upper_sheet([3, 6, 9, 12, 15, 18]);
        sheet.fill(Category::Yahtzee, 50).unwrap();
        sheet.fill(Category::Chance, 20).unwrap();
        sheet.award_yahtzee_bonus();
        sheet.award_yahtzee_bonus();

        let totals = sheet.totals();
        assert_eq!(totals.upper_total, 98);
        assert_eq!(totals.lower_subtotal, 70);
        assert_eq!(totals.yahtzee_bonus, 200);
        assert_eq!(totals.lower_total, 270);
        assert_eq!(totals.grand_total, 368);
        assert_eq!(sheet.grand_total(), 368);
        assert_eq!(sheet.yahtzee_bonus_count(), 2);
    }

    #[test]
    fn test_complete() {
        let mut sheet = ScoreSheet::new();
        for category in Category::ALL {
            sheet.fill(category, 0).unwrap();
        }
        assert!(sheet.is_complete());
        assert_eq!(sheet.unfilled().count(), 0);
    }

    #[test]
    fn test_serialization() {
        let mut sheet = ScoreSheet::new();
        sheet.fill(Category::FullHouse, 25).unwrap();
        sheet.award_yahtzee_bonus();
        let json = serde_json::to_string(&sheet).unwrap();
        let back: ScoreSheet = serde_json::from_str(&json).unwrap();
        assert_eq!(sheet, back);
    }
}
