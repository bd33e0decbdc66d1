//! Scorecards and derived totals.

pub mod score_sheet;

pub use score_sheet::{
    ScoreSheet, SheetError, SheetTotals, UPPER_BONUS, UPPER_BONUS_THRESHOLD, YAHTZEE_BONUS,
};
