//! Scoring rules.
//!
//! Stateless functions from five dice (and a sheet, for the Joker rule) to
//! scores:
//! - `score_category`: one category
//! - `possible_scores`: the whole table, with the mandatory Joker fill applied

pub mod pattern;
pub mod category_score;
pub mod possible;

pub use pattern::{dice_sum, is_yahtzee_roll, longest_run, FaceCounts, FaceRun};
pub use category_score::{
    score_category, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};
pub use possible::{forced_category, joker_active, possible_scores, PossibleScores};
