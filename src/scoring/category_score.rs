//! Score of one category for five dice.

use crate::core::{Category, DiceValues};

use super::pattern::{dice_sum, longest_run, FaceCounts};

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// Score `dice` in `category`.
///
/// Pure and order-independent. With `joker` set, Full House and both
/// straights score their fixed value regardless of the dice; every other
/// category is unaffected.
///
/// Five of a kind is accepted as a natural Full House.
#[must_use]
pub fn score_category(category: Category, dice: &DiceValues, joker: bool) -> u32 {
    let counts = FaceCounts::of(dice);

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = category.face().unwrap_or(0);
            u32::from(counts.count(face)) * u32::from(face)
        }
        Category::ThreeOfAKind => of_a_kind(&counts, dice, 3),
        Category::FourOfAKind => of_a_kind(&counts, dice, 4),
        Category::FullHouse => {
            let natural = (counts.has_exact(3) && counts.has_exact(2)) || counts.has_exact(5);
            if joker || natural {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        Category::SmallStraight => {
            if joker || longest_run(dice).len >= 4 {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::LargeStraight => {
            if joker || longest_run(dice).len == 5 {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Category::Yahtzee => {
            if counts.has_exact(5) {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        Category::Chance => dice_sum(dice),
    }
}

fn of_a_kind(counts: &FaceCounts, dice: &DiceValues, n: u8) -> u32 {
    if counts.max_count() >= n {
        dice_sum(dice)
    } else {
        0
    }
}
