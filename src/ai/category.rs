//! Which category the bot commits to.
//!
//! Each candidate starts at its raw score; every rule in `WEIGHT_RULES` then
//! adds its adjustment. The highest weight wins, earlier categories win ties.

use tracing::{event, Level};

use crate::core::Category;
use crate::scoring::{PossibleScores, FULL_HOUSE_SCORE, YAHTZEE_SCORE};
use crate::sheet::ScoreSheet;

/// A named weight adjustment.
#[derive(Clone, Copy)]
pub struct WeightRule {
    pub name: &'static str,
    pub adjust: fn(Category, u32) -> i64,
}

impl std::fmt::Debug for WeightRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightRule").field("name", &self.name).finish()
    }
}

/// Adjustment rules in evaluation order.
pub const WEIGHT_RULES: [WeightRule; 6] = [
    WeightRule {
        name: "yahtzee",
        adjust: yahtzee_rule,
    },
    WeightRule {
        name: "upper_par",
        adjust: upper_par_rule,
    },
    WeightRule {
        name: "straight_scratch",
        adjust: straight_scratch_rule,
    },
    WeightRule {
        name: "full_house",
        adjust: full_house_rule,
    },
    WeightRule {
        name: "chance_reserve",
        adjust: chance_reserve_rule,
    },
    WeightRule {
        name: "of_a_kind_low",
        adjust: of_a_kind_low_rule,
    },
];

/// Take a Yahtzee; avoid scratching the box.
pub fn yahtzee_rule(category: Category, score: u32) -> i64 {
    match (category, score) {
        (Category::Yahtzee, YAHTZEE_SCORE) => 1000,
        (Category::Yahtzee, 0) => -100,
        _ => 0,
    }
}

/// Reward three-of-that-face in the upper section; guard high faces
/// from being scratched since they carry the upper bonus.
pub fn upper_par_rule(category: Category, score: u32) -> i64 {
    let Some(face) = category.face() else {
        return 0;
    };
    let face = i64::from(face);
    let par = face * 3;
    let score = i64::from(score);

    if score >= par {
        20
    } else if score == 0 {
        if face <= 2 {
            -5
        } else {
            -20 * face
        }
    } else {
        -5
    }
}

pub fn straight_scratch_rule(category: Category, score: u32) -> i64 {
    match category {
        Category::SmallStraight | Category::LargeStraight if score == 0 => -15,
        _ => 0,
    }
}

pub fn full_house_rule(category: Category, score: u32) -> i64 {
    if category == Category::FullHouse && score == FULL_HOUSE_SCORE {
        15
    } else {
        0
    }
}

/// Keep Chance for high rolls.
pub fn chance_reserve_rule(category: Category, score: u32) -> i64 {
    if category == Category::Chance && score < 20 {
        -10
    } else {
        0
    }
}

pub fn of_a_kind_low_rule(category: Category, score: u32) -> i64 {
    match category {
        Category::ThreeOfAKind | Category::FourOfAKind => match score {
            0 => -10,
            1..=14 => -5,
            _ => 0,
        },
        _ => 0,
    }
}

/// Raw score plus every rule's adjustment.
#[must_use]
pub fn category_weight(category: Category, score: u32) -> i64 {
    WEIGHT_RULES
        .iter()
        .fold(i64::from(score), |weight, rule| weight + (rule.adjust)(category, score))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryDecision {
    pub category: Category,
    /// `None` when the fallback picked the category.
    pub weight: Option<i64>,
}

/// Pick the category to commit.
///
/// Candidates are the present, unfilled entries of `possible`. If there are
/// none, falls back to the first unfilled category on `sheet`. Returns `None`
/// only for a complete sheet.
#[must_use]
pub fn decide_category(possible: &PossibleScores, sheet: &ScoreSheet) -> Option<CategoryDecision> {
    let mut best: Option<CategoryDecision> = None;

    for (category, score) in possible.selectable(sheet) {
        let weight = category_weight(category, score);
        let better = match best {
            Some(CategoryDecision {
                weight: Some(best_weight),
                ..
            }) => weight > best_weight,
            _ => true,
        };
        if better {
            best = Some(CategoryDecision {
                category,
                weight: Some(weight),
            });
        }
    }

    if let Some(decision) = best {
        if tracing::enabled!(Level::DEBUG) {
            event!(
                target: "rust_yahtzee::ai",
                Level::DEBUG,
                category = ?decision.category,
                weight = ?decision.weight,
                candidates = possible.selectable(sheet).count(),
                forced = ?possible.forced(),
                "category decision"
            );
        }
        return Some(decision);
    }

    let fallback = sheet.unfilled().next()?;
    tracing::warn!(
        target: "rust_yahtzee::ai",
        category = ?fallback,
        reason = "no_selectable_category",
        message = "no candidate in possible scores; taking first open category"
    );
    Some(CategoryDecision {
        category: fallback,
        weight: None,
    })
}

/// Shorthand for `decide_category(..).category`.
#[must_use]
pub fn choose_category(possible: &PossibleScores, sheet: &ScoreSheet) -> Option<Category> {
    decide_category(possible, sheet).map(|d| d.category)
}
