//! Which dice the bot keeps between rolls.
//!
//! Four rules, tried in order; the first that produces a hold wins:
//! 1. four or five of a kind
//! 2. a run of four or more while a straight is open
//! 3. the best-valued face (pairs, trips, open upper boxes)
//! 4. fives and sixes with open upper boxes

use smallvec::SmallVec;
use tracing::{event, Level};

use crate::core::{Category, DiceSet, DieId, NUM_DICE};
use crate::scoring::{longest_run, FaceCounts, FaceRun};
use crate::sheet::ScoreSheet;

/// Die identities to keep.
pub type HoldSet = SmallVec<[DieId; NUM_DICE]>;

/// Which hold rule fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldRule {
    FourOfAKind,
    Straight,
    BestValue,
    HighFaces,
    RerollAll,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoldDecision {
    pub rule: HoldRule,
    pub dice: HoldSet,
}

/// Best-value priority at or above which a face is worth keeping.
const KEEP_PRIORITY: u32 = 5;

/// Pick the dice to keep. `rolls_left` is the number of rolls still available.
#[must_use]
pub fn decide_hold(dice: &DiceSet, sheet: &ScoreSheet, rolls_left: u8) -> HoldDecision {
    let values = dice.values();
    let counts = FaceCounts::of(&values);

    let decision = if let Some((face, _)) = counts.present().find(|&(_, c)| c >= 4) {
        HoldDecision {
            rule: HoldRule::FourOfAKind,
            dice: holding(dice, |v| v == face),
        }
    } else if let Some(run) = open_straight_run(&values, sheet) {
        HoldDecision {
            rule: HoldRule::Straight,
            dice: holding(dice, |v| run.contains(v)),
        }
    } else if let Some(face) = best_value_face(&counts, sheet) {
        HoldDecision {
            rule: HoldRule::BestValue,
            dice: holding(dice, |v| v == face),
        }
    } else {
        // Unreachable in practice: an open Fives or Sixes box already gives its
        // face priority 5, so `best_value_face` claims those dice first.
        let keep_six = !sheet.is_filled(Category::Sixes);
        let keep_five = !sheet.is_filled(Category::Fives);
        let high = holding(dice, |v| (v == 6 && keep_six) || (v == 5 && keep_five));
        if high.is_empty() {
            HoldDecision {
                rule: HoldRule::RerollAll,
                dice: high,
            }
        } else {
            HoldDecision {
                rule: HoldRule::HighFaces,
                dice: high,
            }
        }
    };

    if tracing::enabled!(Level::DEBUG) {
        event!(
            target: "rust_yahtzee::ai",
            Level::DEBUG,
            dice = ?values,
            rolls_left,
            rule = ?decision.rule,
            held = ?decision.dice.iter().map(|d| d.0).collect::<Vec<_>>(),
            "hold decision"
        );
    }

    decision
}

/// Shorthand for `decide_hold(..).dice`.
#[must_use]
pub fn choose_hold(dice: &DiceSet, sheet: &ScoreSheet, rolls_left: u8) -> HoldSet {
    decide_hold(dice, sheet, rolls_left).dice
}

fn holding(dice: &DiceSet, keep: impl Fn(u8) -> bool) -> HoldSet {
    dice.iter().filter(|d| keep(d.value)).map(|d| d.id).collect()
}

fn open_straight_run(values: &[u8; NUM_DICE], sheet: &ScoreSheet) -> Option<FaceRun> {
    let straight_open =
        !sheet.is_filled(Category::SmallStraight) || !sheet.is_filled(Category::LargeStraight);
    if !straight_open {
        return None;
    }
    let run = longest_run(values);
    (run.len >= 4).then_some(run)
}

/// Priority of keeping every die showing `face`.
#[must_use]
pub fn face_priority(face: u8, count: u8, sheet: &ScoreSheet) -> u32 {
    let mut priority = 0;

    if count >= 3 {
        priority += 10;
    }
    if count == 2 {
        priority += 5;
    }

    let upper_open = Category::upper_for_face(face).is_some_and(|c| !sheet.is_filled(c));
    if upper_open {
        priority += 2;
        if face >= 4 {
            priority += 3;
        }
    }

    let kinds_open =
        !sheet.is_filled(Category::ThreeOfAKind) || !sheet.is_filled(Category::FourOfAKind);
    if count >= 2 && kinds_open {
        priority += 2;
    }

    priority
}

/// Face with the highest priority (larger face on a tie), if worth keeping.
fn best_value_face(counts: &FaceCounts, sheet: &ScoreSheet) -> Option<u8> {
    let mut best: Option<(u8, u32)> = None;
    for (face, count) in counts.present() {
        let priority = face_priority(face, count, sheet);
        match best {
            Some((best_face, best_priority))
                if priority < best_priority || (priority == best_priority && face < best_face) => {}
            _ => best = Some((face, priority)),
        }
    }
    best.filter(|&(_, p)| p >= KEEP_PRIORITY).map(|(face, _)| face)
}
