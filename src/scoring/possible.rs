//! The possible-scores table and the Joker rule.

use serde::{Deserialize, Serialize};

use crate::core::{Category, DiceValues};
use crate::sheet::ScoreSheet;

use super::category_score::score_category;
use super::pattern::is_yahtzee_roll;

/// What each category would score with the current dice.
///
/// Filled categories are still computed so a caller can show what they would
/// have been; `selectable` filters them out. Under a mandatory Joker fill only
/// the forced Upper category is present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleScores {
    scores: [Option<u32>; Category::COUNT],
    joker: bool,
    forced: Option<Category>,
}

impl PossibleScores {
    /// The empty table.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<u32> {
        self.scores[category.index()]
    }

    #[must_use]
    pub fn contains(&self, category: Category) -> bool {
        self.get(category).is_some()
    }

    /// Present entries in scorecard order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|score| (c, score)))
    }

    /// Present entries that are unfilled on `sheet`.
    pub fn selectable<'a>(
        &'a self,
        sheet: &'a ScoreSheet,
    ) -> impl Iterator<Item = (Category, u32)> + 'a {
        self.iter().filter(|(c, _)| !sheet.is_filled(*c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.iter().filter(|s| s.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Joker scoring applied to the fixed-score Lower categories.
    #[must_use]
    pub fn is_joker(&self) -> bool {
        self.joker
    }

    /// The only category that may be committed, if a Joker fill is mandatory.
    #[must_use]
    pub fn forced(&self) -> Option<Category> {
        self.forced
    }
}

/// The Joker rule is in play: a Yahtzee roll with the Yahtzee box already
/// filled (with any value, 0 included).
#[must_use]
pub fn joker_active(dice: &DiceValues, sheet: &ScoreSheet) -> bool {
    is_yahtzee_roll(dice) && sheet.is_filled(Category::Yahtzee)
}

/// Upper category a Joker roll must fill, if it is still open.
#[must_use]
pub fn forced_category(dice: &DiceValues, sheet: &ScoreSheet) -> Option<Category> {
    if !joker_active(dice, sheet) {
        return None;
    }
    Category::upper_for_face(dice[0]).filter(|c| !sheet.is_filled(*c))
}

/// Score every category for `dice` against `sheet`.
#[must_use]
pub fn possible_scores(dice: &DiceValues, sheet: &ScoreSheet) -> PossibleScores {
    let joker = joker_active(dice, sheet);

    if let Some(forced) = forced_category(dice, sheet) {
        let mut scores = [None; Category::COUNT];
        scores[forced.index()] = Some(score_category(forced, dice, joker));
        return PossibleScores {
            scores,
            joker,
            forced: Some(forced),
        };
    }

    PossibleScores {
        scores: Category::ALL.map(|c| Some(score_category(c, dice, joker))),
        joker,
        forced: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_with(fills: &[(Category, u32)]) -> ScoreSheet {
        let mut sheet = ScoreSheet::new();
        for &(category, score) in fills {
            sheet.fill(category, score).unwrap();
        }
        sheet
    }

    #[test]
    fn test_plain_roll_scores_everything() {
        let sheet = ScoreSheet::new();
        let table = possible_scores(&[5, 5, 5, 5, 2], &sheet);

        assert_eq!(table.len(), 13);
        assert!(!table.is_joker());
        assert_eq!(table.forced(), None);
        assert_eq!(table.get(Category::FourOfAKind), Some(22));
        assert_eq!(table.get(Category::FullHouse), Some(0));
        assert_eq!(table.get(Category::Yahtzee), Some(0));
        assert_eq!(table.get(Category::Fives), Some(20));
    }

    #[test]
    fn test_mandatory_joker_fill() {
        let sheet = sheet_with(&[(Category::Yahtzee, 50)]);
        let table = possible_scores(&[4, 4, 4, 4, 4], &sheet);

        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(Category::Fours, 20)]);
        assert_eq!(table.forced(), Some(Category::Fours));
        assert!(table.is_joker());
    }

    #[test]
    fn test_joker_free_choice() {
        let sheet = sheet_with(&[(Category::Yahtzee, 50), (Category::Fours, 12)]);
        let table = possible_scores(&[4, 4, 4, 4, 4], &sheet);

        assert_eq!(table.forced(), None);
        assert!(table.is_joker());
        assert_eq!(table.len(), 13);
        assert_eq!(table.get(Category::FullHouse), Some(25));
        assert_eq!(table.get(Category::SmallStraight), Some(30));
        assert_eq!(table.get(Category::LargeStraight), Some(40));
        assert_eq!(table.selectable(&sheet).count(), 11);
    }

    #[test]
    fn test_scratched_yahtzee_still_triggers_joker() {
        let sheet = sheet_with(&[(Category::Yahtzee, 0)]);
        assert!(joker_active(&[2, 2, 2, 2, 2], &sheet));
        assert_eq!(forced_category(&[2, 2, 2, 2, 2], &sheet), Some(Category::Twos));
    }

    #[test]
    fn test_first_yahtzee_is_not_joker() {
        let sheet = ScoreSheet::new();
        let table = possible_scores(&[6, 6, 6, 6, 6], &sheet);
        assert!(!table.is_joker());
        assert_eq!(table.get(Category::Yahtzee), Some(50));
        assert_eq!(table.get(Category::LargeStraight), Some(0));
        assert_eq!(table.get(Category::FullHouse), Some(25));
    }

    #[test]
    fn test_selectable_skips_filled() {
        let sheet = sheet_with(&[(Category::Chance, 17), (Category::Ones, 2)]);
        let table = possible_scores(&[1, 2, 3, 4, 5], &sheet);
        let selectable: Vec<_> = table.selectable(&sheet).map(|(c, _)| c).collect();
        assert_eq!(selectable.len(), 11);
        assert!(!selectable.contains(&Category::Chance));
        assert!(table.contains(Category::Chance));
    }

    #[test]
    fn test_empty() {
        let table = PossibleScores::empty();
        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }
}
