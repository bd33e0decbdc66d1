//! The five shared dice.
//!
//! Each die has a stable identity (0..4), a face value and a held flag.
//! Held dice never change on a roll; every unheld die is re-resolved through
//! the game's `RandomSource`.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Number of dice in play.
pub const NUM_DICE: usize = 5;

/// Face shown by freshly reset dice.
pub const DEFAULT_FACE: u8 = 1;

/// Face values of the five dice, in die-identity order.
pub type DiceValues = [u8; NUM_DICE];

/// Stable die identity in `0..NUM_DICE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DieId(pub u8);

impl DieId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// All five die identities.
    pub fn all() -> impl Iterator<Item = DieId> {
        (0..NUM_DICE as u8).map(DieId)
    }

    #[must_use]
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < NUM_DICE
    }
}

impl std::fmt::Display for DieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Die {}", self.0)
    }
}

/// A single die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub id: DieId,
    pub value: u8,
    pub held: bool,
}

/// Ordered set of five dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; NUM_DICE],
}

impl DiceSet {
    /// Five unheld dice showing `DEFAULT_FACE`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dice: std::array::from_fn(|i| Die {
                id: DieId(i as u8),
                value: DEFAULT_FACE,
                held: false,
            }),
        }
    }

    /// Unheld dice with the given faces (test and replay helper).
    #[must_use]
    pub fn from_values(values: DiceValues) -> Self {
        let mut set = Self::new();
        for (die, value) in set.dice.iter_mut().zip(values) {
            die.value = value;
        }
        set
    }

    /// Re-resolve every unheld die. Held dice keep their value.
    pub fn roll(&mut self, rng: &mut impl RandomSource) {
        for die in self.dice.iter_mut().filter(|d| !d.held) {
            die.value = rng.roll_face();
        }
    }

    /// Flip a die's held flag. Returns the new flag, or `None` for an
    /// unknown id.
    pub fn toggle_hold(&mut self, id: DieId) -> Option<bool> {
        let die = self.dice.get_mut(id.index())?;
        die.held = !die.held;
        Some(die.held)
    }

    /// Hold exactly the given dice, releasing all others.
    pub fn hold_only(&mut self, ids: &[DieId]) {
        for die in &mut self.dice {
            die.held = ids.contains(&die.id);
        }
    }

    /// Back to five unheld default dice.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Snapshot of the face values.
    #[must_use]
    pub fn values(&self) -> DiceValues {
        std::array::from_fn(|i| self.dice[i].value)
    }

    #[must_use]
    pub fn get(&self, id: DieId) -> Option<&Die> {
        self.dice.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    #[must_use]
    pub fn held_count(&self) -> usize {
        self.dice.iter().filter(|d| d.held).count()
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRng;

    #[test]
    fn test_new_dice_are_default_and_unheld() {
        let dice = DiceSet::new();
        assert_eq!(dice.values(), [DEFAULT_FACE; NUM_DICE]);
        assert_eq!(dice.held_count(), 0);
        for (i, die) in dice.iter().enumerate() {
            assert_eq!(die.id, DieId(i as u8));
        }
    }

    #[test]
    fn test_roll_resolves_unheld_dice() {
        let mut dice = DiceSet::new();
        let mut rng = ScriptedRng::faces(&[2, 3, 4, 5, 6]);
        dice.roll(&mut rng);
        assert_eq!(dice.values(), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_held_dice_keep_value() {
        let mut dice = DiceSet::from_values([6, 6, 1, 2, 3]);
        dice.toggle_hold(DieId(0));
        dice.toggle_hold(DieId(1));

        let mut rng = ScriptedRng::faces(&[4, 4, 4]);
        dice.roll(&mut rng);

        assert_eq!(dice.values(), [6, 6, 4, 4, 4]);
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn test_toggle_hold() {
        let mut dice = DiceSet::new();
        assert_eq!(dice.toggle_hold(DieId(2)), Some(true));
        assert_eq!(dice.toggle_hold(DieId(2)), Some(false));
        assert_eq!(dice.toggle_hold(DieId(9)), None);
        assert_eq!(dice.values(), [DEFAULT_FACE; NUM_DICE]);
    }

    #[test]
    fn test_hold_only() {
        let mut dice = DiceSet::from_values([1, 2, 3, 4, 5]);
        dice.toggle_hold(DieId(0));
        dice.hold_only(&[DieId(3), DieId(4)]);

        let held: Vec<_> = dice.iter().filter(|d| d.held).map(|d| d.id).collect();
        assert_eq!(held, vec![DieId(3), DieId(4)]);
    }

    #[test]
    fn test_reset() {
        let mut dice = DiceSet::from_values([6, 6, 6, 6, 6]);
        dice.hold_only(&[DieId(1)]);
        dice.reset();
        assert_eq!(dice, DiceSet::new());
    }

    #[test]
    fn test_serialization() {
        let mut dice = DiceSet::from_values([1, 3, 5, 2, 4]);
        dice.toggle_hold(DieId(1));
        let json = serde_json::to_string(&dice).unwrap();
        let back: DiceSet = serde_json::from_str(&json).unwrap();
        assert_eq!(dice, back);
    }
}
