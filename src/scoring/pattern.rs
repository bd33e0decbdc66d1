//! Dice pattern helpers shared by scoring and the bot.

use crate::core::DiceValues;

/// How many dice show each face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaceCounts([u8; 6]);

impl FaceCounts {
    /// Count faces. Values outside 1..=6 are ignored.
    #[must_use]
    pub fn of(dice: &DiceValues) -> Self {
        let mut counts = [0u8; 6];
        for &value in dice {
            debug_assert!((1..=6).contains(&value), "die face out of range: {value}");
            if let Some(slot) = counts.get_mut(usize::from(value).wrapping_sub(1)) {
                *slot += 1;
            }
        }
        Self(counts)
    }

    /// Dice showing `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        match face {
            1..=6 => self.0[face as usize - 1],
            _ => 0,
        }
    }

    /// Largest count of any single face.
    #[must_use]
    pub fn max_count(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Some face appears exactly `n` times.
    #[must_use]
    pub fn has_exact(&self, n: u8) -> bool {
        self.0.contains(&n)
    }

    /// `(face, count)` for every face present, ascending by face.
    pub fn present(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, &c)| (i as u8 + 1, c))
    }

    /// Distinct faces present, ascending.
    pub fn distinct(&self) -> impl Iterator<Item = u8> + '_ {
        self.present().map(|(face, _)| face)
    }
}

/// A run of consecutive distinct faces, `start..start + len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRun {
    pub start: u8,
    pub len: u8,
}

impl FaceRun {
    #[must_use]
    pub fn contains(&self, face: u8) -> bool {
        face >= self.start && face < self.start + self.len
    }
}

/// Longest run of consecutive distinct faces; the lowest one wins a tie.
#[must_use]
pub fn longest_run(dice: &DiceValues) -> FaceRun {
    let counts = FaceCounts::of(dice);
    let mut best = FaceRun { start: 0, len: 0 };
    let mut current = FaceRun { start: 0, len: 0 };

    for face in 1..=6u8 {
        if counts.count(face) > 0 {
            if current.len == 0 {
                current.start = face;
            }
            current.len += 1;
            if current.len > best.len {
                best = current;
            }
        } else {
            current.len = 0;
        }
    }
    best
}

/// All five dice show the same face.
#[must_use]
pub fn is_yahtzee_roll(dice: &DiceValues) -> bool {
    dice.iter().all(|&v| v == dice[0])
}

#[must_use]
pub fn dice_sum(dice: &DiceValues) -> u32 {
    dice.iter().map(|&v| u32::from(v)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_counts() {
        let counts = FaceCounts::of(&[5, 5, 5, 5, 2]);
        assert_eq!(counts.count(5), 4);
        assert_eq!(counts.count(2), 1);
        assert_eq!(counts.count(1), 0);
        assert_eq!(counts.count(7), 0);
        assert_eq!(counts.max_count(), 4);
        assert!(counts.has_exact(4));
        assert!(!counts.has_exact(3));
        assert_eq!(counts.present().collect::<Vec<_>>(), vec![(2, 1), (5, 4)]);
    }

    #[test]
    fn test_longest_run() {
        assert_eq!(longest_run(&[1, 2, 3, 4, 6]), FaceRun { start: 1, len: 4 });
        assert_eq!(longest_run(&[6, 5, 4, 3, 2]), FaceRun { start: 2, len: 5 });
        assert_eq!(longest_run(&[1, 2, 4, 5, 6]), FaceRun { start: 4, len: 3 });
        assert_eq!(longest_run(&[3, 3, 3, 3, 3]), FaceRun { start: 3, len: 1 });
    }

    #[test]
    fn test_longest_run_tie_prefers_lowest() {
        assert_eq!(longest_run(&[1, 2, 4, 5, 5]), FaceRun { start: 1, len: 2 });
    }

    #[test]
    fn test_run_contains() {
        let run = FaceRun { start: 2, len: 4 };
        assert!(!run.contains(1));
        assert!(run.contains(2));
        assert!(run.contains(5));
        assert!(!run.contains(6));
    }

    #[test]
    fn test_yahtzee_roll() {
        assert!(is_yahtzee_roll(&[4, 4, 4, 4, 4]));
        assert!(!is_yahtzee_roll(&[4, 4, 4, 4, 3]));
    }

    #[test]
    fn test_dice_sum() {
        assert_eq!(dice_sum(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(dice_sum(&[6; 5]), 30);
    }
}
