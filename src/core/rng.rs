//! Swappable random source for die faces and bot-name draws.
//!
//! ## Key Features
//!
//! - **Single source**: dice resolution and name selection share one stream
//! - **Deterministic**: same seed produces identical games
//! - **Scriptable**: `ScriptedRng` replays a fixed sequence for tests
//!
//! ```
//! use rust_yahtzee::core::{GameRng, RandomSource, ScriptedRng};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face();
//! assert!((1..=6).contains(&face));
//!
//! let mut scripted = ScriptedRng::faces(&[6, 6, 1]);
//! assert_eq!(scripted.roll_face(), 6);
//! assert_eq!(scripted.roll_face(), 6);
//! assert_eq!(scripted.roll_face(), 1);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random integers.
///
/// Everything random in a game goes through one implementation of this trait,
/// so a test can substitute a fixed sequence and replay a whole game.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32;

    /// Uniform die face in `1..=6`.
    fn roll_face(&mut self) -> u8 {
        self.next_below(6) as u8 + 1
    }

    /// Uniformly pick an element of `slice`.
    fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if slice.is_empty() {
            return None;
        }
        let idx = self.next_below(slice.len() as u32) as usize;
        slice.get(idx)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

/// Production random source.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of raw draws, cycling when exhausted.
///
/// Each call to `next_below(bound)` returns the next scripted value modulo
/// `bound`.
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: Vec<u32>,
    cursor: usize,
}

impl ScriptedRng {
    /// Script raw draws.
    ///
    /// # Panics
    /// Panics if `draws` is empty.
    #[must_use]
    pub fn new(draws: impl Into<Vec<u32>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "ScriptedRng needs at least one draw");
        Self { draws, cursor: 0 }
    }

    /// Script die faces directly: `roll_face` returns them in order.
    ///
    /// # Panics
    /// Panics if `faces` is empty or holds a value outside 1..=6.
    #[must_use]
    pub fn faces(faces: &[u8]) -> Self {
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "scripted faces must be in 1..=6"
        );
        Self::new(faces.iter().map(|&f| u32::from(f - 1)).collect::<Vec<_>>())
    }

    /// Number of draws consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let raw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        raw % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(), rng2.roll_face());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.next_below(1000)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.next_below(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 6];
        for _ in 0..600 {
            let face = rng.roll_face();
            assert!((1..=6).contains(&face));
            seen[face as usize - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "every face should appear in 600 rolls");
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_clone_replays_stream() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.roll_face();
        }

        let mut replay = rng.clone();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_face()).collect();
        let actual: Vec<_> = (0..10).map(|_| replay.roll_face()).collect();

        assert_eq!(expected, actual);
        assert_eq!(replay.seed(), 42);
    }

    #[test]
    fn test_scripted_faces_cycle() {
        let mut rng = ScriptedRng::faces(&[3, 5]);
        let seq: Vec<_> = (0..5).map(|_| rng.roll_face()).collect();
        assert_eq!(seq, vec![3, 5, 3, 5, 3]);
        assert_eq!(rng.consumed(), 5);
    }

    #[test]
    fn test_scripted_choose_uses_modulo() {
        let mut rng = ScriptedRng::new(vec![7]);
        let names = ["a", "b", "c"];
        assert_eq!(rng.choose(&names), Some(&"b"));
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut source: R) -> u8 {
            source.roll_face()
        }

        let mut rng = ScriptedRng::faces(&[4]);
        assert_eq!(draw(&mut rng), 4);
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    #[should_panic(expected = "scripted faces must be in 1..=6")]
    fn test_scripted_rejects_bad_face() {
        let _ = ScriptedRng::faces(&[0]);
    }
}
