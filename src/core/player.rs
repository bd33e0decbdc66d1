//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the table: the human user and the bot.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human at the keyboard. Always moves first.
    User,
    /// The heuristic bot.
    Ai,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::User, Player::Ai];

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::User => 0,
            Player::Ai => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::User => Player::Ai,
            Player::Ai => Player::User,
        }
    }

    #[must_use]
    pub const fn is_ai(self) -> bool {
        matches!(self, Player::Ai)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::User => f.write_str("user"),
            Player::Ai => f.write_str("ai"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_yahtzee::core::{Player, PlayerMap};
///
/// let mut bonus: PlayerMap<u32> = PlayerMap::with_value(0);
/// bonus[Player::Ai] += 100;
/// assert_eq!(bonus[Player::User], 0);
/// assert_eq!(bonus[Player::Ai], 100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::User), factory(Player::Ai)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
