//! Append-only move log.
//!
//! Backed by `im::Vector` so session snapshots share the log in O(1).
//! Entries are stored oldest-first.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MoveRecord, Player};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    entries: Vector<MoveRecord>,
}

impl MoveLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, record: MoveRecord) {
        self.entries.push_back(record);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest entry first.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter()
    }

    /// Newest entry first, for display.
    pub fn newest_first(&self) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    /// Entries made by `player`, oldest first.
    pub fn by_player(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.entries.iter().filter(move |r| r.player == player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    fn record(player: Player, category: Category, turn: u32) -> MoveRecord {
        MoveRecord::new(player, category, 5, [1, 1, 1, 1, 1], turn)
    }

    #[test]
    fn test_order() {
        let mut log = MoveLog::new();
        log.push(record(Player::User, Category::Ones, 1));
        log.push(record(Player::Ai, Category::Chance, 1));
        log.push(record(Player::User, Category::Twos, 2));

        let oldest: Vec<_> = log.iter().map(|r| r.category).collect();
        assert_eq!(oldest, vec![Category::Ones, Category::Chance, Category::Twos]);

        let newest: Vec<_> = log.newest_first().map(|r| r.category).collect();
        assert_eq!(newest, vec![Category::Twos, Category::Chance, Category::Ones]);

        assert_eq!(log.last().map(|r| r.category), Some(Category::Twos));
        assert_eq!(log.by_player(Player::User).count(), 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut log = MoveLog::new();
        log.push(record(Player::User, Category::Ones, 1));
        let snapshot = log.clone();
        log.push(record(Player::Ai, Category::Twos, 1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut log = MoveLog::new();
        log.push(record(Player::User, Category::Ones, 1));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_serialization() {
        let mut log = MoveLog::new();
        log.push(record(Player::Ai, Category::Sixes, 4));
        let json = serde_json::to_string(&log).unwrap();
        let back: MoveLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
    }
}
