//! Core types: categories, dice, players, events, RNG, configuration.
//!
//! Everything here is plain data plus the swappable random source. Rules
//! live in `scoring` and `sheet`; sequencing lives in `game`.

pub mod category;
pub mod dice;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;

pub use category::{Category, Section};
pub use dice::{DiceSet, DiceValues, Die, DieId, DEFAULT_FACE, NUM_DICE};
pub use player::{Player, PlayerMap};
pub use rng::{GameRng, RandomSource, ScriptedRng};
pub use config::{AiPacing, ConfigError, GameConfig, DEFAULT_AI_NAMES};
pub use action::{GameEvent, MoveRecord};
