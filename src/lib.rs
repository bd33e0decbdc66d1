//! # rust-yahtzee
//!
//! A two-player Yahtzee engine: one human against a heuristic bot.
//!
//! ## Design Principles
//!
//! 1. **Front-End Agnostic**: The engine takes `GameEvent`s and exposes
//!    queries and snapshots. Rendering, input and timing belong to the caller.
//!
//! 2. **Deterministic**: Every die face and the bot's name come from one
//!    `RandomSource`. The same seed plays the same game.
//!
//! 3. **Illegal Input Is Ignored**: A rejected event reports a `TurnError`
//!    and leaves the session unchanged.
//!
//! ## Modules
//!
//! - `core`: Categories, dice, players, events, RNG, configuration
//! - `scoring`: Per-category scores, the possible-scores table, the Joker rule
//! - `sheet`: Scorecards, bonuses and totals
//! - `ai`: Hold and category heuristics behind the `Strategy` trait
//! - `game`: Turn state machine, session, pacing, move log, final tally
//!
//! ## Example
//!
//! ```
//! use rust_yahtzee::{GameConfig, GameEvent, GameSession, NoDelay, Player};
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7));
//! session.handle(GameEvent::StartGame("Ada".into()));
//!
//! while !session.is_game_over() {
//!     if session.ai_to_move() {
//!         session.play_ai_turn(&mut NoDelay).unwrap();
//!         continue;
//!     }
//!     session.handle(GameEvent::Roll);
//!     let (category, _) = session
//!         .possible_scores()
//!         .selectable(session.sheet(Player::User))
//!         .next()
//!         .unwrap();
//!     session.handle(GameEvent::SelectCategory(category));
//! }
//!
//! assert_eq!(session.log().len(), 26);
//! assert!(session.final_tally().is_some());
//! ```

pub mod core;
pub mod scoring;
pub mod sheet;
pub mod ai;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    AiPacing, Category, ConfigError, DiceSet, DiceValues, Die, DieId, GameConfig, GameEvent,
    GameRng, MoveRecord, Player, PlayerMap, RandomSource, ScriptedRng, Section,
    NUM_DICE,
};

pub use crate::scoring::{possible_scores, score_category, PossibleScores};

pub use crate::sheet::{ScoreSheet, SheetTotals};

pub use crate::ai::{HeuristicStrategy, Strategy};

pub use crate::game::{
    AiStep, EventOutcome, FinalTally, GameResult, GameSession, MoveLog, NoDelay, Pacer,
    SessionSnapshot, SleepPacer, TurnController, TurnError, TurnPhase, MAX_ROLLS,
};
