//! Turn sequencing and the game session.
//!
//! - `turn`: one player's turn as a state machine
//! - `session`: the whole game, driven by `GameEvent`s
//! - `pacing`: pause points for the bot's turn
//! - `log`: committed moves, oldest first
//! - `tally`: final totals and winner

pub mod turn;
pub mod session;
pub mod pacing;
pub mod log;
pub mod tally;

pub use turn::{Commit, TurnController, TurnError, TurnPhase, MAX_ROLLS};
pub use session::{EventOutcome, GameSession, SessionSnapshot};
pub use pacing::{AiStep, NoDelay, Pacer, SleepPacer};
pub use log::MoveLog;
pub use tally::{FinalTally, GameResult};
