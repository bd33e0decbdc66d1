//! Presentation pacing for the bot's turn.
//!
//! The turn state machine calls `Pacer::pause` between steps. Pausing never
//! changes game state, so `NoDelay` and `SleepPacer` play identical games.

use std::time::Duration;

use crate::core::AiPacing;

/// A pause point in the bot's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AiStep {
    TurnStart,
    Roll,
    Reveal,
    Think,
    AfterScore,
}

/// Receives the bot's pause points.
pub trait Pacer {
    fn pause(&mut self, step: AiStep);
}

/// Never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&mut self, _step: AiStep) {}
}

/// Blocks the calling thread for the configured delay.
#[derive(Clone, Debug, Default)]
pub struct SleepPacer {
    pacing: AiPacing,
}

impl SleepPacer {
    #[must_use]
    pub fn new(pacing: AiPacing) -> Self {
        Self { pacing }
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, step: AiStep) {
        let delay = self.pacing.delay(step);
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Records every step; handy for asserting the turn sequence.
impl Pacer for Vec<AiStep> {
    fn pause(&mut self, step: AiStep) {
        self.push(step);
    }
}

impl AiPacing {
    /// Delay configured for `step`.
    #[must_use]
    pub fn delay(&self, step: AiStep) -> Duration {
        let ms = match step {
            AiStep::TurnStart => self.turn_start_ms,
            AiStep::Roll => self.roll_ms,
            AiStep::Reveal => self.reveal_ms,
            AiStep::Think => self.think_ms,
            AiStep::AfterScore => self.after_score_ms,
        };
        Duration::from_millis(ms)
    }
}
