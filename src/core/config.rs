//! Game configuration.
//!
//! Rule constants (dice count, rolls per turn, bonuses) are fixed; this only
//! covers the knobs that do not change the rules: the RNG seed, player-name
//! handling and the bot's presentation pacing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ai_names must contain at least one name")]
    EmptyNamePool,
    #[error("max_name_len must be non-zero")]
    ZeroNameLength,
}

/// Default pool of bot names.
pub const DEFAULT_AI_NAMES: [&str; 20] = [
    "Titan", "Behemoth", "Vanguard", "Strider", "Nemesis", "Apex", "Quantum", "Cipher", "Alpha",
    "Omega", "Sentinel", "Maverick", "Vortex", "Zenith", "Goliath", "Phantom", "Thunder", "Blaze",
    "Warlord", "Shadow",
];

/// Delays between the bot's turn steps, in milliseconds.
///
/// Pacing is presentation only; `AiPacing::zero()` must produce the same game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiPacing {
    /// Before the first roll of the bot's turn.
    pub turn_start_ms: u64,
    /// Dice animation for each roll.
    pub roll_ms: u64,
    /// Showing the rolled dice before deciding.
    pub reveal_ms: u64,
    /// After applying holds, before the next roll.
    pub think_ms: u64,
    /// After committing, before handing the turn back.
    pub after_score_ms: u64,
}

impl AiPacing {
    /// No delays at all (tests and headless play).
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            turn_start_ms: 0,
            roll_ms: 0,
            reveal_ms: 0,
            think_ms: 0,
            after_score_ms: 0,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl Default for AiPacing {
    fn default() -> Self {
        Self {
            turn_start_ms: 1000,
            roll_ms: 600,
            reveal_ms: 800,
            think_ms: 800,
            after_score_ms: 1500,
        }
    }
}

/// Session configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the production RNG.
    /// Same seed and same inputs produce the same game.
    pub seed: u64,

    /// Name used when the user submits a blank name, and after `NewGame`.
    pub default_user_name: String,

    /// Bot name shown before a game starts.
    pub default_ai_name: String,

    /// User names are truncated to this many characters.
    pub max_name_len: usize,

    /// Pool the bot's name is drawn from at game start.
    pub ai_names: Vec<String>,

    /// Bot presentation pacing.
    pub pacing: AiPacing,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            default_user_name: "You".to_string(),
            default_ai_name: "Computer".to_string(),
            max_name_len: 12,
            ai_names: DEFAULT_AI_NAMES.iter().map(|s| s.to_string()).collect(),
            pacing: AiPacing::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai_names.is_empty() {
            return Err(ConfigError::EmptyNamePool);
        }
        if self.max_name_len == 0 {
            return Err(ConfigError::ZeroNameLength);
        }
        Ok(())
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom pacing.
    pub fn with_pacing(mut self, pacing: AiPacing) -> Self {
        self.pacing = pacing;
        self
    }

    /// Create a new config with a custom bot name pool.
    pub fn with_ai_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ai_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Normalize a submitted user name: trimmed, defaulted when blank,
    /// truncated to `max_name_len` characters.
    #[must_use]
    pub fn normalize_user_name(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return self.default_user_name.clone();
        }
        trimmed.chars().take(self.max_name_len).collect()
    }
}
