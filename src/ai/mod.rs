//! The heuristic bot.
//!
//! Stateless decision functions with no lookahead beyond the current dice:
//! - `hold`: which dice to keep between rolls
//! - `category`: which box to commit to, via ordered weight rules
//! - `policy`: the `Strategy` seam the turn controller calls
//! - `names`: the bot's display name

pub mod hold;
pub mod category;
pub mod policy;
pub mod names;

pub use hold::{choose_hold, decide_hold, face_priority, HoldDecision, HoldRule, HoldSet};
pub use category::{
    category_weight, choose_category, decide_category, CategoryDecision, WeightRule, WEIGHT_RULES,
};
pub use policy::{HeuristicStrategy, Strategy};
pub use names::pick_ai_name;
