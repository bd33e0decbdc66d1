//! Bot name selection.

use crate::core::{GameConfig, RandomSource};

/// Draw the bot's name from the configured pool.
///
/// Falls back to `default_ai_name` if the pool is empty.
pub fn pick_ai_name(config: &GameConfig, rng: &mut impl RandomSource) -> String {
    rng.choose(&config.ai_names)
        .cloned()
        .unwrap_or_else(|| config.default_ai_name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;

    #[test]
    fn test_pick_uses_rng() {
        let config = GameConfig::default();
        let mut rng = ScriptedRng::new(vec![1]);
        assert_eq!(pick_ai_name(&config, &mut rng), "Behemoth");
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn test_pick_from_custom_pool() {
        let config = GameConfig::default().with_ai_names(["Solo"]);
        let mut rng = ScriptedRng::new(vec![17]);
        assert_eq!(pick_ai_name(&config, &mut rng), "Solo");
    }

    #[test]
    fn test_empty_pool_uses_default() {
        let mut config = GameConfig::default();
        config.ai_names.clear();
        let mut rng = ScriptedRng::new(vec![0]);
        assert_eq!(pick_ai_name(&config, &mut rng), "Computer");
        assert_eq!(rng.consumed(), 0);
    }
}
