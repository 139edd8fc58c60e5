//! MCTS configuration.
//!
//! All tunables of a search in one serde-friendly struct. Missing fields in a
//! JSON file fall back to their defaults, so a config file only has to name
//! what it changes.

use crate::{MctsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Search budget and selection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Wall-clock seconds spent per decision.
    /// Default: 5.0
    pub sim_time_secs: f64,

    /// UCT exploration constant C.
    /// Higher values = more exploration
    /// Default: 1.0
    pub exploration_constant: f64,

    /// Seed for the search RNG. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            sim_time_secs: 5.0,
            exploration_constant: 1.0,
            seed: None,
        }
    }
}

impl MctsConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MctsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects budgets and constants the search cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.sim_time_secs.is_finite() || self.sim_time_secs <= 0.0 {
            return Err(MctsError::Config(format!(
                "sim_time_secs must be a positive number of seconds, got {}",
                self.sim_time_secs
            )));
        }
        if Duration::try_from_secs_f64(self.sim_time_secs).is_err() {
            return Err(MctsError::Config(format!(
                "sim_time_secs {} does not fit in a duration",
                self.sim_time_secs
            )));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(MctsError::Config(format!(
                "exploration_constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }

    /// Budget per decision. Only meaningful on a validated config.
    pub fn time_budget(&self) -> Duration {
        Duration::from_secs_f64(self.sim_time_secs)
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        let seed = match self.seed {
            Some(seed) => seed.to_string(),
            None => "random".to_string(),
        };
        format!(
            "time[{:.2}s]_c[{:.2}]_seed[{}]",
            self.sim_time_secs, self.exploration_constant, seed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_defaults() {
        let config = MctsConfig::default();
        assert_eq!(config.sim_time_secs, 5.0);
        assert_eq!(config.exploration_constant, 1.0);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
        assert_eq!(config.time_budget(), Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_budget() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e30] {
            let config = MctsConfig {
                sim_time_secs: bad,
                ..MctsConfig::default()
            };
            assert_matches!(config.validate(), Err(MctsError::Config(_)));
        }
    }

    #[test]
    fn test_invalid_exploration_constant() {
        let config = MctsConfig {
            exploration_constant: -0.5,
            ..MctsConfig::default()
        };
        assert_matches!(config.validate(), Err(MctsError::Config(_)));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = MctsConfig::from_json_str(r#"{ "seed": 42 }"#).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.sim_time_secs, 5.0);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let result = MctsConfig::from_json_str(r#"{ "sim_time_secs": 0 }"#);
        assert_matches!(result, Err(MctsError::Config(_)));

        let result = MctsConfig::from_json_str(r#"{ "sim_time_secs": 1e30 }"#);
        assert_matches!(result, Err(MctsError::Config(_)));

        let result = MctsConfig::from_json_str("not json");
        assert_matches!(result, Err(MctsError::Json(_)));
    }

    #[test]
    fn test_config_string() {
        let config = MctsConfig {
            seed: Some(7),
            ..MctsConfig::default()
        };
        assert_eq!(config.to_config_string(), "time[5.00s]_c[1.00]_seed[7]");
        assert_eq!(
            MctsConfig::default().to_config_string(),
            "time[5.00s]_c[1.00]_seed[random]"
        );
    }
}
