//! Configuration for the explore session.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use catalog::DifficultyPolicy;

use crate::delay::{FixedDelay, NoDelay, RevealDelay};
use crate::types::{ExploreError, Result};

/// Configuration for an explore session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Matches shown right after a filter change
    pub page_size: usize,
    /// Matches added per reveal
    pub step: usize,
    /// Pause between a sentinel trigger and the reveal (ms)
    pub reveal_delay_ms: u64,
    /// Whether the difficulty filter is applied
    pub difficulty_policy: DifficultyPolicy,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            step: 6,
            reveal_delay_ms: 500,
            difficulty_policy: DifficultyPolicy::Enforce,
        }
    }
}

impl ExploreConfig {
    /// Same defaults with no reveal delay.
    pub fn immediate() -> Self {
        Self {
            reveal_delay_ms: 0,
            ..Default::default()
        }
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ExploreError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| ExploreError::ConfigError(e.to_string()))
    }

    /// Reject settings under which pagination cannot make progress.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(ExploreError::ConfigError("page_size must be at least 1".to_string()));
        }
        if self.step == 0 {
            return Err(ExploreError::ConfigError("step must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Delay strategy matching `reveal_delay_ms`.
    pub fn delay_strategy(&self) -> Arc<dyn RevealDelay> {
        if self.reveal_delay_ms == 0 {
            Arc::new(NoDelay)
        } else {
            Arc::new(FixedDelay::new(self.reveal_delay()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExploreConfig::default();
        assert_eq!(config.page_size, 12);
        assert_eq!(config.step, 6);
        assert_eq!(config.reveal_delay(), Duration::from_millis(500));
        assert_eq!(config.difficulty_policy, DifficultyPolicy::Enforce);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = ExploreConfig {
            page_size: 9,
            difficulty_policy: DifficultyPolicy::Ignore,
            ..Default::default()
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = ExploreConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ExploreConfig::from_yaml("step: 3\n").unwrap();
        assert_eq!(config.step, 3);
        assert_eq!(config.page_size, 12);
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = ExploreConfig::from_yaml("step: 0\n").unwrap_err();
        assert!(matches!(err, ExploreError::ConfigError(_)));
    }
}
