//! Engine configuration loaded from YAML.

use crate::simulator::MarlParams;
use bi_core::{validate_profile, BusinessProfile};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Upper bound on episodes per run.
pub const MAX_EPISODES: u32 = 100_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(String),
    #[error("invalid yaml: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e.to_string())
    }
}

/// Runtime settings. Every field has a default, so an empty document is valid.
///
/// ```yaml
/// episodes: 20
/// seed: 7
/// marl:
///   convergence_ceiling: 95.0
/// profile:
///   industry: saas
///   mrr: 250000
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub episodes: u32,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    pub marl: MarlParams,
    /// Profile used when the caller supplies none.
    pub profile: Option<BusinessProfile>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            episodes: 10,
            seed: None,
            marl: MarlParams::default(),
            profile: None,
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = if text.trim().is_empty() {
            EngineConfig::default()
        } else {
            serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let cfg = Self::from_yaml_str(&text)?;
        info!(path = %path.display(), episodes = cfg.episodes, "loaded engine config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.marl;
        if self.episodes > MAX_EPISODES {
            return Err(ConfigError::Invalid(format!(
                "episodes {} exceeds {MAX_EPISODES}",
                self.episodes
            )));
        }
        if !(m.convergence_ceiling > 0.0 && m.convergence_ceiling <= 100.0) {
            return Err(ConfigError::Invalid(format!(
                "convergence_ceiling {} must be in (0, 100]",
                m.convergence_ceiling
            )));
        }
        if !m.base_rate.is_finite() || m.base_rate <= 0.0 || m.base_rate >= 1.0 {
            return Err(ConfigError::Invalid(format!(
                "base_rate {} must be in (0, 1)",
                m.base_rate
            )));
        }
        if !m.rate_spread.is_finite() || m.rate_spread < 0.0 || m.base_rate + m.rate_spread > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "rate_spread {} must be non-negative and keep the rate at most 1",
                m.rate_spread
            )));
        }
        if m.policy_bump_every == 0 {
            return Err(ConfigError::Invalid("policy_bump_every must be positive".into()));
        }
        if let Some(p) = &self.profile {
            validate_profile(p).map_err(|e| ConfigError::Invalid(format!("profile: {e}")))?;
        }
        Ok(())
    }

    /// Configured profile, or the built-in default.
    pub fn profile_or_default(&self) -> BusinessProfile {
        self.profile.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(EngineConfig::from_yaml_str("").unwrap(), EngineConfig::default());
        assert_eq!(EngineConfig::from_yaml_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let yaml = "episodes: 20\nseed: 7\nmarl:\n  convergence_ceiling: 95.0\nprofile:\n  industry: saas\n  mrr: 250000\n";
        let cfg = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.episodes, 20);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.marl.convergence_ceiling, 95.0);
        assert_eq!(cfg.marl.base_rate, MarlParams::default().base_rate);
        let p = cfg.profile_or_default();
        assert_eq!(p.industry, "saas");
        assert_eq!(p.mrr, 250_000);
        assert_eq!(p.location, "Bangalore");
    }

    #[test]
    fn rejects_out_of_range_params() {
        for yaml in [
            "marl:\n  base_rate: 0.0\n",
            "marl:\n  base_rate: 0.95\n  rate_spread: 0.2\n",
            "marl:\n  convergence_ceiling: 120.0\n",
            "marl:\n  policy_bump_every: 0\n",
            "episodes: 1000000\n",
            "profile:\n  name: \"  \"\n",
        ] {
            let err = EngineConfig::from_yaml_str(yaml).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{yaml}: {err}");
        }
    }

    #[test]
    fn reports_parse_errors() {
        let err = EngineConfig::from_yaml_str("episodes: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = EngineConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
