#![deny(warnings)]

//! Runtime services around the path engine.
//!
//! - Episode reward simulator with a seeded contribution sampler
//! - YAML engine configuration
//! - Enhanced-metrics collaborator boundary with literal fallbacks

pub mod config;
pub mod enhanced;
pub mod sampler;
pub mod simulator;

pub use config::{ConfigError, EngineConfig};
pub use enhanced::{
    fallback, fetch_or_fallback, CollaboratorError, EnhancedAction, EnhancedMetricsSource,
    EnhancedRequest, EnhancedResponse, RewardDecomposition,
};
pub use sampler::ContributionSampler;
pub use simulator::{advance_episode, run_episodes, EpisodeSimulator, MarlParams};
