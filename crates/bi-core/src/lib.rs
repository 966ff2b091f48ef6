#![deny(warnings)]

//! Core domain model for the decision path engine.
//!
//! This crate defines the serializable value types shared by the path
//! generators, the industry catalog and the episode simulator, together with
//! validation helpers that guard their basic invariants.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// MRR used by the default profile when the caller has none.
pub const DEFAULT_MRR: u64 = 100_000;

/// Risk posture used to flavor path selection and messaging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VibeMode {
    Aggressive,
    #[default]
    Balanced,
    Conservative,
}

/// Self-declared appetite for risk captured at onboarding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    #[default]
    Medium,
    High,
}

/// Immutable snapshot of a business, created once at onboarding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusinessProfile {
    /// Business display name.
    pub name: String,
    /// Free-text industry, matched case-insensitively against catalogs.
    pub industry: String,
    /// Monthly recurring revenue in full currency units.
    pub mrr: u64,
    /// Active customer count.
    pub customers: u32,
    /// City the business operates from.
    pub location: String,
    /// Headcount including founders.
    pub team_size: u32,
    /// Growth target in percent.
    #[serde(rename = "growthTarget")]
    pub growth_target_pct: f64,
    pub risk_tolerance: RiskTolerance,
    pub vibe_mode: VibeMode,
}

impl BusinessProfile {
    /// Lowercased, trimmed industry used for every catalog lookup.
    pub fn normalized_industry(&self) -> String {
        self.industry.trim().to_lowercase()
    }
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "My Business".to_string(),
            industry: "general".to_string(),
            mrr: DEFAULT_MRR,
            customers: 250,
            location: "Bangalore".to_string(),
            team_size: 8,
            growth_target_pct: 20.0,
            risk_tolerance: RiskTolerance::Medium,
            vibe_mode: VibeMode::Balanced,
        }
    }
}

/// The eight simulated agents that share credit for every recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentId {
    MarketIntel,
    FinancialPlanner,
    RiskAnalyst,
    ComplianceGuard,
    GrowthStrategist,
    OperationsOptimizer,
    CustomerInsight,
    ExecutionCoordinator,
}

impl AgentId {
    /// All agents in canonical order.
    pub const ALL: [AgentId; 8] = [
        AgentId::MarketIntel,
        AgentId::FinancialPlanner,
        AgentId::RiskAnalyst,
        AgentId::ComplianceGuard,
        AgentId::GrowthStrategist,
        AgentId::OperationsOptimizer,
        AgentId::CustomerInsight,
        AgentId::ExecutionCoordinator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentId::MarketIntel => "market_intel",
            AgentId::FinancialPlanner => "financial_planner",
            AgentId::RiskAnalyst => "risk_analyst",
            AgentId::ComplianceGuard => "compliance_guard",
            AgentId::GrowthStrategist => "growth_strategist",
            AgentId::OperationsOptimizer => "operations_optimizer",
            AgentId::CustomerInsight => "customer_insight",
            AgentId::ExecutionCoordinator => "execution_coordinator",
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-agent numeric values (shares, rewards or sampled contributions).
pub type AgentMap = BTreeMap<AgentId, f64>;

/// Feature name to signed attribution.
pub type AttributionMap = BTreeMap<String, f64>;

/// Build an agent map from percentages listed in [`AgentId::ALL`] order.
pub fn agent_shares(pcts: [u8; 8]) -> AgentMap {
    AgentId::ALL
        .iter()
        .zip(pcts)
        .map(|(id, pct)| (*id, f64::from(pct)))
        .collect()
}

/// Query intent categories recognised by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    MarketEntry,
    Growth,
    Hiring,
    Funding,
    Marketing,
    Operations,
    Pivot,
    Compliance,
    General,
}

impl Intent {
    pub const ALL: [Intent; 9] = [
        Intent::MarketEntry,
        Intent::Growth,
        Intent::Hiring,
        Intent::Funding,
        Intent::Marketing,
        Intent::Operations,
        Intent::Pivot,
        Intent::Compliance,
        Intent::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::MarketEntry => "market_entry",
            Intent::Growth => "growth",
            Intent::Hiring => "hiring",
            Intent::Funding => "funding",
            Intent::Marketing => "marketing",
            Intent::Operations => "operations",
            Intent::Pivot => "pivot",
            Intent::Compliance => "compliance",
            Intent::General => "general",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Up-front and recurring cost of a path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    pub immediate: Decimal,
    pub monthly: Decimal,
}

/// Projected upside of a path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benefits {
    /// Additional revenue in currency units.
    pub revenue: Decimal,
    /// Efficiency gain in percentage points.
    pub efficiency: u8,
    /// Risk reduction in percentage points.
    pub risk_reduction: u8,
}

/// One candidate strategy. Built fresh per request and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionPath {
    /// Stable slug, e.g. "market-entry-aggressive".
    pub id: String,
    pub name: String,
    pub description: String,
    /// Projected value in currency units.
    pub expected_value: Decimal,
    /// Success probability in [0,1].
    pub probability: f64,
    /// Risk score in [0,100].
    pub risk_score: u8,
    /// Timeline in days.
    #[serde(rename = "timeline")]
    pub timeline_days: u32,
    pub costs: Costs,
    pub benefits: Benefits,
    /// Ordered implementation steps.
    pub steps: Vec<String>,
    pub risks: Vec<String>,
    #[serde(rename = "shapleySHAP")]
    pub shapley_shap: AttributionMap,
    /// Percentage share per agent; need not sum to exactly 100.
    pub agent_contributions: AgentMap,
}

impl DecisionPath {
    /// Date the path completes when started on `start`.
    pub fn completion_date(&self, start: NaiveDate) -> Option<NaiveDate> {
        start.checked_add_days(Days::new(u64::from(self.timeline_days)))
    }
}

/// Mutable simulation cursor threaded through successive episodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarlState {
    pub episode: u32,
    pub total_reward: f64,
    pub agent_rewards: AgentMap,
    pub convergence_metric: f64,
    pub replay_buffer_size: u32,
    pub policy_version: u32,
}

impl Default for MarlState {
    fn default() -> Self {
        Self {
            episode: 0,
            total_reward: 0.0,
            agent_rewards: AgentId::ALL.iter().map(|id| (*id, 0.0)).collect(),
            convergence_metric: 0.0,
            replay_buffer_size: 0,
            policy_version: 1,
        }
    }
}

/// Category of a cascading execution option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionCategory {
    Marketing,
    Operations,
    Growth,
    Partnerships,
    Technology,
}

/// A drill-down sub-option for a selected path. Pure value object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionOption {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Projected revenue in currency units.
    pub projected_revenue: Decimal,
    /// Change to risk score in points.
    pub risk_delta: i16,
    /// Change to founder burnout in points.
    pub burnout_delta: i16,
    pub timeline_days: u32,
    /// Cost in currency units.
    pub cost: Decimal,
    pub category: OptionCategory,
}

/// Validation errors for domain invariants.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Probability must be within [0, 1].
    #[error("probability {0} is outside [0,1]")]
    ProbabilityOutOfRange(f64),
    /// Risk score must be within [0, 100].
    #[error("risk score {0} exceeds 100")]
    RiskOutOfRange(u8),
    /// Numeric field must be finite.
    #[error("non-finite numeric value encountered")]
    NonFinite,
    /// Price or cost must be non-negative.
    #[error("negative monetary value is invalid")]
    NegativeMoney,
    /// Required text field is blank.
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
}

/// Validate a business profile.
pub fn validate_profile(p: &BusinessProfile) -> Result<(), ValidationError> {
    if p.name.trim().is_empty() {
        return Err(ValidationError::EmptyField("name"));
    }
    if p.location.trim().is_empty() {
        return Err(ValidationError::EmptyField("location"));
    }
    if !p.growth_target_pct.is_finite() {
        return Err(ValidationError::NonFinite);
    }
    Ok(())
}

/// Validate a decision path.
pub fn validate_path(p: &DecisionPath) -> Result<(), ValidationError> {
    if p.id.trim().is_empty() {
        return Err(ValidationError::EmptyField("id"));
    }
    if !p.probability.is_finite() {
        return Err(ValidationError::NonFinite);
    }
    if !(0.0..=1.0).contains(&p.probability) {
        return Err(ValidationError::ProbabilityOutOfRange(p.probability));
    }
    if p.risk_score > 100 {
        return Err(ValidationError::RiskOutOfRange(p.risk_score));
    }
    if p.costs.immediate < Decimal::ZERO
        || p.costs.monthly < Decimal::ZERO
        || p.benefits.revenue < Decimal::ZERO
    {
        return Err(ValidationError::NegativeMoney);
    }
    if p
        .shapley_shap
        .values()
        .chain(p.agent_contributions.values())
        .any(|v| !v.is_finite())
    {
        return Err(ValidationError::NonFinite);
    }
    Ok(())
}

/// Validate an execution option.
pub fn validate_option(o: &ExecutionOption) -> Result<(), ValidationError> {
    if o.id.trim().is_empty() {
        return Err(ValidationError::EmptyField("id"));
    }
    if o.title.trim().is_empty() {
        return Err(ValidationError::EmptyField("title"));
    }
    if o.cost < Decimal::ZERO || o.projected_revenue < Decimal::ZERO {
        return Err(ValidationError::NegativeMoney);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn path(probability: f64, risk_score: u8) -> DecisionPath {
        DecisionPath {
            id: "market-entry-balanced".to_string(),
            name: "Pilot Launch".to_string(),
            description: "Test the market first".to_string(),
            expected_value: Decimal::new(1_400_000, 0),
            probability,
            risk_score,
            timeline_days: 180,
            costs: Costs {
                immediate: Decimal::new(300_000, 0),
                monthly: Decimal::new(40_000, 0),
            },
            benefits: Benefits {
                revenue: Decimal::new(600_000, 0),
                efficiency: 10,
                risk_reduction: 20,
            },
            steps: vec!["Scout locations".to_string()],
            risks: vec!["Slow adoption".to_string()],
            shapley_shap: [("market_size".to_string(), 1.0)].into_iter().collect(),
            agent_contributions: agent_shares([20, 15, 15, 5, 15, 10, 10, 10]),
        }
    }

    #[test]
    fn path_json_uses_ui_field_names() {
        let p = path(0.8, 42);
        let v = serde_json::to_value(&p).unwrap();
        assert!(v.get("shapleySHAP").is_some());
        assert!(v.get("expectedValue").is_some());
        assert!(v.get("riskScore").is_some());
        assert_eq!(v["timeline"], 180);
        assert_eq!(v["agentContributions"]["market_intel"], 20.0);
        let back: DecisionPath = serde_json::from_value(v).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn profile_json_roundtrip() {
        let p = BusinessProfile {
            vibe_mode: VibeMode::Aggressive,
            ..BusinessProfile::default()
        };
        let s = serde_json::to_string(&p).unwrap();
        assert!(s.contains("\"vibeMode\":\"aggressive\""));
        assert!(s.contains("\"growthTarget\""));
        let back: BusinessProfile = serde_json::from_str(&s).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn default_profile_is_valid() {
        let p = BusinessProfile::default();
        assert_eq!(p.mrr, DEFAULT_MRR);
        validate_profile(&p).unwrap();
    }

    #[test]
    fn normalized_industry_trims_and_lowercases() {
        let p = BusinessProfile {
            industry: "  Cloud Kitchen ".to_string(),
            ..BusinessProfile::default()
        };
        assert_eq!(p.normalized_industry(), "cloud kitchen");
    }

    #[test]
    fn rejects_bad_paths() {
        assert_eq!(
            validate_path(&path(1.2, 10)),
            Err(ValidationError::ProbabilityOutOfRange(1.2))
        );
        assert_eq!(
            validate_path(&path(0.5, 101)),
            Err(ValidationError::RiskOutOfRange(101))
        );
        assert_eq!(validate_path(&path(f64::NAN, 10)), Err(ValidationError::NonFinite));
        let mut p = path(0.5, 10);
        p.costs.monthly = Decimal::new(-1, 0);
        assert_eq!(validate_path(&p), Err(ValidationError::NegativeMoney));
    }

    #[test]
    fn completion_date_adds_timeline() {
        let p = path(0.8, 42);
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(
            p.completion_date(start),
            NaiveDate::from_ymd_opt(2025, 6, 30)
        );
    }

    #[test]
    fn initial_marl_state_tracks_every_agent() {
        let s = MarlState::default();
        assert_eq!(s.episode, 0);
        assert_eq!(s.agent_rewards.len(), AgentId::ALL.len());
        assert!(s.agent_rewards.values().all(|r| *r == 0.0));
    }

    #[test]
    fn agent_ids_serialize_as_map_keys() {
        let shares = agent_shares([10; 8]);
        let s = serde_json::to_string(&shares).unwrap();
        assert!(s.contains("\"execution_coordinator\":10.0"));
        let back: AgentMap = serde_json::from_str(&s).unwrap();
        assert_eq!(back, shares);
    }

    proptest! {
        #[test]
        fn probability_in_unit_interval_is_valid(p in 0.0f64..=1.0, risk in 0u8..=100) {
            prop_assert!(validate_path(&path(p, risk)).is_ok());
        }

        #[test]
        fn probability_above_one_is_rejected(p in 1.0001f64..100.0) {
            prop_assert!(validate_path(&path(p, 50)).is_err());
        }
    }
}
