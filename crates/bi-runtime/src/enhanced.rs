//! Boundary to the optional enhanced-metrics collaborator.
//!
//! The collaborator answers `{action, payload}` requests with `{data}`. It may
//! be absent or failing at any time, so callers go through
//! [`fetch_or_fallback`], which substitutes fixed literal data.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancedAction {
    FestivalMultipliers,
    RegionalAdjustments,
    RewardDecomposition,
    CurriculumLevels,
    BurnoutTrajectory,
    ConfidenceDistribution,
    AblationStudy,
    AgentLeaderboard,
}

impl EnhancedAction {
    pub const ALL: [EnhancedAction; 8] = [
        EnhancedAction::FestivalMultipliers,
        EnhancedAction::RegionalAdjustments,
        EnhancedAction::RewardDecomposition,
        EnhancedAction::CurriculumLevels,
        EnhancedAction::BurnoutTrajectory,
        EnhancedAction::ConfidenceDistribution,
        EnhancedAction::AblationStudy,
        EnhancedAction::AgentLeaderboard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnhancedAction::FestivalMultipliers => "festival_multipliers",
            EnhancedAction::RegionalAdjustments => "regional_adjustments",
            EnhancedAction::RewardDecomposition => "reward_decomposition",
            EnhancedAction::CurriculumLevels => "curriculum_levels",
            EnhancedAction::BurnoutTrajectory => "burnout_trajectory",
            EnhancedAction::ConfidenceDistribution => "confidence_distribution",
            EnhancedAction::AblationStudy => "ablation_study",
            EnhancedAction::AgentLeaderboard => "agent_leaderboard",
        }
    }
}

impl fmt::Display for EnhancedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhancedRequest {
    pub action: EnhancedAction,
    #[serde(default)]
    pub payload: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhancedResponse {
    pub data: Value,
}

#[derive(Debug, Error, PartialEq)]
pub enum CollaboratorError {
    #[error("collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("collaborator timed out")]
    Timeout,
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A source of enhanced metrics, typically a remote endpoint.
pub trait EnhancedMetricsSource {
    fn fetch(&self, request: &EnhancedRequest) -> Result<EnhancedResponse, CollaboratorError>;
}

/// Query `source`, substituting the literal fallback when it is absent,
/// fails, or returns null data.
pub fn fetch_or_fallback(
    source: Option<&dyn EnhancedMetricsSource>,
    action: EnhancedAction,
    payload: Value,
) -> EnhancedResponse {
    let Some(source) = source else {
        debug!(%action, "no collaborator, using fallback");
        return EnhancedResponse { data: fallback(action) };
    };
    let request = EnhancedRequest { action, payload };
    match source.fetch(&request) {
        Ok(resp) if !resp.data.is_null() => resp,
        Ok(_) => {
            warn!(%action, "collaborator returned no data, using fallback");
            EnhancedResponse { data: fallback(action) }
        }
        Err(e) => {
            warn!(%action, error = %e, "collaborator failed, using fallback");
            EnhancedResponse { data: fallback(action) }
        }
    }
}

/// Fixed data shown when the collaborator cannot answer.
pub fn fallback(action: EnhancedAction) -> Value {
    match action {
        EnhancedAction::FestivalMultipliers => json!({
            "festivals": [
                {"name": "Diwali", "month": 10, "multiplier": 1.8},
                {"name": "Durga Puja", "month": 10, "multiplier": 1.5},
                {"name": "Eid", "month": 4, "multiplier": 1.4},
                {"name": "Holi", "month": 3, "multiplier": 1.3},
                {"name": "Christmas", "month": 12, "multiplier": 1.25},
                {"name": "Pongal", "month": 1, "multiplier": 1.2}
            ]
        }),
        EnhancedAction::RegionalAdjustments => json!({
            "tier1": {"demand": 1.0, "cost": 1.0},
            "tier2": {"demand": 0.85, "cost": 0.75},
            "tier3": {"demand": 0.7, "cost": 0.6}
        }),
        EnhancedAction::RewardDecomposition => json!({
            "totalReward": 850,
            "components": [
                {"name": "revenue", "value": 340},
                {"name": "riskReduction", "value": 255},
                {"name": "efficiency", "value": 170},
                {"name": "compliance", "value": 85}
            ]
        }),
        EnhancedAction::CurriculumLevels => json!({
            "levels": [
                {"level": 1, "name": "Foundations", "episodes": 10, "completed": true},
                {"level": 2, "name": "Market Dynamics", "episodes": 25, "completed": true},
                {"level": 3, "name": "Multi-Agent Coordination", "episodes": 50, "completed": false},
                {"level": 4, "name": "Crisis Scenarios", "episodes": 100, "completed": false}
            ],
            "currentLevel": 3
        }),
        EnhancedAction::BurnoutTrajectory => json!({
            "weeks": [1, 2, 3, 4, 5, 6, 7, 8],
            "burnout": [35, 38, 42, 45, 43, 40, 37, 34],
            "threshold": 70
        }),
        EnhancedAction::ConfidenceDistribution => json!({
            "mean": 0.78,
            "p10": 0.62,
            "p50": 0.79,
            "p90": 0.91
        }),
        EnhancedAction::AblationStudy => json!({
            "baselineReward": 850,
            "removed": [
                {"agent": "risk_analyst", "rewardDrop": 0.18},
                {"agent": "financial_planner", "rewardDrop": 0.22},
                {"agent": "market_intel", "rewardDrop": 0.15},
                {"agent": "compliance_guard", "rewardDrop": 0.09}
            ]
        }),
        EnhancedAction::AgentLeaderboard => json!({
            "agents": [
                {"agent": "financial_planner", "score": 92},
                {"agent": "market_intel", "score": 88},
                {"agent": "growth_strategist", "score": 85},
                {"agent": "risk_analyst", "score": 83},
                {"agent": "operations_optimizer", "score": 80},
                {"agent": "customer_insight", "score": 78},
                {"agent": "execution_coordinator", "score": 76},
                {"agent": "compliance_guard", "score": 74}
            ]
        }),
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardComponent {
    pub name: String,
    pub value: f64,
}

/// Typed view of the reward-decomposition payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardDecomposition {
    pub total_reward: f64,
    pub components: Vec<RewardComponent>,
}

impl RewardDecomposition {
    pub fn from_response(resp: &EnhancedResponse) -> Result<Self, CollaboratorError> {
        serde_json::from_value(resp.data.clone()).map_err(|e| CollaboratorError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Down;

    impl EnhancedMetricsSource for Down {
        fn fetch(&self, _: &EnhancedRequest) -> Result<EnhancedResponse, CollaboratorError> {
            Err(CollaboratorError::Timeout)
        }
    }

    struct Echo;

    impl EnhancedMetricsSource for Echo {
        fn fetch(&self, request: &EnhancedRequest) -> Result<EnhancedResponse, CollaboratorError> {
            Ok(EnhancedResponse {
                data: request.payload.clone(),
            })
        }
    }

    #[test]
    fn absent_source_yields_fallback() {
        let resp = fetch_or_fallback(None, EnhancedAction::RewardDecomposition, Value::Null);
        let rd = RewardDecomposition::from_response(&resp).unwrap();
        assert_eq!(rd.total_reward, 850.0);
        let sum: f64 = rd.components.iter().map(|c| c.value).sum();
        assert_eq!(sum, 850.0);
    }

    #[test]
    fn failing_source_yields_fallback() {
        for action in EnhancedAction::ALL {
            let resp = fetch_or_fallback(Some(&Down), action, json!({}));
            assert_eq!(resp.data, fallback(action));
            assert!(resp.data.is_object());
        }
    }

    #[test]
    fn live_data_passes_through() {
        let payload = json!({"totalReward": 1200, "components": []});
        let resp = fetch_or_fallback(Some(&Echo), EnhancedAction::RewardDecomposition, payload.clone());
        assert_eq!(resp.data, payload);
        // Null data is treated like a failure.
        let resp = fetch_or_fallback(Some(&Echo), EnhancedAction::AblationStudy, Value::Null);
        assert_eq!(resp.data, fallback(EnhancedAction::AblationStudy));
    }

    #[test]
    fn request_wire_shape() {
        let req = EnhancedRequest {
            action: EnhancedAction::BurnoutTrajectory,
            payload: json!({"weeks": 8}),
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["action"], "burnout_trajectory");
        assert_eq!(v["payload"]["weeks"], 8);
        let back: EnhancedRequest = serde_json::from_str(r#"{"action":"agent_leaderboard"}"#).unwrap();
        assert_eq!(back.payload, Value::Null);
    }

    #[test]
    fn malformed_decomposition_is_an_error() {
        let resp = EnhancedResponse { data: json!({"oops": true}) };
        assert!(matches!(
            RewardDecomposition::from_response(&resp),
            Err(CollaboratorError::Malformed(_))
        ));
    }
}
