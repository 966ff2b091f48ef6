//! Decision path generation, one family per intent.
//!
//! Every family returns exactly three paths ordered aggressive, balanced,
//! conservative. Financials scale linearly with MRR through per-mille
//! multipliers; probability and risk are fixed per branch. Nothing here is
//! random, so identical inputs always produce identical paths.

mod compliance;
mod funding;
mod general;
mod growth;
mod hiring;
mod market_entry;
mod marketing;
mod operations;
mod pivot;

use crate::intent::classify_intent;
use bi_core::{agent_shares, Benefits, BusinessProfile, Costs, DecisionPath, Intent, VibeMode};
use bi_econ::{attribute_value, base_expected_value, mrr_multiple, scale_per_mille};
use rust_decimal::Decimal;
use tracing::debug;

pub use hiring::{hiring_context, HiringContext};
pub use market_entry::target_city;

/// Hand-authored numbers for one branch of a family.
pub(crate) struct Branch {
    pub slug: &'static str,
    /// Expected value as per-mille of the base expected value.
    pub ev_pm: u32,
    pub probability: f64,
    pub risk_score: u8,
    pub timeline_days: u32,
    /// Immediate cost as per-mille of MRR.
    pub immediate_pm: u32,
    /// Monthly cost as per-mille of MRR.
    pub monthly_pm: u32,
    /// Revenue benefit as per-mille of MRR.
    pub revenue_pm: u32,
    pub efficiency: u8,
    pub risk_reduction: u8,
    /// Attribution feature weights, summing to 100.
    pub shap: &'static [(&'static str, f64)],
    /// Agent shares in `AgentId::ALL` order.
    pub agents: [u8; 8],
}

/// Narrative text of a path.
pub(crate) struct PathText {
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub risks: Vec<String>,
}

/// Inputs shared by every family.
pub(crate) struct PathContext<'a> {
    pub profile: &'a BusinessProfile,
    pub base_ev: Decimal,
    /// Raw query as typed by the user.
    pub query: &'a str,
    /// Lowercased query for keyword checks.
    pub lowered: String,
}

impl PathContext<'_> {
    pub fn build(&self, family: &str, branch: &Branch, text: PathText) -> DecisionPath {
        let mrr = self.profile.mrr;
        let expected_value = scale_per_mille(self.base_ev, branch.ev_pm);
        DecisionPath {
            id: format!("{family}-{}", branch.slug),
            name: text.name,
            description: text.description,
            expected_value,
            probability: branch.probability,
            risk_score: branch.risk_score,
            timeline_days: branch.timeline_days,
            costs: Costs {
                immediate: mrr_multiple(mrr, branch.immediate_pm),
                monthly: mrr_multiple(mrr, branch.monthly_pm),
            },
            benefits: Benefits {
                revenue: mrr_multiple(mrr, branch.revenue_pm),
                efficiency: branch.efficiency,
                risk_reduction: branch.risk_reduction,
            },
            steps: text.steps,
            risks: text.risks,
            shapley_shap: attribute_value(branch.shap, expected_value),
            agent_contributions: agent_shares(branch.agents),
        }
    }
}

/// Convert string literals into owned lines.
pub(crate) fn lines<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Generate the three paths for an already classified intent.
pub fn generate_paths_for_intent(
    profile: &BusinessProfile,
    base_ev: Decimal,
    intent: Intent,
    query: &str,
) -> [DecisionPath; 3] {
    let ctx = PathContext {
        profile,
        base_ev,
        query,
        lowered: query.to_lowercase(),
    };
    debug!(%intent, industry = %profile.industry, "generating decision paths");
    match intent {
        Intent::MarketEntry => market_entry::paths(&ctx),
        Intent::Growth => growth::paths(&ctx),
        Intent::Hiring => hiring::paths(&ctx),
        Intent::Funding => funding::paths(&ctx),
        Intent::Marketing => marketing::paths(&ctx),
        Intent::Operations => operations::paths(&ctx),
        Intent::Pivot => pivot::paths(&ctx),
        Intent::Compliance => compliance::paths(&ctx),
        Intent::General => general::paths(&ctx),
    }
}

/// Classify `query` and generate the three candidate paths for `profile`.
pub fn generate_decision_paths(profile: &BusinessProfile, query: &str) -> [DecisionPath; 3] {
    let intent = classify_intent(query);
    generate_paths_for_intent(profile, base_expected_value(profile), intent, query)
}

/// Index of the path to highlight for a vibe mode.
pub fn recommended_index(vibe: VibeMode) -> usize {
    match vibe {
        VibeMode::Aggressive => 0,
        VibeMode::Balanced => 1,
        VibeMode::Conservative => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bi_core::validate_path;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const QUERIES: [&str; 14] = [
        "Should I expand to Jaipur?",
        "How do I grow faster",
        "I need to hire staff",
        "We are running out of money, need funds",
        "Should I raise capital from VCs",
        "How to get more customers",
        "Optimize operations",
        "Should I pivot",
        "GST filing help",
        "I want to sue my employee",
        "My employee keeps missing work, should I terminate",
        "random unrelated text",
        "I want to hire for my team",
        "move to a bigger city",
    ];

    fn profile(industry: &str, mrr: u64) -> BusinessProfile {
        BusinessProfile {
            industry: industry.to_string(),
            mrr,
            ..BusinessProfile::default()
        }
    }

    fn assert_spectrum(paths: &[DecisionPath; 3]) {
        let mut sorted: Vec<&DecisionPath> = paths.iter().collect();
        sorted.sort_by(|a, b| a.expected_value.cmp(&b.expected_value));
        let (low, high) = (sorted[0], sorted[2]);
        assert!(high.probability <= low.probability, "{} vs {}", high.id, low.id);
        for w in sorted.windows(2) {
            assert!(w[0].risk_score <= w[1].risk_score, "{} vs {}", w[0].id, w[1].id);
        }
    }

    #[test]
    fn every_query_yields_three_valid_paths() {
        for industry in ["restaurant", "saas", "kirana store", "unknown-industry-xyz"] {
            for q in QUERIES {
                let paths = generate_decision_paths(&profile(industry, 250_000), q);
                assert_eq!(paths.len(), 3);
                for p in &paths {
                    validate_path(p).unwrap();
                    assert!(!p.steps.is_empty() && !p.risks.is_empty(), "{}", p.id);
                    assert_eq!(p.agent_contributions.len(), 8);
                }
                assert_spectrum(&paths);
            }
        }
    }

    #[test]
    fn every_intent_family_obeys_the_spectrum() {
        let p = profile("salon", 80_000);
        for intent in Intent::ALL {
            for q in QUERIES {
                let paths = generate_paths_for_intent(&p, base_expected_value(&p), intent, q);
                assert_spectrum(&paths);
                let ids: BTreeSet<&str> = paths.iter().map(|p| p.id.as_str()).collect();
                assert_eq!(ids.len(), 3);
            }
        }
    }

    #[test]
    fn attributions_sum_to_forty_percent_of_value() {
        let paths = generate_decision_paths(&BusinessProfile::default(), "Should I expand to Jaipur?");
        for p in &paths {
            let ev: f64 = p.expected_value.to_string().parse().unwrap();
            let sum: f64 = p.shapley_shap.values().sum();
            assert!(((sum - 0.4 * ev) / ev).abs() < 1e-6, "{}", p.id);
        }
    }

    #[test]
    fn market_entry_matches_published_multipliers() {
        let paths = generate_decision_paths(&BusinessProfile::default(), "Should I expand to Jaipur?");
        let evs: Vec<Decimal> = paths.iter().map(|p| p.expected_value).collect();
        assert_eq!(
            evs,
            vec![
                Decimal::new(2_200_000, 0),
                Decimal::new(1_400_000, 0),
                Decimal::new(800_000, 0)
            ]
        );
        assert_eq!(paths[0].probability, 0.55);
        assert_eq!(paths[1].risk_score, 42);
        assert_eq!(paths[2].timeline_days, 365);
    }

    #[test]
    fn recommended_follows_vibe() {
        assert_eq!(recommended_index(VibeMode::Balanced), 1);
        assert_eq!(recommended_index(VibeMode::Aggressive), 0);
        assert_eq!(recommended_index(VibeMode::Conservative), 2);
    }

    #[test]
    fn paths_serialize_for_the_ui() {
        let paths = generate_decision_paths(&BusinessProfile::default(), "How to get more customers");
        let v = serde_json::to_value(&paths).unwrap();
        assert_eq!(v.as_array().map(|a| a.len()), Some(3));
        assert!(v[0]["shapleySHAP"].is_object());
    }

    proptest! {
        #[test]
        fn generation_is_deterministic(mrr in 1u64..50_000_000, qi in 0usize..14) {
            let p = profile("food delivery", mrr);
            let a = generate_decision_paths(&p, QUERIES[qi]);
            let b = generate_decision_paths(&p, QUERIES[qi]);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn financials_scale_linearly_with_mrr(mrr in 1u64..10_000_000, qi in 0usize..14) {
            let one = generate_decision_paths(&profile("retail", mrr), QUERIES[qi]);
            let two = generate_decision_paths(&profile("retail", mrr * 2), QUERIES[qi]);
            for (a, b) in one.iter().zip(two.iter()) {
                prop_assert_eq!(a.expected_value * Decimal::from(2), b.expected_value);
                prop_assert_eq!(a.costs.immediate * Decimal::from(2), b.costs.immediate);
                prop_assert_eq!(a.benefits.revenue * Decimal::from(2), b.benefits.revenue);
                prop_assert_eq!(a.probability, b.probability);
                prop_assert_eq!(a.risk_score, b.risk_score);
            }
        }
    }
}
