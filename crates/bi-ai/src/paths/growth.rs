use super::{Branch, PathContext, PathText};
use bi_core::DecisionPath;

const SCALE_UP: Branch = Branch {
    slug: "aggressive-scale",
    ev_pm: 2500,
    probability: 0.50,
    risk_score: 75,
    timeline_days: 180,
    immediate_pm: 5000,
    monthly_pm: 1500,
    revenue_pm: 10000,
    efficiency: 5,
    risk_reduction: 0,
    shap: &[("demand_headroom", 45.0), ("capital_available", 35.0), ("execution_capacity", 20.0)],
    agents: [18, 18, 12, 4, 24, 10, 8, 6],
};

const SUSTAINABLE: Branch = Branch {
    slug: "sustainable",
    ev_pm: 1500,
    probability: 0.75,
    risk_score: 40,
    timeline_days: 270,
    immediate_pm: 1500,
    monthly_pm: 600,
    revenue_pm: 5000,
    efficiency: 15,
    risk_reduction: 15,
    shap: &[("demand_headroom", 35.0), ("capital_available", 30.0), ("execution_capacity", 35.0)],
    agents: [14, 16, 12, 6, 20, 14, 12, 6],
};

const CORE: Branch = Branch {
    slug: "core-optimization",
    ev_pm: 800,
    probability: 0.90,
    risk_score: 15,
    timeline_days: 120,
    immediate_pm: 300,
    monthly_pm: 100,
    revenue_pm: 2500,
    efficiency: 25,
    risk_reduction: 30,
    shap: &[("demand_headroom", 25.0), ("capital_available", 20.0), ("execution_capacity", 55.0)],
    agents: [10, 14, 10, 6, 14, 22, 16, 8],
};

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let target = ctx.profile.growth_target_pct;
    let industry = &ctx.profile.industry;
    let team = ctx.profile.team_size;
    [
        ctx.build(
            "growth",
            &SCALE_UP,
            PathText {
                name: "Aggressive Scale-Up".to_string(),
                description: format!(
                    "Go well beyond the {target:.0}% growth target with new channels, locations and headcount at once."
                ),
                steps: vec![
                    "Commit a growth budget for the next two quarters".to_string(),
                    "Open two new sales channels in parallel".to_string(),
                    format!("Expand the team beyond the current {team} people"),
                    "Review growth metrics weekly and double down on winners".to_string(),
                ],
                risks: vec![
                    "Burn rises faster than revenue".to_string(),
                    "Quality slips under volume".to_string(),
                    "Team burnout".to_string(),
                ],
            },
        ),
        ctx.build(
            "growth",
            &SUSTAINABLE,
            PathText {
                name: "Sustainable Growth Plan".to_string(),
                description: format!(
                    "Hit the {target:.0}% target with a funded, quarter-by-quarter plan for the {industry} business."
                ),
                steps: vec![
                    "Split the annual target into quarterly milestones".to_string(),
                    "Fund one new channel from current profits".to_string(),
                    "Hire only when utilisation stays above 85%".to_string(),
                    "Hold a monthly growth review".to_string(),
                ],
                risks: vec![
                    "Competitors move faster".to_string(),
                    "Plan slips if one channel underperforms".to_string(),
                ],
            },
        ),
        ctx.build(
            "growth",
            &CORE,
            PathText {
                name: "Optimise the Core".to_string(),
                description: "Grow through better pricing, retention and upsell to existing customers before adding anything new.".to_string(),
                steps: vec![
                    "Review pricing against the three nearest competitors".to_string(),
                    "Introduce a loyalty or subscription offer".to_string(),
                    "Upsell a premium tier to the top 20% of customers".to_string(),
                ],
                risks: vec![
                    "Growth ceiling within the current market".to_string(),
                    "Price changes upset loyal customers".to_string(),
                ],
            },
        ),
    ]
}
