use super::{lines, Branch, PathContext, PathText};
use bi_core::DecisionPath;

const FULL_PIVOT: Branch = Branch {
    slug: "full-pivot",
    ev_pm: 2000,
    probability: 0.40,
    risk_score: 82,
    timeline_days: 240,
    immediate_pm: 4000,
    monthly_pm: 800,
    revenue_pm: 8000,
    efficiency: 0,
    risk_reduction: 0,
    shap: &[("market_fit", 45.0), ("capability_overlap", 25.0), ("switching_cost", 30.0)],
    agents: [22, 16, 16, 6, 18, 8, 8, 6],
};

const ADJACENT: Branch = Branch {
    slug: "adjacent-extension",
    ev_pm: 1300,
    probability: 0.68,
    risk_score: 45,
    timeline_days: 150,
    immediate_pm: 1800,
    monthly_pm: 400,
    revenue_pm: 4500,
    efficiency: 10,
    risk_reduction: 10,
    shap: &[("market_fit", 35.0), ("capability_overlap", 40.0), ("switching_cost", 25.0)],
    agents: [18, 14, 14, 6, 20, 10, 12, 6],
};

const PILOT: Branch = Branch {
    slug: "pilot",
    ev_pm: 700,
    probability: 0.88,
    risk_score: 18,
    timeline_days: 60,
    immediate_pm: 400,
    monthly_pm: 100,
    revenue_pm: 1500,
    efficiency: 5,
    risk_reduction: 30,
    shap: &[("market_fit", 30.0), ("capability_overlap", 50.0), ("switching_cost", 20.0)],
    agents: [16, 12, 16, 6, 14, 12, 16, 8],
};

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let industry = &ctx.profile.industry;
    let customers = ctx.profile.customers;
    [
        ctx.build(
            "pivot",
            &FULL_PIVOT,
            PathText {
                name: "Full Business Pivot".to_string(),
                description: format!(
                    "Move the business out of {industry} into the new direction and reallocate most resources to it."
                ),
                steps: lines([
                    "Validate the new direction with twenty paying pre-orders",
                    "Wind down the lowest-margin existing lines",
                    "Retrain or restructure the team around the new offer",
                    "Relaunch the brand and tell existing customers",
                ]),
                risks: lines([
                    "Existing revenue falls before new revenue arrives",
                    "Team lacks skills for the new direction",
                    "Loyal customers feel abandoned",
                ]),
            },
        ),
        ctx.build(
            "pivot",
            &ADJACENT,
            PathText {
                name: "Adjacent Line Extension".to_string(),
                description: format!(
                    "Add the new offering alongside the core {industry} business, sold to the same customers."
                ),
                steps: vec![
                    format!("Survey the {customers} existing customers on the new offering"),
                    "Build a minimum version with current staff".to_string(),
                    "Bundle it with the core product at launch".to_string(),
                    "Give it a separate P&L after six months".to_string(),
                ],
                risks: lines([
                    "Splits focus from the core",
                    "Cannibalises existing sales",
                ]),
            },
        ),
        ctx.build(
            "pivot",
            &PILOT,
            PathText {
                name: "Small-Scale Pilot".to_string(),
                description: "Test the idea for sixty days with a capped budget before deciding.".to_string(),
                steps: lines([
                    "Define the success metric and the budget cap",
                    "Offer the new service to a small customer group",
                    "Decide to scale, adjust or stop at day sixty",
                ]),
                risks: lines([
                    "Pilot too small to be conclusive",
                    "Opportunity cost of waiting",
                ]),
            },
        ),
    ]
}
