use super::{lines, Branch, PathContext, PathText};
use crate::intent::contains_any;
use bi_core::DecisionPath;
use tracing::debug;

const CRISIS_WORDS: &[&str] = &[
    "out of",
    "survive",
    "crisis",
    "emergency",
    "no funds",
    "running out",
];

const CRISIS: [Branch; 3] = [
    Branch {
        slug: "bridge-funding",
        ev_pm: 1500,
        probability: 0.50,
        risk_score: 72,
        timeline_days: 30,
        immediate_pm: 300,
        monthly_pm: 250,
        revenue_pm: 0,
        efficiency: 0,
        risk_reduction: 35,
        shap: &[("runway_months", 45.0), ("investor_access", 35.0), ("burn_rate", 20.0)],
        agents: [4, 36, 22, 8, 10, 8, 4, 8],
    },
    Branch {
        slug: "cost-reduction",
        ev_pm: 1000,
        probability: 0.75,
        risk_score: 45,
        timeline_days: 60,
        immediate_pm: 200,
        monthly_pm: 0,
        revenue_pm: 0,
        efficiency: 30,
        risk_reduction: 40,
        shap: &[("runway_months", 35.0), ("investor_access", 10.0), ("burn_rate", 55.0)],
        agents: [2, 30, 18, 6, 4, 26, 4, 10],
    },
    Branch {
        slug: "revenue-acceleration",
        ev_pm: 700,
        probability: 0.85,
        risk_score: 30,
        timeline_days: 90,
        immediate_pm: 250,
        monthly_pm: 100,
        revenue_pm: 3000,
        efficiency: 10,
        risk_reduction: 25,
        shap: &[("runway_months", 30.0), ("investor_access", 10.0), ("burn_rate", 60.0)],
        agents: [12, 20, 10, 4, 20, 8, 18, 8],
    },
];

const RAISE: [Branch; 3] = [
    Branch {
        slug: "vc-raise",
        ev_pm: 3000,
        probability: 0.35,
        risk_score: 75,
        timeline_days: 180,
        immediate_pm: 1500,
        monthly_pm: 200,
        revenue_pm: 12000,
        efficiency: 5,
        risk_reduction: 10,
        shap: &[("traction", 45.0), ("market_size", 35.0), ("dilution", 20.0)],
        agents: [16, 30, 14, 6, 18, 4, 6, 6],
    },
    Branch {
        slug: "revenue-based-financing",
        ev_pm: 1600,
        probability: 0.70,
        risk_score: 45,
        timeline_days: 60,
        immediate_pm: 200,
        monthly_pm: 150,
        revenue_pm: 5000,
        efficiency: 10,
        risk_reduction: 20,
        shap: &[("traction", 40.0), ("market_size", 20.0), ("dilution", 40.0)],
        agents: [8, 34, 18, 6, 14, 8, 6, 6],
    },
    Branch {
        slug: "bootstrap",
        ev_pm: 900,
        probability: 0.90,
        risk_score: 15,
        timeline_days: 365,
        immediate_pm: 0,
        monthly_pm: 0,
        revenue_pm: 2500,
        efficiency: 20,
        risk_reduction: 35,
        shap: &[("traction", 50.0), ("market_size", 15.0), ("dilution", 35.0)],
        agents: [8, 26, 12, 4, 14, 18, 12, 6],
    },
];

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let crisis = contains_any(&ctx.lowered, CRISIS_WORDS);
    debug!(crisis, "funding mode");
    if crisis {
        crisis_paths(ctx)
    } else {
        raise_paths(ctx)
    }
}

fn crisis_paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let customers = ctx.profile.customers;
    let [bridge, cut, accelerate] = &CRISIS;
    [
        ctx.build(
            "funding",
            bridge,
            PathText {
                name: "Emergency Bridge Funding".to_string(),
                description: "Raise a short bridge from existing backers, friends and family or a working-capital lender to buy runway.".to_string(),
                steps: lines([
                    "Build a 13-week cash-flow forecast",
                    "Pitch existing investors and close contacts within two weeks",
                    "Apply for a working-capital loan against receivables",
                    "Tie the bridge to a specific milestone",
                ]),
                risks: lines([
                    "Punitive terms under time pressure",
                    "Bridge only delays the underlying problem",
                    "Personal guarantees put founder assets at risk",
                ]),
            },
        ),
        ctx.build(
            "funding",
            cut,
            PathText {
                name: "Aggressive Cost Reduction".to_string(),
                description: "Cut burn hard so existing cash lasts until revenue catches up.".to_string(),
                steps: lines([
                    "Rank every expense by impact on revenue",
                    "Renegotiate rent and supplier terms",
                    "Pause non-essential hiring and tools",
                    "Move fixed salaries to variable where possible",
                ]),
                risks: lines([
                    "Service quality drops and customers churn",
                    "Key staff leave during the cuts",
                ]),
            },
        ),
        ctx.build(
            "funding",
            accelerate,
            PathText {
                name: "Revenue Acceleration".to_string(),
                description: format!(
                    "Bring cash forward from the {customers} existing customers with prepaid plans and collections."
                ),
                steps: lines([
                    "Offer annual prepaid plans at a discount",
                    "Chase every overdue invoice this week",
                    "Launch a quick upsell to the best customers",
                ]),
                risks: lines([
                    "Discounts reduce lifetime margin",
                    "Customers push back on prepayment",
                ]),
            },
        ),
    ]
}

fn raise_paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let industry = &ctx.profile.industry;
    let [vc, rbf, bootstrap] = &RAISE;
    [
        ctx.build(
            "funding",
            vc,
            PathText {
                name: "Raise a VC or Angel Round".to_string(),
                description: format!(
                    "Raise equity from angels or seed funds active in {industry} to fund rapid expansion."
                ),
                steps: lines([
                    "Prepare a data room with twelve months of metrics",
                    "Build a list of forty sector-relevant investors",
                    "Run a focused six-week fundraising process",
                    "Negotiate terms and close",
                ]),
                risks: lines([
                    "Dilution and loss of control",
                    "Fundraising distracts from running the business",
                    "Pressure to grow faster than the market allows",
                ]),
            },
        ),
        ctx.build(
            "funding",
            rbf,
            PathText {
                name: "Revenue-Based Financing".to_string(),
                description: "Borrow against recurring revenue and repay as a share of monthly collections.".to_string(),
                steps: lines([
                    "Connect payment and banking data to RBF lenders",
                    "Compare cap multiples and repayment shares",
                    "Deploy capital into the highest-return channel",
                ]),
                risks: lines([
                    "Repayments squeeze cash in slow months",
                    "Effective cost higher than a bank loan",
                ]),
            },
        ),
        ctx.build(
            "funding",
            bootstrap,
            PathText {
                name: "Bootstrap from Profits".to_string(),
                description: "Fund growth from operating cash flow and keep full ownership.".to_string(),
                steps: lines([
                    "Set aside a fixed share of monthly profit for growth",
                    "Prioritise projects with payback under six months",
                    "Review the plan every quarter",
                ]),
                risks: lines([
                    "Slower growth than funded competitors",
                    "Thin buffer against shocks",
                ]),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::paths::generate_decision_paths;
    use bi_core::BusinessProfile;

    #[test]
    fn crisis_keywords_switch_mode() {
        let p = BusinessProfile::default();
        let crisis = generate_decision_paths(&p, "We are running out of money, need funds");
        assert_eq!(crisis[0].id, "funding-bridge-funding");
        let raise = generate_decision_paths(&p, "Should I raise capital from VCs");
        assert_eq!(raise[0].id, "funding-vc-raise");
        assert_eq!(raise[2].id, "funding-bootstrap");
    }
}
