use super::{Branch, PathContext, PathText};
use bi_core::DecisionPath;

const PAID: Branch = Branch {
    slug: "paid-growth",
    ev_pm: 1700,
    probability: 0.60,
    risk_score: 60,
    timeline_days: 90,
    immediate_pm: 1000,
    monthly_pm: 1500,
    revenue_pm: 6000,
    efficiency: 5,
    risk_reduction: 5,
    shap: &[("customer_acquisition_cost", 40.0), ("conversion_rate", 35.0), ("retention", 25.0)],
    agents: [18, 14, 10, 4, 22, 6, 20, 6],
};

const ORGANIC: Branch = Branch {
    slug: "organic-content",
    ev_pm: 1100,
    probability: 0.78,
    risk_score: 30,
    timeline_days: 180,
    immediate_pm: 300,
    monthly_pm: 400,
    revenue_pm: 3500,
    efficiency: 10,
    risk_reduction: 15,
    shap: &[("customer_acquisition_cost", 25.0), ("conversion_rate", 30.0), ("retention", 45.0)],
    agents: [16, 8, 8, 4, 20, 6, 30, 8],
};

const PARTNERSHIPS: Branch = Branch {
    slug: "partnerships",
    ev_pm: 700,
    probability: 0.88,
    risk_score: 20,
    timeline_days: 120,
    immediate_pm: 200,
    monthly_pm: 200,
    revenue_pm: 2500,
    efficiency: 10,
    risk_reduction: 20,
    shap: &[("customer_acquisition_cost", 30.0), ("conversion_rate", 30.0), ("retention", 40.0)],
    agents: [22, 12, 10, 6, 18, 8, 16, 8],
};

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let city = &ctx.profile.location;
    let customers = ctx.profile.customers;
    [
        ctx.build(
            "marketing",
            &PAID,
            PathText {
                name: "Paid Growth Campaigns".to_string(),
                description: format!("Scale paid search, social and marketplace ads across {city}."),
                steps: vec![
                    "Set a target acquisition cost from current margins".to_string(),
                    format!("Launch geo-targeted campaigns around {city}"),
                    "Test three creatives per channel every two weeks".to_string(),
                    "Shift budget weekly to the best-performing channel".to_string(),
                ],
                risks: vec![
                    "Rising ad costs erode margin".to_string(),
                    "Acquired customers churn quickly".to_string(),
                ],
            },
        ),
        ctx.build(
            "marketing",
            &ORGANIC,
            PathText {
                name: "Organic Content and Community".to_string(),
                description: format!(
                    "Build reviews, content and referrals on top of the {customers} customers you already have."
                ),
                steps: vec![
                    "Ask every happy customer for a review".to_string(),
                    "Publish two useful posts or reels per week".to_string(),
                    "Launch a give-one-get-one referral offer".to_string(),
                    "Claim and optimise local business listings".to_string(),
                ],
                risks: vec![
                    "Results take months to show".to_string(),
                    "Consistency slips when the team is busy".to_string(),
                ],
            },
        ),
        ctx.build(
            "marketing",
            &PARTNERSHIPS,
            PathText {
                name: "Co-Marketing Partnerships".to_string(),
                description: format!("Partner with complementary businesses in {city} to share audiences."),
                steps: vec![
                    "List ten businesses that serve the same customers".to_string(),
                    "Propose bundled offers or cross-promotions".to_string(),
                    "Track partner-sourced sales with unique codes".to_string(),
                ],
                risks: vec![
                    "Partner brand issues reflect on yours".to_string(),
                    "Uneven effort between partners".to_string(),
                ],
            },
        ),
    ]
}
