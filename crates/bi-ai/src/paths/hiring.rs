use super::{Branch, PathContext, PathText};
use bi_core::DecisionPath;
use tracing::debug;

/// Industry-specific hiring vocabulary interpolated into hiring paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiringContext {
    /// Roles hired in volume.
    pub roles: &'static [&'static str],
    /// Senior hires that unlock growth.
    pub key_hires: &'static [&'static str],
    /// Functions that can be contracted out.
    pub outsourceable: &'static [&'static str],
}

const GENERIC: HiringContext = HiringContext {
    roles: &["sales associates", "operations staff", "customer support"],
    key_hires: &["operations manager", "sales lead"],
    outsourceable: &["accounting", "payroll", "digital marketing"],
};

/// Keys are matched as substrings of the normalized industry, in order.
const HIRING_TABLE: &[(&[&str], HiringContext)] = &[
    (
        &["restaurant", "food", "cafe", "cloud kitchen", "bakery"],
        HiringContext {
            roles: &["line cooks", "servers", "delivery riders"],
            key_hires: &["head chef", "restaurant manager"],
            outsourceable: &["cleaning", "delivery", "accounting"],
        },
    ),
    (
        &["fintech", "finance", "insurance", "bank"],
        HiringContext {
            roles: &["relationship managers", "risk analysts", "support agents"],
            key_hires: &["compliance officer", "head of credit"],
            outsourceable: &["KYC verification", "collections", "customer support"],
        },
    ),
    (
        &["education", "edtech", "coaching", "school", "tutor"],
        HiringContext {
            roles: &["teachers", "counsellors", "academic coordinators"],
            key_hires: &["academic head", "admissions lead"],
            outsourceable: &["content production", "marketing", "IT support"],
        },
    ),
    (
        &["saas", "software", "tech", "it services"],
        HiringContext {
            roles: &["software engineers", "customer success reps", "QA testers"],
            key_hires: &["engineering lead", "head of sales"],
            outsourceable: &["QA testing", "UI design", "content writing"],
        },
    ),
    (
        &["retail", "kirana", "grocery", "store", "shop"],
        HiringContext {
            roles: &["store associates", "cashiers", "stock handlers"],
            key_hires: &["store manager", "inventory planner"],
            outsourceable: &["home delivery", "bookkeeping", "security"],
        },
    ),
    (
        &["manufactur", "factory", "textile"],
        HiringContext {
            roles: &["machine operators", "quality inspectors", "helpers"],
            key_hires: &["production manager", "quality head"],
            outsourceable: &["logistics", "maintenance", "compliance filings"],
        },
    ),
    (
        &["health", "clinic", "pharma", "hospital"],
        HiringContext {
            roles: &["nurses", "front-desk staff", "lab technicians"],
            key_hires: &["medical director", "clinic administrator"],
            outsourceable: &["billing", "lab testing", "housekeeping"],
        },
    ),
    (
        &["real estate", "property", "construction"],
        HiringContext {
            roles: &["site supervisors", "sales executives", "field agents"],
            key_hires: &["project manager", "channel partner head"],
            outsourceable: &["legal documentation", "site security", "architecture"],
        },
    ),
    (
        &["logistics", "transport", "courier"],
        HiringContext {
            roles: &["drivers", "warehouse pickers", "dispatch coordinators"],
            key_hires: &["fleet manager", "operations head"],
            outsourceable: &["vehicle maintenance", "last-mile delivery", "payroll"],
        },
    ),
    (
        &["salon", "beauty", "spa", "fitness", "gym"],
        HiringContext {
            roles: &["stylists", "therapists", "trainers"],
            key_hires: &["studio manager", "senior trainer"],
            outsourceable: &["housekeeping", "social media", "bookkeeping"],
        },
    ),
];

/// Hiring vocabulary for an industry, falling back to a generic context.
pub fn hiring_context(industry: &str) -> HiringContext {
    let normalized = industry.trim().to_lowercase();
    HIRING_TABLE
        .iter()
        .find(|(keys, _)| keys.iter().any(|k| normalized.contains(k)))
        .map(|(_, ctx)| *ctx)
        .unwrap_or(GENERIC)
}

const RAPID: Branch = Branch {
    slug: "rapid-scaling",
    ev_pm: 1800,
    probability: 0.60,
    risk_score: 65,
    timeline_days: 60,
    immediate_pm: 1200,
    monthly_pm: 2500,
    revenue_pm: 7000,
    efficiency: 20,
    risk_reduction: 5,
    shap: &[("capacity_gap", 45.0), ("talent_supply", 30.0), ("payroll_load", 25.0)],
    agents: [8, 18, 14, 8, 20, 18, 6, 8],
};

const KEY_HIRES: Branch = Branch {
    slug: "key-hires",
    ev_pm: 1200,
    probability: 0.80,
    risk_score: 35,
    timeline_days: 120,
    immediate_pm: 500,
    monthly_pm: 1200,
    revenue_pm: 4000,
    efficiency: 30,
    risk_reduction: 20,
    shap: &[("capacity_gap", 30.0), ("talent_supply", 40.0), ("payroll_load", 30.0)],
    agents: [6, 16, 14, 8, 18, 20, 8, 10],
};

const OUTSOURCE: Branch = Branch {
    slug: "outsource",
    ev_pm: 700,
    probability: 0.90,
    risk_score: 20,
    timeline_days: 30,
    immediate_pm: 150,
    monthly_pm: 600,
    revenue_pm: 2000,
    efficiency: 25,
    risk_reduction: 30,
    shap: &[("capacity_gap", 25.0), ("talent_supply", 25.0), ("payroll_load", 50.0)],
    agents: [4, 22, 12, 10, 8, 26, 6, 12],
};

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let hc = hiring_context(&ctx.profile.industry);
    debug!(key_hires = ?hc.key_hires, "hiring context");
    let team = ctx.profile.team_size;
    let city = &ctx.profile.location;
    let roles = hc.roles.join(", ");
    let key = hc.key_hires.join(" and ");
    let outsource = hc.outsourceable.join(", ");

    let rapid = PathText {
        name: "Rapid Team Scaling".to_string(),
        description: format!("Grow the team from {team} quickly by hiring {roles} in bulk."),
        steps: vec![
            format!("Open requisitions for {roles}"),
            format!("Run walk-in drives and referral bonuses in {city}"),
            "Compress onboarding into a one-week playbook".to_string(),
            "Assign buddies to every new joiner for the first month".to_string(),
        ],
        risks: vec![
            "Culture dilution and inconsistent quality".to_string(),
            "Payroll rises before revenue does".to_string(),
            format!("High early attrition among new {roles}"),
        ],
    };

    let strategic = PathText {
        name: "Strategic Key Hires".to_string(),
        description: format!("Hire a {key} who can build and lead the next stage of the team."),
        steps: vec![
            format!("Define a 90-day scorecard for the {key}"),
            "Use a specialist recruiter and a paid trial project".to_string(),
            "Offer equity or profit share to secure senior talent".to_string(),
            "Let the new leaders own their own hiring plans".to_string(),
        ],
        risks: vec![
            "A mis-hire at senior level is costly".to_string(),
            format!("Search takes longer than expected in {city}"),
        ],
    };

    let contract = PathText {
        name: "Outsource and Contract".to_string(),
        description: format!("Keep the core team lean and contract out {outsource}."),
        steps: vec![
            format!("Shortlist agencies or freelancers for {outsource}"),
            "Sign contracts with clear SLAs and exit clauses".to_string(),
            "Review vendor output monthly against the SLA".to_string(),
        ],
        risks: vec![
            "Less control over quality and timelines".to_string(),
            "Vendor lock-in".to_string(),
        ],
    };

    [
        ctx.build("hiring", &RAPID, rapid),
        ctx.build("hiring", &KEY_HIRES, strategic),
        ctx.build("hiring", &OUTSOURCE, contract),
    ]
}
