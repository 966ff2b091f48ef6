use super::{lines, Branch, PathContext, PathText};
use bi_core::DecisionPath;

const AUTOMATION: Branch = Branch {
    slug: "automation",
    ev_pm: 1500,
    probability: 0.65,
    risk_score: 55,
    timeline_days: 120,
    immediate_pm: 2500,
    monthly_pm: 300,
    revenue_pm: 3000,
    efficiency: 40,
    risk_reduction: 15,
    shap: &[("process_maturity", 40.0), ("tooling_cost", 35.0), ("staff_adoption", 25.0)],
    agents: [4, 16, 12, 6, 8, 34, 6, 14],
};

const LEAN: Branch = Branch {
    slug: "lean",
    ev_pm: 1000,
    probability: 0.80,
    risk_score: 30,
    timeline_days: 90,
    immediate_pm: 500,
    monthly_pm: 100,
    revenue_pm: 1500,
    efficiency: 30,
    risk_reduction: 25,
    shap: &[("process_maturity", 45.0), ("tooling_cost", 15.0), ("staff_adoption", 40.0)],
    agents: [4, 18, 10, 6, 6, 36, 8, 12],
};

const OUTSOURCE: Branch = Branch {
    slug: "outsource-non-core",
    ev_pm: 600,
    probability: 0.90,
    risk_score: 20,
    timeline_days: 45,
    immediate_pm: 200,
    monthly_pm: 800,
    revenue_pm: 800,
    efficiency: 25,
    risk_reduction: 20,
    shap: &[("process_maturity", 30.0), ("tooling_cost", 40.0), ("staff_adoption", 30.0)],
    agents: [4, 24, 12, 8, 4, 30, 6, 12],
};

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    [
        ctx.build(
            "operations",
            &AUTOMATION,
            PathText {
                name: "Automate Core Workflows".to_string(),
                description: "Replace manual billing, inventory and scheduling work with integrated software.".to_string(),
                steps: lines([
                    "Map every recurring manual task and its weekly hours",
                    "Pick tools for billing, inventory and scheduling that integrate",
                    "Migrate one workflow at a time with a parallel run",
                    "Retrain staff freed up by automation",
                ]),
                risks: lines([
                    "Implementation overruns and downtime",
                    "Staff resist new tools",
                ]),
            },
        ),
        ctx.build(
            "operations",
            &LEAN,
            PathText {
                name: "Lean Operations Programme".to_string(),
                description: "Remove waste from daily operations with simple checklists and metrics.".to_string(),
                steps: lines([
                    "Measure cycle times for the three busiest processes",
                    "Run a weekly waste walk with the team",
                    "Standardise the best way of working into checklists",
                    "Track two efficiency metrics on a shared board",
                ]),
                risks: lines([
                    "Gains fade without ongoing discipline",
                    "Improvements are smaller than hoped",
                ]),
            },
        ),
        ctx.build(
            "operations",
            &OUTSOURCE,
            PathText {
                name: "Outsource Non-Core Functions".to_string(),
                description: "Hand bookkeeping, payroll and logistics to specialists so the team focuses on customers.".to_string(),
                steps: lines([
                    "List functions that do not differentiate the business",
                    "Get three quotes for each function",
                    "Move one function at a time with a defined SLA",
                ]),
                risks: lines([
                    "Vendor quality varies",
                    "Monthly fees add fixed cost",
                ]),
            },
        ),
    ]
}
