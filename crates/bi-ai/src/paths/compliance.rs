//! Compliance family: staff disputes (litigation or HR process) and tax.

use super::{lines, Branch, PathContext, PathText};
use crate::intent::contains_any;
use bi_core::DecisionPath;
use tracing::debug;

const STAFF_WORDS: &[&str] = &[
    "employee",
    "staff",
    "worker",
    "fire",
    "firing",
    "terminate",
    "termination",
    "dismiss",
    "sue",
    "lawsuit",
    "dispute",
    "grievance",
    "warning letter",
    "misconduct",
    "fraud",
    "theft",
    "stole",
    "harass",
    "severance",
    "labour",
    "labor",
    "resign",
    "notice period",
];

const LITIGATION_WORDS: &[&str] = &["sue", "lawsuit", "legal action", "take action"];

const STAFF_SHAP_FORMAL: &[(&str, f64)] =
    &[("evidence_strength", 45.0), ("legal_exposure", 35.0), ("team_morale", 20.0)];
const STAFF_SHAP_MEDIATION: &[(&str, f64)] =
    &[("evidence_strength", 30.0), ("legal_exposure", 30.0), ("team_morale", 40.0)];
const STAFF_SHAP_DUE_PROCESS: &[(&str, f64)] =
    &[("evidence_strength", 25.0), ("legal_exposure", 25.0), ("team_morale", 50.0)];

const LITIGATION: [Branch; 3] = [
    Branch {
        slug: "legal-proceedings",
        ev_pm: 600,
        probability: 0.45,
        risk_score: 70,
        timeline_days: 270,
        immediate_pm: 1500,
        monthly_pm: 300,
        revenue_pm: 0,
        efficiency: 0,
        risk_reduction: 30,
        shap: STAFF_SHAP_FORMAL,
        agents: [4, 18, 20, 34, 2, 6, 4, 12],
    },
    Branch {
        slug: "mediated-settlement",
        ev_pm: 400,
        probability: 0.75,
        risk_score: 38,
        timeline_days: 60,
        immediate_pm: 600,
        monthly_pm: 0,
        revenue_pm: 0,
        efficiency: 5,
        risk_reduction: 45,
        shap: STAFF_SHAP_MEDIATION,
        agents: [4, 20, 18, 30, 2, 8, 6, 12],
    },
    Branch {
        slug: "due-process",
        ev_pm: 250,
        probability: 0.88,
        risk_score: 15,
        timeline_days: 90,
        immediate_pm: 150,
        monthly_pm: 50,
        revenue_pm: 0,
        efficiency: 10,
        risk_reduction: 60,
        shap: STAFF_SHAP_DUE_PROCESS,
        agents: [2, 14, 22, 32, 2, 12, 4, 12],
    },
];

const HR_PROCESS: [Branch; 3] = [
    Branch {
        slug: "formal-disciplinary",
        ev_pm: 600,
        probability: 0.45,
        risk_score: 70,
        timeline_days: 45,
        immediate_pm: 400,
        monthly_pm: 0,
        revenue_pm: 0,
        efficiency: 10,
        risk_reduction: 25,
        shap: STAFF_SHAP_FORMAL,
        agents: [2, 14, 20, 30, 2, 16, 4, 12],
    },
    Branch {
        slug: "mediated-exit",
        ev_pm: 400,
        probability: 0.75,
        risk_score: 38,
        timeline_days: 30,
        immediate_pm: 800,
        monthly_pm: 0,
        revenue_pm: 0,
        efficiency: 10,
        risk_reduction: 40,
        shap: STAFF_SHAP_MEDIATION,
        agents: [2, 20, 18, 28, 2, 14, 4, 12],
    },
    Branch {
        slug: "performance-plan",
        ev_pm: 250,
        probability: 0.88,
        risk_score: 15,
        timeline_days: 90,
        immediate_pm: 100,
        monthly_pm: 50,
        revenue_pm: 0,
        efficiency: 15,
        risk_reduction: 55,
        shap: STAFF_SHAP_DUE_PROCESS,
        agents: [2, 10, 18, 28, 4, 20, 6, 12],
    },
];

const TAX: [Branch; 3] = [
    Branch {
        slug: "tax-restructure",
        ev_pm: 900,
        probability: 0.60,
        risk_score: 55,
        timeline_days: 120,
        immediate_pm: 1000,
        monthly_pm: 150,
        revenue_pm: 1500,
        efficiency: 10,
        risk_reduction: 20,
        shap: &[("tax_savings", 50.0), ("audit_risk", 30.0), ("filing_burden", 20.0)],
        agents: [2, 32, 18, 28, 4, 8, 2, 6],
    },
    Branch {
        slug: "ca-and-software",
        ev_pm: 600,
        probability: 0.85,
        risk_score: 25,
        timeline_days: 60,
        immediate_pm: 300,
        monthly_pm: 120,
        revenue_pm: 800,
        efficiency: 25,
        risk_reduction: 50,
        shap: &[("tax_savings", 35.0), ("audit_risk", 35.0), ("filing_burden", 30.0)],
        agents: [2, 28, 16, 30, 2, 14, 2, 6],
    },
    Branch {
        slug: "compliance-audit",
        ev_pm: 400,
        probability: 0.95,
        risk_score: 10,
        timeline_days: 90,
        immediate_pm: 500,
        monthly_pm: 50,
        revenue_pm: 300,
        efficiency: 15,
        risk_reduction: 70,
        shap: &[("tax_savings", 20.0), ("audit_risk", 50.0), ("filing_burden", 30.0)],
        agents: [2, 24, 22, 34, 2, 8, 2, 6],
    },
];

/// Which compliance problem the query describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComplianceKind {
    StaffLitigation,
    StaffProcess,
    Tax,
}

fn compliance_kind(lowered: &str) -> ComplianceKind {
    if !contains_any(lowered, STAFF_WORDS) {
        ComplianceKind::Tax
    } else if contains_any(lowered, LITIGATION_WORDS) {
        ComplianceKind::StaffLitigation
    } else {
        ComplianceKind::StaffProcess
    }
}

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let kind = compliance_kind(&ctx.lowered);
    debug!(?kind, "compliance sub-type");
    match kind {
        ComplianceKind::StaffLitigation => litigation_paths(ctx),
        ComplianceKind::StaffProcess => hr_process_paths(ctx),
        ComplianceKind::Tax => tax_paths(ctx),
    }
}

fn litigation_paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let city = &ctx.profile.location;
    let [formal, mediation, due] = &LITIGATION;
    [
        ctx.build(
            "compliance",
            formal,
            PathText {
                name: "File Legal Proceedings".to_string(),
                description: "Pursue a civil or criminal case to recover losses and set a precedent for the team.".to_string(),
                steps: vec![
                    "Secure CCTV, ledgers and witness statements before confronting anyone".to_string(),
                    format!("Retain an employment lawyer practising in {city}"),
                    "Send a formal legal notice and preserve the reply".to_string(),
                    "File the complaint or suit and attend hearings".to_string(),
                    "Communicate a neutral summary to the rest of the staff".to_string(),
                ],
                risks: lines([
                    "Court timelines stretch well past a year",
                    "Legal fees exceed the amount recovered",
                    "Counter-claims for wrongful termination",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            mediation,
            PathText {
                name: "Negotiated Settlement via Mediation".to_string(),
                description: "Use a neutral mediator to agree recovery and exit terms without going to court.".to_string(),
                steps: lines([
                    "Document the loss and the evidence in a single file",
                    "Propose mediation in writing with a response deadline",
                    "Agree a repayment schedule or offset against dues",
                    "Sign a settlement with a no-further-claims clause",
                ]),
                risks: lines([
                    "Employee refuses to engage",
                    "Settlement recovers only part of the loss",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            due,
            PathText {
                name: "Documented Due-Process Warning Track".to_string(),
                description: "Issue written warnings and an internal inquiry first, keeping legal action in reserve.".to_string(),
                steps: lines([
                    "Hold a recorded internal inquiry with the employee",
                    "Issue a written warning letter citing the policy breached",
                    "Restrict access to cash and stock during the inquiry",
                    "Escalate to legal action only if the conduct repeats",
                ]),
                risks: lines([
                    "Losses are not recovered",
                    "Perceived as lenient by other staff",
                ]),
            },
        ),
    ]
}

fn hr_process_paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let [formal, mediation, due] = &HR_PROCESS;
    [
        ctx.build(
            "compliance",
            formal,
            PathText {
                name: "Formal Disciplinary Termination".to_string(),
                description: "Run a documented disciplinary process that ends in termination if the charges hold.".to_string(),
                steps: lines([
                    "Issue a show-cause notice listing specific incidents",
                    "Hold a disciplinary hearing with a witness present",
                    "Record findings and issue the termination letter",
                    "Settle final dues and statutory payments on time",
                ]),
                risks: lines([
                    "Labour-law challenge if procedure is skipped",
                    "Knowledge loss before a replacement is hired",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            mediation,
            PathText {
                name: "Mediated Exit Agreement".to_string(),
                description: "Agree a mutual separation with a modest severance and a clean release.".to_string(),
                steps: lines([
                    "Hold a private conversation about fit and expectations",
                    "Offer a severance package tied to a handover period",
                    "Sign a mutual separation and release agreement",
                ]),
                risks: lines([
                    "Severance sets an expectation for future exits",
                    "Employee negotiates for more than budgeted",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            due,
            PathText {
                name: "Performance Improvement Plan".to_string(),
                description: "Give the employee a fair, time-boxed chance to improve with clear, measurable goals.".to_string(),
                steps: lines([
                    "Write three measurable goals with the employee",
                    "Hold weekly check-ins and keep notes",
                    "Provide training or a buddy where skills are missing",
                    "Decide to retain or exit at the end of the plan",
                ]),
                risks: lines([
                    "Problem behaviour continues during the plan",
                    "Team frustration if the plan drags on",
                ]),
            },
        ),
    ]
}

fn tax_paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let industry = &ctx.profile.industry;
    let [restructure, ca, audit] = &TAX;
    [
        ctx.build(
            "compliance",
            restructure,
            PathText {
                name: "Restructure for Tax Efficiency".to_string(),
                description: format!(
                    "Review entity structure, input tax credits and deductions available to {industry} businesses."
                ),
                steps: lines([
                    "Compare proprietorship, LLP and private limited tax outcomes",
                    "Claim all eligible GST input tax credits",
                    "Move eligible spend into deductible categories",
                    "Re-register and update invoicing templates",
                ]),
                risks: lines([
                    "Aggressive positions attract scrutiny",
                    "One-time restructuring costs and paperwork",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            ca,
            PathText {
                name: "Engage a Chartered Accountant and Compliance Software".to_string(),
                description: "Outsource filings to a CA and automate GST returns and reminders.".to_string(),
                steps: lines([
                    "Shortlist three CAs with clients in your sector",
                    "Adopt accounting software with GST return export",
                    "Set a monthly close and filing calendar",
                ]),
                risks: lines([
                    "Dependence on a single advisor",
                    "Data migration errors in the first quarter",
                ]),
            },
        ),
        ctx.build(
            "compliance",
            audit,
            PathText {
                name: "Full Voluntary Compliance Audit".to_string(),
                description: "Audit past filings, correct mismatches and pay any dues before a notice arrives.".to_string(),
                steps: lines([
                    "Reconcile GSTR filings against books for the last two years",
                    "File corrections and pay interest on any shortfall",
                    "Document policies for invoices, TDS and payroll",
                ]),
                risks: lines([
                    "Uncovers past liabilities that must be paid",
                    "Short-term cash outflow",
                ]),
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::generate_paths_for_intent;
    use bi_core::{BusinessProfile, Intent};
    use bi_econ::base_expected_value;

    fn run(query: &str) -> [DecisionPath; 3] {
        let p = BusinessProfile::default();
        generate_paths_for_intent(&p, base_expected_value(&p), Intent::Compliance, query)
    }

    #[test]
    fn detects_sub_type() {
        assert_eq!(compliance_kind("i want to sue my employee"), ComplianceKind::StaffLitigation);
        assert_eq!(compliance_kind("can i take action against staff theft"), ComplianceKind::StaffLitigation);
        assert_eq!(compliance_kind("how do i terminate a worker"), ComplianceKind::StaffProcess);
        assert_eq!(compliance_kind("gst notice received"), ComplianceKind::Tax);
    }

    #[test]
    fn litigation_flag_changes_text_not_strategy() {
        let legal = run("I want to sue my employee");
        let hr = run("My employee keeps missing work, should I terminate");
        assert_eq!(legal[0].name, "File Legal Proceedings");
        assert_eq!(hr[0].name, "Formal Disciplinary Termination");
        assert_ne!(legal[0].timeline_days, hr[0].timeline_days);
        assert_ne!(legal[0].costs, hr[0].costs);
        for (a, b) in legal.iter().zip(hr.iter()) {
            assert_eq!(a.expected_value, b.expected_value);
            assert_eq!(a.probability, b.probability);
            assert_eq!(a.risk_score, b.risk_score);
        }
    }

    #[test]
    fn tax_queries_get_tax_paths() {
        let paths = run("GST filing help");
        assert_eq!(paths[1].id, "compliance-ca-and-software");
        assert!(paths[0].description.contains("general"));
    }
}
