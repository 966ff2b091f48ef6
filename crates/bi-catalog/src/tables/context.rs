use super::{opt, OptionTemplate, MARKET_ENTRY};
use crate::QueryContext;
use bi_core::OptionCategory as Cat;

type Catalog = [OptionTemplate; 10];

const LEGAL: Catalog = [
    opt("legal-notice", "Send a Legal Notice", "Have an advocate send a formal notice before any filing.", 0, -8, 4, 14, 150, Cat::Operations),
    opt("mediation", "Mediation", "Resolve the dispute through a registered mediator.", 0, -10, 3, 45, 300, Cat::Operations),
    opt("file-suit", "File a Civil Suit", "File in the appropriate court with documented evidence.", 0, 15, 15, 365, 1500, Cat::Operations),
    opt("labour-compliance", "Labour Law Compliance Review", "Audit contracts, PF, ESI and shops act registrations.", 0, -15, 4, 30, 400, Cat::Operations),
    opt("hr-policy", "Written HR Policy", "Publish an employee handbook with conduct and exit rules.", 0, -10, 2, 21, 200, Cat::Operations),
    opt("gst-health-check", "GST Health Check", "Reconcile GST returns and fix mismatches before notices arrive.", 1000, -12, 3, 30, 300, Cat::Operations),
    opt("tax-structure", "Entity and Tax Structure Review", "Review whether the current entity structure minimises tax.", 3000, -4, 4, 60, 600, Cat::Operations),
    opt("compliance-software", "Compliance Calendar Software", "Track every filing deadline in one tool.", 500, -8, -4, 14, 200, Cat::Technology),
    opt("retained-ca", "Retained CA Firm", "Put a chartered accountant firm on monthly retainer.", 1000, -10, -6, 14, 500, Cat::Partnerships),
    opt("legal-insurance", "Legal Expense Insurance", "Cover future legal costs with a business policy.", 0, -6, -2, 21, 250, Cat::Partnerships),
];

const FUNDING: Catalog = [
    opt("angel-round", "Angel Round", "Raise a small round from angels in your sector.", 15000, 10, 10, 120, 500, Cat::Growth),
    opt("seed-vc", "Seed VC Round", "Pitch seed funds with a tight metrics story.", 30000, 18, 15, 180, 1200, Cat::Growth),
    opt("rbf", "Revenue-Based Financing", "Borrow against recurring revenue and repay from collections.", 10000, 6, 3, 45, 800, Cat::Growth),
    opt("msme-loan", "MSME Loan", "Apply for a collateral-free MSME term loan.", 8000, 4, 4, 60, 300, Cat::Partnerships),
    opt("working-capital", "Working Capital Line", "Open an overdraft against receivables.", 5000, 3, 2, 30, 200, Cat::Partnerships),
    opt("govt-grant", "Government Grant or Scheme", "Apply for startup and MSME schemes you qualify for.", 4000, -2, 6, 120, 100, Cat::Partnerships),
    opt("customer-prepay", "Customer Prepayments", "Offer discounts for annual prepaid plans.", 6000, -3, 2, 30, 100, Cat::Growth),
    opt("cost-cut", "Burn Reduction Plan", "Cut non-essential spend to extend runway.", 2000, -8, 4, 30, 0, Cat::Operations),
    opt("invoice-discounting", "Invoice Discounting", "Sell receivables on a discounting platform for early cash.", 3000, 2, 1, 14, 200, Cat::Technology),
    opt("strategic-investor", "Strategic Investor", "Bring in a corporate investor from your value chain.", 20000, 12, 8, 150, 800, Cat::Partnerships),
];

const HIRING: Catalog = [
    opt("bulk-hiring-drive", "Bulk Hiring Drive", "Run walk-in drives to fill frontline roles in one month.", 12000, 10, 12, 30, 1500, Cat::Operations),
    opt("senior-hire", "Senior Leadership Hire", "Hire one senior leader to own a function.", 15000, 8, -6, 90, 2500, Cat::Operations),
    opt("employee-referrals", "Employee Referral Bonus", "Pay bonuses to staff for successful referrals.", 5000, -2, 2, 30, 300, Cat::Operations),
    opt("campus-hiring", "Campus Hiring", "Recruit freshers from local colleges and train them.", 6000, 4, 8, 90, 600, Cat::Partnerships),
    opt("freelancers", "Freelancer Bench", "Build a bench of vetted freelancers for peak load.", 5000, 2, -6, 21, 500, Cat::Partnerships),
    opt("outsourced-ops", "Outsource Non-Core Functions", "Contract out accounting, payroll and support.", 3000, -3, -10, 30, 800, Cat::Partnerships),
    opt("hr-software", "HR and Payroll Software", "Move attendance, leave and payroll to software.", 2000, -6, -6, 21, 300, Cat::Technology),
    opt("training-program", "Structured Training Program", "Build a two-week onboarding and skills program.", 4000, -5, 4, 45, 500, Cat::Operations),
    opt("esop-pool", "ESOP Pool", "Create a small ESOP pool to retain key staff.", 3000, -4, -2, 60, 200, Cat::Growth),
    opt("employer-branding", "Employer Branding", "Share team stories to attract applicants.", 2000, 0, 3, 60, 300, Cat::Marketing),
];

const GROWTH: Catalog = [
    opt("new-segment", "New Customer Segment", "Adapt the offer for one new customer segment.", 18000, 12, 10, 120, 3000, Cat::Growth),
    opt("geo-expansion", "Geographic Expansion", "Open in one neighbouring city.", 25000, 18, 15, 180, 8000, Cat::Growth),
    opt("paid-acquisition", "Paid Acquisition", "Scale ads on channels with proven returns.", 15000, 10, 6, 60, 4000, Cat::Marketing),
    opt("content-engine", "Content Engine", "Publish weekly content to build organic demand.", 8000, 2, 6, 120, 800, Cat::Marketing),
    opt("channel-partners", "Channel Partners", "Sign resellers or distributors on commission.", 12000, 5, 4, 90, 600, Cat::Partnerships),
    opt("pricing-tiers", "Pricing Tiers", "Introduce premium and entry tiers.", 9000, 3, 2, 30, 200, Cat::Growth),
    opt("retention-program", "Retention Program", "Reduce churn with onboarding and loyalty perks.", 7000, -5, 3, 60, 500, Cat::Marketing),
    opt("marketplaces", "Marketplace Listings", "List on the largest marketplaces in your category.", 10000, 5, 5, 45, 1000, Cat::Partnerships),
    opt("sales-team", "Dedicated Sales Team", "Hire two salespeople with clear targets.", 14000, 8, 6, 90, 2500, Cat::Operations),
    opt("analytics-stack", "Growth Analytics", "Instrument funnels to find the biggest drop-off.", 5000, -4, -2, 45, 700, Cat::Technology),
];

const OPERATIONS: Catalog = [
    opt("sop-library", "SOP Library", "Document the ten most repeated processes.", 3000, -6, -6, 30, 100, Cat::Operations),
    opt("workflow-automation", "Workflow Automation", "Automate approvals, invoicing and reminders.", 5000, -5, -10, 60, 1000, Cat::Technology),
    opt("inventory-system", "Inventory System", "Track stock in real time with reorder alerts.", 5000, -6, -4, 45, 800, Cat::Technology),
    opt("vendor-renegotiation", "Vendor Renegotiation", "Renegotiate the top five supplier contracts.", 4000, -3, 1, 30, 0, Cat::Operations),
    opt("shift-planning", "Shift Planning", "Match staffing to demand by hour and day.", 3000, -4, -8, 21, 100, Cat::Operations),
    opt("quality-checks", "Quality Checkpoints", "Add quality checks at the two most error-prone steps.", 3000, -8, 2, 30, 200, Cat::Operations),
    opt("outsourced-logistics", "Outsourced Logistics", "Hand delivery to a logistics partner.", 3000, -2, -6, 30, 600, Cat::Partnerships),
    opt("dashboard", "Operations Dashboard", "Review daily KPIs on a single dashboard.", 2000, -5, -3, 30, 400, Cat::Technology),
    opt("space-redesign", "Workspace Redesign", "Re-layout the floor to cut walking and wait time.", 3000, -2, -4, 45, 1200, Cat::Operations),
    opt("energy-savings", "Energy Savings", "Cut power costs with efficient equipment and solar.", 2000, -2, 0, 90, 2000, Cat::Operations),
];

const PIVOT: Catalog = [
    opt("customer-interviews", "Customer Discovery Interviews", "Interview thirty customers about the new direction.", 0, -12, 4, 21, 100, Cat::Operations),
    opt("mvp-test", "MVP Test", "Launch a minimal version of the new offer to a small group.", 5000, 4, 8, 45, 800, Cat::Technology),
    opt("adjacent-product", "Adjacent Product Line", "Add a product that reuses current customers and skills.", 12000, 6, 8, 90, 2000, Cat::Growth),
    opt("b2b-pivot", "Shift to B2B", "Sell the same capability to businesses instead of consumers.", 18000, 12, 10, 150, 2500, Cat::Growth),
    opt("full-rebrand", "Full Rebrand", "Rebrand around the new direction.", 10000, 14, 12, 120, 3000, Cat::Marketing),
    opt("partner-pilot", "Partner Pilot", "Test the new model with one partner before committing.", 6000, -4, 4, 60, 500, Cat::Partnerships),
    opt("wind-down-line", "Wind Down Weak Line", "Close the weakest product line to fund the pivot.", 3000, -2, -6, 60, 200, Cat::Operations),
    opt("asset-reuse", "Reuse Existing Assets", "Repurpose equipment and space for the new model.", 4000, -3, 2, 45, 400, Cat::Operations),
    opt("advisor-board", "Advisory Board", "Bring in two advisors from the target market.", 3000, -6, -2, 30, 300, Cat::Partnerships),
    opt("staged-migration", "Staged Customer Migration", "Move existing customers to the new offer in phases.", 8000, -2, 6, 120, 600, Cat::Marketing),
];

/// The ten-option catalog for a recognized query context.
pub(crate) fn context_table(ctx: QueryContext) -> &'static [OptionTemplate] {
    match ctx {
        QueryContext::Legal => &LEGAL,
        QueryContext::Funding => &FUNDING,
        QueryContext::Hiring => &HIRING,
        QueryContext::Growth => &GROWTH,
        QueryContext::Operations => &OPERATIONS,
        QueryContext::Pivot => &PIVOT,
        QueryContext::MarketEntry => &MARKET_ENTRY,
    }
}
