use super::{opt, OptionTemplate};
use bi_core::OptionCategory as Cat;

pub(crate) static GENERIC: [OptionTemplate; 10] = [
    opt("digital-presence", "Strengthen Digital Presence", "Refresh the website, Google Business profile and social handles.", 6000, 1, 4, 30, 600, Cat::Marketing),
    opt("referral-program", "Customer Referral Program", "Reward existing customers for every paying referral.", 7000, 0, 2, 30, 400, Cat::Marketing),
    opt("pricing-review", "Pricing Review", "Benchmark prices and raise them where value supports it.", 8000, 3, 1, 21, 100, Cat::Growth),
    opt("upsell-bundles", "Upsell Bundles", "Bundle complementary products or services at a small discount.", 7000, 1, 2, 30, 300, Cat::Growth),
    opt("process-automation", "Process Automation", "Automate invoicing, reminders and reporting.", 4000, -5, -8, 45, 800, Cat::Technology),
    opt("cost-audit", "Cost Audit", "Review every recurring cost and cancel or renegotiate.", 5000, -6, -2, 21, 100, Cat::Operations),
    opt("vendor-consolidation", "Vendor Consolidation", "Consolidate suppliers for volume discounts.", 4000, -3, -3, 45, 200, Cat::Operations),
    opt("local-partnerships", "Local Business Partnerships", "Cross-promote with complementary local businesses.", 6000, 1, 3, 45, 300, Cat::Partnerships),
    opt("customer-feedback", "Customer Feedback Loop", "Survey customers monthly and act on the top complaint.", 3000, -4, 2, 30, 100, Cat::Operations),
    opt("crm-adoption", "CRM Adoption", "Track leads and follow-ups in a simple CRM.", 5000, -3, -4, 30, 500, Cat::Technology),
];

pub(crate) static MARKET_ENTRY: [OptionTemplate; 10] = [
    opt("market-research", "Target City Market Research", "Study demand, competitors and rents in the target city.", 2000, -10, 3, 30, 500, Cat::Operations),
    opt("pilot-popup", "Pop-up Pilot", "Run a three-month pop-up to test demand before committing.", 6000, 4, 8, 90, 1500, Cat::Growth),
    opt("local-partner", "Local Partner or Franchisee", "Enter through a local partner who knows the market.", 12000, 6, 4, 120, 1000, Cat::Partnerships),
    opt("flagship-launch", "Flagship Launch", "Open a full-scale flagship location with a launch campaign.", 25000, 20, 15, 180, 8000, Cat::Growth),
    opt("online-first", "Online-First Entry", "Serve the new city online before opening a physical presence.", 8000, 2, 4, 60, 1200, Cat::Technology),
    opt("local-hiring", "Local Team Hiring", "Hire a small local team led by a trusted transferee.", 5000, 5, 10, 60, 2000, Cat::Operations),
    opt("regulatory-setup", "Local Registrations", "Complete state registrations, trade licence and GST setup.", 1000, -12, 3, 45, 300, Cat::Operations),
    opt("launch-campaign", "City Launch Campaign", "Run hyperlocal ads and influencer visits for launch month.", 7000, 5, 6, 30, 1500, Cat::Marketing),
    opt("supply-chain", "Regional Supply Chain", "Set up regional suppliers and a delivery route.", 4000, -4, 5, 60, 1800, Cat::Operations),
    opt("b2b-anchor", "Anchor B2B Customer", "Sign one large local customer before launch.", 10000, -6, 6, 90, 500, Cat::Partnerships),
];
