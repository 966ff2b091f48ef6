use super::{opt, OptionTemplate};
use crate::IndustryKey;
use bi_core::OptionCategory as Cat;

type Menu = [OptionTemplate; 5];

const CLOUD_KITCHEN: Menu = [
    opt("virtual-brand", "Launch a Virtual Brand", "Run a second delivery-only brand from the same kitchen and staff.", 18000, 10, 8, 45, 2500, Cat::Growth),
    opt("aggregator-ads", "Aggregator Sponsored Listings", "Buy top placement on delivery apps during lunch and dinner peaks.", 9000, 5, 2, 14, 1500, Cat::Marketing),
    opt("direct-ordering", "Direct Ordering Website", "Move repeat customers to a commission-free ordering site.", 7000, -5, 4, 60, 1200, Cat::Technology),
    opt("kitchen-batching", "Batch Prep Schedule", "Pre-prep high-volume items to cut ticket times at peak.", 4000, -8, -6, 21, 300, Cat::Operations),
    opt("corporate-meals", "Corporate Meal Contracts", "Sign office canteens and tech parks for daily meal boxes.", 15000, 8, 10, 90, 800, Cat::Partnerships),
];

const RESTAURANT: Menu = [
    opt("second-outlet", "Open a Second Outlet", "Replicate the best-performing format in a nearby high-footfall area.", 25000, 18, 15, 150, 9000, Cat::Growth),
    opt("catering-arm", "Events and Catering Arm", "Use off-peak kitchen capacity for weddings and corporate events.", 14000, 8, 12, 60, 2000, Cat::Growth),
    opt("loyalty-app", "Loyalty Program", "Reward repeat diners with points redeemable on weekday visits.", 6000, -3, 3, 45, 800, Cat::Marketing),
    opt("menu-engineering", "Menu Engineering", "Drop low-margin dishes and promote high-margin stars.", 5000, -6, -2, 30, 200, Cat::Operations),
    opt("food-blogger-collab", "Food Blogger Collaborations", "Host tasting nights with local food creators.", 7000, 3, 4, 30, 500, Cat::Partnerships),
];

const CAFE: Menu = [
    opt("subscription-coffee", "Coffee Subscription", "Sell monthly coffee passes to regulars and nearby offices.", 8000, -2, 3, 30, 400, Cat::Growth),
    opt("coworking-hours", "Co-working Hours", "Offer paid workspace passes during slow afternoon hours.", 6000, 2, 4, 21, 600, Cat::Growth),
    opt("retail-beans", "Retail Beans and Merchandise", "Package house blends and merchandise for take-home sale.", 5000, 3, 3, 45, 1200, Cat::Growth),
    opt("barista-workshops", "Barista Workshops", "Run weekend brewing workshops that double as marketing.", 3000, 1, 5, 30, 300, Cat::Marketing),
    opt("bakery-tieup", "Local Bakery Tie-up", "Stock fresh pastries from a partner bakery on consignment.", 4000, -2, -1, 14, 100, Cat::Partnerships),
];

const BAKERY: Menu = [
    opt("custom-cakes", "Custom Cake Orders Online", "Take made-to-order cake bookings with delivery slots online.", 12000, 5, 10, 45, 1000, Cat::Technology),
    opt("wholesale-cafes", "Wholesale to Cafes", "Supply breads and pastries to ten cafes on standing orders.", 15000, 8, 8, 60, 1500, Cat::Partnerships),
    opt("festival-hampers", "Festival Hampers", "Pre-sell Diwali and Christmas hampers to corporates.", 18000, 10, 15, 45, 2500, Cat::Marketing),
    opt("oven-upgrade", "Oven Capacity Upgrade", "Add a deck oven to lift daily output by a third.", 9000, 6, -3, 30, 4000, Cat::Operations),
    opt("baking-classes", "Weekend Baking Classes", "Teach paid classes using idle weekend capacity.", 3000, 1, 6, 21, 300, Cat::Growth),
];

const FOOD: Menu = [
    opt("d2c-packaged", "Packaged D2C Range", "Bottle or pack signature products for online sale.", 20000, 14, 10, 120, 5000, Cat::Growth),
    opt("quick-commerce", "Quick-Commerce Listing", "List on ten-minute delivery apps in dense neighbourhoods.", 11000, 6, 5, 45, 1500, Cat::Partnerships),
    opt("fssai-upgrade", "Food Safety Upgrade", "Upgrade licences and hygiene audits to unlock institutional buyers.", 6000, -10, 3, 60, 800, Cat::Operations),
    opt("sampling-drives", "Sampling Drives", "Run product sampling at malls and housing societies.", 7000, 4, 6, 30, 900, Cat::Marketing),
    opt("inventory-app", "Inventory and Wastage Tracking", "Track stock and expiry daily to cut wastage.", 4000, -6, -4, 30, 400, Cat::Technology),
];

const KIRANA: Menu = [
    opt("whatsapp-orders", "WhatsApp Ordering", "Take orders on WhatsApp with a shared catalogue and home delivery.", 8000, 2, 6, 14, 200, Cat::Technology),
    opt("ondc-listing", "ONDC Listing", "List the store on the open commerce network to reach nearby buyers.", 9000, 4, 4, 30, 300, Cat::Technology),
    opt("credit-ledger", "Digital Credit Ledger", "Move customer credit to a digital khata with reminders.", 3000, -8, -3, 14, 100, Cat::Operations),
    opt("private-label", "Private Label Staples", "Sell own-brand rice, pulses and spices at better margins.", 10000, 8, 6, 90, 2500, Cat::Growth),
    opt("fmcg-schemes", "FMCG Distributor Schemes", "Negotiate display and volume schemes with distributors.", 5000, -2, 2, 30, 100, Cat::Partnerships),
];

const GROCERY: Menu = [
    opt("subscription-basket", "Weekly Subscription Basket", "Deliver a fixed weekly basket of staples and produce.", 12000, 4, 8, 30, 800, Cat::Growth),
    opt("fresh-section", "Fresh Produce Section", "Add a fruit and vegetable counter sourced from farmers.", 9000, 8, 6, 45, 1500, Cat::Operations),
    opt("society-tieups", "Housing Society Tie-ups", "Become the preferred supplier for nearby gated communities.", 10000, 3, 5, 60, 400, Cat::Partnerships),
    opt("billing-pos", "POS and Billing System", "Install a POS with barcode billing and stock sync.", 4000, -6, -4, 21, 1200, Cat::Technology),
    opt("flyer-campaign", "Neighbourhood Flyer Campaign", "Distribute offers door-to-door in a two-kilometre radius.", 4000, 1, 3, 14, 300, Cat::Marketing),
];

const RETAIL: Menu = [
    opt("omnichannel", "Omnichannel Storefront", "Sell the in-store range online with store pickup.", 15000, 8, 8, 90, 3000, Cat::Technology),
    opt("visual-merchandising", "Visual Merchandising Refresh", "Redesign displays around best-sellers and impulse buys.", 6000, 2, 3, 30, 1000, Cat::Marketing),
    opt("loyalty-card", "Loyalty Card", "Reward repeat buyers and capture contact details.", 5000, -2, 2, 30, 500, Cat::Marketing),
    opt("inventory-turns", "Inventory Turn Optimisation", "Clear slow stock and reorder by sell-through.", 7000, -8, -2, 45, 300, Cat::Operations),
    opt("brand-shop-in-shop", "Brand Shop-in-Shop", "Rent floor space to a complementary brand.", 8000, -3, -1, 60, 200, Cat::Partnerships),
];

const FASHION: Menu = [
    opt("instagram-drops", "Instagram Limited Drops", "Release small limited collections announced on social media.", 12000, 8, 10, 30, 2000, Cat::Marketing),
    opt("marketplace-expansion", "Marketplace Expansion", "List on two large fashion marketplaces.", 16000, 10, 8, 60, 2500, Cat::Growth),
    opt("made-to-order", "Made-to-Order Line", "Cut inventory risk by producing only against orders.", 7000, -10, 4, 45, 800, Cat::Operations),
    opt("influencer-collab", "Influencer Capsule Collection", "Co-design a capsule with a regional influencer.", 14000, 12, 12, 75, 3000, Cat::Partnerships),
    opt("size-recommendation", "Size Recommendation Tool", "Reduce returns with a fit-guide tool on product pages.", 5000, -6, -2, 45, 1000, Cat::Technology),
];

const ECOMMERCE: Menu = [
    opt("performance-ads", "Performance Marketing Scale-up", "Scale paid social and search with strict ROAS targets.", 20000, 15, 8, 60, 6000, Cat::Marketing),
    opt("cod-reduction", "Prepaid Conversion Push", "Cut cash-on-delivery and RTO with prepaid incentives.", 6000, -10, -2, 30, 500, Cat::Operations),
    opt("retention-flows", "Email and WhatsApp Retention Flows", "Automate win-back and replenishment messages.", 9000, -3, -2, 30, 600, Cat::Technology),
    opt("3pl-fulfilment", "Third-Party Fulfilment", "Move warehousing and shipping to a 3PL.", 5000, -4, -8, 45, 1500, Cat::Partnerships),
    opt("new-category", "Adjacent Category Launch", "Add one adjacent category sold to the same buyers.", 15000, 12, 10, 90, 4000, Cat::Growth),
];

const FINTECH: Menu = [
    opt("embedded-finance", "Embedded Finance Partnerships", "Offer the product inside partner apps via APIs.", 25000, 12, 10, 120, 5000, Cat::Partnerships),
    opt("compliance-automation", "Compliance Automation", "Automate KYC and reporting to scale onboarding safely.", 8000, -15, -5, 90, 3000, Cat::Technology),
    opt("referral-rewards", "Referral Rewards", "Reward users for referring friends with cashback.", 12000, 6, 3, 30, 2500, Cat::Marketing),
    opt("credit-product", "Small-Ticket Credit Product", "Launch a small credit line with an NBFC partner.", 30000, 20, 12, 180, 6000, Cat::Growth),
    opt("support-bot", "Support Automation", "Deflect routine support tickets with a chatbot.", 4000, -4, -8, 45, 1000, Cat::Operations),
];

const EDTECH: Menu = [
    opt("cohort-courses", "Cohort-Based Courses", "Run live cohorts with higher price points and completion rates.", 18000, 8, 12, 60, 2000, Cat::Growth),
    opt("b2b-licensing", "B2B Content Licensing", "License content to schools and corporates.", 20000, 6, 6, 120, 1500, Cat::Partnerships),
    opt("vernacular", "Vernacular Content", "Translate top courses into two regional languages.", 12000, 5, 8, 90, 3000, Cat::Growth),
    opt("free-webinars", "Free Webinar Funnel", "Use weekly free webinars to fill paid courses.", 9000, 2, 6, 30, 500, Cat::Marketing),
    opt("learning-analytics", "Learning Analytics", "Track learner progress to reduce drop-offs.", 5000, -5, -2, 60, 1500, Cat::Technology),
];

const SAAS: Menu = [
    opt("annual-plans", "Annual Prepaid Plans", "Move monthly customers to annual plans with a discount.", 15000, -8, 2, 30, 300, Cat::Growth),
    opt("product-led", "Product-Led Free Tier", "Launch a free tier with in-product upgrade prompts.", 22000, 12, 10, 120, 4000, Cat::Technology),
    opt("integrations", "Integration Marketplace", "Ship integrations with the three most-requested tools.", 12000, 4, 8, 90, 3000, Cat::Partnerships),
    opt("content-seo", "Content and SEO Engine", "Publish comparison and how-to content for buyer keywords.", 10000, 2, 5, 120, 1500, Cat::Marketing),
    opt("churn-program", "Customer Success Playbook", "Onboard and check in with accounts to reduce churn.", 8000, -8, 4, 60, 1200, Cat::Operations),
];

const EDUCATION: Menu = [
    opt("hybrid-classes", "Hybrid Classes", "Add online batches alongside classroom sessions.", 12000, 5, 8, 45, 1500, Cat::Technology),
    opt("test-series", "Test Series Product", "Sell mock test series to students outside your centre.", 9000, 3, 5, 60, 800, Cat::Growth),
    opt("school-partnerships", "School Partnerships", "Run after-school programmes inside partner schools.", 14000, 6, 8, 90, 1000, Cat::Partnerships),
    opt("alumni-referrals", "Alumni Referral Drive", "Reward past students for referring new admissions.", 6000, 1, 2, 30, 400, Cat::Marketing),
    opt("batch-scheduling", "Batch Scheduling Optimisation", "Fill empty classroom slots by rebalancing batches.", 4000, -4, -5, 21, 100, Cat::Operations),
];

const SALON: Menu = [
    opt("memberships", "Prepaid Memberships", "Sell prepaid service packages with bonus value.", 10000, -3, 3, 30, 400, Cat::Growth),
    opt("bridal-packages", "Bridal and Event Packages", "Bundle bridal services for the wedding season.", 15000, 6, 12, 60, 1200, Cat::Marketing),
    opt("online-booking", "Online Booking", "Take appointments online and cut no-shows with reminders.", 5000, -5, -6, 21, 500, Cat::Technology),
    opt("product-retail", "Retail Hair and Skin Products", "Sell professional products at the counter.", 6000, 2, 1, 30, 1500, Cat::Growth),
    opt("gym-tieup", "Gym and Spa Tie-up", "Cross-sell services with a nearby gym.", 5000, 1, 2, 30, 200, Cat::Partnerships),
];

const FITNESS: Menu = [
    opt("corporate-wellness", "Corporate Wellness Contracts", "Sell group memberships to nearby offices.", 16000, 6, 8, 60, 800, Cat::Partnerships),
    opt("online-classes", "Online Live Classes", "Stream classes for members who cannot visit.", 9000, 4, 8, 45, 1200, Cat::Technology),
    opt("personal-training", "Personal Training Upsell", "Package personal training blocks for members.", 10000, 2, 10, 30, 300, Cat::Growth),
    opt("challenge-campaign", "90-Day Transformation Challenge", "Run a paid challenge with before-and-after stories.", 8000, 3, 8, 90, 600, Cat::Marketing),
    opt("off-peak-pricing", "Off-Peak Pricing", "Discount off-peak memberships to fill idle hours.", 5000, -2, -1, 21, 100, Cat::Operations),
];

const HEALTHCARE: Menu = [
    opt("teleconsult", "Teleconsultation", "Offer video consultations for follow-ups.", 10000, 4, 4, 45, 1200, Cat::Technology),
    opt("health-packages", "Preventive Health Packages", "Sell annual check-up packages to families and employers.", 14000, 3, 6, 60, 1000, Cat::Growth),
    opt("insurance-empanelment", "Insurance Empanelment", "Get empanelled with major insurers and TPAs.", 18000, -4, 6, 120, 1500, Cat::Partnerships),
    opt("patient-reminders", "Patient Recall Reminders", "Automate follow-up and vaccination reminders.", 5000, -5, -4, 21, 300, Cat::Operations),
    opt("community-camps", "Community Health Camps", "Run free screening camps in nearby localities.", 6000, 1, 8, 30, 600, Cat::Marketing),
];

const PHARMACY: Menu = [
    opt("home-delivery", "Home Delivery of Medicines", "Deliver repeat prescriptions within two hours.", 10000, 3, 6, 21, 600, Cat::Growth),
    opt("refill-reminders", "Chronic Refill Reminders", "Remind chronic patients before refills are due.", 7000, -4, -2, 21, 200, Cat::Technology),
    opt("clinic-tieups", "Clinic Tie-ups", "Partner with nearby clinics for prescription referrals.", 9000, 2, 3, 45, 300, Cat::Partnerships),
    opt("generic-range", "Generic Medicine Range", "Promote quality generics at better margins.", 8000, 5, 2, 30, 1000, Cat::Growth),
    opt("expiry-tracking", "Expiry and Stock Tracking", "Track batches to cut expired stock write-offs.", 3000, -8, -3, 30, 400, Cat::Operations),
];

const REAL_ESTATE: Menu = [
    opt("digital-listings", "Virtual Tours and Digital Listings", "List properties with video walkthroughs on portals.", 15000, 4, 4, 30, 1500, Cat::Technology),
    opt("channel-partners", "Channel Partner Network", "Onboard brokers on a commission-only basis.", 25000, 8, 6, 90, 1000, Cat::Partnerships),
    opt("rental-management", "Rental Management Service", "Manage rentals for NRI and investor owners for a fee.", 12000, -2, 8, 60, 800, Cat::Growth),
    opt("site-visit-events", "Weekend Site Visit Events", "Run weekend events with transport for buyers.", 10000, 3, 8, 30, 1500, Cat::Marketing),
    opt("crm-pipeline", "Lead CRM Pipeline", "Track every lead from enquiry to registration.", 6000, -5, -4, 30, 600, Cat::Operations),
];

const CONSTRUCTION: Menu = [
    opt("govt-tenders", "Government Tenders", "Bid for municipal and state civil works.", 30000, 15, 12, 180, 3000, Cat::Growth),
    opt("prefab", "Prefab and Modular Methods", "Adopt modular methods to shorten project timelines.", 15000, 8, -2, 120, 6000, Cat::Technology),
    opt("material-procurement", "Bulk Material Procurement", "Pool material purchases across sites for better rates.", 8000, -6, -2, 30, 500, Cat::Operations),
    opt("architect-network", "Architect Referral Network", "Build referral relationships with local architects.", 12000, 2, 4, 90, 400, Cat::Partnerships),
    opt("portfolio-marketing", "Project Portfolio Marketing", "Showcase completed projects online and on site boards.", 6000, 1, 2, 45, 500, Cat::Marketing),
];

const MANUFACTURING: Menu = [
    opt("export-orders", "Export Orders", "Register on B2B export platforms and attend one trade fair.", 30000, 15, 10, 180, 5000, Cat::Growth),
    opt("oee-improvement", "Machine Uptime Improvement", "Track OEE and fix the top causes of downtime.", 10000, -6, -2, 60, 1000, Cat::Operations),
    opt("oem-contract", "OEM Supply Contract", "Become a tier-2 supplier to a larger OEM.", 25000, 8, 8, 150, 2500, Cat::Partnerships),
    opt("erp-rollout", "ERP Rollout", "Move production planning and inventory onto an ERP.", 8000, -4, 6, 120, 4000, Cat::Technology),
    opt("trade-catalogue", "Digital Trade Catalogue", "Publish a product catalogue for dealers and buyers.", 6000, 1, 2, 30, 500, Cat::Marketing),
];

const LOGISTICS: Menu = [
    opt("route-optimisation", "Route Optimisation", "Plan routes with software to cut fuel and delivery time.", 10000, -5, -6, 30, 1200, Cat::Technology),
    opt("ecommerce-contracts", "E-commerce Last-Mile Contracts", "Sign last-mile contracts with online sellers.", 20000, 8, 10, 60, 1500, Cat::Partnerships),
    opt("ev-fleet", "EV Fleet Transition", "Replace city vehicles with electric ones.", 12000, 6, -2, 180, 8000, Cat::Operations),
    opt("warehouse-space", "Shared Warehousing", "Rent spare warehouse space to small businesses.", 8000, 2, 3, 45, 500, Cat::Growth),
    opt("tracking-portal", "Customer Tracking Portal", "Give shippers live tracking and proof of delivery.", 6000, -3, -2, 45, 1000, Cat::Marketing),
];

const TRAVEL: Menu = [
    opt("curated-packages", "Curated Theme Packages", "Design theme trips for pilgrims, trekkers and families.", 15000, 6, 8, 60, 1500, Cat::Growth),
    opt("corporate-travel", "Corporate Travel Desk", "Manage travel for small companies on retainer.", 18000, 3, 8, 90, 800, Cat::Partnerships),
    opt("hotel-allotments", "Hotel Allotment Deals", "Negotiate room allotments in peak season.", 10000, 10, 4, 45, 3000, Cat::Operations),
    opt("social-reels", "Destination Reels", "Post short destination videos from every trip.", 7000, 1, 5, 30, 400, Cat::Marketing),
    opt("online-booking-engine", "Online Booking Engine", "Let customers book and pay for packages online.", 9000, -2, -4, 60, 1500, Cat::Technology),
];

const AGRICULTURE: Menu = [
    opt("fpo-partnership", "Farmer Producer Organisation Tie-up", "Aggregate supply through an FPO for volume contracts.", 15000, 4, 4, 90, 600, Cat::Partnerships),
    opt("cold-storage", "Cold Storage Access", "Rent cold storage to sell when prices recover.", 12000, 6, 2, 60, 2500, Cat::Operations),
    opt("direct-to-retail", "Direct-to-Retail Sales", "Sell graded produce directly to retailers and hotels.", 14000, 8, 8, 60, 800, Cat::Growth),
    opt("agri-app", "Farm Management App", "Track inputs, yields and mandi prices digitally.", 5000, -5, -3, 45, 400, Cat::Technology),
    opt("organic-certification", "Organic Certification", "Certify a block of land organic for premium prices.", 10000, 5, 6, 365, 1500, Cat::Marketing),
];

const CONSULTING: Menu = [
    opt("productised-offer", "Productised Service", "Package the most common engagement into a fixed-price offer.", 15000, 2, -4, 45, 500, Cat::Growth),
    opt("retainers", "Monthly Retainers", "Convert project clients into monthly retainers.", 12000, -6, 2, 60, 200, Cat::Growth),
    opt("thought-leadership", "Thought Leadership Content", "Publish case studies and a monthly newsletter.", 8000, 1, 6, 120, 400, Cat::Marketing),
    opt("referral-alliances", "Referral Alliances", "Agree referral fees with complementary firms.", 10000, 2, 2, 60, 200, Cat::Partnerships),
    opt("delivery-templates", "Delivery Templates", "Standardise deliverables to cut hours per project.", 5000, -4, -8, 30, 200, Cat::Operations),
];

const EVENTS: Menu = [
    opt("wedding-season", "Wedding Season Packages", "Pre-sell full-service wedding packages a season ahead.", 25000, 10, 15, 90, 3000, Cat::Growth),
    opt("corporate-offsites", "Corporate Offsites", "Pitch offsites and annual days to mid-size firms.", 18000, 6, 10, 60, 1000, Cat::Partnerships),
    opt("vendor-network", "Vendor Network Contracts", "Lock preferred rates with decorators and caterers.", 8000, -6, -4, 45, 300, Cat::Operations),
    opt("showcase-reels", "Event Showcase Reels", "Turn every event into social media showcase content.", 7000, 1, 5, 30, 500, Cat::Marketing),
    opt("planning-portal", "Client Planning Portal", "Share budgets, timelines and approvals online.", 5000, -4, -6, 45, 800, Cat::Technology),
];

/// The fixed five-option menu for an industry.
pub(crate) fn industry_table(key: IndustryKey) -> &'static [OptionTemplate] {
    match key {
        IndustryKey::CloudKitchen => &CLOUD_KITCHEN,
        IndustryKey::Restaurant => &RESTAURANT,
        IndustryKey::Cafe => &CAFE,
        IndustryKey::Bakery => &BAKERY,
        IndustryKey::Food => &FOOD,
        IndustryKey::Kirana => &KIRANA,
        IndustryKey::Grocery => &GROCERY,
        IndustryKey::Retail => &RETAIL,
        IndustryKey::Fashion => &FASHION,
        IndustryKey::Ecommerce => &ECOMMERCE,
        IndustryKey::Fintech => &FINTECH,
        IndustryKey::Edtech => &EDTECH,
        IndustryKey::Saas => &SAAS,
        IndustryKey::Education => &EDUCATION,
        IndustryKey::Salon => &SALON,
        IndustryKey::Fitness => &FITNESS,
        IndustryKey::Healthcare => &HEALTHCARE,
        IndustryKey::Pharmacy => &PHARMACY,
        IndustryKey::RealEstate => &REAL_ESTATE,
        IndustryKey::Construction => &CONSTRUCTION,
        IndustryKey::Manufacturing => &MANUFACTURING,
        IndustryKey::Logistics => &LOGISTICS,
        IndustryKey::Travel => &TRAVEL,
        IndustryKey::Agriculture => &AGRICULTURE,
        IndustryKey::Consulting => &CONSULTING,
        IndustryKey::Events => &EVENTS,
    }
}
