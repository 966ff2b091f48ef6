use super::{lines, Branch, PathContext, PathText};
use crate::intent::extract_city;
use bi_core::{BusinessProfile, DecisionPath};

const FAMILY: &str = "market-entry";

const AGGRESSIVE: Branch = Branch {
    slug: "aggressive",
    ev_pm: 2200,
    probability: 0.55,
    risk_score: 78,
    timeline_days: 90,
    immediate_pm: 6000,
    monthly_pm: 1200,
    revenue_pm: 9000,
    efficiency: 5,
    risk_reduction: 0,
    shap: &[("market_size", 45.0), ("competition_level", 30.0), ("local_demand", 25.0)],
    agents: [24, 16, 14, 4, 18, 10, 8, 6],
};

const BALANCED: Branch = Branch {
    slug: "balanced",
    ev_pm: 1400,
    probability: 0.80,
    risk_score: 42,
    timeline_days: 180,
    immediate_pm: 3000,
    monthly_pm: 500,
    revenue_pm: 5000,
    efficiency: 10,
    risk_reduction: 20,
    shap: &[("market_size", 35.0), ("competition_level", 30.0), ("local_demand", 35.0)],
    agents: [20, 15, 15, 6, 14, 12, 10, 8],
};

const CONSERVATIVE: Branch = Branch {
    slug: "conservative",
    ev_pm: 800,
    probability: 0.92,
    risk_score: 18,
    timeline_days: 365,
    immediate_pm: 800,
    monthly_pm: 200,
    revenue_pm: 2500,
    efficiency: 15,
    risk_reduction: 40,
    shap: &[("market_size", 25.0), ("competition_level", 25.0), ("local_demand", 50.0)],
    agents: [16, 18, 18, 8, 8, 12, 14, 6],
};

/// City a market-entry path targets.
///
/// A city named in the query wins; otherwise the profile's home city maps to a
/// nearby expansion target.
pub fn target_city(profile: &BusinessProfile, query: &str) -> String {
    if let Some(city) = extract_city(query) {
        return city;
    }
    let home = profile.location.to_lowercase();
    if home.contains("bangalore") || home.contains("bengaluru") {
        "Hyderabad".to_string()
    } else if home.contains("mumbai") {
        "Pune".to_string()
    } else if home.contains("delhi") {
        "Jaipur".to_string()
    } else {
        "Tier-2 City".to_string()
    }
}

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let city = target_city(ctx.profile, ctx.query);
    let home = &ctx.profile.location;
    let industry = &ctx.profile.industry;

    let aggressive = PathText {
        name: format!("Full-Scale Launch in {city}"),
        description: format!(
            "Open a full {industry} operation in {city} within a quarter and compete head-on for share."
        ),
        steps: vec![
            format!("Lease a high-footfall site in {city} and sign vendors"),
            format!("Move two senior people from {home} to lead the launch"),
            format!("Hire and train a local team in {city}"),
            "Run a 30-day launch campaign with introductory pricing".to_string(),
            "Review unit economics weekly and cut underperforming channels".to_string(),
        ],
        risks: vec![
            format!("Established {city} competitors respond with price cuts"),
            "Cash burn outpaces revenue ramp".to_string(),
            format!("Management attention pulled away from {home}"),
        ],
    };

    let balanced = PathText {
        name: format!("Pilot Outlet in {city}"),
        description: format!(
            "Validate demand in {city} with a single small-format pilot before committing capital."
        ),
        steps: vec![
            format!("Survey 200 prospective customers in {city}"),
            format!("Open one pilot location or kiosk in {city}"),
            "Set go/no-go metrics for month three".to_string(),
            "Scale to a full site only if the pilot clears breakeven".to_string(),
        ],
        risks: vec![
            "Pilot too small to read demand clearly".to_string(),
            format!("Local regulations in {city} delay licensing"),
        ],
    };

    let conservative = PathText {
        name: format!("Digital-First Entry into {city}"),
        description: format!(
            "Serve {city} from {home} through online channels and delivery partners, opening a site only once demand is proven."
        ),
        steps: lines([
            "List on regional marketplaces and delivery platforms",
            "Run geo-targeted ads at a capped monthly budget",
            "Track repeat orders by pin code",
            "Revisit a physical presence after twelve months",
        ]),
        risks: vec![
            "Slower brand recognition without a physical presence".to_string(),
            format!("Fulfilment costs from {home} erode margin"),
        ],
    };

    [
        ctx.build(FAMILY, &AGGRESSIVE, aggressive),
        ctx.build(FAMILY, &BALANCED, balanced),
        ctx.build(FAMILY, &CONSERVATIVE, conservative),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::generate_decision_paths;

    fn at(location: &str) -> BusinessProfile {
        BusinessProfile {
            location: location.to_string(),
            ..BusinessProfile::default()
        }
    }

    #[test]
    fn query_city_overrides_home_mapping() {
        let paths = generate_decision_paths(&at("Bangalore"), "Should I expand to Jaipur?");
        assert_eq!(paths[0].name, "Full-Scale Launch in Jaipur");
        assert!(paths[1].steps.iter().any(|s| s.contains("Jaipur")));
    }

    #[test]
    fn home_city_maps_to_default_target() {
        assert_eq!(target_city(&at("Bengaluru"), "should we expand"), "Hyderabad");
        assert_eq!(target_city(&at("Mumbai"), "expansion plans"), "Pune");
        assert_eq!(target_city(&at("New Delhi"), "enter a new market"), "Jaipur");
        assert_eq!(target_city(&at("Shillong"), "go international"), "Tier-2 City");
    }
}
