use super::{Branch, PathContext, PathText};
use bi_catalog::{lookup_catalog, OptionTemplate};
use bi_core::DecisionPath;
use tracing::debug;

const EXPAND: Branch = Branch {
    slug: "expand",
    ev_pm: 1600,
    probability: 0.60,
    risk_score: 60,
    timeline_days: 150,
    immediate_pm: 3000,
    monthly_pm: 800,
    revenue_pm: 6000,
    efficiency: 10,
    risk_reduction: 5,
    shap: &[("market_opportunity", 40.0), ("financial_health", 35.0), ("team_capacity", 25.0)],
    agents: [18, 16, 12, 6, 20, 10, 10, 8],
};

const OPTIMISE: Branch = Branch {
    slug: "optimise",
    ev_pm: 1100,
    probability: 0.80,
    risk_score: 32,
    timeline_days: 120,
    immediate_pm: 800,
    monthly_pm: 200,
    revenue_pm: 3000,
    efficiency: 25,
    risk_reduction: 20,
    shap: &[("market_opportunity", 30.0), ("financial_health", 35.0), ("team_capacity", 35.0)],
    agents: [12, 16, 12, 6, 12, 20, 14, 8],
};

const CONSOLIDATE: Branch = Branch {
    slug: "consolidate",
    ev_pm: 600,
    probability: 0.92,
    risk_score: 12,
    timeline_days: 90,
    immediate_pm: 100,
    monthly_pm: 0,
    revenue_pm: 1000,
    efficiency: 15,
    risk_reduction: 45,
    shap: &[("market_opportunity", 20.0), ("financial_health", 50.0), ("team_capacity", 30.0)],
    agents: [8, 24, 20, 10, 6, 14, 10, 8],
};

/// Highest-, middle- and lowest-revenue options of the industry menu.
fn spectrum(industry: &str) -> [&'static OptionTemplate; 3] {
    let catalog = lookup_catalog(industry);
    let mut menu = catalog.templates();
    menu.sort_by(|a, b| b.revenue_pm.cmp(&a.revenue_pm));
    debug!(?catalog, options = menu.len(), "general paths from catalog");
    [menu[0], menu[menu.len() / 2], menu[menu.len() - 1]]
}

pub(crate) fn paths(ctx: &PathContext<'_>) -> [DecisionPath; 3] {
    let industry = &ctx.profile.industry;
    let city = &ctx.profile.location;
    let [bold, steady, safe] = spectrum(industry);
    [
        ctx.build(
            "general",
            &EXPAND,
            PathText {
                name: format!("Expand: {}", bold.title),
                description: format!("{} Push the {industry} business beyond {city}.", bold.description),
                steps: vec![
                    format!("Commit budget to {}", bold.title.to_lowercase()),
                    format!("Open one new channel outside {city}"),
                    "Add capacity ahead of demand".to_string(),
                    format!("Review results at day {}", bold.timeline_days),
                ],
                risks: vec![
                    "Capital tied up before returns arrive".to_string(),
                    "Stretch on management time".to_string(),
                ],
            },
        ),
        ctx.build(
            "general",
            &OPTIMISE,
            PathText {
                name: format!("Optimise: {}", steady.title),
                description: format!("{} Improve margins in the existing {industry} core.", steady.description),
                steps: vec![
                    format!("Run {} as a {}-day project", steady.title.to_lowercase(), steady.timeline_days),
                    "Benchmark pricing and margins against peers".to_string(),
                    "Fix the top three customer complaints".to_string(),
                ],
                risks: vec![
                    "Incremental gains only".to_string(),
                    "Competitors may out-invest you".to_string(),
                ],
            },
        ),
        ctx.build(
            "general",
            &CONSOLIDATE,
            PathText {
                name: format!("Consolidate: {}", safe.title),
                description: format!("{} Protect cash while the market direction becomes clear.", safe.description),
                steps: vec![
                    format!("Start with {}", safe.title.to_lowercase()),
                    "Build six months of operating reserve".to_string(),
                    "Pause discretionary spend".to_string(),
                ],
                risks: vec![
                    "Missed growth window".to_string(),
                    format!("Share lost to bolder {industry} competitors"),
                ],
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::paths::generate_decision_paths;
    use bi_core::BusinessProfile;

    fn general(industry: &str) -> [bi_core::DecisionPath; 3] {
        let p = BusinessProfile {
            industry: industry.to_string(),
            ..BusinessProfile::default()
        };
        generate_decision_paths(&p, "random unrelated text")
    }

    #[test]
    fn industry_menu_shapes_the_paths() {
        let restaurant = general("restaurant");
        let saas = general("saas");
        assert_eq!(restaurant[0].name, "Expand: Open a Second Outlet");
        assert_eq!(restaurant[1].name, "Optimise: Food Blogger Collaborations");
        assert_eq!(restaurant[2].name, "Consolidate: Menu Engineering");
        assert_eq!(saas[0].name, "Expand: Product-Led Free Tier");
        for i in 0..3 {
            assert_ne!(restaurant[i].name, saas[i].name);
            assert_ne!(restaurant[i].steps, saas[i].steps);
            assert_eq!(restaurant[i].expected_value, saas[i].expected_value);
        }
    }

    #[test]
    fn unmatched_industry_uses_generic_menu() {
        let paths = general("unknown-industry-xyz");
        assert_eq!(paths[0].name, "Expand: Flagship Launch");
        assert_eq!(paths[0].id, "general-expand");
        assert_eq!(paths[2].id, "general-consolidate");
    }
}
