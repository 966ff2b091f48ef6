#![deny(warnings)]

//! Industry strategy catalog for cascading drill-down options.
//!
//! A selected decision path can be expanded into a menu of concrete
//! execution options. The menu comes from one of three sources:
//! - an intent-driven catalog when a [`QueryContext`] is supplied
//! - a per-industry menu of five options matched from the profile
//! - a generic twenty-option fallback when nothing matches

mod tables;

pub use tables::OptionTemplate;

use bi_core::{BusinessProfile, ExecutionOption, Intent};
use bi_econ::mrr_multiple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Industries with a dedicated option menu, in match priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryKey {
    CloudKitchen,
    Restaurant,
    Cafe,
    Bakery,
    Food,
    Kirana,
    Grocery,
    Retail,
    Fashion,
    Ecommerce,
    Fintech,
    Edtech,
    Saas,
    Education,
    Salon,
    Fitness,
    Healthcare,
    Pharmacy,
    RealEstate,
    Construction,
    Manufacturing,
    Logistics,
    Travel,
    Agriculture,
    Consulting,
    Events,
}

impl IndustryKey {
    /// Declaration order is match order: the first key that matches wins.
    pub const ALL: [IndustryKey; 26] = [
        IndustryKey::CloudKitchen,
        IndustryKey::Restaurant,
        IndustryKey::Cafe,
        IndustryKey::Bakery,
        IndustryKey::Food,
        IndustryKey::Kirana,
        IndustryKey::Grocery,
        IndustryKey::Retail,
        IndustryKey::Fashion,
        IndustryKey::Ecommerce,
        IndustryKey::Fintech,
        IndustryKey::Edtech,
        IndustryKey::Saas,
        IndustryKey::Education,
        IndustryKey::Salon,
        IndustryKey::Fitness,
        IndustryKey::Healthcare,
        IndustryKey::Pharmacy,
        IndustryKey::RealEstate,
        IndustryKey::Construction,
        IndustryKey::Manufacturing,
        IndustryKey::Logistics,
        IndustryKey::Travel,
        IndustryKey::Agriculture,
        IndustryKey::Consulting,
        IndustryKey::Events,
    ];

    /// Lowercase key matched against normalized industry names.
    pub fn key(self) -> &'static str {
        match self {
            IndustryKey::CloudKitchen => "cloud kitchen",
            IndustryKey::Restaurant => "restaurant",
            IndustryKey::Cafe => "cafe",
            IndustryKey::Bakery => "bakery",
            IndustryKey::Food => "food",
            IndustryKey::Kirana => "kirana",
            IndustryKey::Grocery => "grocery",
            IndustryKey::Retail => "retail",
            IndustryKey::Fashion => "fashion",
            IndustryKey::Ecommerce => "ecommerce",
            IndustryKey::Fintech => "fintech",
            IndustryKey::Edtech => "edtech",
            IndustryKey::Saas => "saas",
            IndustryKey::Education => "education",
            IndustryKey::Salon => "salon",
            IndustryKey::Fitness => "fitness",
            IndustryKey::Healthcare => "healthcare",
            IndustryKey::Pharmacy => "pharmacy",
            IndustryKey::RealEstate => "real estate",
            IndustryKey::Construction => "construction",
            IndustryKey::Manufacturing => "manufacturing",
            IndustryKey::Logistics => "logistics",
            IndustryKey::Travel => "travel",
            IndustryKey::Agriculture => "agriculture",
            IndustryKey::Consulting => "consulting",
            IndustryKey::Events => "event",
        }
    }

    /// Match a free-text industry by substring in either direction.
    pub fn resolve(industry: &str) -> Option<IndustryKey> {
        let normalized = industry.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        IndustryKey::ALL.into_iter().find(|k| {
            let key = k.key();
            normalized.contains(key) || key.contains(normalized.as_str())
        })
    }
}

impl fmt::Display for IndustryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Intent-driven drill-down catalogs that bypass the industry lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryContext {
    Legal,
    Funding,
    Hiring,
    Growth,
    Operations,
    Pivot,
    MarketEntry,
}

impl QueryContext {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryContext::Legal => "legal",
            QueryContext::Funding => "funding",
            QueryContext::Hiring => "hiring",
            QueryContext::Growth => "growth",
            QueryContext::Operations => "operations",
            QueryContext::Pivot => "pivot",
            QueryContext::MarketEntry => "market_entry",
        }
    }

    /// Parse a context name, accepting common aliases.
    pub fn parse(raw: &str) -> Option<QueryContext> {
        match raw.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "legal" | "compliance" => Some(QueryContext::Legal),
            "funding" => Some(QueryContext::Funding),
            "hiring" => Some(QueryContext::Hiring),
            "growth" => Some(QueryContext::Growth),
            "operations" => Some(QueryContext::Operations),
            "pivot" => Some(QueryContext::Pivot),
            "market_entry" | "expansion" => Some(QueryContext::MarketEntry),
            _ => None,
        }
    }

    /// Drill-down context for a classified intent, if it has one.
    pub fn from_intent(intent: Intent) -> Option<QueryContext> {
        match intent {
            Intent::MarketEntry => Some(QueryContext::MarketEntry),
            Intent::Compliance => Some(QueryContext::Legal),
            Intent::Funding => Some(QueryContext::Funding),
            Intent::Hiring => Some(QueryContext::Hiring),
            Intent::Growth => Some(QueryContext::Growth),
            Intent::Operations => Some(QueryContext::Operations),
            Intent::Pivot => Some(QueryContext::Pivot),
            Intent::Marketing | Intent::General => None,
        }
    }
}

impl fmt::Display for QueryContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryContext::parse(s).ok_or_else(|| format!("unknown query context `{s}`"))
    }
}

/// A resolved option menu, ready to be generated for a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    Industry(IndustryKey),
    Context(QueryContext),
    Generic,
}

impl Catalog {
    /// Templates in presentation order.
    pub fn templates(self) -> Vec<&'static OptionTemplate> {
        match self {
            Catalog::Industry(key) => tables::industry_table(key).iter().collect(),
            Catalog::Context(ctx) => tables::context_table(ctx).iter().collect(),
            Catalog::Generic => tables::GENERIC
                .iter()
                .chain(tables::MARKET_ENTRY.iter())
                .collect(),
        }
    }

    /// Build options for `profile`, prefixing ids with `parent_path_id`.
    pub fn generate(self, profile: &BusinessProfile, parent_path_id: &str) -> Vec<ExecutionOption> {
        self.templates()
            .into_iter()
            .map(|t| build_option(t, profile.mrr, parent_path_id))
            .collect()
    }
}

fn build_option(t: &OptionTemplate, mrr: u64, parent_path_id: &str) -> ExecutionOption {
    ExecutionOption {
        id: format!("{parent_path_id}-{}", t.slug),
        title: t.title.to_string(),
        description: t.description.to_string(),
        projected_revenue: mrr_multiple(mrr, t.revenue_pm),
        risk_delta: t.risk_delta,
        burnout_delta: t.burnout_delta,
        timeline_days: t.timeline_days,
        cost: mrr_multiple(mrr, t.cost_pm),
        category: t.category,
    }
}

/// Resolve the industry menu for a free-text industry name.
pub fn lookup_catalog(industry: &str) -> Catalog {
    match IndustryKey::resolve(industry) {
        Some(key) => {
            debug!(industry, key = %key, "industry catalog matched");
            Catalog::Industry(key)
        }
        None => {
            debug!(industry, "no industry catalog, using generic fallback");
            Catalog::Generic
        }
    }
}

/// Generate drill-down options for a selected path.
///
/// A missing profile degrades to [`BusinessProfile::default`]. A supplied
/// context selects its catalog directly and skips the industry lookup.
pub fn generate_execution_options(
    profile: Option<&BusinessProfile>,
    parent_path_id: &str,
    ctx: Option<QueryContext>,
) -> Vec<ExecutionOption> {
    let fallback;
    let profile = match profile {
        Some(p) => p,
        None => {
            fallback = BusinessProfile::default();
            &fallback
        }
    };
    let catalog = match ctx {
        Some(ctx) => Catalog::Context(ctx),
        None => lookup_catalog(&profile.industry),
    };
    catalog.generate(profile, parent_path_id)
}

/// Drill-down options for a path chosen from an `intent` query.
///
/// An explicit context wins; otherwise the intent's own catalog is used, and
/// intents without one fall back to the industry lookup.
pub fn generate_drill_options(
    profile: Option<&BusinessProfile>,
    parent_path_id: &str,
    explicit: Option<QueryContext>,
    intent: Intent,
) -> Vec<ExecutionOption> {
    let ctx = explicit.or_else(|| QueryContext::from_intent(intent));
    debug!(%intent, context = ?ctx, "drill-down context");
    generate_execution_options(profile, parent_path_id, ctx)
}

/// Like [`generate_execution_options`] but with a raw context string.
///
/// Unrecognized contexts are ignored and the industry lookup is used.
pub fn generate_execution_options_for(
    profile: Option<&BusinessProfile>,
    parent_path_id: &str,
    raw_context: Option<&str>,
) -> Vec<ExecutionOption> {
    let ctx = raw_context.and_then(|raw| {
        let parsed = QueryContext::parse(raw);
        if parsed.is_none() {
            warn!(context = raw, "unknown query context ignored");
        }
        parsed
    });
    generate_execution_options(profile, parent_path_id, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bi_core::{validate_option, OptionCategory};
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use std::collections::BTreeSet;

    fn profile(industry: &str) -> BusinessProfile {
        BusinessProfile {
            industry: industry.to_string(),
            ..BusinessProfile::default()
        }
    }

    fn all_catalogs() -> Vec<Catalog> {
        let mut out: Vec<Catalog> = IndustryKey::ALL.into_iter().map(Catalog::Industry).collect();
        for ctx in [
            QueryContext::Legal,
            QueryContext::Funding,
            QueryContext::Hiring,
            QueryContext::Growth,
            QueryContext::Operations,
            QueryContext::Pivot,
            QueryContext::MarketEntry,
        ] {
            out.push(Catalog::Context(ctx));
        }
        out.push(Catalog::Generic);
        out
    }

    #[test]
    fn missing_profile_uses_default() {
        let opts = generate_execution_options(None, "root", None);
        assert!(!opts.is_empty());
        // Default industry is unmatched, so the generic menu applies.
        assert_eq!(opts.len(), 20);
        assert_eq!(opts[0].id, "root-digital-presence");
        assert_eq!(opts[0].projected_revenue, Decimal::new(600_000, 0));
    }

    #[test]
    fn unknown_industry_falls_back_to_twenty() {
        let p = profile("unknown-industry-xyz");
        let opts = generate_execution_options(Some(&p), "root", None);
        assert_eq!(opts.len(), 20);
        assert_eq!(lookup_catalog("unknown-industry-xyz"), Catalog::Generic);
        assert_eq!(lookup_catalog("   "), Catalog::Generic);
    }

    #[test]
    fn industry_menus_have_five() {
        for key in IndustryKey::ALL {
            let opts = Catalog::Industry(key).generate(&BusinessProfile::default(), "p");
            assert_eq!(opts.len(), 5, "{key}");
        }
    }

    #[test]
    fn context_catalogs_have_ten_and_bypass_industry() {
        let p = profile("restaurant");
        for ctx in [
            QueryContext::Legal,
            QueryContext::Funding,
            QueryContext::Hiring,
            QueryContext::Growth,
            QueryContext::Operations,
            QueryContext::Pivot,
            QueryContext::MarketEntry,
        ] {
            let opts = generate_execution_options(Some(&p), "x", Some(ctx));
            assert_eq!(opts.len(), 10, "{ctx}");
        }
    }

    #[test]
    fn matches_either_direction_in_declaration_order() {
        assert_eq!(IndustryKey::resolve("Food Truck"), Some(IndustryKey::Food));
        assert_eq!(IndustryKey::resolve("  SaaS "), Some(IndustryKey::Saas));
        assert_eq!(IndustryKey::resolve("real estate brokerage"), Some(IndustryKey::RealEstate));
        assert_eq!(IndustryKey::resolve("Kirana Store"), Some(IndustryKey::Kirana));
        // Input contained in a key.
        assert_eq!(IndustryKey::resolve("fin"), Some(IndustryKey::Fintech));
        // Earlier key wins when several match.
        assert_eq!(
            IndustryKey::resolve("restaurant and cloud kitchen"),
            Some(IndustryKey::CloudKitchen)
        );
        assert_eq!(IndustryKey::resolve("fintech saas"), Some(IndustryKey::Fintech));
    }

    #[test]
    fn ids_are_prefixed_and_unique() {
        for catalog in all_catalogs() {
            let opts = catalog.generate(&BusinessProfile::default(), "market-entry-balanced");
            let ids: BTreeSet<_> = opts.iter().map(|o| o.id.clone()).collect();
            assert_eq!(ids.len(), opts.len(), "{catalog:?}");
            assert!(ids.iter().all(|id| id.starts_with("market-entry-balanced-")));
        }
    }

    #[test]
    fn every_option_is_valid() {
        for catalog in all_catalogs() {
            for o in catalog.generate(&BusinessProfile::default(), "root") {
                assert_eq!(validate_option(&o), Ok(()), "{}", o.id);
                assert!(o.timeline_days > 0);
            }
        }
    }

    #[test]
    fn generic_menu_mixes_categories() {
        let cats: BTreeSet<_> = Catalog::Generic
            .templates()
            .iter()
            .map(|t| format!("{:?}", t.category))
            .collect();
        assert!(cats.contains(&format!("{:?}", OptionCategory::Marketing)));
        assert!(cats.len() >= 4);
    }

    #[test]
    fn parses_contexts_and_aliases() {
        assert_eq!(QueryContext::parse("Compliance"), Some(QueryContext::Legal));
        assert_eq!(QueryContext::parse("market-entry"), Some(QueryContext::MarketEntry));
        assert_eq!(QueryContext::parse("expansion"), Some(QueryContext::MarketEntry));
        assert_eq!(QueryContext::parse("weather"), None);
        assert_eq!("pivot".parse::<QueryContext>(), Ok(QueryContext::Pivot));
        for ctx in [QueryContext::Legal, QueryContext::MarketEntry, QueryContext::Hiring] {
            assert_eq!(QueryContext::parse(ctx.as_str()), Some(ctx));
        }
    }

    #[test]
    fn intent_mapping() {
        assert_eq!(QueryContext::from_intent(Intent::Compliance), Some(QueryContext::Legal));
        assert_eq!(QueryContext::from_intent(Intent::Marketing), None);
        assert_eq!(QueryContext::from_intent(Intent::General), None);
    }

    #[test]
    fn drill_follows_query_intent() {
        let p = profile("saas");
        let legal = generate_drill_options(Some(&p), "compliance-tax-restructure", None, Intent::Compliance);
        assert_eq!(legal.len(), 10);
        assert_eq!(legal[0].id, "compliance-tax-restructure-legal-notice");
        let funding = generate_drill_options(Some(&p), "funding-vc-raise", None, Intent::Funding);
        assert_eq!(funding[0].id, "funding-vc-raise-angel-round");
        // No intent catalog: industry menu.
        assert_eq!(generate_drill_options(Some(&p), "general-expand", None, Intent::General).len(), 5);
        // Explicit context beats the intent.
        let hiring = generate_drill_options(Some(&p), "x", Some(QueryContext::Hiring), Intent::Funding);
        assert_eq!(hiring[0].id, "x-bulk-hiring-drive");
    }

    #[test]
    fn unknown_raw_context_uses_industry() {
        let p = profile("saas");
        let opts = generate_execution_options_for(Some(&p), "root", Some("astrology"));
        assert_eq!(opts.len(), 5);
        let legal = generate_execution_options_for(Some(&p), "root", Some("legal"));
        assert_eq!(legal.len(), 10);
    }

    proptest! {
        #[test]
        fn financials_scale_linearly(mrr in 1u64..50_000_000) {
            let p = BusinessProfile { mrr, ..profile("saas") };
            let double = BusinessProfile { mrr: mrr * 2, ..profile("saas") };
            let a = generate_execution_options(Some(&p), "root", None);
            let b = generate_execution_options(Some(&double), "root", None);
            prop_assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(&b) {
                prop_assert_eq!(x.projected_revenue * Decimal::TWO, y.projected_revenue);
                prop_assert_eq!(x.cost * Decimal::TWO, y.cost);
            }
        }

        #[test]
        fn generation_is_deterministic(industry in "[a-z ]{0,16}") {
            let p = profile(&industry);
            prop_assert_eq!(
                generate_execution_options(Some(&p), "root", None),
                generate_execution_options(Some(&p), "root", None)
            );
        }
    }
}
