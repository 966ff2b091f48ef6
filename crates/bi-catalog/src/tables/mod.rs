//! Hand-authored option tables.
//!
//! Financials are per-mille multiples of MRR so every option scales linearly
//! with the business and stays exact.

mod context;
mod generic;
mod industry;

pub(crate) use context::context_table;
pub(crate) use generic::{GENERIC, MARKET_ENTRY};
pub(crate) use industry::industry_table;

use bi_core::OptionCategory;

/// Template from which an [`bi_core::ExecutionOption`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Projected revenue as per-mille of MRR.
    pub revenue_pm: u32,
    pub risk_delta: i16,
    pub burnout_delta: i16,
    pub timeline_days: u32,
    /// Cost as per-mille of MRR.
    pub cost_pm: u32,
    pub category: OptionCategory,
}

#[allow(clippy::too_many_arguments)]
pub(crate) const fn opt(
    slug: &'static str,
    title: &'static str,
    description: &'static str,
    revenue_pm: u32,
    risk_delta: i16,
    burnout_delta: i16,
    timeline_days: u32,
    cost_pm: u32,
    category: OptionCategory,
) -> OptionTemplate {
    OptionTemplate {
        slug,
        title,
        description,
        revenue_pm,
        risk_delta,
        burnout_delta,
        timeline_days,
        cost_pm,
        category,
    }
}
