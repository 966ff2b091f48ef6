#![deny(warnings)]

//! Headless CLI: classify a query, generate decision paths for a profile,
//! optionally drill into one path, and animate agent convergence.

use anyhow::{bail, Context, Result};
use bi_catalog::{generate_drill_options, QueryContext};
use bi_core::{validate_profile, BusinessProfile, DecisionPath, ExecutionOption, Intent, MarlState};
use bi_econ::to_lakhs;
use bi_runtime::{fetch_or_fallback, ContributionSampler, EngineConfig, EnhancedAction, RewardDecomposition};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_QUERY: &str = "What should I focus on next?";

#[derive(Debug, Default)]
struct Args {
    industry: Option<String>,
    mrr: Option<u64>,
    city: Option<String>,
    query: Option<String>,
    episodes: Option<u32>,
    seed: Option<u64>,
    config: Option<PathBuf>,
    drill: Option<String>,
    context: Option<QueryContext>,
    start_date: Option<NaiveDate>,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        let mut value = || it.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--industry" => args.industry = Some(value()?),
            "--mrr" => args.mrr = Some(value()?.parse().context("--mrr must be a whole number")?),
            "--city" => args.city = Some(value()?),
            "--query" => args.query = Some(value()?),
            "--episodes" => args.episodes = Some(value()?.parse().context("--episodes must be a whole number")?),
            "--seed" => args.seed = Some(value()?.parse().context("--seed must be a whole number")?),
            "--config" => args.config = Some(PathBuf::from(value()?)),
            "--drill" => args.drill = Some(value()?),
            "--context" => {
                let raw = value()?;
                match QueryContext::parse(&raw) {
                    Some(ctx) => args.context = Some(ctx),
                    None => bail!("unknown --context `{raw}`"),
                }
            }
            "--start-date" => {
                args.start_date = Some(value()?.parse().context("--start-date must be YYYY-MM-DD")?)
            }
            "--json" => args.json = true,
            other => warn!(arg = other, "ignoring unknown argument"),
        }
    }
    Ok(args)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    profile: &'a BusinessProfile,
    query: &'a str,
    intent: Intent,
    recommended: usize,
    paths: &'a [DecisionPath],
    completion_dates: Vec<Option<NaiveDate>>,
    options: &'a [ExecutionOption],
    final_state: Option<&'a MarlState>,
    reward_decomposition: &'a RewardDecomposition,
}

fn lakhs(amount: Decimal) -> String {
    format!("{}L", to_lakhs(amount).round_dp(2))
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args()?;
    let cfg = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut profile = cfg.profile_or_default();
    if let Some(industry) = &args.industry {
        profile.industry = industry.clone();
    }
    if let Some(mrr) = args.mrr {
        profile.mrr = mrr;
    }
    if let Some(city) = &args.city {
        profile.location = city.clone();
    }
    validate_profile(&profile)?;

    let query = args.query.as_deref().unwrap_or(DEFAULT_QUERY);
    let intent = bi_ai::classify_intent(query);
    let paths = bi_ai::generate_decision_paths(&profile, query);
    let recommended = bi_ai::recommended_index(profile.vibe_mode);
    info!(%intent, industry = %profile.industry, mrr = profile.mrr, "generated decision paths");

    let completion_dates: Vec<Option<NaiveDate>> = paths
        .iter()
        .map(|p| args.start_date.and_then(|d| p.completion_date(d)))
        .collect();

    let options = match &args.drill {
        Some(parent) => {
            if !paths.iter().any(|p| &p.id == parent) {
                warn!(parent = %parent, "drill target is not one of the generated paths");
            }
            generate_drill_options(Some(&profile), parent, args.context, intent)
        }
        None => Vec::new(),
    };

    let episodes = args.episodes.unwrap_or(cfg.episodes);
    let mut sampler = ContributionSampler::new(args.seed.or(cfg.seed));
    let trajectory = bi_runtime::run_episodes(episodes, &MarlState::default(), &mut sampler, &cfg.marl);

    let resp = fetch_or_fallback(None, EnhancedAction::RewardDecomposition, serde_json::json!({ "episodes": episodes }));
    let decomposition = RewardDecomposition::from_response(&resp)?;

    if args.json {
        let report = Report {
            profile: &profile,
            query,
            intent,
            recommended,
            paths: &paths,
            completion_dates,
            options: &options,
            final_state: trajectory.last(),
            reward_decomposition: &decomposition,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} | {} | MRR {} | {} | intent: {}",
        profile.name,
        profile.industry,
        lakhs(Decimal::from(profile.mrr)),
        profile.location,
        intent
    );
    for (i, (p, done)) in paths.iter().zip(&completion_dates).enumerate() {
        let marker = if i == recommended { "*" } else { " " };
        println!(
            "{marker} [{}] {} | EV {} | p={:.2} | risk {} | {} days{}",
            p.id,
            p.name,
            lakhs(p.expected_value),
            p.probability,
            p.risk_score,
            p.timeline_days,
            done.map(|d| format!(" (done by {d})")).unwrap_or_default()
        );
        if let Some((feature, value)) = p
            .shapley_shap
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1))
        {
            println!("    top driver: {feature} ({value:.0})");
        }
    }
    if !options.is_empty() {
        println!("Options for {}:", args.drill.as_deref().unwrap_or_default());
        for o in &options {
            println!(
                "  - [{}] {} | revenue {} | cost {} | risk {:+} | burnout {:+} | {} days",
                o.id,
                o.title,
                lakhs(o.projected_revenue),
                lakhs(o.cost),
                o.risk_delta,
                o.burnout_delta,
                o.timeline_days
            );
        }
    }
    match trajectory.last() {
        Some(s) => println!(
            "MARL | episodes: {} | convergence: {:.1}% | total reward: {:.1} | policy v{} | replay {}",
            s.episode, s.convergence_metric, s.total_reward, s.policy_version, s.replay_buffer_size
        ),
        None => {
            if episodes > 0 {
                bail!("no episodes were simulated");
            }
        }
    }
    println!("Reward decomposition | total: {}", decomposition.total_reward);
    Ok(())
}
