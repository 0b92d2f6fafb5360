//! Synthesis stage: score, rank and profile market opportunities.
//!
//! Reads `combined_market_analysis.json` and writes the ranking, barrier
//! analysis, opportunity profiles, chart data and the opportunities report.

pub mod profiles;
pub mod rank;
pub mod report;

use std::path::PathBuf;

use marketscan_core::Result;
use marketscan_core::types::{MarketProfile, MarketScore};
use serde::Serialize;

use crate::analyze::{COMBINED_ANALYSIS_FILE, CombinedAnalysis};
use crate::context::StageContext;

pub use profiles::{build_profiles, business_models, target_demographics};
pub use rank::{BarrierAnalysis, MarketBarriers, barrier_analysis, rank_markets};

/// File name of the ranked markets.
pub const RANKED_MARKETS_FILE: &str = "ranked_underserved_markets.json";

/// File name of the opportunity profiles.
pub const PROFILES_FILE: &str = "market_opportunity_profiles.json";

/// File name of the opportunities report.
pub const REPORT_FILE: &str = "underserved_markets_report.md";

/// Chart data: top markets by score.
pub const TOP_MARKETS_CHART: &str = "top_underserved_markets.csv";

/// Chart data: score components of the leading markets.
pub const COMPONENTS_CHART: &str = "market_score_components.csv";

/// Chart data: barrier frequencies.
pub const BARRIERS_CHART: &str = "common_market_barriers.csv";

const TOP_MARKETS_CHARTED: usize = 10;
const COMPONENT_MARKETS_CHARTED: usize = 5;

#[derive(Serialize)]
struct TopMarketRow<'a> {
    market: &'a str,
    total_score: f64,
}

#[derive(Serialize)]
struct ComponentRow<'a> {
    market: &'a str,
    component: &'static str,
    score: f64,
}

#[derive(Serialize)]
struct BarrierRow<'a> {
    barrier: &'a str,
    count: usize,
}

/// What a synthesis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizeOutput {
    /// Every market, best first
    pub ranked: Vec<MarketScore>,
    /// Barrier frequencies
    pub barriers: BarrierAnalysis,
    /// Profiles of the top markets
    pub profiles: Vec<MarketProfile>,
    /// The opportunities report, when one was written
    pub report: Option<PathBuf>,
}

/// Run the synthesis stage.
pub fn run(ctx: &StageContext) -> Result<SynthesizeOutput> {
    let store = ctx.store();
    let combined: CombinedAnalysis =
        store.read_json(&store.result(COMBINED_ANALYSIS_FILE), "combined market analysis")?;

    tracing::info!(
        run_id = %ctx.run_id(),
        analysis_run = %combined.run_id,
        "Starting market synthesis"
    );

    let ranked = rank_markets(&combined);
    store.write_json(&store.result(RANKED_MARKETS_FILE), &ranked)?;
    write_score_charts(ctx, &ranked)?;
    if let Some(top) = ranked.first() {
        tracing::info!(market = %top.name, score = top.total_score, "Top ranked market");
    }

    let barriers = barrier_analysis(&ranked);
    store.write_json(&store.result("market_barrier_analysis.json"), &barriers)?;
    store.write_csv(
        &store.result(BARRIERS_CHART),
        barriers.barrier_counts.iter().map(|t| BarrierRow {
            barrier: &t.name,
            count: t.count,
        }),
    )?;

    let limit = ctx.settings().synthesis.profile_limit;
    let profiles = build_profiles(&ranked, &combined, limit);
    store.write_json(&store.result(PROFILES_FILE), &profiles)?;

    let report = if profiles.is_empty() {
        tracing::warn!("No market profiles; skipping opportunities report");
        None
    } else {
        let markdown = report::render(&profiles, &ctx.generated_on());
        let path = store.result(REPORT_FILE);
        store.write_text(&path, &markdown)?;
        Some(path)
    };

    tracing::info!(
        run_id = %ctx.run_id(),
        markets = ranked.len(),
        profiles = profiles.len(),
        "Market synthesis complete"
    );

    Ok(SynthesizeOutput {
        ranked,
        barriers,
        profiles,
        report,
    })
}

fn write_score_charts(ctx: &StageContext, ranked: &[MarketScore]) -> Result<()> {
    let store = ctx.store();
    store.write_csv(
        &store.result(TOP_MARKETS_CHART),
        ranked.iter().take(TOP_MARKETS_CHARTED).map(|m| TopMarketRow {
            market: &m.name,
            total_score: m.total_score,
        }),
    )?;

    let rows: Vec<ComponentRow<'_>> = ranked
        .iter()
        .take(COMPONENT_MARKETS_CHARTED)
        .flat_map(|m| {
            m.components()
                .into_iter()
                .map(move |(component, score)| ComponentRow {
                    market: &m.name,
                    component,
                    score,
                })
        })
        .collect();
    store.write_csv(&store.result(COMPONENTS_CHART), rows)
}
