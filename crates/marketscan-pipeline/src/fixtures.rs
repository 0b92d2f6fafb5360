//! Shared builders for unit tests.

#![allow(clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use marketscan_core::types::{GrowthPotential, MarketProfile};
use marketscan_core::{ArtifactStore, RunId};
use tempfile::TempDir;

use crate::analyze::{self, CombinedAnalysis};
use crate::collect;
use crate::context::StageContext;
use crate::settings::PipelineSettings;

pub(crate) fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 31)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

pub(crate) fn context(dir: &TempDir) -> StageContext {
    context_with(dir, PipelineSettings::default())
}

pub(crate) fn context_with(dir: &TempDir, settings: PipelineSettings) -> StageContext {
    StageContext::new(
        ArtifactStore::new(dir.path().join("data"), dir.path().join("results")),
        settings,
    )
    .with_now(now())
}

pub(crate) fn empty_analysis() -> CombinedAnalysis {
    CombinedAnalysis {
        timestamp: String::new(),
        run_id: RunId::new(),
        economic_growth: Default::default(),
        underserved_markets: Default::default(),
        emerging_technologies: Default::default(),
        news_sentiment: Default::default(),
        market_mentions: Default::default(),
        website_trends: Default::default(),
    }
}

/// Analysis of the built-in reference datasets.
pub(crate) fn reference_analysis() -> CombinedAnalysis {
    let today = now().date();
    let eco = collect::economic_indicators(today).unwrap();
    let trends = collect::scraped_trends(today).unwrap();
    CombinedAnalysis {
        economic_growth: analyze::growth(&eco),
        underserved_markets: analyze::underserved(&eco).unwrap(),
        emerging_technologies: analyze::technologies(&eco).unwrap(),
        market_mentions: analyze::mentions(&trends).unwrap(),
        website_trends: analyze::website_trends(&trends).unwrap(),
        ..empty_analysis()
    }
}

pub(crate) fn profile(name: &str, score: f64) -> MarketProfile {
    MarketProfile {
        market_name: name.to_string(),
        opportunity_score: score,
        gap_score: 0.0,
        growth_potential: GrowthPotential::High,
        barriers_to_entry: vec!["Regulations".to_string(), "Staffing".to_string()],
        data_sources: vec!["economic_indicators".to_string()],
        related_technologies: vec![],
        related_trends: vec![],
        target_demographics: vec!["Working parents".to_string()],
        business_model_suggestions: vec!["SaaS subscription model".to_string()],
    }
}
