//! Integration tests for running stages individually and out of order.

use std::path::Path;

use marketscan_core::types::MarketProfile;
use marketscan_pipeline::settings::PipelineSettings;
use marketscan_pipeline::{analyze, collect, report, synthesize, validate};
use tempfile::TempDir;

use crate::common::{STAMP, TestHarness};

#[test]
fn test_stages_require_previous_artifacts() {
    let harness = TestHarness::new();

    assert!(synthesize::run(&harness.ctx).unwrap_err().is_missing_input());
    assert!(validate::run(&harness.ctx).unwrap_err().is_missing_input());
    assert!(report::run(&harness.ctx).unwrap_err().is_missing_input());
}

#[test]
fn test_analyze_without_collection_is_empty() {
    let harness = TestHarness::new();

    let combined = analyze::run(&harness.ctx).unwrap();
    assert!(combined.underserved_markets.markets.is_empty());
    assert!(combined.news_sentiment.sentiment_by_query.is_empty());
    assert!(harness.result(analyze::COMBINED_ANALYSIS_FILE).exists());
    assert!(!harness.result("economic_growth_analysis.json").exists());

    let output = synthesize::run(&harness.ctx).unwrap();
    assert!(output.ranked.is_empty());
    assert!(!harness.result(synthesize::REPORT_FILE).exists());
}

#[test]
fn test_stages_run_one_at_a_time() {
    let harness = TestHarness::new();

    let collected = collect::run(&harness.ctx).unwrap();
    assert_eq!(collected.news.len(), 18);
    assert!(
        collected
            .files
            .iter()
            .all(|f| f.starts_with(harness.store().news_dir()))
    );

    let combined = analyze::run(&harness.ctx).unwrap();
    assert_eq!(combined.run_id, harness.ctx.run_id());
    assert_eq!(combined.news_sentiment.sentiment_by_query.len(), 18);

    let synthesized = synthesize::run(&harness.ctx).unwrap();
    assert_eq!(synthesized.profiles.len(), 10);

    let validated = validate::run(&harness.ctx).unwrap();
    assert_eq!(validated.validated_count, 8);

    let reported = report::run(&harness.ctx).unwrap();
    assert_eq!(reported.copied.len(), report::KEY_FILES.len());
    assert!(reported.missing.is_empty());
    assert_eq!(reported.prompt_count, 16);
}

#[test]
fn test_rerun_single_stage() {
    let harness = TestHarness::new();
    collect::run(&harness.ctx).unwrap();
    analyze::run(&harness.ctx).unwrap();

    let first = synthesize::run(&harness.ctx).unwrap();
    let second = synthesize::run(&harness.ctx).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_settings_flow_into_stages() {
    let mut settings = PipelineSettings::default();
    settings.news.market_queries = vec!["market gap".to_string()];
    settings.news.industry_queries.clear();
    settings.news.page_size = 10;
    settings.synthesis.profile_limit = 4;
    settings.report.summary_top = 2;
    let harness = TestHarness::with_settings(settings);

    let collected = collect::run(&harness.ctx).unwrap();
    assert_eq!(collected.article_count, 10);
    assert!(
        harness
            .store()
            .news_dir()
            .join(format!("news_market_gap_{STAMP}.csv"))
            .exists()
    );

    analyze::run(&harness.ctx).unwrap();
    let synthesized = synthesize::run(&harness.ctx).unwrap();
    assert_eq!(synthesized.profiles.len(), 4);
    assert_eq!(synthesized.ranked.len(), 13);

    validate::run(&harness.ctx).unwrap();
    report::run(&harness.ctx).unwrap();
    let summary = harness.read(&harness.final_report(report::SUMMARY_FILE));
    assert!(summary.contains("## Top 2 Underserved Market Opportunities"));
}

#[test]
fn test_custom_validation_dataset() {
    let data = TempDir::new().unwrap();
    let dataset = data.path().join("dataset.json");
    std::fs::write(
        &dataset,
        r#"[{
            "market": "Middle-Income Housing",
            "market_size_usd_billions": 120.0,
            "cagr_percent": 4.5,
            "validation_score": 9.9,
            "supporting_indicators": ["Household formation"],
            "validation_sources": ["Housing survey"]
        }]"#,
    )
    .unwrap();

    let mut settings = PipelineSettings::default();
    settings.validation.dataset = Some(dataset);
    let harness = TestHarness::with_settings(settings);

    collect::run(&harness.ctx).unwrap();
    analyze::run(&harness.ctx).unwrap();
    synthesize::run(&harness.ctx).unwrap();
    let output = validate::run(&harness.ctx).unwrap();

    assert_eq!(output.validated_count, 1);
    assert_eq!(output.profiles[0].profile.market_name, "Middle-Income Housing");
    assert_eq!(output.profiles[0].validation.validation_score, 9.9);
}

#[test]
fn test_report_tolerates_missing_charts() {
    let harness = TestHarness::new();
    collect::run(&harness.ctx).unwrap();
    analyze::run(&harness.ctx).unwrap();
    synthesize::run(&harness.ctx).unwrap();
    validate::run(&harness.ctx).unwrap();

    remove(&harness.result(synthesize::BARRIERS_CHART));
    remove(&harness.result(validate::REPORT_FILE));

    let output = report::run(&harness.ctx).unwrap();
    assert_eq!(
        output.missing,
        [validate::REPORT_FILE, synthesize::BARRIERS_CHART]
    );
    assert!(output.final_report.is_none());
    assert!(output.summary.exists());
}

#[test]
fn test_profiles_artifact_feeds_validation() {
    let harness = TestHarness::new();
    let profiles: Vec<MarketProfile> = Vec::new();
    harness
        .store()
        .write_json(&harness.result(synthesize::PROFILES_FILE), &profiles)
        .unwrap();

    let output = validate::run(&harness.ctx).unwrap();
    assert!(output.profiles.is_empty());
    assert!(!harness.result(validate::REPORT_FILE).exists());
}

fn remove(path: &Path) {
    std::fs::remove_file(path).expect("Failed to remove artifact");
}
