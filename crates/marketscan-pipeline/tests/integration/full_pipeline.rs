//! Integration tests for a complete pipeline run.

use marketscan_core::types::{MarketScore, StructuredPrompt, ValidatedProfile};
use marketscan_pipeline::{Stage, analyze, report, run_all, synthesize, validate};

use crate::common::{STAMP, TestHarness};

#[test]
fn test_run_all_reports_counts() {
    let harness = TestHarness::new();

    let summary = run_all(&harness.ctx).expect("Pipeline should complete");

    assert_eq!(summary.run_id, harness.ctx.run_id());
    assert_eq!(summary.article_count, 18 * 50);
    assert_eq!(summary.market_count, 13);
    assert_eq!(summary.profile_count, 10);
    assert_eq!(summary.validated_count, 8);
    assert_eq!(
        summary.opportunities_report,
        Some(harness.result(synthesize::REPORT_FILE))
    );
    assert_eq!(
        summary.validation_report,
        Some(harness.result(validate::REPORT_FILE))
    );
    assert!(harness.result(synthesize::REPORT_FILE).exists());
    assert!(harness.result(validate::REPORT_FILE).exists());
    assert_eq!(
        summary.final_report,
        Some(harness.final_report(report::FINAL_REPORT_FILE))
    );
}

#[test]
fn test_run_all_writes_stage_artifacts() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let news = harness.store().news_dir();
    for name in [
        format!("all_news_analysis_{STAMP}.json"),
        format!("economic_indicators_{STAMP}.json"),
        format!("scraped_trends_{STAMP}.json"),
        format!("news_underserved_market_{STAMP}.csv"),
    ] {
        assert!(news.join(&name).exists(), "missing {name}");
    }

    for name in [
        analyze::COMBINED_ANALYSIS_FILE,
        "economic_growth_analysis.json",
        "underserved_markets_analysis.json",
        "emerging_technologies_analysis.json",
        "news_sentiment_analysis.json",
        "market_mentions_analysis.json",
        "website_trends_analysis.json",
        synthesize::RANKED_MARKETS_FILE,
        synthesize::PROFILES_FILE,
        synthesize::REPORT_FILE,
        validate::DATASET_FILE,
        validate::VALIDATED_PROFILES_FILE,
        validate::REPORT_FILE,
    ] {
        assert!(harness.result(name).exists(), "missing {name}");
    }

    for name in report::KEY_FILES
        .iter()
        .copied()
        .chain([report::SUMMARY_FILE, report::FINAL_REPORT_FILE, report::PROMPTS_FILE])
    {
        assert!(harness.final_report(name).exists(), "missing {name}");
    }
}

#[test]
fn test_ranked_markets_artifact() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let store = harness.store();
    let ranked: Vec<MarketScore> = store
        .read_json(&harness.result(synthesize::RANKED_MARKETS_FILE), "ranking")
        .unwrap();

    assert_eq!(ranked.len(), 13);
    assert_eq!(ranked[0].name, "Rural Healthcare Technology");
    assert!((ranked[0].total_score - 23.6).abs() < 1e-9);
    assert_eq!(ranked[1].name, "Middle-Income Housing");
    assert!(
        ranked
            .windows(2)
            .all(|pair| pair[0].total_score >= pair[1].total_score),
        "ranking should be sorted by total score"
    );
}

#[test]
fn test_validated_profiles_artifact() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let profiles: Vec<ValidatedProfile> = harness
        .store()
        .read_json(&harness.result(validate::VALIDATED_PROFILES_FILE), "profiles")
        .unwrap();

    assert_eq!(profiles.len(), 10);
    let names: Vec<&str> = profiles
        .iter()
        .filter(|p| p.is_validated())
        .map(|p| p.profile.market_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Mental Health Technology",
            "Affordable Childcare Solutions",
            "Rural Healthcare Technology",
            "Sustainable Packaging Solutions",
            "Elderly-focused Technology",
            "Sustainable Agriculture Technology",
            "Educational Technology for Vocational Training",
            "Middle-Income Housing",
        ]
    );

    let unvalidated: Vec<&str> = profiles
        .iter()
        .filter(|p| !p.is_validated())
        .map(|p| p.profile.market_name.as_str())
        .collect();
    assert_eq!(unvalidated.len(), 2);
    assert!(unvalidated.contains(&"Mental Health Services"));
    assert!(unvalidated.contains(&"Senior-Focused Technology"));
}

#[test]
fn test_prompts_cover_validated_markets() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let prompts: Vec<StructuredPrompt> = harness
        .store()
        .read_json(&harness.final_report(report::PROMPTS_FILE), "prompts")
        .unwrap();

    assert_eq!(prompts.len(), 16);
    assert_eq!(prompts[0].market, "Mental Health Technology");
    assert!(prompts.iter().all(|p| p.market != "Mental Health Services"));
}

#[test]
fn test_executive_summary_lists_top_validated() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let summary = harness.read(&harness.final_report(report::SUMMARY_FILE));
    assert!(summary.contains("- **8 validated underserved markets** were identified"));
    assert!(summary.contains("## Top 5 Underserved Market Opportunities"));
    assert!(summary.contains("### 1. Mental Health Technology\n- **Validation Score:** 9.1/10\n"));
    assert!(summary.contains("### 5. Elderly-focused Technology\n"));
    assert!(!summary.contains("### 6."));
}

#[test]
fn test_rerun_overwrites_artifacts() {
    let harness = TestHarness::new();
    let first = run_all(&harness.ctx).unwrap();
    let report_before = harness.read(first.opportunities_report.as_deref().unwrap());

    let second = run_all(&harness.ctx).unwrap();
    assert_eq!(first.market_count, second.market_count);
    assert_eq!(report_before, harness.read(second.opportunities_report.as_deref().unwrap()));

    let analyses = harness
        .store()
        .all(&harness.store().news_dir(), "all_news_analysis")
        .unwrap();
    assert_eq!(analyses.len(), 1, "same-day runs share one dated file");
}

#[test]
fn test_stage_display_names() {
    let names: Vec<String> = Stage::ALL.iter().map(Stage::to_string).collect();
    assert_eq!(
        names,
        ["collect", "analyze", "synthesize", "validate", "report"]
    );
}
