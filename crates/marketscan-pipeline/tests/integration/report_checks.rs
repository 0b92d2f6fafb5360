//! Integration tests for structural checks on generated reports.

use marketscan_pipeline::{report, run_all, synthesize, validate, verify_file, verify_report};

use crate::common::TestHarness;

#[test]
fn test_opportunities_report_is_well_formed() {
    let harness = TestHarness::new();
    let summary = run_all(&harness.ctx).unwrap();
    let path = summary.opportunities_report.expect("Report should be written");

    let check = verify_file(&path).expect("Report should verify");

    assert_eq!(check.title, synthesize::report::TITLE);
    assert_eq!(check.entries.len(), 10);
    assert_eq!(check.entries[0].rank, 1);
    assert_eq!(check.entries[0].name, "Rural Healthcare Technology");
    assert!((check.entries[0].score - 23.6).abs() < 1e-9);
    assert_eq!(check.entries[9].rank, 10);
    for (i, entry) in check.entries.iter().enumerate() {
        assert_eq!(entry.rank, i + 1);
    }
}

#[test]
fn test_validation_report_is_well_formed() {
    let harness = TestHarness::new();
    let summary = run_all(&harness.ctx).unwrap();

    let path = summary.validation_report.expect("Report should be written");
    let check = verify_file(&path).expect("Report should verify");

    assert_eq!(check.title, validate::report::TITLE);
    assert_eq!(check.entries.len(), 8);
    assert_eq!(check.entries[0].name, "Mental Health Technology");
    assert!((check.entries[0].score - 9.1).abs() < 1e-9);
    assert_eq!(check.entries[7].name, "Middle-Income Housing");
    assert!(
        check
            .entries
            .iter()
            .all(|e| e.name != "Mental Health Services"),
        "unvalidated markets are not listed"
    );
}

#[test]
fn test_copied_reports_match_results() {
    let harness = TestHarness::new();
    let summary = run_all(&harness.ctx).unwrap();

    let copied = harness.final_report(synthesize::REPORT_FILE);
    let original = summary.opportunities_report.unwrap();
    assert_eq!(harness.read(&copied), harness.read(&original));
    assert_eq!(
        verify_file(&copied).unwrap(),
        verify_file(&original).unwrap()
    );
}

#[test]
fn test_final_report_sections() {
    let harness = TestHarness::new();
    run_all(&harness.ctx).unwrap();

    let text = harness.read(&harness.final_report(report::FINAL_REPORT_FILE));
    let headings: Vec<&str> = text.lines().filter(|l| l.starts_with("# ")).collect();
    assert_eq!(
        headings,
        [
            "# Automated Market Research Tool: Final Report",
            "# 1. Executive Summary",
            "# 2. Underserved Market Opportunities",
            "# 3. Market Validation",
            "# 4. Methodology",
            "# 5. Recommendations",
            "# 6. Appendix: Data Sources and Chart Data",
        ]
    );
    assert!(text.contains("Generated on: 2024-05-31 08:00:00"));
}

#[test]
fn test_final_report_verifies_section_by_section() {
    let harness = TestHarness::new();
    let summary = run_all(&harness.ctx).unwrap();
    let path = summary.final_report.expect("Final report should be written");
    assert_eq!(path, harness.final_report(report::FINAL_REPORT_FILE));

    let check = verify_file(&path).expect("Final report should verify");

    assert_eq!(check.title, "Automated Market Research Tool: Final Report");
    assert_eq!(check.entries.len(), 5 + 10 + 8);
    assert_eq!(check.entries[0].name, "Mental Health Technology");
    assert_eq!(check.entries[4].name, "Elderly-focused Technology");
    assert_eq!(check.entries[5].rank, 1);
    assert_eq!(check.entries[5].name, "Rural Healthcare Technology");
    assert!((check.entries[5].score - 23.6).abs() < 1e-9);
    assert_eq!(check.entries[15].rank, 1);
    assert_eq!(check.entries[15].name, "Mental Health Technology");
    assert!((check.entries[15].score - 9.1).abs() < 1e-9);
}

#[test]
fn test_tampered_report_is_rejected() {
    let harness = TestHarness::new();
    let summary = run_all(&harness.ctx).unwrap();

    let text = harness.read(summary.opportunities_report.as_deref().unwrap());
    let check = verify_report(&text).unwrap();
    let second = &check.entries[1];

    let tampered = text.replacen(
        &format!("**Opportunity Score:** {:.2}", second.score),
        "**Opportunity Score:** 99.00",
        1,
    );
    assert_ne!(tampered, text);
    let err = verify_report(&tampered).unwrap_err();
    assert!(err.to_string().contains(&second.name));
}

#[test]
fn test_verify_missing_report() {
    let harness = TestHarness::new();
    let err = verify_file(&harness.result(synthesize::REPORT_FILE)).unwrap_err();
    assert!(err.is_missing_input());
}
