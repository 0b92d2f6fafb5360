//! Validation stage: cross-check opportunity profiles against external
//! market data.
//!
//! Reads `market_opportunity_profiles.json`; writes the dataset in use, the
//! validated profiles, chart data and the validation report.

pub mod dataset;
pub mod report;

use std::path::PathBuf;

use marketscan_core::Result;
use marketscan_core::types::{MarketProfile, ValidatedProfile};
use serde::Serialize;

use crate::context::StageContext;
use crate::synthesize::PROFILES_FILE;

pub use dataset::{ValidationDataset, ValidationEntry};

/// File name of the dataset used for validation.
pub const DATASET_FILE: &str = "market_validation_data.json";

/// File name of the validated profiles.
pub const VALIDATED_PROFILES_FILE: &str = "validated_market_profiles.json";

/// File name of the validation report.
pub const REPORT_FILE: &str = "market_validation_report.md";

/// Chart data: validated markets with their figures.
pub const VALIDATED_CHART: &str = "validated_markets.csv";

#[derive(Serialize)]
struct ValidatedRow<'a> {
    #[serde(rename = "Market")]
    market: &'a str,
    #[serde(rename = "Opportunity Score")]
    opportunity_score: f64,
    #[serde(rename = "Validation Score")]
    validation_score: f64,
    #[serde(rename = "Market Size ($ Billions)")]
    market_size: f64,
    #[serde(rename = "CAGR (%)")]
    cagr: f64,
}

/// What a validation run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateOutput {
    /// Every profile with its validation, best first
    pub profiles: Vec<ValidatedProfile>,
    /// How many profiles external data backs
    pub validated_count: usize,
    /// The validation report, when one was written
    pub report: Option<PathBuf>,
}

/// Attach validation data to each profile and order them by validation
/// score, then opportunity score, highest first.
///
/// Profiles without a matching entry keep an unvalidated, zero-scored
/// validation.
pub fn validate_profiles(
    profiles: &[MarketProfile],
    dataset: &ValidationDataset,
) -> Vec<ValidatedProfile> {
    let mut validated: Vec<ValidatedProfile> = profiles
        .iter()
        .map(|profile| ValidatedProfile {
            validation: dataset
                .find(&profile.market_name)
                .map(ValidationEntry::to_validation)
                .unwrap_or_default(),
            profile: profile.clone(),
        })
        .collect();

    validated.sort_by(|a, b| {
        b.validation
            .validation_score
            .total_cmp(&a.validation.validation_score)
            .then_with(|| {
                b.profile
                    .opportunity_score
                    .total_cmp(&a.profile.opportunity_score)
            })
    });
    validated
}

fn load_dataset(ctx: &StageContext) -> Result<ValidationDataset> {
    match &ctx.settings().validation.dataset {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading validation dataset");
            ValidationDataset::load(ctx.store(), path)
        }
        None => ValidationDataset::builtin(),
    }
}

/// Run the validation stage.
pub fn run(ctx: &StageContext) -> Result<ValidateOutput> {
    let store = ctx.store();
    let profiles: Vec<MarketProfile> =
        store.read_json(&store.result(PROFILES_FILE), "market opportunity profiles")?;

    let dataset = load_dataset(ctx)?;
    tracing::info!(
        run_id = %ctx.run_id(),
        profiles = profiles.len(),
        entries = dataset.len(),
        "Starting market validation"
    );
    store.write_json(&store.result(DATASET_FILE), &dataset)?;

    let validated = validate_profiles(&profiles, &dataset);
    store.write_json(&store.result(VALIDATED_PROFILES_FILE), &validated)?;

    for unmatched in validated.iter().filter(|p| !p.is_validated()) {
        tracing::debug!(market = %unmatched.profile.market_name, "No validation data for market");
    }

    store.write_csv(
        &store.result(VALIDATED_CHART),
        validated
            .iter()
            .filter(|p| p.is_validated())
            .map(|p| ValidatedRow {
                market: &p.profile.market_name,
                opportunity_score: p.profile.opportunity_score,
                validation_score: p.validation.validation_score,
                market_size: p.validation.market_size_usd_billions,
                cagr: p.validation.cagr_percent,
            }),
    )?;

    let validated_count = validated.iter().filter(|p| p.is_validated()).count();
    let report = if validated.is_empty() {
        tracing::warn!("No market profiles; skipping validation report");
        None
    } else {
        let markdown = report::render(&validated, &ctx.generated_on());
        let path = store.result(REPORT_FILE);
        store.write_text(&path, &markdown)?;
        Some(path)
    };

    tracing::info!(
        run_id = %ctx.run_id(),
        profiles = validated.len(),
        validated = validated_count,
        "Market validation complete"
    );

    Ok(ValidateOutput {
        profiles: validated,
        validated_count,
        report,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::{context, context_with, profile};
    use crate::settings::PipelineSettings;
    use marketscan_core::types::Validation;
    use tempfile::TempDir;

    fn entry(market: &str, score: f64) -> ValidationEntry {
        ValidationEntry {
            market: market.to_string(),
            market_size_usd_billions: 12.0,
            cagr_percent: 9.5,
            validation_score: score,
            supporting_indicators: vec![],
            validation_sources: vec![],
        }
    }

    #[test]
    fn test_validate_profiles_orders_by_validation_then_opportunity() {
        let dataset = ValidationDataset::new(vec![
            entry("Housing", 7.0),
            entry("Childcare", 9.0),
            entry("Packaging", 7.0),
        ])
        .unwrap();
        let profiles = vec![
            profile("Middle-Income Housing", 17.5),
            profile("Mental Health Services", 30.0),
            profile("Sustainable Packaging", 19.0),
            profile("Affordable Childcare", 8.0),
        ];

        let validated = validate_profiles(&profiles, &dataset);
        let names: Vec<&str> = validated
            .iter()
            .map(|p| p.profile.market_name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Affordable Childcare",
                "Sustainable Packaging",
                "Middle-Income Housing",
                "Mental Health Services",
            ]
        );
        assert!(!validated[3].is_validated());
        assert_eq!(validated[3].validation, Validation::default());
    }

    #[test]
    fn test_run_requires_profiles() {
        let dir = TempDir::new().unwrap();
        assert!(run(&context(&dir)).unwrap_err().is_missing_input());
    }

    #[test]
    fn test_run_with_builtin_dataset() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let store = ctx.store();
        let profiles = vec![
            profile("Rural Healthcare Technology", 23.6),
            profile("Mental Health Services", 14.25),
            profile("Affordable Childcare Solutions", 12.9),
        ];
        store.write_json(&store.result(PROFILES_FILE), &profiles).unwrap();

        let output = run(&ctx).unwrap();
        assert_eq!(output.validated_count, 2);
        assert_eq!(output.report, Some(store.result(REPORT_FILE)));
        assert_eq!(output.profiles[0].profile.market_name, "Rural Healthcare Technology");

        for name in [DATASET_FILE, VALIDATED_PROFILES_FILE, REPORT_FILE, VALIDATED_CHART] {
            assert!(store.result(name).exists(), "{name}");
        }
        let csv = std::fs::read_to_string(store.result(VALIDATED_CHART)).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Market,Opportunity Score,Validation Score,Market Size ($ Billions),CAGR (%)"
        );
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_no_profiles_skips_report() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let store = ctx.store();
        store
            .write_json(&store.result(PROFILES_FILE), &Vec::<MarketProfile>::new())
            .unwrap();

        let output = run(&ctx).unwrap();
        assert!(output.profiles.is_empty());
        assert!(output.report.is_none());
        assert!(store.result(VALIDATED_PROFILES_FILE).exists());
        assert!(!store.result(REPORT_FILE).exists());
    }

    #[test]
    fn test_run_with_configured_dataset() {
        let dir = TempDir::new().unwrap();
        let dataset_path = dir.path().join("custom.json");
        let mut settings = PipelineSettings::default();
        settings.validation.dataset = Some(dataset_path.clone());
        let ctx = context_with(&dir, settings);
        let store = ctx.store();
        store
            .write_json(&dataset_path, &vec![entry("Services", 6.5)])
            .unwrap();
        store
            .write_json(
                &store.result(PROFILES_FILE),
                &vec![profile("Mental Health Services", 14.25)],
            )
            .unwrap();

        let output = run(&ctx).unwrap();
        assert_eq!(output.validated_count, 1);
        assert_eq!(output.profiles[0].validation.validation_score, 6.5);

        let saved: ValidationDataset = store.read_json(&store.result(DATASET_FILE), "x").unwrap();
        assert_eq!(saved.len(), 1);
    }

    #[test]
    fn test_missing_configured_dataset() {
        let dir = TempDir::new().unwrap();
        let mut settings = PipelineSettings::default();
        settings.validation.dataset = Some(dir.path().join("none.json"));
        let ctx = context_with(&dir, settings);
        let store = ctx.store();
        store
            .write_json(&store.result(PROFILES_FILE), &vec![profile("A", 1.0)])
            .unwrap();
        assert!(run(&ctx).unwrap_err().is_missing_input());
    }
}
