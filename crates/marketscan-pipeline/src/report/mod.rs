//! Report stage: collect the key artifacts and compile the final report.
//!
//! Everything is written under `results/final_report`.

pub mod prompts;
pub mod summary;

use std::path::PathBuf;

use marketscan_core::Result;
use marketscan_core::types::ValidatedProfile;

use crate::context::StageContext;
use crate::{synthesize, validate};

pub use prompts::structured_prompts;
pub use summary::{executive_summary, final_report, without_title};

/// File name of the executive summary.
pub const SUMMARY_FILE: &str = "executive_summary.md";

/// File name of the final report.
pub const FINAL_REPORT_FILE: &str = "final_report.md";

/// File name of the structured prompts.
pub const PROMPTS_FILE: &str = "structured_prompts.json";

/// Artifacts copied into the final report directory.
pub const KEY_FILES: &[&str] = &[
    synthesize::REPORT_FILE,
    validate::REPORT_FILE,
    synthesize::TOP_MARKETS_CHART,
    synthesize::COMPONENTS_CHART,
    synthesize::BARRIERS_CHART,
    validate::VALIDATED_CHART,
];

/// What a report run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOutput {
    /// Key artifacts copied
    pub copied: Vec<String>,
    /// Key artifacts that were not found
    pub missing: Vec<String>,
    /// Executive summary path
    pub summary: PathBuf,
    /// Final report path, absent when a source report is missing
    pub final_report: Option<PathBuf>,
    /// Number of structured prompts written
    pub prompt_count: usize,
}

/// Run the report stage.
pub fn run(ctx: &StageContext) -> Result<ReportOutput> {
    let store = ctx.store();
    let profiles: Vec<ValidatedProfile> = store.read_json(
        &store.result(validate::VALIDATED_PROFILES_FILE),
        "validated market profiles",
    )?;
    let dir = store.final_report_dir();

    tracing::info!(
        run_id = %ctx.run_id(),
        profiles = profiles.len(),
        dir = %dir.display(),
        "Starting final report"
    );

    let mut copied = Vec::new();
    let mut missing = Vec::new();
    for name in KEY_FILES {
        if store.copy_into(&store.result(name), &dir)? {
            tracing::debug!(file = %name, "Copied key file");
            copied.push((*name).to_string());
        } else {
            tracing::warn!(file = %name, "Key file not found in results directory");
            missing.push((*name).to_string());
        }
    }

    let generated_on = ctx.generated_on();
    let top = ctx.settings().report.summary_top;
    let summary_text = executive_summary(&profiles, top, &generated_on);
    let summary = dir.join(SUMMARY_FILE);
    store.write_text(&summary, &summary_text)?;

    let final_report = write_final_report(ctx, &summary_text)?;

    let prompts = structured_prompts(&profiles);
    store.write_json(&dir.join(PROMPTS_FILE), &prompts)?;

    tracing::info!(
        run_id = %ctx.run_id(),
        copied = copied.len(),
        missing = missing.len(),
        prompts = prompts.len(),
        "Final report complete"
    );

    Ok(ReportOutput {
        copied,
        missing,
        summary,
        final_report,
        prompt_count: prompts.len(),
    })
}

fn write_final_report(ctx: &StageContext, summary_text: &str) -> Result<Option<PathBuf>> {
    let store = ctx.store();
    let dir = store.final_report_dir();

    let mut reports = Vec::with_capacity(2);
    for name in [synthesize::REPORT_FILE, validate::REPORT_FILE] {
        match store.read_text(&dir.join(name), name) {
            Ok(text) => reports.push(text),
            Err(e) if e.is_missing_input() => {
                tracing::warn!(file = %name, "Report not found; skipping final report");
                return Ok(None);
            }
            Err(e) => return Err(e),
        }
    }

    let text = final_report(summary_text, &reports[0], &reports[1], &ctx.generated_on());
    let path = dir.join(FINAL_REPORT_FILE);
    store.write_text(&path, &text)?;
    Ok(Some(path))
}
