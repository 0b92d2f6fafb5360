#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Marketscan Pipeline
//!
//! The five stages that turn market signals into ranked reports:
//!
//! ```text
//! collect ──▶ analyze ──▶ synthesize ──▶ validate ──▶ report
//! ```
//!
//! Each stage reads the previous stage's artifacts through the
//! [`ArtifactStore`](marketscan_core::ArtifactStore) and writes its own, so
//! any stage can be re-run on its own. [`run_all`] runs them in order and
//! [`verify`] checks a generated report.

pub mod analyze;
pub mod collect;
pub mod context;
pub mod report;
pub mod settings;
pub mod synthesize;
pub mod validate;
pub mod verify;

#[cfg(test)]
mod fixtures;

use std::fmt;
use std::path::PathBuf;

use marketscan_core::{Result, RunId};

// Re-exports for convenience
pub use context::StageContext;
pub use settings::PipelineSettings;
pub use verify::{ReportCheck, ReportEntry, verify_file, verify_report};

/// A pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Gather news, indicators and publication trends
    Collect,
    /// Aggregate collected data
    Analyze,
    /// Score, rank and profile markets
    Synthesize,
    /// Cross-check profiles against external data
    Validate,
    /// Compile the final report
    Report,
}

impl Stage {
    /// Every stage in execution order.
    pub const ALL: [Stage; 5] = [
        Stage::Collect,
        Stage::Analyze,
        Stage::Synthesize,
        Stage::Validate,
        Stage::Report,
    ];

    /// The stage whose artifacts this one reads.
    pub fn previous(self) -> Option<Stage> {
        match self {
            Stage::Collect => None,
            Stage::Analyze => Some(Stage::Collect),
            Stage::Synthesize => Some(Stage::Analyze),
            Stage::Validate => Some(Stage::Synthesize),
            Stage::Report => Some(Stage::Validate),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Collect => "collect",
            Stage::Analyze => "analyze",
            Stage::Synthesize => "synthesize",
            Stage::Validate => "validate",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Run identifier
    pub run_id: RunId,
    /// Articles collected
    pub article_count: usize,
    /// Markets ranked
    pub market_count: usize,
    /// Markets profiled
    pub profile_count: usize,
    /// Profiles backed by external data
    pub validated_count: usize,
    /// The opportunities report, when synthesis produced profiles
    pub opportunities_report: Option<PathBuf>,
    /// The validation report, when there were profiles to validate
    pub validation_report: Option<PathBuf>,
    /// The compiled final report, when both reports were available
    pub final_report: Option<PathBuf>,
}

/// Run every stage in order.
pub fn run_all(ctx: &StageContext) -> Result<RunSummary> {
    tracing::info!(run_id = %ctx.run_id(), "Starting full pipeline run");

    let collected = collect::run(ctx)?;
    tracing::info!(stage = %Stage::Collect, "Stage complete");

    analyze::run(ctx)?;
    tracing::info!(stage = %Stage::Analyze, "Stage complete");

    let synthesized = synthesize::run(ctx)?;
    tracing::info!(stage = %Stage::Synthesize, "Stage complete");

    let validated = validate::run(ctx)?;
    tracing::info!(stage = %Stage::Validate, "Stage complete");

    let reported = report::run(ctx)?;
    tracing::info!(stage = %Stage::Report, "Stage complete");

    let summary = RunSummary {
        run_id: ctx.run_id(),
        article_count: collected.article_count,
        market_count: synthesized.ranked.len(),
        profile_count: synthesized.profiles.len(),
        validated_count: validated.validated_count,
        opportunities_report: synthesized.report,
        validation_report: validated.report,
        final_report: reported.final_report,
    };

    tracing::info!(
        run_id = %summary.run_id,
        markets = summary.market_count,
        validated = summary.validated_count,
        "Pipeline run complete"
    );
    Ok(summary)
}
