//! Common test utilities and harness for pipeline integration tests.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use marketscan_core::ArtifactStore;
use marketscan_pipeline::{PipelineSettings, StageContext};
use tempfile::TempDir;

/// Test harness for integration tests.
///
/// Owns a temporary directory holding the data and results trees, and a
/// stage context whose clock is pinned so artifact names are predictable.
pub struct TestHarness {
    /// Keeps the temporary tree alive for the life of the test
    pub dir: TempDir,
    /// Context shared by every stage
    pub ctx: StageContext,
}

impl TestHarness {
    /// Creates a harness with default settings.
    pub fn new() -> Self {
        Self::with_settings(PipelineSettings::default())
    }

    /// Creates a harness with custom settings.
    pub fn with_settings(settings: PipelineSettings) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = ArtifactStore::new(dir.path().join("data"), dir.path().join("results"));
        let ctx = StageContext::new(store, settings).with_now(pinned_now());
        Self { dir, ctx }
    }

    /// Artifact store of the harness.
    pub fn store(&self) -> &ArtifactStore {
        self.ctx.store()
    }

    /// Path of a file in the results directory.
    pub fn result(&self, name: &str) -> PathBuf {
        self.store().result(name)
    }

    /// Path of a file in the final report directory.
    pub fn final_report(&self, name: &str) -> PathBuf {
        self.store().final_report_dir().join(name)
    }

    /// Reads a text artifact.
    pub fn read(&self, path: &Path) -> String {
        std::fs::read_to_string(path).expect("Failed to read artifact")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Clock time every harness runs at.
pub fn pinned_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 31)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("Invalid pinned date")
}

/// Date stamp matching [`pinned_now`].
pub const STAMP: &str = "20240531";
