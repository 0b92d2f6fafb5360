//! Everything a stage needs to run: where artifacts live, how it is tuned,
//! and which run it belongs to.

use chrono::{Local, NaiveDate, NaiveDateTime};
use marketscan_core::store::date_stamp;
use marketscan_core::{ArtifactStore, RunId};

use crate::settings::PipelineSettings;

/// Shared state of one pipeline invocation.
#[derive(Debug, Clone)]
pub struct StageContext {
    store: ArtifactStore,
    settings: PipelineSettings,
    run_id: RunId,
    now: NaiveDateTime,
}

impl StageContext {
    /// Creates a context for a new run at the current local time.
    pub fn new(store: ArtifactStore, settings: PipelineSettings) -> Self {
        Self {
            store,
            settings,
            run_id: RunId::new(),
            now: Local::now().naive_local(),
        }
    }

    /// Pins the clock, for reproducible artifacts.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Uses an existing run id.
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = run_id;
        self
    }

    /// Artifact locations.
    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Stage parameters.
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Identifier of this run.
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Clock time of this run.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Calendar date of this run.
    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// `YYYYMMDD` stamp for dated artifacts.
    pub fn stamp(&self) -> String {
        date_stamp(self.today())
    }

    /// Timestamp line used in report headers.
    pub fn generated_on(&self) -> String {
        self.now.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
