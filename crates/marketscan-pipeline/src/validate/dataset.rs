//! External market data used to cross-check opportunity profiles.

use std::path::Path;

use marketscan_core::types::Validation;
use marketscan_core::{ArtifactStore, Error, Result};
use serde::{Deserialize, Serialize};

const BUILTIN: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/validation_dataset.json"
));

/// Upper bound of a validation score.
pub const MAX_VALIDATION_SCORE: f64 = 10.0;

/// External figures for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationEntry {
    /// Market name, matched against profile names
    pub market: String,
    /// Estimated market size in billions of US dollars
    pub market_size_usd_billions: f64,
    /// Projected compound annual growth rate, percent
    pub cagr_percent: f64,
    /// Strength of the evidence, 0–10
    pub validation_score: f64,
    /// Indicators backing the estimate
    #[serde(default)]
    pub supporting_indicators: Vec<String>,
    /// Where the estimate came from
    #[serde(default)]
    pub validation_sources: Vec<String>,
}

impl ValidationEntry {
    /// Returns `true` if this entry validates the named market: the names
    /// are equal or the entry's name occurs inside the market's.
    pub fn matches(&self, market: &str) -> bool {
        market == self.market || market.contains(self.market.as_str())
    }

    /// The validation this entry grants.
    pub fn to_validation(&self) -> Validation {
        Validation {
            is_validated: true,
            validation_score: self.validation_score,
            market_size_usd_billions: self.market_size_usd_billions,
            cagr_percent: self.cagr_percent,
            supporting_indicators: self.supporting_indicators.clone(),
            validation_sources: self.validation_sources.clone(),
        }
    }
}

/// Ordered validation entries; the first match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationDataset {
    entries: Vec<ValidationEntry>,
}

impl ValidationDataset {
    /// Creates a dataset from entries, checking each one.
    pub fn new(entries: Vec<ValidationEntry>) -> Result<Self> {
        let dataset = Self { entries };
        dataset.check()?;
        Ok(dataset)
    }

    /// The reference dataset shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let entries: Vec<ValidationEntry> = serde_json::from_str(BUILTIN)
            .map_err(|e| Error::json(e, "data/validation_dataset.json"))?;
        Self::new(entries)
    }

    /// Reads a dataset file with the same shape as the built-in one.
    pub fn load(store: &ArtifactStore, path: &Path) -> Result<Self> {
        let entries: Vec<ValidationEntry> = store.read_json(path, "validation dataset")?;
        Self::new(entries)
    }

    /// The first entry that validates `market`.
    pub fn find(&self, market: &str) -> Option<&ValidationEntry> {
        self.entries.iter().find(|e| e.matches(market))
    }

    /// Entries in match order.
    pub fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dataset has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check(&self) -> Result<()> {
        for entry in &self.entries {
            // an empty name would occur inside every market name
            if entry.market.trim().is_empty() {
                return Err(Error::validation_field("market", "empty market name"));
            }
            if !(0.0..=MAX_VALIDATION_SCORE).contains(&entry.validation_score) {
                return Err(Error::validation_field(
                    "validation_score",
                    format!(
                        "{} has score {} outside 0-{MAX_VALIDATION_SCORE}",
                        entry.market, entry.validation_score
                    ),
                ));
            }
        }
        Ok(())
    }
}
