//! Tunable parameters of the pipeline stages.
//!
//! Every section deserializes with defaults, so a configuration file only
//! needs to name the values it changes.

use std::path::PathBuf;

use marketscan_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Market-level news queries.
pub const DEFAULT_MARKET_QUERIES: &[&str] = &[
    "underserved market",
    "market opportunity",
    "emerging industry",
    "growing market",
    "market gap",
    "industry disruption",
    "unmet needs",
    "market trends",
    "business opportunity",
    "startup trends",
];

/// Industry-specific news queries.
pub const DEFAULT_INDUSTRY_QUERIES: &[&str] = &[
    "renewable energy market",
    "telemedicine growth",
    "remote work technology",
    "ai services market",
    "elder care innovation",
    "mental health technology",
    "food delivery market",
    "online education trends",
];

/// News collection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSettings {
    /// How far back articles are spread, in days
    pub days_back: u32,
    /// Maximum articles per query
    pub page_size: usize,
    /// Broad market queries
    pub market_queries: Vec<String>,
    /// Industry queries
    pub industry_queries: Vec<String>,
}

impl Default for NewsSettings {
    fn default() -> Self {
        Self {
            days_back: 30,
            page_size: 100,
            market_queries: DEFAULT_MARKET_QUERIES.iter().map(|q| q.to_string()).collect(),
            industry_queries: DEFAULT_INDUSTRY_QUERIES
                .iter()
                .map(|q| q.to_string())
                .collect(),
        }
    }
}

impl NewsSettings {
    /// All queries, market queries first.
    pub fn queries(&self) -> impl Iterator<Item = &str> {
        self.market_queries
            .iter()
            .chain(self.industry_queries.iter())
            .map(String::as_str)
    }
}

/// Opportunity ranking parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    /// Number of top-ranked markets that get a profile
    pub profile_limit: usize,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self { profile_limit: 10 }
    }
}

/// Validation parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationSettings {
    /// JSON dataset replacing the built-in reference data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
}

/// Final report parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Number of markets listed in the executive summary
    pub summary_top: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self { summary_top: 5 }
    }
}

/// Parameters of every stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// News collection
    pub news: NewsSettings,
    /// Opportunity ranking
    pub synthesis: SynthesisSettings,
    /// Validation
    pub validation: ValidationSettings,
    /// Final report
    pub report: ReportSettings,
}

impl PipelineSettings {
    /// Reject values no stage can work with.
    pub fn validate(&self) -> Result<()> {
        if self.news.page_size == 0 {
            return Err(Error::config("news.page_size must be greater than 0"));
        }
        if self.news.queries().any(|q| q.trim().is_empty()) {
            return Err(Error::config("news queries must not be empty strings"));
        }
        if self.synthesis.profile_limit == 0 {
            return Err(Error::config(
                "synthesis.profile_limit must be greater than 0",
            ));
        }
        if self.report.summary_top == 0 {
            return Err(Error::config("report.summary_top must be greater than 0"));
        }
        Ok(())
    }
}
