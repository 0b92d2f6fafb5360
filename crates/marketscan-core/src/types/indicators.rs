//! Macroeconomic and market-level indicator datasets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// World Bank code for real GDP growth.
pub const GDP_GROWTH: &str = "NY.GDP.MKTP.KD.ZG";

/// World Bank code for gross domestic investment as a share of GDP.
pub const DOMESTIC_INVESTMENT: &str = "NE.GDI.TOTL.ZS";

/// Full indicator snapshot used by the analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicIndicators {
    /// Macroeconomic indicators keyed by World Bank code
    pub economic_indicators: BTreeMap<String, Indicator>,
    /// Market-level indicators
    pub market_indicators: MarketIndicators,
    /// Snapshot date, `YYYY-MM-DD`
    pub data_date: String,
    /// Provenance note
    #[serde(default)]
    pub note: String,
}

/// One macroeconomic indicator with per-economy values and sector annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    /// Indicator name
    pub name: String,
    /// Value per economy
    pub data: BTreeMap<String, f64>,
    /// Sectors growing with this indicator
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub growth_sectors: Vec<String>,
    /// Sectors shrinking with this indicator
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declining_sectors: Vec<String>,
    /// Areas attracting investment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hot_investment_areas: Vec<String>,
    /// Occupations in short supply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skills_gap: Vec<String>,
    /// Consumption categories on the rise
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub growing_categories: Vec<String>,
    /// Consumption categories in decline
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declining_categories: Vec<String>,
    /// Sectors attractive to foreign investors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attractive_sectors: Vec<String>,
    /// Qualitative impact statement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
}

/// Market-level indicator groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketIndicators {
    /// Markets with an identified supply gap
    pub underserved_markets: IndicatorSeries<UnderservedMarket>,
    /// Technologies approaching commercial viability
    pub emerging_technologies: IndicatorSeries<EmergingTechnology>,
}

/// A named list of indicator records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries<T> {
    /// Series name
    pub name: String,
    /// Records
    pub data: Vec<T>,
}

/// A market with an identified supply gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnderservedMarket {
    /// Market name
    pub market: String,
    /// How underserved the market is, 0–10
    pub gap_score: f64,
    /// Qualitative growth outlook
    pub growth_potential: GrowthPotential,
    /// Barriers to entry
    #[serde(default)]
    pub barriers: Vec<String>,
}

/// A technology with market potential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergingTechnology {
    /// Technology name
    pub technology: String,
    /// Commercial readiness, 0–10
    pub market_readiness: f64,
    /// Direction of investment
    pub investment_trend: String,
    /// Obstacles to adoption
    #[serde(default)]
    pub adoption_barriers: Vec<String>,
}

/// Qualitative growth outlook of a market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GrowthPotential {
    /// Strong growth expected
    High,
    /// Moderate growth expected
    Medium,
    /// Little growth expected
    Low,
    /// Outlook not stated
    #[default]
    Unknown,
    /// Any other label, kept verbatim
    Other(String),
}

impl GrowthPotential {
    /// Score bonus this outlook contributes to an opportunity score.
    pub fn bonus(&self) -> f64 {
        match self {
            GrowthPotential::High => 3.0,
            GrowthPotential::Medium => 1.5,
            _ => 0.0,
        }
    }
}

impl From<String> for GrowthPotential {
    fn from(value: String) -> Self {
        match value.as_str() {
            "High" => GrowthPotential::High,
            "Medium" => GrowthPotential::Medium,
            "Low" => GrowthPotential::Low,
            "" => GrowthPotential::Unknown,
            _ => GrowthPotential::Other(value),
        }
    }
}

impl From<&str> for GrowthPotential {
    fn from(value: &str) -> Self {
        GrowthPotential::from(value.to_string())
    }
}

impl From<GrowthPotential> for String {
    fn from(value: GrowthPotential) -> Self {
        value.to_string()
    }
}

impl fmt::Display for GrowthPotential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrowthPotential::High => write!(f, "High"),
            GrowthPotential::Medium => write!(f, "Medium"),
            GrowthPotential::Low => write!(f, "Low"),
            GrowthPotential::Unknown => Ok(()),
            GrowthPotential::Other(label) => write!(f, "{label}"),
        }
    }
}
