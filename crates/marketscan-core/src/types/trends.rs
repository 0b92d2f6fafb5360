//! Trend and market-mention records gathered from business publications.

use serde::{Deserialize, Serialize};

/// Trend snapshot across a set of publications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapedTrends {
    /// Publication pages the trends came from
    pub websites: Vec<String>,
    /// Snapshot date, `YYYY-MM-DD`
    pub scraped_date: String,
    /// Trends grouped by publication
    pub trends: Vec<WebsiteTrends>,
    /// Underserved markets named across the publications
    #[serde(default)]
    pub underserved_market_mentions: Vec<MarketMention>,
}

/// Trends reported by a single publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteTrends {
    /// Publication name
    pub source: String,
    /// Page the trends came from
    pub url: String,
    /// Reported trends
    pub trends: Vec<Trend>,
}

/// A business trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Headline
    pub title: String,
    /// Summary
    pub description: String,
    /// Sectors the trend touches
    #[serde(default)]
    pub sectors: Vec<String>,
    /// Qualitative tone, e.g. "Positive"
    #[serde(default)]
    pub sentiment: String,
    /// Publication, filled in when trends are flattened
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub source: String,
}

/// How often, and how favourably, a market is mentioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketMention {
    /// Market name
    pub market: String,
    /// Number of mentions
    pub mention_count: u32,
    /// Mean mention sentiment, `[-1, 1]`
    pub sentiment_score: f64,
    /// Signals of growth cited alongside the mentions
    #[serde(default)]
    pub growth_indicators: Vec<String>,
}

impl WebsiteTrends {
    /// Returns this publication's trends tagged with the publication name.
    pub fn tagged(&self) -> impl Iterator<Item = Trend> + '_ {
        self.trends.iter().map(|trend| Trend {
            source: self.source.clone(),
            ..trend.clone()
        })
    }
}
