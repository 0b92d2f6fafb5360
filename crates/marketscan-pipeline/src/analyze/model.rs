//! Records written by the analysis stage.

use marketscan_core::RunId;
use marketscan_core::types::{
    EmergingTechnology, MarketMention, SentimentSummary, Tally, Trend, UnderservedMarket,
};
use serde::{Deserialize, Serialize};

/// An indicator value for one economy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryValue {
    /// Economy name
    pub country: String,
    /// Indicator value
    pub value: f64,
}

/// GDP growth and investment ranking with their sector annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthAnalysis {
    /// Real GDP growth, highest first
    pub gdp_growth: Vec<CountryValue>,
    /// Sectors growing with GDP
    pub growth_sectors: Vec<String>,
    /// Investment share of GDP, highest first
    pub investment_data: Vec<CountryValue>,
    /// Areas attracting investment
    pub hot_investment_areas: Vec<String>,
}

/// Underserved markets ranked by gap score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnderservedAnalysis {
    /// Markets, largest gap first
    pub markets: Vec<UnderservedMarket>,
    /// How often each barrier is cited
    pub barrier_counts: Vec<Tally>,
    /// How many markets have each growth outlook
    pub growth_potential_distribution: Vec<Tally>,
}

/// Emerging technologies ranked by readiness.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechnologyAnalysis {
    /// Technologies, most ready first
    pub technologies: Vec<EmergingTechnology>,
    /// How often each adoption barrier is cited
    pub barrier_counts: Vec<Tally>,
    /// How many technologies have each investment trend
    pub investment_trend_distribution: Vec<Tally>,
}

/// Sentiment summary of one news query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySentiment {
    /// News query
    pub query: String,
    /// Title sentiment
    #[serde(flatten)]
    pub summary: SentimentSummary,
}

/// News sentiment ranked across queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSentimentAnalysis {
    /// Per-query sentiment, most positive first
    pub sentiment_by_query: Vec<QuerySentiment>,
    /// Up to five most positive queries
    pub highest_sentiment_markets: Vec<String>,
    /// Up to five least positive queries
    pub lowest_sentiment_markets: Vec<String>,
}

/// Market mentions ranked by frequency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentionsAnalysis {
    /// Mentions, most frequent first
    pub market_mentions: Vec<MarketMention>,
    /// Up to five most mentioned markets
    pub top_mentioned_markets: Vec<String>,
    /// How often each growth indicator is cited
    pub growth_indicator_counts: Vec<Tally>,
}

/// Publication trends flattened across sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteTrendsAnalysis {
    /// Every trend, tagged with its publication
    pub trends: Vec<Trend>,
    /// How often each sector is named
    pub sector_counts: Vec<Tally>,
    /// How many trends have each tone
    pub sentiment_distribution: Vec<Tally>,
    /// Up to ten most named sectors
    pub top_sectors: Vec<String>,
}

/// Every analysis of one run, consumed by the synthesis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedAnalysis {
    /// When the analysis ran, `YYYY-MM-DD HH:MM:SS`
    pub timestamp: String,
    /// Run that produced the analysis
    pub run_id: RunId,
    /// Growth and investment
    #[serde(default)]
    pub economic_growth: GrowthAnalysis,
    /// Underserved markets
    #[serde(default)]
    pub underserved_markets: UnderservedAnalysis,
    /// Emerging technologies
    #[serde(default)]
    pub emerging_technologies: TechnologyAnalysis,
    /// News sentiment
    #[serde(default)]
    pub news_sentiment: NewsSentimentAnalysis,
    /// Market mentions
    #[serde(default)]
    pub market_mentions: MentionsAnalysis,
    /// Publication trends
    #[serde(default)]
    pub website_trends: WebsiteTrendsAnalysis,
}
