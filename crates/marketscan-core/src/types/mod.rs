//! Domain records shared by every pipeline stage.

mod indicators;
mod market;
mod news;
mod trends;

pub use indicators::{
    DOMESTIC_INVESTMENT, EconomicIndicators, EmergingTechnology, GDP_GROWTH, GrowthPotential,
    Indicator, IndicatorSeries, MarketIndicators, UnderservedMarket,
};
pub use market::{
    MarketProfile, MarketScore, PromptType, RelatedTechnology, RelatedTrend, StructuredPrompt,
    ValidatedProfile, Validation, source,
};
pub use news::{
    Article, DateRange, KeywordAnalysis, NewsAnalysis, RedditSubmission, SentimentScores,
    SentimentSummary, SubredditAnalysis, Tally, TopicCount,
};
pub use trends::{MarketMention, ScrapedTrends, Trend, WebsiteTrends};
