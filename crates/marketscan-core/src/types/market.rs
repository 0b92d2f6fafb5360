//! Scored markets, opportunity profiles and their validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::GrowthPotential;

/// Where a market's score contributions came from.
pub mod source {
    /// Gap score from the economic indicator snapshot
    pub const ECONOMIC_INDICATORS: &str = "economic_indicators";
    /// Mention counts from publication trends
    pub const WEB_SCRAPING: &str = "web_scraping";
}

/// A market and the components of its opportunity score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketScore {
    /// Market name
    pub name: String,
    /// Sum of every contribution below plus growth and investment bonuses
    pub total_score: f64,
    /// How underserved the market is, 0–10
    pub gap_score: f64,
    /// Mention frequency, 0–10
    pub mention_score: f64,
    /// Mention sentiment, up to 5
    pub sentiment_score: f64,
    /// Overlap with growth sectors, 0–3
    pub growth_alignment: f64,
    /// Overlap with emerging technologies, 0–3
    pub tech_alignment: f64,
    /// Overlap with trending sectors, 0–3
    pub sector_alignment: f64,
    /// Barriers to entry
    pub barriers: Vec<String>,
    /// Qualitative growth outlook
    pub growth_potential: GrowthPotential,
    /// Datasets that contributed to the score
    pub sources: Vec<String>,
}

impl MarketScore {
    /// Creates an unscored market.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0.0,
            gap_score: 0.0,
            mention_score: 0.0,
            sentiment_score: 0.0,
            growth_alignment: 0.0,
            tech_alignment: 0.0,
            sector_alignment: 0.0,
            barriers: Vec::new(),
            growth_potential: GrowthPotential::Unknown,
            sources: Vec::new(),
        }
    }

    /// Records a contributing dataset once.
    pub fn add_source(&mut self, source: &str) {
        if !self.sources.iter().any(|s| s == source) {
            self.sources.push(source.to_string());
        }
    }

    /// The six named score components, in report order.
    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("gap_score", self.gap_score),
            ("mention_score", self.mention_score),
            ("sentiment_score", self.sentiment_score),
            ("growth_alignment", self.growth_alignment),
            ("tech_alignment", self.tech_alignment),
            ("sector_alignment", self.sector_alignment),
        ]
    }
}

/// An emerging technology related to a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTechnology {
    /// Technology name
    pub name: String,
    /// Commercial readiness, 0–10
    pub market_readiness: f64,
    /// Direction of investment
    pub investment_trend: String,
    /// Obstacles to adoption
    pub adoption_barriers: Vec<String>,
}

/// A publication trend related to a market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTrend {
    /// Headline
    pub title: String,
    /// Summary
    pub description: String,
    /// Publication
    pub source: String,
    /// Sectors the trend touches
    pub sectors: Vec<String>,
    /// Qualitative tone
    pub sentiment: String,
}

/// Detailed description of one top-ranked market opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketProfile {
    /// Market name
    pub market_name: String,
    /// Total opportunity score
    pub opportunity_score: f64,
    /// Gap score component
    pub gap_score: f64,
    /// Qualitative growth outlook
    pub growth_potential: GrowthPotential,
    /// Barriers to entry
    pub barriers_to_entry: Vec<String>,
    /// Datasets that contributed to the score
    pub data_sources: Vec<String>,
    /// Related emerging technologies
    pub related_technologies: Vec<RelatedTechnology>,
    /// Related publication trends
    pub related_trends: Vec<RelatedTrend>,
    /// Customer groups to target
    pub target_demographics: Vec<String>,
    /// Suggested ways to monetize
    pub business_model_suggestions: Vec<String>,
}

/// External cross-check of a market profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    /// Whether external data was found for the market
    pub is_validated: bool,
    /// Strength of the external evidence, 0–10
    pub validation_score: f64,
    /// Estimated market size in billions of US dollars
    pub market_size_usd_billions: f64,
    /// Projected compound annual growth rate, percent
    pub cagr_percent: f64,
    /// Indicators backing the estimate
    pub supporting_indicators: Vec<String>,
    /// Where the estimate came from
    pub validation_sources: Vec<String>,
}

/// A market profile together with its validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedProfile {
    /// The profile being validated
    #[serde(flatten)]
    pub profile: MarketProfile,
    /// Validation outcome
    pub validation: Validation,
}

impl ValidatedProfile {
    /// Returns `true` if external data backs this profile.
    pub fn is_validated(&self) -> bool {
        self.validation.is_validated
    }
}

/// Kind of follow-up prompt generated for a validated market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptType {
    /// Startup business plan
    BusinessPlan,
    /// Product concept
    ProductConcept,
}

impl fmt::Display for PromptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptType::BusinessPlan => write!(f, "business_plan"),
            PromptType::ProductConcept => write!(f, "product_concept"),
        }
    }
}

/// A structured prompt for downstream planning of a validated market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredPrompt {
    /// Market the prompt is about
    pub market: String,
    /// What the prompt asks for
    pub prompt_type: PromptType,
    /// Prompt text
    pub prompt: String,
}
