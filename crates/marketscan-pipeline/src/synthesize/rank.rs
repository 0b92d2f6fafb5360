//! Opportunity scoring across every analysis.

use std::collections::HashMap;

use marketscan_core::text::{any_word_shared, tally, words};
use marketscan_core::types::{MarketScore, Tally, source};
use serde::{Deserialize, Serialize};

use crate::analyze::CombinedAnalysis;

/// Cap on each of the alignment terms.
const MAX_ALIGNMENT: usize = 3;

/// Cap on the mention frequency term.
const MAX_MENTION_SCORE: f64 = 10.0;

/// Cap on the mention sentiment term.
const MAX_SENTIMENT_SCORE: f64 = 5.0;

/// Barriers cited across ranked markets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarrierAnalysis {
    /// How often each barrier is cited
    pub barrier_counts: Vec<Tally>,
    /// Barriers per market, in rank order
    pub market_specific_barriers: Vec<MarketBarriers>,
}

/// The barriers of one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketBarriers {
    /// Market name
    pub market: String,
    /// Its barriers to entry
    pub barriers: Vec<String>,
}

fn aligned(keywords: &[String], labels: &[String]) -> usize {
    labels
        .iter()
        .filter(|label| any_word_shared(keywords, label))
        .count()
}

/// Score and rank every market named by the analyses, best first.
pub fn rank_markets(combined: &CombinedAnalysis) -> Vec<MarketScore> {
    let mut scores: Vec<MarketScore> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let mut entry = |name: &str, scores: &mut Vec<MarketScore>| -> usize {
        *index.entry(name.to_string()).or_insert_with(|| {
            scores.push(MarketScore::new(name));
            scores.len() - 1
        })
    };

    for market in &combined.underserved_markets.markets {
        if market.market.is_empty() {
            continue;
        }
        let i = entry(&market.market, &mut scores);
        let score = &mut scores[i];
        score.gap_score = market.gap_score;
        score.total_score += market.gap_score + market.growth_potential.bonus();
        score.growth_potential = market.growth_potential.clone();
        score.barriers = market.barriers.clone();
        score.add_source(source::ECONOMIC_INDICATORS);
    }

    for mention in &combined.market_mentions.market_mentions {
        if mention.market.is_empty() {
            continue;
        }
        let i = entry(&mention.market, &mut scores);
        let score = &mut scores[i];
        score.mention_score = (f64::from(mention.mention_count) / 3.0).min(MAX_MENTION_SCORE);
        score.sentiment_score = (mention.sentiment_score * 5.0).min(MAX_SENTIMENT_SCORE);
        score.total_score += score.mention_score + score.sentiment_score;
        score.add_source(source::WEB_SCRAPING);
    }

    let growth = &combined.economic_growth;
    let technologies: Vec<String> = combined
        .emerging_technologies
        .technologies
        .iter()
        .map(|t| t.technology.clone())
        .collect();
    let sectors = &combined.website_trends.top_sectors;

    for score in &mut scores {
        let keywords = words(&score.name);

        score.growth_alignment = aligned(&keywords, &growth.growth_sectors).min(MAX_ALIGNMENT) as f64;
        let investment = aligned(&keywords, &growth.hot_investment_areas) as f64;
        score.tech_alignment = aligned(&keywords, &technologies).min(MAX_ALIGNMENT) as f64;
        score.sector_alignment = aligned(&keywords, sectors).min(MAX_ALIGNMENT) as f64;

        score.total_score +=
            score.growth_alignment + investment + score.tech_alignment + score.sector_alignment;
    }

    scores.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    scores
}

/// Barrier frequencies across ranked markets.
pub fn barrier_analysis(ranked: &[MarketScore]) -> BarrierAnalysis {
    let market_specific_barriers: Vec<MarketBarriers> = ranked
        .iter()
        .filter(|m| !m.name.is_empty() && !m.barriers.is_empty())
        .map(|m| MarketBarriers {
            market: m.name.clone(),
            barriers: m.barriers.clone(),
        })
        .collect();

    BarrierAnalysis {
        barrier_counts: tally(
            market_specific_barriers
                .iter()
                .flat_map(|m| m.barriers.iter().cloned()),
        ),
        market_specific_barriers,
    }
}
