//! Analysis stage: aggregate the collected datasets into ranked summaries.
//!
//! Every sub-analysis is independent. When its input is missing it is left
//! empty and its own file is not written; `combined_market_analysis.json` is
//! always written.

pub mod model;

use marketscan_core::text::tally;
use marketscan_core::types::{
    DOMESTIC_INVESTMENT, EconomicIndicators, GDP_GROWTH, Indicator, NewsAnalysis, ScrapedTrends,
};
use marketscan_core::{ArtifactStore, Result};

use crate::context::StageContext;

pub use model::{
    CombinedAnalysis, CountryValue, GrowthAnalysis, MentionsAnalysis, NewsSentimentAnalysis,
    QuerySentiment, TechnologyAnalysis, UnderservedAnalysis, WebsiteTrendsAnalysis,
};

/// File name of the combined analysis.
pub const COMBINED_ANALYSIS_FILE: &str = "combined_market_analysis.json";

/// Number of queries/markets listed as highest, lowest or top.
const TOP_N: usize = 5;

/// Number of sectors kept as trending.
const TOP_SECTORS: usize = 10;

fn ranked_values(indicator: Option<&Indicator>) -> Vec<CountryValue> {
    let mut values: Vec<CountryValue> = indicator
        .map(|i| {
            i.data
                .iter()
                .map(|(country, value)| CountryValue {
                    country: country.clone(),
                    value: *value,
                })
                .collect()
        })
        .unwrap_or_default();
    values.sort_by(|a, b| b.value.total_cmp(&a.value));
    values
}

/// GDP growth and investment share per economy, highest first.
pub fn growth(eco: &EconomicIndicators) -> GrowthAnalysis {
    let gdp = eco.economic_indicators.get(GDP_GROWTH);
    let investment = eco.economic_indicators.get(DOMESTIC_INVESTMENT);
    GrowthAnalysis {
        gdp_growth: ranked_values(gdp),
        growth_sectors: gdp.map(|i| i.growth_sectors.clone()).unwrap_or_default(),
        investment_data: ranked_values(investment),
        hot_investment_areas: investment
            .map(|i| i.hot_investment_areas.clone())
            .unwrap_or_default(),
    }
}

/// Underserved markets by gap score, with barrier and outlook tallies.
pub fn underserved(eco: &EconomicIndicators) -> Option<UnderservedAnalysis> {
    let source = &eco.market_indicators.underserved_markets.data;
    if source.is_empty() {
        return None;
    }
    let mut markets = source.clone();
    markets.sort_by(|a, b| b.gap_score.total_cmp(&a.gap_score));

    Some(UnderservedAnalysis {
        barrier_counts: tally(source.iter().flat_map(|m| m.barriers.iter().cloned())),
        growth_potential_distribution: tally(markets.iter().map(|m| m.growth_potential.to_string())),
        markets,
    })
}

/// Emerging technologies by readiness, with barrier and trend tallies.
pub fn technologies(eco: &EconomicIndicators) -> Option<TechnologyAnalysis> {
    let source = &eco.market_indicators.emerging_technologies.data;
    if source.is_empty() {
        return None;
    }
    let mut technologies = source.clone();
    technologies.sort_by(|a, b| b.market_readiness.total_cmp(&a.market_readiness));

    Some(TechnologyAnalysis {
        barrier_counts: tally(
            source
                .iter()
                .flat_map(|t| t.adoption_barriers.iter().cloned()),
        ),
        investment_trend_distribution: tally(
            technologies.iter().map(|t| t.investment_trend.as_str()),
        ),
        technologies,
    })
}

/// News queries ranked by mean title sentiment.
///
/// Analyses without a sentiment summary are ignored; `None` when none remain.
pub fn news_sentiment(analyses: &[NewsAnalysis]) -> Option<NewsSentimentAnalysis> {
    let mut rows: Vec<QuerySentiment> = analyses
        .iter()
        .filter_map(|a| {
            a.sentiment.map(|summary| QuerySentiment {
                query: a.query.clone(),
                summary,
            })
        })
        .collect();
    if rows.is_empty() {
        return None;
    }
    rows.sort_by(|a, b| {
        b.summary
            .average_compound
            .total_cmp(&a.summary.average_compound)
    });

    let queries: Vec<String> = rows.iter().map(|r| r.query.clone()).collect();
    let lowest_start = queries.len().saturating_sub(TOP_N);
    Some(NewsSentimentAnalysis {
        highest_sentiment_markets: queries.iter().take(TOP_N).cloned().collect(),
        lowest_sentiment_markets: queries[lowest_start..].to_vec(),
        sentiment_by_query: rows,
    })
}

/// Market mentions by frequency, with a growth-indicator tally.
pub fn mentions(trends: &ScrapedTrends) -> Option<MentionsAnalysis> {
    let source = &trends.underserved_market_mentions;
    if source.is_empty() {
        return None;
    }
    let mut market_mentions = source.clone();
    market_mentions.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));

    Some(MentionsAnalysis {
        top_mentioned_markets: market_mentions
            .iter()
            .take(TOP_N)
            .map(|m| m.market.clone())
            .collect(),
        growth_indicator_counts: tally(
            source
                .iter()
                .flat_map(|m| m.growth_indicators.iter().cloned()),
        ),
        market_mentions,
    })
}

/// Publication trends flattened and tallied by sector and tone.
pub fn website_trends(trends: &ScrapedTrends) -> Option<WebsiteTrendsAnalysis> {
    if trends.trends.is_empty() {
        return None;
    }
    let flattened: Vec<_> = trends.trends.iter().flat_map(|site| site.tagged()).collect();
    let sector_counts = tally(flattened.iter().flat_map(|t| t.sectors.iter().cloned()));

    Some(WebsiteTrendsAnalysis {
        top_sectors: sector_counts
            .iter()
            .take(TOP_SECTORS)
            .map(|t| t.name.clone())
            .collect(),
        sentiment_distribution: tally(flattened.iter().map(|t| t.sentiment.as_str())),
        sector_counts,
        trends: flattened,
    })
}

fn load_latest<T: serde::de::DeserializeOwned>(
    store: &ArtifactStore,
    prefix: &str,
    what: &str,
) -> Result<Option<T>> {
    let Some(path) = store.latest(&store.news_dir(), prefix)? else {
        tracing::warn!(what, "No collected data found; skipping");
        return Ok(None);
    };
    tracing::info!(what, path = %path.display(), "Loading collected data");
    store.read_json(&path, what).map(Some)
}

fn load_news_analyses(store: &ArtifactStore) -> Result<Vec<NewsAnalysis>> {
    let paths = store.all(&store.news_dir(), "analysis")?;
    let analyses = paths
        .iter()
        .map(|path| store.read_json(path, "news analysis"))
        .collect::<Result<Vec<NewsAnalysis>>>()?;
    tracing::info!(count = analyses.len(), "Loaded news analyses");
    Ok(analyses)
}

/// Run the analysis stage.
pub fn run(ctx: &StageContext) -> Result<CombinedAnalysis> {
    let store = ctx.store();
    tracing::info!(run_id = %ctx.run_id(), "Starting market analysis");

    let eco: Option<EconomicIndicators> =
        load_latest(store, "economic_indicators", "economic indicators")?;
    let analyses = load_news_analyses(store)?;
    let trends: Option<ScrapedTrends> = load_latest(store, "scraped_trends", "scraped trends")?;

    let mut combined = CombinedAnalysis {
        timestamp: ctx.generated_on(),
        run_id: ctx.run_id(),
        economic_growth: Default::default(),
        underserved_markets: Default::default(),
        emerging_technologies: Default::default(),
        news_sentiment: Default::default(),
        market_mentions: Default::default(),
        website_trends: Default::default(),
    };

    if let Some(eco) = &eco {
        combined.economic_growth = growth(eco);
        store.write_json(
            &store.result("economic_growth_analysis.json"),
            &combined.economic_growth,
        )?;

        if let Some(analysis) = underserved(eco) {
            store.write_json(&store.result("underserved_markets_analysis.json"), &analysis)?;
            combined.underserved_markets = analysis;
        }
        if let Some(analysis) = technologies(eco) {
            store.write_json(
                &store.result("emerging_technologies_analysis.json"),
                &analysis,
            )?;
            combined.emerging_technologies = analysis;
        }
    }

    if let Some(analysis) = news_sentiment(&analyses) {
        store.write_json(&store.result("news_sentiment_analysis.json"), &analysis)?;
        combined.news_sentiment = analysis;
    }

    if let Some(trends) = &trends {
        if let Some(analysis) = mentions(trends) {
            store.write_json(&store.result("market_mentions_analysis.json"), &analysis)?;
            combined.market_mentions = analysis;
        }
        if let Some(analysis) = website_trends(trends) {
            store.write_json(&store.result("website_trends_analysis.json"), &analysis)?;
            combined.website_trends = analysis;
        }
    }

    store.write_json(&store.result(COMBINED_ANALYSIS_FILE), &combined)?;

    tracing::info!(
        run_id = %ctx.run_id(),
        markets = combined.underserved_markets.markets.len(),
        technologies = combined.emerging_technologies.technologies.len(),
        queries = combined.news_sentiment.sentiment_by_query.len(),
        mentions = combined.market_mentions.market_mentions.len(),
        trends = combined.website_trends.trends.len(),
        "Market analysis complete"
    );

    Ok(combined)
}
