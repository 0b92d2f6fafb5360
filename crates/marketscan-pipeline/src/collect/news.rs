//! Reference news feed and per-query news analysis.
//!
//! Articles are produced from a fixed table of trends and baseline tones per
//! query, so a collection run is reproducible for a given clock.

use chrono::{Duration, NaiveDateTime};
use marketscan_core::sentiment::{self, SentimentAnalyzer};
use marketscan_core::text::{self, DEFAULT_TOPIC_LIMIT};
use marketscan_core::types::{Article, DateRange, NewsAnalysis};

/// Trends and baseline tone reported for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryProfile {
    /// Trends articles are written about, cycled in order
    pub trends: &'static [&'static str],
    /// Baseline tone in `[-1, 1]`
    pub sentiment: f64,
}

const QUERY_PROFILES: &[(&str, QueryProfile)] = &[
    (
        "underserved market",
        QueryProfile {
            trends: &[
                "rural healthcare",
                "elderly tech",
                "minority business funding",
                "sustainable fashion",
            ],
            sentiment: 0.6,
        },
    ),
    (
        "market opportunity",
        QueryProfile {
            trends: &[
                "remote healthcare",
                "plant-based foods",
                "sustainable packaging",
                "mental wellness apps",
            ],
            sentiment: 0.7,
        },
    ),
    (
        "emerging industry",
        QueryProfile {
            trends: &[
                "vertical farming",
                "space tourism",
                "psychedelic therapy",
                "carbon capture",
            ],
            sentiment: 0.5,
        },
    ),
    (
        "growing market",
        QueryProfile {
            trends: &[
                "electric vehicles",
                "telemedicine",
                "remote work tools",
                "renewable energy",
            ],
            sentiment: 0.8,
        },
    ),
    (
        "market gap",
        QueryProfile {
            trends: &[
                "middle-market housing",
                "rural internet",
                "affordable childcare",
                "senior tech",
            ],
            sentiment: 0.3,
        },
    ),
    (
        "industry disruption",
        QueryProfile {
            trends: &[
                "blockchain banking",
                "direct-to-consumer healthcare",
                "autonomous delivery",
                "AI education",
            ],
            sentiment: 0.2,
        },
    ),
    (
        "unmet needs",
        QueryProfile {
            trends: &[
                "mental health access",
                "affordable housing",
                "rural healthcare",
                "digital divide",
            ],
            sentiment: -0.2,
        },
    ),
    (
        "market trends",
        QueryProfile {
            trends: &[
                "sustainability",
                "personalization",
                "automation",
                "remote services",
            ],
            sentiment: 0.4,
        },
    ),
    (
        "business opportunity",
        QueryProfile {
            trends: &["green tech", "health tech", "fintech", "edtech"],
            sentiment: 0.6,
        },
    ),
    (
        "startup trends",
        QueryProfile {
            trends: &[
                "no-code tools",
                "remote-first",
                "sustainability focus",
                "mental health benefits",
            ],
            sentiment: 0.5,
        },
    ),
    (
        "renewable energy market",
        QueryProfile {
            trends: &[
                "solar expansion",
                "wind power growth",
                "battery storage",
                "green hydrogen",
            ],
            sentiment: 0.7,
        },
    ),
    (
        "telemedicine growth",
        QueryProfile {
            trends: &[
                "virtual primary care",
                "remote monitoring",
                "mental telehealth",
                "rural access",
            ],
            sentiment: 0.8,
        },
    ),
    (
        "remote work technology",
        QueryProfile {
            trends: &[
                "virtual collaboration",
                "home office equipment",
                "productivity monitoring",
                "hybrid solutions",
            ],
            sentiment: 0.6,
        },
    ),
    (
        "ai services market",
        QueryProfile {
            trends: &[
                "generative AI",
                "business automation",
                "predictive analytics",
                "AI ethics",
            ],
            sentiment: 0.7,
        },
    ),
    (
        "elder care innovation",
        QueryProfile {
            trends: &[
                "aging in place tech",
                "remote monitoring",
                "companion robots",
                "memory care",
            ],
            sentiment: 0.5,
        },
    ),
    (
        "mental health technology",
        QueryProfile {
            trends: &[
                "digital therapeutics",
                "teletherapy",
                "mental wellness apps",
                "workplace mental health",
            ],
            sentiment: 0.6,
        },
    ),
    (
        "food delivery market",
        QueryProfile {
            trends: &[
                "ghost kitchens",
                "subscription meals",
                "autonomous delivery",
                "sustainable packaging",
            ],
            sentiment: 0.4,
        },
    ),
    (
        "online education trends",
        QueryProfile {
            trends: &[
                "microlearning",
                "skills-based certificates",
                "VR classrooms",
                "lifelong learning",
            ],
            sentiment: 0.5,
        },
    ),
];

const DEFAULT_PROFILE: QueryProfile = QueryProfile {
    trends: &[
        "innovation",
        "digital transformation",
        "sustainability",
        "consumer behavior",
    ],
    sentiment: 0.3,
};

const POSITIVE_WORDS: [&str; 6] = [
    "growing",
    "expanding",
    "opportunity",
    "promising",
    "innovative",
    "breakthrough",
];
const NEUTRAL_WORDS: [&str; 6] = [
    "emerging",
    "developing",
    "evolving",
    "shifting",
    "changing",
    "adapting",
];
const NEGATIVE_WORDS: [&str; 6] = [
    "challenging",
    "struggling",
    "problematic",
    "difficult",
    "concerning",
    "uncertain",
];

/// Minimum number of articles produced for a non-zero page size.
const MIN_ARTICLES: usize = 20;

/// Trend profile for `query`, falling back to a generic one.
pub fn query_profile(query: &str) -> QueryProfile {
    QUERY_PROFILES
        .iter()
        .find(|(q, _)| *q == query)
        .map(|(_, profile)| *profile)
        .unwrap_or(DEFAULT_PROFILE)
}

/// Number of articles returned for a page size.
pub fn article_count(page_size: usize) -> usize {
    page_size.min(MIN_ARTICLES.max(page_size / 2))
}

/// Articles for `query`, spread evenly over the `days_back` days before `now`.
pub fn simulate_articles(
    query: &str,
    days_back: u32,
    page_size: usize,
    now: NaiveDateTime,
) -> Vec<Article> {
    let profile = query_profile(query);
    let count = article_count(page_size);

    (0..count)
        .map(|i| {
            let trend = profile.trends[i % profile.trends.len()];
            let days_ago = (days_back as usize * i / count) as i64;
            let published = now - Duration::days(days_ago);

            let variation = ((i % 5) as f64 - 2.0) / 10.0;
            let tone = (profile.sentiment + variation).clamp(-1.0, 1.0);
            let word = if tone > 0.3 {
                POSITIVE_WORDS[i % POSITIVE_WORDS.len()]
            } else if tone < -0.3 {
                NEGATIVE_WORDS[i % NEGATIVE_WORDS.len()]
            } else {
                NEUTRAL_WORDS[i % NEUTRAL_WORDS.len()]
            };
            let dashed = trend.replace(' ', "-");

            Article {
                source_id: format!("source-{}", i % 5),
                source_name: format!("Market Source {}", i % 5 + 1),
                author: format!("Analyst {}", i % 10 + 1),
                title: format!("The {word} market for {trend}: What businesses need to know"),
                description: format!(
                    "Analysis of {trend} shows {word} trends with significant implications for businesses in this space."
                ),
                url: format!("https://example.com/market-analysis/{dashed}-{i}"),
                url_to_image: format!("https://example.com/images/{dashed}-{i}.jpg"),
                published_at: published.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
                content: format!(
                    "The market for {trend} is showing {word} indicators. Industry experts suggest this represents a significant shift in consumer behavior and business opportunities. Companies that adapt to these changes may find substantial growth potential."
                ),
            }
        })
        .collect()
}

/// Summarize the articles returned for `query`.
///
/// Returns `None` when there are no articles.
pub fn analyze_news(
    articles: &[Article],
    query: &str,
    analyzer: &SentimentAnalyzer,
) -> Option<NewsAnalysis> {
    if articles.is_empty() {
        return None;
    }

    let dates = articles.iter().map(|a| a.published_at.clone());
    let date_range = DateRange {
        min: dates.clone().min(),
        max: dates.max(),
    };

    let texts = articles
        .iter()
        .flat_map(|a| [a.title.as_str(), a.description.as_str()]);
    let compounds: Vec<f64> = articles
        .iter()
        .map(|a| analyzer.polarity_scores(&a.title).compound)
        .collect();

    Some(NewsAnalysis {
        query: query.to_string(),
        article_count: articles.len(),
        date_range,
        sources: text::tally(articles.iter().map(|a| a.source_name.as_str())),
        common_topics: text::extract_topics(texts, DEFAULT_TOPIC_LIMIT),
        sentiment: sentiment::summarize(&compounds),
    })
}
