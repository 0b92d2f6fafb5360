//! Opportunity profiles for the top-ranked markets.

use marketscan_core::text::{any_keyword_in, words};
use marketscan_core::types::{MarketProfile, MarketScore, RelatedTechnology, RelatedTrend};

use crate::analyze::CombinedAnalysis;

/// A keyword rule: when the lower-cased market name contains any of the
/// triggers, the labels apply.
struct Rule {
    triggers: &'static [&'static str],
    labels: &'static [&'static str],
}

const DEMOGRAPHIC_RULES: &[Rule] = &[
    Rule {
        triggers: &["elderly", "senior", "aging"],
        labels: &["Seniors (65+)", "Adult children of seniors", "Healthcare providers"],
    },
    Rule {
        triggers: &["rural"],
        labels: &["Rural communities", "Small town residents", "Agricultural sector"],
    },
    Rule {
        triggers: &["health", "wellness", "care"],
        labels: &["Health-conscious consumers", "Healthcare providers", "Insurance companies"],
    },
    Rule {
        triggers: &["education", "learning", "training"],
        labels: &["Students", "Working professionals", "Educational institutions"],
    },
    Rule {
        triggers: &["housing", "home"],
        labels: &["First-time homebuyers", "Middle-income families", "Real estate developers"],
    },
    Rule {
        triggers: &["childcare"],
        labels: &[
            "Working parents",
            "Single-parent households",
            "Employers with parent employees",
        ],
    },
];

const BUSINESS_MODEL_RULES: &[Rule] = &[
    Rule {
        triggers: &["technology", "tech"],
        labels: &["SaaS subscription model", "Hardware + software solution", "B2B enterprise sales"],
    },
    Rule {
        triggers: &["healthcare", "health"],
        labels: &[
            "Telehealth platform",
            "Insurance partnerships",
            "Direct-to-consumer health services",
        ],
    },
    Rule {
        triggers: &["education", "learning"],
        labels: &["Freemium learning platform", "B2B institutional sales", "Certification programs"],
    },
    Rule {
        triggers: &["sustainable", "packaging"],
        labels: &["B2B supplier model", "Circular economy approach", "Subscription refill service"],
    },
    Rule {
        triggers: &["rural"],
        labels: &["Hub and spoke distribution", "Mobile service delivery", "Community partnership model"],
    },
];

fn apply(rules: &[Rule], market: &str) -> Vec<String> {
    let name = market.to_lowercase();
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        if !rule.triggers.iter().any(|t| name.contains(t)) {
            continue;
        }
        for label in rule.labels {
            if !labels.iter().any(|l| l == label) {
                labels.push((*label).to_string());
            }
        }
    }
    labels
}

/// Customer groups suggested by the market name.
pub fn target_demographics(market: &str) -> Vec<String> {
    apply(DEMOGRAPHIC_RULES, market)
}

/// Monetization models suggested by the market name.
pub fn business_models(market: &str) -> Vec<String> {
    apply(BUSINESS_MODEL_RULES, market)
}

/// Build profiles for the first `limit` ranked markets.
///
/// A technology is related when a word of the market name occurs in its
/// name; a trend when one occurs in its title or description.
pub fn build_profiles(
    ranked: &[MarketScore],
    combined: &CombinedAnalysis,
    limit: usize,
) -> Vec<MarketProfile> {
    let technologies = &combined.emerging_technologies.technologies;
    let trends = &combined.website_trends.trends;

    ranked
        .iter()
        .take(limit)
        .filter(|m| !m.name.is_empty())
        .map(|market| {
            let keywords = words(&market.name);

            let related_technologies = technologies
                .iter()
                .filter(|t| any_keyword_in(&keywords, &t.technology))
                .map(|t| RelatedTechnology {
                    name: t.technology.clone(),
                    market_readiness: t.market_readiness,
                    investment_trend: t.investment_trend.clone(),
                    adoption_barriers: t.adoption_barriers.clone(),
                })
                .collect();

            let related_trends = trends
                .iter()
                .filter(|t| {
                    any_keyword_in(&keywords, &t.title) || any_keyword_in(&keywords, &t.description)
                })
                .map(|t| RelatedTrend {
                    title: t.title.clone(),
                    description: t.description.clone(),
                    source: t.source.clone(),
                    sectors: t.sectors.clone(),
                    sentiment: t.sentiment.clone(),
                })
                .collect();

            MarketProfile {
                market_name: market.name.clone(),
                opportunity_score: market.total_score,
                gap_score: market.gap_score,
                growth_potential: market.growth_potential.clone(),
                barriers_to_entry: market.barriers.clone(),
                data_sources: market.sources.clone(),
                related_technologies,
                related_trends,
                target_demographics: target_demographics(&market.name),
                business_model_suggestions: business_models(&market.name),
            }
        })
        .collect()
}
