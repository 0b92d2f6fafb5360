//! Collection stage: news feed, indicator snapshot and publication trends.
//!
//! Writes everything under `data/news`:
//! - `news_{query}_{date}.csv` and `analysis_{query}_{date}.json` per query
//! - `all_news_analysis_{date}.json`
//! - `economic_indicators_{date}.json`
//! - `scraped_trends_{date}.json`

pub mod datasets;
pub mod news;
pub mod reddit;

use std::collections::BTreeMap;
use std::path::PathBuf;

use marketscan_core::store::slug;
use marketscan_core::types::NewsAnalysis;
use marketscan_core::{Result, SentimentAnalyzer};

use crate::context::StageContext;

pub use datasets::{economic_indicators, scraped_trends};
pub use news::{analyze_news, simulate_articles};
pub use reddit::{RedditImportOutput, import_reddit};

/// What a collection run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectOutput {
    /// Analyses keyed by query
    pub news: BTreeMap<String, NewsAnalysis>,
    /// Total articles collected
    pub article_count: usize,
    /// Every file written
    pub files: Vec<PathBuf>,
}

/// Run the collection stage.
pub fn run(ctx: &StageContext) -> Result<CollectOutput> {
    let store = ctx.store();
    let settings = &ctx.settings().news;
    let dir = store.news_dir();
    let stamp = ctx.stamp();
    let analyzer = SentimentAnalyzer::new();

    tracing::info!(
        run_id = %ctx.run_id(),
        queries = settings.queries().count(),
        days_back = settings.days_back,
        page_size = settings.page_size,
        "Starting data collection"
    );

    let mut files = Vec::new();
    let mut all_news = BTreeMap::new();
    let mut article_count = 0;

    for query in settings.queries() {
        let articles = simulate_articles(query, settings.days_back, settings.page_size, ctx.now());
        let name = slug(query);

        let csv_path = dir.join(format!("news_{name}_{stamp}.csv"));
        store.write_csv(&csv_path, &articles)?;
        files.push(csv_path);
        article_count += articles.len();

        let Some(analysis) = analyze_news(&articles, query, &analyzer) else {
            tracing::warn!(query = %query, "No articles returned for query");
            continue;
        };
        let path = dir.join(format!("analysis_{name}_{stamp}.json"));
        store.write_json(&path, &analysis)?;
        files.push(path);

        tracing::debug!(query = %query, articles = articles.len(), "Saved news analysis");
        all_news.insert(query.to_string(), analysis);
    }

    let path = dir.join(format!("all_news_analysis_{stamp}.json"));
    store.write_json(&path, &all_news)?;
    files.push(path);

    let indicators = economic_indicators(ctx.today())?;
    let path = dir.join(format!("economic_indicators_{stamp}.json"));
    store.write_json(&path, &indicators)?;
    files.push(path);

    let trends = scraped_trends(ctx.today())?;
    let path = dir.join(format!("scraped_trends_{stamp}.json"));
    store.write_json(&path, &trends)?;
    files.push(path);

    tracing::info!(
        run_id = %ctx.run_id(),
        queries = all_news.len(),
        articles = article_count,
        files = files.len(),
        "Data collection complete"
    );

    Ok(CollectOutput {
        news: all_news,
        article_count,
        files,
    })
}
