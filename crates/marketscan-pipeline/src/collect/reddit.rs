//! Offline import of forum submissions exported from Reddit.
//!
//! The export is a JSON array of submissions. Posts are grouped by subreddit
//! and, when present, by the keyword they were searched with.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use marketscan_core::sentiment::{self, SentimentAnalyzer};
use marketscan_core::store::slug;
use marketscan_core::text::{self, DEFAULT_TOPIC_LIMIT};
use marketscan_core::types::{
    DateRange, KeywordAnalysis, RedditSubmission, SubredditAnalysis, TopicCount,
};
use marketscan_core::{Error, Result};

use crate::context::StageContext;

/// Group name for submissions without a subreddit.
const UNKNOWN_SUBREDDIT: &str = "unknown";

/// Files written by an import.
#[derive(Debug, Clone, PartialEq)]
pub struct RedditImportOutput {
    /// Number of submissions read
    pub submission_count: usize,
    /// Per-subreddit analyses
    pub subreddits: BTreeMap<String, SubredditAnalysis>,
    /// Per-keyword analyses
    pub keywords: BTreeMap<String, KeywordAnalysis>,
    /// Every file written
    pub files: Vec<PathBuf>,
}

/// Analyze the posts of one subreddit. `None` when there are none.
pub fn analyze_subreddit(
    posts: &[&RedditSubmission],
    subreddit: &str,
    analyzer: &SentimentAnalyzer,
) -> Option<SubredditAnalysis> {
    if posts.is_empty() {
        return None;
    }
    let created = posts.iter().map(|p| p.created_utc);
    let earliest = created.clone().reduce(f64::min);
    let latest = created.reduce(f64::max);
    let compounds: Vec<f64> = posts
        .iter()
        .map(|p| analyzer.polarity_scores(&p.title).compound)
        .collect();

    Some(SubredditAnalysis {
        subreddit: subreddit.to_string(),
        post_count: posts.len(),
        date_range: DateRange {
            min: earliest,
            max: latest,
        },
        common_topics: topics(posts),
        sentiment: sentiment::summarize(&compounds),
    })
}

/// Analyze posts grouped by search keyword; posts without one are ignored.
pub fn analyze_keywords(posts: &[RedditSubmission]) -> BTreeMap<String, KeywordAnalysis> {
    let mut groups: BTreeMap<String, Vec<&RedditSubmission>> = BTreeMap::new();
    for post in posts {
        if let Some(keyword) = &post.search_keyword {
            groups.entry(keyword.clone()).or_default().push(post);
        }
    }

    groups
        .into_iter()
        .map(|(keyword, group)| {
            let total: i64 = group.iter().map(|p| p.score).sum();
            let analysis = KeywordAnalysis {
                post_count: group.len(),
                average_score: total as f64 / group.len() as f64,
                common_topics: topics(&group),
            };
            (keyword, analysis)
        })
        .collect()
}

fn topics(posts: &[&RedditSubmission]) -> Vec<TopicCount> {
    let texts = posts
        .iter()
        .flat_map(|p| [p.title.as_str(), p.selftext.as_str()]);
    text::extract_topics(texts, DEFAULT_TOPIC_LIMIT)
}

/// Import an export file and write the forum analyses under `data/reddit`.
pub fn import_reddit(ctx: &StageContext, file: &Path) -> Result<RedditImportOutput> {
    let store = ctx.store();
    let submissions: Vec<RedditSubmission> = store.read_json(file, "Reddit export")?;
    if submissions.is_empty() {
        return Err(Error::validation_field(
            "submissions",
            format!("{} contains no submissions", file.display()),
        ));
    }

    tracing::info!(
        run_id = %ctx.run_id(),
        file = %file.display(),
        submissions = submissions.len(),
        "Importing Reddit export"
    );

    let mut by_subreddit: BTreeMap<String, Vec<&RedditSubmission>> = BTreeMap::new();
    for post in &submissions {
        let name = if post.subreddit.trim().is_empty() {
            UNKNOWN_SUBREDDIT.to_string()
        } else {
            post.subreddit.clone()
        };
        by_subreddit.entry(name).or_default().push(post);
    }

    let analyzer = SentimentAnalyzer::new();
    let dir = store.reddit_dir();
    let stamp = ctx.stamp();
    let mut files = Vec::new();
    let mut subreddits = BTreeMap::new();

    for (name, posts) in &by_subreddit {
        let Some(analysis) = analyze_subreddit(posts, name, &analyzer) else {
            continue;
        };
        let path = dir.join(format!("analysis_{}_{stamp}.json", slug(name)));
        store.write_json(&path, &analysis)?;
        tracing::debug!(subreddit = %name, posts = posts.len(), "Saved subreddit analysis");
        files.push(path);
        subreddits.insert(name.clone(), analysis);
    }

    let path = dir.join(format!("all_subreddit_analysis_{stamp}.json"));
    store.write_json(&path, &subreddits)?;
    files.push(path);

    let keywords = analyze_keywords(&submissions);
    if !keywords.is_empty() {
        let path = dir.join(format!("keyword_analysis_{stamp}.json"));
        store.write_json(&path, &keywords)?;
        files.push(path);
    }

    tracing::info!(
        run_id = %ctx.run_id(),
        subreddits = subreddits.len(),
        keywords = keywords.len(),
        "Reddit import complete"
    );

    Ok(RedditImportOutput {
        submission_count: submissions.len(),
        subreddits,
        keywords,
        files,
    })
}
