//! News and forum records and their per-query analyses.

use serde::{Deserialize, Serialize};

/// A single news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Machine id of the publishing source
    pub source_id: String,
    /// Display name of the publishing source
    pub source_name: String,
    /// Article author
    pub author: String,
    /// Headline
    pub title: String,
    /// Short summary
    pub description: String,
    /// Canonical link
    pub url: String,
    /// Lead image link
    pub url_to_image: String,
    /// Publication timestamp, `%Y-%m-%dT%H:%M:%SZ`
    pub published_at: String,
    /// Body text
    pub content: String,
}

/// Valence scores for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Normalized overall valence in `[-1, 1]`
    pub compound: f64,
    /// Share of positive tokens
    pub pos: f64,
    /// Share of neutral tokens
    pub neu: f64,
    /// Share of negative tokens
    pub neg: f64,
}

/// Aggregate sentiment over a set of texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Mean compound score
    pub average_compound: f64,
    /// Fraction of texts with compound above 0.05
    pub positive_percentage: f64,
    /// Fraction of texts with compound below -0.05
    pub negative_percentage: f64,
    /// Fraction of the remaining texts
    pub neutral_percentage: f64,
}

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    /// The word
    pub word: String,
    /// Number of occurrences
    pub count: usize,
}

/// A label and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// The label
    pub name: String,
    /// Number of occurrences
    pub count: usize,
}

/// Inclusive range of timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange<T> {
    /// Earliest value
    pub min: Option<T>,
    /// Latest value
    pub max: Option<T>,
}

/// Analysis of the articles returned for one news query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsAnalysis {
    /// The query that produced the articles
    pub query: String,
    /// Number of articles
    pub article_count: usize,
    /// Publication range
    pub date_range: DateRange<String>,
    /// Articles per source
    pub sources: Vec<Tally>,
    /// Most frequent meaningful words
    pub common_topics: Vec<TopicCount>,
    /// Title sentiment, absent when no titles were scored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

/// A forum submission from an offline Reddit export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedditSubmission {
    /// Post title
    #[serde(default)]
    pub title: String,
    /// Post body
    #[serde(default)]
    pub selftext: String,
    /// Subreddit the post belongs to
    #[serde(default)]
    pub subreddit: String,
    /// Creation time, unix seconds; exports carry fractional seconds
    #[serde(default)]
    pub created_utc: f64,
    /// Net votes
    #[serde(default)]
    pub score: i64,
    /// Keyword the export was searched with, if any
    #[serde(default)]
    pub search_keyword: Option<String>,
}

/// Analysis of the posts of one subreddit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubredditAnalysis {
    /// Subreddit name
    pub subreddit: String,
    /// Number of posts
    pub post_count: usize,
    /// Creation time range, unix seconds
    pub date_range: DateRange<f64>,
    /// Most frequent meaningful words
    pub common_topics: Vec<TopicCount>,
    /// Title sentiment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentSummary>,
}

/// Analysis of the posts found for one search keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    /// Number of posts
    pub post_count: usize,
    /// Mean post score
    pub average_score: f64,
    /// Most frequent meaningful words
    pub common_topics: Vec<TopicCount>,
}
