//! Sentiment scoring for headlines and short posts.
//!
//! Texts are scored with VADER (Valence Aware Dictionary and sEntiment
//! Reasoner) through the `vader_sentiment` crate: a lexicon of about 7,500
//! rated terms with rules for negation, boosters, contrastive "but",
//! capitalization and punctuation emphasis. The compound score is the
//! normalized sum of valences in `[-1, 1]`; `pos`, `neu` and `neg` are the
//! intensity-weighted shares of the text.
//!
//! # Example
//!
//! ```rust
//! use marketscan_core::sentiment::SentimentAnalyzer;
//!
//! let analyzer = SentimentAnalyzer::new();
//! assert!(analyzer.polarity_scores("A great opportunity").compound > 0.05);
//! assert!(analyzer.polarity_scores("not good at all").compound < 0.0);
//! ```

use std::fmt;

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::types::{SentimentScores, SentimentSummary};

/// Compound threshold separating neutral from positive/negative texts.
pub const NEUTRAL_BAND: f64 = 0.05;

/// Scores the valence of short English texts.
pub struct SentimentAnalyzer {
    vader: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    /// Create an analyzer backed by the VADER lexicon.
    pub fn new() -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Score a text.
    ///
    /// Empty or whitespace-only input scores zero on every axis.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        if text.trim().is_empty() {
            return SentimentScores::default();
        }
        let scores = self.vader.polarity_scores(text);
        let axis = |key: &str| scores.get(key).copied().unwrap_or_default();
        SentimentScores {
            compound: axis("compound"),
            pos: axis("pos"),
            neu: axis("neu"),
            neg: axis("neg"),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SentimentAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentAnalyzer").finish_non_exhaustive()
    }
}

/// Summarize compound scores into mean and positive/negative/neutral shares.
///
/// Returns `None` for an empty slice.
pub fn summarize(compounds: &[f64]) -> Option<SentimentSummary> {
    if compounds.is_empty() {
        return None;
    }
    let n = compounds.len() as f64;
    let share = |pred: &dyn Fn(f64) -> bool| compounds.iter().filter(|c| pred(**c)).count() as f64 / n;
    Some(SentimentSummary {
        average_compound: compounds.iter().sum::<f64>() / n,
        positive_percentage: share(&|c| c > NEUTRAL_BAND),
        negative_percentage: share(&|c| c < -NEUTRAL_BAND),
        neutral_percentage: share(&|c| (-NEUTRAL_BAND..=NEUTRAL_BAND).contains(&c)),
    })
}
