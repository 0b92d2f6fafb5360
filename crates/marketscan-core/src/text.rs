//! Word counting and keyword matching helpers.

use std::collections::HashMap;

use crate::types::{Tally, TopicCount};

/// Default number of topics kept by [`extract_topics`].
pub const DEFAULT_TOPIC_LIMIT: usize = 50;

/// Common English words excluded from topic extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were", "in", "on", "at", "to",
    "for", "with", "by", "about", "like", "through", "over", "before", "between", "after",
    "since", "without", "under", "of", "that", "this", "these", "those", "it", "i", "we", "they",
    "he", "she", "you", "me", "him", "her", "them", "my", "your", "his", "our", "their",
];

/// Count items, most frequent first; ties keep first-appearance order.
fn count_ordered<I>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        match index.get(&item) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Frequency count of the given labels.
pub fn tally<I, S>(items: I) -> Vec<Tally>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    count_ordered(items.into_iter().map(Into::into))
        .into_iter()
        .map(|(name, count)| Tally { name, count })
        .collect()
}

/// Most frequent significant words across `texts`.
///
/// Words are lower-cased whitespace tokens; stop words and words of three
/// characters or fewer are ignored.
pub fn extract_topics<I, S>(texts: I, limit: usize) -> Vec<TopicCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = texts.into_iter().flat_map(|text| {
        words(text.as_ref())
            .into_iter()
            .filter(|w| w.chars().count() > 3 && !STOP_WORDS.contains(&w.as_str()))
    });
    count_ordered(tokens)
        .into_iter()
        .take(limit)
        .map(|(word, count)| TopicCount { word, count })
        .collect()
}

/// Lower-cased whitespace tokens of `s`.
pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_lowercase).collect()
}

/// Returns `true` if any word of `text` is one of `keywords`.
pub fn any_word_shared(keywords: &[String], text: &str) -> bool {
    words(text).iter().any(|w| keywords.contains(w))
}

/// Returns `true` if any keyword occurs inside the lower-cased `haystack`.
pub fn any_keyword_in(keywords: &[String], haystack: &str) -> bool {
    let haystack = haystack.to_lowercase();
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
