//! Frequency-ranked keyword extraction from normalized text.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::lemma::lemmatize;
use crate::text::stopwords::is_stopword;

/// A normalized term and how often its lemma occurs in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub term: String,
    pub count: u32,
}

/// Extracts the `limit` most frequent meaningful terms from `text`.
///
/// Tokens are split on whitespace; anything that is not purely ASCII
/// alphanumeric or that is a stop word is discarded, and the survivors are
/// reduced to their lemma before counting. The result is ordered by
/// descending frequency with ties broken by first occurrence in the text,
/// which makes the ranking fully deterministic.
pub fn extract_keywords(text: &str, limit: usize) -> Vec<Keyword> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for token in text.split_whitespace() {
        if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
            continue;
        }
        if is_stopword(token) {
            continue;
        }
        match counts.entry(lemmatize(token)) {
            Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
            Entry::Vacant(vacant) => {
                first_seen.push(vacant.key().clone());
                vacant.insert(1);
            }
        }
    }

    let mut keywords: Vec<Keyword> = first_seen
        .into_iter()
        .map(|term| {
            let count = counts[&term];
            Keyword { term, count }
        })
        .collect();
    // Stable sort: equal counts keep their first-occurrence order.
    keywords.sort_by(|a, b| b.count.cmp(&a.count));
    keywords.truncate(limit);

    debug!("extracted {} keywords (limit {limit})", keywords.len());
    keywords
}
