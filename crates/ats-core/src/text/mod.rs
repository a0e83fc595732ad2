//! Text preparation: normalization, lexical resources, keyword extraction.

pub mod keywords;
pub mod lemma;
pub mod normalize;
pub mod stopwords;

// Re-export the public API consumed by the analysis pipeline and callers.
pub use keywords::{extract_keywords, Keyword};
pub use lemma::lemmatize;
pub use normalize::normalize;
pub use stopwords::{is_stopword, STOP_WORDS};
