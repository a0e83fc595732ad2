use serde::{Deserialize, Serialize};

/// Relative weights of the three components of the final score.
/// The defaults blend 60% keyword overlap with 20% each for the two fixed
/// sub-scores; the three weights sum to 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub keyword_match: f64,
    pub format: f64,
    pub content: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword_match: 0.6,
            format: 0.2,
            content: 0.2,
        }
    }
}

/// Knobs of the analysis pipeline, pinned in one place so the scoring
/// formula is reproducible and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Keywords kept per document, most frequent first.
    pub keyword_limit: usize,
    pub weights: ScoreWeights,
    /// Fixed structural sub-score. No layout analysis is performed.
    pub format_score: u32,
    /// Fixed content-quality sub-score.
    pub content_score: u32,
    /// At most this many missing keywords are named in the Keywords
    /// recommendation.
    pub missing_keyword_preview: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            keyword_limit: 50,
            weights: ScoreWeights::default(),
            format_score: 80,
            content_score: 75,
            missing_keyword_preview: 5,
        }
    }
}
