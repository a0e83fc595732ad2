//! Output records handed to whatever renders the analysis.
//!
//! Everything here is a plain serializable record so the rendering
//! technology (web view, terminal, anything) stays interchangeable.

use serde::{Deserialize, Serialize};

/// Scores at or above this are presented as well optimized for the position.
pub const WELL_OPTIMIZED_THRESHOLD: u32 = 90;

/// Outcome of comparing the two keyword sets. Both lists keep descending
/// job-description frequency order, ties by first occurrence in the job
/// text, so results are reproducible run to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordComparison {
    /// Job keywords the resume also contains.
    pub matched: Vec<String>,
    /// Job keywords the resume lacks.
    pub missing: Vec<String>,
    /// `100 * matched / (matched + missing)`; 0 when both lists are empty.
    pub match_percentage: f64,
}

/// Gauge band for a final score, the classic red/amber/green split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    /// 0 to 59.
    Low,
    /// 60 to 79.
    Moderate,
    /// 80 to 100.
    Strong,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            0..=59 => ScoreBand::Low,
            60..=79 => ScoreBand::Moderate,
            _ => ScoreBand::Strong,
        }
    }
}

/// Per-category improvement advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecommendationSet {
    pub content: Vec<String>,
    pub format: Vec<String>,
    pub keywords: Vec<String>,
}

/// The full analysis record for one resume / job description pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    /// Fixed structural sub-score (no layout analysis is performed).
    pub format_score: u32,
    /// Fixed content-quality sub-score.
    pub content_score: u32,
    /// Weighted blend, rounded to an integer in 0 to 100.
    pub final_score: u32,
    pub score_band: ScoreBand,
    pub well_optimized: bool,
    /// One-line verdict for the score widget.
    pub summary: String,
    pub recommendations: RecommendationSet,
}
