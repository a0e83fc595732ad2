//! Advice templates attached to every report.

use crate::analysis::report::{RecommendationSet, WELL_OPTIMIZED_THRESHOLD};

const CONTENT_ADVICE: &[&str] = &[
    "Add missing keywords naturally throughout your resume",
    "Use action verbs to describe your experiences",
    "Quantify achievements where possible",
];

const FORMAT_ADVICE: &[&str] = &[
    "Use standard section headings",
    "Avoid complex formatting and tables",
    "Use bullet points for better readability",
];

/// Builds the per-category advice bundle. The Keywords entry names at most
/// `preview_limit` missing keywords, in ranked order; full coverage gets an
/// affirmative line instead of an empty list.
pub fn build_recommendations(missing: &[String], preview_limit: usize) -> RecommendationSet {
    let keywords = if missing.is_empty() {
        vec!["Your resume already covers the keywords found in the job description".to_string()]
    } else {
        let preview: Vec<&str> = missing
            .iter()
            .take(preview_limit)
            .map(String::as_str)
            .collect();
        vec![format!(
            "Consider adding these missing keywords: {}",
            preview.join(", ")
        )]
    };

    RecommendationSet {
        content: CONTENT_ADVICE.iter().map(|s| s.to_string()).collect(),
        format: FORMAT_ADVICE.iter().map(|s| s.to_string()).collect(),
        keywords,
    }
}

/// One-line verdict for the score widget.
pub fn build_summary(score: u32) -> String {
    if score >= WELL_OPTIMIZED_THRESHOLD {
        "Great! Your resume is well-optimized for this position.".to_string()
    } else {
        format!("Your resume could use some optimization ({score}/100).")
    }
}
