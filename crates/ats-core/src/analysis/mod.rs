//! The analysis pipeline: normalize, extract keywords, compare, score.

pub mod recommendations;
pub mod report;
pub mod scoring;

pub use report::{AnalysisReport, KeywordComparison, RecommendationSet, ScoreBand};

use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::errors::AnalyzeError;
use crate::extract;
use crate::text::keywords::extract_keywords;
use crate::text::normalize::normalize;

/// Stateless analysis entry point.
///
/// One instance per configuration; every call is independent and fully
/// deterministic for identical inputs. Nothing is cached or persisted
/// across calls.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Full pipeline from uploaded resume bytes. The job description
    /// arrives as plain text; obtaining it (pasted, scraped from a posting
    /// URL, whatever) is the caller's concern.
    pub fn analyze_file(
        &self,
        resume_bytes: &[u8],
        filename: &str,
        job_text: &str,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let resume_text = extract::extract_text(resume_bytes, filename)?;
        Ok(self.analyze_text(&resume_text, job_text))
    }

    /// Text-level pipeline. Infallible: an empty keyword comparison scores
    /// 0 rather than erroring.
    pub fn analyze_text(&self, resume_text: &str, job_text: &str) -> AnalysisReport {
        let resume_keywords =
            extract_keywords(&normalize(resume_text), self.config.keyword_limit);
        let job_keywords = extract_keywords(&normalize(job_text), self.config.keyword_limit);
        debug!(
            "keywords extracted: resume {}, job {}",
            resume_keywords.len(),
            job_keywords.len()
        );

        let comparison = scoring::compare_keywords(&resume_keywords, &job_keywords);
        let final_score = scoring::final_score(&comparison, &self.config);
        let recommendations = recommendations::build_recommendations(
            &comparison.missing,
            self.config.missing_keyword_preview,
        );

        info!(
            "analysis complete: score {final_score}, {} matched, {} missing",
            comparison.matched.len(),
            comparison.missing.len()
        );

        AnalysisReport {
            matched_keywords: comparison.matched,
            missing_keywords: comparison.missing,
            format_score: self.config.format_score,
            content_score: self.config.content_score,
            final_score,
            score_band: ScoreBand::for_score(final_score),
            well_optimized: final_score >= report::WELL_OPTIMIZED_THRESHOLD,
            summary: recommendations::build_summary(final_score),
            recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const JOB_TEXT: &str = "Looking for a Python developer with strong Python skills";
    const RESUME_TEXT: &str = "Experienced Python developer";

    fn analyze(resume: &str, job: &str) -> AnalysisReport {
        Analyzer::default().analyze_text(resume, job)
    }

    #[test]
    fn test_shared_vocabulary_is_matched() {
        let report = analyze(RESUME_TEXT, JOB_TEXT);
        let matched: HashSet<&str> = report.matched_keywords.iter().map(String::as_str).collect();
        assert!(matched.contains("python"), "matched: {matched:?}");
        assert!(matched.contains("developer"), "matched: {matched:?}");
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let report = analyze(RESUME_TEXT, JOB_TEXT);
        let matched: HashSet<&str> = report.matched_keywords.iter().map(String::as_str).collect();
        let missing: HashSet<&str> = report.missing_keywords.iter().map(String::as_str).collect();
        assert!(matched.is_disjoint(&missing));
    }

    #[test]
    fn test_final_score_is_bounded() {
        let report = analyze(RESUME_TEXT, JOB_TEXT);
        assert!(report.final_score <= 100);
    }

    #[test]
    fn test_empty_job_description_scores_zero() {
        let report = analyze(RESUME_TEXT, "");
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.final_score, 0);
        assert_eq!(report.score_band, ScoreBand::Low);
    }

    #[test]
    fn test_disjoint_documents_score_thirty_one() {
        let report = analyze("embedded firmware engineer", "pastry chef wanted");
        assert!(report.matched_keywords.is_empty());
        assert_eq!(report.final_score, 31);
    }

    #[test]
    fn test_covering_resume_scores_ninety_one() {
        let report = analyze(
            "Senior Rust engineer, Rust services and Kubernetes operations",
            "Rust engineer with Kubernetes",
        );
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.final_score, 91);
        assert!(report.well_optimized);
        assert_eq!(report.score_band, ScoreBand::Strong);
        assert!(report.summary.contains("well-optimized"));
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = analyze(RESUME_TEXT, JOB_TEXT);
        let second = analyze(RESUME_TEXT, JOB_TEXT);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sub_scores_are_surfaced_verbatim() {
        let report = analyze(RESUME_TEXT, JOB_TEXT);
        assert_eq!(report.format_score, 80);
        assert_eq!(report.content_score, 75);
    }

    #[test]
    fn test_missing_keywords_feed_the_recommendation() {
        let report = analyze(RESUME_TEXT, JOB_TEXT);
        assert!(!report.missing_keywords.is_empty());
        assert!(report.recommendations.keywords[0].contains(&report.missing_keywords[0]));
    }

    #[test]
    fn test_unsupported_upload_fails_before_analysis() {
        let err = Analyzer::default()
            .analyze_file(b"plain text resume", "resume.txt", JOB_TEXT)
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::UnsupportedFormat(_)));
    }
}
