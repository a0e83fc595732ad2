//! Keyword set comparison and the weighted final score.

use std::collections::HashSet;

use tracing::debug;

use crate::analysis::report::KeywordComparison;
use crate::config::AnalyzerConfig;
use crate::text::keywords::Keyword;

/// Splits the job keywords into matched and missing against the resume.
///
/// The job list arrives ranked (descending frequency, first-occurrence
/// ties) and both output lists preserve that order, which fixes a
/// deterministic order for the otherwise unordered set difference. Every
/// job keyword lands in exactly one of the two lists.
pub fn compare_keywords(resume: &[Keyword], job: &[Keyword]) -> KeywordComparison {
    let resume_terms: HashSet<&str> = resume.iter().map(|k| k.term.as_str()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    for keyword in job {
        if resume_terms.contains(keyword.term.as_str()) {
            matched.push(keyword.term.clone());
        } else {
            missing.push(keyword.term.clone());
        }
    }

    let total = matched.len() + missing.len();
    let match_percentage = if total == 0 {
        // No job keywords at all: defined as zero, not an error.
        0.0
    } else {
        matched.len() as f64 * 100.0 / total as f64
    };

    KeywordComparison {
        matched,
        missing,
        match_percentage,
    }
}

/// Blends the match percentage with the two fixed sub-scores into an
/// integer score in 0 to 100. An empty comparison short-circuits to 0
/// instead of collecting the constant terms.
pub fn final_score(comparison: &KeywordComparison, config: &AnalyzerConfig) -> u32 {
    if comparison.matched.is_empty() && comparison.missing.is_empty() {
        return 0;
    }
    let weights = &config.weights;
    let blended = weights.keyword_match * comparison.match_percentage
        + weights.format * f64::from(config.format_score)
        + weights.content * f64::from(config.content_score);
    debug!(
        "score blend: {:.1}% match -> {blended:.2}",
        comparison.match_percentage
    );
    blended.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn keywords(terms: &[(&str, u32)]) -> Vec<Keyword> {
        terms
            .iter()
            .map(|(term, count)| Keyword {
                term: term.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn test_matched_and_missing_partition_the_job_set() {
        let resume = keywords(&[("python", 3), ("rust", 1)]);
        let job = keywords(&[("python", 2), ("kubernetes", 2), ("rust", 1), ("docker", 1)]);
        let comparison = compare_keywords(&resume, &job);

        let matched: HashSet<&str> = comparison.matched.iter().map(String::as_str).collect();
        let missing: HashSet<&str> = comparison.missing.iter().map(String::as_str).collect();
        let job_terms: HashSet<&str> = job.iter().map(|k| k.term.as_str()).collect();

        assert!(matched.is_disjoint(&missing));
        assert_eq!(
            matched.union(&missing).copied().collect::<HashSet<_>>(),
            job_terms
        );
    }

    #[test]
    fn test_output_order_follows_job_ranking() {
        let resume = keywords(&[("rust", 1), ("python", 1)]);
        let job = keywords(&[("python", 5), ("kubernetes", 3), ("rust", 2), ("docker", 1)]);
        let comparison = compare_keywords(&resume, &job);

        assert_eq!(comparison.matched, vec!["python", "rust"]);
        assert_eq!(comparison.missing, vec!["kubernetes", "docker"]);
    }

    #[test]
    fn test_half_overlap_is_fifty_percent() {
        let resume = keywords(&[("python", 1)]);
        let job = keywords(&[("python", 1), ("kubernetes", 1)]);
        let comparison = compare_keywords(&resume, &job);
        assert!((comparison.match_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disjoint_sets_score_thirty_one() {
        let resume = keywords(&[("rust", 1)]);
        let job = keywords(&[("cobol", 1), ("fortran", 1)]);
        let comparison = compare_keywords(&resume, &job);
        assert_eq!(comparison.match_percentage, 0.0);
        // 0.6*0 + 0.2*80 + 0.2*75 = 31
        assert_eq!(final_score(&comparison, &AnalyzerConfig::default()), 31);
    }

    #[test]
    fn test_superset_resume_scores_ninety_one() {
        let resume = keywords(&[("python", 2), ("rust", 1), ("extra", 1)]);
        let job = keywords(&[("python", 1), ("rust", 1)]);
        let comparison = compare_keywords(&resume, &job);
        assert_eq!(comparison.match_percentage, 100.0);
        // 0.6*100 + 0.2*80 + 0.2*75 = 91
        assert_eq!(final_score(&comparison, &AnalyzerConfig::default()), 91);
    }

    #[test]
    fn test_empty_job_keywords_score_zero() {
        let resume = keywords(&[("python", 1)]);
        let comparison = compare_keywords(&resume, &[]);
        assert_eq!(comparison.match_percentage, 0.0);
        assert_eq!(final_score(&comparison, &AnalyzerConfig::default()), 0);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let resume = keywords(&[("a", 1), ("b", 1)]);
        let job = keywords(&[("a", 1), ("b", 1)]);
        let score = final_score(&compare_keywords(&resume, &job), &AnalyzerConfig::default());
        assert!(score <= 100);
    }
}
