//! Keyword span computation for side-by-side document views.
//!
//! The renderer gets byte ranges instead of pre-marked text, so it can wrap
//! occurrences in whatever markup it uses. Matching is case-insensitive and
//! token-boundary aware: `java` never fires inside `javascript`, and the
//! leftmost-longest policy makes overlapping spans impossible.

use aho_corasick::{AhoCorasick, MatchKind};
use serde::{Deserialize, Serialize};

use crate::errors::AnalyzeError;

/// Whether a span covers a keyword the resume already has or one it lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Matched,
    Missing,
}

/// One keyword occurrence in the original (un-normalized) text.
/// `start`/`end` are byte offsets; `term` is the canonical keyword, which
/// may differ from the surface text in case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpan {
    pub start: usize,
    pub end: usize,
    pub term: String,
    pub kind: SpanKind,
}

/// Finds every keyword occurrence in `text`, in ascending position order.
///
/// Hits flanked by an alphanumeric character on either side are dropped;
/// only whole tokens are reported. Spans never overlap: at any position the
/// longest keyword wins, with matched keywords taking precedence over
/// missing ones of equal length.
pub fn keyword_spans(
    text: &str,
    matched: &[String],
    missing: &[String],
) -> Result<Vec<KeywordSpan>, AnalyzeError> {
    if matched.is_empty() && missing.is_empty() {
        return Ok(Vec::new());
    }

    let patterns: Vec<&str> = matched
        .iter()
        .chain(missing.iter())
        .map(String::as_str)
        .collect();
    let automaton = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
        .map_err(|e| AnalyzeError::Matcher(e.to_string()))?;

    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    for hit in automaton.find_iter(text) {
        if !on_token_boundary(bytes, hit.start(), hit.end()) {
            continue;
        }
        let index = hit.pattern().as_usize();
        spans.push(KeywordSpan {
            start: hit.start(),
            end: hit.end(),
            term: patterns[index].to_string(),
            kind: if index < matched.len() {
                SpanKind::Matched
            } else {
                SpanKind::Missing
            },
        });
    }
    Ok(spans)
}

fn on_token_boundary(bytes: &[u8], start: usize, end: usize) -> bool {
    let clear_before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let clear_after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    clear_before && clear_after
}
