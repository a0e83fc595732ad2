//! Keyword-based resume screening core.
//!
//! Compares an uploaded resume (PDF or DOCX) against a job description the
//! way rudimentary applicant tracking systems do: both documents are reduced
//! to their most frequent normalized keywords, the overlap ratio is blended
//! with fixed format and content sub-scores, and the result is a structured
//! report with per-category recommendations. There is no semantic matching
//! and no learned model; the whole analysis is a deterministic single pass.
//!
//! Everything is request-scoped. The only process-wide state is the
//! read-only lexical knowledge base (stop words, lemma tables), initialized
//! lazily once and never mutated.

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extract;
pub mod highlight;
pub mod text;

pub use analysis::{AnalysisReport, Analyzer, KeywordComparison, RecommendationSet, ScoreBand};
pub use config::{AnalyzerConfig, ScoreWeights};
pub use errors::AnalyzeError;
pub use extract::DocumentFormat;
pub use highlight::{keyword_spans, KeywordSpan, SpanKind};
pub use text::{extract_keywords, normalize, Keyword};
