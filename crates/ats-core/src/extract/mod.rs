//! Document text extraction: turns uploaded resume bytes into plain text.

mod docx;
mod pdf;

use tracing::info;

use crate::errors::AnalyzeError;

/// Supported resume container formats, declared by the filename suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from the suffix after the last `.`,
    /// case-insensitively. Legacy `doc` is routed to the DOCX reader.
    /// A filename without a dot is rejected as a whole.
    pub fn from_filename(filename: &str) -> Result<Self, AnalyzeError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(filename);
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Docx),
            other => Err(AnalyzeError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Extracts the embedded text of an uploaded resume.
///
/// Format dispatch happens before any bytes are inspected, so an unknown
/// suffix never reaches a parser. Reader failures on malformed content
/// propagate as-is.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, AnalyzeError> {
    let format = DocumentFormat::from_filename(filename)?;
    info!("extracting text from {filename} ({format:?}, {} bytes)", bytes.len());
    match format {
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
    }
}
