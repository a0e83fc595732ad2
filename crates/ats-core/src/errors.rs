use thiserror::Error;

/// Library-level error type.
///
/// Extraction and parsing failures propagate synchronously to the caller;
/// nothing is retried and no partial result is produced. An empty keyword
/// comparison is not an error (it scores 0).
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// The filename suffix is neither `pdf` nor `docx`/`doc`. Raised before
    /// any bytes are inspected.
    #[error("unsupported file format '{0}' (expected pdf or docx)")]
    UnsupportedFormat(String),

    #[error("failed to extract PDF text: {0}")]
    PdfParse(#[from] pdf_extract::OutputError),

    #[error("failed to open DOCX container: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("failed to read DOCX document XML: {0}")]
    DocxXml(#[from] quick_xml::Error),

    #[error("failed to build keyword matcher: {0}")]
    Matcher(String),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzeError {
    /// True when the underlying format reader could not decode the document,
    /// as opposed to the file being rejected up front by its extension.
    /// Callers present the two differently: a parse failure means the file is
    /// damaged, an unsupported format means the user picked the wrong file.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            AnalyzeError::PdfParse(_)
                | AnalyzeError::DocxArchive(_)
                | AnalyzeError::DocxXml(_)
                | AnalyzeError::Io(_)
        )
    }
}
