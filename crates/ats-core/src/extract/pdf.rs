use crate::errors::AnalyzeError;

/// Extracts text from every page in document order. `pdf-extract` walks the
/// page tree itself, so the pages arrive already concatenated.
pub(crate) fn extract(bytes: &[u8]) -> Result<String, AnalyzeError> {
    Ok(pdf_extract::extract_text_from_mem(bytes)?)
}
