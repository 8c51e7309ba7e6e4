//! PDF text extraction — thin wrapper over `pdf-extract` plus the cleanup
//! pass applied to every extracted document. Digital (non-scanned) PDFs only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Document contains no extractable text")]
    Empty,
}

/// Quick check for the PDF magic header.
pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF")
}

/// Extracts plain text from an in-memory PDF. An unparseable byte stream or
/// a document yielding no text is an error.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let cleaned = clean_text(&raw);
    if cleaned.is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(cleaned)
}

/// Normalizes extracted text: strips NUL bytes, converts non-breaking spaces
/// and carriage returns to plain spaces, trims each line, drops blank lines.
pub fn clean_text(text: &str) -> String {
    let text = text
        .replace('\0', "")
        .replace('\u{a0}', " ")
        .replace('\r', " ");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
