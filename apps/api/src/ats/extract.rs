//! Text extraction for uploaded CV documents (PDF or plain text).
//!
//! PDF parsing is CPU-bound; handlers call this inside `spawn_blocking`.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;

use crate::ats::AtsError;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// Decides how to read an upload from its declared type, file name, and leading bytes.
pub fn detect_kind(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: &[u8],
) -> Result<DocumentKind, AtsError> {
    let name = file_name.unwrap_or_default().to_lowercase();
    let mime = content_type.unwrap_or_default().to_lowercase();

    if data.starts_with(PDF_MAGIC) || mime == "application/pdf" || name.ends_with(".pdf") {
        return Ok(DocumentKind::Pdf);
    }
    if mime.starts_with("text/") || name.ends_with(".txt") {
        return Ok(DocumentKind::PlainText);
    }

    let label = match (mime.is_empty(), name.is_empty()) {
        (false, _) => mime,
        (true, false) => name,
        (true, true) => "unknown".to_string(),
    };
    Err(AtsError::UnsupportedDocument(label))
}

/// Extracts the readable text of an uploaded document.
pub fn extract_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: &Bytes,
) -> Result<String, AtsError> {
    let text = match detect_kind(file_name, content_type, data)? {
        DocumentKind::Pdf => extract_pdf(data)?,
        DocumentKind::PlainText => String::from_utf8(data.to_vec())
            .map_err(|_| AtsError::Extraction("text file is not valid UTF-8".to_string()))?,
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AtsError::EmptyDocument);
    }
    Ok(text)
}

/// pdf-extract panics on some malformed documents (e.g. a page that uses a
/// font without a /Resources dictionary); those become extraction errors.
fn extract_pdf(data: &[u8]) -> Result<String, AtsError> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
        Ok(result) => result.map_err(|e| AtsError::Extraction(e.to_string())),
        Err(_) => Err(AtsError::Extraction(
            "document could not be parsed".to_string(),
        )),
    }
}
