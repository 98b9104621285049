//! Resume text from uploaded files.

use bytes::Bytes;
use tracing::{debug, warn};

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

pub fn is_pdf(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Extracts plain text from an uploaded PDF resume.
///
/// Parsing is CPU-bound and runs on the blocking pool. A parser panic on a malformed
/// file surfaces as `UnprocessableEntity`, not a dropped connection.
pub async fn resume_text_from_pdf(data: Bytes) -> Result<String, AppError> {
    if !is_pdf(&data) {
        return Err(AppError::Validation(
            "Uploaded resume is not a PDF file".to_string(),
        ));
    }

    let size = data.len();
    let raw = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            AppError::UnprocessableEntity("Could not read text from PDF: malformed file".to_string())
        })?
        .map_err(|e| {
            AppError::UnprocessableEntity(format!("Could not read text from PDF: {e}"))
        })?;
    debug!("Extracted {} chars from {} byte PDF", raw.len(), size);

    let text = normalize_extracted_text(&raw);
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "PDF contains no extractable text (scanned images are not supported)".to_string(),
        ));
    }
    Ok(text)
}

/// Trims trailing whitespace per line and collapses runs of blank lines to one.
pub fn normalize_extracted_text(raw: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in raw.lines().map(str::trim_end) {
        if line.trim().is_empty() && out.last().map_or(true, |l| l.is_empty()) {
            continue;
        }
        out.push(if line.trim().is_empty() { "" } else { line });
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
