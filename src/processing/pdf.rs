use std::path::Path;

use crate::utils::DocError;

/// Extracts the embedded text layer of a PDF, all pages concatenated.
/// Fast, but only works for native (non-scanned) documents.
pub fn extract_native_text(pdf_path: &Path) -> Result<String, DocError> {
    if !pdf_path.exists() {
        return Err(DocError::PdfRead(format!(
            "PDF file not found: {}",
            pdf_path.display()
        )));
    }

    pdf_extract::extract_text(pdf_path)
        .map_err(|e| DocError::Extraction(format!("native text extraction failed: {}", e)))
}

/// In-memory variant of [`extract_native_text`].
pub fn extract_native_text_from_mem(pdf_bytes: &[u8]) -> Result<String, DocError> {
    pdf_extract::extract_text_from_mem(pdf_bytes)
        .map_err(|e| DocError::Extraction(format!("native text extraction failed: {}", e)))
}
