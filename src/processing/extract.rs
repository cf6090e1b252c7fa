use std::path::Path;

use log::{info, warn};
use tempfile::TempDir;

use crate::models::{ExtractedText, ExtractionMethod};
use crate::processing::ocr::OcrProcessor;
use crate::processing::{pdf, rasterize};
use crate::utils::DocError;

/// Tunables for the hybrid extraction pipeline.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Native extractions shorter than this (after trimming) are treated as
    /// failed and routed to OCR.
    pub min_native_text_len: usize,
    /// Resolution used when rasterizing pages for OCR.
    pub ocr_dpi: u32,
    /// Tesseract language code.
    pub ocr_language: String,
    /// Whether page images are preprocessed before OCR.
    pub preprocess: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            min_native_text_len: 50,
            ocr_dpi: 300,
            ocr_language: "eng".to_string(),
            preprocess: true,
        }
    }
}

/// Decides whether a native extraction is too thin to trust.
pub fn needs_ocr_fallback(native_text: &str, config: &ExtractionConfig) -> bool {
    native_text.trim().len() < config.min_native_text_len
}

/// Hybrid text extraction: the embedded text layer first, rasterization plus
/// OCR when the document looks scanned.
pub struct TextExtractor {
    config: ExtractionConfig,
}

impl TextExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        TextExtractor { config }
    }

    pub fn extract(&self, pdf_path: &Path) -> Result<ExtractedText, DocError> {
        // Step 1: try the fast, direct extraction method first.
        let native = match pdf::extract_native_text(pdf_path) {
            Ok(text) => text,
            // A missing file is not going to rasterize either.
            Err(err @ DocError::PdfRead(_)) => return Err(err),
            // Scanned PDFs often make the text-layer parser error out rather
            // than return empty; treat that the same as empty output.
            Err(err) => {
                warn!("native extraction failed, treating document as scanned: {}", err);
                String::new()
            }
        };

        // Step 2: if direct extraction yielded little text, fall back to OCR.
        if !needs_ocr_fallback(&native, &self.config) {
            info!(
                "text extracted directly from the PDF ({} chars)",
                native.trim().len()
            );
            return Ok(ExtractedText {
                text: native,
                method: ExtractionMethod::Native,
            });
        }

        warn!(
            "direct extraction yielded {} chars (threshold {}), falling back to OCR",
            native.trim().len(),
            self.config.min_native_text_len
        );

        let work_dir = TempDir::new()?;
        let pages = rasterize::rasterize_pages(pdf_path, self.config.ocr_dpi, work_dir.path())?;
        info!(
            "rasterized {} page(s) at {} dpi",
            pages.len(),
            self.config.ocr_dpi
        );

        let ocr = OcrProcessor::new(&self.config.ocr_language, self.config.preprocess);
        let text = ocr.recognize_pages(&pages, work_dir.path())?;

        Ok(ExtractedText {
            text,
            method: ExtractionMethod::Ocr,
        })
    }
}
