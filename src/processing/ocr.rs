use std::path::{Path, PathBuf};

use log::debug;
use tesseract::Tesseract;

use crate::processing::preprocess::ImageProcessor;
use crate::utils::DocError;

/// Runs Tesseract over rasterized page images.
///
/// The engine is initialized once per document and reused across pages, so
/// model loading is paid once regardless of page count.
pub struct OcrProcessor {
    language: String,
    preprocess: bool,
}

impl OcrProcessor {
    pub fn new(language: &str, preprocess: bool) -> Self {
        OcrProcessor {
            language: language.to_string(),
            preprocess,
        }
    }

    /// OCRs a batch of page images, joining the per-page texts with
    /// newlines. Preprocessed copies are written next to the originals in
    /// `work_dir`.
    pub fn recognize_pages(&self, pages: &[PathBuf], work_dir: &Path) -> Result<String, DocError> {
        let mut tess = Tesseract::new(None, Some(&self.language))
            .map_err(|e| DocError::Ocr(format!("Tesseract init error: {}", e)))?;

        let mut full_text = Vec::with_capacity(pages.len());
        for (idx, page) in pages.iter().enumerate() {
            debug!("running OCR on page {}/{}", idx + 1, pages.len());

            let input = if self.preprocess {
                let processed = ImageProcessor::preprocess_page(page)?;
                let out = work_dir.join(format!("ocr-{:03}.png", idx + 1));
                ImageProcessor::write_png(&processed, &out)?;
                out
            } else {
                page.clone()
            };

            let input_str = input
                .to_str()
                .ok_or_else(|| DocError::Ocr("page image path is not valid UTF-8".to_string()))?;

            tess = tess
                .set_image(input_str)
                .map_err(|e| DocError::Ocr(format!("Tesseract set image error: {}", e)))?;
            let text = tess
                .get_text()
                .map_err(|e| DocError::Ocr(format!("Tesseract error: {}", e)))?;
            full_text.push(text.trim().to_string());
        }

        Ok(full_text.join("\n"))
    }
}
