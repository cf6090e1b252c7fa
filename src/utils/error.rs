use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("PDF read error: {0}")]
    PdfRead(String),
    #[error("Text extraction error: {0}")]
    Extraction(String),
    #[error("Rasterization error: {0}")]
    Rasterize(String),
    #[error("Image processing error: {0}")]
    ImageProcessing(String),
    #[error("OCR error: {0}")]
    Ocr(String),
    #[error("Reference store error: {0}")]
    ReferenceStore(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
