pub mod extract;
pub mod ocr;
pub mod pdf;
pub mod preprocess;
pub mod rasterize;

pub use extract::{ExtractionConfig, TextExtractor};
pub use ocr::OcrProcessor;
pub use preprocess::ImageProcessor;
