use std::path::Path;

use image::imageops::{brighten, contrast};
use image::{DynamicImage, ImageFormat};
use imageproc::contrast::adaptive_threshold;
use imageproc::filter::sharpen3x3;

use crate::utils::DocError;

/// OCR preprocessing for rasterized pages.
pub struct ImageProcessor;

impl ImageProcessor {
    /// Prepares a page image for OCR: grayscale, contrast stretch, sharpen,
    /// then adaptive binarization.
    pub fn preprocess_page(path: &Path) -> Result<DynamicImage, DocError> {
        let img = image::open(path).map_err(|e| {
            DocError::ImageProcessing(format!(
                "failed to load page image {}: {}",
                path.display(),
                e
            ))
        })?;

        let gray = img.grayscale().to_luma8();
        let enhanced = brighten(&contrast(&gray, 15.0), 5);
        let sharpened = sharpen3x3(&enhanced);
        // Block radius chosen for 300 dpi scans; uneven lighting on
        // photographed documents defeats a global threshold.
        let binary = adaptive_threshold(&sharpened, 15);

        Ok(DynamicImage::ImageLuma8(binary))
    }

    pub fn write_png(img: &DynamicImage, path: &Path) -> Result<(), DocError> {
        img.save_with_format(path, ImageFormat::Png).map_err(|e| {
            DocError::ImageProcessing(format!(
                "failed to write processed image {}: {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn preprocessed_page_is_binarized_grayscale() {
        // Synthetic page: light background with a dark band of "text".
        let mut page = GrayImage::from_pixel(64, 64, Luma([220u8]));
        for x in 8..56 {
            for y in 28..36 {
                page.put_pixel(x, y, Luma([30u8]));
            }
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page-1.png");
        page.save(&path).unwrap();

        let processed = ImageProcessor::preprocess_page(&path).unwrap();
        let luma = processed.to_luma8();
        assert_eq!(luma.dimensions(), (64, 64));
        // Adaptive thresholding leaves only black and white.
        assert!(luma.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn unreadable_image_is_a_processing_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.png");
        std::fs::write(&path, b"garbage").unwrap();

        let err = ImageProcessor::preprocess_page(&path).unwrap_err();
        assert!(matches!(err, DocError::ImageProcessing(_)));
    }

    #[test]
    fn write_png_round_trips() {
        let page = GrayImage::from_pixel(8, 8, Luma([255u8]));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        ImageProcessor::write_png(&DynamicImage::ImageLuma8(page), &path).unwrap();
        assert!(image::open(&path).is_ok());
    }
}
