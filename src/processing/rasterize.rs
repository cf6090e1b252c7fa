use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::utils::DocError;

/// Renders each page of a PDF to a PNG at the requested resolution using the
/// poppler `pdftoppm` utility. Returns the page image paths in page order.
pub fn rasterize_pages(
    pdf_path: &Path,
    dpi: u32,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, DocError> {
    let prefix = out_dir.join("page");
    debug!("rasterizing {} at {} dpi", pdf_path.display(), dpi);

    let output = Command::new("pdftoppm")
        .arg("-r")
        .arg(dpi.to_string())
        .arg("-png")
        .arg(pdf_path)
        .arg(&prefix)
        .output()
        .map_err(|e| {
            DocError::Rasterize(format!(
                "failed to run pdftoppm (is poppler installed?): {}",
                e
            ))
        })?;

    if !output.status.success() {
        return Err(DocError::Rasterize(format!(
            "pdftoppm exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    let mut pages: Vec<PathBuf> = std::fs::read_dir(out_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map_or(false, |name| name.starts_with("page-") && name.ends_with(".png"))
        })
        .collect();

    if pages.is_empty() {
        return Err(DocError::Rasterize(
            "pdftoppm produced no page images".to_string(),
        ));
    }

    // pdftoppm zero-pads page numbers to a fixed width for a given document,
    // so lexical order is page order.
    pages.sort();
    Ok(pages)
}
