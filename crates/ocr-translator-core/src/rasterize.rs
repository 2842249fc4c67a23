//! Source-document rasterization.

use std::path::Path;

use image::RgbaImage;
use mupdf::{Colorspace, Document as MuDocument, Matrix};

use crate::error::{Error, Result};

/// Default scale factor for rendering (2.0 for high DPI)
pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

/// Converts a source document into its ordered sequence of page images.
///
/// Zero pages is a valid result; only unreadable or corrupt input is an
/// error.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbaImage>>;
}

/// PDF rasterizer backed by mupdf.
pub struct MupdfRasterizer {
    /// Scale factor applied when rendering pages
    pub scale: f32,
}

impl MupdfRasterizer {
    pub const fn new() -> Self {
        Self {
            scale: DEFAULT_RENDER_SCALE,
        }
    }

    pub const fn with_scale(scale: f32) -> Self {
        Self { scale }
    }

    fn render_page(&self, doc: &MuDocument, index: i32) -> Result<RgbaImage> {
        let page_num = usize::try_from(index).unwrap_or_default();
        let page = doc.load_page(index).map_err(|e| {
            Error::DocumentRead(format!("failed to load page {page_num}: {e}"))
        })?;

        let matrix = Matrix::new_scale(self.scale, self.scale);
        let pixmap = page
            .to_pixmap(&matrix, &Colorspace::device_rgb(), 1.0, true)
            .map_err(|e| Error::DocumentRead(format!("failed to render page {page_num}: {e}")))?;

        let width = pixmap.width();
        let height = pixmap.height();
        let samples = pixmap.samples();
        let n = pixmap.n() as usize; // components per pixel

        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for chunk in samples.chunks(n) {
            match n {
                3 => {
                    rgba.extend_from_slice(chunk);
                    rgba.push(255);
                }
                4 => rgba.extend_from_slice(chunk),
                1 => {
                    rgba.push(chunk[0]);
                    rgba.push(chunk[0]);
                    rgba.push(chunk[0]);
                    rgba.push(255);
                }
                _ => {
                    return Err(Error::DocumentRead(format!(
                        "unexpected pixel format with {n} components on page {page_num}"
                    )));
                }
            }
        }

        RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            Error::DocumentRead(format!("failed to create image buffer for page {page_num}"))
        })
    }
}

impl Default for MupdfRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for MupdfRasterizer {
    fn rasterize(&self, path: &Path) -> Result<Vec<RgbaImage>> {
        let doc = MuDocument::open(&path.to_string_lossy())
            .map_err(|e| Error::DocumentRead(format!("{}: {e}", path.display())))?;

        let page_count = doc
            .page_count()
            .map_err(|e| Error::DocumentRead(format!("failed to get page count: {e}")))?;

        let mut pages = Vec::with_capacity(usize::try_from(page_count).unwrap_or_default());
        for index in 0..page_count {
            pages.push(self.render_page(&doc, index)?);
        }
        Ok(pages)
    }
}
