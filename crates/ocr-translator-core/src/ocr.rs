//! Character recognition capability.

use image::GrayImage;

use crate::error::Result;

/// Extracts text from one preprocessed page image.
///
/// Implementations are supplied by the host (e.g. a Tesseract binding);
/// the pipeline only consumes this interface. An empty string is a valid
/// recognition result for a blank page.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, page: &GrayImage) -> Result<String>;
}
