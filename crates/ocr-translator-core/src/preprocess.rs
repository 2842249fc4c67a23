//! Per-page image preparation for OCR.

use image::{GrayImage, Luma, RgbaImage};

/// Global binarization threshold. Pixels at or above this intensity become
/// white, everything below becomes black.
///
/// Fixed thresholding is a deliberate simplification: it fails on
/// non-uniformly-lit scans, where adaptive thresholding would do better.
/// Kept as-is so OCR output stays reproducible across runs.
pub const OCR_THRESHOLD: u8 = 100;

/// Convert a rasterized page to a single-channel binary image.
///
/// Luma conversion uses the ITU-R BT.601 weights of
/// `image::imageops::grayscale`, followed by a global threshold at
/// [`OCR_THRESHOLD`].
pub fn binarize(page: &RgbaImage) -> GrayImage {
    binarize_gray(image::imageops::grayscale(page))
}

fn binarize_gray(mut gray: GrayImage) -> GrayImage {
    for pixel in gray.pixels_mut() {
        *pixel = if pixel.0[0] >= OCR_THRESHOLD {
            Luma([255])
        } else {
            Luma([0])
        };
    }
    gray
}
