use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};

use crate::color::Color;
use crate::pipeline::quantize::Histogram;
use crate::pipeline::select::select_scheme;
use crate::scheme::Scheme;

/// Side length of the downsampled sample grid (50x50 = 2500 pixels).
pub const SAMPLE_SIZE: u32 = 50;

/// Load an image, drop any alpha channel and resize to exactly 50x50.
///
/// Aspect ratio is not preserved. Pixels are returned in row-major order.
pub fn load_and_prepare(path: &Path) -> Result<Vec<Color>> {
    let img = image::open(path).with_context(|| {
        if !path.exists() {
            format!("file not found: {}", path.display())
        } else {
            format!(
                "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
                path.display()
            )
        }
    })?;
    log::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let rgb_img = img.to_rgb8();
    let sample = imageops::resize(&rgb_img, SAMPLE_SIZE, SAMPLE_SIZE, FilterType::CatmullRom);

    Ok(sample.pixels().map(|p| Color::from(*p)).collect())
}

/// Run the whole extraction for one image: decode, sample, bucket, select.
pub fn extract_scheme(path: &Path) -> Result<Scheme> {
    let pixels = load_and_prepare(path)?;
    let histogram = Histogram::from_pixels(&pixels);
    log::debug!(
        "{} samples in {} buckets from {}",
        histogram.total(),
        histogram.len(),
        path.display()
    );

    let scheme = select_scheme(&histogram)
        .with_context(|| format!("no pixels sampled from {}", path.display()))?;
    log::info!("extracted bg {} fg {} from {}", scheme.bg, scheme.fg, path.display());
    Ok(scheme)
}
