use indexmap::IndexMap;

use crate::color::Color;

/// Width of one quantization cell per channel. 8 cells per channel, 512 total.
pub const BUCKET_WIDTH: u8 = 32;

/// Occurrence counts per quantized color, in first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct Histogram {
    counts: IndexMap<Color, u32>,
}

impl Histogram {
    /// Quantize every pixel and count bucket occurrences.
    pub fn from_pixels(pixels: &[Color]) -> Self {
        let mut counts = IndexMap::new();
        for pixel in pixels {
            *counts.entry(pixel.quantize(BUCKET_WIDTH)).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct buckets.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for a bucket key; the key must already be quantized.
    pub fn count(&self, bucket: Color) -> u32 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Total number of samples.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// The `n` most frequent buckets, most frequent first.
    ///
    /// Equal counts keep first-encountered order, so the result is
    /// reproducible for a given pixel sequence.
    pub fn top(&self, n: usize) -> Vec<(Color, u32)> {
        let mut entries: Vec<(Color, u32)> =
            self.counts.iter().map(|(&color, &count)| (color, count)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}
