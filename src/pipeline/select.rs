use crate::color::Color;
use crate::pipeline::quantize::Histogram;
use crate::scheme::Scheme;

/// How many of the most frequent buckets compete for `bg` and `fg`.
pub const PALETTE_SIZE: usize = 8;

/// The most frequent buckets, ordered darkest to lightest by mean channel value.
///
/// The sort is stable: buckets of equal brightness keep their frequency order.
pub fn ranked_palette(histogram: &Histogram) -> Vec<Color> {
    let mut colors: Vec<Color> = histogram
        .top(PALETTE_SIZE)
        .into_iter()
        .map(|(color, _)| color)
        .collect();
    colors.sort_by_key(|c| c.channel_sum());
    colors
}

/// Pick the darkest and lightest of the ranked palette.
///
/// Returns `None` only for an empty histogram. With a single bucket
/// `bg` and `fg` are the same color.
pub fn select_scheme(histogram: &Histogram) -> Option<Scheme> {
    let palette = ranked_palette(histogram);
    let bg = *palette.first()?;
    let fg = *palette.last()?;
    Some(Scheme { bg, fg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_darkest_and_lightest_of_top_eight() {
        let mut pixels = Vec::new();
        // Frequent mid-tones.
        for (i, v) in [64u8, 96, 128, 160, 192, 96, 128, 160].iter().enumerate() {
            pixels.extend(vec![Color::new(*v, i as u8 * 20, 0); 10]);
        }
        // Rare extremes fall outside the top eight.
        pixels.push(Color::new(0, 0, 0));
        pixels.push(Color::new(255, 255, 255));

        let hist = Histogram::from_pixels(&pixels);
        let scheme = select_scheme(&hist).unwrap();

        assert_ne!(scheme.bg, Color::new(0, 0, 0));
        assert_ne!(scheme.fg, Color::new(224, 224, 224));
        assert!(scheme.bg.brightness() <= scheme.fg.brightness());
    }

    #[test]
    fn single_bucket_collapses() {
        let hist = Histogram::from_pixels(&vec![Color::new(40, 40, 40); 2500]);
        let scheme = select_scheme(&hist).unwrap();
        assert_eq!(scheme.bg, Color::new(32, 32, 32));
        assert_eq!(scheme.fg, scheme.bg);
    }

    #[test]
    fn empty_histogram_has_no_scheme() {
        assert!(select_scheme(&Histogram::default()).is_none());
    }

    #[test]
    fn ranked_palette_is_ascending() {
        let pixels: Vec<Color> = (0..8u8)
            .rev()
            .map(|i| Color::new(i * 32, 255 - i * 32, i * 16))
            .collect();
        let ranked = ranked_palette(&Histogram::from_pixels(&pixels));
        assert_eq!(ranked.len(), 8);
        for pair in ranked.windows(2) {
            assert!(pair[0].channel_sum() <= pair[1].channel_sum());
        }
    }

    #[test]
    fn equal_brightness_keeps_frequency_order() {
        // Same channel sum, different hue; the more frequent one wins `bg`.
        let mut pixels = vec![Color::new(0, 64, 0); 3];
        pixels.extend(vec![Color::new(64, 0, 0); 5]);
        let scheme = select_scheme(&Histogram::from_pixels(&pixels)).unwrap();
        assert_eq!(scheme.bg, Color::new(64, 0, 0));
        assert_eq!(scheme.fg, Color::new(0, 64, 0));
    }
}
