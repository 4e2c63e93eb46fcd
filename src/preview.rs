use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::scheme::Scheme;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Render swatches for `bg` and `fg`, plus a sample line of `fg` text on `bg`.
pub fn render(scheme: &Scheme) -> String {
    let mut out = String::new();
    for (label, color) in [("bg", scheme.bg), ("fg", scheme.fg)] {
        out.push_str(&format!("{}  {label}  {color}\n", "      ".on(to_term(color))));
    }
    let sample = " The quick brown fox "
        .with(to_term(scheme.fg))
        .on(to_term(scheme.bg));
    out.push_str(&format!(
        "{sample}  contrast {:.1}:1\n",
        scheme.contrast_ratio()
    ));
    out
}
