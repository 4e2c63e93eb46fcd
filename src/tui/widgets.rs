use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::color::Color as AppColor;
use crate::scheme::Scheme;

use super::SchemeView;

/// A widget that renders the current scheme document as two labelled
/// swatches, a text sample and the bg/fg contrast ratio.
pub struct SchemeWidget<'a> {
    view: &'a SchemeView,
}

impl<'a> SchemeWidget<'a> {
    pub fn new(view: &'a SchemeView) -> Self {
        Self { view }
    }
}

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

fn swatch_line(label: &str, color: AppColor) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("  {label}  "),
            Style::default()
                .bg(to_color(color))
                .fg(contrast_fg(color))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  {}", color.to_hex())),
    ])
}

fn scheme_lines(scheme: &Scheme) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        swatch_line("Bg", scheme.bg),
        Line::from(""),
        swatch_line("Fg", scheme.fg),
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                " Sample text ",
                Style::default().fg(to_color(scheme.fg)).bg(to_color(scheme.bg)),
            ),
            Span::styled(
                format!("  contrast {:.1}:1", scheme.contrast_ratio()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ]
}

impl Widget for SchemeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Colors");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = match self.view {
            SchemeView::Missing => vec![Line::from(""), Line::from("  No colors loaded yet")],
            SchemeView::Invalid(err) => vec![
                Line::from(""),
                Line::styled(
                    format!("  Error loading colors: {err}"),
                    Style::default().fg(Color::Red),
                ),
            ],
            SchemeView::Loaded(scheme) => scheme_lines(scheme),
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
