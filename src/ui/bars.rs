use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use thiserror::Error;

/// Bar colours, picked by bar index modulo the palette length.
pub const PALETTE: [Color; 6] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
];

const FILL: &str = "█";
const FOOT: &str = "▀";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("cannot render a frame with zero bars")]
    EmptyFrame,
    #[error("bar width must be at least 1")]
    ZeroBarWidth,
}

pub fn bar_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

/// Render bar heights as coloured text rows.
///
/// Rows run from the tallest bar down to height 1, so bars grow upward from a
/// shared baseline. A final row of foot glyphs marks that baseline. The output
/// always has `max(heights) + 1` lines, each `heights.len() * bar_width` cells
/// wide.
pub fn render(heights: &[u16], bar_width: u16) -> Result<Vec<Line<'static>>, RenderError> {
    let max_height = *heights.iter().max().ok_or(RenderError::EmptyFrame)?;
    if bar_width == 0 {
        return Err(RenderError::ZeroBarWidth);
    }

    let width = bar_width as usize;
    let filled = FILL.repeat(width);
    let blank = " ".repeat(width);

    let mut lines = Vec::with_capacity(max_height as usize + 1);

    for level in (1..=max_height).rev() {
        let spans: Vec<Span<'static>> = heights
            .iter()
            .enumerate()
            .map(|(i, &height)| {
                if height >= level {
                    Span::styled(filled.clone(), Style::default().fg(bar_color(i)))
                } else {
                    Span::raw(blank.clone())
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let foot = FOOT.repeat(width);
    let base: Vec<Span<'static>> = (0..heights.len())
        .map(|i| Span::styled(foot.clone(), Style::default().fg(bar_color(i))))
        .collect();
    lines.push(Line::from(base));

    Ok(lines)
}
