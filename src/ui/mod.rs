pub mod banner;
pub mod bars;
pub mod screen;

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub use screen::{Screen, TuiScreen};

const RULE_WIDTH: usize = 50;

/// Everything drawn for one tick.
#[derive(Debug, Clone)]
pub struct FrameView<'a> {
    pub device_id: &'a str,
    pub playing: bool,
    pub bars: Vec<Line<'static>>,
}

impl FrameView<'_> {
    pub fn status_label(&self) -> &'static str {
        if self.playing {
            "Playing"
        } else {
            "Paused or Stopped"
        }
    }
}

fn key_hint(key: &'static str, label: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::White)),
        Span::raw(label),
    ]
}

/// Static controls legend shown under the bars.
pub fn controls_lines() -> Vec<Line<'static>> {
    let rule = Line::raw("=".repeat(RULE_WIDTH));

    let mut legend = Vec::new();
    legend.extend(key_hint("[Space]", " Play/Pause | "));
    legend.extend(key_hint("[←]", " Previous | "));
    legend.extend(key_hint("[→]", " Next | "));
    legend.extend(key_hint("[↑]", " Volume Up | "));
    legend.extend(key_hint("[↓]", " Volume Down | "));
    legend.extend(key_hint("[Q]", " Quit"));

    vec![
        rule.clone(),
        Line::from(Span::styled("Music Controls:", Style::default().fg(Color::Cyan))),
        Line::from(legend),
        rule,
    ]
}

/// Header, bars and legend, top to bottom.
pub fn frame_lines(view: &FrameView) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Music Visualization",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::raw(format!("Device ID: {}", view.device_id)),
        Line::raw(format!("Status: {}", view.status_label())),
        Line::default(),
    ];

    lines.extend(view.bars.iter().cloned());
    lines.push(Line::default());
    lines.extend(controls_lines());
    lines
}

pub fn draw(f: &mut Frame, view: &FrameView) {
    let area = f.area();
    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(frame_lines(view)), area);
}
