pub mod intro;
pub mod menu;
pub mod screen;

use crate::core::constants::{BIRD_CHAR, BORDER_CHAR, PIPE_CAP, PIPE_SIDE};
use intro::BAR_FILL;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw plain text rows from the top-left corner, coloring game glyphs.
pub fn draw_lines(frame: &mut Frame, lines: &[String]) {
    let text: Vec<Line> = lines.iter().map(|line| styled_line(line)).collect();
    frame.render_widget(Paragraph::new(text), frame.size());
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        BORDER_CHAR => Style::default().fg(Color::Cyan),
        BIRD_CHAR => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        PIPE_SIDE | PIPE_CAP | BAR_FILL => Style::default().fg(Color::Green),
        _ => Style::default(),
    }
}

/// Split a row into spans of equally styled glyphs.
fn styled_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();

    for glyph in line.chars() {
        let style = glyph_style(glyph);
        if style != run_style && !run.is_empty() {
            spans.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(glyph);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, run_style));
    }

    Line::from(spans)
}
