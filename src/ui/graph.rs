use std::collections::VecDeque;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Density ramp, empty to full. A 0% sample renders as a space, 100% as a
/// full block.
const RAMP: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Map a percentage to a ramp index, clamped to the ramp.
pub fn level(value: f64) -> usize {
    let level = (value / 100.0 * 8.0).floor();
    level.clamp(0.0, 8.0) as usize
}

/// Sparkline body, oldest sample first, right-justified to exactly `width`
/// characters so the field never resizes while history fills up.
pub fn graph_text(history: &VecDeque<f64>, width: usize) -> String {
    let pad = width.saturating_sub(history.len());
    let mut text = " ".repeat(pad);
    text.extend(history.iter().map(|&v| RAMP[level(v)]));
    text
}

/// Labelled graph row, e.g. "CPU: [   ▁▃█]".
pub fn graph_line(label: &str, history: &VecDeque<f64>, width: usize) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("["),
        Span::styled(graph_text(history, width), Style::default().fg(Color::Cyan)),
        Span::raw("]"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_endpoints_and_clamping() {
        assert_eq!(level(0.0), 0);
        assert_eq!(level(100.0), 8);
        assert_eq!(level(150.0), 8);
        assert_eq!(level(-5.0), 0);
    }

    #[test]
    fn level_buckets_are_eighths() {
        assert_eq!(level(12.4), 0);
        assert_eq!(level(12.5), 1);
        assert_eq!(level(50.0), 4);
        assert_eq!(level(87.4), 6);
        assert_eq!(level(87.5), 7);
    }

    #[test]
    fn empty_history_renders_blank_field() {
        let history = VecDeque::new();
        let text = graph_text(&history, 50);
        assert_eq!(text.chars().count(), 50);
        assert!(text.chars().all(|c| c == ' '));
    }

    #[test]
    fn width_is_constant_while_filling() {
        let mut history = VecDeque::new();
        for i in 0..12 {
            history.push_back((i * 9) as f64);
            assert_eq!(graph_text(&history, 12).chars().count(), 12);
        }
    }

    #[test]
    fn samples_appear_oldest_first() {
        let history = VecDeque::from(vec![0.0, 50.0, 100.0]);
        let text = graph_text(&history, 5);
        let glyphs: Vec<char> = text.chars().collect();
        assert_eq!(glyphs.len(), 5);
        assert_eq!(glyphs[2], ' '); // 0% sample
        assert_eq!(glyphs[3], '▄'); // 50% sample
        assert_eq!(glyphs[4], '█'); // 100% sample
    }
}
