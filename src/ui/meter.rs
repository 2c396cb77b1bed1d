use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Emphasis level for a usage figure. Presentation only — thresholds never
/// feed back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Warning,
    Critical,
}

impl Tier {
    /// Step function: > 90 critical, > 80 warning, otherwise normal.
    pub fn for_percent(percent: f64) -> Self {
        if percent > 90.0 {
            Tier::Critical
        } else if percent > 80.0 {
            Tier::Warning
        } else {
            Tier::Normal
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tier::Normal => Color::Green,
            Tier::Warning => Color::Yellow,
            Tier::Critical => Color::Red,
        }
    }
}

/// How many bar cells are filled vs empty for `percent` at `width` cells.
pub fn fill_counts(percent: f64, width: usize) -> (usize, usize) {
    let filled = (width as f64 * (percent / 100.0)) as usize;
    let filled = filled.min(width);
    (filled, width - filled)
}

/// Bar text: "[████░░...░] 45.2%" with the percentage in a fixed
/// 6-character field so columns never shift.
pub fn bar_text(percent: f64, width: usize) -> String {
    let (filled, empty) = fill_counts(percent, width);
    format!(
        "[{}{}] {:>5.1}%",
        "█".repeat(filled),
        "░".repeat(empty),
        percent
    )
}

/// Bar line colored by tier.
pub fn bar_line(percent: f64, width: usize) -> Line<'static> {
    let tier = Tier::for_percent(percent);
    Line::from(Span::styled(
        bar_text(percent, width),
        Style::default().fg(tier.color()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_and_empty_always_sum_to_width() {
        for p in 0..=100 {
            let (filled, empty) = fill_counts(p as f64, 30);
            assert_eq!(filled + empty, 30, "p = {p}");
        }
    }

    #[test]
    fn filled_is_monotone_in_percent() {
        let mut prev = 0;
        for p in 0..=1000 {
            let (filled, _) = fill_counts(p as f64 / 10.0, 30);
            assert!(filled >= prev, "p = {}", p as f64 / 10.0);
            prev = filled;
        }
    }

    #[test]
    fn bar_endpoints() {
        let (filled, empty) = fill_counts(0.0, 30);
        assert_eq!((filled, empty), (0, 30));
        let (filled, empty) = fill_counts(100.0, 30);
        assert_eq!((filled, empty), (30, 0));
    }

    #[test]
    fn tier_thresholds_are_exclusive() {
        assert_eq!(Tier::for_percent(80.0), Tier::Normal);
        assert_eq!(Tier::for_percent(80.01), Tier::Warning);
        assert_eq!(Tier::for_percent(90.0), Tier::Warning);
        assert_eq!(Tier::for_percent(90.01), Tier::Critical);
    }

    #[test]
    fn bar_text_shape() {
        let text = bar_text(50.0, 10);
        assert_eq!(text, "[█████░░░░░]  50.0%");
        // brackets + width cells + space + 6-char percent field
        assert_eq!(text.chars().count(), 10 + 2 + 1 + 6);
    }

    #[test]
    fn percent_field_is_six_chars() {
        for text in [bar_text(0.0, 4), bar_text(7.3, 4), bar_text(100.0, 4)] {
            let suffix: String = text.chars().skip(4 + 2 + 1).collect();
            assert_eq!(suffix.chars().count(), 6, "{text:?}");
        }
    }
}
