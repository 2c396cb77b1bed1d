pub mod graph;
pub mod meter;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::app::App;

/// Render the complete UI: a single bordered panel with the CPU section on
/// top and the RAM section below, row order fixed.
pub fn draw(f: &mut Frame, app: &App) {
    let title = if app.paused {
        "System Monitor (paused)"
    } else {
        "System Monitor"
    };
    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(Color::Cyan));

    let panel = Paragraph::new(panel_lines(app)).block(block);
    f.render_widget(panel, f.area());
}

/// The eight content rows of the panel.
fn panel_lines(app: &App) -> Vec<Line<'static>> {
    let cpu = app.cpu_history.back().copied().unwrap_or(0.0);
    let ram = app.ram_history.back().copied().unwrap_or(0.0);
    let width = app.history_size();

    vec![
        section_header("CPU Usage"),
        meter::bar_line(cpu, app.bar_width()),
        graph::graph_line("CPU", &app.cpu_history, width),
        Line::default(),
        section_header("RAM Usage"),
        meter::bar_line(ram, app.bar_width()),
        Line::from(Span::styled(
            app.memory.absolute_label(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        graph::graph_line("RAM", &app.ram_history, width),
    ]
}

fn section_header(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_rows_keep_fixed_order() {
        let app = App::new(10, 30);
        let lines = panel_lines(&app);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].to_string(), "CPU Usage");
        assert_eq!(lines[4].to_string(), "RAM Usage");
        // separator row between the sections stays blank
        assert_eq!(lines[3].to_string(), "");
    }

    #[test]
    fn empty_state_renders_without_panicking() {
        let app = App::new(10, 30);
        let lines = panel_lines(&app);
        // bars read 0%, graphs are blank but full width
        assert!(lines[1].to_string().contains("  0.0%"));
        assert_eq!(lines[2].to_string(), format!("CPU: [{}]", " ".repeat(10)));
    }
}
