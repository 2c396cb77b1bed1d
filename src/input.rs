use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Handle a single key input event.
///
/// Quit is a flag, not an early exit: the loop finishes the pass it is on
/// and shuts down at the top of the next one.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Freeze/resume sampling (display keeps redrawing) ──
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char(' ') => {
            app.paused = !app.paused;
        }

        _ => {}
    }
}
