//! Centralized keyboard shortcuts.
//!
//! | Screen   | Keys                                             |
//! |----------|--------------------------------------------------|
//! | Picker   | ↑↓ / j k move, → / l open, ← / h / Backspace up   |
//! |          | Enter mark, Enter again scan, Space unmark, . hidden |
//! | Result   | ↑↓ / j k scroll, PageUp PageDown, Home End       |
//! | Anywhere | q or Ctrl+C quit                                 |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected global shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Quit (q, Ctrl+C), accepted on every screen.
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('q') if key.modifiers.is_empty() => Some(Shortcut::Quit),
            _ => None,
        }
    }
}


/// Labels for the bottom bar, per screen.
pub mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span};

    const DIM: Color = Color::DarkGray;

    pub fn picker(marked: bool) -> Line<'static> {
        let enter = if marked { "scan" } else { "mark" };
        Line::from(vec![
            Span::styled("↑↓ ", DIM),
            Span::raw("move"),
            Span::styled("  → ", DIM),
            Span::raw("open"),
            Span::styled("  ← ", DIM),
            Span::raw("up"),
            Span::styled("  Enter ", DIM),
            Span::raw(enter),
            Span::styled("  Space ", DIM),
            Span::raw("unmark"),
            Span::styled("  . ", DIM),
            Span::raw("hidden"),
            Span::styled("  q ", DIM),
            Span::raw("quit"),
        ])
    }

    pub fn scanning() -> Line<'static> {
        Line::from(vec![Span::styled("q ", DIM), Span::raw("quit")])
    }

    pub fn result() -> Line<'static> {
        Line::from(vec![
            Span::styled("↑↓ ", DIM),
            Span::raw("scroll"),
            Span::styled("  PgUp/PgDn ", DIM),
            Span::raw("page"),
            Span::styled("  Home/End ", DIM),
            Span::raw("jump"),
            Span::styled("  q ", DIM),
            Span::raw("quit and output"),
        ])
    }
}
