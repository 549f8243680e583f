//! TUI rendering: header, one body per screen, and the shortcut bar.

mod picker;
mod result;
mod scanning;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::path::Path;

use crate::core::app;

use super::app::{App, Screen};
use super::constants::ACCENT;
use super::shortcuts::labels;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let header_area = chunks[0];
    let body_area = chunks[1];
    let shortcuts_area = chunks[2];

    let (path, bar) = match &mut app.screen {
        Screen::FilePicker(state) => {
            picker::draw_picker(f, state, body_area);
            (state.dir.clone(), labels::picker(state.marked.is_some()))
        }
        Screen::Scanning(session) => {
            scanning::draw_scanning(f, session, body_area);
            (session.root.clone(), labels::scanning())
        }
        Screen::Result(view) => {
            result::draw_result(f, view, body_area);
            (view.root.clone(), labels::result())
        }
    };

    draw_header(f, &path, header_area);
    f.render_widget(Paragraph::new(bar).alignment(Alignment::Right), shortcuts_area);
}

fn draw_header(f: &mut Frame, path: &Path, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(0)])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            format!("{} ", app::NAME),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("v{}", app::VERSION),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), header_chunks[0]);

    let path_line = Line::from(Span::styled(
        truncate_left(&path.display().to_string(), header_chunks[1].width as usize),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(path_line).alignment(Alignment::Right),
        header_chunks[1],
    );
}

/// Keep the tail of `s` within `max` columns, marking the cut with "…".
fn truncate_left(s: &str, max: usize) -> String {
    let len = s.chars().count();
    if len <= max || max < 2 {
        return s.to_string();
    }
    let tail: String = s.chars().skip(len - (max - 1)).collect();
    format!("…{}", tail)
}
