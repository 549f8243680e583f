//! Scrollable output of a finished scan, with a scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::super::app::{ResultView, ScanOutcome};

pub(super) fn draw_result(f: &mut Frame, view: &mut ResultView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];

    let lines: Vec<Line> = match &view.outcome {
        ScanOutcome::Rendered(text) => text.lines().map(Line::raw).collect(),
        ScanOutcome::Failed(msg) => vec![Line::from(Span::styled(
            format!("Scan failed: {}", msg),
            Style::default().fg(Color::Red),
        ))],
    };

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible);
    view.last_max_scroll = max_scroll;
    view.scroll = view.scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines).scroll((view.scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(view.scroll)
        .content_length(max_scroll);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
