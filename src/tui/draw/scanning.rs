//! Progress screen shown while the scan runs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use super::super::app::ScanSession;
use super::super::constants::ACCENT;

pub(super) fn draw_scanning(f: &mut Frame, session: &ScanSession, area: Rect) {
    let [label_area, gauge_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);

    let progress = session.progress;
    let label = if progress.total == 0 {
        "Counting entries…".to_string()
    } else {
        format!("{} / {} entries scanned", progress.scanned, progress.total)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        label_area,
    );

    let ratio = progress.ratio().unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" Scanning {} ", session.root.display())),
        )
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(ratio);
    f.render_widget(gauge, gauge_area);
}
