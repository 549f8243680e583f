//! Directory picker list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::super::app::{CURRENT_DIR_LABEL, PickerState};
use super::super::constants::{ACCENT, ACCENT_SECONDARY};

pub(super) fn draw_picker(f: &mut Frame, state: &mut PickerState, area: Rect) {
    let title = if state.show_hidden {
        " Choose a directory (hidden shown) "
    } else {
        " Choose a directory "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(title);

    if let Some(ref err) = state.error {
        let text = vec![
            Line::from(Span::styled(
                format!("Cannot list this directory: {}", err),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "← to go up",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    if state.loading {
        let text = Line::from(Span::styled(
            format!("Reading {}…", state.dir.display()),
            Style::default().fg(Color::DarkGray),
        ));
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let marked = state.marked.as_deref();
    let mut items = Vec::with_capacity(state.row_count());
    items.push(row(CURRENT_DIR_LABEL.to_string(), marked == Some(state.dir.as_path())));
    for dir in &state.subdirs {
        items.push(row(PickerState::label(dir), marked == Some(dir.as_path())));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
    );
    state.list_state.select(Some(state.selected_index));
    f.render_stateful_widget(list, area, &mut state.list_state);
}

fn row(label: String, is_marked: bool) -> ListItem<'static> {
    let indicator = if is_marked { "[x] " } else { "[ ] " };
    let indicator_style = if is_marked {
        Style::default().fg(ACCENT_SECONDARY).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    ListItem::new(Line::from(vec![
        Span::styled(indicator, indicator_style),
        Span::raw(label),
    ]))
}
