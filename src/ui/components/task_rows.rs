use super::{cursor_line, cursor_style};
use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use task_list::todo::{Filter, Task};
use task_list::utils::unicode::{display_width, truncate_to_width};

const CHECKBOX_WIDTH: u16 = 4;
const EDIT_LABEL: &str = " edit ";
const DELETE_LABEL: &str = " del ";

/// Part of a task row hit by a mouse click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowZone {
    Checkbox,
    Text,
    Edit,
    Delete,
}

fn controls_width() -> u16 {
    (EDIT_LABEL.len() + DELETE_LABEL.len()) as u16
}

/// Rows area inside the list border.
pub fn inner_area(area: Rect) -> Rect {
    area.inner(Margin {
        vertical: 1,
        horizontal: 1,
    })
}

/// Zone under `column` of a row `width` columns wide. Columns are relative to
/// the start of the row.
pub fn zone_at(column: u16, width: u16) -> RowZone {
    if column < CHECKBOX_WIDTH {
        RowZone::Checkbox
    } else if column >= width.saturating_sub(DELETE_LABEL.len() as u16) {
        RowZone::Delete
    } else if column >= width.saturating_sub(controls_width()) {
        RowZone::Edit
    } else {
        RowZone::Text
    }
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No tasks yet. Press a to add one.",
        Filter::Open => "No open tasks.",
        Filter::Done => "No done tasks.",
    }
}

fn row_line(state: &AppState, task: &Task, text_width: usize) -> Line<'static> {
    let theme = &state.theme;

    let (checkbox, checkbox_style) = if task.done {
        ("[x] ", Style::default().fg(theme.done))
    } else {
        ("[ ] ", Style::default().fg(theme.accent))
    };
    let mut spans = vec![Span::styled(checkbox, checkbox_style)];

    let used = match state.editing.as_ref().filter(|s| s.task_id == task.id) {
        Some(session) => {
            let line = cursor_line(
                &session.buffer,
                text_width as u16,
                Style::default().fg(theme.foreground),
                cursor_style(),
            );
            let width = line.width();
            spans.extend(line.spans);
            width
        }
        None => {
            let text = truncate_to_width(&task.text, text_width);
            let style = if task.done {
                Style::default()
                    .fg(theme.done)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.foreground)
            };
            let width = display_width(&text);
            spans.push(Span::styled(text, style));
            width
        }
    };

    spans.push(Span::raw(" ".repeat(text_width.saturating_sub(used))));
    spans.push(Span::styled(EDIT_LABEL, Style::default().fg(theme.accent)));
    spans.push(Span::styled(DELETE_LABEL, Style::default().fg(theme.delete)));
    Line::from(spans)
}

pub fn render(f: &mut Frame, state: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Tasks · {} ", state.filter.label()))
        .border_style(Style::default().fg(state.theme.dim))
        .style(Style::default().bg(state.theme.background));

    if state.visible_tasks().is_empty() {
        let inner = inner_area(area);
        f.render_widget(block, area);
        let message = Paragraph::new(Line::from(empty_message(state.filter)).centered())
            .style(Style::default().fg(state.theme.dim));
        f.render_widget(message, inner);
        return;
    }

    let text_width = inner_area(area)
        .width
        .saturating_sub(CHECKBOX_WIDTH + controls_width()) as usize;

    let items: Vec<ListItem> = state
        .visible_tasks()
        .into_iter()
        .map(|task| ListItem::new(row_line(state, task, text_width)))
        .collect();

    // No highlight symbol, so click zones line up with the rendered columns
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(state.theme.selection_bg));

    f.render_stateful_widget(list, area, &mut state.list_state);
}
