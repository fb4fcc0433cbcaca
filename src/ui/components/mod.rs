pub mod filter_bar;
pub mod input_bar;
pub mod status_bar;
pub mod task_rows;

use crate::app::AppState;
use crate::app::state::ScreenLayout;
use task_list::keybindings::Action;
use task_list::utils::line_buffer::LineBuffer;
use task_list::utils::unicode::{display_width, next_char_boundary, truncate_to_width};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

pub fn render(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Filter bar
            Constraint::Min(1),    // Task list
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    // Remembered for mouse hit testing
    state.layout = ScreenLayout {
        input: chunks[0],
        filter_bar: chunks[1],
        list: chunks[2],
        status_bar: chunks[3],
    };

    input_bar::render(f, state, chunks[0]);
    filter_bar::render(f, state, chunks[1]);
    task_rows::render(f, state, chunks[2]);
    status_bar::render(f, state, chunks[3]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

/// Byte offset where the visible part of a single-line input starts, so the
/// cursor stays on screen when the text is wider than `width` columns.
pub fn window_start(text: &str, cursor: usize, width: usize) -> usize {
    let mut start = 0;
    // One column is reserved for the cursor block
    while start < cursor && display_width(&text[start..cursor]) >= width {
        start = next_char_boundary(text, start);
    }
    start
}

/// A line buffer rendered with a block cursor, scrolled to fit `width`.
pub fn cursor_line(buffer: &LineBuffer, width: u16, style: Style, cursor_style: Style) -> Line<'static> {
    let text = buffer.text();
    let cursor = buffer.cursor();
    let start = window_start(text, cursor, width as usize);
    let next = next_char_boundary(text, cursor);

    let cursor_char = if cursor < text.len() {
        &text[cursor..next]
    } else {
        " "
    };

    let before = &text[start..cursor];
    let remaining = (width as usize).saturating_sub(display_width(before) + display_width(cursor_char));

    Line::from(vec![
        Span::styled(before.to_string(), style),
        Span::styled(cursor_char.to_string(), cursor_style),
        Span::styled(truncate_to_width(&text[next..], remaining), style),
    ])
}

pub fn cursor_style() -> Style {
    Style::default().bg(Color::Yellow).fg(Color::Black)
}

fn help_entry(keys: &str, description: &str, key_style: Style, desc_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("    {keys:<16}"), key_style),
        Span::styled(description.to_string(), desc_style),
    ])
}

fn render_help_overlay(f: &mut Frame, state: &mut AppState) {
    let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(state.theme.foreground);
    let section_style = Style::default().fg(state.theme.accent).add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(state.theme.dim);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "  Task List Help",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    )]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("  ── Tasks ──", section_style)));
    for action in Action::ALL {
        let keys = state.keybindings.label_for(action);
        if keys.is_empty() {
            continue;
        }
        lines.push(help_entry(&keys, action.description(), key_style, desc_style));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("  ── Input & Edit ──", section_style)));
    for (keys, description) in [
        ("Enter", "Add task / save edit"),
        ("Esc", "Clear input / cancel edit"),
        ("← / →", "Move cursor"),
        ("Alt+← / Alt+→", "Move by word"),
        ("Home / Ctrl+a", "Go to start of line"),
        ("End / Ctrl+e", "Go to end of line"),
        ("Ctrl+u", "Clear line"),
        ("Backspace", "Delete character"),
    ] {
        lines.push(help_entry(keys, description, key_style, desc_style));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("  ── Mouse ──", section_style)));
    for (keys, description) in [
        ("[ ] / [x]", "Toggle done"),
        ("Text / edit", "Edit task"),
        ("del", "Delete task"),
        ("Filter tab", "Change filter"),
        ("Wheel", "Move selection"),
    ] {
        lines.push(help_entry(keys, description, key_style, desc_style));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(vec![Span::styled(
        "  ↑/↓ or j/k to scroll • Esc or ? to close",
        dim_style,
    )]));

    let total_lines = lines.len() as u16;

    let area = centered_rect(65, 80, f.area());
    let inner_height = area.height.saturating_sub(2); // Account for borders

    let max_scroll = total_lines.saturating_sub(inner_height);
    state.help_max_scroll = max_scroll;
    let scroll_offset = state.help_scroll.min(max_scroll) as usize;

    let visible_items: Vec<ListItem> = lines
        .into_iter()
        .skip(scroll_offset)
        .take(inner_height as usize)
        .map(ListItem::new)
        .collect();

    let list_widget = List::new(visible_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_bottom(Line::from(" ↑↓ scroll ").centered())
            .style(Style::default().bg(state.theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(list_widget, area);

    if total_lines > inner_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));

        // content_length is the scrollable range, not the line count
        let mut scrollbar_state = ScrollbarState::new(max_scroll as usize + 1).position(scroll_offset);

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
