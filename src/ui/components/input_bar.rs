use super::{cursor_line, cursor_style};
use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "What needs to be done?";

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.mode == Mode::Insert;
    let border_style = if focused {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.dim)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New task ")
        .border_style(border_style)
        .style(Style::default().bg(state.theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text_style = Style::default().fg(state.theme.foreground);
    let line = if focused {
        cursor_line(&state.input, inner.width, text_style, cursor_style())
    } else if state.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(state.theme.dim)))
    } else {
        // Draft kept after clicking away from the input
        Line::from(Span::styled(state.input.text().to_string(), text_style))
    };

    f.render_widget(Paragraph::new(line), inner);
}
