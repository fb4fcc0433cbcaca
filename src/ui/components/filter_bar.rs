use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use task_list::todo::Filter;

const TAB_SEPARATOR: &str = " ";

fn tab_label(filter: Filter) -> String {
    format!(" {} ", filter.label())
}

/// Filter tab under `column`, counted from the left edge of the bar.
pub fn filter_at_column(column: u16) -> Option<Filter> {
    let mut x = 0u16;
    for filter in Filter::ALL {
        let width = tab_label(filter).len() as u16;
        if column >= x && column < x + width {
            return Some(filter);
        }
        x += width + TAB_SEPARATOR.len() as u16;
    }
    None
}

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let active_style = Style::default()
        .fg(state.theme.background)
        .bg(state.theme.accent)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(state.theme.foreground);

    let mut spans = Vec::new();
    let mut used = 0usize;
    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(TAB_SEPARATOR));
            used += TAB_SEPARATOR.len();
        }
        let label = tab_label(filter);
        used += label.len();
        let style = if filter == state.filter {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(label, style));
    }

    let counter = format!("{} ", state.counter_text());
    let padding = (area.width as usize).saturating_sub(used + counter.len());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(counter, Style::default().fg(state.theme.dim)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_at_column() {
        // " All " " Open " " Done "
        assert_eq!(filter_at_column(0), Some(Filter::All));
        assert_eq!(filter_at_column(4), Some(Filter::All));
        assert_eq!(filter_at_column(5), None);
        assert_eq!(filter_at_column(6), Some(Filter::Open));
        assert_eq!(filter_at_column(11), Some(Filter::Open));
        assert_eq!(filter_at_column(13), Some(Filter::Done));
        assert_eq!(filter_at_column(18), Some(Filter::Done));
        assert_eq!(filter_at_column(19), None);
    }
}
