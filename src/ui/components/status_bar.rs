use crate::app::AppState;
use crate::app::mode::Mode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use task_list::keybindings::Action;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    if state.mode == Mode::ConfirmClearAll {
        render_confirm_clear_all(f, state, area);
        return;
    }

    if let Some((message, _)) = &state.status_message {
        render_status_message(f, message, area);
        return;
    }

    let left_content = format!(
        " {} | {} | {}",
        state.mode,
        state.filter.label(),
        state.counter_text()
    );

    let nav_hint = match state.mode {
        Mode::Insert => "Enter add  Esc clear".to_string(),
        Mode::Edit => "Enter save  Esc cancel".to_string(),
        _ => format!(
            "{} help  {} quit",
            state.keybindings.label_for(Action::ToggleHelp),
            state.keybindings.label_for(Action::Quit)
        ),
    };
    let version_text = format!("v{VERSION}");

    // Format: "{left_content} {nav_hint} {padding} {version_text} "
    let padding = area.width.saturating_sub(
        left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 4,
    );

    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {} ",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_confirm_clear_all(f: &mut Frame, state: &AppState, area: Rect) {
    let count = state.tasks.len();
    let prompt = format!(
        " Delete all {} task{}? (y/n) ",
        count,
        if count == 1 { "" } else { "s" }
    );

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(180, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(prompt.len() as u16);
    let status_line = format!("{}{:padding$}", prompt, "", padding = padding as usize);

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}

fn render_status_message(f: &mut Frame, message: &str, area: Rect) {
    let display_message = format!(" {message} ");

    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(0, 100, 0))
        .add_modifier(Modifier::BOLD);

    let padding = area.width.saturating_sub(display_message.len() as u16);
    let status_line = format!(
        "{}{:padding$}",
        display_message,
        "",
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, style)]));
    f.render_widget(status, area);
}
