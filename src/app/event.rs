use super::mode::Mode;
use super::state::AppState;
use crate::ui::components::{filter_bar, task_rows};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use task_list::keybindings::Action;
use task_list::todo::Filter;
use task_list::utils::line_buffer::LineBuffer;

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Result<()> {
    // Handle help overlay scrolling when help is visible
    if state.show_help {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                state.help_scroll = state.help_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if state.help_scroll < state.help_max_scroll {
                    state.help_scroll = state.help_scroll.saturating_add(1);
                }
            }
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
                state.show_help = false;
                state.help_scroll = 0;
            }
            _ => {}
        }
        return Ok(());
    }

    match state.mode {
        Mode::Navigate => handle_navigate_mode(key, state),
        Mode::Insert => handle_insert_mode(key, state),
        Mode::Edit => handle_edit_mode(key, state),
        Mode::ConfirmClearAll => handle_confirm_clear_all_mode(key, state),
    }
    Ok(())
}

fn handle_navigate_mode(key: KeyEvent, state: &mut AppState) {
    if let Some(action) = state.keybindings.get_navigate_action(&key) {
        execute_navigate_action(action, state);
    }
}

fn execute_navigate_action(action: Action, state: &mut AppState) {
    match action {
        Action::MoveUp => state.move_cursor_up(),
        Action::MoveDown => state.move_cursor_down(),
        Action::FocusInput => state.focus_input(),
        Action::Edit => {
            state.begin_edit_selected();
        }
        Action::Toggle => state.toggle_selected(),
        Action::Delete => state.delete_selected(),
        Action::ClearDone => state.clear_done(),
        Action::ClearAll => state.request_clear_all(),
        Action::FilterAll => state.set_filter(Filter::All),
        Action::FilterOpen => state.set_filter(Filter::Open),
        Action::FilterDone => state.set_filter(Filter::Done),
        Action::CycleFilter => state.cycle_filter(),
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            state.help_scroll = 0;
        }
        Action::Quit => state.should_quit = true,
    }
}

/// Keys shared by the add-task input and the in-place editor. Returns false
/// for keys it does not handle.
fn apply_line_edit(key: &KeyEvent, buffer: &mut LineBuffer) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left if alt || ctrl => buffer.move_word_left(),
        KeyCode::Right if alt || ctrl => buffer.move_word_right(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        KeyCode::Char('a') if ctrl => buffer.move_home(),
        KeyCode::Char('e') if ctrl => buffer.move_end(),
        KeyCode::Char('u') if ctrl => buffer.clear(),
        KeyCode::Char(_) if ctrl || alt => return false,
        KeyCode::Char(c) => buffer.insert_char(c),
        _ => return false,
    }
    true
}

fn handle_insert_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => state.submit_input(),
        KeyCode::Esc => state.discard_input(),
        _ => {
            apply_line_edit(&key, &mut state.input);
        }
    }
}

fn handle_edit_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Enter => state.commit_edit(),
        KeyCode::Esc => state.cancel_edit(),
        _ => {
            if let Some(session) = state.editing.as_mut() {
                apply_line_edit(&key, &mut session.buffer);
            } else {
                state.cancel_edit();
            }
        }
    }
}

fn handle_confirm_clear_all_mode(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.confirm_clear_all(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.cancel_clear_all(),
        _ => {}
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

pub fn handle_mouse_event(mouse: MouseEvent, state: &mut AppState) -> Result<()> {
    if state.show_help {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                state.help_scroll = state.help_scroll.saturating_sub(3);
            }
            MouseEventKind::ScrollDown => {
                state.help_scroll = state.help_scroll.saturating_add(3).min(state.help_max_scroll);
            }
            _ => {}
        }
        return Ok(());
    }

    // The editor and the confirmation prompt own the input until resolved
    if matches!(state.mode, Mode::Edit | Mode::ConfirmClearAll) {
        return Ok(());
    }

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            for _ in 0..3 {
                state.move_cursor_up();
            }
        }
        MouseEventKind::ScrollDown => {
            for _ in 0..3 {
                state.move_cursor_down();
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(mouse.column, mouse.row, state);
        }
        _ => {}
    }
    Ok(())
}

fn handle_left_click(column: u16, row: u16, state: &mut AppState) {
    let layout = state.layout;

    if contains(layout.input, column, row) {
        state.focus_input();
        return;
    }

    // Clicking anywhere else leaves the input, keeping what was typed
    if state.mode == Mode::Insert {
        state.mode = Mode::Navigate;
    }

    if contains(layout.status_bar, column, row) {
        state.status_message = None;
        return;
    }

    if contains(layout.filter_bar, column, row) {
        if let Some(filter) = filter_bar::filter_at_column(column - layout.filter_bar.x) {
            state.set_filter(filter);
        }
        return;
    }

    if contains(layout.list, column, row) {
        let inner = task_rows::inner_area(layout.list);
        if !contains(inner, column, row) {
            return;
        }

        let index = state.list_state.offset() + (row - inner.y) as usize;
        let Some(id) = state.visible_tasks().get(index).map(|t| t.id.clone()) else {
            return;
        };
        state.select_index(index);

        match task_rows::zone_at(column - inner.x, inner.width) {
            task_rows::RowZone::Checkbox => state.toggle_task(&id),
            task_rows::RowZone::Text | task_rows::RowZone::Edit => {
                state.begin_edit(&id);
            }
            task_rows::RowZone::Delete => state.delete_task(&id),
        }
    }
}
