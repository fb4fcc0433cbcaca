use super::mode::Mode;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};
use task_list::keybindings::KeybindingCache;
use task_list::storage::{load_tasks, save_tasks, KeyValueStore, UiCache};
use task_list::todo::{Filter, Task, TaskList};
use task_list::utils::line_buffer::LineBuffer;
use tracing::{debug, error};

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// In-place edit of one task. While it exists that task renders as an input
/// line instead of its text.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub task_id: String,
    pub buffer: LineBuffer,
}

/// Screen areas from the last frame, used to map mouse clicks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayout {
    pub input: Rect,
    pub filter_bar: Rect,
    pub list: Rect,
    pub status_bar: Rect,
}

pub struct AppState {
    pub tasks: TaskList,
    pub filter: Filter,
    store: Box<dyn KeyValueStore>,
    /// Index into the filtered view, not into `tasks`
    pub cursor_position: usize,
    pub mode: Mode,
    /// Contents of the add-task input
    pub input: LineBuffer,
    pub editing: Option<EditSession>,
    pub should_quit: bool,
    pub show_help: bool,
    pub help_scroll: u16,
    /// Largest useful help scroll offset, updated on each render
    pub help_max_scroll: u16,
    pub theme: Theme,
    pub keybindings: KeybindingCache,
    pub status_message: Option<(String, Instant)>,
    pub list_state: ListState,
    pub layout: ScreenLayout,
}

impl AppState {
    pub fn new(
        store: Box<dyn KeyValueStore>,
        theme: Theme,
        keybindings: KeybindingCache,
        ui_cache: Option<UiCache>,
    ) -> Self {
        let tasks = TaskList::with_tasks(load_tasks(store.as_ref()));

        // Filter always starts at All, so view index == collection index here
        let cursor_position = ui_cache
            .and_then(|cache| cache.selected_task_id)
            .and_then(|id| tasks.tasks().iter().position(|t| t.id == id))
            .unwrap_or(0);

        let mut state = Self {
            tasks,
            filter: Filter::default(),
            store,
            cursor_position,
            mode: Mode::Navigate,
            input: LineBuffer::new(),
            editing: None,
            should_quit: false,
            show_help: false,
            help_scroll: 0,
            help_max_scroll: 0,
            theme,
            keybindings,
            status_message: None,
            list_state: ListState::default(),
            layout: ScreenLayout::default(),
        };
        state.refresh();
        state
    }

    /// Tasks shown under the current filter.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.filtered(self.filter)
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.visible_tasks().get(self.cursor_position).copied()
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.selected_task().map(|t| t.id.clone())
    }

    pub fn counter_text(&self) -> String {
        format!("{} open / {} total", self.tasks.open_count(), self.tasks.len())
    }

    pub fn ui_cache(&self) -> UiCache {
        UiCache {
            selected_task_id: self.selected_task_id(),
        }
    }

    /// Synchronize after any change to the tasks or the filter: keep the
    /// cursor inside the filtered view and persist the whole collection.
    pub fn refresh(&mut self) {
        self.clamp_cursor();
        if let Err(e) = save_tasks(self.store.as_mut(), self.tasks.tasks()) {
            error!("Failed to save tasks: {e:#}");
        }
    }

    pub fn clamp_cursor(&mut self) {
        let visible = self.visible_tasks().len();
        if visible == 0 {
            self.cursor_position = 0;
        } else {
            self.cursor_position = self.cursor_position.min(visible - 1);
        }
        self.sync_list_state();
    }

    pub fn sync_list_state(&mut self) {
        if self.visible_tasks().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(self.cursor_position));
        }
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
        self.sync_list_state();
    }

    pub fn move_cursor_down(&mut self) {
        let visible = self.visible_tasks().len();
        if visible > 0 && self.cursor_position < visible - 1 {
            self.cursor_position += 1;
        }
        self.sync_list_state();
    }

    pub fn select_index(&mut self, index: usize) {
        self.cursor_position = index;
        self.clamp_cursor();
    }

    fn select_task(&mut self, id: &str) {
        if let Some(index) = self.visible_tasks().iter().position(|t| t.id == id) {
            self.cursor_position = index;
        }
    }

    pub fn add_task(&mut self, text: &str) -> bool {
        let Some(id) = self.tasks.add(text).map(|t| t.id.clone()) else {
            return false;
        };
        self.select_task(&id);
        self.refresh();
        true
    }

    pub fn toggle_task(&mut self, id: &str) {
        self.tasks.toggle(id);
        self.refresh();
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(&id);
        }
    }

    pub fn delete_task(&mut self, id: &str) {
        self.tasks.delete(id);
        self.refresh();
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(&id);
        }
    }

    pub fn clear_done(&mut self) {
        let removed = self.tasks.clear_done();
        self.refresh();
        if removed > 0 {
            self.set_status_message(format!(
                "Cleared {} done task{}",
                removed,
                if removed == 1 { "" } else { "s" }
            ));
        }
    }

    /// Ask before wiping everything. Does nothing when there is nothing to clear.
    pub fn request_clear_all(&mut self) {
        if !self.tasks.is_empty() {
            self.mode = Mode::ConfirmClearAll;
        }
    }

    pub fn confirm_clear_all(&mut self) {
        self.tasks.clear_all();
        self.mode = Mode::Navigate;
        self.refresh();
    }

    pub fn cancel_clear_all(&mut self) {
        self.mode = Mode::Navigate;
    }

    /// Switch filter, keeping the selected task selected when it stays visible.
    pub fn set_filter(&mut self, filter: Filter) {
        let selected = self.selected_task_id();
        self.filter = filter;
        self.cursor_position = 0;
        if let Some(id) = selected {
            self.select_task(&id);
        }
        debug!(%filter, "filter changed");
        self.refresh();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    pub fn focus_input(&mut self) {
        self.mode = Mode::Insert;
    }

    /// Add the input's text as a task and clear the input, staying in Insert.
    pub fn submit_input(&mut self) {
        let text = self.input.take();
        self.add_task(&text);
    }

    /// Escape from the input: discard what was typed.
    pub fn discard_input(&mut self) {
        self.input.clear();
        self.mode = Mode::Navigate;
    }

    pub fn begin_edit(&mut self, id: &str) -> bool {
        let Some(task) = self.tasks.get(id) else {
            return false;
        };
        self.editing = Some(EditSession {
            task_id: task.id.clone(),
            buffer: LineBuffer::with_text(task.text.clone()),
        });
        self.select_task(id);
        self.sync_list_state();
        self.mode = Mode::Edit;
        true
    }

    pub fn begin_edit_selected(&mut self) -> bool {
        match self.selected_task_id() {
            Some(id) => self.begin_edit(&id),
            None => false,
        }
    }

    /// Apply the edit. Blank text leaves the task unchanged.
    pub fn commit_edit(&mut self) {
        self.mode = Mode::Navigate;
        if let Some(session) = self.editing.take()
            && self.tasks.edit(&session.task_id, session.buffer.text())
        {
            self.refresh();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.mode = Mode::Navigate;
    }

    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_status_message(&mut self) {
        if let Some((_, time)) = &self.status_message
            && time.elapsed() > STATUS_MESSAGE_TTL
        {
            self.status_message = None;
        }
    }
}
