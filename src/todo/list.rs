use super::{filtered_view, Filter, Task};
use tracing::debug;

/// The task collection, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn open_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_open()).count()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        filtered_view(&self.tasks, filter)
    }

    /// Add a task at the front. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<&Task> {
        let clean = text.trim();
        if clean.is_empty() {
            return None;
        }

        let task = Task::new(clean.to_string());
        debug!(id = %task.id, "add task");
        self.tasks.insert(0, task);
        self.tasks.first()
    }

    /// Flip `done` on the task with `id`. Returns false if there is no such task.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.toggle();
                debug!(id, done = task.done, "toggle task");
                true
            }
            None => false,
        }
    }

    /// Replace the text of the task with `id`.
    ///
    /// The new text is trimmed; if nothing remains the edit is discarded and
    /// the task keeps its old text.
    pub fn edit(&mut self, id: &str, new_text: &str) -> bool {
        let clean = new_text.trim();
        if clean.is_empty() {
            debug!(id, "edit discarded: empty text");
            return false;
        }

        match self.get_mut(id) {
            Some(task) => {
                task.text = clean.to_string();
                debug!(id, "edit task");
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        debug!(id, "delete task");
        Some(self.tasks.remove(index))
    }

    /// Remove every done task, returning how many were removed.
    pub fn clear_done(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.is_open());
        let removed = before - self.tasks.len();
        debug!(removed, "clear done tasks");
        removed
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        debug!(removed, "clear all tasks");
        removed
    }
}
