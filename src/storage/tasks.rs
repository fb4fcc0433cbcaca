use anyhow::Result;
use tracing::{debug, warn};

use super::KeyValueStore;
use crate::todo::Task;

/// Key the task collection is stored under.
pub const STORAGE_KEY: &str = "todo_tasks_v1";

/// Load the stored task collection.
///
/// A missing value, a read error or a value that is not an array of tasks all
/// yield an empty collection. The failure is only logged.
pub fn load_tasks(store: &dyn KeyValueStore) -> Vec<Task> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored tasks, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!("Could not read stored tasks, starting empty: {e:#}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Task>>(&raw) {
        Ok(tasks) => {
            debug!(count = tasks.len(), "loaded tasks");
            tasks
        }
        Err(e) => {
            warn!("Stored tasks are malformed, starting empty: {e}");
            Vec::new()
        }
    }
}

/// Serialize the full collection and overwrite the stored value.
pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &[Task]) -> Result<()> {
    let json = serde_json::to_string(tasks)?;
    store.set(STORAGE_KEY, &json)?;
    debug!(count = tasks.len(), "saved tasks");
    Ok(())
}
