pub mod store;
pub mod tasks;
pub mod ui_cache;

pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use tasks::{load_tasks, save_tasks, STORAGE_KEY};
pub use ui_cache::UiCache;
