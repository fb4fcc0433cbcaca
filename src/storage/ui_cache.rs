use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::utils::paths::get_ui_cache_path;

/// UI state remembered between sessions. The filter is not kept; every
/// session starts on All.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiCache {
    /// The id of the task that was selected on exit
    #[serde(default)]
    pub selected_task_id: Option<String>,
}

impl UiCache {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_ui_cache_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&get_ui_cache_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cache: UiCache = serde_json::from_str(&content)?;
        Ok(cache)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
