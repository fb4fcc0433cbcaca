use anyhow::{anyhow, Result};
use std::fs;
use std::path::PathBuf;

pub fn get_task_list_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".task-list"))
}

/// Default directory of the key-value store, used unless `store_dir` is configured.
pub fn get_store_dir() -> Result<PathBuf> {
    let app_dir = get_task_list_dir()?;
    Ok(app_dir.join("store"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_task_list_dir()?;
    Ok(app_dir.join("config.toml"))
}

pub fn get_ui_cache_path() -> Result<PathBuf> {
    let app_dir = get_task_list_dir()?;
    Ok(app_dir.join("ui_cache.json"))
}

pub fn get_logs_dir() -> Result<PathBuf> {
    let app_dir = get_task_list_dir()?;
    Ok(app_dir.join("logs"))
}

pub fn get_crash_log_path() -> Result<PathBuf> {
    let app_dir = get_task_list_dir()?;
    Ok(app_dir.join("crash.log"))
}

pub fn ensure_app_dir_exists() -> Result<()> {
    let app_dir = get_task_list_dir()?;

    if !app_dir.exists() {
        fs::create_dir_all(&app_dir)?;
    }

    Ok(())
}
