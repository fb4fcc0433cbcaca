mod app;
mod cli;
mod ui;

use task_list::config;
use task_list::keybindings;
use task_list::storage;
use task_list::todo;
use task_list::utils;

use anyhow::{Result, bail};
use app::AppState;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use keybindings::KeybindingCache;
use std::fs;
use std::io::Write;
use std::panic;
use storage::{FileStore, KeyValueStore, UiCache, load_tasks, save_tasks};
use todo::{Filter, TaskList};
use ui::theme::Theme;
use utils::paths::{ensure_app_dir_exists, get_config_path, get_crash_log_path, get_logs_dir};

/// Install a panic hook that writes crash information to a log file
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {timestamp} ===\n");

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }

            crash_report.push_str(&format!(
                "\nBacktrace:\n{}\n",
                std::backtrace::Backtrace::force_capture()
            ));
            crash_report.push('\n');

            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        // Call the default hook (prints to stderr)
        default_hook(panic_info);
    }));
}

/// Initialize file-based logging for the TUI mode.
///
/// Logs are written to ~/.task-list/logs/tasklist.log, rolling daily.
/// Log level can be controlled with RUST_LOG env var (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {e}");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "tasklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn main() -> Result<()> {
    // Install crash handler first thing
    install_crash_handler();
    ensure_app_dir_exists()?;

    let cli = Cli::parse();
    let config = Config::load()?;
    let mut store = FileStore::new(config.resolved_store_dir()?);

    match cli.command {
        Some(Commands::Add { text }) => {
            add_task(&mut store, &text)?;
            println!("✓ Task added");
        }
        Some(Commands::List { filter }) => println!("{}", list_tasks(&store, filter)),
        Some(Commands::ClearDone) => {
            let removed = clear_done_tasks(&mut store)?;
            println!(
                "✓ Cleared {removed} done task{}",
                if removed == 1 { "" } else { "s" }
            );
        }
        Some(Commands::Config) => handle_config()?,
        None => {
            // Guard must be kept alive for the duration of the app
            let _log_guard = init_file_logging();

            tracing::info!(store = %store.dir().display(), "tasklist starting");

            // Load UI cache for restoring the selected task
            let ui_cache = UiCache::load().ok();

            let theme = Theme::from_config(&config);
            let keybindings = KeybindingCache::from_config(&config.keybindings);

            let state = AppState::new(Box::new(store), theme, keybindings, ui_cache);
            let state = ui::run_tui(state)?;

            if let Err(e) = state.ui_cache().save() {
                tracing::warn!("Failed to save UI cache: {e:#}");
            }

            tracing::info!("tasklist exiting gracefully");
        }
    }

    Ok(())
}

fn add_task(store: &mut dyn KeyValueStore, text: &str) -> Result<()> {
    let mut list = TaskList::with_tasks(load_tasks(&*store));

    if list.add(text).is_none() {
        bail!("Task text cannot be empty");
    }
    save_tasks(store, list.tasks())
}

/// One `[x] text` / `[ ] text` line per task in the view, then the counter.
fn list_tasks(store: &dyn KeyValueStore, filter: Filter) -> String {
    let list = TaskList::with_tasks(load_tasks(store));
    let tasks = list.filtered(filter);

    let mut out = String::new();
    if tasks.is_empty() {
        match filter {
            Filter::All => out.push_str("No tasks yet!\n"),
            _ => out.push_str(&format!("No {filter} tasks.\n")),
        }
    }
    for task in &tasks {
        let checkbox = if task.done { "[x]" } else { "[ ]" };
        out.push_str(&format!("{checkbox} {}\n", task.text));
    }

    out.push_str(&format!("\n{} open / {} total", list.open_count(), list.len()));
    out
}

fn clear_done_tasks(store: &mut dyn KeyValueStore) -> Result<usize> {
    let mut list = TaskList::with_tasks(load_tasks(&*store));

    let removed = list.clear_done();
    save_tasks(store, list.tasks())?;

    Ok(removed)
}

fn handle_config() -> Result<()> {
    let path = get_config_path()?;

    if path.exists() {
        println!("Config file: {}", path.display());
    } else {
        Config::default().save()?;
        println!("Created default config: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use storage::{MemoryStore, STORAGE_KEY};

    fn store_with(texts: &[&str]) -> MemoryStore {
        let mut store = MemoryStore::new();
        // Added oldest first so the list reads newest first
        for text in texts.iter().rev() {
            add_task(&mut store, text).unwrap();
        }
        store
    }

    #[test]
    fn test_add_saves_task() {
        let mut store = MemoryStore::new();
        add_task(&mut store, "  Buy milk ").unwrap();

        let tasks = load_tasks(&store);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].done);
    }

    #[test]
    fn test_add_blank_fails_and_saves_nothing() {
        let mut store = store_with(&["Buy milk"]);
        let before = store.get(STORAGE_KEY).unwrap();

        assert!(add_task(&mut store, "   ").is_err());
        assert_eq!(store.get(STORAGE_KEY).unwrap(), before);

        let mut empty = MemoryStore::new();
        assert!(add_task(&mut empty, "").is_err());
        assert_eq!(empty.get(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_list_prints_rows_and_counter() {
        let mut store = store_with(&["Call mom", "Buy milk"]);
        let mut list = TaskList::with_tasks(load_tasks(&store));
        let id = list.tasks()[1].id.clone();
        list.toggle(&id);
        save_tasks(&mut store, list.tasks()).unwrap();

        assert_eq!(
            list_tasks(&store, Filter::All),
            "[ ] Call mom\n[x] Buy milk\n\n1 open / 2 total"
        );
        assert_eq!(list_tasks(&store, Filter::Done), "[x] Buy milk\n\n1 open / 2 total");
        assert_eq!(list_tasks(&store, Filter::Open), "[ ] Call mom\n\n1 open / 2 total");
    }

    #[test]
    fn test_list_empty_views() {
        let store = MemoryStore::new();
        assert_eq!(list_tasks(&store, Filter::All), "No tasks yet!\n\n0 open / 0 total");

        let store = store_with(&["a"]);
        assert_eq!(list_tasks(&store, Filter::Done), "No done tasks.\n\n1 open / 1 total");
    }

    #[test]
    fn test_clear_done_reports_count() {
        let mut store = store_with(&["a", "b", "c"]);
        let mut list = TaskList::with_tasks(load_tasks(&store));
        for i in [0, 2] {
            let id = list.tasks()[i].id.clone();
            list.toggle(&id);
        }
        save_tasks(&mut store, list.tasks()).unwrap();

        assert_eq!(clear_done_tasks(&mut store).unwrap(), 2);
        let remaining: Vec<String> = load_tasks(&store).into_iter().map(|t| t.text).collect();
        assert_eq!(remaining, vec!["b"]);

        assert_eq!(clear_done_tasks(&mut store).unwrap(), 0);
    }
}
