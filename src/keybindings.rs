//! Navigate-mode key bindings.
//!
//! Every action has default keys. The `[keybindings]` table in the config file
//! can replace the keys of any action:
//!
//! ```toml
//! [keybindings]
//! toggle = "space"
//! delete = ["d", "ctrl+d"]
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    FocusInput,
    Edit,
    Toggle,
    Delete,
    ClearDone,
    ClearAll,
    FilterAll,
    FilterOpen,
    FilterDone,
    CycleFilter,
    ToggleHelp,
    Quit,
}

impl Action {
    pub const ALL: [Action; 14] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::FocusInput,
        Action::Edit,
        Action::Toggle,
        Action::Delete,
        Action::ClearDone,
        Action::ClearAll,
        Action::FilterAll,
        Action::FilterOpen,
        Action::FilterDone,
        Action::CycleFilter,
        Action::ToggleHelp,
        Action::Quit,
    ];

    /// Name used for the action in the config file
    pub fn config_name(self) -> &'static str {
        match self {
            Action::MoveUp => "move_up",
            Action::MoveDown => "move_down",
            Action::FocusInput => "focus_input",
            Action::Edit => "edit",
            Action::Toggle => "toggle",
            Action::Delete => "delete",
            Action::ClearDone => "clear_done",
            Action::ClearAll => "clear_all",
            Action::FilterAll => "filter_all",
            Action::FilterOpen => "filter_open",
            Action::FilterDone => "filter_done",
            Action::CycleFilter => "cycle_filter",
            Action::ToggleHelp => "help",
            Action::Quit => "quit",
        }
    }

    pub fn from_config_name(name: &str) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| action.config_name() == name.trim())
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::MoveUp => "Move selection up",
            Action::MoveDown => "Move selection down",
            Action::FocusInput => "Add a task",
            Action::Edit => "Edit selected task",
            Action::Toggle => "Toggle done",
            Action::Delete => "Delete selected task",
            Action::ClearDone => "Clear done tasks",
            Action::ClearAll => "Clear all tasks",
            Action::FilterAll => "Show all tasks",
            Action::FilterOpen => "Show open tasks",
            Action::FilterDone => "Show done tasks",
            Action::CycleFilter => "Cycle filter",
            Action::ToggleHelp => "Toggle this help",
            Action::Quit => "Quit",
        }
    }

    fn default_keys(self) -> &'static [&'static str] {
        match self {
            Action::MoveUp => &["k", "up"],
            Action::MoveDown => &["j", "down"],
            Action::FocusInput => &["a", "n"],
            Action::Edit => &["enter", "e"],
            Action::Toggle => &["x", "space"],
            Action::Delete => &["d", "delete"],
            Action::ClearDone => &["c"],
            Action::ClearAll => &["X"],
            Action::FilterAll => &["1"],
            Action::FilterOpen => &["2"],
            Action::FilterDone => &["3"],
            Action::CycleFilter => &["f", "tab"],
            Action::ToggleHelp => &["?"],
            Action::Quit => &["q"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }.normalized()
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }

    // Shift is already carried by the character itself ('X', '?') and by BackTab
    fn normalized(mut self) -> Self {
        match self.code {
            KeyCode::Char(c) if self.modifiers.contains(KeyModifiers::SHIFT) => {
                self.code = KeyCode::Char(c.to_ascii_uppercase());
                self.modifiers.remove(KeyModifiers::SHIFT);
            }
            KeyCode::BackTab => self.modifiers.remove(KeyModifiers::SHIFT),
            _ => {}
        }
        self
    }
}

impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty key".to_string());
        }

        // A lone "+" is the plus key, not a separator
        let (mods, key) = match s.rfind('+') {
            Some(idx) if idx + 1 < s.len() => (&s[..idx], &s[idx + 1..]),
            _ => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in mods.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                other => return Err(format!("Unknown modifier: {other}")),
            }
        }

        let code = match key.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            "tab" if modifiers.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" => KeyCode::PageUp,
            "pagedown" => KeyCode::PageDown,
            lower => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                        Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
                        _ => return Err(format!("Unknown key: {key}")),
                    },
                }
            }
        };

        Ok(KeyBinding::new(code, modifiers))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "Ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "Alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "Shift+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Esc => write!(f, "Esc"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::BackTab => write!(f, "Shift+Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Del"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PgUp"),
            KeyCode::PageDown => write!(f, "PgDn"),
            KeyCode::F(n) => write!(f, "F{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Key(s) configured for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeySpec {
    One(String),
    Many(Vec<String>),
}

impl KeySpec {
    fn keys(&self) -> Vec<&str> {
        match self {
            KeySpec::One(key) => vec![key.as_str()],
            KeySpec::Many(keys) => keys.iter().map(String::as_str).collect(),
        }
    }
}

/// Per-action overrides as written in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeybindingsConfig {
    pub overrides: BTreeMap<String, KeySpec>,
}

/// Resolved lookup table from key to action.
#[derive(Debug, Clone)]
pub struct KeybindingCache {
    navigate: HashMap<KeyBinding, Action>,
}

impl Default for KeybindingCache {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl KeybindingCache {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut bindings: BTreeMap<&'static str, Vec<KeyBinding>> = Action::ALL
            .into_iter()
            .map(|action| {
                let keys: Vec<KeyBinding> = action
                    .default_keys()
                    .iter()
                    .filter_map(|k| k.parse().ok())
                    .collect();
                (action.config_name(), keys)
            })
            .collect();

        for (name, spec) in &config.overrides {
            let Some(action) = Action::from_config_name(name) else {
                warn!(action = %name, "Ignoring keybinding for unknown action");
                continue;
            };

            let mut keys = Vec::new();
            for key in spec.keys() {
                match key.parse::<KeyBinding>() {
                    Ok(binding) => keys.push(binding),
                    Err(e) => warn!(action = %name, "Ignoring keybinding: {e}"),
                }
            }
            if !keys.is_empty() {
                bindings.insert(action.config_name(), keys);
            }
        }

        let mut navigate = HashMap::new();
        // Defaults first so an override that reuses a default key takes it over
        let (overridden, defaults): (Vec<_>, Vec<_>) = bindings
            .into_iter()
            .partition(|(name, _)| config.overrides.contains_key(*name));
        for (name, keys) in defaults.into_iter().chain(overridden) {
            if let Some(action) = Action::from_config_name(name) {
                for key in keys {
                    navigate.insert(key, action);
                }
            }
        }

        Self { navigate }
    }

    pub fn get_navigate_action(&self, event: &KeyEvent) -> Option<Action> {
        self.navigate.get(&KeyBinding::from_event(event)).copied()
    }

    /// Keys bound to `action`, for display.
    pub fn keys_for(&self, action: Action) -> Vec<KeyBinding> {
        let mut keys: Vec<KeyBinding> = self
            .navigate
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| k.to_string());
        keys
    }

    /// Short label like "x / Space" for the help overlay and status bar.
    pub fn label_for(&self, action: Action) -> String {
        self.keys_for(action)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(
            "x".parse::<KeyBinding>().unwrap(),
            KeyBinding::new(KeyCode::Char('x'), KeyModifiers::NONE)
        );
        assert_eq!(
            "space".parse::<KeyBinding>().unwrap().code,
            KeyCode::Char(' ')
        );
        assert_eq!("Enter".parse::<KeyBinding>().unwrap().code, KeyCode::Enter);
        assert_eq!("f5".parse::<KeyBinding>().unwrap().code, KeyCode::F(5));
        assert_eq!("+".parse::<KeyBinding>().unwrap().code, KeyCode::Char('+'));
    }

    #[test]
    fn test_parse_modifiers() {
        let binding: KeyBinding = "ctrl+d".parse().unwrap();
        assert_eq!(binding.code, KeyCode::Char('d'));
        assert_eq!(binding.modifiers, KeyModifiers::CONTROL);

        let binding: KeyBinding = "shift+x".parse().unwrap();
        assert_eq!(binding, KeyBinding::new(KeyCode::Char('X'), KeyModifiers::NONE));

        let binding: KeyBinding = "shift+tab".parse().unwrap();
        assert_eq!(binding.code, KeyCode::BackTab);
        assert_eq!(binding.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<KeyBinding>().is_err());
        assert!("hyper+x".parse::<KeyBinding>().is_err());
        assert!("notakey".parse::<KeyBinding>().is_err());
        assert!("f13".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn test_shifted_char_event_matches_plain_binding() {
        let cache = KeybindingCache::default();
        let event = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(cache.get_navigate_action(&event), Some(Action::ClearAll));

        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(cache.get_navigate_action(&event), Some(Action::ToggleHelp));
    }

    #[test]
    fn test_default_bindings() {
        let cache = KeybindingCache::default();
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('x'))), Some(Action::Toggle));
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char(' '))), Some(Action::Toggle));
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('2'))), Some(Action::FilterOpen));
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_every_action_has_a_default_key() {
        let cache = KeybindingCache::default();
        for action in Action::ALL {
            assert!(!cache.keys_for(action).is_empty(), "{action:?} has no key");
        }
    }

    #[test]
    fn test_config_name_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::from_config_name(action.config_name()), Some(action));
        }
        assert_eq!(Action::from_config_name("fly"), None);
    }

    #[test]
    fn test_override_replaces_defaults() {
        let config: KeybindingsConfig = toml::from_str(r#"toggle = "t""#).unwrap();
        let cache = KeybindingCache::from_config(&config);

        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('t'))), Some(Action::Toggle));
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('x'))), None);
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_override_with_list_and_taken_key() {
        let config: KeybindingsConfig = toml::from_str(r#"delete = ["x", "ctrl+d"]"#).unwrap();
        let cache = KeybindingCache::from_config(&config);

        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('x'))), Some(Action::Delete));
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(cache.get_navigate_action(&ctrl_d), Some(Action::Delete));
        // Toggle keeps its other default key
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char(' '))), Some(Action::Toggle));
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let config: KeybindingsConfig =
            toml::from_str("fly = \"z\"\ntoggle = \"notakey\"").unwrap();
        let cache = KeybindingCache::from_config(&config);

        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('z'))), None);
        assert_eq!(cache.get_navigate_action(&key(KeyCode::Char('x'))), Some(Action::Toggle));
    }

    #[test]
    fn test_label_for() {
        let cache = KeybindingCache::default();
        assert_eq!(cache.label_for(Action::ClearDone), "c");
        assert_eq!(cache.label_for(Action::Toggle), "Space / x");
    }
}
