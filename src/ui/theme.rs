use ratatui::style::Color;
use task_list::config::Config;

#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub done: Color,
    pub delete: Color,
    pub dim: Color,
    pub selection_bg: Color,
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            background: Color::Reset,
            foreground: Color::White,
            accent: Color::Cyan,
            done: Color::DarkGray,
            delete: Color::Red,
            dim: Color::DarkGray,
            selection_bg: Color::Rgb(50, 50, 70),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::White,
            accent: Color::Cyan,
            done: Color::DarkGray,
            delete: Color::Red,
            dim: Color::DarkGray,
            selection_bg: Color::Rgb(45, 45, 60),
            status_bar_bg: Color::Rgb(40, 40, 40),
            status_bar_fg: Color::White,
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::White,
            foreground: Color::Black,
            accent: Color::Blue,
            done: Color::Gray,
            delete: Color::Rgb(200, 50, 50), // Darker red for light theme
            dim: Color::Gray,
            selection_bg: Color::Rgb(210, 225, 245),
            status_bar_bg: Color::LightBlue,
            status_bar_fg: Color::Black,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.theme.as_str() {
            "dark" => Self::dark(),
            "light" => Self::light(),
            _ => Self::default_theme(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
