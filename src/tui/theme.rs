use ratatui::style::Color;

/// The two-valued theme toggle. Not persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    pub green: Color,
    pub red: Color,
    pub selection_bg: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Theme::light(),
            ThemeMode::Dark => Theme::dark(),
        }
    }

    /// Light palette: blue accent over near-white surfaces
    pub fn light() -> Self {
        Theme {
            background: Color::Rgb(0xF9, 0xFA, 0xFB),
            surface: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x11, 0x18, 0x27),
            text_bright: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x6B, 0x72, 0x80),
            accent: Color::Rgb(0x25, 0x63, 0xEB),
            green: Color::Rgb(0x05, 0x96, 0x69),
            red: Color::Rgb(0xEF, 0x44, 0x44),
            selection_bg: Color::Rgb(0xDB, 0xEA, 0xFE),
        }
    }

    /// Dark palette: same accents over a slate background
    pub fn dark() -> Self {
        Theme {
            background: Color::Rgb(0x0F, 0x17, 0x2A),
            surface: Color::Rgb(0x1E, 0x29, 0x3B),
            text: Color::Rgb(0xE5, 0xE7, 0xEB),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x94, 0xA3, 0xB8),
            accent: Color::Rgb(0x60, 0xA5, 0xFA),
            green: Color::Rgb(0x34, 0xD3, 0x99),
            red: Color::Rgb(0xF8, 0x71, 0x71),
            selection_bg: Color::Rgb(0x31, 0x41, 0x5C),
        }
    }
}
