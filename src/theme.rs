//! Color themes, selectable with `--theme`.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Muted modern palette (default)
    #[default]
    Nord,
    /// White on blue
    DosBlue,
    /// Amber on black
    AmberCrt,
    /// Green on black
    GreenPhosphor,
}

impl Theme {
    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Nord => ColorScheme::nord(),
            Theme::DosBlue => ColorScheme::dos_blue(),
            Theme::AmberCrt => ColorScheme::amber_crt(),
            Theme::GreenPhosphor => ColorScheme::green_phosphor(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nord" => Ok(Theme::Nord),
            "dos" | "dosblue" | "dos-blue" => Ok(Theme::DosBlue),
            "amber" | "ambercrt" | "amber-crt" => Ok(Theme::AmberCrt),
            "green" | "greenphosphor" | "green-phosphor" => Ok(Theme::GreenPhosphor),
            _ => Err(format!(
                "Unknown theme '{s}'. Available: nord, dos-blue, amber-crt, green-phosphor"
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Nord => write!(f, "nord"),
            Theme::DosBlue => write!(f, "dos-blue"),
            Theme::AmberCrt => write!(f, "amber-crt"),
            Theme::GreenPhosphor => write!(f, "green-phosphor"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Color,
    /// Primary text (display names, dates)
    pub text: Color,
    /// Secondary text (descriptions, hints)
    pub text_dim: Color,
    /// `@handle` text
    pub handle: Color,
    /// Search box and dropdown border
    pub focus_border: Color,
    pub unfocused_border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Status dot for blocks still in place
    pub status_active: Color,
    /// Status dot for lifted blocks
    pub status_inactive: Color,
    /// Spinner and busy hint
    pub busy: Color,
    pub debug_indicator: Color,
}

impl ColorScheme {
    pub fn nord() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::Gray,
            handle: Color::Cyan,
            focus_border: Color::Yellow,
            unfocused_border: Color::Gray,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            status_active: Color::Red,
            status_inactive: Color::DarkGray,
            busy: Color::Yellow,
            debug_indicator: Color::Magenta,
        }
    }

    pub fn dos_blue() -> Self {
        Self {
            background: Color::Blue,
            text: Color::White,
            text_dim: Color::LightBlue,
            handle: Color::LightCyan,
            focus_border: Color::Yellow,
            unfocused_border: Color::Cyan,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            status_active: Color::LightRed,
            status_inactive: Color::Gray,
            busy: Color::Yellow,
            debug_indicator: Color::LightMagenta,
        }
    }

    pub fn amber_crt() -> Self {
        let amber = Color::Rgb(255, 176, 0);
        let amber_bright = Color::Rgb(255, 200, 100);
        let amber_dim = Color::Rgb(180, 120, 0);

        Self {
            background: Color::Black,
            text: amber,
            text_dim: amber_dim,
            handle: amber_bright,
            focus_border: amber_bright,
            unfocused_border: amber_dim,
            selection_bg: amber,
            selection_fg: Color::Black,
            status_active: Color::Red, // red reads clearly against amber
            status_inactive: amber_dim,
            busy: amber_bright,
            debug_indicator: Color::Rgb(255, 100, 255),
        }
    }

    pub fn green_phosphor() -> Self {
        let green = Color::Rgb(0, 255, 0);
        let green_dim = Color::Rgb(0, 180, 0);
        let green_bright = Color::Rgb(100, 255, 100);

        Self {
            background: Color::Black,
            text: green,
            text_dim: green_dim,
            handle: green_bright,
            focus_border: green_bright,
            unfocused_border: green_dim,
            selection_bg: green,
            selection_fg: Color::Black,
            status_active: Color::Red,
            status_inactive: green_dim,
            busy: green_bright,
            debug_indicator: Color::Cyan,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::nord()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parsing() {
        assert_eq!("nord".parse::<Theme>().unwrap(), Theme::Nord);
        assert_eq!("NORD".parse::<Theme>().unwrap(), Theme::Nord);
        assert_eq!("dos-blue".parse::<Theme>().unwrap(), Theme::DosBlue);
        assert_eq!("amber".parse::<Theme>().unwrap(), Theme::AmberCrt);
        assert_eq!("green".parse::<Theme>().unwrap(), Theme::GreenPhosphor);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for theme in [Theme::Nord, Theme::DosBlue, Theme::AmberCrt, Theme::GreenPhosphor] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn status_colors_differ() {
        for theme in [Theme::Nord, Theme::DosBlue, Theme::AmberCrt, Theme::GreenPhosphor] {
            let c = theme.colors();
            assert_ne!(c.status_active, c.status_inactive, "{theme}");
        }
    }
}
