// Theme system for the TUI
//
// Two built-in palettes selected by name from the [ui] config section.

use crate::search::NotifyLevel;
use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a theme name from config; unknown names fall back to dark
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub muted: Color,

    // Card labels ("Capital:", "Population:", ...)
    pub label: Color,

    // Notification levels
    pub warning: Color,
    pub info: Color,
    pub failure: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,

            title: Color::Cyan,
            status_bar: Color::Green,
            muted: Color::DarkGray,

            label: Color::Yellow,

            warning: Color::Yellow,
            info: Color::LightBlue,
            failure: Color::Red,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            muted: Color::Gray,

            label: Color::Magenta,

            warning: Color::Rgb(184, 134, 11), // Dark goldenrod
            info: Color::Blue,
            failure: Color::Red,
        }
    }

    /// Accent color for a notification
    pub fn notify_color(&self, level: NotifyLevel) -> Color {
        match level {
            NotifyLevel::Warning => self.warning,
            NotifyLevel::Info => self.info,
            NotifyLevel::Failure => self.failure,
        }
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    /// Get style for borders
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}
