use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Status colors
    StatusTodo,
    StatusInProgress,
    StatusReview,
    StatusCompleted,

    // Priority colors
    PriorityLow,
    PriorityMedium,
    PriorityHigh,

    // Entity colors
    Workspace,
    Project,
    User,

    // UI colors
    Header,
    Border,
    Selection,
    Today,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Secondary,
    Muted,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub dark: bool,
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    /// Palette for light terminal backgrounds
    pub fn light() -> Self {
        let mut colors = Self::shared();

        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 76, b: 121 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Primary, Color::Black);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 40, g: 40, b: 40 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });
        colors.insert(SemanticColor::StatusTodo, Color::TrueColor { r: 90, g: 90, b: 90 });

        Self { dark: false, colors }
    }

    /// Palette for dark terminal backgrounds
    pub fn dark() -> Self {
        let mut colors = Self::shared();

        colors.insert(SemanticColor::Header, Color::BrightCyan);
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 100, g: 100, b: 100 });
        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 200, g: 200, b: 200 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 140, g: 140, b: 140 });
        colors.insert(SemanticColor::StatusTodo, Color::TrueColor { r: 180, g: 180, b: 180 });

        Self { dark: true, colors }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    fn shared() -> HashMap<SemanticColor, Color> {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::StatusInProgress, Color::Yellow);
        colors.insert(SemanticColor::StatusReview, Color::Magenta);
        colors.insert(SemanticColor::StatusCompleted, Color::Green);

        colors.insert(SemanticColor::PriorityLow, Color::Blue);
        colors.insert(SemanticColor::PriorityMedium, Color::Yellow);
        colors.insert(SemanticColor::PriorityHigh, Color::Red);

        colors.insert(SemanticColor::Workspace, Color::Cyan);
        colors.insert(SemanticColor::Project, Color::Magenta);
        colors.insert(SemanticColor::User, Color::Green);

        colors.insert(SemanticColor::Selection, Color::BrightYellow);
        colors.insert(SemanticColor::Today, Color::BrightRed);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        colors
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::light()
    }
}

lazy_static! {
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::light());
}

pub fn current_theme() -> ColorTheme {
    THEME.read().map(|t| t.clone()).unwrap_or_default()
}

pub fn set_theme(theme: ColorTheme) {
    if let Ok(mut guard) = THEME.write() {
        *guard = theme;
    }
}

/// Applies the persisted dark-mode preference.
pub fn apply_dark_mode(dark_mode: bool) {
    set_theme(ColorTheme::for_mode(dark_mode));
}

pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|t| t.get(semantic))
        .unwrap_or(Color::White)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.as_str().color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;
    use crate::models::{TaskPriority, TaskStatus};

    pub fn status_color(status: TaskStatus) -> SemanticColor {
        match status {
            TaskStatus::Todo => SemanticColor::StatusTodo,
            TaskStatus::InProgress => SemanticColor::StatusInProgress,
            TaskStatus::Review => SemanticColor::StatusReview,
            TaskStatus::Completed => SemanticColor::StatusCompleted,
        }
    }

    pub fn priority_color(priority: TaskPriority) -> SemanticColor {
        match priority {
            TaskPriority::Low => SemanticColor::PriorityLow,
            TaskPriority::Medium => SemanticColor::PriorityMedium,
            TaskPriority::High => SemanticColor::PriorityHigh,
        }
    }

    pub fn priority_symbol(priority: TaskPriority) -> &'static str {
        match priority {
            TaskPriority::Low => "◦",
            TaskPriority::Medium => "•",
            TaskPriority::High => "▲",
        }
    }
}
