use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::catalog::Rgb;

/// Semantic color definitions for consistent CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Prayer card
    PrayerNext,
    PrayerCurrent,
    PrayerTime,
    PrayerLabel,

    // UI colors
    Header,
    Border,
    Highlight,
    Error,
    Warning,
    Success,
    Info,

    // Text colors
    Primary,
    Secondary,
    Muted,
    Link,
}

/// Theme configuration for the CLI
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::PrayerNext, Color::TrueColor { r: 230, g: 190, b: 90 });
        colors.insert(SemanticColor::PrayerCurrent, Color::Green);
        colors.insert(SemanticColor::PrayerTime, Color::BrightWhite);
        colors.insert(SemanticColor::PrayerLabel, Color::Cyan);

        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 121, b: 96 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Highlight, Color::BrightYellow);
        colors.insert(SemanticColor::Error, Color::Red);
        colors.insert(SemanticColor::Warning, Color::Yellow);
        colors.insert(SemanticColor::Success, Color::Green);
        colors.insert(SemanticColor::Info, Color::Blue);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Secondary, Color::TrueColor { r: 180, g: 180, b: 180 });
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 110, g: 110, b: 110 });
        colors.insert(SemanticColor::Link, Color::Blue);

        Self { colors }
    }

    /// Palette for the given terminal background. Light backgrounds swap the
    /// near-white text colors for dark ones.
    pub fn for_mode(dark: bool) -> Self {
        let mut theme = Self::new();
        if !dark {
            theme.set(SemanticColor::PrayerNext, Color::TrueColor { r: 150, g: 105, b: 20 });
            theme.set(SemanticColor::PrayerTime, Color::Black);
            theme.set(SemanticColor::PrayerLabel, Color::Blue);
            theme.set(SemanticColor::Highlight, Color::Magenta);
            theme.set(SemanticColor::Primary, Color::Black);
            theme.set(SemanticColor::Secondary, Color::TrueColor { r: 70, g: 70, b: 70 });
            theme.set(SemanticColor::Muted, Color::TrueColor { r: 130, g: 130, b: 130 });
        }
        theme
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
        Self::new()
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

/// Set the global theme
pub fn set_theme(theme: ColorTheme) {
    if let Ok(mut current) = THEME.write() {
        *current = theme;
    }
}

/// Get a color from the current theme
pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME
        .read()
        .map(|theme| theme.get(semantic))
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
        self.color(theme_color(semantic))
    }
}

/// A two-cell block painted in `rgb`, for previewing catalog colors.
pub fn swatch(rgb: Rgb) -> colored::ColoredString {
    "  ".on_truecolor(rgb.0, rgb.1, rgb.2)
}
