use crate::catalog::Rgb;
use crate::formatting::theme::{swatch, theme_color, ColorTheme, SemanticColor, ThemedColorize};
use colored::Color;

#[test]
fn test_default_theme() {
    let theme = ColorTheme::default();

    assert_eq!(theme.get(SemanticColor::PrayerCurrent), Color::Green);
    assert_eq!(theme.get(SemanticColor::PrayerLabel), Color::Cyan);
    assert_eq!(theme.get(SemanticColor::Error), Color::Red);
    assert_eq!(theme.get(SemanticColor::Warning), Color::Yellow);
}

#[test]
fn test_theme_override() {
    let mut theme = ColorTheme::new();
    theme.set(SemanticColor::PrayerNext, Color::Magenta);
    assert_eq!(theme.get(SemanticColor::PrayerNext), Color::Magenta);
}

#[test]
fn test_themed_colorize() {
    let text = "Maghrib";
    let colored = text.with_theme(SemanticColor::PrayerNext);

    assert!(format!("{}", colored).contains("Maghrib"));
}

#[test]
fn test_theme_color_function() {
    assert_eq!(theme_color(SemanticColor::Success), Color::Green);
}

#[test]
fn test_swatch_is_two_cells() {
    let block = swatch(Rgb(27, 42, 74));
    assert_eq!(&*block, "  ");
}

#[test]
fn test_light_mode_uses_dark_text() {
    let light = ColorTheme::for_mode(false);
    assert_eq!(light.get(SemanticColor::PrayerTime), Color::Black);
    assert_eq!(light.get(SemanticColor::Primary), Color::Black);
    assert_eq!(light.get(SemanticColor::Success), Color::Green);

    let dark = ColorTheme::for_mode(true);
    assert_eq!(dark.get(SemanticColor::PrayerTime), Color::BrightWhite);
    assert_eq!(dark.get(SemanticColor::Primary), Color::White);
}
