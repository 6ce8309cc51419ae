use colored::*;

use super::theme::{swatch, SemanticColor, ThemedColorize};
use super::utils::*;
use crate::catalog::{
    language_label, method_label, translation_label, BACKGROUND_IMAGES, CALCULATION_METHODS,
    SOLID_COLORS, TRANSLATIONS,
};
use crate::display::PrayerDisplay;
use crate::models::{BackgroundKind, BackgroundSettings, Settings};

const COLUMN_WIDTH: usize = 11;

/// Print the prayer card horizontally: one column per prayer.
pub fn print_prayer_card(display: &PrayerDisplay) {
    let width = COLUMN_WIDTH * display.rows.len();

    println!("\n{}", "═".repeat(width).with_theme(SemanticColor::Header));
    if let Some(date) = &display.date {
        println!("{}", center(date, width).bold());
    }

    let mut icons = String::new();
    let mut labels = String::new();
    let mut times = String::new();
    let mut marks = String::new();

    for row in &display.rows {
        let label = center(&truncate(row.label, COLUMN_WIDTH - 1), COLUMN_WIDTH);
        let time = center(&row.time, COLUMN_WIDTH);
        let icon = center(row.icon, COLUMN_WIDTH);

        if row.is_next {
            icons.push_str(&icon.with_theme(SemanticColor::PrayerNext).bold().to_string());
            labels.push_str(&label.with_theme(SemanticColor::PrayerNext).bold().to_string());
            times.push_str(&time.with_theme(SemanticColor::PrayerNext).bold().to_string());
            marks.push_str(&center("next", COLUMN_WIDTH).with_theme(SemanticColor::PrayerNext).to_string());
        } else if row.is_current {
            icons.push_str(&icon.with_theme(SemanticColor::PrayerCurrent).to_string());
            labels.push_str(&label.with_theme(SemanticColor::PrayerCurrent).to_string());
            times.push_str(&time.with_theme(SemanticColor::PrayerCurrent).to_string());
            marks.push_str(&center("now", COLUMN_WIDTH).with_theme(SemanticColor::PrayerCurrent).to_string());
        } else {
            icons.push_str(&icon.with_theme(SemanticColor::Muted).to_string());
            labels.push_str(&label.with_theme(SemanticColor::PrayerLabel).to_string());
            times.push_str(&time.with_theme(SemanticColor::PrayerTime).to_string());
            marks.push_str(&" ".repeat(COLUMN_WIDTH));
        }
    }

    println!("{}", "─".repeat(width).dimmed());
    println!("{}", icons);
    println!("{}", labels);
    println!("{}", times);
    println!("{}", marks);
    println!("{}", "─".repeat(width).dimmed());

    if let Some(countdown) = &display.countdown {
        let prefix = match display.next_row() {
            Some(next) => format!("{} in ", next.label),
            None => String::new(),
        };
        println!("{}", center(&format!("{}{}", prefix, countdown), width).with_theme(SemanticColor::Highlight));
    }
    println!("{}", "═".repeat(width).with_theme(SemanticColor::Header));
}

pub fn describe_background(background: &BackgroundSettings) -> String {
    match background.kind() {
        BackgroundKind::Image => format!(
            "image {} ({} opacity)",
            background.selected_id(),
            format_opacity(background.opacity())
        ),
        BackgroundKind::Color => format!("color {}", background.selected_id()),
    }
}

pub fn print_settings(settings: &Settings) {
    println!("\n{}", "Settings".with_theme(SemanticColor::Header).bold());
    println!("{}", "═".repeat(60).with_theme(SemanticColor::Header));

    let field = |name: &str| format!("{:<22}", name).dimmed();

    println!("{}{} ({})", field("Calculation method"), method_label(settings.calculation_method).cyan(), settings.calculation_method);
    println!("{}{}", field("Language"), language_label(&settings.language));
    println!("{}{}", field("Theme"), settings.theme.label());
    println!("{}{}", field("Notifications"), format_toggle(settings.notifications));
    println!("{}{}", field("Ezan sound"), format_toggle(settings.ezan_sound));
    println!("{}{}", field("Translation"), translation_label(&settings.selected_translation));
    println!("{}{}", field("Location"), format_location(settings.location.as_ref()));
    println!("{}{}", field("Location mode"), settings.location_mode.label());
    println!("{}{}", field("Background"), describe_background(&settings.background));
    println!("{}{}", field("Card opacity"), format_opacity(settings.card_opacity));

    println!("{}", "═".repeat(60).with_theme(SemanticColor::Header));
}

pub fn print_backgrounds(current: &BackgroundSettings) {
    let marker = |active: bool| if active { "●".green().bold() } else { "○".dimmed() };

    println!("\n{}", "Images".bold());
    for image in BACKGROUND_IMAGES.iter() {
        let active = current.image_id() == Some(image.id);
        println!(
            "  {} {} {:<18} {}",
            marker(active),
            swatch(image.accent_rgb()),
            image.id.cyan(),
            image.name
        );
    }

    println!("\n{}", "Colors".bold());
    for color in SOLID_COLORS.iter() {
        let active = current.color_id() == Some(color.id);
        println!(
            "  {} {} {:<18} {} {}",
            marker(active),
            swatch(color.rgb()),
            color.id.cyan(),
            color.name,
            color.hex.dimmed()
        );
    }
}

pub fn print_methods(current: i32) {
    println!("{}", "Calculation methods:".bold());
    for method in CALCULATION_METHODS.iter() {
        let line = format!("  {:>3}  {} ({})", method.id, method.name, method.region);
        if method.id == current {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_translations(current: &str) {
    println!("{}", "Translations:".bold());
    for translation in TRANSLATIONS.iter() {
        let line = format!("  {:<16} {} ({})", translation.id, translation.name, translation.language);
        if translation.id == current {
            println!("{}", line.green().bold());
        } else {
            println!("{}", line);
        }
    }
}
