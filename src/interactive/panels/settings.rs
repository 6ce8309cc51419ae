use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::catalog::{find_color, find_image, language_label, method_label, translation_label};
use crate::constants::{APP_VERSION, SUPPORT_EMAIL};
use crate::formatting::{format_location, format_opacity, truncate};
use crate::interactive::app::{InteractiveApp, SettingsRow};
use crate::interactive::palette::{color, Palette};
use crate::models::{BackgroundKind, Settings, ThemeMode};

const SLIDER_WIDTH: usize = 20;

/// Draw the settings list, grouped into sections.
pub fn draw(frame: &mut Frame, area: Rect, app: &InteractiveApp, palette: &Palette) {
    let width = area.width.min(84);
    let x = area.x + (area.width - width) / 2;
    let panel = Rect::new(x, area.y, width, area.height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Settings ")
        .border_style(Style::default().fg(color(palette.border)))
        .style(Style::default().bg(color(palette.card)));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let settings = app.store.settings();
    let label_width = 26usize;
    let value_width = (inner.width as usize).saturating_sub(label_width + 4);

    // Build lines with section headers; remember which line is selected
    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_line = 0usize;
    let mut last_section = "";

    for (i, row) in app.rows.iter().enumerate() {
        if row.section() != last_section {
            if !last_section.is_empty() {
                items.push(ListItem::new(Line::from("")));
            }
            last_section = row.section();
            items.push(ListItem::new(Line::from(Span::styled(
                format!(" {}", last_section.to_uppercase()),
                Style::default().fg(color(palette.accent)).add_modifier(Modifier::BOLD),
            ))));
        }

        let selected = i == app.settings_index;
        if selected {
            selected_line = items.len();
        }

        let enabled = row_enabled(*row, settings);
        let base = if !enabled {
            Style::default().fg(color(palette.muted)).add_modifier(Modifier::DIM)
        } else if selected {
            Style::default()
                .fg(color(palette.card))
                .bg(color(palette.text))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color(palette.text))
        };

        let label = format!("   {:<width$}", row_label(*row), width = label_width);
        let value = truncate(&row_value(*row, settings), value_width);
        items.push(ListItem::new(Line::from(vec![
            Span::styled(label, base),
            Span::styled(value, if selected { base } else { Style::default().fg(color(palette.muted)) }),
        ])));
    }

    // Keep the selection visible
    let visible = inner.height as usize;
    let offset = if selected_line >= visible { selected_line + 1 - visible } else { 0 };
    let items: Vec<ListItem> = items.into_iter().skip(offset).take(visible).collect();

    frame.render_widget(List::new(items), inner);
}

pub fn row_label(row: SettingsRow) -> String {
    match row {
        SettingsRow::Location => "Current location".to_string(),
        SettingsRow::LocationMode => "Location mode".to_string(),
        SettingsRow::CalculationMethod => "Calculation method".to_string(),
        SettingsRow::Language => "Language".to_string(),
        SettingsRow::Translation => "Translation".to_string(),
        SettingsRow::Notifications => "Prayer notifications".to_string(),
        SettingsRow::EzanSound => "Ezan sound".to_string(),
        SettingsRow::SendTestNotification => "Send test notification".to_string(),
        SettingsRow::TestTrigger(trigger) => trigger.label().to_string(),
        SettingsRow::Background => "Background".to_string(),
        SettingsRow::BackgroundOpacity => "Background opacity".to_string(),
        SettingsRow::CardOpacity => "Card opacity".to_string(),
        SettingsRow::Theme => "Theme".to_string(),
        SettingsRow::Version => "Version".to_string(),
        SettingsRow::Support => "Support".to_string(),
        SettingsRow::PrivacyPolicy => "Privacy policy".to_string(),
        SettingsRow::Reset => "Reset all settings".to_string(),
    }
}

pub fn row_value(row: SettingsRow, settings: &Settings) -> String {
    match row {
        SettingsRow::Location => format_location(settings.location.as_ref()),
        SettingsRow::LocationMode => settings.location_mode.label().to_string(),
        SettingsRow::CalculationMethod => method_label(settings.calculation_method),
        SettingsRow::Language => language_label(&settings.language).to_string(),
        SettingsRow::Translation => translation_label(&settings.selected_translation),
        SettingsRow::Notifications => toggle(settings.notifications),
        SettingsRow::EzanSound => toggle(settings.ezan_sound),
        SettingsRow::SendTestNotification | SettingsRow::TestTrigger(_) => "▸".to_string(),
        SettingsRow::Background => background_name(settings),
        SettingsRow::BackgroundOpacity => slider(settings.background.opacity()),
        SettingsRow::CardOpacity => slider(settings.card_opacity),
        SettingsRow::Theme => theme_radio(settings.theme),
        SettingsRow::Version => APP_VERSION.to_string(),
        SettingsRow::Support => SUPPORT_EMAIL.to_string(),
        SettingsRow::PrivacyPolicy => "▸".to_string(),
        SettingsRow::Reset => "▸".to_string(),
    }
}

/// Rows that do nothing in the current state are drawn dimmed.
fn row_enabled(row: SettingsRow, settings: &Settings) -> bool {
    match row {
        SettingsRow::BackgroundOpacity => settings.background.kind() == BackgroundKind::Image,
        SettingsRow::EzanSound => settings.notifications,
        _ => true,
    }
}

fn toggle(enabled: bool) -> String {
    if enabled { "[■] On".to_string() } else { "[ ] Off".to_string() }
}

fn background_name(settings: &Settings) -> String {
    let background = &settings.background;
    match background.kind() {
        BackgroundKind::Image => match background.image_id().and_then(find_image) {
            Some(image) => format!("Image · {}", image.name),
            None => format!("Image · {} (missing)", background.selected_id()),
        },
        BackgroundKind::Color => match background.color_id().and_then(find_color) {
            Some(c) => format!("Color · {}", c.name),
            None => format!("Color · {} (missing)", background.selected_id()),
        },
    }
}

/// A text slider; the bar saturates but the number shows the stored value.
pub fn slider(value: f64) -> String {
    let ratio = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    let filled = (ratio * SLIDER_WIDTH as f64).round() as usize;
    format!(
        "{}{} {}",
        "█".repeat(filled),
        "░".repeat(SLIDER_WIDTH - filled),
        format_opacity(value)
    )
}

fn theme_radio(current: ThemeMode) -> String {
    ThemeMode::ALL
        .iter()
        .map(|mode| {
            let mark = if *mode == current { "(●)" } else { "( )" };
            format!("{} {}", mark, mode.label())
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_saturates_bar_but_keeps_value() {
        assert_eq!(slider(0.5), format!("{}{} 50%", "█".repeat(10), "░".repeat(10)));
        assert!(slider(1.7).starts_with(&"█".repeat(SLIDER_WIDTH)));
        assert!(slider(1.7).ends_with("170%"));
        assert!(slider(-0.2).starts_with(&"░".repeat(SLIDER_WIDTH)));
    }

    #[test]
    fn test_theme_radio_marks_one() {
        let radio = theme_radio(ThemeMode::Dark);
        assert_eq!(radio.matches("(●)").count(), 1);
        assert!(radio.contains("(●) Dark"));
    }

    #[test]
    fn test_background_row_reports_missing_assets() {
        let mut settings = Settings::default();
        assert_eq!(row_value(SettingsRow::Background, &settings), "Image · Geometric Gold");
        settings.background.select_color("chartreuse");
        assert_eq!(row_value(SettingsRow::Background, &settings), "Color · chartreuse (missing)");
    }
}
