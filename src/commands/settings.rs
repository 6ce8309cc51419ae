use clap::ArgMatches;
use colored::*;

use super::CommandResult;
use crate::catalog::{find_translation, LANGUAGES};
use crate::cli_context::AppContext;
use crate::error::{PrayerError, PrayerResult};
use crate::formatting::print_settings;
use crate::models::{LocationMode, ThemeMode};
use crate::prayer_error;
use crate::store::SettingsStore;

pub async fn handle_settings(matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    match matches.subcommand() {
        Some(("set", set_matches)) => {
            let key = set_matches.get_one::<String>("key")
                .ok_or("Setting key is required")?;
            let value = set_matches.get_one::<String>("value")
                .ok_or("Setting value is required")?;

            apply_setting(ctx.store(), key, value)?;
            ctx.flush().await?;

            println!("{} {} = {}", "✅".green(), key.bold(), value.bright_blue());
        }
        Some(("reset", _)) => {
            ctx.store().reset_settings();
            ctx.flush().await?;
            println!("{} {}", "✅".green(), "Settings restored to defaults".green().bold());
        }
        _ => print_settings(ctx.store().settings()),
    }

    Ok(())
}

/// Apply one `settings set <key> <value>` pair to the store.
///
/// Values must parse, and catalog-backed keys must name a known entry.
/// Numbers are otherwise passed through as given.
pub fn apply_setting(store: &mut SettingsStore, key: &str, value: &str) -> PrayerResult<()> {
    match key {
        "method" => {
            let method = value.trim().parse::<i32>().map_err(|_| {
                prayer_error!(InvalidInput, "calculation method must be a number, got '{}'", value)
            })?;
            store.set_calculation_method(method);
        }
        "language" => {
            let code = value.trim().to_lowercase();
            if !LANGUAGES.iter().any(|(known, _)| *known == code) {
                return Err(prayer_error!(
                    InvalidInput,
                    "unsupported language '{}' (expected one of {})",
                    value,
                    LANGUAGES.iter().map(|(c, _)| *c).collect::<Vec<_>>().join(", ")
                ));
            }
            store.set_language(code);
        }
        "theme" => store.set_theme(value.parse::<ThemeMode>()?),
        "notifications" => store.set_notifications(parse_toggle(value)?),
        "ezan-sound" => store.set_ezan_sound(parse_toggle(value)?),
        "translation" => {
            let translation = find_translation(value.trim()).ok_or_else(|| {
                prayer_error!(InvalidInput, "unknown translation '{}' (see `prayer translations`)", value)
            })?;
            store.set_selected_translation(translation.id);
        }
        "location-mode" => store.set_location_mode(value.parse::<LocationMode>()?),
        "card-opacity" => store.set_card_opacity(parse_number(value)?),
        "background-opacity" => store.set_background_opacity(parse_number(value)?),
        other => {
            return Err(PrayerError::InvalidInput(format!(
                "unknown setting '{}' (expected method, language, theme, notifications, ezan-sound, translation, location-mode, card-opacity or background-opacity)",
                other
            )))
        }
    }
    Ok(())
}

pub fn parse_toggle(value: &str) -> PrayerResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(prayer_error!(InvalidInput, "expected on or off, got '{}'", other)),
    }
}

fn parse_number(value: &str) -> PrayerResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| prayer_error!(InvalidInput, "expected a number, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_updates_store() {
        let mut store = SettingsStore::new();
        apply_setting(&mut store, "method", "13").unwrap();
        apply_setting(&mut store, "theme", "dark").unwrap();
        apply_setting(&mut store, "ezan-sound", "off").unwrap();
        apply_setting(&mut store, "card-opacity", "1.4").unwrap();

        assert_eq!(store.calculation_method(), 13);
        assert_eq!(store.theme(), ThemeMode::Dark);
        assert!(!store.ezan_sound());
        assert_eq!(store.card_opacity(), 1.4);
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let mut store = SettingsStore::new();
        assert!(apply_setting(&mut store, "method", "thirteen").is_err());
        assert!(apply_setting(&mut store, "language", "xx").is_err());
        assert!(apply_setting(&mut store, "translation", "nope").is_err());
        assert!(apply_setting(&mut store, "card-opacity", "NaN").is_err());
        assert!(apply_setting(&mut store, "colour", "red").is_err());
        assert_eq!(store.revision(), 0);
    }
}
