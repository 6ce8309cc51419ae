use std::fs;
use std::path::Path;

use clap::ArgMatches;

use super::CommandResult;
use crate::cli_context::AppContext;
use crate::display::{build_display, DisplayInput};
use crate::error::{ErrorContext, PrayerResult};
use crate::formatting::print_prayer_card;
use crate::models::{PrayerName, PrayerTimes};

pub async fn handle_show(matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    let path = matches.get_one::<String>("times")
        .ok_or("A times file is required (--times FILE)")?;
    let times = load_times(Path::new(path))?;
    let input = display_input(matches)?;

    let display = build_display(&times, &input, ctx.store().language());
    print_prayer_card(&display);
    Ok(())
}

/// Read a JSON object of `"Fajr": "05:12"` style entries.
pub fn load_times(path: &Path) -> PrayerResult<PrayerTimes> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read prayer times from {}", path.display()))?;
    Ok(serde_json::from_str(&content)?)
}

/// Collect the externally supplied current/next prayer, date and countdown.
pub fn display_input(matches: &ArgMatches) -> PrayerResult<DisplayInput> {
    let prayer = |name: &str| -> PrayerResult<Option<PrayerName>> {
        matches
            .get_one::<String>(name)
            .map(|value| value.parse::<PrayerName>())
            .transpose()
    };

    Ok(DisplayInput {
        current: prayer("current")?,
        next: prayer("next")?,
        date: matches.get_one::<String>("date").cloned(),
        countdown: matches.get_one::<String>("countdown").cloned(),
    })
}
