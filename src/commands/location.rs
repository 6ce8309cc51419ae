use clap::ArgMatches;
use colored::*;
use lazy_static::lazy_static;
use regex::Regex;

use super::CommandResult;
use crate::cli_context::AppContext;
use crate::error::PrayerResult;
use crate::formatting::format_location;
use crate::models::Location;
use crate::prayer_error;

lazy_static! {
    static ref COORDINATES: Regex =
        Regex::new(r"^\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)\s*$").unwrap();
}

pub async fn handle_location(matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    match matches.subcommand() {
        Some(("set", set_matches)) => {
            let coordinates = set_matches.get_one::<String>("coordinates")
                .ok_or("Coordinates are required")?;
            let (latitude, longitude) = parse_coordinates(coordinates)?;

            let location = Location::new(latitude, longitude).with_place(
                set_matches.get_one::<String>("city").cloned(),
                set_matches.get_one::<String>("country").cloned(),
            );
            ctx.store().set_location(Some(location));
            ctx.flush().await?;

            println!(
                "{} Location set to {}",
                "✅".green(),
                format_location(ctx.store().location()).bright_blue()
            );
        }
        Some(("clear", _)) => {
            ctx.store().set_location(None);
            ctx.flush().await?;
            println!("{} {}", "✅".green(), "Location cleared".green().bold());
        }
        _ => println!("{}", format_location(ctx.store().location())),
    }

    Ok(())
}

/// Parse `"lat,lon"` in decimal degrees.
pub fn parse_coordinates(input: &str) -> PrayerResult<(f64, f64)> {
    let caps = COORDINATES.captures(input).ok_or_else(|| {
        prayer_error!(ParseError, "expected coordinates as 'latitude,longitude', got '{}'", input)
    })?;

    let latitude: f64 = caps[1]
        .parse()
        .map_err(|_| prayer_error!(ParseError, "invalid latitude '{}'", &caps[1]))?;
    let longitude: f64 = caps[2]
        .parse()
        .map_err(|_| prayer_error!(ParseError, "invalid longitude '{}'", &caps[2]))?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(prayer_error!(InvalidInput, "latitude {} is out of range", latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(prayer_error!(InvalidInput, "longitude {} is out of range", longitude));
    }

    Ok((latitude, longitude))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(parse_coordinates("41.0082,28.9784").unwrap(), (41.0082, 28.9784));
        assert_eq!(parse_coordinates(" -33.9 , 18.4 ").unwrap(), (-33.9, 18.4));
    }

    #[test]
    fn test_parse_coordinates_rejects_garbage() {
        assert!(parse_coordinates("istanbul").is_err());
        assert!(parse_coordinates("41.0").is_err());
        assert!(parse_coordinates("91,0").is_err());
        assert!(parse_coordinates("0,181").is_err());
    }
}
