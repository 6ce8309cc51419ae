use std::io;
use std::panic;
use std::process;

use clap::{Arg, ArgMatches, Command};
use colored::*;
use crossterm::{execute, terminal::{disable_raw_mode, LeaveAlternateScreen}};

use prayer_companion::cli_context::AppContext;
use prayer_companion::commands::{
    handle_background, handle_location, handle_methods, handle_notify, handle_settings, handle_show,
    handle_translations, handle_tui, CommandResult,
};
use prayer_companion::constants::{APP_NAME, APP_VERSION};
use prayer_companion::formatting::theme::{set_theme, ColorTheme};
use prayer_companion::interactive::palette::is_dark;
use prayer_companion::logging::{init_logging, log_error, log_panic_info};

/// Options shared by `tui` and `show` describing what the prayer card shows.
fn display_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("times")
                .long("times")
                .value_name("FILE")
                .help("JSON file with today's times, e.g. {\"Fajr\": \"05:12\", ...}")
        )
        .arg(
            Arg::new("current")
                .long("current")
                .value_name("PRAYER")
                .help("Prayer whose time is in progress")
        )
        .arg(
            Arg::new("next")
                .long("next")
                .value_name("PRAYER")
                .help("Upcoming prayer to highlight")
        )
        .arg(
            Arg::new("date")
                .long("date")
                .value_name("TEXT")
                .help("Date line shown above the times")
        )
        .arg(
            Arg::new("countdown")
                .long("countdown")
                .value_name("TEXT")
                .help("Time remaining until the next prayer")
        )
}

fn cli() -> Command {
    Command::new("prayer")
        .about(format!("{} - prayer times and settings in the terminal", APP_NAME))
        .version(APP_VERSION)
        .subcommand(display_args(
            Command::new("tui").about("Open the interactive prayer card and settings screen (default)")
        ))
        .subcommand(display_args(
            Command::new("show").about("Print the prayer card")
        ).mut_arg("times", |arg| arg.required(true)))
        .subcommand(
            Command::new("settings")
                .about("Show or change settings")
                .subcommand(Command::new("show").about("Print all settings"))
                .subcommand(Command::new("reset").about("Restore every setting to its default"))
                .subcommand(
                    Command::new("set")
                        .about("Change one setting")
                        .arg(
                            Arg::new("key")
                                .help("method, language, theme, notifications, ezan-sound, translation, location-mode, card-opacity or background-opacity")
                                .required(true)
                        )
                        .arg(
                            Arg::new("value")
                                .help("New value")
                                .required(true)
                                .allow_hyphen_values(true)
                        )
                )
        )
        .subcommand(
            Command::new("location")
                .about("Manage the saved location")
                .subcommand(
                    Command::new("set")
                        .about("Save a location")
                        .arg(
                            Arg::new("coordinates")
                                .value_name("LAT,LON")
                                .help("Latitude and longitude in decimal degrees")
                                .required(true)
                                .allow_hyphen_values(true)
                        )
                        .arg(Arg::new("city").long("city").value_name("CITY").help("City name"))
                        .arg(Arg::new("country").long("country").value_name("COUNTRY").help("Country name"))
                )
                .subcommand(Command::new("clear").about("Forget the saved location"))
        )
        .subcommand(
            Command::new("background")
                .about("Choose the app background")
                .subcommand(Command::new("list").about("List background images and colors"))
                .subcommand(
                    Command::new("color")
                        .about("Use a solid color")
                        .arg(Arg::new("id").help("Color ID").required(true))
                )
                .subcommand(
                    Command::new("image")
                        .about("Use a background image")
                        .arg(Arg::new("id").help("Image ID").required(true))
                )
        )
        .subcommand(
            Command::new("notify")
                .about("Send a test notification")
                .arg(
                    Arg::new("kind")
                        .help("send, prayer, reminder, ezan or verse")
                        .value_parser(["send", "prayer", "reminder", "ezan", "verse"])
                        .default_value("send")
                )
        )
        .subcommand(Command::new("methods").about("List prayer time calculation methods"))
        .subcommand(Command::new("translations").about("List available translations"))
}

async fn run(matches: ArgMatches) -> CommandResult {
    let mut ctx = AppContext::new();
    set_theme(ColorTheme::for_mode(is_dark(ctx.store().theme())));

    match matches.subcommand() {
        None => handle_tui(None, ctx).await,
        Some(("tui", sub_matches)) => handle_tui(Some(sub_matches), ctx).await,
        Some(("show", sub_matches)) => handle_show(sub_matches, &mut ctx).await,
        Some(("settings", sub_matches)) => handle_settings(sub_matches, &mut ctx).await,
        Some(("location", sub_matches)) => handle_location(sub_matches, &mut ctx).await,
        Some(("background", sub_matches)) => handle_background(sub_matches, &mut ctx).await,
        Some(("notify", sub_matches)) => handle_notify(sub_matches, &mut ctx).await,
        Some(("methods", sub_matches)) => handle_methods(sub_matches, &mut ctx).await,
        Some(("translations", sub_matches)) => handle_translations(sub_matches, &mut ctx).await,
        Some((other, _)) => Err(format!("Unknown command '{}'. Use 'prayer --help' for available commands.", other).into()),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("{} {}", "Warning: could not start logging:".yellow(), e);
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let matches = cli().get_matches();

    if let Err(e) = run(matches).await {
        log_error(&format!("Command failed: {}", e));
        eprintln!("{} {}", "Error:".red().bold(), e.to_string().red());
        process::exit(1);
    }
}
