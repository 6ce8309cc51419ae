use clap::ArgMatches;
use colored::*;

use super::CommandResult;
use crate::catalog::{find_color, find_image};
use crate::cli_context::AppContext;
use crate::formatting::{describe_background, print_backgrounds};
use crate::prayer_error;

pub async fn handle_background(matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    match matches.subcommand() {
        Some(("color", color_matches)) => {
            let id = color_matches.get_one::<String>("id")
                .ok_or("Color ID is required")?;
            let color = find_color(id)
                .ok_or_else(|| prayer_error!(InvalidInput, "unknown color '{}' (see `prayer background list`)", id))?;

            ctx.store().set_background_color(color.id);
        }
        Some(("image", image_matches)) => {
            let id = image_matches.get_one::<String>("id")
                .ok_or("Image ID is required")?;
            let image = find_image(id)
                .ok_or_else(|| prayer_error!(InvalidInput, "unknown image '{}' (see `prayer background list`)", id))?;

            ctx.store().set_background_image(image.id);
        }
        _ => {
            print_backgrounds(ctx.store().background());
            return Ok(());
        }
    }

    ctx.flush().await?;
    println!(
        "{} Background set to {}",
        "✅".green(),
        describe_background(ctx.store().background()).bright_blue()
    );
    Ok(())
}
