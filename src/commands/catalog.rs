use clap::ArgMatches;

use super::CommandResult;
use crate::cli_context::AppContext;
use crate::formatting::{print_methods, print_translations};

pub async fn handle_methods(_matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    print_methods(ctx.store().calculation_method());
    Ok(())
}

pub async fn handle_translations(_matches: &ArgMatches, ctx: &mut AppContext) -> CommandResult {
    print_translations(ctx.store().selected_translation());
    Ok(())
}
