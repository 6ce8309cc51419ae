use std::path::Path;

use clap::ArgMatches;

use super::show::{display_input, load_times};
use super::CommandResult;
use crate::cli_context::AppContext;
use crate::interactive::{run_interactive_mode, InteractiveApp};

pub async fn handle_tui(matches: Option<&ArgMatches>, ctx: AppContext) -> CommandResult {
    let (times, input) = match matches {
        Some(matches) => {
            let times = match matches.get_one::<String>("times") {
                Some(path) => Some(load_times(Path::new(path))?),
                None => None,
            };
            (times, display_input(matches)?)
        }
        None => (None, Default::default()),
    };

    let (store, notifier) = ctx.into_parts();
    let app = InteractiveApp::new(store, notifier, times, input);

    // The terminal loop blocks on crossterm input; keep it off the async scheduler.
    let app = tokio::task::block_in_place(|| run_interactive_mode(app))?;

    app.store.flush().await?;
    Ok(())
}
