pub mod background;
pub mod catalog;
pub mod location;
pub mod notify;
pub mod settings;
pub mod show;
pub mod tui;

pub use background::handle_background;
pub use catalog::{handle_methods, handle_translations};
pub use location::handle_location;
pub use notify::handle_notify;
pub use settings::handle_settings;
pub use show::handle_show;
pub use tui::handle_tui;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;
