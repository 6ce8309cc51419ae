// Module declarations
pub mod catalog;
pub mod cli_context;
pub mod commands;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod notifications;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use config::{load_config, Config};
pub use display::{build_display, DisplayInput, PrayerDisplay, PrayerRow};
pub use error::{ErrorContext, PrayerError, PrayerResult};
pub use models::*;
pub use notifications::{LogNotifier, Notifier, TestTrigger};
pub use store::{FileStorage, MemoryStorage, PersistStatus, SettingsChange, SettingsStore, Storage, SubscriptionId};
