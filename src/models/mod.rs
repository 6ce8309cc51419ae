pub mod prayer;
pub mod settings;

// Re-export commonly used types
pub use prayer::{PrayerName, PrayerTimes};
pub use settings::{BackgroundKind, BackgroundSettings, Location, LocationMode, Settings, ThemeMode};
