pub const APP_NAME: &str = "Prayer Companion";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DIR_NAME: &str = "prayer-companion";

/// Key under which the full settings blob is stored.
pub const SETTINGS_STORAGE_KEY: &str = "prayer-settings";

/// Overrides the directory the settings blob is written to.
pub const DATA_DIR_ENV: &str = "PRAYER_COMPANION_DATA_DIR";

pub const SUPPORT_EMAIL: &str = "support@prayer-companion.app";
pub const SUPPORT_URL: &str = "https://prayer-companion.app/support";

// Compiled-in settings defaults
pub const DEFAULT_CALCULATION_METHOD: i32 = 3;
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TRANSLATION: &str = "en.sahih";
pub const DEFAULT_BACKGROUND_IMAGE: &str = "geometric_gold";
pub const DEFAULT_BACKGROUND_OPACITY: f64 = 0.85;
pub const DEFAULT_CARD_OPACITY: f64 = 0.9;

/// Increment used by the opacity sliders.
pub const OPACITY_STEP: f64 = 0.05;

pub const EVENT_TICK_MS: u64 = 100;
pub const TOAST_LIFETIME_SECS: u64 = 5;

pub const PRIVACY_POLICY: &str = r#"Privacy Policy

Prayer Companion keeps everything on your device.

Data we store
  - Your preferences (calculation method, language, theme, notification
    choices, background and opacity) in a single settings file in your
    configuration directory.
  - Your last known location, only if you provide one. It is used to show
    where the schedule applies and is never transmitted.

Data we do not collect
  - No accounts, no analytics, no advertising identifiers.
  - No network requests are made by the settings store.

Notifications
  - Test notifications are handed to your system's notification service.
    Their content never leaves your device.

Your choices
  - Reset all settings from the About section at any time.
  - Delete the settings file to remove every trace of the app.

Contact
  - support@prayer-companion.app
"#;
