use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_BACKGROUND_IMAGE, DEFAULT_BACKGROUND_OPACITY, DEFAULT_CALCULATION_METHOD,
    DEFAULT_CARD_OPACITY, DEFAULT_LANGUAGE, DEFAULT_TRANSLATION,
};
use crate::error::PrayerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" | "auto" => Ok(ThemeMode::System),
            other => Err(PrayerError::InvalidInput(format!(
                "unknown theme '{}' (expected light, dark or system)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    Auto,
    Manual,
}

impl LocationMode {
    pub fn toggled(self) -> Self {
        match self {
            LocationMode::Auto => LocationMode::Manual,
            LocationMode::Manual => LocationMode::Auto,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationMode::Auto => "Automatic",
            LocationMode::Manual => "Manual",
        }
    }
}

impl FromStr for LocationMode {
    type Err = PrayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "automatic" => Ok(LocationMode::Auto),
            "manual" => Ok(LocationMode::Manual),
            other => Err(PrayerError::InvalidInput(format!(
                "unknown location mode '{}' (expected auto or manual)",
                other
            ))),
        }
    }
}

/// Last known location, supplied by whatever acquires it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            city: None,
            country: None,
        }
    }

    pub fn with_place(mut self, city: Option<String>, country: Option<String>) -> Self {
        self.city = city;
        self.country = country;
        self
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.city, &self.country) {
            (Some(city), Some(country)) => write!(f, "{}, {}", city, country),
            (Some(place), None) | (None, Some(place)) => write!(f, "{}", place),
            (None, None) => write!(f, "{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Image,
    Color,
}

/// Home-screen backdrop. Exactly one of `image_id`/`color_id` is set and it
/// always matches `kind`; the fields are private so nothing can break that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BackgroundRecord", into = "BackgroundRecord")]
pub struct BackgroundSettings {
    kind: BackgroundKind,
    image_id: Option<String>,
    color_id: Option<String>,
    opacity: f64,
}

impl BackgroundSettings {
    pub fn image(id: impl Into<String>, opacity: f64) -> Self {
        Self {
            kind: BackgroundKind::Image,
            image_id: Some(id.into()),
            color_id: None,
            opacity,
        }
    }

    pub fn color(id: impl Into<String>, opacity: f64) -> Self {
        Self {
            kind: BackgroundKind::Color,
            image_id: None,
            color_id: Some(id.into()),
            opacity,
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        self.kind
    }

    pub fn image_id(&self) -> Option<&str> {
        self.image_id.as_deref()
    }

    pub fn color_id(&self) -> Option<&str> {
        self.color_id.as_deref()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// The identifier of whichever catalog entry is active.
    pub fn selected_id(&self) -> &str {
        match self.kind {
            BackgroundKind::Image => self.image_id.as_deref().unwrap_or_default(),
            BackgroundKind::Color => self.color_id.as_deref().unwrap_or_default(),
        }
    }

    pub fn select_image(&mut self, id: impl Into<String>) {
        self.kind = BackgroundKind::Image;
        self.image_id = Some(id.into());
        self.color_id = None;
    }

    pub fn select_color(&mut self, id: impl Into<String>) {
        self.kind = BackgroundKind::Color;
        self.color_id = Some(id.into());
        self.image_id = None;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self::image(DEFAULT_BACKGROUND_IMAGE, DEFAULT_BACKGROUND_OPACITY)
    }
}

/// On-disk shape of the background. Stored blobs may have been edited by
/// hand, so this is normalized back into a consistent `BackgroundSettings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackgroundRecord {
    #[serde(rename = "type")]
    kind: BackgroundKind,
    #[serde(default)]
    image_id: Option<String>,
    #[serde(default)]
    color_id: Option<String>,
    #[serde(default = "default_background_opacity")]
    opacity: f64,
}

fn default_background_opacity() -> f64 {
    DEFAULT_BACKGROUND_OPACITY
}

impl From<BackgroundRecord> for BackgroundSettings {
    fn from(record: BackgroundRecord) -> Self {
        let BackgroundRecord {
            kind,
            image_id,
            color_id,
            opacity,
        } = record;

        match (kind, image_id, color_id) {
            (BackgroundKind::Image, Some(image), _) => Self::image(image, opacity),
            (BackgroundKind::Color, _, Some(color)) => Self::color(color, opacity),
            (_, Some(image), None) => Self::image(image, opacity),
            (_, None, Some(color)) => Self::color(color, opacity),
            _ => Self::image(DEFAULT_BACKGROUND_IMAGE, opacity),
        }
    }
}

impl From<BackgroundSettings> for BackgroundRecord {
    fn from(background: BackgroundSettings) -> Self {
        Self {
            kind: background.kind,
            image_id: background.image_id,
            color_id: background.color_id,
            opacity: background.opacity,
        }
    }
}

/// Everything the user can customize. Serialized whole as one JSON blob;
/// fields missing from an older blob take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub calculation_method: i32,
    pub language: String,
    pub theme: ThemeMode,
    pub notifications: bool,
    pub ezan_sound: bool,
    pub selected_translation: String,
    pub location: Option<Location>,
    pub location_mode: LocationMode,
    pub background: BackgroundSettings,
    pub card_opacity: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            calculation_method: DEFAULT_CALCULATION_METHOD,
            language: DEFAULT_LANGUAGE.to_string(),
            theme: ThemeMode::System,
            notifications: true,
            ezan_sound: true,
            selected_translation: DEFAULT_TRANSLATION.to_string(),
            location: None,
            location_mode: LocationMode::Auto,
            background: BackgroundSettings::default(),
            card_opacity: DEFAULT_CARD_OPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_serializes_with_type_tag() {
        let json = serde_json::to_value(BackgroundSettings::default()).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["imageId"], "geometric_gold");
        assert!(json["colorId"].is_null());
        assert_eq!(json["opacity"], 0.85);
    }

    #[test]
    fn test_inconsistent_background_is_normalized() {
        // type says color but only an image id is present
        let bg: BackgroundSettings =
            serde_json::from_str(r#"{"type":"color","imageId":"mosque_dusk","opacity":0.5}"#).unwrap();
        assert_eq!(bg.kind(), BackgroundKind::Image);
        assert_eq!(bg.image_id(), Some("mosque_dusk"));
        assert_eq!(bg.color_id(), None);

        // both present: type wins
        let bg: BackgroundSettings = serde_json::from_str(
            r#"{"type":"color","imageId":"mosque_dusk","colorId":"navy","opacity":0.5}"#,
        )
        .unwrap();
        assert_eq!(bg.kind(), BackgroundKind::Color);
        assert_eq!(bg.color_id(), Some("navy"));
        assert_eq!(bg.image_id(), None);

        // neither present
        let bg: BackgroundSettings = serde_json::from_str(r#"{"type":"color"}"#).unwrap();
        assert_eq!(bg, BackgroundSettings::default());
    }

    #[test]
    fn test_partial_settings_blob_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"calculationMethod":13,"theme":"dark"}"#).unwrap();
        assert_eq!(settings.calculation_method, 13);
        assert_eq!(settings.theme, ThemeMode::Dark);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.background, BackgroundSettings::default());
        assert_eq!(settings.card_opacity, 0.9);
    }

    #[test]
    fn test_location_display() {
        let loc = Location::new(41.0082, 28.9784);
        assert_eq!(loc.to_string(), "41.0082, 28.9784");
        let loc = loc.with_place(Some("Istanbul".into()), Some("Türkiye".into()));
        assert_eq!(loc.to_string(), "Istanbul, Türkiye");
    }

    #[test]
    fn test_theme_and_mode_parsing() {
        assert_eq!("Dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert_eq!("auto".parse::<LocationMode>().unwrap(), LocationMode::Auto);
        assert!("purple".parse::<ThemeMode>().is_err());
    }
}
