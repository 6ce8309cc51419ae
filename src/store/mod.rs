//! The settings store: the single owner of the user's `Settings`.
//!
//! Every setter is a targeted partial update followed by one persistence
//! write of the whole object and a notification to every listener. The store
//! never validates numeric ranges; whatever a caller sets is what it reads back.

pub mod storage;
pub mod writer;

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::error::PrayerResult;
use crate::logging::{log_error, log_info};
use crate::models::{BackgroundSettings, Location, LocationMode, Settings, ThemeMode};

pub use storage::{FileStorage, MemoryStorage, Storage};
pub use writer::{PersistFailure, PersistStatus, WriteQueue};

/// Which part of the settings a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsChange {
    CalculationMethod,
    Language,
    Theme,
    Notifications,
    EzanSound,
    SelectedTranslation,
    Location,
    LocationMode,
    Background,
    BackgroundOpacity,
    CardOpacity,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&Settings, SettingsChange)>;

pub struct SettingsStore {
    settings: Settings,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    revision: u64,
    writer: Option<WriteQueue>,
}

impl SettingsStore {
    /// A store holding the compiled-in defaults and no persistence.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            listeners: Vec::new(),
            next_subscription: 0,
            revision: 0,
            writer: None,
        }
    }

    /// Rehydrate from storage and start persisting every mutation back into
    /// it. Must be called from inside a tokio runtime.
    pub fn open(storage: Arc<dyn Storage>) -> Self {
        let settings = Self::load(storage.as_ref());
        let mut store = Self::with_settings(settings);
        store.attach_writer(WriteQueue::spawn(storage));
        store
    }

    /// Read the persisted blob. Nothing stored, an unreadable blob, or a blob
    /// that is not valid settings JSON all yield the defaults.
    pub fn load(storage: &dyn Storage) -> Settings {
        match storage.read(SETTINGS_STORAGE_KEY) {
            Ok(Some(blob)) => match serde_json::from_str::<Settings>(&blob) {
                Ok(settings) => {
                    log_info("Loaded persisted settings");
                    settings
                }
                Err(e) => {
                    log_error(&format!("Stored settings are not valid, using defaults: {}", e));
                    Settings::default()
                }
            },
            Ok(None) => {
                log_info("No persisted settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                log_error(&format!("Failed to read settings, using defaults: {}", e));
                Settings::default()
            }
        }
    }

    pub fn attach_writer(&mut self, writer: WriteQueue) {
        self.writer = Some(writer);
    }

    pub fn is_persistent(&self) -> bool {
        self.writer.is_some()
    }

    /// Wait for queued writes. A store without a writer has nothing to flush.
    pub async fn flush(&self) -> PrayerResult<()> {
        match &self.writer {
            Some(writer) => writer.flush().await,
            None => Ok(()),
        }
    }

    pub fn persist_status(&self) -> Option<watch::Receiver<PersistStatus>> {
        self.writer.as_ref().map(|writer| writer.status())
    }

    pub fn persist_failures(&self) -> Option<broadcast::Receiver<PersistFailure>> {
        self.writer.as_ref().map(|writer| writer.subscribe_failures())
    }

    /// Number of mutations applied since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Settings, SettingsChange) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn calculation_method(&self) -> i32 {
        self.settings.calculation_method
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }

    pub fn theme(&self) -> ThemeMode {
        self.settings.theme
    }

    pub fn notifications(&self) -> bool {
        self.settings.notifications
    }

    pub fn ezan_sound(&self) -> bool {
        self.settings.ezan_sound
    }

    pub fn selected_translation(&self) -> &str {
        &self.settings.selected_translation
    }

    pub fn location(&self) -> Option<&Location> {
        self.settings.location.as_ref()
    }

    pub fn location_mode(&self) -> LocationMode {
        self.settings.location_mode
    }

    pub fn background(&self) -> &BackgroundSettings {
        &self.settings.background
    }

    pub fn card_opacity(&self) -> f64 {
        self.settings.card_opacity
    }

    pub fn set_calculation_method(&mut self, method: i32) {
        self.update(SettingsChange::CalculationMethod, |s| s.calculation_method = method);
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        self.update(SettingsChange::Language, |s| s.language = language);
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.update(SettingsChange::Theme, |s| s.theme = theme);
    }

    pub fn set_notifications(&mut self, enabled: bool) {
        self.update(SettingsChange::Notifications, |s| s.notifications = enabled);
    }

    pub fn set_ezan_sound(&mut self, enabled: bool) {
        self.update(SettingsChange::EzanSound, |s| s.ezan_sound = enabled);
    }

    pub fn set_selected_translation(&mut self, translation: impl Into<String>) {
        let translation = translation.into();
        self.update(SettingsChange::SelectedTranslation, |s| {
            s.selected_translation = translation
        });
    }

    pub fn set_location(&mut self, location: Option<Location>) {
        self.update(SettingsChange::Location, |s| s.location = location);
    }

    pub fn set_location_mode(&mut self, mode: LocationMode) {
        self.update(SettingsChange::LocationMode, |s| s.location_mode = mode);
    }

    /// Switch to a solid color. Clears the image id; opacity is kept.
    pub fn set_background_color(&mut self, color_id: impl Into<String>) {
        let color_id = color_id.into();
        self.update(SettingsChange::Background, |s| s.background.select_color(color_id));
    }

    /// Switch to an image. Clears the color id; opacity is kept.
    pub fn set_background_image(&mut self, image_id: impl Into<String>) {
        let image_id = image_id.into();
        self.update(SettingsChange::Background, |s| s.background.select_image(image_id));
    }

    pub fn set_background_opacity(&mut self, opacity: f64) {
        self.update(SettingsChange::BackgroundOpacity, |s| s.background.set_opacity(opacity));
    }

    pub fn set_card_opacity(&mut self, opacity: f64) {
        self.update(SettingsChange::CardOpacity, |s| s.card_opacity = opacity);
    }

    /// Restore every field to its default in a single update.
    pub fn reset_settings(&mut self) {
        self.update(SettingsChange::Reset, |s| *s = Settings::default());
    }

    fn update<F>(&mut self, change: SettingsChange, apply: F)
    where
        F: FnOnce(&mut Settings),
    {
        apply(&mut self.settings);
        self.revision += 1;

        if let Some(writer) = &self.writer {
            if let Err(e) = writer.enqueue(self.revision, self.settings.clone()) {
                log_error(&format!("Could not queue settings write ({:?}): {}", change, e));
            }
        }

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.settings, change);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
