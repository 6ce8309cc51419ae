use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::catalog::{BACKGROUND_IMAGES, CALCULATION_METHODS, LANGUAGES, SOLID_COLORS, TRANSLATIONS};
use crate::constants::{OPACITY_STEP, TOAST_LIFETIME_SECS};
use crate::display::{build_display, DisplayInput, PrayerDisplay};
use crate::logging::{log_debug, log_error};
use crate::models::{BackgroundKind, PrayerTimes};
use crate::notifications::{Notifier, TestTrigger};
use crate::store::{PersistFailure, SettingsChange, SettingsStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTab {
    Images,
    Colors,
}

impl PickerTab {
    pub fn toggled(self) -> Self {
        match self {
            PickerTab::Images => PickerTab::Colors,
            PickerTab::Colors => PickerTab::Images,
        }
    }

    pub fn len(self) -> usize {
        match self {
            PickerTab::Images => BACKGROUND_IMAGES.len(),
            PickerTab::Colors => SOLID_COLORS.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    ResetSettings,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Popup {
    BackgroundPicker,
    MethodPicker,
    LanguagePicker,
    TranslationPicker,
    Confirmation(ConfirmAction),
    /// Acknowledges a test notification; shown whatever the notifier returned.
    Acknowledge(String),
    PrivacyPolicy,
    Help,
}

/// Every row of the settings screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Location,
    LocationMode,
    CalculationMethod,
    Language,
    Translation,
    Notifications,
    EzanSound,
    SendTestNotification,
    TestTrigger(TestTrigger),
    Background,
    BackgroundOpacity,
    CardOpacity,
    Theme,
    Version,
    Support,
    PrivacyPolicy,
    Reset,
}

impl SettingsRow {
    pub fn section(&self) -> &'static str {
        match self {
            SettingsRow::Location | SettingsRow::LocationMode => "Location",
            SettingsRow::CalculationMethod => "Prayer Times",
            SettingsRow::Language | SettingsRow::Translation => "Language & Translation",
            SettingsRow::Notifications
            | SettingsRow::EzanSound
            | SettingsRow::SendTestNotification
            | SettingsRow::TestTrigger(_) => "Notifications",
            SettingsRow::Background
            | SettingsRow::BackgroundOpacity
            | SettingsRow::CardOpacity
            | SettingsRow::Theme => "Appearance",
            SettingsRow::Version
            | SettingsRow::Support
            | SettingsRow::PrivacyPolicy
            | SettingsRow::Reset => "About",
        }
    }
}

pub fn settings_rows() -> Vec<SettingsRow> {
    let mut rows = vec![
        SettingsRow::Location,
        SettingsRow::LocationMode,
        SettingsRow::CalculationMethod,
        SettingsRow::Language,
        SettingsRow::Translation,
        SettingsRow::Notifications,
        SettingsRow::EzanSound,
        SettingsRow::SendTestNotification,
    ];
    rows.extend(TestTrigger::ALL.iter().map(|t| SettingsRow::TestTrigger(*t)));
    rows.extend([
        SettingsRow::Background,
        SettingsRow::BackgroundOpacity,
        SettingsRow::CardOpacity,
        SettingsRow::Theme,
        SettingsRow::Version,
        SettingsRow::Support,
        SettingsRow::PrivacyPolicy,
        SettingsRow::Reset,
    ]);
    rows
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient toast in the notification strip.
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// Move an opacity slider one step, staying inside [0, 1].
pub fn step_opacity(current: f64, steps: i32) -> f64 {
    let base = if current.is_finite() { current } else { 0.0 };
    let next = (base + OPACITY_STEP * steps as f64).clamp(0.0, 1.0);
    (next * 100.0).round() / 100.0
}

pub struct InteractiveApp {
    pub store: SettingsStore,
    pub notifier: Arc<dyn Notifier>,
    pub times: PrayerTimes,
    pub display_input: DisplayInput,
    pub screen: Screen,
    pub rows: Vec<SettingsRow>,
    pub settings_index: usize,
    pub popup: Option<Popup>,
    pub picker_index: usize,
    pub picker_tab: PickerTab,
    pub privacy_scroll: u16,
    pub notifications: Vec<Notification>,
    pub should_quit: bool,
    changes: Rc<RefCell<Vec<SettingsChange>>>,
    persist_failures: Option<broadcast::Receiver<PersistFailure>>,
}

impl InteractiveApp {
    pub fn new(
        mut store: SettingsStore,
        notifier: Arc<dyn Notifier>,
        times: Option<PrayerTimes>,
        display_input: DisplayInput,
    ) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        store.subscribe(move |_, change| sink.borrow_mut().push(change));
        let persist_failures = store.persist_failures();

        Self {
            store,
            notifier,
            times: times.unwrap_or_else(PrayerTimes::unknown),
            display_input,
            screen: Screen::Home,
            rows: settings_rows(),
            settings_index: 0,
            popup: None,
            picker_index: 0,
            picker_tab: PickerTab::Images,
            privacy_scroll: 0,
            notifications: Vec::new(),
            should_quit: false,
            changes,
            persist_failures,
        }
    }

    pub fn display(&self) -> PrayerDisplay {
        build_display(&self.times, &self.display_input, self.store.language())
    }

    pub fn selected_row(&self) -> SettingsRow {
        self.rows
            .get(self.settings_index)
            .copied()
            .unwrap_or(SettingsRow::Location)
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    pub fn visible_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| !n.dismissed).count()
    }

    pub fn dismiss_notification(&mut self) {
        if let Some(n) = self.notifications.iter_mut().find(|n| !n.dismissed) {
            n.dismissed = true;
        }
    }

    /// Periodic housekeeping: drain store changes, surface write failures,
    /// and expire old toasts.
    pub fn tick(&mut self) {
        let changes: Vec<SettingsChange> = self.changes.borrow_mut().drain(..).collect();
        for change in changes {
            log_debug(&format!("Settings changed: {:?}", change));
            if change == SettingsChange::Reset {
                self.notify(NotificationKind::Info, "Settings restored to defaults");
            }
        }

        let mut failures = Vec::new();
        if let Some(receiver) = self.persist_failures.as_mut() {
            loop {
                match receiver.try_recv() {
                    Ok(failure) => failures.push(failure.message),
                    Err(TryRecvError::Lagged(missed)) => {
                        failures.push(format!("{} more writes failed", missed));
                    }
                    Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                }
            }
        }
        for message in failures {
            self.notify(NotificationKind::Error, format!("Could not save settings: {}", message));
        }

        self.notifications.retain(|n| {
            !n.dismissed
                && (n.kind == NotificationKind::Error
                    || n.created_at.elapsed().as_secs() < TOAST_LIFETIME_SECS)
        });
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.rows.len() as i32;
        if len == 0 {
            return;
        }
        self.settings_index = (self.settings_index as i32 + delta).rem_euclid(len) as usize;
    }

    /// Enter/Space on the highlighted settings row.
    pub fn activate_selected(&mut self) {
        match self.selected_row() {
            SettingsRow::Location => {
                let message = match self.store.location() {
                    Some(location) => format!("Location: {}", location),
                    None => "No location yet. Set one with `prayer location set`".to_string(),
                };
                self.notify(NotificationKind::Info, message);
            }
            SettingsRow::LocationMode => {
                let mode = self.store.location_mode().toggled();
                self.store.set_location_mode(mode);
            }
            SettingsRow::CalculationMethod => {
                let current = self.store.calculation_method();
                self.picker_index = CALCULATION_METHODS
                    .iter()
                    .position(|m| m.id == current)
                    .unwrap_or(0);
                self.popup = Some(Popup::MethodPicker);
            }
            SettingsRow::Language => {
                let current = self.store.language().to_string();
                self.picker_index = LANGUAGES.iter().position(|(code, _)| *code == current).unwrap_or(0);
                self.popup = Some(Popup::LanguagePicker);
            }
            SettingsRow::Translation => {
                let current = self.store.selected_translation().to_string();
                self.picker_index = TRANSLATIONS.iter().position(|t| t.id == current).unwrap_or(0);
                self.popup = Some(Popup::TranslationPicker);
            }
            SettingsRow::Notifications => {
                let enabled = !self.store.notifications();
                self.store.set_notifications(enabled);
            }
            SettingsRow::EzanSound => {
                let enabled = !self.store.ezan_sound();
                self.store.set_ezan_sound(enabled);
            }
            SettingsRow::SendTestNotification => {
                let result = self
                    .notifier
                    .send_test_notification("Prayer Companion", "Notifications are working.");
                self.acknowledge_test("Test notification sent", result);
            }
            SettingsRow::TestTrigger(trigger) => {
                let result = self.notifier.trigger_test(trigger);
                self.acknowledge_test(&format!("{} sent", trigger.label()), result);
            }
            SettingsRow::Background => self.open_background_picker(),
            SettingsRow::BackgroundOpacity | SettingsRow::CardOpacity => self.adjust_selected(1),
            SettingsRow::Theme => self.adjust_selected(1),
            SettingsRow::Version | SettingsRow::Support => {}
            SettingsRow::PrivacyPolicy => {
                self.privacy_scroll = 0;
                self.popup = Some(Popup::PrivacyPolicy);
            }
            SettingsRow::Reset => {
                self.popup = Some(Popup::Confirmation(ConfirmAction::ResetSettings));
            }
        }
    }

    /// Left/Right on sliders and the theme radio group.
    pub fn adjust_selected(&mut self, steps: i32) {
        match self.selected_row() {
            SettingsRow::BackgroundOpacity => {
                if self.store.background().kind() != BackgroundKind::Image {
                    self.notify(NotificationKind::Info, "Background opacity applies to images only");
                    return;
                }
                let next = step_opacity(self.store.background().opacity(), steps);
                self.store.set_background_opacity(next);
            }
            SettingsRow::CardOpacity => {
                let next = step_opacity(self.store.card_opacity(), steps);
                self.store.set_card_opacity(next);
            }
            SettingsRow::Theme => {
                let modes = crate::models::ThemeMode::ALL;
                let current = modes.iter().position(|m| *m == self.store.theme()).unwrap_or(0) as i32;
                let next = (current + steps).rem_euclid(modes.len() as i32) as usize;
                self.store.set_theme(modes[next]);
            }
            SettingsRow::LocationMode | SettingsRow::Notifications | SettingsRow::EzanSound => {
                self.activate_selected();
            }
            _ => {}
        }
    }

    pub fn open_background_picker(&mut self) {
        let background = self.store.background();
        let (tab, index) = match background.kind() {
            BackgroundKind::Image => (
                PickerTab::Images,
                BACKGROUND_IMAGES.iter().position(|i| Some(i.id) == background.image_id()),
            ),
            BackgroundKind::Color => (
                PickerTab::Colors,
                SOLID_COLORS.iter().position(|c| Some(c.id) == background.color_id()),
            ),
        };
        self.picker_tab = tab;
        self.picker_index = index.unwrap_or(0);
        self.popup = Some(Popup::BackgroundPicker);
    }

    pub fn switch_picker_tab(&mut self) {
        self.picker_tab = self.picker_tab.toggled();
        self.picker_index = 0;
    }

    /// Number of options in the open list picker.
    pub fn picker_len(&self) -> usize {
        match self.popup {
            Some(Popup::BackgroundPicker) => self.picker_tab.len(),
            Some(Popup::MethodPicker) => CALCULATION_METHODS.len(),
            Some(Popup::LanguagePicker) => LANGUAGES.len(),
            Some(Popup::TranslationPicker) => TRANSLATIONS.len(),
            _ => 0,
        }
    }

    /// Move within the open picker; wraps around at both ends.
    pub fn move_picker(&mut self, delta: i32) {
        let len = self.picker_len() as i32;
        if len == 0 {
            return;
        }
        self.picker_index = (self.picker_index as i32 + delta).rem_euclid(len) as usize;
    }

    /// Apply the highlighted picker entry and close the picker.
    pub fn confirm_picker(&mut self) {
        let index = self.picker_index;
        match self.popup {
            Some(Popup::BackgroundPicker) => match self.picker_tab {
                PickerTab::Images => {
                    if let Some(image) = BACKGROUND_IMAGES.get(index) {
                        self.store.set_background_image(image.id);
                    }
                }
                PickerTab::Colors => {
                    if let Some(color) = SOLID_COLORS.get(index) {
                        self.store.set_background_color(color.id);
                    }
                }
            },
            Some(Popup::MethodPicker) => {
                if let Some(method) = CALCULATION_METHODS.get(index) {
                    self.store.set_calculation_method(method.id);
                }
            }
            Some(Popup::LanguagePicker) => {
                if let Some((code, _)) = LANGUAGES.get(index) {
                    self.store.set_language(*code);
                }
            }
            Some(Popup::TranslationPicker) => {
                if let Some(translation) = TRANSLATIONS.get(index) {
                    self.store.set_selected_translation(translation.id);
                }
            }
            _ => {}
        }
        self.close_popup();
    }

    pub fn confirm_popup(&mut self) {
        match self.popup.take() {
            Some(Popup::Confirmation(ConfirmAction::ResetSettings)) => {
                self.store.reset_settings();
            }
            Some(Popup::Acknowledge(_)) | None => {}
            Some(other) => self.popup = Some(other),
        }
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
        self.picker_index = 0;
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Home => Screen::Settings,
            Screen::Settings => Screen::Home,
        };
    }

    fn acknowledge_test(&mut self, message: &str, result: crate::error::PrayerResult<()>) {
        if let Err(e) = result {
            log_error(&format!("Test notification failed: {}", e));
        }
        self.popup = Some(Popup::Acknowledge(message.to_string()));
    }
}
