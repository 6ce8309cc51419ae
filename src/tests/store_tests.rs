use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{BackgroundKind, Location, LocationMode, Settings, ThemeMode};
use crate::store::{SettingsChange, SettingsStore};

fn assert_exclusive(store: &SettingsStore) {
    let background = store.background();
    match background.kind() {
        BackgroundKind::Image => {
            assert!(background.image_id().is_some());
            assert!(background.color_id().is_none());
        }
        BackgroundKind::Color => {
            assert!(background.color_id().is_some());
            assert!(background.image_id().is_none());
        }
    }
}

#[test]
fn test_defaults() {
    let store = SettingsStore::new();
    assert_eq!(store.calculation_method(), 3);
    assert_eq!(store.language(), "en");
    assert_eq!(store.theme(), ThemeMode::System);
    assert!(store.notifications());
    assert!(store.ezan_sound());
    assert_eq!(store.selected_translation(), "en.sahih");
    assert!(store.location().is_none());
    assert_eq!(store.location_mode(), LocationMode::Auto);
    assert_eq!(store.background().kind(), BackgroundKind::Image);
    assert_eq!(store.background().image_id(), Some("geometric_gold"));
    assert_eq!(store.background().opacity(), 0.85);
    assert_eq!(store.card_opacity(), 0.9);
}

#[test]
fn test_background_selection_stays_exclusive() {
    let mut store = SettingsStore::new();
    let steps: [(&str, bool); 6] = [
        ("navy", true),
        ("mosque_dusk", false),
        ("emerald", true),
        ("teal", true),
        ("night_sky", false),
        ("sand", true),
    ];

    for (id, is_color) in steps {
        if is_color {
            store.set_background_color(id);
            assert_eq!(store.background().kind(), BackgroundKind::Color);
            assert_eq!(store.background().color_id(), Some(id));
        } else {
            store.set_background_image(id);
            assert_eq!(store.background().kind(), BackgroundKind::Image);
            assert_eq!(store.background().image_id(), Some(id));
        }
        assert_exclusive(&store);
    }
}

#[test]
fn test_navy_keeps_opacity_and_clears_image() {
    let mut store = SettingsStore::new();
    store.set_background_color("navy");

    let json = serde_json::to_value(store.background()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "color",
            "imageId": null,
            "colorId": "navy",
            "opacity": 0.85
        })
    );
}

#[test]
fn test_switching_back_to_image_keeps_opacity() {
    let mut store = SettingsStore::new();
    store.set_background_opacity(0.4);
    store.set_background_color("plum");
    store.set_background_image("ocean_calm");

    assert_eq!(store.background().opacity(), 0.4);
    assert_eq!(store.background().color_id(), None);
}

#[test]
fn test_reset_restores_defaults() {
    let mut store = SettingsStore::new();
    store.set_calculation_method(13);
    store.set_language("tr");
    store.set_theme(ThemeMode::Dark);
    store.set_notifications(false);
    store.set_location(Some(Location::new(41.0, 29.0)));
    store.set_background_color("burgundy");
    store.set_card_opacity(0.3);

    store.reset_settings();

    assert_eq!(store.settings(), &Settings::default());
}

#[test]
fn test_card_opacity_is_not_clamped() {
    let mut store = SettingsStore::new();
    for value in [0.0, 0.42, 1.0, 1.5, -0.25] {
        store.set_card_opacity(value);
        assert_eq!(store.card_opacity(), value);
    }
}

#[test]
fn test_calculation_method_accepts_any_code() {
    let mut store = SettingsStore::new();
    store.set_calculation_method(13);
    assert_eq!(store.calculation_method(), 13);
    store.set_calculation_method(99);
    assert_eq!(store.calculation_method(), 99);
}

#[test]
fn test_setters_touch_only_their_field() {
    let mut store = SettingsStore::new();
    store.set_selected_translation("tr.diyanet");

    let mut expected = Settings::default();
    expected.selected_translation = "tr.diyanet".to_string();
    assert_eq!(store.settings(), &expected);
}

#[test]
fn test_listener_notified_once_per_mutation() {
    let mut store = SettingsStore::new();
    let seen: Rc<RefCell<Vec<SettingsChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |settings, change| {
        if change == SettingsChange::CalculationMethod {
            assert_eq!(settings.calculation_method, 5);
        }
        sink.borrow_mut().push(change);
    });

    store.set_calculation_method(5);
    store.set_ezan_sound(false);
    store.set_background_color("navy");
    store.reset_settings();

    assert_eq!(
        *seen.borrow(),
        vec![
            SettingsChange::CalculationMethod,
            SettingsChange::EzanSound,
            SettingsChange::Background,
            SettingsChange::Reset,
        ]
    );
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut store = SettingsStore::new();
    let count = Rc::new(RefCell::new(0));
    let counter = count.clone();
    let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

    store.set_language("ar");
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_language("en");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn test_revision_counts_mutations() {
    let mut store = SettingsStore::new();
    assert_eq!(store.revision(), 0);
    store.set_theme(ThemeMode::Light);
    store.set_theme(ThemeMode::Light);
    store.set_location(None);
    assert_eq!(store.revision(), 3);
    assert!(!store.is_persistent());
}
