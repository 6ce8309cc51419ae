use std::sync::Arc;

use prayer_companion::constants::SETTINGS_STORAGE_KEY;
use prayer_companion::{
    BackgroundKind, FileStorage, LocationMode, PersistStatus, Settings, SettingsStore, Storage, ThemeMode,
};
use prayer_companion::Location;

#[tokio::test]
async fn test_settings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    {
        let mut store = SettingsStore::open(Arc::new(storage.clone()));
        store.set_calculation_method(13);
        store.set_language("tr");
        store.set_theme(ThemeMode::Dark);
        store.set_location(Some(
            Location::new(41.0082, 28.9784).with_place(Some("Istanbul".into()), Some("Türkiye".into())),
        ));
        store.set_location_mode(LocationMode::Manual);
        store.set_background_color("navy");
        store.set_card_opacity(0.75);
        store.flush().await.unwrap();
    }

    let store = SettingsStore::open(Arc::new(storage));
    assert_eq!(store.calculation_method(), 13);
    assert_eq!(store.language(), "tr");
    assert_eq!(store.theme(), ThemeMode::Dark);
    assert_eq!(store.location().and_then(|l| l.city.as_deref()), Some("Istanbul"));
    assert_eq!(store.location_mode(), LocationMode::Manual);
    assert_eq!(store.background().kind(), BackgroundKind::Color);
    assert_eq!(store.background().color_id(), Some("navy"));
    assert_eq!(store.background().image_id(), None);
    assert_eq!(store.card_opacity(), 0.75);
}

#[tokio::test]
async fn test_stored_blob_uses_camel_case_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut store = SettingsStore::open(Arc::new(storage.clone()));
    store.set_ezan_sound(false);
    store.flush().await.unwrap();

    let blob = storage.read(SETTINGS_STORAGE_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json["calculationMethod"], 3);
    assert_eq!(json["ezanSound"], false);
    assert_eq!(json["selectedTranslation"], "en.sahih");
    assert_eq!(json["background"]["type"], "image");
    assert_eq!(json["background"]["imageId"], "geometric_gold");
    assert_eq!(json["cardOpacity"], 0.9);
}

#[tokio::test]
async fn test_reset_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut store = SettingsStore::open(Arc::new(storage.clone()));
    store.set_notifications(false);
    store.set_background_image("mountain_dawn");
    store.reset_settings();
    store.flush().await.unwrap();

    assert_eq!(SettingsStore::load(&storage), Settings::default());
    assert!(matches!(
        *store.persist_status().unwrap().borrow(),
        PersistStatus::Saved { revision: 3 }
    ));
}

#[test]
fn test_missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("not-created-yet"));
    assert_eq!(SettingsStore::load(&storage), Settings::default());
}
