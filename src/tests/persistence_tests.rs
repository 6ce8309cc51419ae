use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::constants::SETTINGS_STORAGE_KEY;
use crate::error::PrayerResult;
use crate::models::{BackgroundKind, Settings};
use crate::store::{FileStorage, MemoryStorage, PersistStatus, SettingsStore, Storage};

/// Counts writes on top of an in-memory map.
#[derive(Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: AtomicUsize,
}

impl Storage for CountingStorage {
    fn read(&self, key: &str) -> PrayerResult<Option<String>> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> PrayerResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.write(key, value)
    }

    fn remove(&self, key: &str) -> PrayerResult<()> {
        self.inner.remove(key)
    }
}

fn stored(storage: &MemoryStorage) -> Settings {
    let blob = storage.get(SETTINGS_STORAGE_KEY).expect("settings were written");
    serde_json::from_str(&blob).unwrap()
}

#[tokio::test]
async fn test_mutations_are_persisted() {
    let storage = MemoryStorage::new();
    let mut store = SettingsStore::open(Arc::new(storage.clone()));

    store.set_calculation_method(13);
    store.set_background_color("navy");
    store.flush().await.unwrap();

    assert_eq!(&stored(&storage), store.settings());
    assert_eq!(
        *store.persist_status().unwrap().borrow(),
        PersistStatus::Saved { revision: 2 }
    );
}

#[tokio::test]
async fn test_open_rehydrates_previous_session() {
    let storage = MemoryStorage::new();
    {
        let mut store = SettingsStore::open(Arc::new(storage.clone()));
        store.set_language("tr");
        store.set_card_opacity(0.5);
        store.flush().await.unwrap();
    }

    let store = SettingsStore::open(Arc::new(storage));
    assert_eq!(store.language(), "tr");
    assert_eq!(store.card_opacity(), 0.5);
    assert_eq!(store.revision(), 0);
}

#[tokio::test]
async fn test_queued_writes_are_coalesced() {
    let storage = Arc::new(CountingStorage::default());
    let mut store = SettingsStore::open(storage.clone());

    store.set_calculation_method(1);
    store.set_calculation_method(2);
    store.set_calculation_method(4);
    store.flush().await.unwrap();

    assert_eq!(storage.writes.load(Ordering::SeqCst), 1);
    let blob = storage.read(SETTINGS_STORAGE_KEY).unwrap().unwrap();
    let settings: Settings = serde_json::from_str(&blob).unwrap();
    assert_eq!(settings.calculation_method, 4);
}

#[tokio::test]
async fn test_failed_write_is_reported() {
    let storage = MemoryStorage::new();
    storage.set_fail_writes(true);
    let mut store = SettingsStore::open(Arc::new(storage.clone()));

    store.set_notifications(false);
    assert!(store.flush().await.is_err());
    assert!(matches!(
        *store.persist_status().unwrap().borrow(),
        PersistStatus::Failed { revision: 1, .. }
    ));
    // In-memory state is still updated
    assert!(!store.notifications());

    storage.set_fail_writes(false);
    store.set_notifications(true);
    assert!(store.flush().await.is_ok());
    assert!(stored(&storage).notifications);
}

#[tokio::test]
async fn test_non_finite_opacity_keeps_last_good_blob() {
    let storage = MemoryStorage::new();
    let mut store = SettingsStore::open(Arc::new(storage.clone()));
    store.set_calculation_method(13);
    store.set_language("tr");
    store.flush().await.unwrap();

    store.set_card_opacity(f64::INFINITY);
    assert!(store.flush().await.is_err());
    assert!(matches!(
        *store.persist_status().unwrap().borrow(),
        PersistStatus::Failed { revision: 3, .. }
    ));

    store.set_card_opacity(0.8);
    store.set_background_opacity(f64::NAN);
    assert!(store.flush().await.is_err());

    let reopened = SettingsStore::open(Arc::new(storage.clone()));
    assert_eq!(reopened.calculation_method(), 13);
    assert_eq!(reopened.language(), "tr");
    assert!(reopened.card_opacity().is_finite());
}

#[tokio::test]
async fn test_corrupt_blob_loads_defaults() {
    let storage = MemoryStorage::new();
    storage.write(SETTINGS_STORAGE_KEY, "{\"calculationMethod\": ").unwrap();

    let store = SettingsStore::open(Arc::new(storage));
    assert_eq!(store.settings(), &Settings::default());
}

#[test]
fn test_partial_blob_fills_defaults() {
    let storage = MemoryStorage::new();
    storage
        .write(SETTINGS_STORAGE_KEY, r#"{"calculationMethod": 13, "language": "ar"}"#)
        .unwrap();

    let settings = SettingsStore::load(&storage);
    assert_eq!(settings.calculation_method, 13);
    assert_eq!(settings.language, "ar");
    assert_eq!(settings.selected_translation, "en.sahih");
    assert_eq!(settings.card_opacity, 0.9);
}

#[test]
fn test_inconsistent_background_is_normalized() {
    let storage = MemoryStorage::new();
    storage
        .write(
            SETTINGS_STORAGE_KEY,
            r#"{"background": {"type": "color", "imageId": "night_sky", "colorId": "teal", "opacity": 0.6}}"#,
        )
        .unwrap();

    let settings = SettingsStore::load(&storage);
    assert_eq!(settings.background.kind(), BackgroundKind::Color);
    assert_eq!(settings.background.color_id(), Some("teal"));
    assert_eq!(settings.background.image_id(), None);
    assert_eq!(settings.background.opacity(), 0.6);
}

#[tokio::test]
async fn test_file_storage_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let path = storage.path_for(SETTINGS_STORAGE_KEY);

    let mut store = SettingsStore::open(Arc::new(storage.clone()));
    store.set_background_image("desert_dunes");
    store.flush().await.unwrap();

    assert!(path.exists());
    let reloaded = SettingsStore::load(&storage);
    assert_eq!(reloaded.background.image_id(), Some("desert_dunes"));
}
