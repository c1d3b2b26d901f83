//! Integration tests for the settings stores

use settings_form::domain::SettingsRepository;
use settings_form::infra::storage::{JsonFileSettingsStore, MemorySettingsStore};
use settings_form::{SettingValue, SettingsRecord};

fn sample_record() -> SettingsRecord {
    let mut record = SettingsRecord::new();
    record.set("currency", SettingValue::text("EUR"));
    record.set(
        "gateways",
        SettingValue::Map(
            [("paddle".to_string(), "1".to_string())]
                .into_iter()
                .collect(),
        ),
    );
    record.set(
        "enabled_icons",
        SettingValue::List(vec!["visa".to_string()]),
    );
    record
}

#[tokio::test]
async fn file_store_round_trips_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

    assert!(store.load().await.unwrap().is_none());

    let record = sample_record();
    store.save(&record).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn file_store_replaces_the_record_whole() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

    store.save(&sample_record()).await.unwrap();

    let mut smaller = SettingsRecord::new();
    smaller.set("currency", SettingValue::text("USD"));
    store.save(&smaller).await.unwrap();

    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, smaller);
}

#[tokio::test]
async fn file_store_ensure_exists_creates_an_empty_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

    store.ensure_exists().await.unwrap();
    let loaded = store.load().await.unwrap();
    assert_eq!(loaded, Some(SettingsRecord::new()));

    // A second call must not clobber saved data.
    store.save(&sample_record()).await.unwrap();
    store.ensure_exists().await.unwrap();
    let loaded = store.load().await.unwrap().unwrap();
    assert_eq!(loaded, sample_record());
}

#[tokio::test]
async fn memory_store_is_empty_until_ensured() {
    let store = MemorySettingsStore::new();
    assert!(store.load().await.unwrap().is_none());

    store.ensure_exists().await.unwrap();
    assert_eq!(store.load().await.unwrap(), Some(SettingsRecord::new()));
}
