//! In-memory integration tests for settings updates.

use super::helpers::{TestStore, open_store, store};
use rstest::rstest;
use servicetask::settings::domain::{ColorPreset, SettingsError, SettingsPatch, Theme};
use servicetask::storage::adapters::InMemoryKeyValueStore;
use servicetask::storage::ports::KeyValueStore;

#[rstest]
fn settings_updates_persist_and_reload() -> Result<(), eyre::Report> {
    let storage = InMemoryKeyValueStore::new();
    let mut store = open_store(&storage);

    let patch = SettingsPatch::parse(Some("light"), Some("blue"))?;
    store.update_settings(patch);

    let stored = storage
        .load("stl-settings")?
        .ok_or_else(|| eyre::eyre!("settings were not written"))?;
    let stored_json: serde_json::Value = serde_json::from_str(&stored)?;
    eyre::ensure!(
        stored_json
            == serde_json::json!({
                "theme": "light",
                "primaryColor": { "name": "Blue", "hsl": "217 91% 60%", "hex": "#3b82f6" },
            })
    );

    let reopened = open_store(&storage);
    eyre::ensure!(reopened.settings().theme() == Theme::Light);
    eyre::ensure!(reopened.settings().primary_color() == ColorPreset::Blue);
    Ok(())
}

#[rstest]
fn invalid_patch_is_rejected_before_the_store_sees_it(store: TestStore) {
    let result = SettingsPatch::parse(Some("solarized"), None);

    assert_eq!(
        result,
        Err(SettingsError::UnknownTheme("solarized".to_owned()))
    );
    assert_eq!(store.settings().theme(), Theme::Dark);
}

#[rstest]
fn appearance_follows_settings(mut store: TestStore) -> Result<(), eyre::Report> {
    store.update_settings(SettingsPatch::new().with_primary_color(ColorPreset::Amber));

    let css = store.appearance().to_css()?;

    eyre::ensure!(css.contains("--primary: 43 96% 56%;"));
    eyre::ensure!(store.appearance().root_class() == Some("dark"));
    Ok(())
}
