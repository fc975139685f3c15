//! Shared helpers for settings integration tests

#![allow(dead_code)]

use response_settings::SettingsStore;
use tempfile::TempDir;

/// Creates a store backed by `config.toml` in a fresh temp directory.
/// Keep the `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, SettingsStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SettingsStore::open(dir.path().join("config.toml"));
    (dir, store)
}

/// Runs one headless egui pass with `add_contents` inside a central panel
pub fn render_once<R>(
    ctx: &egui::Context,
    mut add_contents: impl FnMut(&mut egui::Ui) -> R,
) -> R {
    let mut result = None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            result = Some(add_contents(ui));
        });
    });
    result.expect("central panel did not render")
}
