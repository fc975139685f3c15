//! GUI runner - opens the settings window

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::create_app;
use super::pages::{ResponsesPage, TITLE};
use crate::store::SettingsStore;

/// Run the settings window until it is closed
pub fn run_gui(store: SettingsStore) -> Result<()> {
    match store.path() {
        Some(path) => info!("Editing settings in {}", path.display()),
        None => info!("Editing in-memory settings"),
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size([600.0, 560.0])
            .with_min_inner_size([420.0, 380.0])
            .with_resizable(true),
        centered: false,
        ..Default::default()
    };

    eframe::run_native(
        "response-settings",
        options,
        Box::new(move |cc| {
            let page = ResponsesPage::with_store(&store);
            Ok(Box::new(create_app(&cc.egui_ctx, page)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
