//! Auto-scroll toggle

use super::{persist, SettingsWidget, WidgetKind};
use crate::gui::helpers::{
    render_checkbox_field, render_section_frame, render_section_header, render_status_message,
};
use crate::store::SettingsStore;

/// Checkbox controlling whether streaming responses stay scrolled to the end
pub struct AutoScrollToggle {
    store: SettingsStore,
    status: Option<(String, bool)>,
}

impl Default for AutoScrollToggle {
    fn default() -> Self {
        Self::new(SettingsStore::global().clone())
    }
}

impl AutoScrollToggle {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            status: None,
        }
    }

    pub fn enabled(&self) -> bool {
        self.store.responses().auto_scroll
    }

    /// Set and persist the flag; returns true if it changed
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        persist(&self.store, &mut self.status, "auto-scroll", |s| {
            s.auto_scroll = enabled;
        })
    }
}

impl SettingsWidget for AutoScrollToggle {
    fn kind(&self) -> WidgetKind {
        WidgetKind::AutoScrollToggle
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        render_section_header(
            ui,
            WidgetKind::AutoScrollToggle.label(),
            "Scrolling behaviour while a response streams in",
        );

        let current = self.enabled();
        let mut enabled = current;
        render_section_frame(ui, |ui| {
            render_checkbox_field(
                ui,
                &mut enabled,
                "Auto-Scroll",
                "(keep the latest response in view while it streams)",
            );
        });

        if enabled != current {
            self.set_enabled(enabled);
        }
        render_status_message(ui, &self.status);
    }
}
