//! Response length control

use egui::RichText;

use super::{persist, SettingsWidget, WidgetKind};
use crate::config::ResponseLength;
use crate::gui::helpers::{render_section_frame, render_section_header, render_status_message};
use crate::gui::theme::{ACCENT_TEAL, TEXT_DIM, TEXT_MUTED};
use crate::store::SettingsStore;

/// Segmented choice between short, medium and automatic response length
pub struct ResponseLengthControl {
    store: SettingsStore,
    status: Option<(String, bool)>,
}

impl Default for ResponseLengthControl {
    fn default() -> Self {
        Self::new(SettingsStore::global().clone())
    }
}

impl ResponseLengthControl {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            status: None,
        }
    }

    pub fn current(&self) -> ResponseLength {
        self.store.responses().length
    }

    /// Select and persist `length`; returns true if it changed
    pub fn select(&mut self, length: ResponseLength) -> bool {
        persist(&self.store, &mut self.status, "response length", |s| {
            s.length = length;
        })
    }
}

impl SettingsWidget for ResponseLengthControl {
    fn kind(&self) -> WidgetKind {
        WidgetKind::ResponseLength
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        render_section_header(
            ui,
            WidgetKind::ResponseLength.label(),
            "How long generated answers should be",
        );

        let current = self.current();
        let mut selected = current;
        render_section_frame(ui, |ui| {
            ui.horizontal(|ui| {
                for length in ResponseLength::ALL {
                    let color = if length == selected { ACCENT_TEAL } else { TEXT_DIM };
                    ui.selectable_value(
                        &mut selected,
                        length,
                        RichText::new(length.label()).color(color),
                    );
                }
            });
            ui.add_space(4.0);
            ui.label(RichText::new(selected.description()).small().color(TEXT_MUTED));
        });

        if selected != current {
            self.select(selected);
        }
        render_status_message(ui, &self.status);
    }
}
