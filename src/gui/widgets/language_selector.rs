//! Response language selector

use egui::RichText;

use super::{persist, SettingsWidget, WidgetKind};
use crate::config::{filter_languages, find_language, resolve_language, Language};
use crate::error::SettingsError;
use crate::gui::helpers::{render_section_frame, render_section_header, render_status_message};
use crate::gui::theme::{TEXT_MUTED, TEXT_PRIMARY};
use crate::store::SettingsStore;

/// Drop-down of supported response languages with a search field
pub struct LanguageSelector {
    store: SettingsStore,
    filter: String,
    status: Option<(String, bool)>,
}

impl Default for LanguageSelector {
    fn default() -> Self {
        Self::new(SettingsStore::global().clone())
    }
}

impl LanguageSelector {
    pub fn new(store: SettingsStore) -> Self {
        Self {
            store,
            filter: String::new(),
            status: None,
        }
    }

    /// Currently configured language; unknown codes resolve to English
    pub fn current(&self) -> &'static Language {
        resolve_language(&self.store.responses().language)
    }

    /// Select and persist the language with `code`; returns true if it changed
    pub fn select(&mut self, code: &str) -> Result<bool, SettingsError> {
        let language =
            find_language(code).ok_or_else(|| SettingsError::UnknownLanguage(code.to_string()))?;
        Ok(persist(&self.store, &mut self.status, "language", |s| {
            s.language = language.code.to_string();
        }))
    }

    /// Handle a pick from the drop-down. `None` means nothing was clicked.
    ///
    /// Compared against the stored code, not the resolved one, so picking
    /// English replaces an unknown stored code.
    fn apply_pick(&mut self, picked: Option<&'static str>) {
        let Some(code) = picked else {
            return;
        };
        if code != self.store.responses().language {
            // Codes come from the built-in table, so lookup cannot fail
            if let Err(e) = self.select(code) {
                self.status = Some((e.to_string(), true));
            }
        }
        self.filter.clear();
    }
}

impl SettingsWidget for LanguageSelector {
    fn kind(&self) -> WidgetKind {
        WidgetKind::LanguageSelector
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        render_section_header(
            ui,
            WidgetKind::LanguageSelector.label(),
            "Language the AI should respond in",
        );

        let current = self.current();
        let mut selected = current.code;
        let mut picked = None;
        let filter = &mut self.filter;
        render_section_frame(ui, |ui| {
            egui::ComboBox::from_id_salt("response_language")
                .selected_text(RichText::new(current.name).color(TEXT_PRIMARY))
                .width(220.0)
                .show_ui(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut *filter)
                            .hint_text("Search languages")
                            .desired_width(200.0),
                    );
                    ui.separator();
                    let mut any = false;
                    for language in filter_languages(filter.as_str()) {
                        any = true;
                        if ui
                            .selectable_value(&mut selected, language.code, language.name)
                            .clicked()
                        {
                            picked = Some(language.code);
                        }
                    }
                    if !any {
                        ui.label(
                            RichText::new("No matching language")
                                .small()
                                .color(TEXT_MUTED),
                        );
                    }
                });
        });

        self.apply_pick(picked);
        render_status_message(ui, &self.status);
    }
}
