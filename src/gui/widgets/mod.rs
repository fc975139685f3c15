//! Leaf settings widgets
//!
//! Every widget can be mounted with no arguments (`Default` uses the global
//! [`SettingsStore`]) and reads and persists its own setting.

mod auto_scroll;
mod language_selector;
mod response_length;

pub use auto_scroll::AutoScrollToggle;
pub use language_selector::LanguageSelector;
pub use response_length::ResponseLengthControl;

use tracing::{info, warn};

use crate::config::ResponseSettings;
use crate::store::SettingsStore;

/// Identifies a widget in a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    ResponseLength,
    LanguageSelector,
    AutoScrollToggle,
}

impl WidgetKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::ResponseLength => "Response Length",
            Self::LanguageSelector => "Language",
            Self::AutoScrollToggle => "Auto-Scroll",
        }
    }
}

/// A self-contained settings widget that can be placed in a page layout
pub trait SettingsWidget {
    fn kind(&self) -> WidgetKind;

    /// Render the widget, persisting any change the user makes
    fn show(&mut self, ui: &mut egui::Ui);
}

/// Apply `f` through the store and record the outcome in `status`.
///
/// Returns true when the setting changed and was saved.
fn persist<F>(
    store: &SettingsStore,
    status: &mut Option<(String, bool)>,
    what: &str,
    f: F,
) -> bool
where
    F: FnOnce(&mut ResponseSettings),
{
    match store.update(f) {
        Ok(changed) => {
            if changed {
                info!("Saved {}", what);
            }
            *status = None;
            changed
        }
        Err(e) => {
            warn!("Failed to save {}: {}", what, e);
            *status = Some((format!("Failed to save {}: {}", what, e), true));
            false
        }
    }
}

#[cfg(test)]
pub(crate) fn run_headless(mut add_contents: impl FnMut(&mut egui::Ui)) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
    });
}
