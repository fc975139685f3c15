//! Response Settings page
//!
//! Stateless composition of the response length, language and auto-scroll
//! widgets inside a [`PageLayout`]. The page owns no settings itself; each
//! widget loads and saves its own value.

use crate::gui::layout::{LayoutOutput, PageLayout};
use crate::gui::widgets::{
    AutoScrollToggle, LanguageSelector, ResponseLengthControl, SettingsWidget, WidgetKind,
};
use crate::store::SettingsStore;

pub const TITLE: &str = "Response Settings";
pub const DESCRIPTION: &str = "Customize how AI generates and displays responses";

/// Declarative shape of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTree {
    pub title: &'static str,
    pub description: &'static str,
    pub children: Vec<WidgetKind>,
}

pub type PageOutput = LayoutOutput;

/// The Response Settings page
pub struct ResponsesPage {
    response_length: ResponseLengthControl,
    language: LanguageSelector,
    auto_scroll: AutoScrollToggle,
}

impl Default for ResponsesPage {
    fn default() -> Self {
        Self {
            response_length: ResponseLengthControl::default(),
            language: LanguageSelector::default(),
            auto_scroll: AutoScrollToggle::default(),
        }
    }
}

impl ResponsesPage {
    /// Mount the widgets against `store` instead of the global store
    pub fn with_store(store: &SettingsStore) -> Self {
        Self {
            response_length: ResponseLengthControl::new(store.clone()),
            language: LanguageSelector::new(store.clone()),
            auto_scroll: AutoScrollToggle::new(store.clone()),
        }
    }

    fn widgets(&self) -> [&dyn SettingsWidget; 3] {
        [&self.response_length, &self.language, &self.auto_scroll]
    }

    fn widgets_mut(&mut self) -> [&mut dyn SettingsWidget; 3] {
        [
            &mut self.response_length,
            &mut self.language,
            &mut self.auto_scroll,
        ]
    }

    pub fn structure(&self) -> PageTree {
        PageTree {
            title: TITLE,
            description: DESCRIPTION,
            children: self.widgets().iter().map(|w| w.kind()).collect(),
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) -> PageOutput {
        let layout = PageLayout::new(TITLE, DESCRIPTION);
        layout.show(ui, &mut self.widgets_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_order() {
        let page = ResponsesPage::with_store(&SettingsStore::in_memory());
        assert_eq!(
            page.structure(),
            PageTree {
                title: "Response Settings",
                description: "Customize how AI generates and displays responses",
                children: vec![
                    WidgetKind::ResponseLength,
                    WidgetKind::LanguageSelector,
                    WidgetKind::AutoScrollToggle,
                ],
            }
        );
    }
}
