//! Shared page frame: title, description and a scrolling body

use egui::{Rect, RichText, ScrollArea};

use super::theme::{TEXT_MUTED, TEXT_PRIMARY};
use super::widgets::{SettingsWidget, WidgetKind};

/// One child as it was placed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedChild {
    pub kind: WidgetKind,
    pub rect: Rect,
}

/// What a layout pass produced
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutput {
    pub title: String,
    pub description: String,
    /// Children in the order they were rendered
    pub children: Vec<RenderedChild>,
}

/// Titled, described frame that renders its children top to bottom
pub struct PageLayout<'a> {
    title: &'a str,
    description: &'a str,
}

impl<'a> PageLayout<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self { title, description }
    }

    /// Render the header and then each child in the order supplied
    pub fn show(
        &self,
        ui: &mut egui::Ui,
        children: &mut [&mut dyn SettingsWidget],
    ) -> LayoutOutput {
        ui.label(RichText::new(self.title).size(20.0).strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(self.description).color(TEXT_MUTED));
        ui.add_space(16.0);

        let rendered = ScrollArea::vertical()
            .id_salt(self.title)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let mut rendered = Vec::with_capacity(children.len());
                for child in children.iter_mut() {
                    let rect = ui.scope(|ui| child.show(ui)).response.rect;
                    rendered.push(RenderedChild {
                        kind: child.kind(),
                        rect,
                    });
                    ui.add_space(20.0);
                }
                rendered
            })
            .inner;

        LayoutOutput {
            title: self.title.to_string(),
            description: self.description.to_string(),
            children: rendered,
        }
    }
}
