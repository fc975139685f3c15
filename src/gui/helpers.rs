//! UI helper functions for settings rendering

use egui::RichText;

use super::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

/// Render a section heading with a one-line explanation below it
pub fn render_section_header(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.label(RichText::new(title).strong().color(TEXT_PRIMARY));
    ui.label(RichText::new(description).small().color(TEXT_MUTED));
    ui.add_space(6.0);
}

/// Render a labeled checkbox with description
pub fn render_checkbox_field(
    ui: &mut egui::Ui,
    value: &mut bool,
    label: &str,
    description: &str,
) -> egui::Response {
    ui.horizontal(|ui| {
        let response = ui.checkbox(value, "");
        ui.label(RichText::new(label).color(TEXT_DIM));
        ui.label(RichText::new(description).small().color(TEXT_MUTED));
        response
    })
    .inner
}

/// Render a status message (success or error)
pub fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.add_space(4.0);
        ui.label(RichText::new(msg).small().color(color));
    }
}

/// Render a section frame with secondary background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .corner_radius(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents)
        .inner
}
