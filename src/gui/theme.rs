//! GUI theme: muted slate panels with a teal accent
//!
//! Color constants and style setup shared by every settings view.

use eframe::egui::{self, Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background
pub const BG_PRIMARY: Color32 = Color32::from_rgb(20, 22, 27);
/// Section cards
pub const BG_SECONDARY: Color32 = Color32::from_rgb(29, 32, 39);
/// Hovered and active widgets
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(41, 47, 58);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 234, 240);
pub const TEXT_DIM: Color32 = Color32::from_rgb(170, 176, 190);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(112, 119, 135);

// ═══════════════════════════════════════════════════════════════════════════
// ACCENT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const ACCENT_TEAL: Color32 = Color32::from_rgb(45, 212, 191);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 220, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(240, 90, 90);

/// Apply the dark theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = BG_SECONDARY;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.active.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.bg_fill = BG_HIGHLIGHT;
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT_TEAL);
    ctx.set_style(style);
}
