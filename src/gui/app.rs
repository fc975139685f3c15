//! eframe::App hosting the settings pages

use egui::{Pos2, Vec2};

use super::pages::ResponsesPage;
use super::theme::{BG_PRIMARY, apply_theme};

/// Distance from the top of the screen to the window
pub const TOP_OFFSET: f32 = 54.0;

/// Outer position that centres a `window`-sized window horizontally on a
/// `monitor`-sized screen, [`TOP_OFFSET`] below its top edge
pub fn top_center_position(monitor: Vec2, window: Vec2) -> Pos2 {
    Pos2::new(((monitor.x - window.x) / 2.0).max(0.0), TOP_OFFSET)
}

/// Desktop app showing the Response Settings page
pub struct SettingsApp {
    page: ResponsesPage,
    positioned: bool,
}

impl SettingsApp {
    pub fn new(page: ResponsesPage) -> Self {
        Self {
            page,
            positioned: false,
        }
    }

    /// Render one frame into `ctx`
    pub fn render(&mut self, ctx: &egui::Context) {
        self.place_window(ctx);
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                self.page.show(ui);
            });
    }

    /// Move the window to the top centre once the monitor size is known
    fn place_window(&mut self, ctx: &egui::Context) {
        if self.positioned {
            return;
        }
        let (monitor, outer) = ctx.input(|i| (i.viewport().monitor_size, i.viewport().outer_rect));
        let (Some(monitor), Some(outer)) = (monitor, outer) else {
            return;
        };

        let position = top_center_position(monitor, outer.size());
        tracing::debug!("Placing window at {:?}", position);
        ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(position));
        self.positioned = true;
    }
}

impl eframe::App for SettingsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

/// Build the app with the theme applied to `ctx`
pub(crate) fn create_app(ctx: &egui::Context, page: ResponsesPage) -> SettingsApp {
    apply_theme(ctx);
    SettingsApp::new(page)
}
