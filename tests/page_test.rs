//! Tests for the Response Settings page composition
//!
//! Covers the fixed title/description, the child order and count, and
//! that rendering is side-effect free at the page level.

mod common;

use response_settings::gui::pages::{DESCRIPTION, TITLE};
use response_settings::gui::{ResponsesPage, SettingsApp, WidgetKind};
use response_settings::{ResponseLength, SettingsStore};

use common::{render_once, temp_store};

const EXPECTED_ORDER: [WidgetKind; 3] = [
    WidgetKind::ResponseLength,
    WidgetKind::LanguageSelector,
    WidgetKind::AutoScrollToggle,
];

#[test]
fn test_page_text_is_fixed() {
    assert_eq!(TITLE, "Response Settings");
    assert_eq!(
        DESCRIPTION,
        "Customize how AI generates and displays responses"
    );

    let ctx = egui::Context::default();
    let mut page = ResponsesPage::with_store(&SettingsStore::in_memory());
    let output = render_once(&ctx, |ui| page.show(ui));

    assert_eq!(output.title, "Response Settings");
    assert_eq!(
        output.description,
        "Customize how AI generates and displays responses"
    );
}

#[test]
fn test_each_widget_rendered_exactly_once_in_order() {
    let ctx = egui::Context::default();
    let mut page = ResponsesPage::with_store(&SettingsStore::in_memory());
    let output = render_once(&ctx, |ui| page.show(ui));

    let kinds: Vec<_> = output.children.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, EXPECTED_ORDER);
    assert_eq!(page.structure().children, EXPECTED_ORDER);
}

#[test]
fn test_widgets_stack_top_to_bottom() {
    let ctx = egui::Context::default();
    let mut page = ResponsesPage::with_store(&SettingsStore::in_memory());
    let output = render_once(&ctx, |ui| page.show(ui));

    for pair in output.children.windows(2) {
        assert!(
            pair[0].rect.max.y <= pair[1].rect.min.y,
            "{:?} should be above {:?}",
            pair[0].kind,
            pair[1].kind
        );
    }
}

#[test]
fn test_rerender_is_structurally_identical() {
    let ctx = egui::Context::default();
    let mut page = ResponsesPage::with_store(&SettingsStore::in_memory());

    let first = render_once(&ctx, |ui| page.show(ui));
    for _ in 0..3 {
        let next = render_once(&ctx, |ui| page.show(ui));
        assert_eq!(next.title, first.title);
        assert_eq!(next.description, first.description);
        let kinds: Vec<_> = next.children.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, EXPECTED_ORDER);
    }
    assert_eq!(page.structure(), page.structure());
}

#[test]
fn test_fresh_mount_renders_without_config_file() {
    let (dir, store) = temp_store();
    let mut page = ResponsesPage::with_store(&store);

    let ctx = egui::Context::default();
    let output = render_once(&ctx, |ui| page.show(ui));

    assert_eq!(output.children.len(), 3);
    // The page never writes on its own
    assert!(!dir.path().join("config.toml").exists());
}

#[test]
fn test_default_page_mounts_without_arguments() {
    let page = ResponsesPage::default();
    assert_eq!(page.structure().children, EXPECTED_ORDER);
}

#[test]
fn test_page_reflects_settings_changed_elsewhere() {
    let (_dir, store) = temp_store();
    let mut page = ResponsesPage::with_store(&store);
    let ctx = egui::Context::default();
    render_once(&ctx, |ui| page.show(ui));

    store
        .update(|s| {
            s.length = ResponseLength::Short;
            s.language = "ja".to_string();
            s.auto_scroll = false;
        })
        .unwrap();

    let output = render_once(&ctx, |ui| page.show(ui));
    let kinds: Vec<_> = output.children.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, EXPECTED_ORDER);
    // Rendering keeps what another writer stored
    let settings = store.responses();
    assert_eq!(settings.length, ResponseLength::Short);
    assert_eq!(settings.language, "ja");
    assert!(!settings.auto_scroll);
}

#[test]
fn test_app_renders_page() {
    let ctx = egui::Context::default();
    let mut app = SettingsApp::new(ResponsesPage::with_store(&SettingsStore::in_memory()));
    let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
}
