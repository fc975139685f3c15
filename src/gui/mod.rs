//! Native settings GUI
//!
//! The window hosts the Response Settings page. Widgets write straight to
//! the config file through a shared [`SettingsStore`](crate::store::SettingsStore),
//! so there is no save button.

pub mod app;
pub mod helpers;
pub mod layout;
pub mod pages;
pub mod runner;
pub mod theme;
pub mod widgets;

pub use app::SettingsApp;
pub use layout::{LayoutOutput, PageLayout, RenderedChild};
pub use pages::{PageOutput, PageTree, ResponsesPage};
pub use runner::run_gui;
pub use widgets::{
    AutoScrollToggle, LanguageSelector, ResponseLengthControl, SettingsWidget, WidgetKind,
};
