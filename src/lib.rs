//! Response Settings
//!
//! A small desktop settings page that controls how an AI assistant answers:
//! how long responses are, which language they are written in, and whether
//! the output view follows a streaming response.
//!
//! ## Layout
//!
//! - [`config`]: TOML config file, locking and atomic saves
//! - [`store`]: shared handle the widgets read and persist through
//! - [`gui`]: egui page layout, leaf widgets and the Response Settings page

pub mod config;
pub mod error;
pub mod gui;
pub mod store;

pub use config::{Config, ResponseLength, ResponseSettings};
pub use error::SettingsError;
pub use store::SettingsStore;
