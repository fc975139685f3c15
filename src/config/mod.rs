//! Configuration loading and management

mod io;
mod language;
mod responses;

pub use io::ConfigFileLock;
pub use language::{
    DEFAULT_LANGUAGE, LANGUAGES, Language, filter_languages, find_language, resolve_language,
};
pub use responses::{ResponseLength, ResponseSettings};

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Settings edited on the Response Settings page
    #[serde(default)]
    pub responses: ResponseSettings,
}
