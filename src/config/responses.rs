//! Response settings: length, language and auto-scroll

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::language::{resolve_language, DEFAULT_LANGUAGE};
use crate::error::SettingsError;

/// How long generated responses should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseLength {
    Short,
    Medium,
    #[default]
    Auto,
}

impl ResponseLength {
    pub const ALL: [ResponseLength; 3] = [Self::Short, Self::Medium, Self::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Auto => "auto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Auto => "Auto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Short => "Brief, to-the-point answers",
            Self::Medium => "Balanced answers with key details",
            Self::Auto => "Let the model decide based on the question",
        }
    }

    /// Instruction appended to the system prompt, `None` for `Auto`
    pub fn prompt_instruction(&self) -> Option<&'static str> {
        match self {
            Self::Short => Some(
                "Keep responses short: answer in a few sentences and skip background unless asked.",
            ),
            Self::Medium => Some(
                "Keep responses moderately detailed: cover the key points without digressions.",
            ),
            Self::Auto => None,
        }
    }
}

impl fmt::Display for ResponseLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseLength {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "auto" => Ok(Self::Auto),
            other => Err(SettingsError::UnknownLength(other.to_string())),
        }
    }
}

/// Settings shown on the Response Settings page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSettings {
    #[serde(default)]
    pub length: ResponseLength,

    /// Language code (see `LANGUAGES`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Keep the newest output in view while a response streams
    #[serde(default = "default_auto_scroll")]
    pub auto_scroll: bool,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_auto_scroll() -> bool {
    true
}

impl Default for ResponseSettings {
    fn default() -> Self {
        Self {
            length: ResponseLength::default(),
            language: default_language(),
            auto_scroll: default_auto_scroll(),
        }
    }
}

impl ResponseSettings {
    /// System prompt suffix implied by these settings.
    ///
    /// Empty when the length is `Auto` and the language is English.
    pub fn prompt_instructions(&self) -> String {
        let mut lines = Vec::new();
        if let Some(instruction) = self.length.prompt_instruction() {
            lines.push(instruction.to_string());
        }
        let language = resolve_language(&self.language);
        if language.code != DEFAULT_LANGUAGE {
            lines.push(format!("Respond in {}.", language.name));
        }
        lines.join("\n")
    }
}
