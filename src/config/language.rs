//! Built-in response languages

/// A language the assistant can be asked to respond in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 code stored in the config file
    pub code: &'static str,
    /// English display name, also used in prompt instructions
    pub name: &'static str,
}

/// Code used when nothing (or something unknown) is configured
pub const DEFAULT_LANGUAGE: &str = "en";

pub const LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "de", name: "German" },
    Language { code: "it", name: "Italian" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "pl", name: "Polish" },
    Language { code: "ru", name: "Russian" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "vi", name: "Vietnamese" },
    Language { code: "th", name: "Thai" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "sv", name: "Swedish" },
];

/// Find a language by code (case-insensitive)
pub fn find_language(code: &str) -> Option<&'static Language> {
    let code = code.trim();
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

/// Resolve a stored code, falling back to English for unknown codes
pub fn resolve_language(code: &str) -> &'static Language {
    find_language(code).unwrap_or(&LANGUAGES[0])
}

/// Languages whose name or code contains `query` (case-insensitive).
/// An empty query matches everything.
pub fn filter_languages(query: &str) -> impl Iterator<Item = &'static Language> {
    let query = query.trim().to_lowercase();
    LANGUAGES.iter().filter(move |l| {
        query.is_empty() || l.name.to_lowercase().contains(&query) || l.code.contains(&query)
    })
}
