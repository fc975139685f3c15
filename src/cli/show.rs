//! Read-only commands: show, languages, prompt

use anyhow::{Context, Result};

use response_settings::config::{resolve_language, LANGUAGES};
use response_settings::{Config, SettingsStore};

/// Serialize `config` as pretty TOML or JSON, without a trailing newline
fn format_config(config: &Config, json: bool) -> Result<String> {
    let output = if json {
        serde_json::to_string_pretty(config).context("Failed to serialize settings as JSON")?
    } else {
        toml::to_string_pretty(config).context("Failed to serialize settings as TOML")?
    };
    Ok(output.trim_end().to_string())
}

/// Print the current response settings as TOML or JSON
pub fn show_command(store: &SettingsStore, json: bool) -> Result<()> {
    let config = store.config();
    println!("{}", format_config(&config, json)?);

    if let Some(path) = store.path() {
        let language = resolve_language(&config.responses.language);
        if language.code != config.responses.language {
            eprintln!(
                "note: unknown language '{}' in {}, using {}",
                config.responses.language,
                path.display(),
                language.name
            );
        }
    }
    Ok(())
}

/// Print the supported language codes and names
pub fn languages_command() {
    for language in LANGUAGES {
        println!("{:<4} {}", language.code, language.name);
    }
}

/// Print the prompt instructions, or a note when there are none
pub fn prompt_command(store: &SettingsStore) {
    let prompt = store.responses().prompt_instructions();
    if prompt.is_empty() {
        eprintln!("(no extra instructions: automatic length, English)");
    } else {
        println!("{}", prompt);
    }
}
