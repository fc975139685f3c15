//! Commands that change settings: set, reset

use anyhow::{Context, Result, bail};

use response_settings::config::find_language;
use response_settings::{ResponseLength, SettingsError, SettingsStore};

/// Validate the given values and persist them in one write
pub fn set_command(
    store: &SettingsStore,
    length: Option<&str>,
    language: Option<&str>,
    auto_scroll: Option<bool>,
) -> Result<()> {
    if length.is_none() && language.is_none() && auto_scroll.is_none() {
        bail!("Nothing to set: pass --length, --language or --auto-scroll");
    }

    let length = length.map(str::parse::<ResponseLength>).transpose()?;
    let language = language
        .map(|code| {
            find_language(code).ok_or_else(|| SettingsError::UnknownLanguage(code.to_string()))
        })
        .transpose()?;

    let changed = store
        .update(|s| {
            if let Some(length) = length {
                s.length = length;
            }
            if let Some(language) = language {
                s.language = language.code.to_string();
            }
            if let Some(auto_scroll) = auto_scroll {
                s.auto_scroll = auto_scroll;
            }
        })
        .context("Failed to save settings")?;

    if changed {
        println!("Settings saved.");
    } else {
        println!("Settings unchanged.");
    }
    Ok(())
}

/// Restore defaults
pub fn reset_command(store: &SettingsStore) -> Result<()> {
    let changed = store.reset().context("Failed to reset settings")?;
    if changed {
        println!("Settings reset to defaults.");
    } else {
        println!("Settings already at defaults.");
    }
    Ok(())
}
