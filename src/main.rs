use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use response_settings::{Config, SettingsStore};

mod cli;

#[derive(Parser)]
#[command(name = "response-settings")]
#[command(about = "Choose how the assistant generates and displays responses")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.response-settings/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the Response Settings window
    Gui,

    /// Print the current response settings
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Change one or more response settings
    Set {
        /// Response length: short, medium or auto
        #[arg(long)]
        length: Option<String>,

        /// Response language code (see `languages`)
        #[arg(long)]
        language: Option<String>,

        /// Keep the latest response in view while it streams
        #[arg(long)]
        auto_scroll: Option<bool>,
    },

    /// List supported response languages
    Languages,

    /// Print the system prompt instructions implied by the settings
    Prompt,

    /// Restore default response settings
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);
    let store = SettingsStore::open(config_path);
    if SettingsStore::install_global(store.clone()).is_err() {
        tracing::warn!("Global settings store was already initialized");
    }

    match cli.command {
        Some(Commands::Show { json }) => cli::show::show_command(&store, json)?,
        Some(Commands::Set {
            length,
            language,
            auto_scroll,
        }) => cli::set::set_command(&store, length.as_deref(), language.as_deref(), auto_scroll)?,
        Some(Commands::Languages) => cli::show::languages_command(),
        Some(Commands::Prompt) => cli::show::prompt_command(&store),
        Some(Commands::Reset) => cli::set::reset_command(&store)?,
        Some(Commands::Gui) | None => response_settings::gui::run_gui(store)?,
    }

    Ok(())
}
