//! CLI command implementations.

pub mod config;
pub mod export;
pub mod flyer;
pub mod product;
pub mod show;

use clap::{Args, Subcommand};
use dialoguer::Confirm as Prompt;
use encarte_core::editor::Confirm;

use crate::config::ExportFormat;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product name.
    pub name: String,

    /// Regular price (comma or dot decimals, e.g. 10,50).
    pub price: String,

    /// Promotional price.
    #[arg(short, long)]
    pub offer: Option<String>,

    /// Image URL.
    #[arg(short, long)]
    pub image: Option<String>,

    /// Use the first known image for the product name.
    #[arg(long, conflicts_with = "image")]
    pub auto_image: bool,

    /// Mark as age-restricted (+18).
    #[arg(long)]
    pub adult: bool,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product id (see `encarte show`).
    pub id: String,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the clear command.
#[derive(Args)]
pub struct ClearArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the theme command.
#[derive(Args)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub command: ThemeCommand,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// List available themes.
    List,
    /// Select a theme.
    Set {
        /// Theme id.
        id: String,
    },
}

/// Arguments for the store command.
#[derive(Args)]
pub struct StoreArgs {
    /// Store name shown in the footer ("" to clear).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Store address shown in the footer ("" to clear).
    #[arg(short, long)]
    pub address: Option<String>,
}

/// Arguments for the valid-until command.
#[derive(Args)]
pub struct ValidUntilArgs {
    /// Free text such as "31/10" ("" to clear).
    pub text: String,
}

/// Arguments for the images command.
#[derive(Args)]
pub struct ImagesArgs {
    /// Product name to look up.
    pub name: String,
}

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (default from config).
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file in use.
    Path,
}

/// Terminal confirmation; `--yes` skips the prompt.
pub struct TerminalConfirm {
    assume_yes: bool,
}

impl TerminalConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        match Prompt::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                // No terminal to ask on
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}
