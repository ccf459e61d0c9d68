//! Encarte CLI - build a promotional flyer from the terminal.
//!
//! Commands:
//! - `encarte show` - Show the flyer and its preview
//! - `encarte add` - Add a product
//! - `encarte remove` - Remove a product
//! - `encarte clear` - Remove all products
//! - `encarte theme` - List or select themes
//! - `encarte store` - Set store name and address
//! - `encarte valid-until` - Set the validity text
//! - `encarte images` - Suggest product images
//! - `encarte export` - Write the flyer as HTML or JSON
//! - `encarte config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{
    AddArgs, ClearArgs, ConfigArgs, ExportArgs, ImagesArgs, RemoveArgs, StoreArgs, ThemeArgs,
    ValidUntilArgs,
};

/// Encarte CLI - Edit and export promotional flyers
#[derive(Parser)]
#[command(name = "encarte")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the flyer and its preview
    Show,

    /// Add a product
    Add(AddArgs),

    /// Remove a product
    Remove(RemoveArgs),

    /// Remove all products
    Clear(ClearArgs),

    /// List or select themes
    Theme(ThemeArgs),

    /// Set store name and address
    Store(StoreArgs),

    /// Set the validity text
    ValidUntil(ValidUntilArgs),

    /// Suggest images for a product name
    Images(ImagesArgs),

    /// Export the flyer
    Export(ExportArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose, &ctx.config.logging.level);

    let result = match cli.command {
        Commands::Show => commands::show::run(&ctx),
        Commands::Add(args) => commands::product::add(args, &ctx),
        Commands::Remove(args) => commands::product::remove(args, &ctx),
        Commands::Clear(args) => commands::product::clear(args, &ctx),
        Commands::Theme(args) => commands::flyer::theme(args, &ctx),
        Commands::Store(args) => commands::flyer::store(args, &ctx),
        Commands::ValidUntil(args) => commands::flyer::valid_until(args, &ctx),
        Commands::Images(args) => commands::product::images(args, &ctx),
        Commands::Export(args) => commands::export::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// `RUST_LOG` wins over `--verbose`, which wins over the config level.
fn init_tracing(verbose: bool, level: &str) {
    let fallback = if verbose { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
