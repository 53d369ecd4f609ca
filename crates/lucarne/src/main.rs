//! # lucarne
//!
//! Lucarne - presentational overlay and credential-form components.
//!
//! ## Name Origin
//!
//! A **lucarne** (/luːˈkɑʁn/) is the small dormer window set into a roof:
//! a framed opening through which a building shows a glimpse of itself,
//! much as a popup shows a glimpse of an application. This binary is the
//! preview tool: it renders the components to HTML or dumps their scene
//! trees for inspection.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lucarne")]
#[command(about = "Presentational overlay and credential-form components", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the credential form to HTML (default command)
    Render(commands::render::RenderArgs),

    /// Dump the credential form scene tree as JSON
    Scene(commands::scene::SceneArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render(args)) => commands::render::run(args),
        Some(Commands::Scene(args)) => commands::scene::run(args),
        None => {
            // Default to render command with default args
            commands::render::run(commands::render::RenderArgs::default());
        }
    }
}
