//! confsync CLI
//!
//! Synchronizes versioned JSON configuration documents between a local
//! store and a remote configuration service.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod reporter;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use context::AppContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        if !e.is_reported() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Some(cmd) => {
            let cwd = std::env::current_dir()?;
            let ctx = AppContext::resolve(&cwd, &cli.root, cli.settings)?;
            execute_command(&ctx, cmd)
        }
        None => {
            println!("{} versioned configuration sync", "confsync".green().bold());
            println!();
            println!("Run {} for available commands.", "confsync --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &AppContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Pull { project, env } => commands::run_pull(ctx, &project, env.as_deref()),
        Commands::Push { file, env } => commands::run_push(ctx, &file, env.as_deref()),
        Commands::Checkout {
            project,
            version,
            env,
        } => commands::run_checkout(ctx, &project, &version, env.as_deref()),
        Commands::Revert {
            project,
            version,
            env,
            yes,
        } => commands::run_revert(ctx, &project, &version, env.as_deref(), yes),
        Commands::List { project, json } => commands::run_list(ctx, project.as_deref(), json),
        Commands::Init { api, token } => commands::run_init(ctx, api, token),
        Commands::Diff { old, new, json } => commands::run_diff(&old, &new, json),
        Commands::Env {
            project,
            environment,
        } => commands::run_env(ctx, &project, &environment),
    }
}
