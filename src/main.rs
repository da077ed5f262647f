//! adminbar CLI - bind and render admin bar menu definitions
//!
//! Usage: adminbar <COMMAND>
//!
//! Commands:
//!   render  Render the bar markup for a menu definition
//!   tree    Print the bound tree
//!   check   Report unknown keys and nodes dropped while binding

mod commands;

use adminbar::presentation::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    match cli.command {
        Commands::Render {
            file,
            user_agent,
            secure,
        } => commands::render::cmd_render(&file, user_agent.as_deref(), secure),
        Commands::Tree { file, json } => commands::tree::cmd_tree(&file, json),
        Commands::Check { file, json } => commands::check::cmd_check(&file, json),
    }
}

fn init_logging(default_level: &str) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(default_level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
