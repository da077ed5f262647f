//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! `--verbose` is global and inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Admin bar compiler: bind a menu definition and render it
#[derive(Parser, Debug)]
#[command(name = "adminbar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the bar markup for a menu definition
    Render {
        /// Menu definition (TOML)
        file: PathBuf,

        /// User-Agent to render for (overrides the file and ADMINBAR_USER_AGENT)
        #[arg(long)]
        user_agent: Option<String>,

        /// Treat the page as served over TLS. Only changes the `https://`
        /// scheme offered to menu contributors; `check` reports the result
        #[arg(long)]
        secure: bool,
    },

    /// Print the bound tree
    Tree {
        /// Menu definition (TOML)
        file: PathBuf,

        /// Print the tree as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report unknown keys and nodes dropped while binding
    Check {
        /// Menu definition (TOML)
        file: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}
