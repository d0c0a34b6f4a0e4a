//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Async modal dialogs for ratatui apps - interactive demo
#[derive(Parser, Debug)]
#[command(name = "modalis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: ~/.config/modalis/config.toml)
    #[arg(short, long, env = "MODALIS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Tick rate in ticks per second (default: 4.0)
    #[arg(short = 't', long, default_value_t = 4.0, global = true)]
    pub tick_rate: f64,

    /// Frame rate in frames per second (default: 30.0)
    #[arg(short = 'F', long, default_value_t = 30.0, global = true)]
    pub frame_rate: f64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print an example configuration file
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "modalis", &mut io::stdout());
}
