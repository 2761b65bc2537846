//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "trawl-setup", version, about = "Bootstrap the trawl analyzer and its rustfilt demangler")]
pub struct Cli {
    /// Path to an optional setup.toml overriding the stock defaults
    #[arg(short, long, default_value = "setup.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full bootstrap sequence (the default action)
    Run {
        /// Skip the release build of the analyzer
        #[arg(long)]
        skip_build: bool,

        /// Skip installing the demangler when it is missing
        #[arg(long)]
        skip_install: bool,
    },

    /// Probe the toolchain and demangler without building or installing
    Check,
}
