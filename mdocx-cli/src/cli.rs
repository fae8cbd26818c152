// ABOUTME: CLI argument definitions for the mdocx application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdocx")]
#[command(about = "Browse and inspect MDOCX document bundles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a bundle interactively
    Browse {
        /// Bundle file or unpacked bundle directory
        path: PathBuf,

        /// Verify bundle integrity while loading (default: true)
        #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
        strict: Option<bool>,

        /// Never show inline image previews
        #[arg(long)]
        no_images: bool,

        /// Markdown theme name (auto, dark, light, dracula, notty) or theme file path
        #[arg(long, value_name = "THEME")]
        theme: Option<String>,
    },
    /// Print a summary of a bundle
    Inspect {
        /// Bundle file or unpacked bundle directory
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a bundle's header and the uniqueness of its paths and IDs
    Validate {
        /// Bundle file or unpacked bundle directory
        path: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Verify bundle integrity while loading (default: true)
        #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "BOOL")]
        strict: Option<bool>,
    },
    /// Show version and build information
    Version,
    /// Generate shell completions
    #[command(after_long_help = crate::completions::installation_instructions())]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: crate::completions::Shell,
    },
}

/// The full command tree, used for completions and tests
pub fn build_cli() -> clap::Command {
    Cli::command()
}
