//! CLI argument parsing for pinpost.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Pinpost: AI-assisted Pinboard bookmarking.
///
/// Give it a URL and it asks a language model to read the page, extracts
/// title, description, and tags from the reply, and saves the bookmark to
/// Pinboard.
#[derive(Parser, Debug)]
#[command(name = "pinpost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pinpost.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a URL to Pinboard with model-extracted metadata.
    ///
    /// Extracts title, description, and tags, prints the record, and saves
    /// it unless --dry-run is given.
    Add(AddArgs),

    /// Show configuration status.
    ///
    /// Reports which credentials are configured (secrets masked) and which
    /// configuration files were found.
    Config,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// URL to bookmark.
    pub url: String,

    /// Extract metadata without saving to Pinboard.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the extracted record as raw JSON.
    #[arg(long)]
    pub json: bool,

    /// Save the bookmark as private.
    #[arg(long)]
    pub private: bool,

    /// Mark the bookmark as "to read".
    #[arg(long)]
    pub toread: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
