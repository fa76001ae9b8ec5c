//! Command implementations for pinpost.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. The `add` pipeline lives in its own module; `config`
//! is small enough to live here.

mod add;

use crate::cli::Command;
use crate::config::{Config, config_file_path, mask_secret};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Add(args) => add::cmd_add(args),
        Command::Config => cmd_config(),
    }
}

/// Show configuration status with secrets masked.
fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("Pinpost configuration");
    println!();

    match (config.pinboard_user(), &config.pinboard_api_token) {
        (Some(user), Some(_)) => {
            println!("  Pinboard token:  configured (user: {})", user);
        }
        _ => println!("  Pinboard token:  not configured"),
    }

    match &config.anthropic_api_key {
        Some(key) => println!("  Anthropic key:   {}", mask_secret(key)),
        None => println!("  Anthropic key:   not configured"),
    }

    println!("  Model:           {}", config.model);
    println!("  Max tokens:      {}", config.max_tokens);
    println!();

    match config_file_path() {
        Some(path) if path.exists() => {
            println!("  Config file:     {}", path.display());
        }
        Some(path) => {
            println!("  Config file:     {} (not present)", path.display());
        }
        None => println!("  Config file:     home directory not resolvable"),
    }

    let local_env = std::path::Path::new(".env");
    if local_env.exists() {
        println!("  Env file:        ./.env");
    } else if let Some(home_env) = crate::config::pinpost_dir().map(|d| d.join(".env"))
        && home_env.exists()
    {
        println!("  Env file:        {}", home_env.display());
    } else {
        println!("  Env file:        none found");
    }

    Ok(())
}
