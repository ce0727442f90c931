use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

use crate::config::Config;

pub async fn show_config() -> Result<()> {
    let config_file = Config::config_file()?;
    let config = Config::load()?;
    let config_str = toml::to_string_pretty(&config)?;

    println!("Current Configuration");
    println!("────────────────────────────────");
    if config_file.exists() {
        println!("File: {}", config_file.display());
    } else {
        println!("File: {} (not found, showing defaults)", config_file.display());
    }
    println!();
    println!("{}", config_str);

    Ok(())
}

pub async fn edit_config() -> Result<()> {
    let config_file = Config::config_file()?;

    // Ensure config file exists
    if !config_file.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
    Command::new(editor).arg(&config_file).status()?;

    // Reload so a broken edit fails here, not at the next app start
    Config::load().context("Edited configuration does not parse")?;

    println!("{} Configuration saved!", "✓".green());

    Ok(())
}

pub async fn init_config(force: bool) -> Result<()> {
    let config_file = Config::config_file()?;

    if config_file.exists() && !force {
        println!(
            "Configuration file already exists at: {}",
            config_file.display()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    Config::default().save()?;

    println!(
        "{} Configuration initialized at: {}",
        "✓".green(),
        config_file.display()
    );
    println!();
    println!("You can edit it with: fitme config edit");

    Ok(())
}
