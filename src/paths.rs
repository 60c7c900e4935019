//! Common paths for Blog Pessoal data
//!
//! Everything lives under ~/.config/blog-pessoal/ on all platforms:
//! - config.toml - User configuration

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the data directory (~/.config/blog-pessoal/), creating it if needed
pub fn app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    let dir = home.join(".config").join("blog-pessoal");
    fs::create_dir_all(&dir).context("Failed to create blog-pessoal directory")?;
    Ok(dir)
}

/// Get the config file path (~/.config/blog-pessoal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(app_dir()?.join("config.toml"))
}
