use anyhow::{Context, Result};
use std::path::Path;

use crate::config::Config;

pub fn show() -> Result<()> {
    let path = Config::config_file()?;
    let config = Config::load_from_path(&path)?;

    print!("{}", render(&path, &config)?);

    Ok(())
}

pub fn render(path: &Path, config: &Config) -> Result<String> {
    let mut out = format!("Config file: {}\n", path.display());
    if !path.exists() {
        out.push_str("(not found, using defaults)\n");
    }

    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    out.push_str(&content);
    out.push('\n');

    Ok(out)
}
