mod schema;

pub use schema::{Config, ScaleConfig};

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::rating::validate_rating;

/// Get the config directory path (~/.config/star-rating/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("star-rating"))
}

/// Get the default config file path (~/.config/star-rating/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Ensure the directory holding `path` exists
pub fn ensure_config_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory at {}", dir.display()))?;
        }
    }
    Ok(())
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/star-rating/config.yaml) and falls back to the built-in
///   scales when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path()?, false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        debug!(path = %config_path.display(), "no config file, using built-in scales");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    debug!(path = %config_path.display(), scales = config.scales.len(), "loaded config");
    Ok(config)
}

/// Write `config` as YAML to `path`, creating parent directories.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    ensure_config_dir(path)?;
    let yaml = serde_saphyr::to_string(config).context("Failed to serialize config")?;
    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file at {}", path.display()))?;
    Ok(())
}

/// Validate the whole config file at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.scales.is_empty() {
        errors.push("scales: at least one scale must be configured".to_string());
    }

    let mut seen = HashSet::new();
    for (i, scale) in config.scales.iter().enumerate() {
        if scale.name.trim().is_empty() {
            errors.push(format!("scales[{}].name: must not be empty", i));
        } else if !seen.insert(scale.name.as_str()) {
            errors.push(format!("scales[{}].name: duplicate scale '{}'", i, scale.name));
        }

        if let Err(rating_errors) = validate_rating(&scale.rating, &format!("scales[{}].rating", i)) {
            errors.extend(rating_errors);
        }
    }

    if let Some(ref default) = config.default_scale {
        if !config.scales.iter().any(|s| &s.name == default) {
            errors.push(format!("default_scale: no scale named '{}'", default));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
