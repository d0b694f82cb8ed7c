//! Configuration loading
//!
//! The config file lives at `~/.config/suggestfield/config.toml`. A missing
//! file means defaults; a file that exists but cannot be read or parsed is an
//! error.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, PanelConfig, SuggestionsConfig};

use crate::error::SuggestFieldError;

const CONFIG_DIR: &str = "suggestfield";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location, falling back to defaults when absent.
pub fn load_config() -> Result<Config, SuggestFieldError> {
    let Some(path) = config_path() else {
        log::debug!("No home directory, using default config");
        return Ok(Config::default());
    };

    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    load_config_from_path(&path)
}

pub fn load_config_from_path(path: &Path) -> Result<Config, SuggestFieldError> {
    let contents = fs::read_to_string(path).map_err(|source| SuggestFieldError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&contents, path)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, SuggestFieldError> {
    let config: Config = toml::from_str(content).map_err(|source| SuggestFieldError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
