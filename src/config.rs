//! Generator configuration
//!
//! Read from `config/asset_generator.toml` when present. Command-line values
//! are applied on top, so the precedence is CLI, then file, then defaults.

use crate::error::{GenerateError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Path to the config file
pub const CONFIG_FILE: &str = "config/asset_generator.toml";

/// Where the game's frontend reads its sprites from.
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the PNGs are written into (created if missing)
    pub output_dir: PathBuf,
    /// Fixed seed for the cosmetic randomness. `None` draws from entropy.
    pub seed: Option<u64>,
    /// Skip the per-file `Created:` lines
    pub quiet: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: None,
            quiet: false,
        }
    }
}

impl GeneratorConfig {
    /// Load config from file, or return defaults if it doesn't exist or can't be read
    pub fn load() -> Self {
        Self::load_or_default(Path::new(CONFIG_FILE))
    }

    /// Same as [`load`](Self::load) for an arbitrary path.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("No {} found, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                info!("Loaded generator config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Strict variant used for `--config`: a missing or malformed file is an error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GenerateError::config(path, e.to_string()))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            GenerateError::Config { message, .. } => GenerateError::config(path, message),
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GenerateError::config("<inline>", e.to_string()))
    }

    /// Contents for a config file. Seeds above `i64::MAX` have no TOML integer form.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| GenerateError::config("<inline>", e.to_string()))
    }

    /// Apply command-line values. `None` keeps the configured value and
    /// `quiet` can only be switched on.
    pub fn apply_overrides(&mut self, output_dir: Option<PathBuf>, seed: Option<u64>, quiet: bool) {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self.quiet |= quiet;
    }

    /// Pick the base config (explicit file, default file, or defaults) and
    /// layer the overrides on top.
    pub fn resolve(config_path: Option<&Path>, output_dir: Option<PathBuf>, seed: Option<u64>, quiet: bool) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::load(),
        };
        config.apply_overrides(output_dir, seed, quiet);
        Ok(config)
    }
}
