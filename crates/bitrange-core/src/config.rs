use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderStyle;

/// Global configuration loaded from `~/.config/bitrange/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitrangeConfig {
    /// Default store capacity in bits for `apply` (rounded up to whole words).
    pub capacity_bits: usize,
    /// Default output style: "words", "bytes" or "json".
    #[serde(default)]
    pub render: RenderStyle,
    /// Render the store after every step, not only at the end.
    #[serde(default)]
    pub trace: bool,
    /// Capacity used by `verify` when none is given.
    #[serde(default = "default_verify_capacity")]
    pub verify_capacity: usize,
}

fn default_verify_capacity() -> usize {
    256
}

impl Default for BitrangeConfig {
    fn default() -> Self {
        Self {
            capacity_bits: 512,
            render: RenderStyle::Words,
            trace: false,
            verify_capacity: default_verify_capacity(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bitrange")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BitrangeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = BitrangeConfig::default();
        write_default(&path, &default_cfg)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<BitrangeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: BitrangeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

fn write_default(path: &Path, cfg: &BitrangeConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
    Ok(())
}
