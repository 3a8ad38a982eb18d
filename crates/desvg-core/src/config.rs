use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/desvg/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesvgConfig {
    /// Name of the output directory created next to the input stylesheet
    /// (unless overridden on the command line).
    pub output_dir_name: String,
    /// Write a `.txt` twin next to every `.svg` with identical content.
    pub txt_copies: bool,
    /// Minimum width of the zero-padded sequence index in output filenames.
    /// Indexes wider than this keep their natural width (e.g. `100`).
    pub index_pad: usize,
}

impl Default for DesvgConfig {
    fn default() -> Self {
        Self {
            output_dir_name: "svg-decoded".to_string(),
            txt_copies: true,
            index_pad: 2,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("desvg")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DesvgConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DesvgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DesvgConfig = toml::from_str(&data)?;
    Ok(cfg)
}
