use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output subdirectory, relative to the base directory.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Defaults loaded from `~/.config/svgclean/config.toml`. CLI flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgcleanConfig {
    /// Output subdirectory for cleaned icons, relative to the base directory.
    pub output_dir: String,
    /// Write `attribution.txt` next to the icons.
    pub attribution: bool,
    /// Keep the trailing unique-ID segment in output filenames.
    pub keep_uid: bool,
}

impl Default for SvgcleanConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            attribution: true,
            keep_uid: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svgclean")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load `~/.config/svgclean/config.toml`, creating it on first run. An
/// unwritable or malformed config only costs a warning; the run continues on
/// built-in defaults.
pub fn load_or_default() -> SvgcleanConfig {
    or_default(config_path().and_then(|path| load_or_init_at(&path)))
}

fn or_default(loaded: Result<SvgcleanConfig>) -> SvgcleanConfig {
    loaded.unwrap_or_else(|err| {
        tracing::warn!("using default config: {:#}", err);
        SvgcleanConfig::default()
    })
}

/// Load configuration from `path`, creating a default file if none exists.
pub fn load_or_init_at(path: &Path) -> Result<SvgcleanConfig> {
    if !path.exists() {
        let default_cfg = SvgcleanConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: SvgcleanConfig = toml::from_str(&data)?;
    Ok(cfg)
}
