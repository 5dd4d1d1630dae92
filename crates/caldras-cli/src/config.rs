use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use caldras_core::render::ThemeName;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CaldrasConfig {
    #[serde(default)]
    pub vault: VaultSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VaultSection {
    pub path: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default = "default_unicode")]
    pub unicode: bool,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            unicode: default_unicode(),
        }
    }
}

fn default_unicode() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_vault_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("notes.vault"))
}

pub fn read_config(path: &Path) -> anyhow::Result<CaldrasConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config, or defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> anyhow::Result<CaldrasConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CaldrasConfig::default());
    }
    read_config(path)
}

pub fn write_config(path: &Path, config: &CaldrasConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("caldras"));
        }
    }
    Ok(home_dir()?.join(".config").join("caldras"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("caldras"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("caldras"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
