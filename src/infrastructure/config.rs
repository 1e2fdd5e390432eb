//! Configuration management

use crate::error::{Result, SinaxarError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Which feast name renders in listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// Romanian display names (Adormirea Maicii Domnului)
    #[default]
    Romanian,
    /// Canonical English names (Dormition of the Theotokos)
    Canonical,
}

impl NameStyle {
    pub fn label(&self) -> &'static str {
        match self {
            NameStyle::Romanian => "romanian",
            NameStyle::Canonical => "canonical",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default recommendation window in days
    pub lookahead_days: i64,
    /// Which feast name renders in listings
    pub names: NameStyle,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lookahead_days: 30,
            names: NameStyle::Romanian,
        }
    }
}

impl Config {
    /// Load config from an explicit path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SinaxarError::Config(format!("Config file not found: {}", path.display()))
            } else {
                SinaxarError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            SinaxarError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Discover and load the user config, falling back to defaults.
    ///
    /// `SINAXAR_CONFIG` names the file directly; otherwise the standard
    /// location under `XDG_CONFIG_HOME` (or `~/.config`) is tried. A
    /// missing file at the standard location is not an error.
    pub fn discover() -> Result<Self> {
        if let Ok(path) = std::env::var("SINAXAR_CONFIG") {
            return Self::load_from_path(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Ok(Config::default()),
        }
    }

    /// Standard config location: $XDG_CONFIG_HOME/sinaxar/config.toml,
    /// falling back to $HOME/.config/sinaxar/config.toml
    fn default_path() -> Option<PathBuf> {
        let base = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
            .ok()?;
        Some(base.join("sinaxar").join("config.toml"))
    }
}
