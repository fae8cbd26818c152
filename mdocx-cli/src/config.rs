// ABOUTME: Configuration file loading, validation, and hierarchical merging for mdocx
// ABOUTME: Supports TOML config files in XDG locations plus a project-local override

use crate::constants::env::XDG_CONFIG_HOME;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "mdocx";
const CONFIG_FILE: &str = "config.toml";
const PROJECT_CONFIG_FILE: &str = "mdocx.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Theme name or path to a theme file
    #[serde(default, deserialize_with = "validate_theme")]
    pub theme: Option<String>,
    /// Allow inline image previews when the terminal supports them
    #[serde(default)]
    pub images: Option<bool>,
    /// Validate container paths while loading bundles
    #[serde(default)]
    pub strict: Option<bool>,
}

/// Command-line values that take precedence over config files
#[derive(Debug, Clone, Default)]
pub struct BrowseOverrides {
    pub theme: Option<String>,
    pub strict: Option<bool>,
    pub no_images: bool,
}

/// Effective settings for one browse session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseSettings {
    pub theme: String,
    pub images: bool,
    pub strict: bool,
}

impl Config {
    /// Load configuration from the standard locations
    pub fn load() -> Self {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load configuration from file paths ordered from lowest to highest precedence.
    /// Missing files are skipped; files that fail to parse are logged and skipped.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                log::debug!("No config file at {}", path.display());
                continue;
            }
            match Self::load_from_file(path) {
                Ok(file_config) => {
                    log::debug!("Loaded config from {}", path.display());
                    config = config.merge(file_config);
                }
                Err(e) => log::warn!("Ignoring config file: {:#}", e),
            }
        }

        config
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        Self::config_paths_from(
            dirs::home_dir(),
            std::env::var_os(XDG_CONFIG_HOME),
            std::env::current_dir().ok(),
        )
    }

    fn config_paths_from(
        home: Option<PathBuf>,
        xdg_config_home: Option<OsString>,
        current_dir: Option<PathBuf>,
    ) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home) = home {
            paths.push(home.join(".config").join(APP_DIR).join(CONFIG_FILE));
        }

        if let Some(config_home) = xdg_config_home.filter(|v| !v.is_empty()) {
            let path = PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILE);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }

        if let Some(dir) = current_dir {
            paths.push(dir.join(PROJECT_CONFIG_FILE));
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            theme: other.theme.or(self.theme),
            images: other.images.or(self.images),
            strict: other.strict.or(self.strict),
        }
    }

    pub fn browse_settings(&self, overrides: &BrowseOverrides) -> BrowseSettings {
        BrowseSettings {
            theme: overrides
                .theme
                .clone()
                .or_else(|| self.theme.clone())
                .unwrap_or_default(),
            images: !overrides.no_images && self.images.unwrap_or(true),
            strict: overrides.strict.or(self.strict).unwrap_or(true),
        }
    }
}

fn validate_theme<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = Option::<String>::deserialize(deserializer)?;
    match value {
        Some(theme) if theme.trim().is_empty() => {
            Err(D::Error::custom("theme must not be blank"))
        }
        other => Ok(other),
    }
}
