//! Render configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nodekit/nodekit.toml`
//! 3. Local config: `<dir>/.nodekit.toml`
//! 4. Environment variables: `NODEKIT_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::{SettingsError, SettingsResult};

/// How void elements like `<br>` are closed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoidStyle {
    /// `<br>`
    #[default]
    Html,
    /// `<br />`
    Xhtml,
}

impl FromStr for VoidStyle {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(VoidStyle::Html),
            "xhtml" => Ok(VoidStyle::Xhtml),
            _ => Err(SettingsError::InvalidVoidStyle(s.to_string())),
        }
    }
}

impl fmt::Display for VoidStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoidStyle::Html => write!(f, "html"),
            VoidStyle::Xhtml => write!(f, "xhtml"),
        }
    }
}

/// Settings consumed by [`crate::render::Renderer`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Escape `& < > " '` in text nodes
    pub escape_text: bool,
    /// Escape attribute values
    pub escape_attributes: bool,
    /// Closing style for void elements
    pub void_style: VoidStyle,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            escape_text: true,
            escape_attributes: true,
            void_style: VoidStyle::Html,
        }
    }
}

/// Raw settings for intermediate parsing.
///
/// Every field is optional so a layer only overrides what it specifies.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub escape_text: Option<bool>,
    pub escape_attributes: Option<bool>,
    pub void_style: Option<VoidStyle>,
}

/// Get the XDG config directory for nodekit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nodekit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nodekit.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".nodekit.toml")
}

/// Load a TOML file into RawRenderSettings for manual merging.
fn load_raw_settings(path: &Path) -> SettingsResult<RawRenderSettings> {
    let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

impl RenderSettings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawRenderSettings) -> Self {
        Self {
            escape_text: overlay.escape_text.unwrap_or(self.escape_text),
            escape_attributes: overlay.escape_attributes.unwrap_or(self.escape_attributes),
            void_style: overlay.void_style.unwrap_or(self.void_style),
        }
    }

    /// Load settings with layered precedence, using the XDG global config.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.nodekit.toml`
    pub fn load(local_dir: Option<&Path>) -> SettingsResult<Self> {
        Self::load_with(global_config_path().as_deref(), local_dir)
    }

    /// Load settings with layered precedence from explicit locations.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. `global_path`, if it exists
    /// 3. `<local_dir>/.nodekit.toml`, if it exists
    /// 4. Environment variables: `NODEKIT_*` prefix
    #[instrument(level = "debug")]
    pub fn load_with(global_path: Option<&Path>, local_dir: Option<&Path>) -> SettingsResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("Loading local config: {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Apply NODEKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> SettingsResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NODEKIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_bool("escape_text"))? {
            settings.escape_text = val;
        }
        if let Some(val) = env_value(config.get_bool("escape_attributes"))? {
            settings.escape_attributes = val;
        }
        if let Some(val) = env_value(config.get_string("void_style"))? {
            settings.void_style = val.parse()?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nodekit configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nodekit/nodekit.toml
#   Local:  <dir>/.nodekit.toml
#   Env:    NODEKIT_* environment variables

# Escape & < > " ' in text nodes
# escape_text = true

# Escape attribute values
# escape_attributes = true

# Void elements: "html" renders <br>, "xhtml" renders <br />
# void_style = "html"
"#
        .to_string()
    }
}

/// Unset keys are absent, malformed values are errors.
fn env_value<T>(result: Result<T, ConfigError>) -> SettingsResult<Option<T>> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
