/// Viewer configuration
///
/// Settings are read from `config.json` in the user's config directory:
/// - Linux: ~/.config/page-viewer/config.json
/// - macOS: ~/Library/Application Support/page-viewer/config.json
/// - Windows: %APPDATA%\page-viewer\config.json
///
/// Every field is optional in the file. The `PAGE_VIEWER_ASSETS`
/// environment variable overrides the asset directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable that points the viewer at a different asset folder
pub const ASSETS_ENV_VAR: &str = "PAGE_VIEWER_ASSETS";

const APP_DIR: &str = "page-viewer";
const CONFIG_FILE: &str = "config.json";

const DEFAULT_MIN_SCALE: f32 = 1.0;
const DEFAULT_MAX_SCALE: f32 = 5.0;
const DEFAULT_SCALE_STEP: f32 = 0.10;
const DEFAULT_THUMBNAIL_SIZE: f32 = 96.0;
const MAX_THUMBNAIL_SIZE: f32 = 512.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// Folder holding the page images and their thumbnails
    pub assets_dir: PathBuf,
    /// Smallest zoom factor of the page view (1.0 = fit)
    pub min_scale: f32,
    /// Largest zoom factor of the page view
    pub max_scale: f32,
    /// Zoom change per scroll step
    pub scale_step: f32,
    /// Edge length of a thumbnail tile in the sidebar
    pub thumbnail_size: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            scale_step: DEFAULT_SCALE_STEP,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
        }
    }
}

impl ViewerConfig {
    /// Load the user's configuration, falling back to defaults.
    ///
    /// A missing file is not an error. An unreadable or malformed file is
    /// logged and ignored so the viewer still starts.
    pub fn load() -> Self {
        Self::load_from(
            config_file_path().as_deref(),
            std::env::var_os(ASSETS_ENV_VAR).map(PathBuf::from),
        )
    }

    /// Read `path` if it exists, apply the asset folder override, then sanitize
    pub fn load_from(path: Option<&Path>, assets_override: Option<PathBuf>) -> Self {
        let config = match path {
            Some(path) if path.exists() => match Self::from_file(path) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };

        config.with_env_override(assets_override).sanitized()
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Parse from a JSON string; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the asset directory when an override is present
    pub fn with_env_override(mut self, assets_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = assets_dir.filter(|d| !d.as_os_str().is_empty()) {
            tracing::debug!("Asset directory overridden to {}", dir.display());
            self.assets_dir = dir;
        }
        self
    }

    /// Reset zoom and size settings that the widgets cannot work with
    pub fn sanitized(mut self) -> Self {
        if !self.min_scale.is_finite() || self.min_scale <= 0.0 {
            tracing::warn!("min_scale {} is out of range, using default", self.min_scale);
            self.min_scale = DEFAULT_MIN_SCALE;
        }
        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            tracing::warn!(
                "max_scale {} is out of range for min_scale {}, using default",
                self.max_scale,
                self.min_scale
            );
            self.max_scale = DEFAULT_MAX_SCALE.max(self.min_scale);
        }
        if !self.scale_step.is_finite() || self.scale_step <= 0.0 {
            tracing::warn!("scale_step {} is out of range, using default", self.scale_step);
            self.scale_step = DEFAULT_SCALE_STEP;
        }
        if !self.thumbnail_size.is_finite() || self.thumbnail_size <= 0.0 {
            tracing::warn!("thumbnail_size {} is out of range, using default", self.thumbnail_size);
            self.thumbnail_size = DEFAULT_THUMBNAIL_SIZE;
        } else if self.thumbnail_size > MAX_THUMBNAIL_SIZE {
            tracing::warn!("thumbnail_size {} clamped to {}", self.thumbnail_size, MAX_THUMBNAIL_SIZE);
            self.thumbnail_size = MAX_THUMBNAIL_SIZE;
        }
        self
    }
}

/// Where the config file is expected to live
fn config_file_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Some(path)
}

/// Default asset folder
/// Returns ~/.local/share/page-viewer/assets on Linux
fn default_assets_dir() -> PathBuf {
    match dirs::data_dir().or_else(dirs::home_dir) {
        Some(mut path) => {
            path.push(APP_DIR);
            path.push("assets");
            path
        }
        None => PathBuf::from("assets"),
    }
}
