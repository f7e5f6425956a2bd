//! Manager tunables and the host configuration boundary.
//!
//! [`ManagerConfig`] is both the runtime configuration and the on-disk
//! settings format (camelCase JSON, every key optional). [`ConfigSource`] is the
//! read-only view of a host configuration store used at construction time.

use crate::constants::{
    DEFAULT_SCALE, DEFAULT_THRESHOLD, DEFAULT_TRANSLATE, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
};
use crate::error::ManagerResult;
use crate::types::SurfaceId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Tunables of a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Max page-pixel distance of a click, min distance of a drag
    pub threshold: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Managed surface, `None` leaves the manager inert
    pub surface: Option<SurfaceId>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            scale_x: DEFAULT_SCALE,
            scale_y: DEFAULT_SCALE,
            translate_x: DEFAULT_TRANSLATE,
            translate_y: DEFAULT_TRANSLATE,
            surface: None,
        }
    }
}

impl ManagerConfig {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> ManagerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a file.
    pub fn load(path: &Path) -> ManagerResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults when the file is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> ManagerResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Default location of the settings file in the user config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}

// ============================================================================
// Host Configuration Store
// ============================================================================

/// Read-only view of the host configuration store.
pub trait ConfigSource {
    /// Default managed surface
    fn surface(&self) -> Option<SurfaceId>;

    /// Default threshold
    fn threshold(&self) -> Option<f64>;
}

impl ConfigSource for ManagerConfig {
    fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    fn threshold(&self) -> Option<f64> {
        Some(self.threshold)
    }
}

/// Generic key/value store, as hosts that keep plugin config in JSON do.
///
/// Reads `"surface"` (falling back to `"element"`) and `"threshold"`.
impl ConfigSource for Map<String, Value> {
    fn surface(&self) -> Option<SurfaceId> {
        self.get("surface")
            .or_else(|| self.get("element"))
            .and_then(Value::as_u64)
            .map(SurfaceId)
    }

    fn threshold(&self) -> Option<f64> {
        self.get("threshold").and_then(Value::as_f64)
    }
}

/// Source with nothing configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyConfig;

impl ConfigSource for EmptyConfig {
    fn surface(&self) -> Option<SurfaceId> {
        None
    }

    fn threshold(&self) -> Option<f64> {
        None
    }
}

/// Threshold to start with: the configured one unless it is missing or zero.
pub(crate) fn initial_threshold(source: &dyn ConfigSource) -> f64 {
    source
        .threshold()
        .filter(|threshold| *threshold != 0.0 && !threshold.is_nan())
        .unwrap_or(DEFAULT_THRESHOLD)
}
