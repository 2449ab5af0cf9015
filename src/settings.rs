//! # Persisted Settings
//!
//! The settings record remembers the build type, build directory and CMake
//! generator between runs. It lives in a single JSON object at
//! [`defaults::settings_path`](crate::defaults::settings_path):
//!
//! ```json
//! {
//!   "build_type": "Release",
//!   "build_dir": "/path/to/distrib/deps",
//!   "generator": "Ninja"
//! }
//! ```
//!
//! Every key is optional when reading; missing keys take their defaults.
//! Saving always writes the full record.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Build settings shared by every dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CMake build type (`Release`, `Debug`, ...).
    pub build_type: String,
    /// Root directory holding clones, build trees and the products prefix.
    pub build_dir: PathBuf,
    /// CMake generator.
    pub generator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            build_type: defaults::BUILD_TYPE.to_string(),
            build_dir: defaults::default_build_dir(),
            generator: defaults::GENERATOR.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or the defaults if it doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| Error::SettingsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| Error::SettingsLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the full record to `path`, creating its parent directory.
    pub fn save(&self, path: &Path) -> Result<()> {
        let save_error = |message: String| Error::SettingsSave {
            path: path.to_path_buf(),
            message,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| save_error(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| save_error(e.to_string()))?;
        fs::write(path, json).map_err(|e| save_error(e.to_string()))?;

        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Shared install prefix for all dependencies.
    pub fn products_dir(&self) -> PathBuf {
        self.build_dir.join(defaults::PRODUCTS_DIR)
    }
}
