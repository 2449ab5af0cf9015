//! # Error Handling
//!
//! This module defines the centralized error type for `build-deps`. It uses
//! `thiserror` to describe every failure the bootstrap can run into:
//!
//! - Reading or writing the persisted settings file.
//! - Resolving the user's home directory.
//! - Launching an external tool (`git`, `cmake`).
//! - An external tool exiting with a non-zero status.
//! - A failed step, tagged with the dependency it belongs to.
//! - Plain I/O and JSON errors.
//!
//! Nothing here is recovered internally: every error aborts the run and is
//! reported once by the binary.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for build-deps operations
#[derive(Error, Debug)]
pub enum Error {
    /// The settings file exists but could not be read or parsed.
    #[error("Failed to load settings from {}: {message}", path.display())]
    SettingsLoad { path: PathBuf, message: String },

    /// The settings file could not be written.
    #[error("Failed to save settings to {}: {message}", path.display())]
    SettingsSave { path: PathBuf, message: String },

    /// No home directory could be determined for the settings file.
    #[error("Cannot locate the home directory for the settings file")]
    HomeDirectory,

    /// An external program could not be started at all.
    #[error("Failed to run `{command}` in {}: {source}", cwd.display())]
    Spawn {
        command: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external program ran and exited unsuccessfully.
    #[error("Command `{command}` failed in {} ({status})", cwd.display())]
    CommandFailed {
        command: String,
        cwd: PathBuf,
        status: ExitStatus,
    },

    /// A build step failed for a specific dependency.
    #[error("{dependency}: {step} failed: {source}")]
    Step {
        dependency: String,
        step: &'static str,
        #[source]
        source: Box<Error>,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap this error with the dependency and step it happened in.
    pub fn in_step(self, dependency: &str, step: &'static str) -> Self {
        Error::Step {
            dependency: dependency.to_string(),
            step,
            source: Box::new(self),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
