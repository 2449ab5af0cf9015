//! Default values for build-deps configuration.
//!
//! This module provides the fixed locations and fallback settings used when
//! no persisted settings exist yet.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default CMake build type.
pub const BUILD_TYPE: &str = "Release";

/// Default CMake generator.
pub const GENERATOR: &str = "Ninja";

/// Directory under the home directory that holds the settings file.
pub const SETTINGS_DIR: &str = ".doomsday";

/// File name of the persisted settings record.
pub const SETTINGS_FILE: &str = "build_deps";

/// Name of the shared install prefix inside the build directory.
pub const PRODUCTS_DIR: &str = "products";

/// Returns the path of the persisted settings file:
/// `<home>/.doomsday/build_deps`.
pub fn settings_path() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| settings_path_in(&home))
        .ok_or(Error::HomeDirectory)
}

/// Settings file location relative to an explicit home directory.
pub fn settings_path_in(home: &Path) -> PathBuf {
    home.join(SETTINGS_DIR).join(SETTINGS_FILE)
}

/// Returns the default build directory, `distrib/deps` under the source tree
/// this tool was built from.
pub fn default_build_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("distrib")
        .join("deps")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_settings_path_in_home() {
        let path = settings_path_in(Path::new("/home/someone"));
        assert_eq!(path, PathBuf::from("/home/someone/.doomsday/build_deps"));
    }

    #[test]
    #[serial]
    fn test_settings_path_follows_home_env() {
        let original = env::var_os("HOME");
        let temp_dir = tempfile::TempDir::new().unwrap();
        env::set_var("HOME", temp_dir.path());

        let path = settings_path().unwrap();
        assert_eq!(path, temp_dir.path().join(".doomsday").join("build_deps"));

        match original {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_default_build_dir_is_absolute() {
        let build_dir = default_build_dir();
        assert!(build_dir.is_absolute());
        assert!(build_dir.ends_with("distrib/deps"));
    }
}
