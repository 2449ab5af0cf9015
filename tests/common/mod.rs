//! Shared test utilities for E2E tests.
//!
//! The fixture gives every test its own home directory, its own build
//! directory and, on Unix, fake `git` and `cmake` executables that only log
//! the arguments they were called with.
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_fake_tools();
//!     fixture.command().arg("build").arg(fixture.build_dir()).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    pub use super::TestFixture;
}

/// Short names of the dependency clones, in processing order.
#[allow(dead_code)]
pub const CLONES: [&str; 3] = ["the_Foundation", "assimp", "glbinding"];

pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("home")
            .create_dir_all()
            .expect("Failed to create home directory");
        temp_dir
            .child("bin")
            .create_dir_all()
            .expect("Failed to create bin directory");
        Self { temp_dir }
    }

    /// Install fake `git` and `cmake` that log their arguments and succeed.
    #[cfg(unix)]
    pub fn with_fake_tools(self) -> Self {
        self.write_tool("git", 0);
        self.write_tool("cmake", 0);
        self
    }

    /// Replace one fake tool with a version that logs and then fails.
    #[cfg(unix)]
    pub fn with_failing_tool(self, name: &str) -> Self {
        self.write_tool(name, 1);
        self
    }

    #[cfg(unix)]
    fn write_tool(&self, name: &str, exit_code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\necho \"{} $*\" >> \"{}\"\nexit {}\n",
            name,
            self.tool_log().display(),
            exit_code
        );
        let path = self.bin_dir().join(name);
        fs::write(&path, script).expect("Failed to write fake tool");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
    }

    /// Write a settings file before the run.
    pub fn with_settings(self, json: &str) -> Self {
        let path = self.settings_path();
        fs::create_dir_all(path.parent().unwrap()).expect("Failed to create settings dir");
        fs::write(&path, json).expect("Failed to write settings");
        self
    }

    /// Create a directory (and parents) under the build directory.
    pub fn with_build_subdir(self, relative: &str) -> Self {
        fs::create_dir_all(self.build_dir().join(relative)).expect("Failed to create directory");
        self
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn home(&self) -> PathBuf {
        self.path().join("home")
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.path().join("bin")
    }

    pub fn build_dir(&self) -> PathBuf {
        self.path().join("deps")
    }

    pub fn settings_path(&self) -> PathBuf {
        self.home().join(".doomsday").join("build_deps")
    }

    pub fn tool_log(&self) -> PathBuf {
        self.path().join("tools.log")
    }

    /// Lines logged by the fake tools, in call order.
    pub fn tool_calls(&self) -> Vec<String> {
        fs::read_to_string(self.tool_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Parsed settings file.
    pub fn settings(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.settings_path()).expect("Settings file missing");
        serde_json::from_str(&content).expect("Settings file is not JSON")
    }

    /// The binary with HOME pointed at the fixture and PATH limited to the
    /// fake tools.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("build-deps");
        cmd.current_dir(self.path())
            .env("HOME", self.home())
            .env("PATH", self.bin_dir())
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
