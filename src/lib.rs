//! # Build Dependencies Library
//!
//! This library fetches and builds the third-party libraries a source tree
//! needs. It is used by the `build-deps` command-line tool.
//!
//! ## Quick Example
//!
//! ```
//! use build_deps::dependencies::dependencies;
//! use build_deps::settings::Settings;
//! use std::path::PathBuf;
//!
//! let settings = Settings {
//!     build_dir: PathBuf::from("/tmp/deps"),
//!     ..Settings::default()
//! };
//!
//! let deps = dependencies();
//! assert_eq!(deps[1].short_name(), "assimp");
//! assert_eq!(
//!     deps[1].build_dir(&settings.build_dir),
//!     PathBuf::from("/tmp/deps/assimp/build")
//! );
//! assert_eq!(settings.products_dir(), PathBuf::from("/tmp/deps/products"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Dependency table (`dependencies`)**: the fixed, ordered list of
//!   repositories, pinned revisions and extra CMake options.
//! - **Format flags (`formats`)**: which asset importers get built.
//! - **Settings (`settings`)**: build type, build directory and generator,
//!   persisted between runs under the home directory.
//! - **Options (`options`)**: command-line parsing and how flags overlay the
//!   persisted settings.
//! - **Runner (`runner`)**: launches `git` and `cmake` with an explicit
//!   working directory.
//! - **Driver (`driver`)**: clone or fetch, checkout, then build or clean,
//!   for each dependency in order.
//!
//! ## Directory Layout
//!
//! ```text
//! <build_dir>/
//!   products/          shared install prefix
//!   <name>/            clone of each dependency
//!     build/           its CMake build tree
//! ```

pub mod defaults;
pub mod dependencies;
pub mod driver;
pub mod error;
pub mod formats;
pub mod options;
pub mod output;
pub mod runner;
pub mod settings;

#[cfg(test)]
mod options_proptest;
