//! Command-line options.
//!
//! The grammar is `build-deps [opts] [commands] [build-dir]`. The bare words
//! `build` and `clean` are commands; any other bare word replaces the build
//! directory. Repeated options and directories follow "last one wins".

use std::path::{Path, PathBuf};

use clap::{ArgAction, CommandFactory, Parser};

use crate::driver::Action;
use crate::settings::Settings;

const BUILD_COMMAND: &str = "build";
const CLEAN_COMMAND: &str = "clean";

/// Fetch, configure and install the third-party build dependencies
#[derive(Parser, Debug)]
#[command(name = "build-deps")]
#[command(version, about, long_about = None)]
#[command(override_usage = "build-deps [OPTIONS] [COMMANDS] [BUILD_DIR]")]
#[command(
    after_help = "Commands:\n  build  Build using existing config.\n  clean  Clean the build directory."
)]
#[command(disable_help_flag = true, args_override_self = true)]
pub struct Options {
    /// Use CMake <GENERATOR> when configuring build
    #[arg(short = 'G', value_name = "GENERATOR")]
    pub generator: Option<String>,

    /// CMake build type (e.g., Release)
    #[arg(short = 't', value_name = "TYPE")]
    pub build_type: Option<String>,

    /// Show this help
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Colorize output (always, never, auto)
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,

    /// Commands (build, clean) and the build directory
    #[arg(value_name = "COMMAND|BUILD_DIR")]
    pub words: Vec<String>,
}

impl Options {
    /// `build` was given.
    pub fn do_build(&self) -> bool {
        self.words.iter().any(|w| w == BUILD_COMMAND)
    }

    /// `clean` was given.
    pub fn do_clean(&self) -> bool {
        self.words.iter().any(|w| w == CLEAN_COMMAND)
    }

    /// Last bare word that isn't a command.
    pub fn build_dir(&self) -> Option<&str> {
        self.words
            .iter()
            .rev()
            .find(|w| *w != BUILD_COMMAND && *w != CLEAN_COMMAND)
            .map(String::as_str)
    }

    /// Whether to print usage and stop. An empty argument list always asks
    /// for help; `build` overrides `--help`.
    pub fn wants_help(&self, no_arguments: bool) -> bool {
        (self.help || no_arguments) && !self.do_build()
    }

    /// `clean` wins over `build`; with neither, dependencies are built.
    pub fn action(&self) -> Action {
        if self.do_clean() {
            Action::Clean
        } else {
            Action::Build
        }
    }

    /// Overlay the given options onto persisted settings. A relative build
    /// directory is resolved against `cwd`.
    pub fn apply(&self, settings: &mut Settings, cwd: &Path) {
        if let Some(generator) = &self.generator {
            settings.generator = generator.clone();
        }
        if let Some(build_type) = &self.build_type {
            settings.build_type = build_type.clone();
        }
        if let Some(dir) = self.build_dir() {
            let dir = PathBuf::from(dir);
            settings.build_dir = if dir.is_absolute() { dir } else { cwd.join(dir) };
        }
    }

    /// Rendered usage text.
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}
