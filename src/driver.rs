//! # Build Driver
//!
//! Walks the dependency table in order and, for each entry:
//!
//! 1. Clones the repository into `<build_dir>/<name>` (or fetches tags if the
//!    clone already exists).
//! 2. Checks out the pinned revision.
//! 3. Either removes the build tree (`clean`) or configures the dependency
//!    with CMake and builds its `install` target into the shared products
//!    directory.
//!
//! The first failing step aborts the whole run. Partially cloned or built
//! state is left as it is.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::dependencies::Dependency;
use crate::error::{Error, Result};
use crate::output::{emoji, OutputConfig};
use crate::runner::{CommandRunner, Invocation};
use crate::settings::Settings;

const GIT: &str = "git";
const CMAKE: &str = "cmake";

/// What to do with each dependency once it is checked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Configure, build and install.
    Build,
    /// Remove the build tree.
    Clean,
}

/// Drives fetch, checkout and build for a list of dependencies.
pub struct BuildDriver<'a> {
    settings: &'a Settings,
    action: Action,
    output: OutputConfig,
}

impl<'a> BuildDriver<'a> {
    pub fn new(settings: &'a Settings, action: Action, output: OutputConfig) -> Self {
        Self {
            settings,
            action,
            output,
        }
    }

    /// Process every dependency in order, stopping at the first failure.
    pub fn run(&self, dependencies: &[Dependency], runner: &mut dyn CommandRunner) -> Result<()> {
        let products_dir = self.settings.products_dir();
        fs::create_dir_all(&products_dir)?;
        debug!("Products directory: {}", products_dir.display());

        for dependency in dependencies {
            self.process(dependency, runner)?;
        }

        Ok(())
    }

    fn process(&self, dependency: &Dependency, runner: &mut dyn CommandRunner) -> Result<()> {
        let build_root = &self.settings.build_dir;
        let src_dir = dependency.source_dir(build_root);
        let build_dir = dependency.build_dir(build_root);

        println!(
            "{} {} ({} @ {})",
            emoji(&self.output, "📦", "==>"),
            dependency.name,
            dependency.short_name(),
            dependency.revision
        );

        self.checkout(dependency, &src_dir, runner)?;

        match self.action {
            Action::Clean => {
                if build_dir.exists() {
                    info!("Removing {}", build_dir.display());
                    fs::remove_dir_all(&build_dir)
                        .map_err(|e| Error::from(e).in_step(dependency.name, "clean"))?;
                } else {
                    debug!("Nothing to clean at {}", build_dir.display());
                }
                Ok(())
            }
            Action::Build => self.build(dependency, &src_dir, &build_dir, runner),
        }
    }

    fn checkout(
        &self,
        dependency: &Dependency,
        src_dir: &Path,
        runner: &mut dyn CommandRunner,
    ) -> Result<()> {
        if !src_dir.exists() {
            fs::create_dir_all(src_dir)
                .map_err(|e| Error::from(e).in_step(dependency.name, "clone"))?;
            info!("Cloning {} into {}", dependency.url, src_dir.display());
            runner
                .run(&Invocation::new(GIT, ["clone", dependency.url, "."], src_dir))
                .map_err(|e| e.in_step(dependency.name, "clone"))?;
        } else {
            info!("Fetching tags in {}", src_dir.display());
            runner
                .run(&Invocation::new(GIT, ["fetch", "--tags"], src_dir))
                .map_err(|e| e.in_step(dependency.name, "fetch"))?;
        }

        // Pin the revision even right after a fresh clone.
        runner
            .run(&Invocation::new(GIT, ["checkout", dependency.revision], src_dir))
            .map_err(|e| e.in_step(dependency.name, "checkout"))
    }

    fn build(
        &self,
        dependency: &Dependency,
        src_dir: &Path,
        build_dir: &Path,
        runner: &mut dyn CommandRunner,
    ) -> Result<()> {
        fs::create_dir_all(build_dir)
            .map_err(|e| Error::from(e).in_step(dependency.name, "configure"))?;
        info!("Building in {}", build_dir.display());

        runner
            .run(&self.configure_invocation(dependency, src_dir, build_dir))
            .map_err(|e| e.in_step(dependency.name, "configure"))?;

        runner
            .run(&Invocation::new(
                CMAKE,
                ["--build", ".", "--target", "install"],
                build_dir,
            ))
            .map_err(|e| e.in_step(dependency.name, "build"))
    }

    fn configure_invocation(
        &self,
        dependency: &Dependency,
        src_dir: &Path,
        build_dir: &Path,
    ) -> Invocation {
        let mut args = vec![
            "-G".to_string(),
            self.settings.generator.clone(),
            format!("-DCMAKE_BUILD_TYPE={}", self.settings.build_type),
            format!(
                "-DCMAKE_INSTALL_PREFIX={}",
                self.settings.products_dir().display()
            ),
        ];
        args.extend(dependency.options.iter().cloned());
        args.push(src_dir.display().to_string());

        Invocation::new(CMAKE, args, build_dir)
    }
}
