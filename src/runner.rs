//! Running external tools.
//!
//! Every command carries its own working directory, so the process-wide
//! current directory is never changed. The [`CommandRunner`] trait lets the
//! build driver run against something other than the real `git` and `cmake`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// A single external command and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes invocations; any unsuccessful exit is an error.
pub trait CommandRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()>;
}

/// Runs commands as child processes with inherited stdio, blocking until
/// each one exits.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<()> {
        debug!("Running `{}` in {}", invocation, invocation.cwd.display());

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|e| Error::Spawn {
                command: invocation.to_string(),
                cwd: invocation.cwd.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command: invocation.to_string(),
                cwd: invocation.cwd.clone(),
                status,
            });
        }

        Ok(())
    }
}
