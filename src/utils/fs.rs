//! Working directory lookup
//!
//! The default state directory is the current working directory; the lookup
//! sits behind [`WorkingDir`] so its failure can be exercised in tests.

use std::io;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Source of the current working directory
pub trait WorkingDir {
    /// Current working directory as an absolute path
    fn getwd(&self) -> io::Result<PathBuf>;
}

/// Asks the operating system for the process working directory
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessWorkingDir;

impl ProcessWorkingDir {
    /// Create a new working directory accessor
    pub fn new() -> Self {
        Self
    }
}

impl WorkingDir for ProcessWorkingDir {
    #[instrument(skip(self))]
    fn getwd(&self) -> io::Result<PathBuf> {
        let dir = std::env::current_dir()?;
        debug!("Current working directory: {}", dir.display());
        Ok(dir)
    }
}

/// Always reports the same directory
#[derive(Debug, Clone)]
pub struct FixedWorkingDir(pub PathBuf);

impl WorkingDir for FixedWorkingDir {
    fn getwd(&self) -> io::Result<PathBuf> {
        Ok(self.0.clone())
    }
}
