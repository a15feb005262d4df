//! Access to the process environment
//!
//! Wraps the environment variable and working directory lookups that
//! argument resolution reads.

pub mod env;
pub mod fs;

pub use env::{EnvGetter, ProcessEnv, StaticEnv};
pub use fs::{FixedWorkingDir, ProcessWorkingDir, WorkingDir};
