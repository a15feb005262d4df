//! Environment variable access
//!
//! Parsing reads the environment through [`EnvGetter`] so tests can supply
//! their own values without touching the process environment.

use std::collections::HashMap;
use std::env;

/// Read-only view of environment variables
pub trait EnvGetter {
    /// Value of `name`, or an empty string when unset
    fn get(&self, name: &str) -> String;
}

/// Reads the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Create a new process environment accessor
    pub fn new() -> Self {
        Self
    }
}

impl EnvGetter for ProcessEnv {
    fn get(&self, name: &str) -> String {
        env::var(name).unwrap_or_default()
    }
}

/// Fixed set of variables, handy when the process environment must not leak in
#[derive(Debug, Default, Clone)]
pub struct StaticEnv {
    vars: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvGetter for StaticEnv {
    fn get(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}
