//! Resolved invocation configuration
//!
//! The single value produced by argument resolution and consumed by dispatch.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable whose value `"true"` turns debug output on by default
pub const DEBUG_ENV_VAR: &str = "BBL_DEBUG";

/// Command name that renders usage
pub const HELP_COMMAND: &str = "help";

/// Command name that prints the tool version
pub const VERSION_COMMAND: &str = "version";

/// Fully resolved command line
///
/// `command` always names a registered command, `help` or `version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfiguration {
    /// Command to execute
    pub command: String,
    /// Arguments forwarded verbatim to the command
    pub subcommand_flags: Vec<String>,
    /// Directory holding persistent state
    pub state_dir: PathBuf,
    /// Enable debug logging
    pub debug: bool,
}
