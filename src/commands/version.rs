//! The `version` command

use super::{Command, Context};
use std::io::Write;

/// Version reported by `bbl version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the tool version and platform
#[derive(Debug, Default, Clone, Copy)]
pub struct Version;

impl Version {
    /// Version line, e.g. `bbl 0.1.0 (linux/x86_64)`
    pub fn line() -> String {
        format!(
            "bbl {VERSION} ({}/{})",
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }
}

impl Command for Version {
    fn summary(&self) -> &str {
        "Prints version"
    }

    fn usage(&self) -> &str {
        "  This command takes no options."
    }

    fn execute(&self, _ctx: &Context<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "{}", Self::line())?;
        Ok(())
    }
}
