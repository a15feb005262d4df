//! # bbl command-line front end
//!
//! Resolves the process arguments of the `bbl` infrastructure bootstrapping
//! tool into a structured invocation: which command runs, which flags are
//! global and which belong to the command, and where state lives on disk.
//!
//! ## Example
//!
//! ```no_run
//! use bbl_cli::{
//!     cli::{CommandLineParser, Usage},
//!     commands::CommandSet,
//!     utils::{ProcessEnv, ProcessWorkingDir},
//! };
//!
//! let commands = CommandSet::builtin();
//! let usage = Usage::new(&commands);
//! let print_usage = || usage.print();
//! let parser = CommandLineParser::new(&print_usage, &commands, &ProcessEnv, &ProcessWorkingDir);
//!
//! let arguments: Vec<String> = std::env::args().skip(1).collect();
//! let config = parser.parse(&arguments)?;
//! println!("{} in {}", config.command, config.state_dir.display());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
