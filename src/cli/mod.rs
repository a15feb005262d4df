//! Command-line interface module
//!
//! Resolves raw arguments into a [`crate::config::ResolvedConfiguration`].

pub mod finder;
pub mod global_flags;
pub mod parser;
pub mod usage;

pub use finder::{CommandFinder, CommandFinderResult};
pub use global_flags::{GlobalFlagParser, GlobalFlags};
pub use parser::CommandLineParser;
pub use usage::Usage;
