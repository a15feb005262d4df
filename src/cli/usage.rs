//! Usage text
//!
//! Printed to stderr whenever parsing fails, and to stdout by `bbl help`.

use crate::{cli::global_flags::flag_docs, commands::CommandSet};
use std::fmt::Write;

/// Rendered usage for the whole tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    options: Vec<(String, String, String)>,
    commands: Vec<(String, String)>,
}

impl Usage {
    /// Build usage listing every command in `commands`
    pub fn new(commands: &CommandSet) -> Self {
        let options = flag_docs()
            .into_iter()
            .map(|doc| {
                let short = doc.short.map(|c| format!("[-{c}]")).unwrap_or_default();
                (doc.long, short, doc.help)
            })
            .collect();

        Self {
            options,
            commands: commands
                .iter()
                .map(|(name, command)| (name.to_string(), command.summary().to_string()))
                .collect(),
        }
    }

    /// General usage text
    pub fn render(&self) -> String {
        let mut text = String::from("Usage:\n  bbl [GLOBAL OPTIONS] COMMAND [OPTIONS]\n\nGlobal Options:\n");
        for (long, short, description) in &self.options {
            let _ = writeln!(text, "  {long:<13}{short:<6}{description}");
        }

        text.push_str("\nCommands:\n");
        let width = self
            .commands
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            + 3;
        for (name, summary) in &self.commands {
            let _ = writeln!(text, "  {name:<width$}{summary}");
        }

        text
    }

    /// Usage for a single command followed by its own options
    pub fn render_command(&self, name: &str, options: &str) -> String {
        let mut text = format!("Usage:\n  bbl [GLOBAL OPTIONS] {name} [OPTIONS]\n\n[{name} command options]\n");
        if !options.is_empty() {
            text.push_str(options);
            text.push('\n');
        }
        text
    }

    /// Write the general usage to stderr
    pub fn print(&self) {
        eprint!("{}", self.render());
    }
}
