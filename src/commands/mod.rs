//! Command registry and dispatch
//!
//! Every name the parser accepts as a command lives in a [`CommandSet`].
//! `help` and `version` are always present; callers add their own handlers.

pub mod help;
pub mod version;

pub use help::Help;
pub use version::Version;

use crate::{
    cli::Usage,
    config::{HELP_COMMAND, ResolvedConfiguration, VERSION_COMMAND},
    error::{CliError, Result},
};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::{debug, instrument};

/// Everything a command sees when it runs
pub struct Context<'a> {
    /// The resolved invocation
    pub config: &'a ResolvedConfiguration,
    /// Registry the command was dispatched from
    pub commands: &'a CommandSet,
    /// Usage text for the whole tool
    pub usage: &'a Usage,
}

/// A subcommand handler
pub trait Command {
    /// One-line description shown in the usage listing
    fn summary(&self) -> &str;

    /// Command-specific options text shown by `help <command>`
    fn usage(&self) -> &str {
        ""
    }

    /// Run the command, writing user-facing output to `out`
    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> anyhow::Result<()>;
}

/// Registered commands, keyed by name
#[derive(Default)]
pub struct CommandSet {
    commands: BTreeMap<String, Box<dyn Command>>,
}

impl CommandSet {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in `help` and `version` commands
    pub fn builtin() -> Self {
        let mut commands = Self::new();
        commands.insert(HELP_COMMAND, Box::new(Help));
        commands.insert(VERSION_COMMAND, Box::new(Version));
        commands
    }

    /// Register `command` under `name`, replacing any previous handler
    pub fn insert(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        self.commands.insert(name.into(), command);
    }

    /// Whether `name` is registered
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Handler registered under `name`
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|command| command.as_ref())
    }

    /// Registered names and handlers in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Command)> {
        self.commands
            .iter()
            .map(|(name, command)| (name.as_str(), command.as_ref()))
    }

    /// Run the command named by `config`
    #[instrument(skip_all, fields(command = %config.command))]
    pub fn execute(
        &self,
        config: &ResolvedConfiguration,
        usage: &Usage,
        out: &mut dyn Write,
    ) -> Result<()> {
        let command = self
            .get(&config.command)
            .ok_or_else(|| CliError::unrecognized_command(&config.command))?;

        let ctx = Context {
            config,
            commands: self,
            usage,
        };

        debug!("Executing command with {} argument(s)", config.subcommand_flags.len());
        command
            .execute(&ctx, out)
            .map_err(|e| CliError::command(&config.command, e))
    }
}

impl std::fmt::Debug for CommandSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.commands.keys()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl Command for Failing {
        fn summary(&self) -> &str {
            "Always fails"
        }

        fn execute(&self, _ctx: &Context<'_>, _out: &mut dyn Write) -> anyhow::Result<()> {
            anyhow::bail!("boom")
        }
    }

    fn config(command: &str) -> ResolvedConfiguration {
        ResolvedConfiguration {
            command: command.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_commands() {
        let commands = CommandSet::builtin();
        assert!(commands.contains("help"));
        assert!(commands.contains("version"));
        assert!(!commands.contains(""));
        assert!(!commands.contains("up"));
    }

    #[test]
    fn test_iter_is_sorted() {
        let mut commands = CommandSet::builtin();
        commands.insert("destroy", Box::new(Failing));
        let names: Vec<_> = commands.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["destroy", "help", "version"]);
    }

    #[test]
    fn test_execute_unknown_command() {
        let commands = CommandSet::builtin();
        let usage = Usage::new(&commands);
        let err = commands
            .execute(&config("up"), &usage, &mut Vec::new())
            .unwrap_err();
        assert!(matches!(err, CliError::UnrecognizedCommand { .. }));
    }

    #[test]
    fn test_execute_wraps_command_error() {
        let mut commands = CommandSet::builtin();
        commands.insert("destroy", Box::new(Failing));
        let usage = Usage::new(&commands);

        let err = commands
            .execute(&config("destroy"), &usage, &mut Vec::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "destroy: boom");
        assert!(!err.is_usage_error());
    }
}
