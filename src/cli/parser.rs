//! Argument resolution
//!
//! Turns raw process arguments into a [`ResolvedConfiguration`]. The flow is
//! one way: command finder, then global flags, then command precedence,
//! then the state directory default.
//!
//! Command precedence, highest first:
//!
//! 1. `--version` resolves to `version`
//! 2. `--help` or a missing command resolves to `help`
//! 3. an unregistered command is an error
//! 4. otherwise the command as typed
//!
//! A malformed global flag is reported before any of this unless an
//! unrecognized command is also pending, in which case the command error wins.

use crate::{
    cli::{
        finder::CommandFinder,
        global_flags::{GlobalFlagParser, GlobalFlags},
    },
    commands::CommandSet,
    config::{HELP_COMMAND, ResolvedConfiguration, VERSION_COMMAND},
    error::{CliError, Result},
    utils::{EnvGetter, WorkingDir},
};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Whether the command candidate is in the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Registered command
    Known,
    /// No candidate was found
    Blank,
    /// Candidate not in the registry
    Unknown,
}

/// Outcome of command-name precedence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Print the version
    Version,
    /// Render help, optionally for the named command
    Help { topic: Option<String> },
    /// Run the command as typed
    Named(String),
    /// The candidate is not a command
    Unrecognized(String),
}

/// Apply command-name precedence to a candidate and the decoded flags
pub fn resolve_command(candidate: &str, membership: Membership, flags: &GlobalFlags) -> Resolution {
    if flags.version {
        return Resolution::Version;
    }

    if membership == Membership::Blank {
        return Resolution::Help { topic: None };
    }

    if flags.help {
        return Resolution::Help {
            topic: Some(candidate.to_string()),
        };
    }

    match membership {
        Membership::Unknown => Resolution::Unrecognized(candidate.to_string()),
        _ => Resolution::Named(candidate.to_string()),
    }
}

/// Resolves raw arguments against a command registry
pub struct CommandLineParser<'a> {
    usage: &'a dyn Fn(),
    commands: &'a CommandSet,
    env: &'a dyn EnvGetter,
    working_dir: &'a dyn WorkingDir,
}

impl<'a> CommandLineParser<'a> {
    /// Create a parser
    ///
    /// `usage` is called exactly once whenever parsing fails because of what
    /// the user typed.
    pub fn new(
        usage: &'a dyn Fn(),
        commands: &'a CommandSet,
        env: &'a dyn EnvGetter,
        working_dir: &'a dyn WorkingDir,
    ) -> Self {
        Self {
            usage,
            commands,
            env,
            working_dir,
        }
    }

    /// Resolve `arguments` (without the program name)
    #[instrument(skip(self))]
    pub fn parse(&self, arguments: &[String]) -> Result<ResolvedConfiguration> {
        let found = CommandFinder::new().find_command(arguments);

        let membership = if self.commands.contains(&found.command) {
            Membership::Known
        } else if found.command.is_empty() {
            Membership::Blank
        } else {
            Membership::Unknown
        };
        debug!("Command candidate '{}' is {:?}", found.command, membership);

        let flags = match GlobalFlagParser::new(self.env)
            .parse(GlobalFlags::default(), &found.global_flags)
        {
            Ok((flags, _)) => flags,
            Err(err) if membership != Membership::Unknown => return Err(self.usage_error(err)),
            Err(err) => {
                debug!("Ignoring global flag error in favour of unknown command: {}", err);
                GlobalFlags::default()
            }
        };

        let mut subcommand_flags = found.other_args;
        let command = match resolve_command(&found.command, membership, &flags) {
            Resolution::Version => VERSION_COMMAND.to_string(),
            Resolution::Help { topic } => {
                if let Some(topic) = topic {
                    subcommand_flags.insert(0, topic);
                }
                HELP_COMMAND.to_string()
            }
            Resolution::Named(name) => name,
            Resolution::Unrecognized(name) => {
                return Err(self.usage_error(CliError::unrecognized_command(name)));
            }
        };

        let state_dir = self.state_dir(flags.state_dir)?;

        Ok(ResolvedConfiguration {
            command,
            subcommand_flags,
            state_dir,
            debug: flags.debug,
        })
    }

    fn usage_error(&self, err: CliError) -> CliError {
        (self.usage)();
        err
    }

    fn state_dir(&self, supplied: String) -> Result<PathBuf> {
        if !supplied.is_empty() {
            return Ok(PathBuf::from(supplied));
        }

        self.working_dir
            .getwd()
            .map_err(CliError::working_directory)
    }
}
