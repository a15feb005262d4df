//! Global flag decoding
//!
//! Decodes the tokens that precede the command with clap. Long flags are
//! accepted with one or two leading dashes, and boolean flags take an
//! optional `=true`/`=false` value.

use crate::{
    config::DEBUG_ENV_VAR,
    error::{CliError, Result},
    utils::EnvGetter,
};
use clap::{
    ColorChoice, CommandFactory, Parser,
    error::{ContextKind, ContextValue},
};
use tracing::{debug, instrument};

/// Global options understood before the command token
#[derive(Parser, Debug)]
#[command(
    name = "bbl",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    color = ColorChoice::Never
)]
struct GlobalArgs {
    /// Prints usage. Use "bbl [command] --help" for more information about a command
    #[arg(short = 'h', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    help: Option<bool>,

    /// Directory containing the bbl state
    #[arg(long = "state-dir", value_name = "PATH", allow_hyphen_values = true)]
    state_dir: Option<String>,

    /// Prints debugging output (env: BBL_DEBUG)
    #[arg(short = 'd', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    debug: Option<bool>,

    /// Prints version
    #[arg(short = 'v', long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    version: Option<bool>,

    /// Anything after `--`
    #[arg(last = true, hide = true)]
    remaining: Vec<String>,
}

/// A global flag as listed in usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagDoc {
    /// Long spelling, e.g. `--debug`
    pub long: String,
    /// Short spelling, if any
    pub short: Option<char>,
    /// One-line description
    pub help: String,
}

/// Documented global flags in declaration order
pub fn flag_docs() -> Vec<FlagDoc> {
    GlobalArgs::command()
        .get_arguments()
        .filter(|arg| !arg.is_hide_set())
        .filter_map(|arg| {
            Some(FlagDoc {
                long: format!("--{}", arg.get_long()?),
                short: arg.get_short(),
                help: arg.get_help().map(ToString::to_string).unwrap_or_default(),
            })
        })
        .collect()
}

/// Decoded global options
///
/// `help` and `version` only live until resolution folds them into the
/// command name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalFlags {
    /// State directory, empty when not supplied
    pub state_dir: String,
    /// Debug output
    pub debug: bool,
    /// Help was requested
    pub help: bool,
    /// Version was requested
    pub version: bool,
}

/// Parses the global flag slice found by the command finder
pub struct GlobalFlagParser<'a> {
    env: &'a dyn EnvGetter,
}

impl<'a> GlobalFlagParser<'a> {
    /// Create a parser reading defaults from `env`
    pub fn new(env: &'a dyn EnvGetter) -> Self {
        Self { env }
    }

    /// Decode `arguments` on top of `partial`
    ///
    /// Returns the decoded flags and the tokens left over after `--`.
    #[instrument(skip(self, partial))]
    pub fn parse(
        &self,
        partial: GlobalFlags,
        arguments: &[String],
    ) -> Result<(GlobalFlags, Vec<String>)> {
        self.validate(arguments)?;

        let debug_default = self.env.get(DEBUG_ENV_VAR) == "true";
        let normalized = normalize(arguments);
        let args = GlobalArgs::try_parse_from(&normalized)
            .map_err(|err| respell(err, arguments, &normalized))?;

        let flags = GlobalFlags {
            state_dir: args.state_dir.unwrap_or(partial.state_dir),
            debug: args.debug.unwrap_or(debug_default || partial.debug),
            help: args.help.unwrap_or(partial.help),
            version: args.version.unwrap_or(partial.version),
        };
        debug!("Decoded global flags: {:?}", flags);

        Ok((flags, args.remaining))
    }

    /// Reject a state directory given more than once
    pub fn validate(&self, arguments: &[String]) -> Result<()> {
        let mut has_state_dir = false;

        for argument in arguments {
            let name = argument.split('=').next().unwrap_or_default();
            if name == "--state-dir" || name == "-state-dir" {
                if has_state_dir {
                    return Err(CliError::DuplicateFlag { flag: "state-dir" });
                }
                has_state_dir = true;
            }
        }

        Ok(())
    }
}

/// Rewrite single-dash long flags (`-state-dir`) into their double-dash form
///
/// Single-letter flags and anything after `--` are left alone.
fn normalize(arguments: &[String]) -> Vec<String> {
    let mut normalized = Vec::with_capacity(arguments.len());
    let mut passthrough = false;
    let mut expecting_value = false;

    for argument in arguments {
        if passthrough || expecting_value {
            expecting_value = false;
            normalized.push(argument.clone());
            continue;
        }

        if argument == "--" {
            passthrough = true;
            normalized.push(argument.clone());
            continue;
        }

        expecting_value = super::finder::takes_value(argument);

        let name = argument.split('=').next().unwrap_or_default();
        if name.len() > 2 && name.starts_with('-') && !name.starts_with("--") {
            normalized.push(format!("-{argument}"));
        } else {
            normalized.push(argument.clone());
        }
    }

    normalized
}

/// Report a rejected flag under the spelling the user typed
fn respell(err: clap::Error, original: &[String], normalized: &[String]) -> CliError {
    let respelled = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(invalid)) => normalized
            .iter()
            .zip(original)
            .filter(|(rewritten, typed)| rewritten != typed)
            .map(|(rewritten, typed)| (flag_name(rewritten), flag_name(typed)))
            .find(|(rewritten, _)| *rewritten == invalid.as_str())
            .map(|(rewritten, typed)| (format!("'{rewritten}'"), format!("'{typed}'"))),
        _ => None,
    };

    let mut cli_err = CliError::from(err);
    if let (Some((rewritten, typed)), CliError::FlagSyntax { message, .. }) =
        (respelled, &mut cli_err)
    {
        *message = message.replace(&rewritten, &typed);
    }

    cli_err
}

fn flag_name(token: &str) -> &str {
    token.split('=').next().unwrap_or_default()
}
