//! The `help` command
//!
//! Reached either as `bbl help [command]` or through `--help` / a missing
//! command, in which case the parser has already moved the typed command to
//! the front of the subcommand flags.

use super::{Command, Context};
use std::io::Write;
use tracing::debug;

/// Renders general or command-specific usage
#[derive(Debug, Default, Clone, Copy)]
pub struct Help;

impl Command for Help {
    fn summary(&self) -> &str {
        "Prints usage"
    }

    fn usage(&self) -> &str {
        "  Pass a command name to see the options it accepts."
    }

    fn execute(&self, ctx: &Context<'_>, out: &mut dyn Write) -> anyhow::Result<()> {
        let topic = ctx.config.subcommand_flags.first().map(String::as_str);

        match topic.and_then(|name| ctx.commands.get(name).map(|command| (name, command))) {
            Some((name, command)) => {
                debug!("Rendering help for '{}'", name);
                write!(out, "{}", ctx.usage.render_command(name, command.usage()))?;
            }
            None => write!(out, "{}", ctx.usage.render())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::Usage, commands::CommandSet, config::ResolvedConfiguration};

    fn run(flags: &[&str]) -> String {
        let commands = CommandSet::builtin();
        let usage = Usage::new(&commands);
        let config = ResolvedConfiguration {
            command: "help".to_string(),
            subcommand_flags: flags.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        };
        let ctx = Context {
            config: &config,
            commands: &commands,
            usage: &usage,
        };

        let mut out = Vec::new();
        Help.execute(&ctx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_general_usage() {
        let printed = run(&[]);
        assert!(printed.contains("bbl [GLOBAL OPTIONS] COMMAND [OPTIONS]"));
        assert!(printed.contains("--state-dir"));
        assert!(printed.contains("version"));
    }

    #[test]
    fn test_command_usage() {
        let printed = run(&["version", "--extra"]);
        assert!(printed.contains("bbl [GLOBAL OPTIONS] version [OPTIONS]"));
        assert!(printed.contains("[version command options]"));
        assert!(printed.contains("This command takes no options."));
    }

    #[test]
    fn test_unknown_topic_falls_back_to_general_usage() {
        let printed = run(&["bogus"]);
        assert!(printed.contains("bbl [GLOBAL OPTIONS] COMMAND [OPTIONS]"));
        assert!(!printed.contains("[bogus command options]"));
    }
}
