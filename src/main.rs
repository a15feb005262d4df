use anyhow::Result;
use bbl_cli::{
    cli::{CommandLineParser, Usage},
    commands::CommandSet,
    error::CliError,
    setup_logging,
    utils::{ProcessEnv, ProcessWorkingDir},
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    let commands = CommandSet::builtin();
    let usage = Usage::new(&commands);

    match run(&commands, &usage) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bbl: {e}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(commands: &CommandSet, usage: &Usage) -> Result<()> {
    let arguments: Vec<String> = std::env::args().skip(1).collect();

    // Usage goes to stderr before any parse error is reported
    let print_usage = || usage.print();
    let env = ProcessEnv::new();
    let working_dir = ProcessWorkingDir::new();
    let config =
        CommandLineParser::new(&print_usage, commands, &env, &working_dir).parse(&arguments)?;

    setup_logging(config.debug)?;
    debug!(
        command = %config.command,
        state_dir = %config.state_dir.display(),
        subcommand_flags = ?config.subcommand_flags,
        "Resolved invocation"
    );

    commands.execute(&config, usage, &mut std::io::stdout().lock())?;
    Ok(())
}
