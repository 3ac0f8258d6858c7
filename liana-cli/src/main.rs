//! `liana` binary: enriches networks with heuristic edges and reports their
//! structural features.
//!
//! Arguments are parsed first so logging can be configured for the chosen
//! command. Command summaries go to stdout; failures are logged with their
//! stable error code and exit non-zero.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use liana_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LogSettings, LoggingError},
};
use tracing::{error, field};

/// Execute the command, render the summary, and flush the output stream.
fn try_main(cli: Cli) -> Result<()> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match LogSettings::for_command(&cli.command).with_env_overrides() {
        Ok(settings) => logging::init_logging(settings),
        Err(err) => {
            report_logging_init_error(&err);
            return ExitCode::FAILURE;
        }
    }

    if let Err(err) = try_main(cli) {
        let (code, network_code) = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::Core(core) => Some((Some(core.code()), core.network_code())),
                _ => None,
            })
            .unwrap_or((None, None));

        let code_field = code.map(|code| field::display(code.as_str()));
        let network_code_field = network_code.map(|code| field::display(code.as_str()));

        error!(
            error = %err,
            code = code_field,
            network_code = network_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
