//! arinspect - per-member inventory of Unix ar archives as CSV.

mod cli;
mod commands;
mod error;
mod output;

use std::process::ExitCode;

use anyhow::Result;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let Some(cli) = cli::Cli::parse_or_usage()? else {
        return Ok(());
    };

    init_logging(cli.verbose);

    let formatter = output::create_formatter(cli.json);
    commands::list::execute(&cli, &*formatter)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
