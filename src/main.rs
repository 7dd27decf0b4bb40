use crate::cli::sign;
use crate::error::Error;
use clap::Parser;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
pub(crate) mod data;
mod error;
mod utils;

/// Sign a build artifact with the ESRP client
///
/// Requires the environment variables `AZURE_AAD_ID`, `AZURE_AAD_ID_TEMP` and
/// `GITHUB_WORKSPACE`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Silence logging, the client's log and result are still printed
    #[arg(global = true, short, long, default_value = "false")]
    quiet: bool,

    /// Increase verbosity level
    #[arg(global = true, short, long, action=clap::ArgAction::Count)]
    verbose: u8,

    /// The file to sign
    #[arg()]
    path: PathBuf,

    /// Platform-specific key code for signing
    #[arg()]
    keycode: String,

    /// Platform-specific operation code for signing
    #[arg()]
    opcode: String,

    /// Parameters for signing, as whitespace separated name/value pairs
    #[arg(long, allow_hyphen_values = true)]
    params: Option<String>,
}

fn setup_logger(cli: &Cli) {
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => LevelFilter::Off,
        (_, 0) => LevelFilter::Warn,
        (_, 1) => LevelFilter::Info,
        (_, 2) => LevelFilter::Debug,
        (_, _) => LevelFilter::Trace,
    };

    TermLogger::init(
        log_level,
        ConfigBuilder::new()
            .set_time_level(LevelFilter::Debug)
            .set_max_level(LevelFilter::Debug)
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Unable to setup logging");

    log::debug!("Log Level: {log_level}");
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    setup_logger(&cli);

    let result = sign::run(sign::Options {
        path: cli.path,
        keycode: cli.keycode,
        opcode: cli.opcode,
        params: cli.params,
    });

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<Error>() {
            // already reported on stdout
            Some(Error::ExternalToolFailure(_)) => {
                log::error!("{err}");
                Ok(ExitCode::from(1))
            }
            _ => Err(err),
        },
    }
}
