use clap::Parser;
use std::process::ExitCode;
use wl::cli::{self, Args, CliError};
use wl::logging::{self, LoggingConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let logging_config = match LoggingConfig::load(args.verbose) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid logging configuration: {:#}", err);
            return ExitCode::from(2);
        }
    };
    if let Err(err) = logging::init(&logging_config) {
        eprintln!("failed to initialize logging: {:#}", err);
        return ExitCode::from(2);
    }

    match cli::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(err)) => {
            eprintln!("{}", err);
            ExitCode::from(2)
        }
        Err(CliError::Failed(err)) => {
            eprintln!("exiting - error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
