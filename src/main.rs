use std::env;
use std::process::ExitCode;
use ticklabs::config::AppConfig;
use ticklabs::interface::console::{ConsoleInterface, LabKind};
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_PERIODS: u64 = 400;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = env::args().collect();

    let mut kind = LabKind::TicTacToe;
    let mut periods = DEFAULT_PERIODS;

    if args.len() > 1 {
        match args[1].parse() {
            Ok(k) => kind = k,
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    if args.len() > 2 {
        if let Ok(p) = args[2].parse::<u64>() {
            periods = p;
        }
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ConsoleInterface::run(kind, &config, periods);
    ExitCode::SUCCESS
}
