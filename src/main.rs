use clap::error::ErrorKind;
use clap::Parser;
use itch_vwap::cli::Cli;
use itch_vwap::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code: u8 = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                // Usage errors exit 1, not clap's default 2
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    if let Err(e) = itch_vwap::telemetry::init_telemetry(&config.telemetry) {
        eprintln!("Failed to initialize telemetry: {e}");
        return ExitCode::FAILURE;
    }

    if let Err(e) = cli.process.execute(&config) {
        tracing::error!(error = %e, "run failed");
        eprintln!("An error occurred: {e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
