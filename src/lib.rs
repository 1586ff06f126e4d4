pub mod commands;
pub mod config;
pub mod pipeline;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Cli;

/// Binary entry point. Returns the process exit code.
pub fn run() -> i32 {
    // Initialize tracing (stderr, so stdout stays machine-readable)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            tracing::error!(error = %e, "Path derivation failed");
            eprintln!("error: {e}");
            1
        }
    }
}
