//! junit-report - persist a rendered JUnit XML report
//!
//! This is the main entry point for the junit-report CLI.

mod cli;

use cli::Cli;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse_args();

    init_logging(cli.verbosity());

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            cli::EXIT_USAGE
        }
    };

    std::process::exit(exit_code);
}

/// Initialize logging based on verbosity level
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 3),
        )
        .with(env_filter)
        .init();
}
