use clap::Parser;
use tracing_subscriber::EnvFilter;

use larder::cli::commands::execute_command;
use larder::cli::output;
use larder::cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match execute_command(&cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            output::error(&e);
            std::process::exit(e.exit_code());
        }
    }
}

/// `RUST_LOG` wins if set; otherwise `-v` count picks larder's level.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,larder={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(verbosity, "tracing initialised");
}
