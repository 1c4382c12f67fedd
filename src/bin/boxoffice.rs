use std::io;

use boxoffice::{config::AppConfig, console::Console, core::catalog::Catalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().with_args(std::env::args().skip(1));

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    info!(output = ?config.output, "starting box office console");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), Catalog::new(), config.output);
    console.run()?;
    Ok(())
}
