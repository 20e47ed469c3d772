mod cli;
mod repl;
mod wiring;

use std::path::Path;

use causerie_config::CauserieConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Loaded before logging so the configured level can seed the filter;
    // failures are reported once the subscriber is up.
    let loaded = match args.config {
        Some(ref path) => causerie_config::load_config_from(Path::new(path)),
        None => causerie_config::load_config(),
    };
    let default_directive = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default()
        .as_directive();

    // --log-level beats RUST_LOG, which beats the config file.
    let filter = match args.log_level.as_deref() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive)),
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    tracing::info!("Causerie v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CauserieConfig::default()
    });

    let session = wiring::build_session(&config, &args);
    if !session.is_bound() {
        eprintln!("No Gemini API key found; questions will fail until one is configured.");
    }
    println!("Type /help for commands.");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    match repl::run(session, stdin, &mut stdout).await {
        Ok(session) => {
            tracing::info!(exchanges = session.transcript().len(), "Shutdown complete");
        }
        Err(e) => {
            tracing::error!("Terminal I/O error: {e}");
            std::process::exit(1);
        }
    }
}
