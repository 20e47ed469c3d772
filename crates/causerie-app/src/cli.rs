use clap::Parser;

/// Causerie: a terminal chat with a Gemini-backed assistant.
#[derive(Parser, Debug)]
#[command(name = "causerie", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. `causerie=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with debug mode on (logs every outgoing question).
    #[arg(long)]
    pub debug: bool,

    /// Preselect a persona by its index in `/roles`.
    #[arg(long)]
    pub role: Option<usize>,
}

pub fn parse() -> Args {
    Args::parse()
}
