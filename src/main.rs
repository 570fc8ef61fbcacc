//! Huescope binary entrypoint kept minimal. The handlers live in `args`.

use clap::Parser;
use huescope::args::{self, Args};

fn main() {
    let parsed = Args::parse();

    // Logging goes to stderr so report output stays pipeable.
    let level = args::determine_log_level(&parsed);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(!parsed.no_color)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = args::run(&parsed) {
        tracing::error!(error = %err, "analysis failed");
        std::process::exit(1);
    }
}
