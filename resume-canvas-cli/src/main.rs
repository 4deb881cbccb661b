//! # Resume Canvas CLI
//!
//! Command-line entry point for offline résumé canvas inspection.

use clap::Parser;
use resume_canvas_cli::{run, CliArgs, RunConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing to stderr with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: resume_canvas_cli=info,resume_canvas_core=info).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("resume_canvas_cli=info,resume_canvas_core=info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = RunConfig::from(args);
    tracing::debug!(template = %config.template, command = ?config.command, "Starting resume-canvas");

    run(&config)
}
