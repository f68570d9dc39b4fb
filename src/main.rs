//! # Lapline Main Entry Point
//!
//! Clean MVVM lap timer for the terminal.

use std::sync::Arc;

use anyhow::Result;
use lapline::cmd_args::CommandLineArgs;
use lapline::stopwatch::clock::SystemClock;
use lapline::stopwatch::format::format_seconds;
use lapline::stopwatch::io::{TerminalEventStream, TerminalRenderStream};
use lapline::AppController;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose());
    tracing::debug!(?cmd_args, "starting lapline");

    let mut app = AppController::with_io_streams(
        cmd_args,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
        Arc::new(SystemClock),
    )?;

    app.run().await?;

    // Back on the normal screen; leave a one-line session summary behind.
    let view_model = app.view_model();
    if !view_model.total_elapsed().is_zero() {
        println!(
            "total {}s across {} lap(s)",
            format_seconds(view_model.total_elapsed()),
            view_model.lap_count() + 1
        );
    }
    Ok(())
}

/// Logs go to stderr so they never corrupt the timer screen on stdout.
/// `LAPLINE_LOG_LEVEL` takes precedence over the verbose flag.
fn init_tracing_subscriber(verbose: bool) {
    let default_level = if verbose { "lapline=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LAPLINE_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
