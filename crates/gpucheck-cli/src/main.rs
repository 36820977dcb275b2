//! CLI entry point - the composition root.
//!
//! This is the ONLY place where the interpreter adapter is constructed and
//! handed to the check handler.

use anyhow::Context;
use clap::Parser;
use gpucheck_cli::{Cli, Style, handlers, logging};
use gpucheck_core::AttemptPolicy;
use gpucheck_core::ports::InterpreterPort;
use gpucheck_runtime::{Library, PythonInterpreter};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    logging::init(cli.verbose);

    let python = cli
        .python
        .map_or_else(PythonInterpreter::discover, PythonInterpreter::new);
    info!(python = python.program(), "Using interpreter");

    let style = Style::detect(cli.no_color);
    let mut stdout = std::io::stdout().lock();

    // Probe outcomes never affect the exit code; only a broken stdout does.
    handlers::check::execute(
        &mut stdout,
        &python,
        &Library::ALL,
        &AttemptPolicy::default(),
        style,
    )
    .context("Failed to write report")?;

    Ok(())
}
