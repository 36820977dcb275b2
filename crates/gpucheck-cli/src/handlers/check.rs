//! The check handler: runs every registered probe and renders the report.

use std::io::Write;

use gpucheck_core::ports::InterpreterPort;
use gpucheck_core::{AttemptPolicy, ProbeReport};
use gpucheck_runtime::{Library, probe};
use tracing::warn;

use crate::presentation::{Style, render_header, render_installed_line, render_result};

/// Execute the check.
///
/// Probes each library in `registry` order, writing each section as soon as
/// its probe finishes, then writes the summary.
///
/// # Arguments
///
/// * `out` - Where the report goes (stdout in the binary)
/// * `python` - Interpreter the probes run in
/// * `registry` - Libraries to probe, in report order
/// * `policy` - Accelerator/fallback classification settings
/// * `style` - Color handling for status text
///
/// # Returns
///
/// The collected results. Probe failures are part of the report; only a
/// failure to write `out` is returned as an error.
pub fn execute<W: Write>(
    out: &mut W,
    python: &dyn InterpreterPort,
    registry: &[Library],
    policy: &AttemptPolicy,
    style: Style,
) -> std::io::Result<ProbeReport> {
    write!(out, "{}", render_header("GPU Availability Checker"))?;
    match python.version() {
        Ok(version) => writeln!(out, "Python version: {version}")?,
        Err(err) => {
            warn!(error = %err, "Could not read interpreter version");
            writeln!(out, "Python version: unavailable ({err})")?;
        }
    }

    let mut report = ProbeReport::new();
    for &library in registry {
        let name = library.display_name();
        write!(out, "{}", render_header(&format!("Checking {name}")))?;

        let result = probe(library, python, policy);
        if let Some(version) = result.library_version() {
            writeln!(out, "Version: {version}")?;
        }
        write!(
            out,
            "{}",
            render_result(
                name,
                result.accelerator_available(),
                result.details(),
                style
            )
        )?;
        out.flush()?;

        report.insert(result);
    }

    let summary = report.summary(registry.len());
    write!(out, "{}", render_header("Summary"))?;
    writeln!(out, "{}", summary.installed_line())?;
    writeln!(out, "{}", summary.accelerator_line())?;
    for line in report.iter().filter_map(render_installed_line) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(report)
}
