//! Section banners and per-library status lines.

use gpucheck_core::ProbeResult;

use super::Style;

/// Width of the `=` rule around section titles.
const BANNER_WIDTH: usize = 60;

const NAME_WIDTH: usize = 15;

/// Blank line, rule, indented title, rule.
pub fn render_header(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\n {title}\n{rule}\n")
}

/// Status line for one library, plus an indented details line when there
/// is anything to say.
pub fn render_result(library: &str, available: bool, details: &str, style: Style) -> String {
    let status = if available {
        style.green("✅ Available")
    } else {
        style.red("❌ Not Available")
    };

    let mut out = format!("{library:<NAME_WIDTH$}: {status}\n");
    if !details.is_empty() {
        let indent = " ".repeat(NAME_WIDTH + 1);
        out.push_str(&format!("{indent}{details}\n"));
    }
    out
}

/// Summary line for an installed library; `None` when it is not installed.
pub fn render_installed_line(result: &ProbeResult) -> Option<String> {
    let version = result.library_version()?;
    let glyph = if result.accelerator_available() {
        "🟢"
    } else {
        "🔴"
    };
    Some(format!("{glyph} {} v{version}", result.library_name()))
}
