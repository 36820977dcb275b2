//! Report presentation.
//!
//! Format-only: every function here turns already-classified results into
//! text. The `render_*` functions return strings so they can be tested; the
//! orchestrator decides where they are written.

mod display;
mod style;

pub use display::{render_header, render_installed_line, render_result};
pub use style::Style;
