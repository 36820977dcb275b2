//! Domain types for probe results and their classification.

mod attempt;
mod evidence;
mod report;
mod result;

pub use attempt::{AttemptPolicy, DETAIL_ERROR_LIMIT, truncate_error};
pub use evidence::Evidence;
pub use report::{ProbeReport, Summary};
pub use result::ProbeResult;
