//! Interpreter lookup on `PATH`.

use std::path::PathBuf;

/// Command names tried in order. `python3` first; `python` is only a
/// Python 3 interpreter on some systems, but it is better than nothing.
pub const CANDIDATES: [&str; 2] = ["python3", "python"];

/// Find the first candidate interpreter on `PATH`.
pub fn find_python() -> Option<PathBuf> {
    find_first(&CANDIDATES)
}

fn find_first(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .find_map(|candidate| which::which(candidate).ok())
}
