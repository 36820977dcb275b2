//! Command-line argument parsing.
//!
//! Running `gpucheck` with no arguments probes every library. The flags
//! below only change where output goes or which interpreter is probed.

use std::path::PathBuf;

use clap::Parser;

/// Reports whether PyTorch, TensorFlow, CatBoost and XGBoost can run on the GPU.
#[derive(Debug, Parser)]
#[command(name = "gpucheck")]
#[command(about = "Check GPU availability for Python ML libraries")]
#[command(version)]
pub struct Cli {
    /// Python interpreter to probe (default: python3, then python, on PATH)
    #[arg(long, env = "GPUCHECK_PYTHON", value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Never emit ANSI color codes
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "gpucheck",
            "-v",
            "--no-color",
            "--python",
            "/opt/conda/bin/python",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.python, Some(PathBuf::from("/opt/conda/bin/python")));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["gpucheck", "torch"]).is_err());
    }
}
