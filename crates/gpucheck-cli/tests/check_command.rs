//! End-to-end tests for the `gpucheck` binary.
//!
//! Each test writes a shell script standing in for `python3` into a temp
//! directory and points `--python` at it. The script answers by matching the
//! `# gpucheck: <module> <stage>` marker at the top of each probe script.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const PYTHON_VERSION: &str = r#"*"gpucheck: sys version"*) echo "3.11.4 (main, Jun  7 2023, 00:00:00) [GCC 12.2.0]" ;;"#;
const NOT_INSTALLED: &str = r#"*) echo "ModuleNotFoundError: No module named 'x'" >&2; exit 3 ;;"#;

fn fake_python(dir: &Path, cases: &[&str]) -> PathBuf {
    let path = dir.join("python3");
    let body = format!(
        "#!/bin/sh\ncase \"$2\" in\n{}\n{PYTHON_VERSION}\n{NOT_INSTALLED}\nesac\n",
        cases.join("\n")
    );
    std::fs::write(&path, body).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn gpucheck(python: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gpucheck"))
        .arg("--python")
        .arg(python)
        .arg("--no-color")
        .env_remove("RUST_LOG")
        .env_remove("GPUCHECK_PYTHON")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_nothing_installed() {
    let dir = tempfile::tempdir().unwrap();
    let output = gpucheck(&fake_python(dir.path(), &[]));
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Python version: 3.11.4 (main, Jun  7 2023, 00:00:00) [GCC 12.2.0]"));
    assert_eq!(out.matches("not installed").count(), 4);
    for name in ["PyTorch", "TensorFlow", "CatBoost", "XGBoost"] {
        assert!(out.contains(&format!("{name} not installed")));
    }
    assert!(out.contains("Libraries installed: 0/4\n"));
    assert!(out.contains("Accelerator-enabled libraries: 0/0\n"));
}

#[test]
fn test_installed_without_accelerator() {
    let dir = tempfile::tempdir().unwrap();
    let python = fake_python(
        dir.path(),
        &[
            r#"*"gpucheck: xgboost import"*) echo "2.0.3" ;;"#,
            r#"*"gpucheck: xgboost accelerator"*) echo "RuntimeError: XGBoost was built without CUDA support" >&2; exit 1 ;;"#,
            r#"*"gpucheck: xgboost fallback"*) echo "ok" ;;"#,
        ],
    );
    let output = gpucheck(&python);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Version: 2.0.3\nXGBoost        : ❌ Not Available\n"));
    assert!(out.contains(
        "GPU failed: RuntimeError: XGBoost was built without CUDA suppo..., but CPU works"
    ));
    assert_eq!(out.matches("not installed").count(), 3);
    assert!(out.contains("Libraries installed: 1/4\n"));
    assert!(out.contains("Accelerator-enabled libraries: 0/1\n"));
    assert!(out.contains("🔴 XGBoost v2.0.3\n"));
}

#[test]
fn test_installed_with_everything_broken() {
    let dir = tempfile::tempdir().unwrap();
    let python = fake_python(
        dir.path(),
        &[
            r#"*"gpucheck: catboost import"*) echo "1.2.5" ;;"#,
            r#"*"gpucheck: catboost accelerator"*) echo "CatBoostError: no CUDA devices" >&2; exit 1 ;;"#,
            r#"*"gpucheck: catboost fallback"*) echo "Segmentation fault" >&2; exit 139 ;;"#,
        ],
    );
    let out = stdout(&gpucheck(&python));

    assert!(out.contains(
        "GPU not available: CatBoostError: no CUDA devices (CPU path also failed)"
    ));
    assert!(out.contains("🔴 CatBoost v1.2.5\n"));
}

#[test]
fn test_working_accelerator() {
    let dir = tempfile::tempdir().unwrap();
    let python = fake_python(
        dir.path(),
        &[
            r#"*"gpucheck: torch import"*) echo "2.3.0+cu121" ;;"#,
            r#"*"gpucheck: torch accelerator"*) echo '{"backend": "cuda", "device_count": 1, "current_device": 0, "device_names": ["NVIDIA A100-SXM4-40GB"], "result": [2.0, 4.0]}' ;;"#,
        ],
    );
    let output = gpucheck(&python);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("PyTorch        : ✅ Available\n"));
    assert!(out.contains("Devices: 1, Current: 0, Name: NVIDIA A100-SXM4-40GB, Test: [2.0, 4.0]"));
    assert!(out.contains("Accelerator-enabled libraries: 1/1\n"));
    assert!(out.contains("🟢 PyTorch v2.3.0+cu121\n"));
}

#[test]
fn test_tensorflow_runs_with_quiet_logging() {
    let dir = tempfile::tempdir().unwrap();
    let python = fake_python(
        dir.path(),
        &[
            r#"*"gpucheck: tensorflow import"*) echo "2.15.0-loglevel-$TF_CPP_MIN_LOG_LEVEL" ;;"#,
            r#"*"gpucheck: torch import"*) echo "2.3.0-loglevel-${TF_CPP_MIN_LOG_LEVEL:-unset}" ;;"#,
        ],
    );
    let out = stdout(&gpucheck(&python));

    assert!(out.contains("Version: 2.15.0-loglevel-2\n"));
    assert!(out.contains("Version: 2.3.0-loglevel-unset\n"));
}

#[test]
fn test_missing_interpreter_still_exits_zero() {
    let output = gpucheck(Path::new("/definitely/not/a/real/python3"));
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains(
        "Python version: unavailable (failed to launch /definitely/not/a/real/python3"
    ));
    assert_eq!(out.matches("Error: failed to launch").count(), 4);
    assert!(out.contains("Libraries installed: 0/4\n"));
    assert!(out.contains("Accelerator-enabled libraries: 0/0\n"));
}
