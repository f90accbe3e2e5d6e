//! End-to-end dispatch through real child processes.
//!
//! Fake backends are shell scripts placed in a temporary install directory
//! and run through `/bin/sh`, so nothing needs an executable bit.

#![cfg(unix)]

use guibuild::dispatch::SCRIPTS_DIR;
use guibuild::{Backend, DispatchError, ProcessLauncher, RunOutcome, Settings, run};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RECORD_ARGS: &str = r#"out="$(dirname "$0")/received.txt"
: > "$out"
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$out"
done
"#;

fn install_dir(backend: Backend, body: &str) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let scripts = dir.path().join(SCRIPTS_DIR);
    fs::create_dir_all(&scripts).expect("Failed to create scripts dir");
    fs::write(scripts.join(backend.script()), body).expect("Failed to write fake backend");
    dir
}

fn sh_settings(dir: &Path) -> Settings {
    Settings {
        interpreter: Some(PathBuf::from("/bin/sh")),
        ..Settings::new(dir)
    }
}

fn received_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join(SCRIPTS_DIR).join("received.txt"))
        .expect("Fake backend did not record its arguments")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_child_exit_code_is_propagated() {
    let dir = install_dir(Backend::Compiler, "exit 3\n");
    let outcome = run(&["nuitka"], &sh_settings(dir.path()), &mut ProcessLauncher).unwrap();
    assert_eq!(outcome, RunOutcome::Exited(3));
}

#[test]
fn test_success_exits_zero() {
    let dir = install_dir(Backend::Freeze, "exit 0\n");
    let outcome = run(&["pyinstaller"], &sh_settings(dir.path()), &mut ProcessLauncher).unwrap();
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn test_defaults_only_reach_compiler_backend() {
    let dir = install_dir(Backend::Compiler, RECORD_ARGS);
    let tokens: [&str; 0] = [];
    run(&tokens, &sh_settings(dir.path()), &mut ProcessLauncher).unwrap();
    assert_eq!(received_args(dir.path()), ["--main", "main.py"]);
}

#[test]
fn test_freeze_backend_receives_translated_options() {
    let dir = install_dir(Backend::Freeze, RECORD_ARGS);
    run(
        &["pyinstaller", "--onefile", "--name", "My App", "--verbose"],
        &sh_settings(dir.path()),
        &mut ProcessLauncher,
    )
    .unwrap();
    assert_eq!(
        received_args(dir.path()),
        ["--main", "main.py", "--name", "My App", "--onefile"]
    );
}

#[test]
fn test_missing_interpreter_is_unresolved() {
    let dir = install_dir(Backend::Compiler, "exit 0\n");
    let settings = Settings {
        interpreter: Some(PathBuf::from("/nonexistent/python-for-guibuild-tests")),
        ..Settings::new(dir.path())
    };
    let err = run(&["nuitka"], &settings, &mut ProcessLauncher).unwrap_err();
    match err {
        DispatchError::UnresolvedBackendProgram { ref program, .. } => {
            assert!(program.ends_with("python-for-guibuild-tests"));
        }
        ref other => panic!("unexpected error: {}", other),
    }
    assert_eq!(err.exit_code(), 1);
}
