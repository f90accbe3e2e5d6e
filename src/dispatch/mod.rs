//! Backend dispatch.
//!
//! Turns a parsed [`BuildConfig`] into a backend call, runs it, and hands the
//! child's exit code back unchanged. The flow is
//! `parse -> (help | dispatch -> execute -> success/failure)`; nothing is
//! retried and no step runs twice.

mod invocation;
mod launcher;

pub use invocation::{
    Invocation, SCRIPTS_DIR, Settings, backend_args, default_interpreter, script_path,
};
pub use launcher::{Launcher, ProcessLauncher, exit_code};

use crate::args::{self, ParseOutcome};
use crate::config::{BuildConfig, KNOWN_FRAMEWORKS, is_known_framework};
use crate::error::DispatchError;
use crate::ui;
use std::ffi::OsStr;
use std::io;

/// How a run ended when no error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Usage was requested; nothing was dispatched.
    Help,
    /// The backend ran (or was skipped by a dry run) with this exit code.
    Exited(i32),
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Help => 0,
            RunOutcome::Exited(code) => *code,
        }
    }
}

/// Parse `tokens` and, unless help was requested, dispatch the build.
pub fn run<S: AsRef<OsStr>>(
    tokens: &[S],
    settings: &Settings,
    launcher: &mut impl Launcher,
) -> Result<RunOutcome, DispatchError> {
    match args::parse_args(tokens, &settings.parse)? {
        ParseOutcome::Help => Ok(RunOutcome::Help),
        ParseOutcome::Build(config) => {
            dispatch(&config, settings, launcher).map(RunOutcome::Exited)
        }
    }
}

/// Resolve and run the backend for `config`, returning the child's exit code.
pub fn dispatch(
    config: &BuildConfig,
    settings: &Settings,
    launcher: &mut impl Launcher,
) -> Result<i32, DispatchError> {
    let invocation = Invocation::new(config, settings);

    ui::print_header(config.backend);
    ui::Summary::from_config(config).print();

    if let Some(framework) = &config.framework
        && framework.to_str().is_none_or(|f| !is_known_framework(f))
    {
        ui::warn(&format!(
            "Unknown framework '{}' (known: {}), passing it through",
            framework.to_string_lossy(),
            KNOWN_FRAMEWORKS.join(", ")
        ));
    }

    ui::print_command(&invocation.command_line());

    if config.dry_run {
        ui::warn("Dry run, backend not started");
        return Ok(0);
    }

    if !invocation.script.is_file() {
        return Err(DispatchError::UnresolvedBackendProgram {
            program: invocation.script.clone(),
            source: io::Error::new(io::ErrorKind::NotFound, "backend entry point not found"),
        });
    }

    let code = launcher.launch(&invocation)?;
    if code == 0 {
        ui::print_success(config.backend);
    } else {
        ui::print_failure(code);
    }

    Ok(code)
}
