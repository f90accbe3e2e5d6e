use super::invocation::Invocation;
use crate::error::DispatchError;
use std::process::{ExitStatus, Stdio};

/// Runs a resolved backend invocation and reports its exit code.
pub trait Launcher {
    fn launch(&mut self, invocation: &Invocation) -> Result<i32, DispatchError>;
}

/// Spawns the backend as a child process with inherited stdio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<i32, DispatchError> {
        let status = invocation
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| DispatchError::UnresolvedBackendProgram {
                program: invocation.program().to_path_buf(),
                source,
            })?;

        Ok(exit_code(status))
    }
}

/// Exit code of a finished child. Signal deaths map to `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
