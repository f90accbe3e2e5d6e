use std::path::PathBuf;

/// Errors raised before or while starting a backend.
///
/// A backend that starts and exits non-zero is not an error here; its exit
/// code is handed back to the caller unchanged.
#[derive(Debug)]
pub enum DispatchError {
    /// A value-bearing flag was the last token.
    MissingValue { flag: String },
    /// Unrecognized token, only raised when unknown flags are not ignored.
    UnknownArgument(String),
    /// The backend entry point is missing or could not be started.
    UnresolvedBackendProgram {
        program: PathBuf,
        source: std::io::Error,
    },
}

impl DispatchError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchError::MissingValue { .. } | DispatchError::UnknownArgument(_) => 2,
            DispatchError::UnresolvedBackendProgram { .. } => 1,
        }
    }
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::MissingValue { flag } => {
                write!(f, "option '{}' requires a value", flag)
            }
            DispatchError::UnknownArgument(token) => {
                write!(f, "unrecognized argument '{}'", token)
            }
            DispatchError::UnresolvedBackendProgram { program, source } => {
                write!(f, "cannot start backend '{}': {}", program.display(), source)
            }
        }
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DispatchError::UnresolvedBackendProgram { source, .. } => Some(source),
            _ => None,
        }
    }
}
