//! # guibuild - Build dispatcher for Python GUI apps
//!
//! One `guibuild` command that packages a Python GUI application into a
//! standalone executable with either Nuitka or PyInstaller. Both backends
//! receive the same small option set, so switching between them is a matter
//! of changing one word on the command line.
//!
//! ## Quick Start
//!
//! ```bash
//! # Nuitka (default), single-file output
//! guibuild nuitka --name MyApp --icon app.ico --onefile
//!
//! # PyInstaller with a different entry point
//! guibuild pyinstaller --main src/app.py --clean
//! ```
//!
//! ## Module Organization
//!
//! - [`args`] - Permissive command-line token parser
//! - [`config`] - Build parameters and backend selection
//! - [`dispatch`] - Backend resolution and child process execution
//! - [`error`] - Dispatch error type and exit codes
//! - [`ui`] - Banners and configuration summary

/// Command-line token parsing.
pub mod args;

/// Build parameters (`BuildConfig`) and backend identifiers.
pub mod config;

/// Backend resolution and execution.
pub mod dispatch;

/// Error type shared by parsing and dispatch.
pub mod error;

/// Terminal output.
pub mod ui;

pub use args::{ParseOptions, ParseOutcome, parse_args};
pub use config::{Backend, BuildConfig};
pub use dispatch::{Invocation, Launcher, ProcessLauncher, RunOutcome, Settings, dispatch, run};
pub use error::DispatchError;
