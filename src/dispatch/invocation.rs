use crate::args::ParseOptions;
use crate::config::{Backend, BuildConfig};
use std::borrow::Cow;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Directory holding the backend entry points, relative to the install dir.
pub const SCRIPTS_DIR: &str = "scripts";

/// Runtime settings that are not part of the per-build options.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory backend entry points are resolved against.
    pub install_dir: PathBuf,
    /// Interpreter used to run the entry point. `None` executes it directly.
    pub interpreter: Option<PathBuf>,
    pub parse: ParseOptions,
}

impl Settings {
    pub fn new(install_dir: impl Into<PathBuf>) -> Self {
        Self {
            install_dir: install_dir.into(),
            interpreter: Some(default_interpreter()),
            parse: ParseOptions::default(),
        }
    }

    /// Settings rooted at the directory of the running executable.
    pub fn from_current_exe() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("executable has no parent directory: {}", exe.display()),
            )
        })?;
        Ok(Self::new(dir))
    }
}

pub fn default_interpreter() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("python")
    } else {
        PathBuf::from("python3")
    }
}

/// A fully resolved backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub backend: Backend,
    pub interpreter: Option<PathBuf>,
    pub script: PathBuf,
    backend_args: Vec<OsString>,
}

impl Invocation {
    pub fn new(config: &BuildConfig, settings: &Settings) -> Self {
        Self {
            backend: config.backend,
            interpreter: settings.interpreter.clone(),
            script: script_path(&settings.install_dir, config.backend),
            backend_args: backend_args(config),
        }
    }

    /// Arguments handed to the backend, in canonical order.
    pub fn backend_args(&self) -> &[OsString] {
        &self.backend_args
    }

    /// The program actually spawned.
    pub fn program(&self) -> &Path {
        self.interpreter.as_deref().unwrap_or(&self.script)
    }

    pub fn program_args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.backend_args.len() + 1);
        if self.interpreter.is_some() {
            args.push(self.script.clone().into_os_string());
        }
        args.extend(self.backend_args.iter().cloned());
        args
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(self.program());
        cmd.args(self.program_args());
        cmd
    }

    /// Printable form of the command. Not meant to be fed back to a shell.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program().to_string_lossy()).into_owned()];
        for arg in self.program_args() {
            parts.push(quote(&arg.to_string_lossy()).into_owned());
        }
        parts.join(" ")
    }
}

pub fn script_path(install_dir: &Path, backend: Backend) -> PathBuf {
    install_dir.join(SCRIPTS_DIR).join(backend.script())
}

/// Backend argument list. Unset options are left out entirely.
pub fn backend_args(config: &BuildConfig) -> Vec<OsString> {
    let mut args = vec![OsString::from("--main"), config.entry_file.clone()];

    if let Some(name) = &config.app_name {
        args.push("--name".into());
        args.push(name.clone());
    }
    if let Some(icon) = &config.icon_path {
        args.push("--icon".into());
        args.push(icon.clone());
    }
    if config.onefile {
        args.push("--onefile".into());
    }
    if config.clean {
        args.push("--clean".into());
    }
    if config.console {
        args.push("--console".into());
    }
    if let Some(framework) = &config.framework {
        args.push("--framework".into());
        args.push(framework.clone());
    }

    args
}

/// Wrap in double quotes when the argument is empty or holds whitespace or
/// quotes; inner quotes are backslash-escaped.
fn quote(arg: &str) -> Cow<'_, str> {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"') {
        Cow::Owned(format!("\"{}\"", arg.replace('"', "\\\"")))
    } else {
        Cow::Borrowed(arg)
    }
}
