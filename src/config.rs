use std::ffi::OsString;
use std::fmt;

/// Packaging backend that performs the actual build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Nuitka: compiles the application to C and links a native binary.
    #[default]
    Compiler,
    /// PyInstaller: freezes the interpreter and bytecode into a bundle.
    Freeze,
}

impl Backend {
    /// Parse a backend selector token (`nuitka` or `pyinstaller`).
    pub fn from_selector(token: &str) -> Option<Self> {
        match token {
            "nuitka" => Some(Backend::Compiler),
            "pyinstaller" => Some(Backend::Freeze),
            _ => None,
        }
    }

    pub fn selector(&self) -> &'static str {
        match self {
            Backend::Compiler => "nuitka",
            Backend::Freeze => "pyinstaller",
        }
    }

    /// Backend entry point, relative to the install directory.
    pub fn script(&self) -> &'static str {
        match self {
            Backend::Compiler => "build_nuitka.py",
            Backend::Freeze => "build_pyinstaller.py",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

/// GUI frameworks the backends know plugin sets for.
pub const KNOWN_FRAMEWORKS: &[&str] = &[
    "pyside6", "pyqt6", "pyqt5", "qt", "ctk", "tkinter", "flet",
];

pub fn is_known_framework(name: &str) -> bool {
    KNOWN_FRAMEWORKS.contains(&name.to_lowercase().as_str())
}

/// Parameters for a single build, filled in by one pass over the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub backend: Backend,
    pub entry_file: OsString,
    pub app_name: Option<OsString>,
    pub icon_path: Option<OsString>,
    pub onefile: bool,
    pub clean: bool,
    pub console: bool,
    pub framework: Option<OsString>,
    pub dry_run: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            entry_file: default_entry_file(),
            app_name: None,
            icon_path: None,
            onefile: false,
            clean: false,
            console: false,
            framework: None,
            dry_run: false,
        }
    }
}

fn default_entry_file() -> OsString {
    OsString::from("main.py")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BuildConfig::default();
        assert_eq!(config.backend, Backend::Compiler);
        assert_eq!(config.entry_file, "main.py");
        assert!(config.app_name.is_none());
        assert!(config.icon_path.is_none());
        assert!(!config.onefile && !config.clean && !config.console && !config.dry_run);
    }

    #[test]
    fn test_selector_roundtrip() {
        for backend in [Backend::Compiler, Backend::Freeze] {
            assert_eq!(Backend::from_selector(backend.selector()), Some(backend));
        }
        assert_eq!(Backend::from_selector("Nuitka"), None);
    }

    #[test]
    fn test_known_frameworks_case_insensitive() {
        assert!(is_known_framework("PySide6"));
        assert!(is_known_framework("ctk"));
        assert!(!is_known_framework("wx"));
    }
}
