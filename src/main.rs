//! # guibuild CLI Entry Point
//!
//! The `guibuild` executable. clap collects the raw argument vector and renders
//! usage; the tokens themselves go through the library's permissive parser so
//! unknown options are skipped instead of rejected.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::*;
use std::ffi::OsString;

use guibuild::config::KNOWN_FRAMEWORKS;
use guibuild::{ProcessLauncher, RunOutcome, Settings};

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
    fn SetConsoleCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
        SetConsoleCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

const OPTIONS_HELP: &str = "\
Backends:
  nuitka             Compile to a native executable (default)
  pyinstaller        Freeze into a bundled executable

Options:
  --main FILE        Entry point file [default: main.py]
  --name NAME        Application name
  --icon FILE        Icon file (.ico on Windows, .icns on macOS)
  --onefile          Produce a single executable
  --clean            Remove previous build artifacts first
  --console          Keep a console window for the app
  --framework NAME   GUI framework hint for the backend
  --dry-run          Print the backend command without running it
  --help             Show this message

Unrecognized arguments are ignored.";

#[derive(Parser)]
#[command(name = "guibuild")]
#[command(about = "Package a Python GUI application with Nuitka or PyInstaller")]
#[command(
    override_usage = "guibuild <nuitka|pyinstaller> [--main FILE] [--name NAME] [--icon FILE] [--onefile] [--clean] [--help]"
)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Backend selector and options
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString),
        hide = true
    )]
    tokens: Vec<OsString>,
}

fn print_usage() {
    let mut cmd = Cli::command().after_help(format!(
        "{}\n\nKnown frameworks: {}",
        OPTIONS_HELP,
        KNOWN_FRAMEWORKS.join(", ")
    ));
    println!("{}", cmd.render_help());
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    let settings =
        Settings::from_current_exe().context("Failed to locate the guibuild executable")?;

    match guibuild::run(cli.tokens.as_slice(), &settings, &mut ProcessLauncher) {
        Ok(RunOutcome::Help) => {
            print_usage();
            Ok(())
        }
        Ok(RunOutcome::Exited(0)) => Ok(()),
        Ok(RunOutcome::Exited(code)) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "x".red(), e);
            std::process::exit(e.exit_code());
        }
    }
}
