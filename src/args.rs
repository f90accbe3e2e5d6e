//! Command-line token parsing.
//!
//! Tokens are read in a single left-to-right pass into a [`BuildConfig`].
//! Value-bearing options take the next token verbatim, even when it looks
//! like another option, so `--name --onefile` names the app `--onefile`.
//! `--help` anywhere in the sequence wins over everything else.
//!
//! Tokens are `OsStr` so paths that are not valid UTF-8 reach the backend
//! untouched. Option names must be UTF-8; anything else is an unknown token.

use crate::config::{Backend, BuildConfig};
use crate::error::DispatchError;
use std::ffi::{OsStr, OsString};

/// Result of parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// `--help` was given; print usage and stop.
    Help,
    Build(BuildConfig),
}

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Skip unrecognized tokens instead of rejecting them.
    pub ignore_unknown_flags: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_unknown_flags: true,
        }
    }
}

pub const HELP_FLAG: &str = "--help";

pub fn parse_args<S: AsRef<OsStr>>(
    tokens: &[S],
    options: &ParseOptions,
) -> Result<ParseOutcome, DispatchError> {
    if tokens.iter().any(|t| t.as_ref() == HELP_FLAG) {
        return Ok(ParseOutcome::Help);
    }

    let mut config = BuildConfig::default();
    let mut iter = tokens.iter().map(AsRef::<OsStr>::as_ref);

    while let Some(raw) = iter.next() {
        let Some(token) = raw.to_str() else {
            if options.ignore_unknown_flags {
                continue;
            }
            return Err(DispatchError::UnknownArgument(
                raw.to_string_lossy().into_owned(),
            ));
        };

        if let Some(backend) = Backend::from_selector(token) {
            config.backend = backend;
            continue;
        }

        match token {
            "--main" => config.entry_file = take_value(token, &mut iter)?,
            "--name" => config.app_name = Some(take_value(token, &mut iter)?),
            "--icon" => config.icon_path = Some(take_value(token, &mut iter)?),
            "--framework" => config.framework = Some(take_value(token, &mut iter)?),
            "--onefile" => config.onefile = true,
            "--clean" => config.clean = true,
            "--console" => config.console = true,
            "--dry-run" => config.dry_run = true,
            _ if options.ignore_unknown_flags => {}
            other => return Err(DispatchError::UnknownArgument(other.to_string())),
        }
    }

    Ok(ParseOutcome::Build(config))
}

fn take_value<'a>(
    flag: &str,
    iter: &mut impl Iterator<Item = &'a OsStr>,
) -> Result<OsString, DispatchError> {
    iter.next()
        .map(OsStr::to_os_string)
        .ok_or_else(|| DispatchError::MissingValue {
            flag: flag.to_string(),
        })
}
