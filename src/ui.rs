//! Terminal output for the dispatcher.
//!
//! Banners and status lines go to stdout with `colored` glyph prefixes
//! (`✓`, `x`, `!`). The configuration summary is a two-column box table
//! that shrinks its value column to fit the terminal.

use crate::config::{Backend, BuildConfig};
use colored::*;
use std::ffi::{OsStr, OsString};

const SYSTEM_NAME: &str = "Python GUI Build System";

/// Width the value column never shrinks below.
const MIN_VALUE_WIDTH: usize = 12;

pub fn print_header(backend: Backend) {
    println!("{} {}", "🐍".cyan(), SYSTEM_NAME.bold());
    println!("{} Backend: {}", "📦".blue(), backend.to_string().bold().green());
}

pub fn print_command(command_line: &str) {
    println!("\n{} Command:\n{}\n", "💻".cyan(), command_line.dimmed());
}

pub fn print_success(backend: Backend) {
    println!(
        "\n{} Build successful! ({} finished)",
        "✓".green(),
        backend.to_string().bold()
    );
}

pub fn print_failure(code: i32) {
    println!(
        "\n{} Build failed with exit code {}",
        "x".red(),
        code.to_string().bold().red()
    );
}

pub fn warn(message: &str) {
    println!("{} {}", "!".yellow(), message);
}

/// Key/value rows describing a build.
pub struct Summary {
    rows: Vec<(&'static str, String)>,
}

impl Summary {
    pub fn from_config(config: &BuildConfig) -> Self {
        let flag = |on: bool| (if on { "yes" } else { "no" }).to_string();
        let optional = |v: &Option<OsString>| {
            v.as_deref().map_or_else(|| "-".to_string(), lossy)
        };

        Self {
            rows: vec![
                ("Backend", config.backend.to_string()),
                ("Entry", lossy(&config.entry_file)),
                ("Name", optional(&config.app_name)),
                ("Icon", optional(&config.icon_path)),
                ("Framework", optional(&config.framework)),
                ("Onefile", flag(config.onefile)),
                ("Clean", flag(config.clean)),
                ("Console", flag(config.console)),
            ],
        }
    }

    pub fn render(&self, term_width: usize) -> Vec<String> {
        let key_width = self.rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
        let natural = self
            .rows
            .iter()
            .map(|(_, v)| sanitize(v).chars().count())
            .max()
            .unwrap_or(0);

        // indent, borders and cell padding
        let overhead = 10 + key_width;
        let value_width = natural.min(term_width.saturating_sub(overhead).max(MIN_VALUE_WIDTH));

        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "  {}{}{}{}{}",
                left,
                "─".repeat(key_width + 2),
                mid,
                "─".repeat(value_width + 2),
                right
            )
        };

        let mut lines = vec![rule("┌", "┬", "┐")];
        for (key, value) in &self.rows {
            let value = sanitize(value);
            let shown = console::truncate_str(&value, value_width, "...");
            let padding = value_width.saturating_sub(console::measure_text_width(&shown));
            lines.push(format!(
                "  │ {:<kw$} │ {}{} │",
                key,
                shown,
                " ".repeat(padding),
                kw = key_width
            ));
        }
        lines.push(rule("└", "┴", "┘"));
        lines
    }

    pub fn print(&self) {
        let (_rows, cols) = console::Term::stdout().size();
        for line in self.render(cols as usize) {
            println!("{}", line);
        }
    }
}

fn lossy(s: &OsStr) -> String {
    s.to_string_lossy().into_owned()
}

fn sanitize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            _ => c,
        })
        .collect()
}
