//! Output helpers shared by CLI subcommands: quiet/JSON gating and status
//! symbols. Global flags live in `SITEKEEPER_*` environment variables set
//! by main, so every module can check them without threading state.

use serde::Serialize;

pub fn is_json() -> bool {
    flag("SITEKEEPER_JSON")
}

pub fn is_quiet() -> bool {
    flag("SITEKEEPER_QUIET")
}

pub fn is_verbose() -> bool {
    flag("SITEKEEPER_VERBOSE")
}

fn no_color() -> bool {
    flag("SITEKEEPER_NO_COLOR") || std::env::var_os("NO_COLOR").is_some()
}

fn flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "1").unwrap_or(false)
}

/// Print a JSON value to stdout.
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("  Error: could not serialize output: {e}"),
    }
}

/// Status symbols, colored unless disabled.
pub struct Styled {
    color: bool,
}

impl Styled {
    pub fn new() -> Self {
        Self { color: !no_color() }
    }

    pub fn ok_sym(&self) -> &'static str {
        if self.color {
            "\x1b[32m✓\x1b[0m"
        } else {
            "OK"
        }
    }

    pub fn warn_sym(&self) -> &'static str {
        if self.color {
            "\x1b[33m!\x1b[0m"
        } else {
            "!"
        }
    }

    pub fn fail_sym(&self) -> &'static str {
        if self.color {
            "\x1b[31m✗\x1b[0m"
        } else {
            "FAIL"
        }
    }
}
