//! Prefixed log lines
//!
//! Every line starts with the tool identifier so output stays attributable
//! when a bundler plugin pipes it into its own console. Lines go to stdout:
//! the plugin waits for the word `generated` there before resolving.
//!
//! ```ignore
//! info!("watching {} paths", n);
//! debug!("go list finished in {:?}", elapsed);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

/// Tool identifier printed in front of every line
pub const PREFIX: &str = "[go-wasm-pack]";

static VERBOSE: AtomicBool = AtomicBool::new(false);
static COLOR: OnceLock<bool> = OnceLock::new();

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }
}

/// Enable `debug` lines
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

fn use_color() -> bool {
    *COLOR.get_or_init(|| std::io::stdout().is_terminal())
}

/// Render one log line without the trailing newline
pub fn format_line(level: Level, message: &str, color: bool) -> String {
    if !color {
        return format!("{} {} {}", PREFIX, level.tag(), message);
    }

    let tag = match level {
        Level::Debug => level.tag().dark_grey(),
        Level::Info => level.tag().cyan(),
        Level::Warn => level.tag().yellow(),
        Level::Error => level.tag().red(),
    };
    format!("{} {} {}", PREFIX.dark_grey(), tag, message)
}

/// Write a line at `level`
pub fn log(level: Level, message: &str) {
    if level == Level::Debug && !is_verbose() {
        return;
    }
    let line = format_line(level, message, use_color());
    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "{}", line);
    let _ = stdout.flush();
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {{
        $crate::logger::log($crate::logger::Level::Info, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {{
        $crate::logger::log($crate::logger::Level::Warn, &format!($($arg)*))
    }};
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {{
        $crate::logger::log($crate::logger::Level::Error, &format!($($arg)*))
    }};
}

/// Only printed with `--verbose`
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($crate::logger::Level::Debug, &format!($($arg)*))
        }
    }};
}
