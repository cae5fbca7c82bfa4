//! Logging types.

use std::fmt;
use std::str::FromStr;

/// Log verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Only unrecoverable failures.
    Critical,
    /// Errors.
    Error,
    /// Warnings.
    #[default]
    Warning,
    /// General information.
    Info,
    /// Every path, command and removal.
    Debug,
}

impl Verbosity {
    /// All levels, quietest first.
    pub const ALL: [Verbosity; 5] = [
        Verbosity::Critical,
        Verbosity::Error,
        Verbosity::Warning,
        Verbosity::Info,
        Verbosity::Debug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Critical => "critical",
            Verbosity::Error => "error",
            Verbosity::Warning => "warning",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verbosity::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown verbosity '{}', expected one of critical, error, warning, info, debug",
                    s
                )
            })
    }
}

/// Progress markers written to stdout while tasks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// An input file is about to be planned: `*`
    File,
    /// A conversion step is about to run: `*`
    Step,
    /// Final files are about to be concatenated: ` > `
    Concatenate,
    /// An intermediate file is about to be removed: `-`
    Remove,
    /// A task finished: newline
    TaskEnd,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Marker::File | Marker::Step => "*",
            Marker::Concatenate => " > ",
            Marker::Remove => "-",
            Marker::TaskEnd => "\n",
        }
    }

    /// Render a marker sequence the way it appears on stdout.
    pub fn render(markers: &[Marker]) -> String {
        markers.iter().map(Marker::as_str).collect()
    }
}

/// Callback receiving every marker as it is emitted.
pub type MarkerCallback = Box<dyn Fn(Marker) + Send + Sync>;
