//! Terminal preferences for chart and object tables.
//!
//! Resolved once from the global flags and the environment, then read by the
//! table renderers.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Below this the chart columns cannot hold `MM/YYYY` plus one amount cell, so
/// `COLUMNS` is ignored and tables keep their natural width.
const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color cells by the severity of their situation code.
    pub severity_color: bool,
    /// Print the `name (identification)` line above chart tables.
    pub chart_title: bool,
    pub term_width: Option<usize>,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            severity_color: false,
            chart_title: true,
            term_width: None,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Environment facts that feed [`resolve`].
struct Terminal<'a> {
    is_tty: bool,
    no_color: bool,
    columns: Option<&'a str>,
}

fn resolve(flags: &GlobalFlags, terminal: &Terminal<'_>) -> UiPrefs {
    // Severity colors only make sense inside tables; JSON stays byte-clean.
    let severity_color = flags.format == OutputFormat::Table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.is_tty && !terminal.no_color,
        };

    let term_width = terminal
        .columns
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= MIN_TABLE_WIDTH);

    UiPrefs {
        severity_color,
        chart_title: !flags.quiet,
        term_width,
    }
}

pub fn init(flags: &GlobalFlags) {
    let columns = std::env::var("COLUMNS").ok();
    let terminal = Terminal {
        is_tty: std::io::stdout().is_terminal(),
        no_color: std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty()),
        columns: columns.as_deref(),
    };
    let _ = UI_PREFS.set(resolve(flags, &terminal));
}

#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
