//! Colored terminal output utilities.
//!
//! Everything goes to stderr; stdout is reserved for the JSON manifest so it
//! can be piped into the renderer.

use std::fmt::Display;

use console::{Style, Term};
use shelf_nav::TreeStats;

/// Width of the name column in `name: value` rows.
const FIELD_WIDTH: usize = 9;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    red: Style,
    dim: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            red: Style::new().red(),
            dim: Style::new().dim(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print a `name: value` row with a dimmed, aligned name.
    pub(crate) fn field(&self, name: &str, value: impl Display) {
        let name = self.dim.apply_to(pad_name(name));
        let _ = self.term.write_line(&format!("{name} {value}"));
    }

    /// Print the site title (cyan bold).
    pub(crate) fn title(&self, title: &str) {
        let _ = self
            .term
            .write_line(&self.cyan_bold.apply_to(title).to_string());
    }

    /// Print the shape of a resolved sidebar.
    pub(crate) fn stats(&self, stats: &TreeStats) {
        for (name, value) in stats_rows(stats) {
            self.field(name, value);
        }
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

fn pad_name(name: &str) -> String {
    format!("{:<FIELD_WIDTH$}", format!("{name}:"))
}

fn stats_rows(stats: &TreeStats) -> [(&'static str, usize); 3] {
    [
        ("Sections", stats.sections),
        ("Links", stats.links),
        ("Depth", stats.depth),
    ]
}
