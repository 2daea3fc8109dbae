//! Console styles for the jetkit CLI.
//!
//! Output stays plain where it may be piped (file lists, edge values); the
//! styles below cover the human-facing summaries and errors. All styles are
//! registered once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;

/// Error prefix on stderr.
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());

/// Secondary information (counts, field labels).
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());

/// Leading values in summaries.
pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
