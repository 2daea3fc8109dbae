//! A minimal console spinner for long scans and event loops.
//!
//! The rotation index is process-wide: every call site advances the same
//! four-frame cycle, so interleaved loops keep the cursor turning instead of
//! each restarting it.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

const FRAMES: [char; 4] = ['\\', '|', '/', '-'];

static CURSOR: AtomicUsize = AtomicUsize::new(0);

/// Advance the spinner and draw the next frame to stdout.
///
/// Write failures are ignored; progress display is best effort.
pub fn tick() {
    let _ = tick_to(&mut io::stdout());
}

/// Advance the spinner, drawing to `out`.
///
/// Writes a single ` {frame}\r` with no trailing newline, then flushes, so
/// successive ticks overdraw in place.
pub fn tick_to<W: Write>(out: &mut W) -> io::Result<()> {
    let frame = FRAMES[CURSOR.fetch_add(1, Ordering::Relaxed) % FRAMES.len()];
    write!(out, " {frame}\r")?;
    out.flush()
}
