//! Console implementation of [`StatusSurface`].
//!
//! Each status change is printed as one line prefixed with a tag for its
//! tone, e.g. `[rec] Recording... Clicks recorded: 2`. Recorded points are
//! listed beneath as they arrive. Messages the user must acknowledge are
//! printed with a `[!]` prefix; a terminal has no modal dialog, so the
//! message only interrupts the flow of status lines.
//!
//! The writer is generic so tests can render into a `Vec<u8>`.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use clickrec_core::RecordedPoint;
use tracing::{debug, warn};

use crate::application::status::{point_label, Status, StatusSurface, StatusTone};

/// Writes status output to any `Write` sink.
pub struct ConsoleStatusSurface<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleStatusSurface<Stdout> {
    /// A surface that writes to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleStatusSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        // A broken terminal must not stop recording or playback.
        if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
            warn!("failed to write status line: {e}");
        }
    }
}

fn tone_tag(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Normal => "ready",
        StatusTone::Recording => "rec",
        StatusTone::Playing => "play",
        StatusTone::Error => "error",
    }
}

impl<W: Write + Send> StatusSurface for ConsoleStatusSurface<W> {
    fn render_status(&self, status: &Status) {
        self.write_line(&format!("[{}] {}", tone_tag(status.tone()), status.text()));
    }

    fn show_message(&self, message: &str) {
        self.write_line(&format!("[!] {message}"));
    }

    fn set_interactive(&self, interactive: bool) {
        debug!(interactive, "surface interactivity changed");
    }

    fn set_recording_indicator(&self, active: bool) {
        debug!(active, "recording indicator changed");
    }

    fn clear_points(&self) {
        debug!("recorded points cleared");
    }

    fn push_point(&self, index: usize, point: RecordedPoint) {
        self.write_line(&format!("    {}", point_label(index, point)));
    }
}
