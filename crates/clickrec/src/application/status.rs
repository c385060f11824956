//! Status model and the `StatusSurface` port.
//!
//! The UI is an external collaborator. The controller tells it what to show
//! through [`StatusSurface`]; the surface decides how (console line, label
//! colour, message box). All calls come from the controller context.

use clickrec_core::RecordedPoint;

/// Message shown when playback is requested with nothing recorded.
pub const NO_POSITIONS_MESSAGE: &str = "No positions recorded!";

/// Visual emphasis for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    /// Clicks are being captured; graphical surfaces show this in red.
    Recording,
    Playing,
    Error,
}

/// Everything the status line can say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Initial state after start-up.
    Ready,
    /// A recording is in progress with `clicks` points captured so far.
    Recording { clicks: usize },
    RecordingStopped,
    Playing,
    PlaybackComplete,
    PlaybackCancelled,
    PlaybackFailed,
}

impl Status {
    /// The text shown to the user.
    pub fn text(&self) -> String {
        match self {
            Status::Ready => {
                "Press SPACE to start recording, C to play recording, ESC to cancel".to_string()
            }
            Status::Recording { clicks: 0 } => "Recording... Press SPACE to stop".to_string(),
            Status::Recording { clicks } => format!("Recording... Clicks recorded: {clicks}"),
            Status::RecordingStopped => {
                "Recording stopped. Press SPACE to start new recording, C to play".to_string()
            }
            Status::Playing => "Playing back recording... (ESC to cancel)".to_string(),
            Status::PlaybackComplete => {
                "Playback complete. Press SPACE to start new recording, C to play".to_string()
            }
            Status::PlaybackCancelled => {
                "Playback cancelled. Press SPACE to start new recording, C to play".to_string()
            }
            Status::PlaybackFailed => {
                "Playback failed. Press SPACE to start new recording, C to play".to_string()
            }
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            Status::Recording { .. } => StatusTone::Recording,
            Status::Playing => StatusTone::Playing,
            Status::PlaybackFailed => StatusTone::Error,
            _ => StatusTone::Normal,
        }
    }

    /// Returns `true` for the three statuses that end a playback.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Status::PlaybackComplete | Status::PlaybackCancelled | Status::PlaybackFailed
        )
    }
}

/// Formats one entry of the recorded-points list, e.g. `Click 2: X=50, Y=80`.
pub fn point_label(index: usize, point: RecordedPoint) -> String {
    format!("Click {index}: {point}")
}

/// Port through which the controller drives the user interface.
///
/// Implementations must not block for long: the controller handles every
/// input event on the same context that calls these methods.
pub trait StatusSurface: Send + Sync {
    /// Replaces the status line.
    fn render_status(&self, status: &Status);

    /// Shows a notification the user must acknowledge.
    fn show_message(&self, message: &str);

    /// Enables or disables user interaction with the window (disabled while playing).
    fn set_interactive(&self, interactive: bool);

    /// Shows or hides the "recording" pointer indicator.
    fn set_recording_indicator(&self, active: bool);

    /// Empties the list of recorded points.
    fn clear_points(&self);

    /// Appends a recorded point to the list; `index` is 1-based.
    fn push_point(&self, index: usize, point: RecordedPoint);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
