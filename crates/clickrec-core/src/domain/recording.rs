//! Recording domain entity.
//!
//! A [`Recorder`] owns the one recording that exists in the process: an
//! ordered list of [`RecordedPoint`]s plus the [`RecordingState`] that decides
//! whether incoming clicks are kept. Insertion order is playback order.
//!
//! Starting a new recording discards the previous one unconditionally; there
//! is no undo.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

/// An absolute screen coordinate captured from a left-button-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordedPoint {
    /// Horizontal screen coordinate (virtual screen space, may be negative).
    pub x: i32,
    /// Vertical screen coordinate (virtual screen space, may be negative).
    pub y: i32,
}

impl RecordedPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for RecordedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X={}, Y={}", self.x, self.y)
    }
}

/// Whether clicks are currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// Whether a playback task is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
}

/// The recording state machine.
///
/// # Invariants
///
/// - Points are appended only while the state is [`RecordingState::Recording`].
/// - [`Recorder::start_new`] always leaves the recording empty.
/// - Once the state returns to [`RecordingState::Idle`] the recording is
///   read-only until the next [`Recorder::start_new`].
#[derive(Debug, Default)]
pub struct Recorder {
    points: Vec<RecordedPoint>,
    state: RecordingState,
}

impl Recorder {
    /// Creates an idle recorder with an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current recording state.
    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Returns `true` while clicks are being captured.
    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    /// Discards the previous recording and starts capturing clicks.
    pub fn start_new(&mut self) {
        let discarded = self.points.len();
        self.points.clear();
        self.state = RecordingState::Recording;
        debug!(discarded, "recording started");
    }

    /// Stops capturing clicks.
    ///
    /// Returns `false` (and changes nothing) if no recording was in progress.
    pub fn stop(&mut self) -> bool {
        if self.state != RecordingState::Recording {
            return false;
        }
        self.state = RecordingState::Idle;
        debug!(points = self.points.len(), "recording stopped");
        true
    }

    /// Appends `point` if a recording is in progress.
    ///
    /// Returns the 1-based position of the new point, or `None` when the
    /// recorder is idle and the click was ignored.
    pub fn record(&mut self, point: RecordedPoint) -> Option<usize> {
        if self.state != RecordingState::Recording {
            return None;
        }
        self.points.push(point);
        Some(self.points.len())
    }

    /// Returns the recorded points in capture order.
    pub fn points(&self) -> &[RecordedPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an immutable copy of the recording for a playback task.
    ///
    /// The snapshot is independent of later mutations, so a playback never
    /// observes a recording that is being rebuilt.
    pub fn snapshot(&self) -> Arc<[RecordedPoint]> {
        Arc::from(self.points.as_slice())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recorder_is_idle_and_empty() {
        let recorder = Recorder::new();
        assert_eq!(recorder.state(), RecordingState::Idle);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_record_while_idle_is_ignored() {
        // Arrange
        let mut recorder = Recorder::new();

        // Act
        let result = recorder.record(RecordedPoint::new(5, 5));

        // Assert
        assert_eq!(result, None);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_record_while_recording_returns_one_based_position() {
        // Arrange
        let mut recorder = Recorder::new();
        recorder.start_new();

        // Act
        let first = recorder.record(RecordedPoint::new(1, 2));
        let second = recorder.record(RecordedPoint::new(3, 4));

        // Assert
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
        assert_eq!(
            recorder.points(),
            &[RecordedPoint::new(1, 2), RecordedPoint::new(3, 4)]
        );
    }

    #[test]
    fn test_start_new_discards_previous_recording() {
        // Arrange
        let mut recorder = Recorder::new();
        recorder.start_new();
        recorder.record(RecordedPoint::new(10, 10));
        recorder.stop();

        // Act
        recorder.start_new();

        // Assert
        assert!(recorder.is_empty());
        assert!(recorder.is_recording());
    }

    #[test]
    fn test_stop_when_idle_returns_false() {
        let mut recorder = Recorder::new();
        assert!(!recorder.stop());
    }

    #[test]
    fn test_recording_is_frozen_after_stop() {
        // Arrange
        let mut recorder = Recorder::new();
        recorder.start_new();
        recorder.record(RecordedPoint::new(7, 8));

        // Act
        assert!(recorder.stop());
        let ignored = recorder.record(RecordedPoint::new(9, 9));

        // Assert
        assert_eq!(ignored, None);
        assert_eq!(recorder.len(), 1);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_recordings() {
        // Arrange
        let mut recorder = Recorder::new();
        recorder.start_new();
        recorder.record(RecordedPoint::new(1, 1));
        recorder.stop();
        let snapshot = recorder.snapshot();

        // Act – start over and record something else
        recorder.start_new();
        recorder.record(RecordedPoint::new(2, 2));

        // Assert
        assert_eq!(&*snapshot, &[RecordedPoint::new(1, 1)]);
    }

    #[test]
    fn test_negative_coordinates_are_kept() {
        // Monitors left of / above the primary display have negative coordinates.
        let mut recorder = Recorder::new();
        recorder.start_new();
        recorder.record(RecordedPoint::new(-1920, -40));
        assert_eq!(recorder.points()[0], RecordedPoint::new(-1920, -40));
    }

    #[test]
    fn test_point_display_format() {
        assert_eq!(RecordedPoint::new(50, 80).to_string(), "X=50, Y=80");
    }
}
