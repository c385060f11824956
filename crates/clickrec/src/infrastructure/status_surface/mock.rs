//! Recording status surface for tests.
//!
//! Every call is appended to `calls` so tests can assert the exact sequence
//! of UI updates the controller produced.

use std::sync::Mutex;

use clickrec_core::RecordedPoint;

use crate::application::status::{Status, StatusSurface};

/// One call observed by [`MockStatusSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Status(Status),
    Message(String),
    Interactive(bool),
    RecordingIndicator(bool),
    ClearPoints,
    Point(usize, RecordedPoint),
}

#[derive(Default)]
pub struct MockStatusSurface {
    pub calls: Mutex<Vec<SurfaceCall>>,
}

impl MockStatusSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }

    /// Only the rendered statuses, in order.
    pub fn statuses(&self) -> Vec<Status> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::Status(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                SurfaceCall::Message(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<Status> {
        self.statuses().pop()
    }

    /// Number of playback-ending statuses rendered so far.
    pub fn terminal_status_count(&self) -> usize {
        self.statuses().iter().filter(|s| s.is_terminal()).count()
    }

    fn push(&self, call: SurfaceCall) {
        self.calls.lock().expect("lock poisoned").push(call);
    }
}

impl StatusSurface for MockStatusSurface {
    fn render_status(&self, status: &Status) {
        self.push(SurfaceCall::Status(status.clone()));
    }

    fn show_message(&self, message: &str) {
        self.push(SurfaceCall::Message(message.to_string()));
    }

    fn set_interactive(&self, interactive: bool) {
        self.push(SurfaceCall::Interactive(interactive));
    }

    fn set_recording_indicator(&self, active: bool) {
        self.push(SurfaceCall::RecordingIndicator(active));
    }

    fn clear_points(&self) {
        self.push(SurfaceCall::ClearPoints);
    }

    fn push_point(&self, index: usize, point: RecordedPoint) {
        self.push(SurfaceCall::Point(index, point));
    }
}
