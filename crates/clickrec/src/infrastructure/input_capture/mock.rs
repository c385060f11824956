//! Mock input source for unit testing.
//!
//! Allows tests to inject synthetic [`RawInputEvent`]s without requiring
//! a running Windows message loop or OS hooks.

use std::sync::Mutex;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{CaptureError, InputSource, RawInputEvent};

/// A mock implementation of [`InputSource`] that allows tests to inject events.
#[derive(Default)]
pub struct MockInputSource {
    sender: Mutex<Option<UnboundedSender<RawInputEvent>>>,
}

impl MockInputSource {
    /// Creates a new, stopped mock input source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Injects a synthetic event, as if captured from hardware.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been called.
    pub fn inject_event(&self, event: RawInputEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        match guard.as_ref() {
            Some(sender) => sender
                .send(event)
                .expect("receiver has been dropped; keep the receiver from start()"),
            None => panic!("MockInputSource::inject_event called before start()"),
        }
    }

    /// Injects a key-down event for `vk_code`.
    pub fn press_key(&self, vk_code: u8) {
        self.inject_event(RawInputEvent::KeyDown { vk_code, time_ms: 0 });
    }

    /// Injects a left-button-down event at (`x`, `y`).
    pub fn click(&self, x: i32, y: i32) {
        self.inject_event(RawInputEvent::LeftButtonDown { x, y, time_ms: 0 });
    }

    /// Returns `true` between `start()` and `stop()`.
    pub fn is_running(&self) -> bool {
        self.sender.lock().expect("lock poisoned").is_some()
    }
}

impl InputSource for MockInputSource {
    fn start(&self) -> Result<UnboundedReceiver<RawInputEvent>, CaptureError> {
        let mut guard = self.sender.lock().expect("lock poisoned");
        if guard.is_some() {
            return Err(CaptureError::AlreadyRunning);
        }
        let (tx, rx) = mpsc::unbounded_channel();
        *guard = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}
