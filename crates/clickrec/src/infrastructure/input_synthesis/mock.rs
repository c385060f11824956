//! Mock pointer synthesizer for unit and integration testing.
//!
//! The real synthesizer moves the cursor and clicks on the test machine,
//! which is neither observable from a test nor acceptable on a developer
//! desktop. `MockInputSynthesizer` records every call in order instead.
//!
//! # Usage in tests
//!
//! ```ignore
//! let synth = Arc::new(MockInputSynthesizer::new());
//! let mut playback = PlaybackController::new(synth.clone(), reports_tx);
//! playback.start(points, delay)?;
//!
//! // ... wait for the report ...
//! assert_eq!(synth.events()[0], SynthesizedInput::MoveTo { x: 10, y: 10 });
//! ```
//!
//! Set `fail_moves` or `fail_clicks` to exercise the failure path.

use std::sync::Mutex;

use crate::application::playback::{InputSynthesizer, SynthesisError};

/// One call observed by [`MockInputSynthesizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesizedInput {
    MoveTo { x: i32, y: i32 },
    LeftClick,
}

/// A synthesizer that records calls without touching the OS.
#[derive(Default)]
pub struct MockInputSynthesizer {
    /// Every successful call, in order.
    pub events: Mutex<Vec<SynthesizedInput>>,
    /// When `true`, `move_pointer` returns `SynthesisError::Platform`.
    pub fail_moves: bool,
    /// When `true`, `click_left` returns `SynthesisError::Platform`.
    pub fail_clicks: bool,
}

impl MockInputSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A synthesizer whose clicks always fail.
    pub fn failing_clicks() -> Self {
        Self {
            fail_clicks: true,
            ..Self::default()
        }
    }

    /// Snapshot of the recorded calls.
    pub fn events(&self) -> Vec<SynthesizedInput> {
        self.events.lock().expect("lock poisoned").clone()
    }

    pub fn clicks(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SynthesizedInput::LeftClick))
            .count()
    }

    pub fn moves(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, SynthesizedInput::MoveTo { .. }))
            .count()
    }
}

impl InputSynthesizer for MockInputSynthesizer {
    fn move_pointer(&self, x: i32, y: i32) -> Result<(), SynthesisError> {
        if self.fail_moves {
            return Err(SynthesisError::Platform("mock failure".to_string()));
        }
        self.events
            .lock()
            .expect("lock poisoned")
            .push(SynthesizedInput::MoveTo { x, y });
        Ok(())
    }

    fn click_left(&self) -> Result<(), SynthesisError> {
        if self.fail_clicks {
            return Err(SynthesisError::Platform("mock failure".to_string()));
        }
        self.events
            .lock()
            .expect("lock poisoned")
            .push(SynthesizedInput::LeftClick);
        Ok(())
    }
}
