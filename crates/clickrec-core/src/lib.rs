//! # clickrec-core
//!
//! Platform-independent heart of clickrec: the recording state machine, the
//! bounded playback delay, and the hotkey table that maps Windows virtual key
//! codes to the three commands the tool understands.
//!
//! This crate has zero dependencies on OS APIs, async runtimes, or UI code.
//! Everything here can be unit-tested on any platform.
//!
//! # Architecture overview
//!
//! clickrec records the screen positions of left mouse clicks while recording
//! is active and later replays them: for each recorded point it moves the
//! pointer there, waits half the configured delay, clicks, and waits the other
//! half.
//!
//! - **`domain`** – `RecordedPoint`, the `Recorder` (recording + on/off state),
//!   the playback state enum, and `DelayMs`.
//! - **`keymap`** – decoding of virtual key codes into [`Hotkey`] commands.

pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `clickrec_core::Recorder` instead of `clickrec_core::domain::recording::Recorder`.
pub use domain::delay::{DelayError, DelayMs};
pub use domain::recording::{PlaybackState, RecordedPoint, Recorder, RecordingState};
pub use keymap::Hotkey;
