//! clickrec library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does clickrec do?
//!
//! While recording (toggled with Space) every left mouse click anywhere on the
//! desktop is captured by a global low-level hook. Pressing C replays the
//! captured positions: the pointer is moved to each one and clicked, with a
//! configurable pause between steps. Escape cancels a running playback.
//!
//! 1. The **input hook adapter** (`infrastructure::input_capture`) observes
//!    global key-down and left-button-down events and forwards them on a
//!    channel. It never swallows an event.
//! 2. The **controller** (`application::controller`) is the single context that
//!    owns all mutable state. It routes hotkeys and clicks to the recorder and
//!    the playback controller, and keeps the status surface up to date.
//! 3. The **playback controller** (`application::playback`) runs each replay as
//!    a cancellable background task that talks to an `InputSynthesizer`.

/// Application layer: the key-press router, playback, and status model.
pub mod application;

/// Infrastructure layer: OS hooks, input synthesis, status output, and config.
pub mod infrastructure;
