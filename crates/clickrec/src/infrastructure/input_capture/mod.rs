//! Input capture infrastructure.
//!
//! On Windows, this installs low-level keyboard and mouse hooks (WH_KEYBOARD_LL,
//! WH_MOUSE_LL) on a dedicated Win32 message loop thread. Decoded events are
//! placed on an unbounded channel and consumed by the controller task.
//!
//! # Windows-Specific Implementation
//!
//! The hook callbacks run synchronously on the OS input path for every event
//! on the desktop and must return quickly, or Windows silently removes the
//! hook. They therefore only decode the event, post it, and hand the event to
//! the next hook. Events are never suppressed.
//!
//! # Testability
//!
//! The `InputSource` trait allows unit tests to inject synthetic events without
//! requiring Windows hooks.

use tokio::sync::mpsc::UnboundedReceiver;

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// A decoded input event produced by the input capture infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInputEvent {
    /// A key was pressed down.
    KeyDown {
        /// Windows Virtual Key code.
        vk_code: u8,
        /// Milliseconds since system start (from the hook struct).
        time_ms: u32,
    },
    /// The left mouse button was pressed.
    LeftButtonDown {
        /// Absolute X in virtual screen coordinates (multi-monitor aware).
        x: i32,
        /// Absolute Y in virtual screen coordinates.
        y: i32,
        time_ms: u32,
    },
}

/// Error type for input capture operations.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to install keyboard hook: {0}")]
    KeyboardHookInstallFailed(String),
    #[error("failed to install mouse hook: {0}")]
    MouseHookInstallFailed(String),
    #[error("capture service is already running")]
    AlreadyRunning,
    #[error("hook thread error: {0}")]
    HookThread(String),
    #[error("platform not supported: {0}")]
    UnsupportedPlatform(String),
}

/// Trait abstracting the global input event stream.
///
/// The production implementation uses Windows hooks; tests use [`mock::MockInputSource`].
pub trait InputSource: Send + Sync {
    /// Starts the input source and returns a receiver for captured events.
    ///
    /// # Errors
    ///
    /// Returns [`CaptureError`] if the source is already running or the OS
    /// refuses to install a hook.
    fn start(&self) -> Result<UnboundedReceiver<RawInputEvent>, CaptureError>;

    /// Stops the input source and releases all OS resources. The receiver
    /// returned by `start` is closed afterwards. Idempotent.
    fn stop(&self);
}
