//! Infrastructure layer for clickrec.
//!
//! Contains OS-facing adapters: the global input hooks, pointer synthesis,
//! the console status surface, and start-up configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `clickrec_core`; the `application` layer only sees the traits these
//! adapters implement (plus the raw event type they produce).
//!
//! # Sub-modules
//!
//! - **`input_capture`** – `WH_KEYBOARD_LL` / `WH_MOUSE_LL` hooks on a
//!   dedicated message-loop thread (Windows), plus a mock source for tests.
//! - **`input_synthesis`** – `SetCursorPos` / `SendInput` implementation of
//!   `InputSynthesizer` (Windows), plus a recording mock.
//! - **`status_surface`** – Console implementation of `StatusSurface`, plus a
//!   recording mock.
//! - **`config`** – Command-line and environment configuration.

pub mod config;
pub mod input_capture;
pub mod input_synthesis;
pub mod status_surface;
