//! Application layer use cases for clickrec.
//!
//! Use cases in this layer orchestrate the `clickrec_core` domain types and
//! depend only on traits (`InputSynthesizer`, `StatusSurface`), so every
//! transition can be exercised in tests without touching the real desktop.
//!
//! # Sub-modules
//!
//! - **`controller`** – The key-press router and the event loop that owns all
//!   mutable state. Every hook event and every playback report is handled
//!   here, one at a time, in delivery order.
//!
//! - **`playback`** – Starts, cancels, and runs the background playback task.
//!
//! - **`status`** – The status model rendered by the UI and the
//!   `StatusSurface` trait the UI implements.

pub mod controller;
pub mod playback;
pub mod status;
