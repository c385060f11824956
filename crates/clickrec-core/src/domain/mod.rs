//! Domain entities for clickrec.
//!
//! This module contains pure business logic with no infrastructure dependencies.
//! The application layer of the `clickrec` crate drives these types from a
//! single execution context, so none of them need interior mutability or
//! synchronisation.

/// Recorded points, the recorder state machine, and playback state.
pub mod recording;

/// The bounded per-step playback delay.
pub mod delay;
