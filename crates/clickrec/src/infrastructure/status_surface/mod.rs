//! Status surface adapters.
//!
//! [`console::ConsoleStatusSurface`] writes status lines and recorded points
//! to a terminal. [`mock::MockStatusSurface`] records calls for tests.

pub mod console;
pub mod mock;
