//! Platform-specific pointer synthesis implementations.
//!
//! The correct implementation is selected at compile time via `#[cfg(target_os = ...)]`.
//! Only Windows is supported; other targets get the mock for tests.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;
