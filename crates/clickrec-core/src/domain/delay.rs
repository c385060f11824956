//! Per-step playback delay.
//!
//! Each playback step is split evenly into a "move" phase and a "click"
//! phase, so the pointer rests on the target for `delay / 2` before the click
//! and the click settles for another `delay / 2` before the next move.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Error returned when a delay lies outside [`DelayMs::MIN`]..=[`DelayMs::MAX`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("delay {value} ms is out of range ({min}..={max} ms)")]
pub struct DelayError {
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

/// A playback delay in milliseconds, guaranteed to be within bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DelayMs(u32);

impl DelayMs {
    pub const MIN: u32 = 100;
    pub const MAX: u32 = 5000;
    pub const DEFAULT: u32 = 500;

    /// Validates `millis` against the allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError`] if `millis` is below [`Self::MIN`] or above [`Self::MAX`].
    pub fn new(millis: u32) -> Result<Self, DelayError> {
        if (Self::MIN..=Self::MAX).contains(&millis) {
            Ok(Self(millis))
        } else {
            Err(DelayError {
                value: millis,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Duration of one phase (move or click) of a playback step.
    ///
    /// Odd delays lose the remaining millisecond, matching integer division.
    pub fn half(self) -> Duration {
        Duration::from_millis(u64::from(self.0 / 2))
    }
}

impl Default for DelayMs {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for DelayMs {
    type Error = DelayError;

    fn try_from(millis: u32) -> Result<Self, Self::Error> {
        Self::new(millis)
    }
}

impl fmt::Display for DelayMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ms", self.0)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
