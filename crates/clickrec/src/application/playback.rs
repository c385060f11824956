//! Playback: replays a recording by synthesizing pointer moves and clicks.
//!
//! [`PlaybackController`] owns the "is playing" state and the cancellation
//! token of the active playback. [`PlaybackController::start`] spawns a Tokio
//! task that walks the recorded points in order; for each point it
//!
//! 1. checks for cancellation,
//! 2. moves the pointer and waits `delay / 2`,
//! 3. checks for cancellation again,
//! 4. clicks at the current pointer position and waits `delay / 2`.
//!
//! Both waits end early when cancellation is requested. The task never touches
//! controller state: it sends exactly one [`PlaybackReport`] back over a
//! channel when it ends, whether it completed, was cancelled, failed, or
//! panicked.

use std::sync::Arc;
use std::time::Duration;

use clickrec_core::{DelayMs, PlaybackState, RecordedPoint};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

/// Error type for input synthesis operations.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("platform error: {0}")]
    Platform(String),
    #[error("input synthesis is not supported on this platform")]
    Unsupported,
}

/// Platform-agnostic pointer synthesis.
///
/// The Windows implementation lives in `infrastructure::input_synthesis`.
pub trait InputSynthesizer: Send + Sync {
    /// Moves the system pointer to an absolute screen position.
    fn move_pointer(&self, x: i32, y: i32) -> Result<(), SynthesisError>;

    /// Presses and releases the left button at the current pointer position.
    fn click_left(&self) -> Result<(), SynthesisError>;
}

/// Reasons a playback request is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    #[error("no positions recorded")]
    EmptyRecording,
    #[error("a playback is already running")]
    AlreadyPlaying,
    #[error("stop the recording before playing it back")]
    RecordingInProgress,
}

/// How a playback ended. Exactly one is reported per started playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Every point was visited; `clicks` equals the recording length.
    Completed { clicks: usize },
    /// Cancellation was observed after `clicks` clicks had been synthesized.
    Cancelled { clicks: usize },
    /// Synthesis failed or the task panicked.
    Failed { message: String },
}

/// Message sent from the playback task to the controller when it ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Identifier returned by [`PlaybackController::start`].
    pub id: u64,
    pub outcome: PlaybackOutcome,
}

struct ActivePlayback {
    id: u64,
    token: CancellationToken,
}

/// Starts and cancels playback tasks.
///
/// Not `Sync`-shared: the controller owns it and calls it from one context.
pub struct PlaybackController {
    synthesizer: Arc<dyn InputSynthesizer>,
    reports: UnboundedSender<PlaybackReport>,
    active: Option<ActivePlayback>,
    next_id: u64,
}

impl PlaybackController {
    /// Creates an idle controller.
    ///
    /// Every playback started through it sends its [`PlaybackReport`] on `reports`.
    pub fn new(
        synthesizer: Arc<dyn InputSynthesizer>,
        reports: UnboundedSender<PlaybackReport>,
    ) -> Self {
        Self {
            synthesizer,
            reports,
            active: None,
            next_id: 1,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.active.is_some() {
            PlaybackState::Playing
        } else {
            PlaybackState::Idle
        }
    }

    pub fn is_playing(&self) -> bool {
        self.active.is_some()
    }

    /// Spawns a playback task over `points`.
    ///
    /// Must be called from within a Tokio runtime. Returns the playback id that
    /// the matching [`PlaybackReport`] will carry.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::AlreadyPlaying`] if a playback is active (nothing changes).
    /// - [`PlaybackError::EmptyRecording`] if `points` is empty.
    pub fn start(
        &mut self,
        points: Arc<[RecordedPoint]>,
        delay: DelayMs,
    ) -> Result<u64, PlaybackError> {
        if self.active.is_some() {
            return Err(PlaybackError::AlreadyPlaying);
        }
        if points.is_empty() {
            return Err(PlaybackError::EmptyRecording);
        }

        let id = self.next_id;
        self.next_id += 1;
        let token = CancellationToken::new();
        info!(id, points = points.len(), %delay, "playback started");

        let worker = {
            let synthesizer = Arc::clone(&self.synthesizer);
            let token = token.clone();
            tokio::spawn(async move {
                run_playback(&points, delay, synthesizer.as_ref(), &token).await
            })
        };

        // The supervisor turns a panic or abort of the worker into a Failed
        // outcome so that exactly one report is always sent.
        let reports = self.reports.clone();
        tokio::spawn(async move {
            let outcome = match worker.await {
                Ok(outcome) => outcome,
                Err(err) => PlaybackOutcome::Failed {
                    message: describe_join_error(err),
                },
            };
            if reports.send(PlaybackReport { id, outcome }).is_err() {
                debug!(id, "playback report dropped: controller has shut down");
            }
        });

        self.active = Some(ActivePlayback { id, token });
        Ok(id)
    }

    /// Requests cancellation of the active playback.
    ///
    /// Does not wait for the task to stop; the task observes the request at
    /// its next checkpoint or during its current wait. Returns `false` when no
    /// playback is active.
    pub fn cancel(&self) -> bool {
        match &self.active {
            Some(active) => {
                info!(id = active.id, "playback cancellation requested");
                active.token.cancel();
                true
            }
            None => false,
        }
    }

    /// Marks the playback named by `report` as finished.
    ///
    /// Returns `false` for a report that does not belong to the active
    /// playback; state is left unchanged in that case.
    pub fn finish(&mut self, report: &PlaybackReport) -> bool {
        match &self.active {
            Some(active) if active.id == report.id => {
                self.active = None;
                true
            }
            _ => {
                warn!(id = report.id, "ignoring report for unknown playback");
                false
            }
        }
    }
}

/// Walks `points` in order, moving and clicking, until done or cancelled.
///
/// This is the body of the playback task; it is public so the timing and
/// cancellation behaviour can be tested without the spawning machinery.
pub async fn run_playback(
    points: &[RecordedPoint],
    delay: DelayMs,
    synthesizer: &dyn InputSynthesizer,
    token: &CancellationToken,
) -> PlaybackOutcome {
    let half = delay.half();
    let mut clicks = 0;

    for (step, point) in points.iter().enumerate() {
        if token.is_cancelled() {
            return PlaybackOutcome::Cancelled { clicks };
        }
        trace!(step, x = point.x, y = point.y, "moving pointer");
        if let Err(err) = synthesizer.move_pointer(point.x, point.y) {
            return PlaybackOutcome::Failed {
                message: err.to_string(),
            };
        }
        if !pause(half, token).await {
            return PlaybackOutcome::Cancelled { clicks };
        }

        if token.is_cancelled() {
            return PlaybackOutcome::Cancelled { clicks };
        }
        if let Err(err) = synthesizer.click_left() {
            return PlaybackOutcome::Failed {
                message: err.to_string(),
            };
        }
        clicks += 1;
        if !pause(half, token).await {
            return PlaybackOutcome::Cancelled { clicks };
        }
    }

    PlaybackOutcome::Completed { clicks }
}

/// Sleeps for `duration`; returns `false` if cancelled first.
async fn pause(duration: Duration, token: &CancellationToken) -> bool {
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(duration) => true,
    }
}

fn describe_join_error(err: JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }
    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        format!("playback task panicked: {msg}")
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        format!("playback task panicked: {msg}")
    } else {
        "playback task panicked".to_string()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
