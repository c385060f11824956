//! ClickController: the state machine driven by global input.
//!
//! The controller owns the [`Recorder`], the [`PlaybackController`] and the
//! status surface. It runs as a single Tokio task ([`ClickController::run`])
//! that serially consumes two streams:
//!
//! - raw input events from the hook thread (key presses and left clicks), and
//! - [`PlaybackReport`]s from the playback task.
//!
//! Because every state change happens on that one task, no locks guard the
//! recording or the playback flags.
//!
//! # Key bindings
//!
//! | Key    | Effect                                                   |
//! |--------|----------------------------------------------------------|
//! | SPACE  | start a new recording, or stop the current one          |
//! | C      | play the recording (ignored while recording or playing) |
//! | ESC    | cancel the running playback                              |
//!
//! While a playback runs, SPACE is ignored so recording and playback never
//! overlap. The clicks synthesized by playback reach the hooks like real
//! clicks; they are dropped because the recorder is idle during playback.

use std::sync::Arc;

use clickrec_core::keymap::windows_vk::vk_name;
use clickrec_core::{DelayMs, Hotkey, PlaybackState, RecordedPoint, Recorder, RecordingState};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, trace};

use crate::application::playback::{
    InputSynthesizer, PlaybackController, PlaybackError, PlaybackOutcome, PlaybackReport,
};
use crate::application::status::{Status, StatusSurface, NO_POSITIONS_MESSAGE};
use crate::infrastructure::input_capture::RawInputEvent;

/// Routes input events to recording and playback and keeps the surface current.
pub struct ClickController {
    recorder: Recorder,
    playback: PlaybackController,
    surface: Arc<dyn StatusSurface>,
    delay: DelayMs,
    reports: UnboundedReceiver<PlaybackReport>,
}

impl ClickController {
    /// Creates an idle controller and renders the initial status.
    pub fn new(
        synthesizer: Arc<dyn InputSynthesizer>,
        surface: Arc<dyn StatusSurface>,
        delay: DelayMs,
    ) -> Self {
        let (reports_tx, reports) = mpsc::unbounded_channel();
        surface.render_status(&Status::Ready);
        Self {
            recorder: Recorder::new(),
            playback: PlaybackController::new(synthesizer, reports_tx),
            surface,
            delay,
            reports,
        }
    }

    // ── State accessors ───────────────────────────────────────────────────────

    pub fn recording_state(&self) -> RecordingState {
        self.recorder.state()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// The current recording, in capture order.
    pub fn recorded_points(&self) -> &[RecordedPoint] {
        self.recorder.points()
    }

    pub fn delay(&self) -> DelayMs {
        self.delay
    }

    /// Changes the delay used by the next playback. A running playback keeps
    /// the delay it was started with.
    pub fn set_delay(&mut self, delay: DelayMs) {
        info!(%delay, "playback delay changed");
        self.delay = delay;
    }

    // ── Input handling ────────────────────────────────────────────────────────

    /// Dispatches one event from the input hooks.
    pub fn handle_input(&mut self, event: RawInputEvent) {
        match event {
            RawInputEvent::KeyDown { vk_code, .. } => self.handle_key_press(vk_code),
            RawInputEvent::LeftButtonDown { x, y, .. } => {
                self.handle_click(RecordedPoint::new(x, y))
            }
        }
    }

    /// Applies the key binding for `vk_code`, if any.
    pub fn handle_key_press(&mut self, vk_code: u8) {
        let Some(hotkey) = Hotkey::from_vk(vk_code) else {
            trace!(key = vk_name(vk_code), "unbound key ignored");
            return;
        };

        match hotkey {
            Hotkey::ToggleRecording => self.toggle_recording(),
            Hotkey::StartPlayback => {
                if self.recorder.is_recording() || self.playback.is_playing() {
                    debug!("C ignored: recording or playback in progress");
                    return;
                }
                // Refusals are already reported on the surface.
                if let Err(e) = self.start_playback() {
                    debug!("playback not started: {e}");
                }
            }
            Hotkey::CancelPlayback => {
                self.cancel_playback();
            }
        }
    }

    fn toggle_recording(&mut self) {
        if self.playback.is_playing() {
            debug!("SPACE ignored during playback");
            return;
        }

        if self.recorder.stop() {
            self.surface.set_recording_indicator(false);
            self.surface.render_status(&Status::RecordingStopped);
            info!(points = self.recorder.len(), "recording stopped");
        } else {
            self.recorder.start_new();
            self.surface.clear_points();
            self.surface.set_recording_indicator(true);
            self.surface.render_status(&Status::Recording { clicks: 0 });
            info!("recording started");
        }
    }

    /// Records `point` if a recording is in progress; ignored otherwise.
    pub fn handle_click(&mut self, point: RecordedPoint) {
        match self.recorder.record(point) {
            Some(index) => {
                self.surface.push_point(index, point);
                self.surface.render_status(&Status::Recording { clicks: index });
                debug!(index, x = point.x, y = point.y, "click recorded");
            }
            None => trace!(x = point.x, y = point.y, "click ignored: not recording"),
        }
    }

    // ── Playback ──────────────────────────────────────────────────────────────

    /// Starts replaying the current recording with the configured delay.
    ///
    /// # Errors
    ///
    /// - [`PlaybackError::RecordingInProgress`] while recording.
    /// - [`PlaybackError::AlreadyPlaying`] while a playback runs.
    /// - [`PlaybackError::EmptyRecording`] if nothing was recorded; the user
    ///   is shown a message and nothing else changes.
    pub fn start_playback(&mut self) -> Result<u64, PlaybackError> {
        if self.recorder.is_recording() {
            return Err(PlaybackError::RecordingInProgress);
        }
        if self.playback.is_playing() {
            return Err(PlaybackError::AlreadyPlaying);
        }
        if self.recorder.is_empty() {
            self.surface.show_message(NO_POSITIONS_MESSAGE);
            return Err(PlaybackError::EmptyRecording);
        }

        let id = self.playback.start(self.recorder.snapshot(), self.delay)?;
        self.surface.set_interactive(false);
        self.surface.render_status(&Status::Playing);
        Ok(id)
    }

    /// Requests cancellation of the running playback. Returns `false` when
    /// nothing is playing.
    pub fn cancel_playback(&mut self) -> bool {
        let cancelled = self.playback.cancel();
        if !cancelled {
            debug!("ESC ignored: nothing is playing");
        }
        cancelled
    }

    /// Applies the final report of a playback.
    ///
    /// Returns `None` for a report that does not belong to the running
    /// playback.
    pub fn finish_playback(&mut self, report: PlaybackReport) -> Option<PlaybackOutcome> {
        if !self.playback.finish(&report) {
            return None;
        }

        self.surface.set_interactive(true);
        match &report.outcome {
            PlaybackOutcome::Completed { clicks } => {
                info!(id = report.id, clicks, "playback complete");
                self.surface.render_status(&Status::PlaybackComplete);
            }
            PlaybackOutcome::Cancelled { clicks } => {
                info!(id = report.id, clicks, "playback cancelled");
                self.surface.render_status(&Status::PlaybackCancelled);
            }
            PlaybackOutcome::Failed { message } => {
                error!(id = report.id, "playback failed: {message}");
                self.surface.render_status(&Status::PlaybackFailed);
                self.surface
                    .show_message(&format!("Error during playback: {message}"));
            }
        }
        Some(report.outcome)
    }

    /// Waits for the running playback to end and applies its report.
    ///
    /// Returns `None` immediately if nothing is playing.
    pub async fn wait_for_playback(&mut self) -> Option<PlaybackOutcome> {
        while self.playback.is_playing() {
            let report = self.reports.recv().await?;
            if let Some(outcome) = self.finish_playback(report) {
                return Some(outcome);
            }
        }
        None
    }

    /// Cancels any running playback and waits for it to stop.
    pub async fn shutdown(&mut self) {
        if self.playback.cancel() {
            self.wait_for_playback().await;
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Processes input events and playback reports until `shutdown` fires or
    /// the input stream closes, then stops any running playback.
    pub async fn run(
        mut self,
        mut input: UnboundedReceiver<RawInputEvent>,
        shutdown: CancellationToken,
    ) {
        info!(delay = %self.delay, "controller running");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("shutdown requested");
                    break;
                }
                Some(report) = self.reports.recv() => {
                    self.finish_playback(report);
                }
                event = input.recv() => match event {
                    Some(event) => self.handle_input(event),
                    None => {
                        info!("input stream closed");
                        break;
                    }
                },
            }
        }
        self.shutdown().await;
        info!("controller stopped");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
