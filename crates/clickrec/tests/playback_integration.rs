//! End-to-end playback tests.
//!
//! Drive a [`ClickController`] the way the hook thread does (key presses and
//! clicks) with the recording mocks standing in for the desktop, and check
//! the synthesized input and the status updates. Tokio's paused clock makes
//! every delay deterministic.

use std::sync::Arc;
use std::time::Duration;

use clickrec::application::controller::ClickController;
use clickrec::application::playback::{PlaybackError, PlaybackOutcome};
use clickrec::application::status::{Status, NO_POSITIONS_MESSAGE};
use clickrec::infrastructure::input_synthesis::mock::{MockInputSynthesizer, SynthesizedInput};
use clickrec::infrastructure::status_surface::mock::MockStatusSurface;
use clickrec_core::keymap::windows_vk::{VK_C, VK_ESCAPE, VK_SPACE};
use clickrec_core::{DelayMs, PlaybackState, RecordedPoint};
use tokio::time::Instant;
use tokio_test::{assert_err, assert_ok};

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Harness {
    controller: ClickController,
    synth: Arc<MockInputSynthesizer>,
    surface: Arc<MockStatusSurface>,
}

fn harness(delay_ms: u32) -> Harness {
    let synth = Arc::new(MockInputSynthesizer::new());
    let surface = Arc::new(MockStatusSurface::new());
    let controller = ClickController::new(
        synth.clone(),
        surface.clone(),
        DelayMs::new(delay_ms).unwrap(),
    );
    Harness {
        controller,
        synth,
        surface,
    }
}

impl Harness {
    fn record(&mut self, points: &[(i32, i32)]) {
        self.controller.handle_key_press(VK_SPACE);
        for &(x, y) in points {
            self.controller.handle_click(RecordedPoint::new(x, y));
        }
        self.controller.handle_key_press(VK_SPACE);
    }
}

fn diagonal(n: i32) -> Vec<(i32, i32)> {
    (1..=n).map(|i| (i * 10, i * 10)).collect()
}

// ── Refusals ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_empty_recording_is_refused_with_notification() {
    // Arrange
    let mut h = harness(200);

    // Act
    h.controller.handle_key_press(VK_C);

    // Assert
    assert_eq!(h.controller.playback_state(), PlaybackState::Idle);
    assert_eq!(h.surface.messages(), vec![NO_POSITIONS_MESSAGE.to_string()]);
    assert_eq!(h.surface.terminal_status_count(), 0);
    assert!(h.synth.events().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_non_empty_recording_always_starts() {
    for n in 1..=5 {
        let mut h = harness(100);
        h.record(&diagonal(n));

        assert_ok!(h.controller.start_playback());
        assert_eq!(h.controller.playback_state(), PlaybackState::Playing);

        h.controller.wait_for_playback().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_second_start_during_playback_is_rejected() {
    // Arrange
    let mut h = harness(200);
    h.record(&diagonal(3));
    assert_ok!(h.controller.start_playback());

    // Act
    let second = h.controller.start_playback();

    // Assert
    assert_eq!(assert_err!(second), PlaybackError::AlreadyPlaying);
    h.controller.wait_for_playback().await;
    assert_eq!(h.synth.moves(), 3, "only the first playback ran");
    assert_eq!(h.surface.terminal_status_count(), 1);
}

// ── Cancellation ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_cancel_at_step_k_stops_moves_and_reports_cancelled() {
    const N: i32 = 4;
    const DELAY_MS: u64 = 200;

    for k in 1..=N as u64 {
        // Arrange
        let mut h = harness(DELAY_MS as u32);
        h.record(&diagonal(N));
        let started = Instant::now();
        assert_ok!(h.controller.start_playback());

        // Act – step k moves at (k - 1) * DELAY_MS; cancel during its first wait
        tokio::time::sleep_until(started + Duration::from_millis((k - 1) * DELAY_MS + 50)).await;
        assert!(h.controller.cancel_playback());
        let outcome = h.controller.wait_for_playback().await;

        // Assert
        assert_eq!(
            outcome,
            Some(PlaybackOutcome::Cancelled {
                clicks: (k - 1) as usize
            }),
            "k = {k}"
        );
        assert_eq!(h.synth.moves(), k as usize, "no moves after cancellation (k = {k})");
        assert_eq!(h.surface.last_status(), Some(Status::PlaybackCancelled));
        assert_eq!(h.controller.playback_state(), PlaybackState::Idle);

        // Nothing else happens once the task has stopped.
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(h.synth.moves(), k as usize);
    }
}

#[tokio::test(start_paused = true)]
async fn test_never_cancelled_playback_completes() {
    let mut h = harness(200);
    h.record(&diagonal(4));

    assert_ok!(h.controller.start_playback());
    let outcome = h.controller.wait_for_playback().await;

    assert_eq!(outcome, Some(PlaybackOutcome::Completed { clicks: 4 }));
    assert_eq!(h.surface.last_status(), Some(Status::PlaybackComplete));
}

#[tokio::test(start_paused = true)]
async fn test_exactly_one_terminal_status_per_playback() {
    // Arrange
    let mut h = harness(100);
    h.record(&diagonal(3));

    // Act – never cancelled, cancelled once, cancelled repeatedly
    for cancel_times in [0, 1, 3] {
        assert_ok!(h.controller.start_playback());
        for _ in 0..cancel_times {
            h.controller.handle_key_press(VK_ESCAPE);
        }
        h.controller.wait_for_playback().await;
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    // Assert
    assert_eq!(h.surface.terminal_status_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_failed_playback_reports_one_error_status() {
    // Arrange
    let synth = Arc::new(MockInputSynthesizer {
        fail_moves: true,
        ..Default::default()
    });
    let surface = Arc::new(MockStatusSurface::new());
    let mut controller = ClickController::new(synth, surface.clone(), DelayMs::default());
    controller.handle_key_press(VK_SPACE);
    controller.handle_click(RecordedPoint::new(1, 1));
    controller.handle_key_press(VK_SPACE);

    // Act
    controller.handle_key_press(VK_C);
    let outcome = controller.wait_for_playback().await;

    // Assert
    assert_eq!(
        outcome,
        Some(PlaybackOutcome::Failed {
            message: "platform error: mock failure".to_string()
        })
    );
    assert_eq!(surface.terminal_status_count(), 1);
    assert_eq!(surface.last_status(), Some(Status::PlaybackFailed));
    assert_eq!(
        surface.messages(),
        vec!["Error during playback: platform error: mock failure".to_string()]
    );
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_scenario_record_two_clicks_and_replay() {
    // Arrange
    let mut h = harness(200);
    h.record(&[(10, 10), (50, 80)]);
    let started = Instant::now();

    // Act
    h.controller.handle_key_press(VK_C);
    let outcome = h.controller.wait_for_playback().await;

    // Assert
    assert_eq!(
        h.synth.events(),
        vec![
            SynthesizedInput::MoveTo { x: 10, y: 10 },
            SynthesizedInput::LeftClick,
            SynthesizedInput::MoveTo { x: 50, y: 80 },
            SynthesizedInput::LeftClick,
        ]
    );
    assert_eq!(outcome, Some(PlaybackOutcome::Completed { clicks: 2 }));
    assert_eq!(h.surface.last_status(), Some(Status::PlaybackComplete));
    assert!(started.elapsed() >= Duration::from_millis(400));
}

#[tokio::test]
async fn test_scenario_play_empty_recording() {
    let mut h = harness(200);

    let result = h.controller.start_playback();

    assert_eq!(result, Err(PlaybackError::EmptyRecording));
    assert_eq!(h.surface.messages(), vec![NO_POSITIONS_MESSAGE.to_string()]);
    assert_eq!(h.controller.playback_state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_scenario_cancel_immediately_after_start() {
    // Arrange
    let mut h = harness(200);
    h.record(&[(10, 10), (50, 80)]);

    // Act
    h.controller.handle_key_press(VK_C);
    h.controller.handle_key_press(VK_ESCAPE);
    let outcome = h.controller.wait_for_playback().await;

    // Assert
    assert!(matches!(outcome, Some(PlaybackOutcome::Cancelled { clicks: 0 })));
    assert!(h.synth.moves() <= 1, "zero or one pointer moves");
    assert_eq!(h.synth.clicks(), 0);
    assert_eq!(h.surface.last_status(), Some(Status::PlaybackCancelled));
    assert_eq!(h.controller.playback_state(), PlaybackState::Idle);
}
