//! Integration tests for the recorder state machine.
//!
//! These drive the public `clickrec_core` API with whole click sequences, the
//! way the controller does, and check the ordering and reset guarantees.

use clickrec_core::{RecordedPoint, Recorder, RecordingState};

/// Builds `n` distinct points along a diagonal.
fn points(n: i32) -> Vec<RecordedPoint> {
    (0..n).map(|i| RecordedPoint::new(i * 10, i * 7 - 3)).collect()
}

#[test]
fn test_clicks_while_recording_are_kept_in_delivery_order() {
    for n in [0, 1, 2, 17, 250] {
        // Arrange
        let mut recorder = Recorder::new();
        let expected = points(n);
        recorder.start_new();

        // Act
        for p in &expected {
            recorder.record(*p);
        }

        // Assert
        assert_eq!(recorder.points(), expected.as_slice(), "n = {n}");
    }
}

#[test]
fn test_clicks_while_idle_never_mutate_the_recording() {
    // Arrange – a finished recording with two points
    let mut recorder = Recorder::new();
    recorder.start_new();
    recorder.record(RecordedPoint::new(1, 1));
    recorder.record(RecordedPoint::new(2, 2));
    recorder.stop();
    let before = recorder.points().to_vec();

    // Act
    for p in points(20) {
        assert_eq!(recorder.record(p), None);
    }

    // Assert
    assert_eq!(recorder.points(), before.as_slice());
    assert_eq!(recorder.state(), RecordingState::Idle);
}

#[test]
fn test_starting_a_recording_always_resets_it() {
    let mut recorder = Recorder::new();
    for round in 0..5 {
        recorder.start_new();
        assert!(recorder.is_empty(), "round {round} must start empty");
        for p in points(round + 1) {
            recorder.record(p);
        }
        recorder.stop();
        assert_eq!(recorder.len(), (round + 1) as usize);
    }
}

#[test]
fn test_interleaved_sessions_only_keep_the_latest() {
    // Arrange
    let mut recorder = Recorder::new();

    // Act – first session, idle clicks, second session
    recorder.start_new();
    recorder.record(RecordedPoint::new(10, 10));
    recorder.stop();
    recorder.record(RecordedPoint::new(99, 99));
    recorder.start_new();
    recorder.record(RecordedPoint::new(50, 80));
    recorder.stop();

    // Assert
    assert_eq!(recorder.points(), &[RecordedPoint::new(50, 80)]);
}
