//! Windows pointer synthesis via `SetCursorPos` and `SendInput`.
//!
//! Recorded points are absolute virtual-screen pixels, exactly what
//! `SetCursorPos` takes, so no coordinate normalization is needed. The click
//! is a single `SendInput` batch of a left-down and a left-up at the current
//! pointer position.

#![cfg(target_os = "windows")]

use windows::Win32::Foundation::GetLastError;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP,
    MOUSE_EVENT_FLAGS, MOUSEINPUT,
};
use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;

use crate::application::playback::{InputSynthesizer, SynthesisError};

/// Windows implementation of [`InputSynthesizer`].
pub struct WindowsInputSynthesizer;

impl WindowsInputSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInputSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSynthesizer for WindowsInputSynthesizer {
    fn move_pointer(&self, x: i32, y: i32) -> Result<(), SynthesisError> {
        // SAFETY: SetCursorPos takes plain integers and has no pointer arguments.
        unsafe { SetCursorPos(x, y) }
            .map_err(|e| SynthesisError::Platform(format!("SetCursorPos({x}, {y}) failed: {e}")))
    }

    fn click_left(&self) -> Result<(), SynthesisError> {
        let inputs = [
            mouse_button_input(MOUSEEVENTF_LEFTDOWN),
            mouse_button_input(MOUSEEVENTF_LEFTUP),
        ];
        // SAFETY: inputs is a valid array of INPUT structures on the stack
        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            // SAFETY: GetLastError only reads thread-local state.
            let code = unsafe { GetLastError() };
            return Err(SynthesisError::Platform(format!(
                "SendInput injected {sent} of {} events (error {})",
                inputs.len(),
                code.0
            )));
        }
        Ok(())
    }
}

fn mouse_button_input(flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: 0,
                dy: 0,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}
