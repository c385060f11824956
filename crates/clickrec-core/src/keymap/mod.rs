//! Hotkey decoding.
//!
//! The low-level keyboard hook reports Windows Virtual Key codes. Only three
//! keys carry meaning for clickrec; everything else is ignored. Key bindings
//! are fixed.
//!
//! | Key    | VK code | Command                       |
//! |--------|---------|-------------------------------|
//! | Space  | `0x20`  | [`Hotkey::ToggleRecording`]   |
//! | C      | `0x43`  | [`Hotkey::StartPlayback`]     |
//! | Escape | `0x1B`  | [`Hotkey::CancelPlayback`]    |

pub mod windows_vk;

/// A command bound to a global keyboard shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hotkey {
    /// Start a new recording, or stop the one in progress.
    ToggleRecording,
    /// Replay the current recording.
    StartPlayback,
    /// Cancel the active playback.
    CancelPlayback,
}

impl Hotkey {
    /// Decodes a Windows Virtual Key code.
    ///
    /// Returns `None` for keys without a binding.
    pub fn from_vk(vk: u8) -> Option<Self> {
        match vk {
            windows_vk::VK_SPACE => Some(Self::ToggleRecording),
            windows_vk::VK_C => Some(Self::StartPlayback),
            windows_vk::VK_ESCAPE => Some(Self::CancelPlayback),
            _ => None,
        }
    }

    /// Returns the virtual key code bound to this command.
    pub fn vk(self) -> u8 {
        match self {
            Self::ToggleRecording => windows_vk::VK_SPACE,
            Self::StartPlayback => windows_vk::VK_C,
            Self::CancelPlayback => windows_vk::VK_ESCAPE,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
