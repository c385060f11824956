//! Windows Virtual Key codes used by clickrec.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//!
//! Windows assigns each keyboard key a logical number called a Virtual Key
//! code. Letter keys use the uppercase ASCII value regardless of Shift or the
//! active keyboard layout, so `C` is always `0x43`.

/// `VK_ESCAPE`
pub const VK_ESCAPE: u8 = 0x1B;

/// `VK_SPACE`
pub const VK_SPACE: u8 = 0x20;

/// The `C` key (no named constant in winuser.h).
pub const VK_C: u8 = 0x43;

/// Returns a short human-readable name for a virtual key code, for logging.
pub fn vk_name(vk: u8) -> &'static str {
    match vk {
        VK_ESCAPE => "Escape",
        VK_SPACE => "Space",
        VK_C => "C",
        0x08 => "Backspace",
        0x09 => "Tab",
        0x0D => "Enter",
        0x10 => "Shift",
        0x11 => "Ctrl",
        0x12 => "Alt",
        0x30..=0x39 => "Digit",
        0x41..=0x5A => "Letter",
        0x70..=0x87 => "Function",
        _ => "Other",
    }
}
