//! Firmware bit-mask tables for button chords and single-button mappings.

use super::ButtonId;

/// D-pad chord masks used by the hotkey slots (Up/Down/Left/Right).
pub const HOTKEY_MASKS: [u32; 4] = [1 << 0, 1 << 1, 1 << 2, 1 << 3];

/// Actions a hotkey chord can trigger. Values are the firmware bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum HotkeyAction {
    None = 0,
    DpadDigital = 1 << 0,
    DpadLeftAnalog = 1 << 1,
    DpadRightAnalog = 1 << 2,
    HomeButton = 1 << 3,
    CaptureButton = 1 << 4,
    SocdUpPriority = 1 << 5,
    SocdNeutral = 1 << 6,
    SocdLastWin = 1 << 7,
    InvertXAxis = 1 << 8,
    InvertYAxis = 1 << 9,
    SocdFirstWin = 1 << 10,
}

impl HotkeyAction {
    /// Decode a firmware action value. Returns `None` for unknown bits.
    pub fn from_bits(bits: u32) -> Option<Self> {
        let action = match bits {
            0 => HotkeyAction::None,
            x if x == 1 << 0 => HotkeyAction::DpadDigital,
            x if x == 1 << 1 => HotkeyAction::DpadLeftAnalog,
            x if x == 1 << 2 => HotkeyAction::DpadRightAnalog,
            x if x == 1 << 3 => HotkeyAction::HomeButton,
            x if x == 1 << 4 => HotkeyAction::CaptureButton,
            x if x == 1 << 5 => HotkeyAction::SocdUpPriority,
            x if x == 1 << 6 => HotkeyAction::SocdNeutral,
            x if x == 1 << 7 => HotkeyAction::SocdLastWin,
            x if x == 1 << 8 => HotkeyAction::InvertXAxis,
            x if x == 1 << 9 => HotkeyAction::InvertYAxis,
            x if x == 1 << 10 => HotkeyAction::SocdFirstWin,
            _ => return None,
        };
        Some(action)
    }
}

/// Button-mask bit layout for a firmware line.
///
/// Historical firmware revisions disagree on where the four directions live
/// in the mask (bits 14-17 vs 16-19), so the layout is selected per device
/// rather than hardcoded. B1..A2 occupy bits 0-13 in both revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskScheme {
    /// Directions at bits 14-17.
    Rev1,
    /// Directions at bits 16-19.
    Rev2,
}

impl MaskScheme {
    /// Bit position of a button in this scheme's mask.
    pub fn button_bit(self, button: ButtonId) -> u32 {
        let dpad_base = match self {
            MaskScheme::Rev1 => 14,
            MaskScheme::Rev2 => 16,
        };
        match button {
            ButtonId::B1 => 0,
            ButtonId::B2 => 1,
            ButtonId::B3 => 2,
            ButtonId::B4 => 3,
            ButtonId::L1 => 4,
            ButtonId::R1 => 5,
            ButtonId::L2 => 6,
            ButtonId::R2 => 7,
            ButtonId::S1 => 8,
            ButtonId::S2 => 9,
            ButtonId::L3 => 10,
            ButtonId::R3 => 11,
            ButtonId::A1 => 12,
            ButtonId::A2 => 13,
            ButtonId::Up => dpad_base,
            ButtonId::Down => dpad_base + 1,
            ButtonId::Left => dpad_base + 2,
            ButtonId::Right => dpad_base + 3,
        }
    }

    /// Single-button mask value for a button.
    pub fn button_mask(self, button: ButtonId) -> u32 {
        1 << self.button_bit(button)
    }

    /// Whether `mask` is a valid single-button mapping value: zero ("None")
    /// or exactly one known button bit.
    pub fn is_button_mask(self, mask: u32) -> bool {
        mask == 0 || ButtonId::ALL.iter().any(|&b| self.button_mask(b) == mask)
    }
}
