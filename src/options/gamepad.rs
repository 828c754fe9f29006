use serde::{Deserialize, Serialize};

use super::{check_choice, FieldError, ValidationError};
use crate::buttons::{HotkeyAction, HOTKEY_MASKS};

/// USB identity the controller boots as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InputMode {
    XInput = 0,
    Switch = 1,
    Ps3 = 2,
    Keyboard = 3,
    Ps4 = 4,
}

impl From<InputMode> for u8 {
    fn from(value: InputMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for InputMode {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InputMode::XInput),
            1 => Ok(InputMode::Switch),
            2 => Ok(InputMode::Ps3),
            3 => Ok(InputMode::Keyboard),
            4 => Ok(InputMode::Ps4),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// How the four directions are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DpadMode {
    Digital = 0,
    LeftAnalog = 1,
    RightAnalog = 2,
}

impl From<DpadMode> for u8 {
    fn from(value: DpadMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for DpadMode {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DpadMode::Digital),
            1 => Ok(DpadMode::LeftAnalog),
            2 => Ok(DpadMode::RightAnalog),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// Simultaneous-opposite-cardinal-direction resolution policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SocdMode {
    UpPriority = 0,
    Neutral = 1,
    LastWin = 2,
    FirstWin = 3,
}

impl From<SocdMode> for u8 {
    fn from(value: SocdMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for SocdMode {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SocdMode::UpPriority),
            1 => Ok(SocdMode::Neutral),
            2 => Ok(SocdMode::LastWin),
            3 => Ok(SocdMode::FirstWin),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// One direction slot of a hotkey chord: the firmware action bit value and
/// the direction mask it is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyEntry {
    pub action: u32,
    pub mask: u32,
}

/// The `getGamepadOptions` / `setGamepadOptions` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamepadOptions {
    pub dpad_mode: DpadMode,
    pub input_mode: InputMode,
    pub socd_mode: SocdMode,
    #[serde(default)]
    pub hotkey_f1: Vec<HotkeyEntry>,
    #[serde(default)]
    pub hotkey_f2: Vec<HotkeyEntry>,
}

impl Default for GamepadOptions {
    fn default() -> Self {
        Self {
            dpad_mode: DpadMode::Digital,
            input_mode: InputMode::XInput,
            socd_mode: SocdMode::UpPriority,
            hotkey_f1: Vec::new(),
            hotkey_f2: Vec::new(),
        }
    }
}

impl GamepadOptions {
    /// Check every hotkey slot against the firmware action and mask tables.
    /// Mode fields are validated structurally when decoding.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        Self::check_hotkeys(&mut errors, "hotkeyF1", &self.hotkey_f1);
        Self::check_hotkeys(&mut errors, "hotkeyF2", &self.hotkey_f2);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn check_hotkeys(errors: &mut Vec<FieldError>, field: &'static str, slots: &[HotkeyEntry]) {
        for slot in slots {
            check_choice(
                errors,
                field,
                i64::from(slot.action),
                HotkeyAction::from_bits(slot.action).is_some(),
            );
            check_choice(
                errors,
                field,
                i64::from(slot.mask),
                HOTKEY_MASKS.contains(&slot.mask),
            );
        }
    }
}
