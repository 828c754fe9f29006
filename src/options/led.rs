use serde::{Deserialize, Serialize};

use super::{check_range, validate_pin_fields, FieldError, PinField, ValidationError};
use crate::pins::{Pin, PinClaims, PIN_UNASSIGNED};
use crate::theme::{is_contiguous_assignment, LedAssignment, WireTheme};

/// Color order expected by the LED chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum LedFormat {
    Grb = 0,
    Rgb = 1,
    Grbw = 2,
    Rgbw = 3,
}

impl From<LedFormat> for u8 {
    fn from(value: LedFormat) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for LedFormat {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LedFormat::Grb),
            1 => Ok(LedFormat::Rgb),
            2 => Ok(LedFormat::Grbw),
            3 => Ok(LedFormat::Rgbw),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// Physical layout used by the theme preview (Stick / Stickless / WASD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ButtonLayout {
    Standard = 0,
    Stickless = 1,
    Keyboard = 2,
}

impl From<ButtonLayout> for u8 {
    fn from(value: ButtonLayout) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ButtonLayout {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ButtonLayout::Standard),
            1 => Ok(ButtonLayout::Stickless),
            2 => Ok(ButtonLayout::Keyboard),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// The `getLedOptions` / `setLedOptions` payload.
///
/// `usedPins` is reported by the device on GET to seed the claimed-set for
/// the page and is never serialized back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedOptions {
    pub brightness_maximum: u8,
    pub brightness_steps: u8,
    pub data_pin: Pin,
    pub led_format: LedFormat,
    pub led_layout: ButtonLayout,
    pub leds_per_button: u8,
    #[serde(default)]
    pub led_button_map: LedAssignment,
    #[serde(default, with = "super::int_bool")]
    pub use_custom_leds: bool,
    #[serde(default)]
    pub custom_leds: WireTheme,
    #[serde(default, skip_serializing)]
    pub used_pins: Vec<Pin>,
}

impl Default for LedOptions {
    fn default() -> Self {
        Self {
            brightness_maximum: 255,
            brightness_steps: 5,
            data_pin: PIN_UNASSIGNED,
            led_format: LedFormat::Grb,
            led_layout: ButtonLayout::Standard,
            leds_per_button: 2,
            led_button_map: LedAssignment::new(),
            use_custom_leds: false,
            custom_leds: WireTheme::new(),
            used_pins: Vec::new(),
        }
    }
}

impl LedOptions {
    /// Pins this group occupies. The LED chain counts as enabled whenever
    /// its data pin is assigned.
    pub fn claimed_pins(&self) -> Vec<Pin> {
        if self.data_pin >= 0 {
            vec![self.data_pin]
        } else {
            Vec::new()
        }
    }

    pub fn validate(&self, claimed: &PinClaims) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        validate_pin_fields(
            &[PinField::new("dataPin", self.data_pin, true)],
            claimed,
            &mut errors,
        );
        check_range(
            &mut errors,
            "brightnessSteps",
            i64::from(self.brightness_steps),
            1,
            10,
        );
        check_range(
            &mut errors,
            "ledsPerButton",
            i64::from(self.leds_per_button),
            1,
            i64::from(u8::MAX),
        );
        if !is_contiguous_assignment(&self.led_button_map) {
            errors.push(FieldError {
                field: "ledButtonMap",
                error: ValidationError::InvalidChoice { value: -1 },
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// The `getCustomTheme` / `setCustomTheme` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomThemeOptions {
    #[serde(default, with = "super::int_bool")]
    pub has_custom_theme: bool,
    #[serde(default)]
    pub custom_theme: WireTheme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::ButtonId;
    use crate::theme::assign_led_order;

    #[test]
    fn test_data_pin_claimed_only_when_assigned() {
        let mut options = LedOptions::default();
        assert!(options.claimed_pins().is_empty());
        options.data_pin = 15;
        assert_eq!(options.claimed_pins(), vec![15]);
    }

    #[test]
    fn test_validate_rejects_claimed_data_pin() {
        let mut options = LedOptions::default();
        options.data_pin = 15;
        let claimed: PinClaims = [15].into_iter().collect();
        let errors = options.validate(&claimed).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "dataPin");
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(LedOptions::default().validate(&PinClaims::new()).is_ok());
    }

    #[test]
    fn test_validate_brightness_steps_bounds() {
        let mut options = LedOptions::default();
        options.brightness_steps = 0;
        assert!(options.validate(&PinClaims::new()).is_err());
        options.brightness_steps = 11;
        assert!(options.validate(&PinClaims::new()).is_err());
        options.brightness_steps = 10;
        assert!(options.validate(&PinClaims::new()).is_ok());
    }

    #[test]
    fn test_validate_checks_led_order() {
        let mut options = LedOptions::default();
        options.led_button_map = assign_led_order(&[ButtonId::B1, ButtonId::B2]);
        assert!(options.validate(&PinClaims::new()).is_ok());
        options.led_button_map.insert(ButtonId::B3, Some(7));
        let errors = options.validate(&PinClaims::new()).unwrap_err();
        assert_eq!(errors[0].field, "ledButtonMap");
    }

    #[test]
    fn test_led_format_decode() {
        assert_eq!(LedFormat::try_from(0).unwrap(), LedFormat::Grb);
        assert!(LedFormat::try_from(4).is_err());
        assert_eq!(ButtonLayout::try_from(2).unwrap(), ButtonLayout::Keyboard);
        assert!(ButtonLayout::try_from(3).is_err());
    }
}
