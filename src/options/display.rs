use serde::{Deserialize, Serialize};

use super::{check_range, validate_pin_fields, FieldError, PinField};
use crate::pins::{Pin, PinClaims, PIN_UNASSIGNED};

/// The `getDisplayOptions` / `setDisplayOptions` payload.
///
/// Values keep their wire units (I2C address as a raw integer, durations in
/// milliseconds); presentation conversions belong to the UI. The splash
/// image itself travels through a separate endpoint and is not modeled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(with = "super::int_bool")]
    pub enabled: bool,
    pub sda_pin: Pin,
    pub scl_pin: Pin,
    pub i2c_address: u8,
    pub i2c_block: u8,
    pub i2c_speed: u32,
    #[serde(with = "super::int_bool")]
    pub flip_display: bool,
    #[serde(with = "super::int_bool")]
    pub invert_display: bool,
    pub button_layout: u8,
    pub button_layout_right: u8,
    pub splash_mode: u8,
    pub splash_choice: u8,
    /// Milliseconds; 0 keeps the splash up until input.
    pub splash_duration: u32,
    /// Milliseconds; 0 disables the screen saver.
    pub display_saver_timeout: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            sda_pin: PIN_UNASSIGNED,
            scl_pin: PIN_UNASSIGNED,
            i2c_address: 0x3C,
            i2c_block: 0,
            i2c_speed: 400_000,
            flip_display: false,
            invert_display: false,
            button_layout: 0,
            button_layout_right: 0,
            splash_mode: 0,
            splash_choice: 0,
            splash_duration: 0,
            display_saver_timeout: 0,
        }
    }
}

impl DisplayOptions {
    fn pin_fields(&self) -> [PinField; 2] {
        [
            PinField::new("sdaPin", self.sda_pin, self.enabled),
            PinField::new("sclPin", self.scl_pin, self.enabled),
        ]
    }

    pub fn claimed_pins(&self) -> Vec<Pin> {
        let mut claims = PinClaims::new();
        for field in self.pin_fields() {
            if field.enabled {
                claims.claim(field.pin);
            }
        }
        claims.iter().collect()
    }

    pub fn validate(&self, claimed: &PinClaims) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        validate_pin_fields(&self.pin_fields(), claimed, &mut errors);
        check_range(&mut errors, "i2cBlock", i64::from(self.i2c_block), 0, 1);
        check_range(&mut errors, "i2cAddress", i64::from(self.i2c_address), 0, 127);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
