//! Typed models of the device's wire option groups with local validation.
//!
//! Field names on the wire follow the device API; every group exposes
//! `claimed_pins` (the pins it occupies while enabled) and `validate`,
//! which checks the group against the pins claimed by the *other* groups.
//! Validation failures are per-field and locally recoverable; they block
//! submission but never abort anything.

pub mod addons;
pub mod display;
pub mod gamepad;
pub mod led;
pub mod mappings;

pub use addons::AddonsOptions;
pub use display::DisplayOptions;
pub use gamepad::{DpadMode, GamepadOptions, HotkeyEntry, InputMode, SocdMode};
pub use led::{ButtonLayout, CustomThemeOptions, LedFormat, LedOptions};
pub use mappings::{
    base_pin_mappings, claimed_mapping_pins, validate_pin_mappings, KeyMappings, PinMappings,
};

use crate::pins::{validate_pin, Pin, PinClaims, PinError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Pin(#[from] PinError),

    #[error("{value} is out of range ({min} to {max})")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("{value} is not a supported choice")]
    InvalidChoice { value: i64 },
}

/// A validation failure attributed to one wire field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// One pin-bearing field of an option group.
pub(crate) struct PinField {
    pub name: &'static str,
    pub pin: Pin,
    pub enabled: bool,
}

impl PinField {
    pub(crate) fn new(name: &'static str, pin: Pin, enabled: bool) -> Self {
        Self { name, pin, enabled }
    }
}

/// Validate every enabled pin field against the externally claimed pins
/// plus the group's *other* enabled fields, so two fields of the same page
/// binding one pin both report a collision. Disabled fields are exempt and
/// claim nothing.
pub(crate) fn validate_pin_fields(
    fields: &[PinField],
    claimed: &PinClaims,
    errors: &mut Vec<FieldError>,
) {
    for (i, field) in fields.iter().enumerate() {
        if !field.enabled {
            continue;
        }
        let mut others = claimed.clone();
        for (j, other) in fields.iter().enumerate() {
            if i != j && other.enabled {
                others.claim(other.pin);
            }
        }
        if let Err(error) = validate_pin(field.pin, &others) {
            errors.push(FieldError {
                field: field.name,
                error: error.into(),
            });
        }
    }
}

pub(crate) fn check_range(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min || value > max {
        errors.push(FieldError {
            field,
            error: ValidationError::OutOfRange { value, min, max },
        });
    }
}

pub(crate) fn check_choice(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: i64,
    valid: bool,
) {
    if !valid {
        errors.push(FieldError {
            field,
            error: ValidationError::InvalidChoice { value },
        });
    }
}

/// Enable flags travel as 0/1 integers on the wire.
pub(crate) mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}
