use std::collections::BTreeMap;

use super::{FieldError, PinField};
use crate::buttons::ButtonId;
use crate::pins::{Pin, PinClaims};

/// The `getPinMappings` / `setPinMappings` payload: button to board pin.
pub type PinMappings = BTreeMap<ButtonId, Pin>;

/// The `getKeyMappings` / `setKeyMappings` payload: button to HID keycode
/// (keyboard input mode).
pub type KeyMappings = BTreeMap<ButtonId, u32>;

/// Every mapping with an assigned pin claims it; there is no per-button
/// enable flag.
pub fn claimed_mapping_pins(mappings: &PinMappings) -> Vec<Pin> {
    let claims: PinClaims = mappings.values().copied().collect();
    claims.iter().collect()
}

/// Validate every button's pin against the pins claimed by other option
/// groups and by the other buttons of this map.
pub fn validate_pin_mappings(
    mappings: &PinMappings,
    claimed: &PinClaims,
) -> Result<(), Vec<FieldError>> {
    let fields: Vec<PinField> = mappings
        .iter()
        .map(|(&button, &pin)| PinField::new(button.name(), pin, true))
        .collect();

    let mut errors = Vec::new();
    super::validate_pin_fields(&fields, claimed, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A full mapping with every button present and unassigned, mirroring the
/// blank form the UI starts from.
pub fn base_pin_mappings() -> PinMappings {
    ButtonId::ALL.iter().map(|&b| (b, -1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_mappings_cover_all_buttons() {
        let mappings = base_pin_mappings();
        assert_eq!(mappings.len(), ButtonId::ALL.len());
        assert!(mappings.values().all(|&p| p == -1));
        assert!(claimed_mapping_pins(&mappings).is_empty());
        assert!(validate_pin_mappings(&mappings, &PinClaims::new()).is_ok());
    }

    #[test]
    fn test_duplicate_pin_reported_on_both_buttons() {
        let mut mappings = base_pin_mappings();
        mappings.insert(ButtonId::B1, 6);
        mappings.insert(ButtonId::B2, 6);

        let errors = validate_pin_mappings(&mappings, &PinClaims::new()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["B1", "B2"]);
    }

    #[test]
    fn test_collision_with_other_groups() {
        let mut mappings = base_pin_mappings();
        mappings.insert(ButtonId::Up, 15);

        let claimed: PinClaims = [15].into_iter().collect();
        let errors = validate_pin_mappings(&mappings, &claimed).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "Up");
    }

    #[test]
    fn test_wire_shape_is_flat_object() {
        let mut mappings = base_pin_mappings();
        mappings.insert(ButtonId::Left, 3);
        let value = serde_json::to_value(&mappings).unwrap();
        assert_eq!(value["Left"], 3);
        assert_eq!(value["A2"], -1);
    }
}
