//! Pin assignment tracking and validation.
//!
//! The claimed-set is rebuilt from the current option groups every time a
//! page loads or an enable flag changes; it is passed into validation
//! explicitly so the checks stay pure functions.

use std::collections::BTreeSet;

/// A numbered I/O line on the controller board. `-1` means unassigned.
pub type Pin = i32;

pub const PIN_UNASSIGNED: Pin = -1;
pub const PIN_MAX: Pin = 29;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("pin {0} is out of range (-1 to 29)")]
    OutOfRange(Pin),

    #[error("pin {0} is unavailable/already assigned")]
    AlreadyAssigned(Pin),
}

/// The set of pins claimed by enabled configuration sections.
///
/// Only non-negative pins are held; unassigned sentinels and pins belonging
/// to disabled sections never enter the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinClaims(BTreeSet<Pin>);

impl PinClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a single pin. Negative values are ignored.
    pub fn claim(&mut self, pin: Pin) {
        if pin >= 0 {
            self.0.insert(pin);
        }
    }

    /// Claim a section's pins, but only when the section is enabled. A
    /// disabled section's pins stay free for everyone else.
    pub fn claim_section(&mut self, enabled: bool, pins: &[Pin]) {
        if enabled {
            for &pin in pins {
                self.claim(pin);
            }
        }
    }

    pub fn contains(&self, pin: Pin) -> bool {
        self.0.contains(&pin)
    }

    pub fn iter(&self) -> impl Iterator<Item = Pin> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Pin> for PinClaims {
    fn from_iter<I: IntoIterator<Item = Pin>>(iter: I) -> Self {
        let mut claims = Self::new();
        for pin in iter {
            claims.claim(pin);
        }
        claims
    }
}

/// Validate a candidate pin value against the pins other enabled sections
/// already claim.
///
/// `-1` (unassigned) is always acceptable; values outside `[-1, 29]` are a
/// range failure; in-range values already claimed elsewhere are a collision.
/// The claimed-set is not mutated.
pub fn validate_pin(candidate: Pin, claimed: &PinClaims) -> Result<(), PinError> {
    if !(PIN_UNASSIGNED..=PIN_MAX).contains(&candidate) {
        return Err(PinError::OutOfRange(candidate));
    }
    if candidate >= 0 && claimed.contains(candidate) {
        return Err(PinError::AlreadyAssigned(candidate));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_always_ok() {
        let claimed: PinClaims = [0, 1, 2].into_iter().collect();
        assert_eq!(validate_pin(-1, &claimed), Ok(()));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(validate_pin(30, &PinClaims::new()), Err(PinError::OutOfRange(30)));
        assert_eq!(validate_pin(-2, &PinClaims::new()), Err(PinError::OutOfRange(-2)));
    }

    #[test]
    fn test_collision() {
        let claimed: PinClaims = [5].into_iter().collect();
        assert_eq!(validate_pin(5, &claimed), Err(PinError::AlreadyAssigned(5)));
    }

    #[test]
    fn test_free_pin_ok() {
        let claimed: PinClaims = [6].into_iter().collect();
        assert_eq!(validate_pin(5, &claimed), Ok(()));
    }

    #[test]
    fn test_disabled_section_contributes_nothing() {
        let mut claims = PinClaims::new();
        claims.claim_section(false, &[7, 8]);
        assert!(claims.is_empty());
        claims.claim_section(true, &[7, -1]);
        assert!(claims.contains(7));
        assert_eq!(claims.len(), 1);
    }
}
