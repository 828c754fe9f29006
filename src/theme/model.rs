use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use crate::buttons::ButtonId;

/// Which of the two per-button colors an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Normal,
    Pressed,
}

/// Target of a color edit: one button, or the "set all" control that fans
/// the write out to every button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Single(ButtonId),
    All,
}

/// Editable normal/pressed color pair. Defaults to black/black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorPair {
    pub normal: Rgb,
    pub pressed: Rgb,
}

impl ColorPair {
    pub fn get(&self, channel: Channel) -> Rgb {
        match channel {
            Channel::Normal => self.normal,
            Channel::Pressed => self.pressed,
        }
    }

    fn set(&mut self, channel: Channel, color: Rgb) {
        match channel {
            Channel::Normal => self.normal = color,
            Channel::Pressed => self.pressed = color,
        }
    }
}

/// Color pair as the device sends it: packed 24-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireColorPair {
    pub normal: u32,
    pub pressed: u32,
}

/// The `customLeds` wire map. Never contains a synthetic "all" entry.
pub type WireTheme = BTreeMap<ButtonId, WireColorPair>;

/// Button-to-LED-index assignment; `None` means the button has no LED.
pub type LedAssignment = BTreeMap<ButtonId, Option<u32>>;

/// In-memory custom LED theme being edited.
///
/// Every real button always has an entry. The "all" pseudo-entry backs the
/// mass-assign control; it lives outside the button map and is never
/// serialized to the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomTheme {
    buttons: BTreeMap<ButtonId, ColorPair>,
    all: ColorPair,
}

impl Default for CustomTheme {
    fn default() -> Self {
        Self {
            buttons: ButtonId::ALL
                .iter()
                .map(|&b| (b, ColorPair::default()))
                .collect(),
            all: ColorPair::default(),
        }
    }
}

impl CustomTheme {
    /// Decode a device payload. Buttons missing from the payload come up
    /// black, and the "all" entry always starts black, so loading the same
    /// payload twice yields the same model.
    pub fn from_wire(wire: &WireTheme) -> Self {
        let buttons = ButtonId::ALL
            .iter()
            .map(|&button| {
                let pair = wire
                    .get(&button)
                    .map(|w| ColorPair {
                        normal: Rgb::from_packed(w.normal),
                        pressed: Rgb::from_packed(w.pressed),
                    })
                    .unwrap_or_default();
                (button, pair)
            })
            .collect();

        Self {
            buttons,
            all: ColorPair::default(),
        }
    }

    /// Encode for transmission. Inverse of [`CustomTheme::from_wire`]; the
    /// "all" pseudo-entry is not part of the output.
    pub fn to_wire(&self) -> WireTheme {
        self.buttons
            .iter()
            .map(|(&button, pair)| {
                (
                    button,
                    WireColorPair {
                        normal: pair.normal.packed(),
                        pressed: pair.pressed.packed(),
                    },
                )
            })
            .collect()
    }

    /// Write a color. `Target::All` fans the write out to every real button
    /// and records it on the pseudo-entry so the mass-assign control shows
    /// the last value applied.
    pub fn set_color(&mut self, target: Target, channel: Channel, color: Rgb) {
        match target {
            Target::Single(button) => {
                self.buttons.entry(button).or_default().set(channel, color);
            }
            Target::All => {
                for pair in self.buttons.values_mut() {
                    pair.set(channel, color);
                }
                self.all.set(channel, color);
            }
        }
    }

    /// Reset every color, both channels, to black. Idempotent.
    pub fn clear_all(&mut self) {
        for pair in self.buttons.values_mut() {
            *pair = ColorPair::default();
        }
        self.all = ColorPair::default();
    }

    pub fn color(&self, target: Target, channel: Channel) -> Rgb {
        match target {
            Target::Single(button) => self
                .buttons
                .get(&button)
                .copied()
                .unwrap_or_default()
                .get(channel),
            Target::All => self.all.get(channel),
        }
    }

    pub fn pair(&self, button: ButtonId) -> ColorPair {
        self.buttons.get(&button).copied().unwrap_or_default()
    }
}

/// Build the LED assignment from the user's drag-and-drop result: each
/// button in `assigned` gets its 0-based position, every other button maps
/// to `None`. List order is authoritative.
pub fn assign_led_order(assigned: &[ButtonId]) -> LedAssignment {
    let mut map: LedAssignment = ButtonId::ALL.iter().map(|&b| (b, None)).collect();
    for (index, &button) in assigned.iter().enumerate() {
        map.insert(button, Some(index as u32));
    }
    map
}

/// Split an assignment into the two UI lists: unassigned buttons in
/// canonical order, assigned buttons ordered by LED index.
pub fn split_assignment(assignment: &LedAssignment) -> (Vec<ButtonId>, Vec<ButtonId>) {
    let unassigned = ButtonId::ALL
        .iter()
        .copied()
        .filter(|b| !matches!(assignment.get(b), Some(Some(_))))
        .collect();

    let mut assigned: Vec<(u32, ButtonId)> = assignment
        .iter()
        .filter_map(|(&button, index)| index.map(|i| (i, button)))
        .collect();
    assigned.sort_by_key(|&(index, _)| index);

    (unassigned, assigned.into_iter().map(|(_, b)| b).collect())
}

/// Whether assigned indices are unique and contiguous from zero.
pub fn is_contiguous_assignment(assignment: &LedAssignment) -> bool {
    let mut indices: Vec<u32> = assignment.values().filter_map(|&i| i).collect();
    indices.sort_unstable();
    indices.iter().enumerate().all(|(i, &v)| v == i as u32)
}
