pub mod masks;

pub use masks::{HotkeyAction, MaskScheme, HOTKEY_MASKS};

use serde::{Deserialize, Serialize};

/// Logical input names fixed by firmware capability.
///
/// Every per-button mapping (pins, key codes, LED indices, LED colors) is
/// keyed by this set. The declaration order is the canonical order used on
/// the wire and in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ButtonId {
    Up,
    Down,
    Left,
    Right,
    B1,
    B2,
    B3,
    B4,
    L1,
    R1,
    L2,
    R2,
    S1,
    S2,
    L3,
    R3,
    A1,
    A2,
}

impl ButtonId {
    /// All buttons in canonical order.
    pub const ALL: [ButtonId; 18] = [
        ButtonId::Up,
        ButtonId::Down,
        ButtonId::Left,
        ButtonId::Right,
        ButtonId::B1,
        ButtonId::B2,
        ButtonId::B3,
        ButtonId::B4,
        ButtonId::L1,
        ButtonId::R1,
        ButtonId::L2,
        ButtonId::R2,
        ButtonId::S1,
        ButtonId::S2,
        ButtonId::L3,
        ButtonId::R3,
        ButtonId::A1,
        ButtonId::A2,
    ];

    /// Wire name of the button, identical to the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            ButtonId::Up => "Up",
            ButtonId::Down => "Down",
            ButtonId::Left => "Left",
            ButtonId::Right => "Right",
            ButtonId::B1 => "B1",
            ButtonId::B2 => "B2",
            ButtonId::B3 => "B3",
            ButtonId::B4 => "B4",
            ButtonId::L1 => "L1",
            ButtonId::R1 => "R1",
            ButtonId::L2 => "L2",
            ButtonId::R2 => "R2",
            ButtonId::S1 => "S1",
            ButtonId::S2 => "S2",
            ButtonId::L3 => "L3",
            ButtonId::R3 => "R3",
            ButtonId::A1 => "A1",
            ButtonId::A2 => "A2",
        }
    }

    /// Display label under the given vocabulary.
    pub fn label(self, vocabulary: LabelVocabulary) -> &'static str {
        vocabulary.label_for(self)
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Button-label vocabulary chosen by the user and kept across sessions.
///
/// The firmware names are always the wire identity; the vocabulary only
/// affects what is shown next to a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelVocabulary {
    /// Raw firmware names (Up, B1, S2, ...).
    #[default]
    Padcore,
    XInput,
    Switch,
    Arcade,
}

impl LabelVocabulary {
    pub fn label_for(self, button: ButtonId) -> &'static str {
        match self {
            LabelVocabulary::Padcore => button.name(),
            LabelVocabulary::XInput => match button {
                ButtonId::B1 => "A",
                ButtonId::B2 => "B",
                ButtonId::B3 => "X",
                ButtonId::B4 => "Y",
                ButtonId::L1 => "LB",
                ButtonId::R1 => "RB",
                ButtonId::L2 => "LT",
                ButtonId::R2 => "RT",
                ButtonId::S1 => "Back",
                ButtonId::S2 => "Start",
                ButtonId::L3 => "LS",
                ButtonId::R3 => "RS",
                ButtonId::A1 => "Guide",
                other => other.name(),
            },
            LabelVocabulary::Switch => match button {
                ButtonId::B1 => "B",
                ButtonId::B2 => "A",
                ButtonId::B3 => "Y",
                ButtonId::B4 => "X",
                ButtonId::L1 => "L",
                ButtonId::R1 => "R",
                ButtonId::L2 => "ZL",
                ButtonId::R2 => "ZR",
                ButtonId::S1 => "Minus",
                ButtonId::S2 => "Plus",
                ButtonId::L3 => "LS",
                ButtonId::R3 => "RS",
                ButtonId::A1 => "Home",
                ButtonId::A2 => "Capture",
                other => other.name(),
            },
            LabelVocabulary::Arcade => match button {
                ButtonId::B1 => "K1",
                ButtonId::B2 => "K2",
                ButtonId::B3 => "P1",
                ButtonId::B4 => "P2",
                ButtonId::L1 => "P4",
                ButtonId::R1 => "P3",
                ButtonId::L2 => "K4",
                ButtonId::R2 => "K3",
                ButtonId::S1 => "Select",
                ButtonId::S2 => "Start",
                other => other.name(),
            },
        }
    }
}
