use serde::{Deserialize, Serialize};

use super::{check_choice, check_range, validate_pin_fields, FieldError, PinField, ValidationError};
use crate::buttons::MaskScheme;
use crate::pins::{Pin, PinClaims, PIN_UNASSIGNED};

/// Pins usable by the analog stick add-on (ADC-capable lines only).
pub const ANALOG_PINS: [Pin; 4] = [-1, 26, 27, 28];

/// What the input-reverse add-on does to a held direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ReverseAction {
    Disable = 0,
    Enable = 1,
    Neutral = 2,
}

impl From<ReverseAction> for u8 {
    fn from(value: ReverseAction) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for ReverseAction {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ReverseAction::Disable),
            1 => Ok(ReverseAction::Enable),
            2 => Ok(ReverseAction::Neutral),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// How the dual-directional input merges with the gamepad directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DualCombineMode {
    Mixed = 0,
    Gamepad = 1,
    DualDirectional = 2,
    None = 3,
}

impl From<DualCombineMode> for u8 {
    fn from(value: DualCombineMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for DualCombineMode {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DualCombineMode::Mixed),
            1 => Ok(DualCombineMode::Gamepad),
            2 => Ok(DualCombineMode::DualDirectional),
            3 => Ok(DualCombineMode::None),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OnBoardLedMode {
    Off = 0,
    ModeIndicator = 1,
    InputTest = 2,
}

impl From<OnBoardLedMode> for u8 {
    fn from(value: OnBoardLedMode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for OnBoardLedMode {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OnBoardLedMode::Off),
            1 => Ok(OnBoardLedMode::ModeIndicator),
            2 => Ok(OnBoardLedMode::InputTest),
            other => Err(ValidationError::InvalidChoice {
                value: i64::from(other),
            }),
        }
    }
}

/// The `getAddonsOptions` / `setAddonsOptions` payload.
///
/// Each add-on has an enable flag; a disabled add-on's pins are free for
/// every other section and its fields are exempt from validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonsOptions {
    pub turbo_pin: Pin,
    #[serde(rename = "turboPinLED")]
    pub turbo_pin_led: Pin,
    pub turbo_shot_count: u8,
    #[serde(rename = "sliderLSPin")]
    pub slider_ls_pin: Pin,
    #[serde(rename = "sliderRSPin")]
    pub slider_rs_pin: Pin,
    #[serde(rename = "sliderSOCDUpPin")]
    pub slider_socd_up_pin: Pin,
    #[serde(rename = "sliderSOCDSecondPin")]
    pub slider_socd_second_pin: Pin,
    pub reverse_pin: Pin,
    #[serde(rename = "reversePinLED")]
    pub reverse_pin_led: Pin,
    pub reverse_action_up: ReverseAction,
    pub reverse_action_down: ReverseAction,
    pub reverse_action_left: ReverseAction,
    pub reverse_action_right: ReverseAction,
    #[serde(rename = "i2cAnalog1219SDAPin")]
    pub i2c_analog1219_sda_pin: Pin,
    #[serde(rename = "i2cAnalog1219SCLPin")]
    pub i2c_analog1219_scl_pin: Pin,
    pub i2c_analog1219_block: u8,
    pub i2c_analog1219_speed: u32,
    pub i2c_analog1219_address: u8,
    pub on_board_led_mode: OnBoardLedMode,
    pub dual_dir_up_pin: Pin,
    pub dual_dir_down_pin: Pin,
    pub dual_dir_left_pin: Pin,
    pub dual_dir_right_pin: Pin,
    pub dual_dir_dpad_mode: super::DpadMode,
    pub dual_dir_combine_mode: DualCombineMode,
    pub analog_adc_pin_x: Pin,
    pub analog_adc_pin_y: Pin,
    pub bootsel_button_map: u32,
    pub buzzer_pin: Pin,
    pub buzzer_volume: u8,
    pub extra_button_pin: Pin,
    pub extra_button_map: u32,
    pub player_number: u8,
    pub shmup_mode: u8,
    pub shmup_mix_mode: u8,
    #[serde(rename = "shmupAlwaysOn1")]
    pub shmup_always_on1: u32,
    #[serde(rename = "shmupAlwaysOn2")]
    pub shmup_always_on2: u32,
    #[serde(rename = "shmupAlwaysOn3")]
    pub shmup_always_on3: u32,
    #[serde(rename = "shmupAlwaysOn4")]
    pub shmup_always_on4: u32,
    #[serde(rename = "pinShmupBtn1")]
    pub pin_shmup_btn1: Pin,
    #[serde(rename = "pinShmupBtn2")]
    pub pin_shmup_btn2: Pin,
    #[serde(rename = "pinShmupBtn3")]
    pub pin_shmup_btn3: Pin,
    #[serde(rename = "pinShmupBtn4")]
    pub pin_shmup_btn4: Pin,
    #[serde(rename = "shmupBtnMask1")]
    pub shmup_btn_mask1: u32,
    #[serde(rename = "shmupBtnMask2")]
    pub shmup_btn_mask2: u32,
    #[serde(rename = "shmupBtnMask3")]
    pub shmup_btn_mask3: u32,
    #[serde(rename = "shmupBtnMask4")]
    pub shmup_btn_mask4: u32,
    pub pin_shmup_dial: Pin,
    #[serde(rename = "AnalogInputEnabled", with = "super::int_bool")]
    pub analog_input_enabled: bool,
    #[serde(rename = "BoardLedAddonEnabled", with = "super::int_bool")]
    pub board_led_addon_enabled: bool,
    #[serde(rename = "BuzzerSpeakerAddonEnabled", with = "super::int_bool")]
    pub buzzer_speaker_addon_enabled: bool,
    #[serde(rename = "BootselButtonAddonEnabled", with = "super::int_bool")]
    pub bootsel_button_addon_enabled: bool,
    #[serde(rename = "DualDirectionalInputEnabled", with = "super::int_bool")]
    pub dual_directional_input_enabled: bool,
    #[serde(rename = "ExtraButtonAddonEnabled", with = "super::int_bool")]
    pub extra_button_addon_enabled: bool,
    #[serde(rename = "I2CAnalog1219InputEnabled", with = "super::int_bool")]
    pub i2c_analog1219_input_enabled: bool,
    #[serde(rename = "JSliderInputEnabled", with = "super::int_bool")]
    pub jslider_input_enabled: bool,
    #[serde(rename = "PlayerNumAddonEnabled", with = "super::int_bool")]
    pub player_num_addon_enabled: bool,
    #[serde(rename = "ReverseInputEnabled", with = "super::int_bool")]
    pub reverse_input_enabled: bool,
    #[serde(rename = "TurboInputEnabled", with = "super::int_bool")]
    pub turbo_input_enabled: bool,
    #[serde(default, skip_serializing)]
    pub used_pins: Vec<Pin>,
}

impl Default for AddonsOptions {
    fn default() -> Self {
        Self {
            turbo_pin: PIN_UNASSIGNED,
            turbo_pin_led: PIN_UNASSIGNED,
            turbo_shot_count: 5,
            slider_ls_pin: PIN_UNASSIGNED,
            slider_rs_pin: PIN_UNASSIGNED,
            slider_socd_up_pin: PIN_UNASSIGNED,
            slider_socd_second_pin: PIN_UNASSIGNED,
            reverse_pin: PIN_UNASSIGNED,
            reverse_pin_led: PIN_UNASSIGNED,
            reverse_action_up: ReverseAction::Enable,
            reverse_action_down: ReverseAction::Enable,
            reverse_action_left: ReverseAction::Enable,
            reverse_action_right: ReverseAction::Enable,
            i2c_analog1219_sda_pin: PIN_UNASSIGNED,
            i2c_analog1219_scl_pin: PIN_UNASSIGNED,
            i2c_analog1219_block: 0,
            i2c_analog1219_speed: 400_000,
            i2c_analog1219_address: 0x40,
            on_board_led_mode: OnBoardLedMode::Off,
            dual_dir_up_pin: PIN_UNASSIGNED,
            dual_dir_down_pin: PIN_UNASSIGNED,
            dual_dir_left_pin: PIN_UNASSIGNED,
            dual_dir_right_pin: PIN_UNASSIGNED,
            dual_dir_dpad_mode: super::DpadMode::Digital,
            dual_dir_combine_mode: DualCombineMode::Mixed,
            analog_adc_pin_x: PIN_UNASSIGNED,
            analog_adc_pin_y: PIN_UNASSIGNED,
            bootsel_button_map: 0,
            buzzer_pin: PIN_UNASSIGNED,
            buzzer_volume: 100,
            extra_button_pin: PIN_UNASSIGNED,
            extra_button_map: 0,
            player_number: 1,
            shmup_mode: 0,
            shmup_mix_mode: 0,
            shmup_always_on1: 0,
            shmup_always_on2: 0,
            shmup_always_on3: 0,
            shmup_always_on4: 0,
            pin_shmup_btn1: PIN_UNASSIGNED,
            pin_shmup_btn2: PIN_UNASSIGNED,
            pin_shmup_btn3: PIN_UNASSIGNED,
            pin_shmup_btn4: PIN_UNASSIGNED,
            shmup_btn_mask1: 0,
            shmup_btn_mask2: 0,
            shmup_btn_mask3: 0,
            shmup_btn_mask4: 0,
            pin_shmup_dial: PIN_UNASSIGNED,
            analog_input_enabled: false,
            board_led_addon_enabled: false,
            buzzer_speaker_addon_enabled: false,
            bootsel_button_addon_enabled: false,
            dual_directional_input_enabled: false,
            extra_button_addon_enabled: false,
            i2c_analog1219_input_enabled: false,
            jslider_input_enabled: false,
            player_num_addon_enabled: false,
            reverse_input_enabled: false,
            turbo_input_enabled: false,
            used_pins: Vec::new(),
        }
    }
}

impl AddonsOptions {
    fn pin_fields(&self) -> Vec<PinField> {
        vec![
            PinField::new("turboPin", self.turbo_pin, self.turbo_input_enabled),
            PinField::new("turboPinLED", self.turbo_pin_led, self.turbo_input_enabled),
            PinField::new("pinShmupBtn1", self.pin_shmup_btn1, self.turbo_input_enabled),
            PinField::new("pinShmupBtn2", self.pin_shmup_btn2, self.turbo_input_enabled),
            PinField::new("pinShmupBtn3", self.pin_shmup_btn3, self.turbo_input_enabled),
            PinField::new("pinShmupBtn4", self.pin_shmup_btn4, self.turbo_input_enabled),
            PinField::new("pinShmupDial", self.pin_shmup_dial, self.turbo_input_enabled),
            PinField::new("sliderLSPin", self.slider_ls_pin, self.jslider_input_enabled),
            PinField::new("sliderRSPin", self.slider_rs_pin, self.jslider_input_enabled),
            PinField::new(
                "sliderSOCDUpPin",
                self.slider_socd_up_pin,
                self.jslider_input_enabled,
            ),
            PinField::new(
                "sliderSOCDSecondPin",
                self.slider_socd_second_pin,
                self.jslider_input_enabled,
            ),
            PinField::new("reversePin", self.reverse_pin, self.reverse_input_enabled),
            PinField::new(
                "reversePinLED",
                self.reverse_pin_led,
                self.reverse_input_enabled,
            ),
            PinField::new(
                "i2cAnalog1219SDAPin",
                self.i2c_analog1219_sda_pin,
                self.i2c_analog1219_input_enabled,
            ),
            PinField::new(
                "i2cAnalog1219SCLPin",
                self.i2c_analog1219_scl_pin,
                self.i2c_analog1219_input_enabled,
            ),
            PinField::new(
                "dualDirUpPin",
                self.dual_dir_up_pin,
                self.dual_directional_input_enabled,
            ),
            PinField::new(
                "dualDirDownPin",
                self.dual_dir_down_pin,
                self.dual_directional_input_enabled,
            ),
            PinField::new(
                "dualDirLeftPin",
                self.dual_dir_left_pin,
                self.dual_directional_input_enabled,
            ),
            PinField::new(
                "dualDirRightPin",
                self.dual_dir_right_pin,
                self.dual_directional_input_enabled,
            ),
            PinField::new(
                "analogAdcPinX",
                self.analog_adc_pin_x,
                self.analog_input_enabled,
            ),
            PinField::new(
                "analogAdcPinY",
                self.analog_adc_pin_y,
                self.analog_input_enabled,
            ),
            PinField::new("buzzerPin", self.buzzer_pin, self.buzzer_speaker_addon_enabled),
            PinField::new(
                "extraButtonPin",
                self.extra_button_pin,
                self.extra_button_addon_enabled,
            ),
        ]
    }

    /// Pins occupied by the enabled add-ons.
    pub fn claimed_pins(&self) -> Vec<Pin> {
        let mut claims = PinClaims::new();
        for field in self.pin_fields() {
            if field.enabled {
                claims.claim(field.pin);
            }
        }
        claims.iter().collect()
    }

    /// Validate against the pins claimed by other option groups. The mask
    /// scheme matches the connected device's firmware revision.
    pub fn validate(
        &self,
        claimed: &PinClaims,
        scheme: MaskScheme,
    ) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        validate_pin_fields(&self.pin_fields(), claimed, &mut errors);

        check_range(
            &mut errors,
            "turboShotCount",
            i64::from(self.turbo_shot_count),
            5,
            30,
        );
        check_range(
            &mut errors,
            "i2cAnalog1219Block",
            i64::from(self.i2c_analog1219_block),
            0,
            1,
        );
        check_range(&mut errors, "buzzerVolume", i64::from(self.buzzer_volume), 0, 100);
        check_range(&mut errors, "playerNumber", i64::from(self.player_number), 1, 4);
        check_range(&mut errors, "shmupMixMode", i64::from(self.shmup_mix_mode), 0, 1);

        if self.analog_input_enabled {
            check_choice(
                &mut errors,
                "analogAdcPinX",
                i64::from(self.analog_adc_pin_x),
                ANALOG_PINS.contains(&self.analog_adc_pin_x),
            );
            check_choice(
                &mut errors,
                "analogAdcPinY",
                i64::from(self.analog_adc_pin_y),
                ANALOG_PINS.contains(&self.analog_adc_pin_y),
            );
        }
        if self.bootsel_button_addon_enabled {
            check_choice(
                &mut errors,
                "bootselButtonMap",
                i64::from(self.bootsel_button_map),
                scheme.is_button_mask(self.bootsel_button_map),
            );
        }
        if self.extra_button_addon_enabled {
            check_choice(
                &mut errors,
                "extraButtonMap",
                i64::from(self.extra_button_map),
                scheme.is_button_mask(self.extra_button_map),
            );
        }
        if self.turbo_input_enabled {
            for (field, mask) in [
                ("shmupBtnMask1", self.shmup_btn_mask1),
                ("shmupBtnMask2", self.shmup_btn_mask2),
                ("shmupBtnMask3", self.shmup_btn_mask3),
                ("shmupBtnMask4", self.shmup_btn_mask4),
                ("shmupAlwaysOn1", self.shmup_always_on1),
                ("shmupAlwaysOn2", self.shmup_always_on2),
                ("shmupAlwaysOn3", self.shmup_always_on3),
                ("shmupAlwaysOn4", self.shmup_always_on4),
            ] {
                check_choice(
                    &mut errors,
                    field,
                    i64::from(mask),
                    scheme.is_button_mask(mask),
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = AddonsOptions::default();
        assert!(options.validate(&PinClaims::new(), MaskScheme::Rev1).is_ok());
        assert!(options.claimed_pins().is_empty());
    }

    #[test]
    fn test_disabled_addon_pins_stay_free() {
        let mut options = AddonsOptions::default();
        options.turbo_pin = 10;
        // turbo disabled: 10 is not claimed and not validated
        assert!(options.claimed_pins().is_empty());
        let claimed: PinClaims = [10].into_iter().collect();
        assert!(options.validate(&claimed, MaskScheme::Rev1).is_ok());
    }

    #[test]
    fn test_enabled_addon_collides_with_claimed_pin() {
        let mut options = AddonsOptions::default();
        options.turbo_input_enabled = true;
        options.turbo_pin = 10;
        assert_eq!(options.claimed_pins(), vec![10]);

        let claimed: PinClaims = [10].into_iter().collect();
        let errors = options.validate(&claimed, MaskScheme::Rev1).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "turboPin"));
    }

    #[test]
    fn test_two_addons_sharing_a_pin_both_error() {
        let mut options = AddonsOptions::default();
        options.reverse_input_enabled = true;
        options.reverse_pin = 4;
        options.buzzer_speaker_addon_enabled = true;
        options.buzzer_pin = 4;

        let errors = options.validate(&PinClaims::new(), MaskScheme::Rev1).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"reversePin"));
        assert!(fields.contains(&"buzzerPin"));
    }

    #[test]
    fn test_analog_pins_restricted_to_adc_lines() {
        let mut options = AddonsOptions::default();
        options.analog_input_enabled = true;
        options.analog_adc_pin_x = 5; // in pin range, but not ADC-capable
        options.analog_adc_pin_y = 26;

        let errors = options.validate(&PinClaims::new(), MaskScheme::Rev1).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "analogAdcPinX");
    }

    #[test]
    fn test_bootsel_mask_checked_against_scheme() {
        let mut options = AddonsOptions::default();
        options.bootsel_button_addon_enabled = true;
        options.bootsel_button_map = 1 << 19; // Right in Rev2, invalid in Rev1

        assert!(options.validate(&PinClaims::new(), MaskScheme::Rev2).is_ok());
        assert!(options.validate(&PinClaims::new(), MaskScheme::Rev1).is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let options = AddonsOptions::default();
        let value = serde_json::to_value(&options).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "turboPinLED",
            "sliderSOCDUpPin",
            "i2cAnalog1219SDAPin",
            "TurboInputEnabled",
            "JSliderInputEnabled",
            "bootselButtonMap",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert!(!object.contains_key("usedPins"));
    }
}
