use padcore_config::buttons::MaskScheme;
use padcore_config::options::AddonsOptions;
use padcore_config::pins::PinClaims;

/// A `getAddonsOptions` response as the device produces it.
const GET_ADDONS_OPTIONS: &str = r#"{
    "turboPin": -1,
    "turboPinLED": -1,
    "sliderLSPin": -1,
    "sliderRSPin": -1,
    "sliderSOCDUpPin": -1,
    "sliderSOCDSecondPin": -1,
    "turboShotCount": 20,
    "reversePin": -1,
    "reversePinLED": -1,
    "reverseActionUp": 1,
    "reverseActionDown": 1,
    "reverseActionLeft": 1,
    "reverseActionRight": 1,
    "i2cAnalog1219SDAPin": -1,
    "i2cAnalog1219SCLPin": -1,
    "i2cAnalog1219Block": 0,
    "i2cAnalog1219Speed": 400000,
    "i2cAnalog1219Address": 64,
    "onBoardLedMode": 0,
    "dualDirUpPin": -1,
    "dualDirDownPin": -1,
    "dualDirLeftPin": -1,
    "dualDirRightPin": -1,
    "dualDirDpadMode": 0,
    "dualDirCombineMode": 0,
    "analogAdcPinX": -1,
    "analogAdcPinY": -1,
    "bootselButtonMap": 0,
    "buzzerPin": -1,
    "buzzerVolume": 100,
    "extraButtonPin": -1,
    "extraButtonMap": 0,
    "playerNumber": 1,
    "shmupMode": 0,
    "shmupMixMode": 0,
    "shmupAlwaysOn1": 0,
    "shmupAlwaysOn2": 0,
    "shmupAlwaysOn3": 0,
    "shmupAlwaysOn4": 0,
    "pinShmupBtn1": -1,
    "pinShmupBtn2": -1,
    "pinShmupBtn3": -1,
    "pinShmupBtn4": -1,
    "shmupBtnMask1": 0,
    "shmupBtnMask2": 0,
    "shmupBtnMask3": 0,
    "shmupBtnMask4": 0,
    "pinShmupDial": -1,
    "AnalogInputEnabled": 1,
    "BoardLedAddonEnabled": 1,
    "BuzzerSpeakerAddonEnabled": 1,
    "BootselButtonAddonEnabled": 1,
    "DualDirectionalInputEnabled": 1,
    "ExtraButtonAddonEnabled": 1,
    "I2CAnalog1219InputEnabled": 1,
    "JSliderInputEnabled": 1,
    "PlayerNumAddonEnabled": 1,
    "ReverseInputEnabled": 1,
    "TurboInputEnabled": 1,
    "usedPins": [6, 7]
}"#;

#[test]
fn test_decode_device_payload() {
    let options: AddonsOptions =
        serde_json::from_str(GET_ADDONS_OPTIONS).expect("payload decodes");

    assert!(options.turbo_input_enabled);
    assert_eq!(options.turbo_shot_count, 20);
    assert_eq!(options.i2c_analog1219_address, 0x40);
    assert_eq!(options.used_pins, vec![6, 7]);

    // everything enabled, but every pin unassigned: nothing claimed
    assert!(options.claimed_pins().is_empty());
    let claimed: PinClaims = options.used_pins.iter().copied().collect();
    assert!(options.validate(&claimed, MaskScheme::Rev1).is_ok());
}

#[test]
fn test_reencode_keeps_wire_names_and_strips_used_pins() {
    let options: AddonsOptions = serde_json::from_str(GET_ADDONS_OPTIONS).unwrap();
    let body = serde_json::to_value(&options).unwrap();
    let object = body.as_object().unwrap();

    assert!(!object.contains_key("usedPins"));
    assert_eq!(body["TurboInputEnabled"], 1);
    assert_eq!(body["turboPinLED"], -1);
    assert_eq!(body["reverseActionUp"], 1);
    assert_eq!(body["dualDirCombineMode"], 0);
}

#[test]
fn test_slider_pins_ride_the_jslider_flag() {
    let mut options: AddonsOptions = serde_json::from_str(GET_ADDONS_OPTIONS).unwrap();
    options.slider_ls_pin = 8;
    options.slider_socd_up_pin = 8;

    let errors = options.validate(&PinClaims::new(), MaskScheme::Rev1).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"sliderLSPin"));
    assert!(fields.contains(&"sliderSOCDUpPin"));

    options.jslider_input_enabled = false;
    assert!(options.validate(&PinClaims::new(), MaskScheme::Rev1).is_ok());
}
