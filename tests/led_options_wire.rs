use padcore_config::buttons::ButtonId;
use padcore_config::options::{CustomThemeOptions, LedFormat, LedOptions};
use padcore_config::theme::CustomTheme;

/// A `getLedOptions` response as the device produces it.
const GET_LED_OPTIONS: &str = r#"{
    "brightnessMaximum": 255,
    "brightnessSteps": 5,
    "dataPin": 15,
    "ledFormat": 0,
    "ledLayout": 1,
    "ledsPerButton": 2,
    "ledButtonMap": {
        "Up": 3, "Down": 1, "Left": 0, "Right": 2,
        "B1": 8, "B2": 9, "B3": 4, "B4": 5,
        "L1": 7, "R1": 6, "L2": 11, "R2": 10,
        "S1": null, "S2": null, "L3": null, "R3": null,
        "A1": null, "A2": null
    },
    "useCustomLeds": 1,
    "customLeds": {
        "B1": { "normal": 65280, "pressed": 16711680 }
    },
    "usedPins": [2, 3, 4, 5]
}"#;

#[test]
fn test_decode_device_payload() {
    let options: LedOptions = serde_json::from_str(GET_LED_OPTIONS).expect("payload decodes");

    assert_eq!(options.data_pin, 15);
    assert_eq!(options.led_format, LedFormat::Grb);
    assert_eq!(options.led_button_map[&ButtonId::Left], Some(0));
    assert_eq!(options.led_button_map[&ButtonId::S1], None);
    assert_eq!(options.used_pins, vec![2, 3, 4, 5]);
    assert!(options.use_custom_leds);

    // 0x00FF00 / 0xFF0000 decode to the documented hex pair
    let theme = CustomTheme::from_wire(&options.custom_leds);
    assert_eq!(theme.pair(ButtonId::B1).normal.to_hex(), "#00ff00");
    assert_eq!(theme.pair(ButtonId::B1).pressed.to_hex(), "#ff0000");
}

#[test]
fn test_post_body_never_carries_used_pins() {
    let options: LedOptions = serde_json::from_str(GET_LED_OPTIONS).unwrap();
    let body = serde_json::to_value(&options).expect("payload serializes");
    let object = body.as_object().unwrap();

    assert!(!object.contains_key("usedPins"));
    assert_eq!(body["dataPin"], 15);
    assert_eq!(body["ledButtonMap"]["Down"], 1);
    assert_eq!(body["ledButtonMap"]["A1"], serde_json::Value::Null);
    assert_eq!(body["customLeds"]["B1"]["normal"], 65280);
}

#[test]
fn test_decoded_payload_validates_against_reported_pins() {
    let options: LedOptions = serde_json::from_str(GET_LED_OPTIONS).unwrap();
    let claimed = options.used_pins.iter().copied().collect();
    assert!(options.validate(&claimed).is_ok());
}

#[test]
fn test_custom_theme_options_shape() {
    let json = r#"{
        "hasCustomTheme": 1,
        "customTheme": { "Up": { "normal": 1193046, "pressed": 0 } }
    }"#;
    let options: CustomThemeOptions = serde_json::from_str(json).unwrap();
    assert!(options.has_custom_theme);

    let theme = CustomTheme::from_wire(&options.custom_theme);
    assert_eq!(theme.pair(ButtonId::Up).normal.to_hex(), "#123456");

    let out = CustomThemeOptions {
        has_custom_theme: options.has_custom_theme,
        custom_theme: theme.to_wire(),
    };
    let body = serde_json::to_value(&out).unwrap();
    assert_eq!(body["customTheme"]["Up"]["normal"], 0x123456);
    assert!(body["customTheme"].as_object().unwrap().contains_key("A2"));
    assert!(!body["customTheme"].as_object().unwrap().contains_key("ALL"));
}
