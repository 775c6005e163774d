use super::*;

#[test]
fn missing_keys_take_defaults() {
    let s = Settings::from_json_str(r#"{ "colorThreshold": 5, "plotSaturation": true }"#).unwrap();
    assert_eq!(s.color_threshold, 5.0);
    assert!(s.plot_saturation);
    assert_eq!(s.canvas_size, 500);
    assert_eq!(s.color_circle_max_size, 15.0);
    assert!(s.show_color_connections);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = Settings::from_json_str(r#"{ "colourThreshold": 5 }"#).unwrap_err();
    assert!(matches!(err, PlotError::Serde(_)));
}

#[test]
fn out_of_range_values_fail_validation() {
    for json in [
        r#"{ "canvasSize": 0 }"#,
        r#"{ "canvasSize": 70000 }"#,
        r#"{ "colorThreshold": 101 }"#,
        r#"{ "colorCircleMaxSize": -1 }"#,
        r#"{ "ticksAlpha": 2 }"#,
    ] {
        let err = Settings::from_json_str(json).unwrap_err();
        assert!(matches!(err, PlotError::Validation(_)), "{json}");
    }
}

#[test]
fn visibility_is_strictly_above_threshold() {
    let s = Settings {
        color_threshold: 5.0,
        ..Settings::default()
    };
    assert!(!s.is_visible(0.02));
    assert!(!s.is_visible(0.05));
    assert!(s.is_visible(0.06));
    assert!(!Settings::default().is_visible(0.0));
}

#[test]
fn shared_settings_writes_are_seen_by_every_clone() {
    let a = SharedSettings::new(Settings::default());
    let b = a.clone();
    a.update(|s| s.plot_lightness = true);
    assert!(b.borrow().plot_lightness);
    let old = b.replace(Settings::default());
    assert!(old.plot_lightness);
    assert!(!a.snapshot().plot_lightness);
}

#[test]
fn camel_case_round_trip() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"showColorConnections\":true"));
    assert!(json.contains("\"screenshotCircleSize\":2.0"));
}
