use chart_bands::ChartError;
use chart_bands::api::{BAND_CONFIG_JSON_SCHEMA_V1, BandConfig};
use chart_bands::extensions::BandStyle;
use chart_bands::indicators::{BandOptions, MovingAverageKind, PriceSource};
use chart_bands::render::{Color, LineStrokeStyle};
use serde_json::json;

#[test]
fn options_use_editor_field_names() {
    let value = serde_json::to_value(BandOptions::default()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "length": 20,
            "maType": "SMA",
            "source": "close",
            "stdDevMultiplier": 2.0,
            "offset": 0
        })
    );
}

#[test]
fn style_uses_hex_colors_and_lowercase_line_styles() {
    let value = serde_json::to_value(BandStyle::default()).expect("serialize");
    assert_eq!(value["middle"]["color"], "#2563eb");
    assert_eq!(value["upper"]["color"], "#16a34a");
    assert_eq!(value["lower"]["color"], "#dc2626");
    assert_eq!(value["upper"]["lineWidth"], 1);
    assert_eq!(value["upper"]["lineStyle"], "solid");
    assert_eq!(value["background"]["visible"], true);
    assert_eq!(value["background"]["opacity"], 0.1);
}

#[test]
fn editor_payload_fills_missing_fields_with_defaults() {
    let options: BandOptions =
        serde_json::from_str(r#"{"length": 14, "stdDevMultiplier": 2.5}"#).expect("options");
    assert_eq!(options.length, 14);
    assert_eq!(options.ma_type, MovingAverageKind::Simple);
    assert_eq!(options.source, PriceSource::Close);
    assert_eq!(options.offset, 0);

    let style: BandStyle = serde_json::from_str(
        r##"{"upper": {"color": "#ff0000", "lineStyle": "dashed"}, "background": {"visible": false}}"##,
    )
    .expect("style");
    assert_eq!(style.upper.color, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(style.upper.line_style, LineStrokeStyle::Dashed);
    assert!(style.upper.visible);
    assert_eq!(style.middle, BandStyle::default().middle);
    assert!(!style.background.visible);
    assert_eq!(style.background.opacity, 0.1);
}

#[test]
fn contract_v1_round_trips_and_accepts_bare_payloads() {
    let config = BandConfig::new(
        BandOptions::default().with_length(30).with_offset(-4),
        BandStyle::default(),
    );
    let wrapped = config.to_json_contract_v1_pretty().expect("contract");
    assert!(wrapped.contains(&format!("\"schema_version\": {BAND_CONFIG_JSON_SCHEMA_V1}")));
    assert_eq!(BandConfig::from_json_compat_str(&wrapped).expect("parse"), config);

    let bare = config.to_json_pretty().expect("bare");
    assert_eq!(BandConfig::from_json_compat_str(&bare).expect("parse"), config);
}

#[test]
fn contract_rejects_unknown_schema_and_garbage() {
    let payload = json!({
        "schema_version": 99,
        "config": { "options": { "length": 20, "stdDevMultiplier": 2.0 } }
    })
    .to_string();
    let err = BandConfig::from_json_compat_str(&payload).expect_err("schema");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BandConfig::from_json_compat_str("{\"unexpected\": true}").expect_err("unknown");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BandConfig::from_json_compat_str(
        r#"{"style": {"upper": {"color": "green"}}}"#,
    )
    .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn editor_clamping_is_separate_from_engine_validation() {
    let raw = BandOptions::default()
        .with_length(0)
        .with_std_dev_multiplier(f64::NAN)
        .with_offset(-75);
    assert!(raw.validate().is_err());

    let clamped = raw.clamped_for_editor();
    assert_eq!(clamped.length, 1);
    assert_eq!(clamped.std_dev_multiplier, 2.0);
    assert_eq!(clamped.offset, -50);
    assert!(clamped.validate().is_ok());
}
