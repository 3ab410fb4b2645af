use chart_bands::ChartError;
use chart_bands::core::{
    Candle, VisibleRange, validate_candle_order, validate_candle_sequence,
    visible_range_for_time_window,
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

#[test]
fn candle_validation_enforces_ohlc_invariants() {
    assert!(Candle::new(0, 10.0, 12.0, 9.0, 11.0, 5).validate().is_ok());

    for candle in [
        Candle::new(0, 10.0, 9.0, 12.0, 10.0, 5),
        Candle::new(0, 13.0, 12.0, 9.0, 11.0, 5),
        Candle::new(0, 10.0, 12.0, 9.0, f64::NAN, 5),
    ] {
        let err = candle.validate().expect_err("invalid candle");
        assert!(matches!(err, ChartError::InvalidData(_)));
    }
}

#[test]
fn sequence_requires_strictly_increasing_timestamps() {
    let a = Candle::new(1_000, 10.0, 11.0, 9.0, 10.5, 1);
    let b = Candle::new(2_000, 10.5, 11.0, 10.0, 10.8, 1);
    assert!(validate_candle_sequence(&[]).is_ok());
    assert!(validate_candle_sequence(&[a, b]).is_ok());
    assert!(validate_candle_sequence(&[b, a]).is_err());
    assert!(validate_candle_sequence(&[a, a]).is_err());
}

#[test]
fn order_check_ignores_malformed_prices() {
    let a = Candle::new(1_000, 10.0, 11.0, 9.0, f64::NAN, 1);
    let b = Candle::new(2_000, 10.5, 11.0, 10.0, 20.0, 1);
    assert!(validate_candle_order(&[a, b]).is_ok());
    assert!(validate_candle_sequence(&[a, b]).is_err());
    assert!(validate_candle_order(&[b, a]).is_err());
}

#[test]
fn decimal_constructor_converts_time_to_unix_millis() {
    let time = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).single().expect("time");
    let candle = Candle::from_decimal_time(
        time,
        Decimal::new(15_000, 2),
        Decimal::new(15_250, 2),
        Decimal::new(14_900, 2),
        Decimal::new(15_125, 2),
        1_500_000,
    )
    .expect("candle");

    assert_eq!(candle.timestamp, time.timestamp_millis());
    assert_eq!(candle.close, 151.25);
    assert_eq!(candle.time(), Some(time));

    let err = Candle::from_decimal_time(
        time,
        Decimal::new(150, 0),
        Decimal::new(140, 0),
        Decimal::new(145, 0),
        Decimal::new(150, 0),
        0,
    )
    .expect_err("low above high");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn time_window_maps_to_half_open_index_range() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| Candle::new(i * 100, 1.0, 1.0, 1.0, 1.0, 0))
        .collect();

    assert_eq!(
        visible_range_for_time_window(&candles, 200, 500),
        VisibleRange::new(2, 6)
    );
    assert_eq!(
        visible_range_for_time_window(&candles, 550, 150),
        VisibleRange::new(2, 6)
    );
    assert_eq!(
        visible_range_for_time_window(&candles, 5_000, 6_000),
        VisibleRange::new(10, 10)
    );
    assert!(visible_range_for_time_window(&[], 0, 100).is_empty());
}

#[test]
fn visible_range_clamps_and_normalizes() {
    assert!(VisibleRange::new(5, 2).is_empty());
    assert_eq!(VisibleRange::new(5, 2).from, 5);
    assert_eq!(VisibleRange::new(3, 20).clamp_to(10), VisibleRange::new(3, 10));
    assert_eq!(VisibleRange::new(12, 20).clamp_to(10), VisibleRange::new(10, 10));
    assert_eq!(VisibleRange::full(4).indices().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}
