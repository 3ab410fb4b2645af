use approx::assert_relative_eq;
use chart_bands::ChartError;
use chart_bands::core::Candle;
use chart_bands::indicators::{
    BandKind, BandOptions, apply_offset, compute_bollinger_bands, population_std_dev,
    simple_moving_average,
};

const DAY_MS: i64 = 86_400_000;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let open = if close.is_finite() { *close } else { 100.0 };
            Candle::new(
                i as i64 * DAY_MS,
                open,
                open + 1.0,
                open - 1.0,
                *close,
                1_000,
            )
        })
        .collect()
}

fn ramp(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + 2.0 * i as f64).collect()
}

#[test]
fn constant_closes_collapse_bands_onto_basis() {
    let candles = candles_from_closes(&[100.0; 25]);
    let options = BandOptions::default()
        .with_length(20)
        .with_std_dev_multiplier(2.0);
    let series = compute_bollinger_bands(&candles, options).expect("compute");

    assert_eq!(series.len(), 25);
    for i in 0..19 {
        assert!(series.middle()[i].is_nan(), "index {i} must be undefined");
        assert!(series.upper()[i].is_nan());
        assert!(series.lower()[i].is_nan());
    }
    for i in 19..25 {
        assert_eq!(series.upper()[i], 100.0);
        assert_eq!(series.middle()[i], 100.0);
        assert_eq!(series.lower()[i], 100.0);
    }
}

#[test]
fn linear_ramp_matches_closed_form_window_statistics() {
    let candles = candles_from_closes(&ramp(12));
    let options = BandOptions::default()
        .with_length(5)
        .with_std_dev_multiplier(2.0);
    let series = compute_bollinger_bands(&candles, options).expect("compute");

    // mean of 100, 102, 104, 106, 108
    assert_relative_eq!(series.middle()[4], 104.0, epsilon = 1e-12);
    let std_dev = 8.0_f64.sqrt();
    assert_relative_eq!(series.upper()[4], 104.0 + 2.0 * std_dev, epsilon = 1e-9);
    assert_relative_eq!(series.lower()[4], 104.0 - 2.0 * std_dev, epsilon = 1e-9);

    let deviations = population_std_dev(&ramp(12), 5);
    for value in &deviations[4..] {
        assert_relative_eq!(*value, 2.828_427_124_746_19, epsilon = 1e-9);
    }
}

#[test]
fn positive_offset_moves_values_later_and_clears_the_tail() {
    let candles = candles_from_closes(&ramp(15));
    let base = BandOptions::default().with_length(5);
    let plain = compute_bollinger_bands(&candles, base).expect("plain");
    let shifted = compute_bollinger_bands(&candles, base.with_offset(3)).expect("shifted");

    assert_eq!(shifted.len(), 15);
    for kind in BandKind::DRAW_ORDER {
        let before = plain.band(kind);
        let after = shifted.band(kind);
        for i in 0..3 {
            assert!(after[i].is_nan(), "{kind:?} leading slot {i}");
        }
        for i in 3..15 {
            assert_eq!(after[i].to_bits(), before[i - 3].to_bits(), "{kind:?} at {i}");
        }
    }
    // Final three pre-offset values are shifted out of range; nothing of them survives.
    assert_eq!(shifted.middle()[14], plain.middle()[11]);
}

#[test]
fn negative_offset_moves_values_earlier_and_clears_the_end() {
    let candles = candles_from_closes(&ramp(10));
    let options = BandOptions::default().with_length(3).with_offset(-2);
    let plain = compute_bollinger_bands(&candles, options.with_offset(0)).expect("plain");
    let shifted = compute_bollinger_bands(&candles, options).expect("shifted");

    assert!(shifted.middle()[0].is_finite());
    assert_eq!(shifted.middle()[0], plain.middle()[2]);
    assert_eq!(shifted.middle()[7], plain.middle()[9]);
    assert!(shifted.middle()[8].is_nan());
    assert!(shifted.middle()[9].is_nan());
}

#[test]
fn offset_is_applied_after_computing_on_unshifted_data() {
    let closes = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let candles = candles_from_closes(&closes);
    let series =
        compute_bollinger_bands(&candles, BandOptions::default().with_length(2).with_offset(1))
            .expect("compute");

    // The first defined window (1, 2) lands on index 2.
    assert!(series.middle()[1].is_nan());
    assert_eq!(series.middle()[2], 1.5);
    assert_eq!(series.middle()[5], 4.5);
}

#[test]
fn nan_close_poisons_every_window_containing_it() {
    let mut closes = ramp(30);
    closes[10] = f64::NAN;
    let candles = candles_from_closes(&closes);
    let series =
        compute_bollinger_bands(&candles, BandOptions::default().with_length(5)).expect("compute");

    for i in 4..30 {
        let poisoned = (10..=14).contains(&i);
        for kind in BandKind::DRAW_ORDER {
            assert_eq!(
                series.band(kind)[i].is_nan(),
                poisoned,
                "{kind:?} at index {i}"
            );
        }
    }
    assert_relative_eq!(series.middle()[9], 114.0, epsilon = 1e-12);
    assert_relative_eq!(series.middle()[15], 126.0, epsilon = 1e-12);
}

#[test]
fn empty_input_yields_empty_series() {
    let series = compute_bollinger_bands(&[], BandOptions::default()).expect("compute");
    assert!(series.is_empty());
    assert_eq!(series.upper().len(), 0);
    assert_eq!(series.lower().len(), 0);
}

#[test]
fn short_input_is_entirely_undefined() {
    let candles = candles_from_closes(&ramp(7));
    let series = compute_bollinger_bands(&candles, BandOptions::default()).expect("compute");
    assert_eq!(series.len(), 7);
    for kind in BandKind::DRAW_ORDER {
        assert_eq!(series.defined_count(kind), 0);
    }
}

#[test]
fn length_one_has_zero_width_bands_on_every_close() {
    let closes = [10.0, 12.5, 9.0];
    let candles = candles_from_closes(&closes);
    let series =
        compute_bollinger_bands(&candles, BandOptions::default().with_length(1)).expect("compute");
    for (i, close) in closes.iter().enumerate() {
        assert_eq!(series.middle()[i], *close);
        assert_eq!(series.upper()[i], *close);
        assert_eq!(series.lower()[i], *close);
    }
}

#[test]
fn invalid_options_are_rejected_not_clamped() {
    let candles = candles_from_closes(&ramp(30));

    let zero_length = compute_bollinger_bands(&candles, BandOptions::default().with_length(0))
        .expect_err("length 0 must fail");
    assert!(matches!(zero_length, ChartError::InvalidOptions(_)));

    for multiplier in [0.0, -1.5, f64::NAN, f64::INFINITY] {
        let err = compute_bollinger_bands(
            &candles,
            BandOptions::default().with_std_dev_multiplier(multiplier),
        )
        .expect_err("non-positive multiplier must fail");
        assert!(matches!(err, ChartError::InvalidOptions(_)), "{multiplier}");
    }

    let err = compute_bollinger_bands(&[], BandOptions::default().with_length(0))
        .expect_err("validation happens before the empty-input shortcut");
    assert!(matches!(err, ChartError::InvalidOptions(_)));
}

#[test]
fn offset_beyond_length_leaves_nothing_defined() {
    let candles = candles_from_closes(&ramp(10));
    for offset in [10, 25, -10, -25] {
        let series = compute_bollinger_bands(
            &candles,
            BandOptions::default().with_length(2).with_offset(offset),
        )
        .expect("compute");
        assert_eq!(series.len(), 10);
        assert_eq!(series.defined_count(BandKind::Middle), 0, "offset {offset}");
    }
}

#[test]
fn helper_functions_share_window_semantics() {
    let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sma = simple_moving_average(&values, 8);
    let std_dev = population_std_dev(&values, 8);
    assert!(sma[..7].iter().all(|value| value.is_nan()));
    assert_eq!(sma[7], 5.0);
    assert_eq!(std_dev[7], 2.0);

    assert!(simple_moving_average(&values, 0).iter().all(|v| v.is_nan()));
    assert_eq!(apply_offset(&[1.0, 2.0], 0), vec![1.0, 2.0]);
}

#[test]
fn band_points_pair_values_with_candle_timestamps() {
    let candles = candles_from_closes(&[100.0; 4]);
    let series =
        compute_bollinger_bands(&candles, BandOptions::default().with_length(3)).expect("compute");
    let points = series.points(&candles);

    assert_eq!(points.len(), 4);
    assert_eq!(points[0].timestamp, 0);
    assert_eq!(points[0].middle, None);
    assert_eq!(points[3].timestamp, 3 * DAY_MS);
    assert_eq!(points[3].upper, Some(100.0));

    let json = serde_json::to_value(points[1]).expect("serialize");
    assert!(json["lower"].is_null());
}
