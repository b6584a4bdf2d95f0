use srchannel::{
    Candle, ChannelCandidate, ChannelType, PivotPoint, build_channel_from_pivot,
    calculate_channel_strength, channel_width, determine_channel_type,
};

#[test]
fn width_is_percent_of_recent_range() {
    let candles = vec![
        candle(0, 110.0, 100.0),
        candle(1, 105.0, 90.0),
        candle(2, 104.0, 95.0),
    ];
    assert!((channel_width(&candles, 5.0) - 1.0).abs() < 1e-9);
    assert!((channel_width(&candles, 10.0) - 2.0).abs() < 1e-9);
    assert_eq!(channel_width(&[], 5.0), 0.0);
}

#[test]
fn width_only_looks_at_last_three_hundred_candles() {
    let mut candles = Vec::new();
    for i in 0..100 {
        candles.push(candle(i, 1000.0, 10.0));
    }
    for i in 100..400 {
        candles.push(candle(i, 110.0, 90.0));
    }
    assert!((channel_width(&candles, 5.0) - 1.0).abs() < 1e-9);
}

#[test]
fn absorbs_pivots_within_width_in_a_single_pass() {
    let pivots = pivots(&[100.0, 100.4, 101.5, 99.2, 100.9]);
    let built = build_channel_from_pivot(0, &pivots, 1.0);

    assert!((built.high - 100.9).abs() < 1e-9);
    assert!((built.low - 100.0).abs() < 1e-9);
    assert_eq!(built.pivot_count, 3);
    assert_eq!(built.strength, 0.0);
}

#[test]
fn absorption_depends_on_pivot_order() {
    let upward_first = build_channel_from_pivot(0, &pivots(&[100.0, 100.8, 99.5]), 1.0);
    assert!((upward_first.high - 100.8).abs() < 1e-9);
    assert!((upward_first.low - 100.0).abs() < 1e-9);
    assert_eq!(upward_first.pivot_count, 2);

    let downward_first = build_channel_from_pivot(0, &pivots(&[100.0, 99.5, 100.8]), 1.0);
    assert!((downward_first.high - 100.0).abs() < 1e-9);
    assert!((downward_first.low - 99.5).abs() < 1e-9);
    assert_eq!(downward_first.pivot_count, 2);
}

#[test]
fn lone_pivot_builds_a_point_channel() {
    let pivots = pivots(&[100.0, 120.0, 80.0]);
    let built = build_channel_from_pivot(1, &pivots, 1.0);
    assert_eq!(built.high, 120.0);
    assert_eq!(built.low, 120.0);
    assert_eq!(built.pivot_count, 1);
}

#[test]
fn every_duplicate_pivot_is_absorbed() {
    let pivots = pivots(&[50.0, 50.0, 50.0, 50.0]);
    for idx in 0..pivots.len() {
        let built = build_channel_from_pivot(idx, &pivots, 0.0);
        assert_eq!(built.pivot_count, 4, "zero width still absorbs equal prices");
    }
}

#[test]
fn strength_counts_high_or_low_inside_the_band() {
    let channel = ChannelCandidate {
        high: 101.0,
        low: 99.0,
        pivot_count: 2,
        strength: 0.0,
    };
    let candles = vec![
        candle(0, 102.0, 100.5),
        candle(1, 98.0, 97.0),
        candle(2, 103.0, 98.0),
        candle(3, 100.0, 99.5),
    ];

    // candle 2 straddles the band with neither end inside it
    assert_eq!(calculate_channel_strength(&channel, &candles, 290), 42.0);
    assert_eq!(calculate_channel_strength(&channel, &candles, 2), 41.0);
    assert_eq!(calculate_channel_strength(&channel, &candles, 0), 40.0);
}

#[test]
fn strength_bounds_are_inclusive() {
    let channel = ChannelCandidate {
        high: 101.0,
        low: 99.0,
        pivot_count: 1,
        strength: 0.0,
    };
    let candles = vec![candle(0, 101.0, 100.0), candle(1, 100.0, 99.0)];
    assert_eq!(calculate_channel_strength(&channel, &candles, 10), 22.0);
}

#[test]
fn type_follows_position_against_price() {
    assert_eq!(determine_channel_type(95.0, 90.0, 100.0), ChannelType::Support);
    assert_eq!(determine_channel_type(110.0, 105.0, 100.0), ChannelType::Resistance);
    assert_eq!(determine_channel_type(101.0, 99.0, 100.0), ChannelType::Neutral);
    assert_eq!(
        determine_channel_type(100.0, 95.0, 100.0),
        ChannelType::Neutral,
        "touching the price is not strictly below"
    );
    assert_eq!(determine_channel_type(105.0, 100.0, 100.0), ChannelType::Neutral);
}

#[test]
fn candidate_overlap_is_inclusive() {
    let c = ChannelCandidate {
        high: 10.0,
        low: 8.0,
        pivot_count: 1,
        strength: 20.0,
    };
    assert!(c.overlaps(10.0, 12.0));
    assert!(c.overlaps(6.0, 8.0));
    assert!(c.overlaps(8.5, 9.0));
    assert!(!c.overlaps(10.01, 12.0));
    assert!(!c.overlaps(6.0, 7.99));
}

fn candle(i: i64, high: f64, low: f64) -> Candle {
    let mid = (high + low) / 2.0;
    Candle::new(i * 60_000, mid, high, low, mid, 1.0)
}

fn pivots(values: &[f64]) -> Vec<PivotPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| PivotPoint {
            value,
            index: 100 - i,
            timestamp: (100 - i as i64) * 60_000,
        })
        .collect()
}
