use proptest::prelude::{Just, Strategy, prop, prop_assert, prop_assert_eq, proptest};

use pcs_metrics::risk::{MAX_SCORE, needle_angle, score, score_percent};
use pcs_metrics::{RiskScore, weight_gain};
use pcs_model::RiskFactor;

fn factor() -> impl Strategy<Value = RiskFactor> {
    prop::sample::select(RiskFactor::ALL.to_vec())
}

#[test]
fn every_subset_stays_in_bounds() {
    for mask in 0u32..64 {
        let subset: Vec<RiskFactor> = RiskFactor::ALL
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << *bit) != 0)
            .map(|(_, factor)| *factor)
            .collect();
        let value = score(&subset);
        assert!((0.0..=MAX_SCORE).contains(&value), "mask {mask}: {value}");
    }
}

#[test]
fn all_factors_clamp_to_ten() {
    let risk = RiskScore::from_factors(&RiskFactor::ALL);
    assert_eq!(risk.score, 10.0);
    assert_eq!(risk.percent, 100);
    assert_eq!(risk.needle_angle, 0.0);
}

#[test]
fn bleed_premature_low_weight() {
    let risk = RiskScore::from_labels(&["Post-op bleed", "Premature", "Low birth weight"]).unwrap();
    assert_eq!(risk.score, 7.5);
    assert_eq!(risk.percent, 75);
}

proptest! {
    #[test]
    fn score_is_bounded_and_order_free(mut selection in prop::collection::vec(factor(), 0..12)) {
        let forward = score(&selection);
        selection.reverse();
        let backward = score(&selection);

        prop_assert!((0.0..=MAX_SCORE).contains(&forward));
        prop_assert_eq!(forward, backward);
        prop_assert!((0..=100).contains(&score_percent(forward)));
    }

    #[test]
    fn needle_angle_stays_on_the_dial(value in -50.0f64..50.0) {
        let angle = needle_angle(value);
        prop_assert!((0.0..=180.0).contains(&angle));
    }

    #[test]
    fn weight_gain_has_one_decimal(
        surgical in prop::option::of(0.5f64..8.0),
        birth in prop::option::of(Just(2.5f64)),
    ) {
        let gain = weight_gain(surgical, birth);
        prop_assert!(((gain * 10.0).round() - gain * 10.0).abs() < 1e-6);
    }
}
