// File: crates/dashboard-core/tests/dataset.rs
// Purpose: Dataset validation, maxima and rounded means.

use dashboard_core::dataset::round_half_up;
use dashboard_core::{CityId, Dataset, DatasetError};

#[test]
fn builtin_dataset_passes_validation() {
    let builtin = Dataset::coffee();
    let a = builtin.series(CityId::CityA).values.clone();
    let b = builtin.series(CityId::CityB).values.clone();
    let rebuilt = Dataset::try_new(a, b).expect("built-in data is valid");
    assert_eq!(rebuilt, builtin);
    assert_eq!(builtin.len(), 6);
}

#[test]
fn means_round_half_up() {
    let d = Dataset::coffee();
    // 885 / 6 = 147.5 and 765 / 6 = 127.5
    assert_eq!(d.series(CityId::CityA).rounded_mean(), Some(148));
    assert_eq!(d.series(CityId::CityB).rounded_mean(), Some(128));
}

#[test]
fn maxima_per_series_and_combined() {
    let d = Dataset::coffee();
    assert_eq!(d.series(CityId::CityA).max_value(), 170.0);
    assert_eq!(d.series(CityId::CityB).max_value(), 150.0);
    assert_eq!(d.combined_max(), 170.0);
}

#[test]
fn rejects_empty_series() {
    let err = Dataset::try_new(vec![], vec![1.0; 6]).unwrap_err();
    assert_eq!(err, DatasetError::Empty(CityId::CityA));
}

#[test]
fn rejects_length_mismatch() {
    let err = Dataset::try_new(vec![1.0; 6], vec![1.0; 5]).unwrap_err();
    assert_eq!(err, DatasetError::LengthMismatch { city: CityId::CityB, expected: 6, actual: 5 });
    assert!(err.to_string().contains("cityB"));
}

#[test]
fn rejects_negative_and_non_finite_values() {
    let err = Dataset::try_new(vec![1.0, 2.0, -3.0, 4.0, 5.0, 6.0], vec![1.0; 6]).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidValue { city: CityId::CityA, index: 2, .. }));

    let err = Dataset::try_new(vec![1.0; 6], vec![1.0, f64::NAN, 1.0, 1.0, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, DatasetError::InvalidValue { city: CityId::CityB, index: 1, .. }));
}

#[test]
fn all_zero_dataset_is_accepted() {
    let d = Dataset::try_new(vec![0.0; 6], vec![0.0; 6]).expect("zeros are valid observations");
    assert_eq!(d.combined_max(), 0.0);
    assert_eq!(d.series(CityId::CityA).rounded_mean(), Some(0));
}

#[test]
fn round_half_up_matches_page_rounding() {
    assert_eq!(round_half_up(147.5), 148);
    assert_eq!(round_half_up(127.5), 128);
    assert_eq!(round_half_up(42.5), 43);
    assert_eq!(round_half_up(42.49), 42);
    assert_eq!(round_half_up(0.0), 0);
}

#[test]
fn city_tags_round_trip() {
    for city in CityId::ALL {
        assert_eq!(city.tag().parse::<CityId>(), Ok(city));
    }
    assert!("cityC".parse::<CityId>().is_err());
    assert_eq!(CityId::default(), CityId::CityA);
}
