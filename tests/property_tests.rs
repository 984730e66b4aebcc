//! Property tests for the conversion, scoring and input layers.

use beesense::health::{combined_ratio, humidity_ratio, temperature_ratio, StatusColor};
use beesense::input::{ButtonLine, Debouncer};
use beesense::matrix::{indicator_row, SIZE};
use beesense::sensors::{get_humidity, get_temperature, TEMP_MAX_C, TEMP_MIN_C};
use beesense::species::{next_index, species, NUM_SPECIES};
use beesense::timer::DEBOUNCE_MS;
use proptest::prelude::*;

proptest! {
    #[test]
    fn temperature_stays_in_range(sample in any::<u16>()) {
        let temperature = get_temperature(sample);
        prop_assert!((TEMP_MIN_C..=TEMP_MAX_C).contains(&temperature));
    }

    #[test]
    fn temperature_is_monotonic(a in 0u16..=4095, b in 0u16..=4095) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(get_temperature(low) <= get_temperature(high));
    }

    #[test]
    fn humidity_stays_in_range(sample in any::<u16>()) {
        let humidity = get_humidity(sample);
        prop_assert!((0.0..=100.0).contains(&humidity));
    }

    #[test]
    fn ratios_stay_in_unit_range(
        temperature in -50.0f32..100.0,
        humidity in -20.0f32..150.0,
        index in 0usize..NUM_SPECIES,
    ) {
        let t = temperature_ratio(temperature, species(index).ideal_temp());
        let h = humidity_ratio(humidity);
        let combined = combined_ratio(t, h);
        for ratio in [t, h, combined] {
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn status_duty_never_exceeds_full_scale(ratio in -1.0f32..2.0, brightness in 0.0f32..400.0) {
        let [red, green, blue] = StatusColor::from_ratio(ratio, brightness).duty_levels();
        prop_assert_eq!(blue, 0);
        prop_assert!(red as u32 + green as u32 <= 2 * u16::MAX as u32);
    }

    #[test]
    fn next_index_wraps(index in 0usize..NUM_SPECIES, steps in 0usize..100) {
        let mut current = index;
        for _ in 0..steps {
            current = next_index(current, NUM_SPECIES);
            prop_assert!(current < NUM_SPECIES);
        }
        prop_assert_eq!(current, (index + steps) % NUM_SPECIES);
    }

    #[test]
    fn indicator_row_is_on_the_matrix(index in proptest::num::f32::ANY) {
        prop_assert!(indicator_row(index) < SIZE);
    }

    /// Accepted presses on one line are always a full window apart
    #[test]
    fn debounce_spaces_accepted_presses(gaps in proptest::collection::vec(0u32..500, 1..50)) {
        let mut debouncer = Debouncer::new(DEBOUNCE_MS);
        let mut now = 0u32;
        let mut last_accepted: Option<u32> = None;
        for gap in gaps {
            now += gap;
            if debouncer.accept(ButtonLine::A, now) {
                if let Some(last) = last_accepted {
                    prop_assert!(now - last >= DEBOUNCE_MS);
                }
                last_accepted = Some(now);
            } else {
                let last = last_accepted.unwrap();
                prop_assert!(now - last < DEBOUNCE_MS);
            }
        }
    }
}
