use chart_box::core::{
    Axis, LinearScale, MIN_TICK_COUNT, PlotGeometry, Record, ScaleModel, Series, nice_tick_values,
};
use chart_box::interaction::nearest_index;
use proptest::prelude::*;

proptest! {
    #[test]
    fn project_invert_round_trip(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_start in -500.0f64..500.0,
        range_span in 1.0f64..4_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let scale = LinearScale::with_range(
            domain_start,
            domain_start + domain_span,
            range_start,
            range_start + range_span,
        ).expect("valid scale");
        let value = domain_start + value_factor * domain_span;

        let recovered = scale.invert(scale.project(value));
        prop_assert!((recovered - value).abs() <= 1e-6 * (1.0 + value.abs()));
    }

    #[test]
    fn projection_is_monotonic(
        domain_start in -10_000.0f64..10_000.0,
        domain_span in 0.01f64..10_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let scale = LinearScale::with_range(domain_start, domain_start + domain_span, 20.0, 780.0)
            .expect("valid scale");
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_value = domain_start + low * domain_span;
        let high_value = domain_start + high * domain_span;

        prop_assert!(scale.project(low_value) <= scale.project(high_value));
    }

    #[test]
    fn clamp_is_idempotent(pixel in -10_000.0f64..10_000.0, use_y in any::<bool>()) {
        let series = Series::new(vec![
            Record::new().with_number("x", 1.0).with_number("y", 4.0),
            Record::new().with_number("x", 9.0).with_number("y", 7.0),
        ]);
        let scales = ScaleModel::build(&series, "x", &["y"], PlotGeometry::new(640.0, 480.0))
            .expect("scales");
        let axis = if use_y { Axis::Y } else { Axis::X };

        let once = scales.clamp(axis, pixel);
        prop_assert_eq!(scales.clamp(axis, once), once);
    }

    #[test]
    fn ticks_never_fall_below_two(
        start in -1_000.0f64..1_000.0,
        span in 0.0f64..1_000.0,
        count in 0usize..40
    ) {
        let ticks = nice_tick_values((start, start + span), count);
        prop_assert!(ticks.len() >= MIN_TICK_COUNT);
        prop_assert!(ticks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn locator_is_deterministic_on_duplicates(
        mut values in prop::collection::vec(0u8..20, 1..40),
        pixel in -20.0f64..220.0
    ) {
        values.sort_unstable();
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let scale = LinearScale::with_range(0.0, 20.0, 0.0, 200.0).expect("scale");

        let first = nearest_index(scale, values.len(), pixel, |i| values[i]);
        let second = nearest_index(scale, values.len(), pixel, |i| values[i]);
        prop_assert_eq!(first, second);

        if let Some(index) = first {
            prop_assert!(index == 0 || values[index - 1] < values[index]);
        }
    }

    #[test]
    fn locator_finds_fractional_points_on_their_pixels(
        mut steps in prop::collection::vec(0u16..500, 1..40),
        pick in any::<prop::sample::Index>()
    ) {
        steps.sort_unstable();
        let values: Vec<f64> = steps
            .into_iter()
            .map(|step| f64::from(step) / 7.0 + 0.3)
            .collect();
        let first = values[0];
        let last = values[values.len() - 1];
        let scale = LinearScale::with_range(first, last, 12.0, 652.0).expect("scale");
        let index = pick.index(values.len());

        let pixel = scale.project(values[index]);
        let located = nearest_index(scale, values.len(), pixel, |i| values[i]);
        let lowest = values.iter().position(|value| *value == values[index]);
        prop_assert_eq!(located, lowest);
    }
}
