use approx::assert_relative_eq;
use chart_box::ChartError;
use chart_box::core::{
    Axis, LinearScale, Padding, PlotGeometry, Record, ScaleModel, Series, Y_HEADROOM_FACTOR,
};
use rust_decimal::Decimal;

fn scenario_series() -> Series {
    Series::new(vec![
        Record::new().with_number("x", 0.0).with_number("y", 1.0),
        Record::new().with_number("x", 10.0).with_number("y", 5.0),
        Record::new().with_number("x", 20.0).with_number("y", 3.0),
    ])
}

fn scenario_scales(geometry: PlotGeometry) -> ScaleModel {
    ScaleModel::build(&scenario_series(), "x", &["y"], geometry).expect("scales")
}

#[test]
fn midpoint_value_projects_to_midpoint_pixel() {
    let scales = scenario_scales(PlotGeometry::new(100.0, 100.0));

    assert_eq!(scales.x().range(), (0.0, 100.0));
    assert_relative_eq!(scales.x().project(10.0), 50.0);
    assert_relative_eq!(scales.x().invert(50.0), 10.0);
}

#[test]
fn scales_follow_paddings() {
    let geometry =
        PlotGeometry::new(400.0, 300.0).with_padding(Padding::new(40.0, 20.0, 10.0, 30.0));
    let scales = scenario_scales(geometry);

    assert_eq!(scales.x().range(), (40.0, 380.0));
    assert_eq!(scales.y().range(), (30.0, 290.0));
    assert_relative_eq!(scales.x().project(0.0), 40.0);
    assert_relative_eq!(scales.x().project(20.0), 380.0);
}

#[test]
fn y_domain_starts_at_zero_with_headroom_over_all_fields() {
    let series = Series::new(vec![
        Record::new()
            .with_number("x", 0.0)
            .with_number("a", 4.0)
            .with_number("b", 2.0),
        Record::new()
            .with_number("x", 1.0)
            .with_number("a", 1.0)
            .with_number("b", 10.0),
    ]);
    let scales = ScaleModel::build(&series, "x", &["a", "b"], PlotGeometry::new(100.0, 100.0))
        .expect("scales");

    let (min, max) = scales.y().domain();
    assert_eq!(min, 0.0);
    assert_relative_eq!(max, 10.0 * Y_HEADROOM_FACTOR);
    assert!(scales.y().project(10.0) < scales.y().range().1);
}

#[test]
fn decimal_prices_drive_the_y_domain() {
    let prices = [Decimal::new(1250, 2), Decimal::new(4075, 2), Decimal::new(999, 2)];
    let records = prices
        .iter()
        .enumerate()
        .map(|(day, price)| {
            Record::new()
                .with_number("x", day as f64)
                .with_decimal("price", *price)
        })
        .collect::<Result<Vec<_>, _>>()
        .expect("decimal records");
    let series = Series::new(records);
    let scales = ScaleModel::build(&series, "x", &["price"], PlotGeometry::new(100.0, 100.0))
        .expect("scales");

    assert_eq!(series.value_at(1, "price"), Some(40.75));
    assert_relative_eq!(scales.y().domain().1, 40.75 * Y_HEADROOM_FACTOR);
}

#[test]
fn single_point_series_stays_finite() {
    let series = Series::new(vec![Record::new().with_number("x", 5.0).with_number("y", 0.0)]);
    let scales = ScaleModel::build(&series, "x", &["y"], PlotGeometry::new(100.0, 100.0))
        .expect("scales");

    for axis in [Axis::X, Axis::Y] {
        let scale = scales.scale(axis);
        let (start, end) = scale.domain();
        assert!(start < end);
        for pixel in [-10.0, 0.0, 50.0, 100.0, 250.0] {
            assert!(scale.invert(pixel).is_finite());
        }
        assert!(scale.project(start).is_finite());
        assert!(scale.project(end).is_finite());
    }
    assert_relative_eq!(scales.x().project(5.0), 50.0);
}

#[test]
fn reversed_range_round_trips() {
    let scale = LinearScale::with_range(0.0, 50.0, 200.0, 0.0).expect("scale");
    assert_relative_eq!(scale.project(0.0), 200.0);
    assert_relative_eq!(scale.project(50.0), 0.0);
    assert_relative_eq!(scale.invert(scale.project(12.5)), 12.5);
}

#[test]
fn empty_series_is_rejected() {
    let result = ScaleModel::build(
        &Series::default(),
        "x",
        &["y"],
        PlotGeometry::new(10.0, 10.0),
    );
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn missing_y_field_is_reported() {
    let result = ScaleModel::build(
        &scenario_series(),
        "x",
        &["volume"],
        PlotGeometry::new(10.0, 10.0),
    );
    assert!(matches!(result, Err(ChartError::MissingField(field)) if field == "volume"));
}

#[test]
fn clamp_returns_nearest_range_boundary() {
    let geometry =
        PlotGeometry::new(120.0, 80.0).with_padding(Padding::new(10.0, 10.0, 5.0, 15.0));
    let scales = scenario_scales(geometry);

    assert_eq!(scales.clamp(Axis::X, 50.0), 50.0);
    assert_eq!(scales.clamp(Axis::X, -4.0), 10.0);
    assert_eq!(scales.clamp(Axis::X, 500.0), 110.0);
    assert_eq!(scales.clamp(Axis::Y, 0.0), 15.0);
    assert_eq!(scales.clamp(Axis::Y, 90.0), 75.0);
}

#[test]
fn clamp_by_name_rejects_unknown_axes() {
    let scales = scenario_scales(PlotGeometry::new(100.0, 100.0));

    assert_eq!(scales.clamp_named("x", 150.0), Some(100.0));
    assert_eq!(scales.clamp_named("y", -3.0), Some(0.0));
    assert_eq!(scales.clamp_named("z", 10.0), None);
    assert_eq!(scales.clamp_named("", 10.0), None);
}

#[test]
fn y_display_override_only_affects_tick_scale() {
    let scales = scenario_scales(PlotGeometry::new(100.0, 100.0));
    let display = LinearScale::new(0.0, 1_024.0).expect("display");
    let scales = scales.with_y_display(display).expect("override");

    assert_eq!(scales.y().domain(), (0.0, 6.0));
    assert_eq!(scales.y_tick_scale().domain(), (0.0, 1_024.0));
    assert_eq!(scales.y_tick_scale().range(), scales.y().range());
}
