use linked_chart::data_types::{AxisFlags, AxisFormat, AxisRange, AxisRangeModel, Limits, TimeUnit};

#[test]
fn test_axis_range_pan() {
    let mut range = AxisRange::new(100.0, 200.0);
    range.pan(50.0);
    assert_eq!(range.min, 150.0);
    assert_eq!(range.max, 250.0);
    assert_eq!(range.span(), 100.0);
}

#[test]
fn test_axis_range_zoom_center() {
    let mut range = AxisRange::new(100.0, 200.0);
    // Center is 150.0, new span 50.0
    range.zoom_at(150.0, 0.5, 0.5);
    assert_eq!(range.min, 125.0);
    assert_eq!(range.max, 175.0);
    assert_eq!(range.span(), 50.0);
}

#[test]
fn test_axis_range_zoom_edge() {
    let mut range = AxisRange::new(100.0, 200.0);
    range.zoom_at(100.0, 0.0, 2.0);
    assert_eq!(range.min, 100.0);
    assert_eq!(range.max, 300.0);
}

#[test]
fn test_axis_range_clamp() {
    let mut range = AxisRange::new(100.0, 200.0).with_limits(50.0, 250.0);

    range.pan(-20.0); // [80, 180]
    range.clamp();
    assert_eq!(range.min, 80.0);

    range.pan(-40.0); // [40, 140]
    range.clamp();
    assert_eq!(range.min, 50.0);
    assert_eq!(range.max, 150.0); // Span preserved

    range.pan(150.0); // [200, 300]
    range.clamp();
    assert_eq!(range.max, 250.0);
    assert_eq!(range.min, 150.0);
}

#[test]
fn test_axis_range_wider_than_limits_is_pinned() {
    let mut range = AxisRange::new(100.0, 200.0).with_limits(0.0, 300.0);
    range.zoom_at(150.0, 0.5, 4.0); // [-50, 350]
    range.clamp();
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 300.0);
}

#[test]
fn test_clamped_bounds_do_not_mutate() {
    let range = AxisRange::new(-50.0, 350.0).with_limits(0.0, 300.0);
    assert_eq!(range.clamped_bounds(), (0.0, 300.0));
    assert_eq!(range.min, -50.0);
}

#[test]
fn test_model_per_group_ranges() {
    let mut model = AxisRangeModel::new(2);
    model.set_x_axis_min(1.0, 0);
    model.set_x_axis_max(2.0, 0);
    model.set_y_axis_min(10.0, 1);
    model.set_y_axis_max(20.0, 1);

    assert_eq!(model.scale_count(), 2);
    assert_eq!(model.x_range(0), Some((1.0, 2.0)));
    assert_eq!(model.y_range(1), Some((10.0, 20.0)));
    assert_eq!(model.x_range(1), Some((0.0, 0.0)));
    assert_eq!(model.x_axis_min(2), None);
}

#[test]
fn test_model_ignores_unknown_group() {
    let mut model = AxisRangeModel::new(1);
    model.set_x_axis_min(5.0, 3);
    model.set_y_axis_max(5.0, 3);
    assert_eq!(model.scale_count(), 1);
    assert_eq!(model.x_range(0), Some((0.0, 0.0)));
}

#[test]
fn test_model_has_at_least_one_group() {
    assert_eq!(AxisRangeModel::new(0).scale_count(), 1);
    assert_eq!(AxisRangeModel::default().scale_count(), 1);
}

#[test]
fn test_model_does_not_reorder_min_max() {
    let mut model = AxisRangeModel::new(1);
    model.set_x_axis_min(10.0, 0);
    model.set_x_axis_max(-10.0, 0);
    assert_eq!(model.x_range(0), Some((10.0, -10.0)));
}

#[test]
fn test_model_limits_and_flags() {
    let mut model = AxisRangeModel::new(1);
    assert_eq!(model.pan_limits(), None);
    assert_eq!(model.pan_enabled(), AxisFlags { x: true, y: true });

    let limits = Limits::new(-1.0, 21.0, -1.0, 11.0);
    model.set_pan_limits(limits);
    model.set_zoom_limits(limits);
    model.set_pan_enabled(true, false);
    model.set_zoom_enabled(false, false);
    model.set_zoom_in_limit_x(-3.0);

    assert_eq!(model.pan_limits(), Some(limits));
    assert_eq!(model.zoom_limits().map(|l| l.width()), Some(22.0));
    assert_eq!(model.pan_enabled(), AxisFlags { x: true, y: false });
    assert_eq!(model.zoom_enabled(), AxisFlags { x: false, y: false });
    assert_eq!(model.zoom_in_limit_x(), 0.0);
}

#[test]
fn test_model_restores_initial_ranges() {
    let mut model = AxisRangeModel::new(2);
    model.set_x_range_all(5.0, 15.0);
    model.mark_initial_ranges();

    model.set_x_range_all(7.0, 9.0);
    assert_eq!(model.x_range(1), Some((7.0, 9.0)));
    assert_eq!(model.initial_x_range(1), Some((5.0, 15.0)));

    model.restore_initial_ranges();
    assert_eq!(model.x_range(0), Some((5.0, 15.0)));
    assert_eq!(model.x_range(1), Some((5.0, 15.0)));
}

#[test]
fn test_edge_padding() {
    assert_eq!(AxisFormat::Numeric.edge_padding(), 1.0);
    assert_eq!(AxisFormat::Time(TimeUnit::Seconds).edge_padding(), 43_200.0);
    assert_eq!(
        AxisFormat::Time(TimeUnit::Milliseconds).edge_padding(),
        43_200_000.0
    );
}

#[test]
fn test_model_refits_to_new_pan_limits() {
    let mut model = AxisRangeModel::new(2);
    model.set_x_range_all(5.0, 15.0);
    model.mark_initial_ranges();

    model.set_x_range_all(6.0, 8.0);
    model.set_y_axis_min(0.0, 0);
    model.set_y_axis_max(3.0, 0);
    model.refit_to_pan_limits();
    // Nothing to fit against yet
    assert_eq!(model.initial_x_range(0), Some((5.0, 15.0)));

    model.set_pan_limits(Limits::new(-1.0, 9.0, 0.0, 3.0));
    model.refit_to_pan_limits();
    assert_eq!(model.x_range(1), Some((6.0, 8.0)));
    assert_eq!(model.initial_x_range(1), Some((-1.0, 9.0)));

    model.restore_initial_ranges();
    assert_eq!(model.x_range(0), Some((-1.0, 9.0)));
    assert_eq!(model.y_range(0), Some((0.0, 3.0)));
}
