use linked_chart::data_types::{AxisRangeModel, DataPoint};
use linked_chart::scales::ChartScale;
use linked_chart::transform::{CoordinateTransform, PlotTransform, ScreenPoint, ScreenRect};

fn axes(x: (f64, f64), y: (f64, f64)) -> AxisRangeModel {
    let mut axes = AxisRangeModel::new(1);
    axes.set_x_axis_min(x.0, 0);
    axes.set_x_axis_max(x.1, 0);
    axes.set_y_axis_min(y.0, 0);
    axes.set_y_axis_max(y.1, 0);
    axes
}

#[test]
fn test_chart_scale_linear() {
    let scale = ChartScale::new_linear((0.0, 100.0), (0.0, 500.0));

    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.map(50.0), 250.0);
    assert_eq!(scale.map(100.0), 500.0);

    assert_eq!(scale.invert(0.0), 0.0);
    assert_eq!(scale.invert(250.0), 50.0);
    assert_eq!(scale.invert(500.0), 100.0);
}

#[test]
fn test_plot_transform() {
    let transform = PlotTransform::new(
        &axes((0.0, 100.0), (0.0, 100.0)),
        ScreenRect::new(0.0, 0.0, 200.0, 200.0),
    );

    let origin = transform.data_to_screen(DataPoint::new(0.0, 0.0), 0);
    assert_eq!(origin, ScreenPoint::new(0.0, 200.0));

    let center = transform.data_to_screen(DataPoint::new(50.0, 50.0), 0);
    assert_eq!(center, ScreenPoint::new(100.0, 100.0));

    let restored = transform.screen_to_data(center, 0);
    assert!((restored.x - 50.0).abs() < 0.001);
    assert!((restored.y - 50.0).abs() < 0.001);
}

#[test]
fn test_plot_transform_offset_origin() {
    let transform = PlotTransform::new(
        &axes((0.0, 100.0), (0.0, 100.0)),
        ScreenRect::new(10.0, 20.0, 200.0, 200.0),
    );
    assert_eq!(
        transform.data_to_screen(DataPoint::new(0.0, 0.0), 0),
        ScreenPoint::new(10.0, 220.0)
    );
    assert!((transform.to_data_x(110.0, 0) - 50.0).abs() < 1e-9);
}

#[test]
fn test_plot_transform_scale_groups() {
    let mut model = AxisRangeModel::new(2);
    model.set_x_range_all(0.0, 100.0);
    model.set_y_axis_max(100.0, 0);
    model.set_y_axis_max(10.0, 1);

    let transform = PlotTransform::new(&model, ScreenRect::new(0.0, 0.0, 200.0, 200.0));
    assert_eq!(transform.data_to_screen(DataPoint::new(0.0, 5.0), 1).y, 100.0);
    assert_eq!(transform.data_to_screen(DataPoint::new(0.0, 5.0), 0).y, 190.0);
    // Unknown groups fall back to group 0
    assert_eq!(transform.data_to_screen(DataPoint::new(0.0, 5.0), 7).y, 190.0);
}

#[test]
fn test_x_round_trip() {
    let transform = PlotTransform::new(
        &axes((-1.0, 21.0), (-1.0, 11.0)),
        ScreenRect::new(0.0, 0.0, 220.0, 50.0),
    );
    for x in [-1.0, 0.0, 5.0, 15.0, 21.0] {
        let screen = transform.x_to_screen(x);
        assert!((transform.to_data_x(screen, 0) - x).abs() < 1e-4);
    }
}

#[test]
fn test_screen_rect_from_edges() {
    let rect = ScreenRect::from_edges(10.0, 40.0, 0.0, 0.0);
    assert_eq!(rect, ScreenRect::new(0.0, 0.0, 10.0, 40.0));
    assert!(rect.contains(ScreenPoint::new(5.0, 5.0)));
    assert!(!rect.contains(ScreenPoint::new(11.0, 5.0)));
    assert!(ScreenRect::new(0.0, 0.0, 0.0, 10.0).is_empty());
}
