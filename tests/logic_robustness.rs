use linked_chart::data_types::{shared, AxisRangeModel, Dataset, Limits, RendererConfig, Series};
use linked_chart::overview::{build_overview, DataExtent, OverviewOptions};
use linked_chart::scales::ChartScale;
use linked_chart::tools::MoveTool;
use linked_chart::transform::{PlotTransform, ScreenPoint, ScreenRect};
use linked_chart::ConnectedCharts;

#[test]
fn test_scale_zero_domain() {
    // Min == Max, e.g. a single data point at y=10.0
    let scale = ChartScale::new_linear((10.0, 10.0), (0.0, 100.0));

    let mapped = scale.map(10.0);
    assert!(!mapped.is_nan(), "Mapped value should not be NaN for zero domain");
    assert!(!mapped.is_infinite(), "Mapped value should not be Inf for zero domain");
    assert!(
        (0.0..=100.0).contains(&mapped),
        "Mapped value {} should be within range [0, 100]",
        mapped
    );
}

#[test]
fn test_empty_series_has_no_extent() {
    let series = Series::new("empty", 0);
    assert!(series.get_min_max().is_none());
    assert!(series.min_x().is_none());
    assert_eq!(series.x(0), None);
}

#[test]
fn test_empty_dataset_builds_degenerate_overview() {
    let mut base_axes = AxisRangeModel::new(1);
    let overview = build_overview(&Dataset::new(), &mut base_axes, 1, &OverviewOptions::default());

    assert!(overview.extent.is_empty());
    assert_eq!(overview.overlay_index, 0);
    assert_eq!(overview.dataset.series_count(), 1);
    assert_eq!(overview.window.start, 0.0);
    assert_eq!(overview.window.end, 0.0);
    assert_eq!(overview.axes.x_range(0), Some((-1.0, 1.0)));
    assert_eq!(overview.axes.y_range(0), Some((-1.0, 1.0)));
    assert_eq!(base_axes.x_range(0), Some((0.0, 0.0)));
    assert_eq!(base_axes.pan_limits(), Some(Limits::new(-1.0, 1.0, -1.0, 1.0)));
}

#[test]
fn test_series_without_points_are_ignored_by_extent() {
    let dataset: Dataset = [Series::new("a", 0), Series::new("b", 1)].into_iter().collect();
    let extent = DataExtent::compute(&dataset, 2);
    assert!(extent.is_empty());
    assert_eq!(extent.y_bounds(1), (0.0, 0.0));
}

#[test]
fn test_empty_dataset_connected_charts() {
    let charts = ConnectedCharts::new(Dataset::new(), RendererConfig::default(), &[], "").unwrap();
    let window = charts.overlay_window().unwrap();
    assert_eq!((window.start, window.end), (0.0, 0.0));
    assert_eq!(charts.visible_range_label().as_deref(), Some("0.00 - 0.00"));
}

#[test]
fn test_zero_width_window_maps_to_finite_pixels() {
    let mut axes = AxisRangeModel::new(1);
    axes.set_x_range_all(3.0, 3.0);
    let transform = PlotTransform::new(&axes, ScreenRect::new(0.0, 0.0, 100.0, 100.0));
    let p = transform.data_to_screen((3.0, 0.0).into(), 0);
    assert!(p.x.is_finite());
    assert!(p.y.is_finite());
}

#[test]
fn test_move_on_malformed_overlay_fails() {
    let dataset: Dataset = [Series::with_points("Overlay", 0, [(1.0, 0.0)])]
        .into_iter()
        .collect();
    let mut axes = AxisRangeModel::new(1);
    axes.set_x_range_all(0.0, 10.0);
    axes.set_pan_limits(Limits::new(0.0, 10.0, -1.0, 1.0));
    let transform = PlotTransform::new(&axes, ScreenRect::new(0.0, 0.0, 100.0, 100.0));

    let mut tool = MoveTool::new(shared(dataset), shared(axes), 0, 16.0);
    let result = tool.apply(&transform, ScreenPoint::new(10.0, 0.0), ScreenPoint::new(20.0, 0.0));
    assert!(result.is_err());
}

#[test]
fn test_move_without_pan_limits_fails() {
    let dataset: Dataset = [Series::with_points("Overlay", 0, [(1.0, 0.0), (2.0, 0.0)])]
        .into_iter()
        .collect();
    let mut axes = AxisRangeModel::new(1);
    axes.set_x_range_all(0.0, 10.0);
    let transform = PlotTransform::new(&axes, ScreenRect::new(0.0, 0.0, 100.0, 100.0));

    let mut tool = MoveTool::new(shared(dataset), shared(axes), 0, 16.0);
    let result = tool.apply(&transform, ScreenPoint::new(50.0, 0.0), ScreenPoint::new(60.0, 0.0));
    assert!(result.is_err());
}
