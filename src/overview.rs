//! Overview derivation
//!
//! Builds the overview dataset from the base dataset (a value copy of every
//! series plus a trailing two-point overlay series) and sets the axis ranges
//! and limits of both views from the full data extent.

use crate::data_types::{AxisFormat, AxisRangeModel, Dataset, Limits, Series};
use crate::tools::OverlayWindow;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Title of the synthetic overlay series. Only used for display; the series is
/// always addressed by its trailing index.
pub const OVERLAY_SERIES_TITLE: &str = "Overlay";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewOptions {
    /// Half-width of the initial window as a fraction of the full X extent.
    pub initial_window_fraction: f64,
    /// Narrowest window the overlay may be resized to, in X units.
    pub min_window_width: f64,
    pub x_format: AxisFormat,
}

impl Default for OverviewOptions {
    fn default() -> Self {
        Self {
            initial_window_fraction: 0.25,
            min_window_width: 0.0,
            x_format: AxisFormat::Numeric,
        }
    }
}

/// Full extent of a dataset: overall X and per-scale-group Y.
///
/// `None` marks an extent with no data behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct DataExtent {
    pub x: Option<(f64, f64)>,
    pub y: Vec<Option<(f64, f64)>>,
}

fn merge(acc: Option<(f64, f64)>, min: f64, max: f64) -> Option<(f64, f64)> {
    Some(match acc {
        Some((a, b)) => (a.min(min), b.max(max)),
        None => (min, max),
    })
}

impl DataExtent {
    pub fn compute(dataset: &Dataset, scale_count: usize) -> Self {
        let mut extent = Self {
            x: None,
            y: vec![None; scale_count],
        };

        for series in dataset.iter() {
            let Some((x_min, x_max, y_min, y_max)) = series.get_min_max() else {
                continue;
            };
            extent.x = merge(extent.x, x_min, x_max);
            match extent.y.get_mut(series.scale_group()) {
                Some(slot) => *slot = merge(*slot, y_min, y_max),
                None => warn!(
                    series = series.title(),
                    scale_group = series.scale_group(),
                    "series scale group out of range, Y extent ignored"
                ),
            }
        }
        extent
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_none()
    }

    /// X bounds, collapsing to `(0, 0)` without data.
    pub fn x_bounds(&self) -> (f64, f64) {
        self.x.unwrap_or((0.0, 0.0))
    }

    /// Y bounds of a group, collapsing to `(0, 0)` without data.
    pub fn y_bounds(&self, scale_group: usize) -> (f64, f64) {
        self.y
            .get(scale_group)
            .copied()
            .flatten()
            .unwrap_or((0.0, 0.0))
    }

    /// Window centred on the X extent, `fraction` of the extent on each side.
    pub fn initial_window(&self, fraction: f64) -> OverlayWindow {
        let (min_x, max_x) = self.x_bounds();
        let center = (max_x - min_x) / 2.0 + min_x;
        let margin = (max_x - min_x) * fraction;
        OverlayWindow::new(center - margin, center + margin)
    }

    /// Padded box used for the overview ranges and for both views' limits.
    pub fn padded_limits(&self, pad: f64) -> Limits {
        let (min_x, max_x) = self.x_bounds();
        let (min_y, max_y) = self.y_bounds(0);
        Limits::new(min_x - pad, max_x + pad, min_y - 1.0, max_y + 1.0)
    }
}

/// Result of [`build_overview`].
#[derive(Clone, Debug)]
pub struct Overview {
    pub dataset: Dataset,
    pub axes: AxisRangeModel,
    pub overlay_index: usize,
    pub extent: DataExtent,
    pub window: OverlayWindow,
}

/// Derives the overview from the base dataset and initialises the base axes.
///
/// Never fails: an empty dataset yields a zero-width window at 0.
pub fn build_overview(
    base: &Dataset,
    base_axes: &mut AxisRangeModel,
    scale_count: usize,
    options: &OverviewOptions,
) -> Overview {
    let scale_count = scale_count.max(1);
    let mut dataset: Dataset = base.iter().cloned().collect();
    let overlay_index = dataset.series_count();

    let extent = DataExtent::compute(base, scale_count);
    if extent.is_empty() {
        debug!("base dataset has no points, overview window collapses to zero width");
    }
    let window = extent.initial_window(options.initial_window_fraction);
    dataset.add_series(Series::with_points(
        OVERLAY_SERIES_TITLE,
        0,
        window.to_points(),
    ));

    let mut axes = AxisRangeModel::new(scale_count);
    apply_ranges(&extent, &mut axes, base_axes, options);
    axes.set_pan_enabled(false, false);
    axes.set_zoom_enabled(false, false);
    axes.mark_initial_ranges();

    base_axes.set_x_range_all(window.start, window.end);
    base_axes.mark_initial_ranges();

    debug!(
        series = base.series_count(),
        overlay_index,
        start = window.start,
        end = window.end,
        "overview built"
    );

    Overview {
        dataset,
        axes,
        overlay_index,
        extent,
        window,
    }
}

/// Sets overview ranges and limits, plus base Y ranges and base limits, from `extent`.
///
/// The base X range is left alone.
pub fn apply_ranges(
    extent: &DataExtent,
    overview_axes: &mut AxisRangeModel,
    base_axes: &mut AxisRangeModel,
    options: &OverviewOptions,
) {
    let pad = options.x_format.edge_padding();
    let (min_x, max_x) = extent.x_bounds();

    for group in 0..overview_axes.scale_count() {
        let (min_y, max_y) = extent.y_bounds(group);
        overview_axes.set_x_axis_min(min_x - pad, group);
        overview_axes.set_x_axis_max(max_x + pad, group);
        overview_axes.set_y_axis_min(min_y - 1.0, group);
        overview_axes.set_y_axis_max(max_y + 1.0, group);
    }
    for group in 0..base_axes.scale_count() {
        let (min_y, max_y) = extent.y_bounds(group);
        base_axes.set_y_axis_min(min_y - 1.0, group);
        base_axes.set_y_axis_max(max_y + 1.0, group);
    }

    let limits = extent.padded_limits(pad);
    overview_axes.set_pan_limits(limits);
    overview_axes.set_zoom_in_limit_x(options.min_window_width);

    base_axes.set_pan_limits(limits);
    base_axes.set_zoom_limits(limits);
    base_axes.set_zoom_in_limit_x(options.min_window_width);
}

/// Copies the base series into the first `N` overview series, leaving the overlay untouched.
pub fn resync_series(base: &Dataset, overview: &mut Dataset) {
    for (index, series) in base.iter().enumerate() {
        if let Some(target) = overview.series_at_mut(index) {
            *target = series.clone();
        }
    }
}
