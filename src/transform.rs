//! Coordinate projection between data space and screen space

use crate::data_types::{AxisRangeModel, DataPoint};
use crate::scales::ChartScale;

/// A position in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenRect {
    pub origin: ScreenPoint,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: ScreenPoint::new(x, y),
            width,
            height,
        }
    }

    /// Builds a rectangle from two horizontal and two vertical edges in any order.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let (l, r) = (left.min(right), left.max(right));
        let (t, b) = (top.min(bottom), top.max(bottom));
        Self::new(l, t, r - l, b - t)
    }

    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn right(&self) -> f32 {
        self.origin.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn bottom(&self) -> f32 {
        self.origin.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Screen/data mapping for one view.
///
/// Implementations must be exact inverses over the currently rendered range;
/// overlay gestures compare edges in screen space and write results in data space.
pub trait CoordinateTransform {
    fn to_screen(&self, point: DataPoint, scale_group: usize) -> ScreenPoint;

    fn to_data_x(&self, screen_x: f32, scale_group: usize) -> f64;

    fn x_to_screen(&self, x: f64) -> f32 {
        self.to_screen(DataPoint::new(x, 0.0), 0).x
    }
}

#[derive(Clone, Debug)]
pub struct PlotTransform {
    x_scales: Vec<ChartScale>,
    y_scales: Vec<ChartScale>,
    bounds: ScreenRect,
}

impl PlotTransform {
    /// Builds per-scale-group scales from the view's current axis ranges.
    pub fn new(axes: &AxisRangeModel, bounds: ScreenRect) -> Self {
        let (x_scales, y_scales): (Vec<_>, Vec<_>) = axes
            .scales()
            .iter()
            .map(|s| {
                (
                    ChartScale::new_linear((s.x.min, s.x.max), (0.0, bounds.width)),
                    ChartScale::new_linear((s.y.min, s.y.max), (bounds.height, 0.0)),
                )
            })
            .unzip();
        Self {
            x_scales,
            y_scales,
            bounds,
        }
    }

    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    fn x_scale(&self, scale_group: usize) -> &ChartScale {
        self.x_scales
            .get(scale_group)
            .unwrap_or(&self.x_scales[0])
    }

    fn y_scale(&self, scale_group: usize) -> &ChartScale {
        self.y_scales
            .get(scale_group)
            .unwrap_or(&self.y_scales[0])
    }

    pub fn data_to_screen(&self, point: DataPoint, scale_group: usize) -> ScreenPoint {
        ScreenPoint::new(
            self.bounds.origin.x + self.x_scale(scale_group).map(point.x),
            self.bounds.origin.y + self.y_scale(scale_group).map(point.y),
        )
    }

    pub fn screen_to_data(&self, point: ScreenPoint, scale_group: usize) -> DataPoint {
        DataPoint::new(
            self.x_scale(scale_group)
                .invert(point.x - self.bounds.origin.x),
            self.y_scale(scale_group)
                .invert(point.y - self.bounds.origin.y),
        )
    }
}

impl CoordinateTransform for PlotTransform {
    fn to_screen(&self, point: DataPoint, scale_group: usize) -> ScreenPoint {
        self.data_to_screen(point, scale_group)
    }

    fn to_data_x(&self, screen_x: f32, scale_group: usize) -> f64 {
        self.x_scale(scale_group)
            .invert(screen_x - self.bounds.origin.x)
    }
}
