use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
    Microseconds,
    Nanoseconds,
}

impl TimeUnit {
    /// Expresses a duration in this unit.
    pub fn from_duration(&self, duration: chrono::Duration) -> f64 {
        match self {
            Self::Seconds => duration.num_seconds() as f64,
            Self::Milliseconds => duration.num_milliseconds() as f64,
            Self::Microseconds => duration.num_microseconds().unwrap_or(i64::MAX) as f64,
            Self::Nanoseconds => duration.num_nanoseconds().unwrap_or(i64::MAX) as f64,
        }
    }

    /// Converts a value in this unit to seconds.
    pub fn to_seconds(&self, value: f64) -> f64 {
        match self {
            Self::Seconds => value,
            Self::Milliseconds => value / 1000.0,
            Self::Microseconds => value / 1_000_000.0,
            Self::Nanoseconds => value / 1_000_000_000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AxisFormat {
    #[default]
    Numeric,
    Time(TimeUnit),
}

impl AxisFormat {
    /// Margin added on both sides of the full data extent so that the outermost
    /// points are never drawn exactly on the plot edge.
    ///
    /// Half a day for timestamps, one unit otherwise.
    pub fn edge_padding(&self) -> f64 {
        match self {
            Self::Time(unit) => unit.from_duration(chrono::Duration::hours(12)),
            Self::Numeric => 1.0,
        }
    }
}

/// State for a single axis (X or Y).
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub min_limit: Option<f64>,
    pub max_limit: Option<f64>,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Default::default()
        }
    }

    pub fn with_limits(mut self, min_limit: f64, max_limit: f64) -> Self {
        self.min_limit = Some(min_limit);
        self.max_limit = Some(max_limit);
        self
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the clamped bounds for rendering.
    pub fn clamped_bounds(&self) -> (f64, f64) {
        let mut c_min = self.min;
        let mut c_max = self.max;
        if let Some(l) = self.min_limit {
            c_min = c_min.max(l);
            c_max = c_max.max(l);
        }
        if let Some(l) = self.max_limit {
            c_max = c_max.min(l);
            c_min = c_min.min(l);
        }
        (c_min, c_max)
    }

    /// Pure zoom without constraints to preserve the pivot point.
    pub fn zoom_at(&mut self, pivot_data: f64, pivot_pct: f64, factor: f64) {
        let new_span = self.span() * factor;
        self.min = pivot_data - new_span * pivot_pct;
        self.max = self.min + new_span;
    }

    pub fn pan(&mut self, delta_data: f64) {
        self.min += delta_data;
        self.max += delta_data;
    }

    /// Pulls the range back inside its limits, keeping the span when it fits.
    pub fn clamp(&mut self) {
        let (Some(min_l), Some(max_l)) = (self.min_limit, self.max_limit) else {
            if let Some(l) = self.min_limit {
                if self.min < l {
                    let s = self.span();
                    self.min = l;
                    self.max = l + s;
                }
            }
            if let Some(l) = self.max_limit {
                if self.max > l {
                    let s = self.span();
                    self.max = l;
                    self.min = l - s;
                }
            }
            return;
        };

        let limit_span = max_l - min_l;
        let current_span = self.span();

        if current_span <= limit_span {
            if self.min < min_l {
                self.min = min_l;
                self.max = min_l + current_span;
            } else if self.max > max_l {
                self.max = max_l;
                self.min = max_l - current_span;
            }
        } else {
            // Wider than the limits themselves: pin to the limits.
            self.min = min_l;
            self.max = max_l;
        }
    }
}

/// Outer bounds for pan or zoom gestures, in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Limits {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Per-axis on/off switches for pan and zoom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisFlags {
    pub x: bool,
    pub y: bool,
}

impl Default for AxisFlags {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleRange {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Axis extents of one view, one X/Y pair per scale group, plus the pan and
/// zoom limits the view's gestures must respect.
///
/// The model only stores numbers. Ordering of min and max is the caller's
/// responsibility and redraws are requested by whoever mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisRangeModel {
    scales: Vec<ScaleRange>,
    initial: Vec<ScaleRange>,
    pan_limits: Option<Limits>,
    zoom_limits: Option<Limits>,
    pan_enabled: AxisFlags,
    zoom_enabled: AxisFlags,
    zoom_in_limit_x: f64,
}

impl Default for AxisRangeModel {
    fn default() -> Self {
        Self::new(1)
    }
}

impl AxisRangeModel {
    /// Creates a model with `scale_count` groups (at least one).
    pub fn new(scale_count: usize) -> Self {
        let scales = vec![ScaleRange::default(); scale_count.max(1)];
        Self {
            initial: scales.clone(),
            scales,
            pan_limits: None,
            zoom_limits: None,
            pan_enabled: AxisFlags::default(),
            zoom_enabled: AxisFlags::default(),
            zoom_in_limit_x: 0.0,
        }
    }

    pub fn scale_count(&self) -> usize {
        self.scales.len()
    }

    fn scale_mut(&mut self, scale_group: usize) -> Option<&mut ScaleRange> {
        let scale = self.scales.get_mut(scale_group);
        if scale.is_none() {
            warn!(scale_group, "ignoring axis update for unknown scale group");
        }
        scale
    }

    pub fn set_x_axis_min(&mut self, value: f64, scale_group: usize) {
        if let Some(s) = self.scale_mut(scale_group) {
            s.x.min = value;
        }
    }

    pub fn set_x_axis_max(&mut self, value: f64, scale_group: usize) {
        if let Some(s) = self.scale_mut(scale_group) {
            s.x.max = value;
        }
    }

    pub fn set_y_axis_min(&mut self, value: f64, scale_group: usize) {
        if let Some(s) = self.scale_mut(scale_group) {
            s.y.min = value;
        }
    }

    pub fn set_y_axis_max(&mut self, value: f64, scale_group: usize) {
        if let Some(s) = self.scale_mut(scale_group) {
            s.y.max = value;
        }
    }

    pub fn x_axis_min(&self, scale_group: usize) -> Option<f64> {
        self.scales.get(scale_group).map(|s| s.x.min)
    }

    pub fn x_axis_max(&self, scale_group: usize) -> Option<f64> {
        self.scales.get(scale_group).map(|s| s.x.max)
    }

    pub fn y_axis_min(&self, scale_group: usize) -> Option<f64> {
        self.scales.get(scale_group).map(|s| s.y.min)
    }

    pub fn y_axis_max(&self, scale_group: usize) -> Option<f64> {
        self.scales.get(scale_group).map(|s| s.y.max)
    }

    pub fn x_range(&self, scale_group: usize) -> Option<(f64, f64)> {
        self.scales.get(scale_group).map(|s| (s.x.min, s.x.max))
    }

    pub fn y_range(&self, scale_group: usize) -> Option<(f64, f64)> {
        self.scales.get(scale_group).map(|s| (s.y.min, s.y.max))
    }

    /// Sets the X range of every scale group.
    pub fn set_x_range_all(&mut self, min: f64, max: f64) {
        for s in &mut self.scales {
            s.x.min = min;
            s.x.max = max;
        }
    }

    pub fn scales(&self) -> &[ScaleRange] {
        &self.scales
    }

    pub fn scales_mut(&mut self) -> &mut [ScaleRange] {
        &mut self.scales
    }

    pub fn set_pan_limits(&mut self, limits: Limits) {
        self.pan_limits = Some(limits);
    }

    pub fn pan_limits(&self) -> Option<Limits> {
        self.pan_limits
    }

    pub fn set_zoom_limits(&mut self, limits: Limits) {
        self.zoom_limits = Some(limits);
    }

    pub fn zoom_limits(&self) -> Option<Limits> {
        self.zoom_limits
    }

    pub fn set_pan_enabled(&mut self, x: bool, y: bool) {
        self.pan_enabled = AxisFlags { x, y };
    }

    pub fn pan_enabled(&self) -> AxisFlags {
        self.pan_enabled
    }

    pub fn set_zoom_enabled(&mut self, x: bool, y: bool) {
        self.zoom_enabled = AxisFlags { x, y };
    }

    pub fn zoom_enabled(&self) -> AxisFlags {
        self.zoom_enabled
    }

    /// Minimum X span a zoom (or an overlay edge drag) may shrink to.
    pub fn set_zoom_in_limit_x(&mut self, limit: f64) {
        self.zoom_in_limit_x = limit.max(0.0);
    }

    pub fn zoom_in_limit_x(&self) -> f64 {
        self.zoom_in_limit_x
    }

    /// Remembers the current ranges as the target of a zoom reset.
    pub fn mark_initial_ranges(&mut self) {
        self.initial = self.scales.clone();
    }

    pub fn initial_x_range(&self, scale_group: usize) -> Option<(f64, f64)> {
        self.initial.get(scale_group).map(|s| (s.x.min, s.x.max))
    }

    /// Pulls the current and saved X ranges of every group back inside the pan
    /// limits and takes the current Y ranges as the new reset target.
    ///
    /// Used after the underlying data changed so that a later reset cannot
    /// land outside the new extent.
    pub fn refit_to_pan_limits(&mut self) {
        let Some(limits) = self.pan_limits else {
            return;
        };
        for (current, initial) in self.scales.iter_mut().zip(self.initial.iter_mut()) {
            current.x = fit_within(current.x, &limits);
            initial.x = fit_within(initial.x, &limits);
            initial.y = current.y;
        }
    }

    /// Restores the ranges saved by [`Self::mark_initial_ranges`].
    pub fn restore_initial_ranges(&mut self) {
        for (current, initial) in self.scales.iter_mut().zip(&self.initial) {
            *current = *initial;
        }
    }
}

fn fit_within(range: AxisRange, limits: &Limits) -> AxisRange {
    let mut fitted = AxisRange::new(range.min, range.max).with_limits(limits.x_min, limits.x_max);
    fitted.clamp();
    AxisRange {
        min: fitted.min,
        max: fitted.max,
        ..range
    }
}
