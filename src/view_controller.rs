use crate::data_types::AxisRange;

/// ViewController handles the business logic of interactions (pan, zoom, window moves)
/// independently of any view infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Calculates and applies a pan on an axis based on a pixel delta.
    pub fn pan_axis(range: &mut AxisRange, delta_pixels: f32, total_pixels: f32, is_y: bool) {
        if total_pixels <= 0.0 {
            return;
        }
        let span = range.span();
        let ratio = span / total_pixels as f64;

        // Dragging right pulls earlier data into view, so X values decrease.
        // Screen Y grows downwards, so a downward drag raises Y values.
        let delta_data = if is_y {
            delta_pixels as f64 * ratio
        } else {
            -delta_pixels as f64 * ratio
        };

        range.pan(delta_data);
        range.clamp();
    }

    /// Zooms on an axis at a specific pivot point (expressed as a percentage of the domain).
    ///
    /// The resulting span is kept within `[min_span, max_span]`; `max_span` is usually the
    /// width of the zoom limits. A zoom that can only move the wrong way leaves the range
    /// untouched.
    pub fn zoom_axis_at(
        range: &mut AxisRange,
        pivot_pct: f64,
        factor: f64,
        min_span: f64,
        max_span: Option<f64>,
    ) {
        const MIN_SPAN: f64 = 1e-9;
        let span = range.span();
        if span <= 0.0 {
            return;
        }

        let floor = min_span.max(MIN_SPAN);
        let mut target = span * factor;
        if factor < 1.0 {
            // Zooming in never widens, even when the span is already below the floor.
            target = target.max(floor).min(span);
        } else if let Some(max_span) = max_span {
            target = target.min(max_span).max(span);
        }
        if target == span {
            return;
        }

        let pivot_data = range.min + span * pivot_pct;
        range.zoom_at(pivot_data, pivot_pct, target / span);
        range.clamp();
    }

    /// Centers the axis on a given value, optionally respecting strict limits.
    ///
    /// When the centred range crosses a limit it is shifted flush against it, keeping its span.
    pub fn move_to_center(range: &mut AxisRange, center_data: f64, clamp_to: Option<(f64, f64)>) {
        let span = range.span();
        range.min = center_data - span / 2.0;
        range.max = center_data + span / 2.0;

        if let Some((limit_min, limit_max)) = clamp_to {
            let limit_span = limit_max - limit_min;
            if span <= limit_span {
                if range.min < limit_min {
                    range.min = limit_min;
                    range.max = limit_min + span;
                } else if range.max > limit_max {
                    range.max = limit_max;
                    range.min = limit_max - span;
                }
            } else {
                range.min = limit_min;
                range.max = limit_max;
            }
        }

        range.clamp();
    }

    /// Calculates a zoom factor based on a pixel delta.
    pub fn compute_zoom_factor(delta: f32, sensitivity: f32) -> f64 {
        let factor = 1.0 + (delta.abs() / sensitivity) as f64;
        if delta > 0.0 {
            1.0 / factor
        } else {
            factor
        }
    }
}
