use crate::data_types::{AxisRange, AxisRangeModel, Shared};
use crate::tools::{ListenerId, ListenerRegistry};
use crate::view_controller::ViewController;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomEvent {
    /// A zoom by `factor` (< 1 zooms in) was applied.
    Applied { factor: f64, x_min: f64, x_max: f64 },
    /// The view went back to its initial ranges.
    Reset { x_min: f64, x_max: f64 },
}

/// Zoom for a chart view, bounded by the zoom-in limit and the view's zoom limits.
pub struct ZoomTool {
    axes: Shared<AxisRangeModel>,
    listeners: ListenerRegistry<ZoomEvent>,
}

impl ZoomTool {
    pub fn new(axes: Shared<AxisRangeModel>) -> Self {
        Self {
            axes,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Zooms around `pivot_pct` (0 = left/bottom edge, 1 = right/top edge).
    pub fn apply(&self, factor: f64, pivot_pct: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            trace!(factor, "ignoring invalid zoom factor");
            return false;
        }
        let pivot_pct = pivot_pct.clamp(0.0, 1.0);

        let event = {
            let mut axes = self.axes.borrow_mut();
            let enabled = axes.zoom_enabled();
            if !enabled.x && !enabled.y {
                return false;
            }

            let limits = axes.zoom_limits();
            let zoom_in_limit = axes.zoom_in_limit_x();
            for scale in axes.scales_mut() {
                if enabled.x {
                    let mut range = AxisRange::new(scale.x.min, scale.x.max);
                    if let Some(l) = limits {
                        range = range.with_limits(l.x_min, l.x_max);
                    }
                    ViewController::zoom_axis_at(
                        &mut range,
                        pivot_pct,
                        factor,
                        zoom_in_limit,
                        limits.map(|l| l.width()),
                    );
                    scale.x.min = range.min;
                    scale.x.max = range.max;
                }
                if enabled.y {
                    let mut range = AxisRange::new(scale.y.min, scale.y.max);
                    if let Some(l) = limits {
                        range = range.with_limits(l.y_min, l.y_max);
                    }
                    ViewController::zoom_axis_at(
                        &mut range,
                        pivot_pct,
                        factor,
                        0.0,
                        limits.map(|l| l.height()),
                    );
                    scale.y.min = range.min;
                    scale.y.max = range.max;
                }
            }

            let (x_min, x_max) = axes.x_range(0).unwrap_or_default();
            ZoomEvent::Applied {
                factor,
                x_min,
                x_max,
            }
        };
        trace!(?event, "zoom applied");

        self.listeners.notify(&event);
        true
    }

    /// Restores the initial ranges. Returns `false` when zooming is disabled.
    pub fn reset(&self) -> bool {
        let event = {
            let mut axes = self.axes.borrow_mut();
            let enabled = axes.zoom_enabled();
            if !enabled.x && !enabled.y {
                return false;
            }
            axes.restore_initial_ranges();
            let (x_min, x_max) = axes.x_range(0).unwrap_or_default();
            ZoomEvent::Reset { x_min, x_max }
        };
        trace!(?event, "zoom reset");

        self.listeners.notify(&event);
        true
    }

    pub fn add_zoom_listener(&self, listener: impl FnMut(&ZoomEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_zoom_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
