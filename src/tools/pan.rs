use crate::data_types::{AxisRange, AxisRangeModel, Shared};
use crate::tools::{ListenerId, ListenerRegistry};
use crate::transform::{ScreenPoint, ScreenRect};
use crate::view_controller::ViewController;
use tracing::trace;

/// Emitted after a pan has been applied, carrying the new X range of scale group 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub x_min: f64,
    pub x_max: f64,
}

/// Drag-to-pan for a chart view, bounded by the view's pan limits.
pub struct PanTool {
    axes: Shared<AxisRangeModel>,
    listeners: ListenerRegistry<PanEvent>,
}

impl PanTool {
    pub fn new(axes: Shared<AxisRangeModel>) -> Self {
        Self {
            axes,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Pans by the pointer delta between `from` and `to`.
    ///
    /// Returns `false` when panning is disabled for both axes or the pointer did not move.
    pub fn apply(&self, bounds: ScreenRect, from: ScreenPoint, to: ScreenPoint) -> bool {
        let event = {
            let mut axes = self.axes.borrow_mut();
            let enabled = axes.pan_enabled();
            let (dx, dy) = (to.x - from.x, to.y - from.y);
            let pan_x = enabled.x && dx != 0.0;
            let pan_y = enabled.y && dy != 0.0;
            if !pan_x && !pan_y {
                return false;
            }

            let limits = axes.pan_limits();
            for scale in axes.scales_mut() {
                if pan_x {
                    let mut range = AxisRange::new(scale.x.min, scale.x.max);
                    if let Some(l) = limits {
                        range = range.with_limits(l.x_min, l.x_max);
                    }
                    ViewController::pan_axis(&mut range, dx, bounds.width, false);
                    scale.x.min = range.min;
                    scale.x.max = range.max;
                }
                if pan_y {
                    let mut range = AxisRange::new(scale.y.min, scale.y.max);
                    if let Some(l) = limits {
                        range = range.with_limits(l.y_min, l.y_max);
                    }
                    ViewController::pan_axis(&mut range, dy, bounds.height, true);
                    scale.y.min = range.min;
                    scale.y.max = range.max;
                }
            }

            let (x_min, x_max) = axes.x_range(0).unwrap_or_default();
            PanEvent { x_min, x_max }
        };
        trace!(x_min = event.x_min, x_max = event.x_max, "pan applied");

        self.listeners.notify(&event);
        true
    }

    pub fn add_pan_listener(&self, listener: impl FnMut(&PanEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_pan_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}
