//! The overlay "move" tool.
//!
//! Interprets a pointer drag on the overview chart as one of three gestures,
//! chosen on the first move of the gesture and kept until [`MoveTool::reset`]:
//!
//! * grabbing near the left edge resizes the window from the left,
//! * grabbing near the right edge resizes it from the right,
//! * grabbing anywhere else moves the whole window, keeping its width.
//!
//! The window never leaves the overview's pan limits. Edge drags that would
//! cross a limit or make the window narrower than the zoom-in limit are ignored
//! for that update; moves are clamped flush against the limit instead.

use crate::data_types::{AxisRange, AxisRangeModel, DataPoint, Dataset, Series, Shared};
use crate::tools::{ListenerId, ListenerRegistry};
use crate::transform::{CoordinateTransform, ScreenPoint};
use crate::view_controller::ViewController;
use eyre::{eyre, Result};
use tracing::trace;

/// Default edge grab distance, in density-independent pixels.
pub const DEFAULT_DRAG_THRESHOLD_DP: f32 = 16.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GestureMode {
    #[default]
    Idle,
    DraggingLeftEdge,
    DraggingRightEdge,
    MovingWindow,
}

/// The X range shown by the base chart, as carried by the overlay series.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayWindow {
    pub start: f64,
    pub end: f64,
}

impl OverlayWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    pub fn center(&self) -> f64 {
        self.start + self.width() / 2.0
    }

    /// Reads the window from a two-point overlay series.
    pub fn from_series(series: &Series) -> Option<Self> {
        match series.points() {
            [start, end] => Some(Self::new(start.x, end.x)),
            _ => None,
        }
    }

    pub fn to_points(self) -> [DataPoint; 2] {
        [DataPoint::new(self.start, 0.0), DataPoint::new(self.end, 0.0)]
    }
}

/// Emitted after the overlay series has been updated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    pub window: OverlayWindow,
    pub mode: GestureMode,
}

pub struct MoveTool {
    dataset: Shared<Dataset>,
    axes: Shared<AxisRangeModel>,
    overlay_index: usize,
    drag_threshold: f32,
    mode: GestureMode,
    listeners: ListenerRegistry<MoveEvent>,
}

impl MoveTool {
    /// `drag_threshold` is in device pixels.
    pub fn new(
        dataset: Shared<Dataset>,
        axes: Shared<AxisRangeModel>,
        overlay_index: usize,
        drag_threshold: f32,
    ) -> Self {
        Self {
            dataset,
            axes,
            overlay_index,
            drag_threshold,
            mode: GestureMode::Idle,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    pub fn drag_threshold(&self) -> f32 {
        self.drag_threshold
    }

    pub fn overlay_index(&self) -> usize {
        self.overlay_index
    }

    /// Current overlay window, if the overlay series is well formed.
    pub fn window(&self) -> Option<OverlayWindow> {
        self.dataset
            .borrow()
            .series_at(self.overlay_index)
            .and_then(OverlayWindow::from_series)
    }

    /// Applies one pointer move from `from` to `to` (screen space).
    pub fn apply(
        &mut self,
        transform: &dyn CoordinateTransform,
        from: ScreenPoint,
        to: ScreenPoint,
    ) -> Result<OverlayWindow> {
        let (limits, zoom_in_limit) = {
            let axes = self.axes.borrow();
            let limits = axes
                .pan_limits()
                .ok_or_else(|| eyre!("overview pan limits must be set before moving the overlay"))?;
            (limits, axes.zoom_in_limit_x())
        };
        let current = self.window().ok_or_else(|| {
            eyre!(
                "overlay series {} must hold exactly two points",
                self.overlay_index
            )
        })?;

        let edge_start = transform.x_to_screen(current.start);
        let edge_end = transform.x_to_screen(current.end);
        let limit_start = transform.x_to_screen(limits.x_min);
        let limit_end = transform.x_to_screen(limits.x_max);

        if self.mode == GestureMode::Idle {
            self.mode = if (from.x - edge_start).abs() < self.drag_threshold {
                GestureMode::DraggingLeftEdge
            } else if (from.x - edge_end).abs() < self.drag_threshold {
                GestureMode::DraggingRightEdge
            } else {
                GestureMode::MovingWindow
            };
            trace!(mode = ?self.mode, "overlay gesture started");
        }

        let target = transform.to_data_x(to.x, 0);
        let next = match self.mode {
            GestureMode::DraggingLeftEdge => {
                if target < current.end - zoom_in_limit && to.x >= limit_start {
                    OverlayWindow::new(target.max(limits.x_min), current.end)
                } else {
                    trace!(target, "left edge drag out of range");
                    current
                }
            }
            GestureMode::DraggingRightEdge => {
                if target > current.start + zoom_in_limit && to.x <= limit_end {
                    OverlayWindow::new(current.start, target.min(limits.x_max))
                } else {
                    trace!(target, "right edge drag out of range");
                    current
                }
            }
            GestureMode::MovingWindow | GestureMode::Idle => {
                let mut range = AxisRange::new(current.start, current.end);
                ViewController::move_to_center(
                    &mut range,
                    target,
                    Some((limits.x_min, limits.x_max)),
                );
                OverlayWindow::new(range.min, range.max)
            }
        };

        if let Some(series) = self.dataset.borrow_mut().series_at_mut(self.overlay_index) {
            series.replace_points(next.to_points());
        }
        trace!(start = next.start, end = next.end, "overlay window updated");

        self.listeners.notify(&MoveEvent {
            window: next,
            mode: self.mode,
        });
        Ok(next)
    }

    /// Ends the current gesture; the next move picks a fresh mode.
    pub fn reset(&mut self) {
        self.mode = GestureMode::Idle;
    }

    pub fn add_move_listener(&self, listener: impl FnMut(&MoveEvent) + 'static) -> ListenerId {
        self.listeners.add(listener)
    }

    pub fn remove_move_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl std::fmt::Debug for MoveTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveTool")
            .field("overlay_index", &self.overlay_index)
            .field("drag_threshold", &self.drag_threshold)
            .field("mode", &self.mode)
            .field("listeners", &self.listeners)
            .finish()
    }
}
