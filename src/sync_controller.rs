//! Base/overview synchronisation
//!
//! Base pan or zoom rewrites the overlay points; an overlay move rewrites the
//! base X ranges. Each handler only mutates data and requests redraws, it never
//! replays a gesture on the opposite view, so an update cannot bounce back.

use crate::chart_view::ChartView;
use crate::data_types::{AxisRangeModel, Dataset, RepaintSignal, Shared};
use crate::tools::{ListenerId, OverlayWindow};
use eyre::Result;
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct SyncController {
    base_axes: Shared<AxisRangeModel>,
    overview_dataset: Shared<Dataset>,
    overlay_index: usize,
    base_repaint: Rc<RepaintSignal>,
    overview_repaint: Rc<RepaintSignal>,
}

/// Listener ids registered by [`SyncController::attach`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyncSubscriptions {
    pub pan: ListenerId,
    pub zoom: ListenerId,
    pub overlay_move: ListenerId,
}

impl SyncController {
    pub fn new(base: &ChartView, overview: &ChartView, overlay_index: usize) -> Self {
        Self {
            base_axes: base.axes().clone(),
            overview_dataset: overview.dataset().clone(),
            overlay_index,
            base_repaint: base.repaint_signal().clone(),
            overview_repaint: overview.repaint_signal().clone(),
        }
    }

    /// Hooks the controller into both views' gesture events.
    ///
    /// Fails if the overview has no move tool.
    pub fn attach(
        self: &Rc<Self>,
        base: &ChartView,
        overview: &ChartView,
    ) -> Result<SyncSubscriptions> {
        let overlay_move = {
            let this = Rc::clone(self);
            overview.add_move_listener(move |_| this.on_overlay_moved())?
        };
        let pan = {
            let this = Rc::clone(self);
            base.add_pan_listener(move |_| this.on_base_view_changed())
        };
        let zoom = {
            let this = Rc::clone(self);
            base.add_zoom_listener(move |_| this.on_base_view_changed())
        };
        Ok(SyncSubscriptions {
            pan,
            zoom,
            overlay_move,
        })
    }

    pub fn detach(base: &ChartView, overview: &ChartView, subscriptions: SyncSubscriptions) {
        base.remove_pan_listener(subscriptions.pan);
        base.remove_zoom_listener(subscriptions.zoom);
        overview.remove_move_listener(subscriptions.overlay_move);
    }

    /// Copies the base view's X range into the overlay series.
    pub fn on_base_view_changed(&self) {
        let Some((x_min, x_max)) = self.base_axes.borrow().x_range(0) else {
            warn!("base view has no scale group 0, overlay not updated");
            return;
        };
        let window = OverlayWindow::new(x_min, x_max);

        if let Some(series) = self
            .overview_dataset
            .borrow_mut()
            .series_at_mut(self.overlay_index)
        {
            series.replace_points(window.to_points());
        }
        debug!(start = window.start, end = window.end, "overlay synced from base view");
        self.overview_repaint.request();
    }

    /// Copies the overlay window into the X range of every base scale group.
    pub fn on_overlay_moved(&self) {
        let window = self
            .overview_dataset
            .borrow()
            .series_at(self.overlay_index)
            .and_then(OverlayWindow::from_series);
        let Some(window) = window else {
            warn!(overlay_index = self.overlay_index, "overlay series malformed, base view not updated");
            return;
        };

        {
            let mut axes = self.base_axes.borrow_mut();
            for group in 0..axes.scale_count() {
                axes.set_x_axis_min(window.start, group);
                axes.set_x_axis_max(window.end, group);
            }
        }
        debug!(start = window.start, end = window.end, "base view synced from overlay");
        self.base_repaint.request();
    }
}
