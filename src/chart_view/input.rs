use super::ChartView;
use crate::transform::ScreenPoint;
use crate::view_controller::ViewController;
use eyre::Result;
use tracing::trace;

/// Pointer tracking between down and up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub last: Option<ScreenPoint>,
}

impl ChartView {
    /// Starts a gesture. Any previous overlay gesture mode is discarded.
    pub fn pointer_down(&mut self, position: ScreenPoint) -> Result<()> {
        self.transform()?;
        if let Some(tool) = self.move_tool.as_mut() {
            tool.reset();
        }
        self.pointer.last = Some(position);
        Ok(())
    }

    /// Continues a gesture: moves the overlay when the view has a move tool,
    /// pans otherwise. Moves without a pressed pointer are ignored.
    pub fn pointer_move(&mut self, position: ScreenPoint) -> Result<()> {
        let Some(last) = self.pointer.last else {
            return Ok(());
        };
        let transform = self.transform()?;

        let changed = match self.move_tool.as_mut() {
            Some(tool) => {
                let before = tool.window();
                let after = tool.apply(&transform, last, position)?;
                before != Some(after)
            }
            None => self.pan.apply(transform.bounds(), last, position),
        };
        if changed {
            self.repaint();
        }
        self.pointer.last = Some(position);
        Ok(())
    }

    /// Ends the gesture.
    pub fn pointer_up(&mut self) {
        if let Some(tool) = self.move_tool.as_mut() {
            tool.reset();
        }
        self.pointer.last = None;
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Wheel or pinch zoom around `position`; positive `delta` zooms in.
    pub fn scroll_zoom(&self, delta: f32, position: ScreenPoint) -> Result<bool> {
        let bounds = self.transform()?.bounds();
        let pivot_pct = ((position.x - bounds.left()) / bounds.width).clamp(0.0, 1.0) as f64;
        let factor = ViewController::compute_zoom_factor(delta, 100.0);
        trace!(delta, factor, pivot_pct, "scroll zoom");
        Ok(self.zoom(factor, pivot_pct))
    }
}
