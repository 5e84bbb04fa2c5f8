//! Headless chart view
//!
//! A `ChartView` owns the handles to one view's dataset and axes, the layout
//! rectangle the host gives it, its gesture tools and its repaint signal.
//! Pointer input lives in [`input`].

pub mod input;

use crate::chart::CombinedChart;
use crate::data_types::{shared, AxisRangeModel, Dataset, RepaintSignal, SeriesStyle, Shared};
use crate::rendering::{paint_chart, DrawCommand};
use crate::theme::Rgba;
use crate::tools::{
    ListenerId, MoveEvent, MoveTool, PanEvent, PanTool, ZoomEvent, ZoomTool,
};
use crate::transform::{PlotTransform, ScreenRect};
use eyre::{bail, eyre, Result};
use std::rc::Rc;

pub use input::PointerState;

pub struct ChartView {
    dataset: Shared<Dataset>,
    axes: Shared<AxisRangeModel>,
    chart: CombinedChart,
    styles: Vec<SeriesStyle>,
    handle_color: Rgba,
    bounds: Option<ScreenRect>,

    pan: PanTool,
    zoom: ZoomTool,
    move_tool: Option<MoveTool>,
    pointer: PointerState,

    repaint: Rc<RepaintSignal>,
}

impl ChartView {
    pub fn new(
        dataset: Shared<Dataset>,
        axes: Shared<AxisRangeModel>,
        chart: CombinedChart,
        styles: Vec<SeriesStyle>,
    ) -> Self {
        Self {
            pan: PanTool::new(axes.clone()),
            zoom: ZoomTool::new(axes.clone()),
            dataset,
            axes,
            chart,
            styles,
            handle_color: Rgba::new(255, 255, 255, 204),
            bounds: None,
            move_tool: None,
            pointer: PointerState::default(),
            repaint: Rc::new(RepaintSignal::new()),
        }
    }

    /// Convenience constructor that wraps owned state in fresh handles.
    pub fn from_parts(
        dataset: Dataset,
        axes: AxisRangeModel,
        chart: CombinedChart,
        styles: Vec<SeriesStyle>,
    ) -> Self {
        Self::new(shared(dataset), shared(axes), chart, styles)
    }

    /// Routes drags to the overlay move tool instead of panning.
    pub fn with_move_tool(mut self, tool: MoveTool) -> Self {
        self.move_tool = Some(tool);
        self
    }

    pub fn with_handle_color(mut self, color: Rgba) -> Self {
        self.handle_color = color;
        self
    }

    pub fn dataset(&self) -> &Shared<Dataset> {
        &self.dataset
    }

    pub fn axes(&self) -> &Shared<AxisRangeModel> {
        &self.axes
    }

    pub fn chart(&self) -> &CombinedChart {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut CombinedChart {
        &mut self.chart
    }

    pub fn styles(&self) -> &[SeriesStyle] {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut Vec<SeriesStyle> {
        &mut self.styles
    }

    pub fn move_tool(&self) -> Option<&MoveTool> {
        self.move_tool.as_ref()
    }

    /// Layout rectangle of the plot area, set by the host.
    pub fn set_bounds(&mut self, bounds: ScreenRect) {
        self.bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<ScreenRect> {
        self.bounds
    }

    /// Screen/data mapping for the current axis ranges.
    ///
    /// Fails until the host has laid the view out.
    pub fn transform(&self) -> Result<PlotTransform> {
        let bounds = self
            .bounds
            .ok_or_else(|| eyre!("chart view has no plot bounds; call set_bounds before use"))?;
        if bounds.is_empty() {
            bail!("chart view plot bounds are empty ({} x {})", bounds.width, bounds.height);
        }
        Ok(PlotTransform::new(&self.axes.borrow(), bounds))
    }

    pub fn repaint(&self) {
        self.repaint.request();
    }

    pub fn repaint_signal(&self) -> &Rc<RepaintSignal> {
        &self.repaint
    }

    /// Builds the display list for the current state.
    pub fn render(&self) -> Result<Vec<DrawCommand>> {
        let transform = self.transform()?;
        paint_chart(
            &self.dataset.borrow(),
            &self.chart,
            &self.styles,
            self.handle_color,
            &transform,
        )
    }

    /// Zooms around `pivot_pct` of the plot width; `factor < 1` zooms in.
    pub fn zoom(&self, factor: f64, pivot_pct: f64) -> bool {
        let applied = self.zoom.apply(factor, pivot_pct);
        if applied {
            self.repaint();
        }
        applied
    }

    pub fn zoom_reset(&self) -> bool {
        let applied = self.zoom.reset();
        if applied {
            self.repaint();
        }
        applied
    }

    pub fn add_pan_listener(&self, listener: impl FnMut(&PanEvent) + 'static) -> ListenerId {
        self.pan.add_pan_listener(listener)
    }

    pub fn remove_pan_listener(&self, id: ListenerId) -> bool {
        self.pan.remove_pan_listener(id)
    }

    pub fn add_zoom_listener(&self, listener: impl FnMut(&ZoomEvent) + 'static) -> ListenerId {
        self.zoom.add_zoom_listener(listener)
    }

    pub fn remove_zoom_listener(&self, id: ListenerId) -> bool {
        self.zoom.remove_zoom_listener(id)
    }

    pub fn add_move_listener(
        &self,
        listener: impl FnMut(&MoveEvent) + 'static,
    ) -> Result<ListenerId> {
        match &self.move_tool {
            Some(tool) => Ok(tool.add_move_listener(listener)),
            None => bail!("chart view has no overlay move tool"),
        }
    }

    pub fn remove_move_listener(&self, id: ListenerId) -> bool {
        self.move_tool
            .as_ref()
            .is_some_and(|tool| tool.remove_move_listener(id))
    }
}

impl std::fmt::Debug for ChartView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartView")
            .field("series", &self.dataset.borrow().series_count())
            .field("bounds", &self.bounds)
            .field("move_tool", &self.move_tool)
            .field("pointer", &self.pointer)
            .field("repaint", &self.repaint)
            .finish()
    }
}
