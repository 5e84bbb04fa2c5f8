//! Connected charts
//!
//! Entry point of the crate: builds a base (detail) view and a derived overview
//! view from one dataset and keeps them synchronised.

use crate::chart::{ChartType, CombinedChart, DisplayContext};
use crate::chart_view::ChartView;
use crate::data_types::{
    shared, AxisRangeModel, Dataset, RendererConfig, SeriesStyle, Shared,
};
use crate::overview::{apply_ranges, build_overview, resync_series, DataExtent, OverviewOptions};
use crate::sync_controller::{SyncController, SyncSubscriptions};
use crate::theme::{Rgba, DEFAULT_OVERLAY_COLOR};
use crate::tools::{MoveTool, OverlayWindow, DEFAULT_DRAG_THRESHOLD_DP};
use crate::utils::date_formatter::format_range;
use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::info;

/// Line width of the series copies drawn in the overview.
const OVERVIEW_LINE_WIDTH: f32 = 2.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectedChartsConfig {
    pub overlay_color: Rgba,
    /// Edge grab distance for the overlay, in density-independent pixels.
    pub drag_threshold_dp: f32,
    /// Half-width of the initial window as a fraction of the full X extent.
    pub initial_window_fraction: f64,
    /// Narrowest window the overlay (and base zoom) may shrink to, in X units.
    pub min_window_width: f64,
    /// Draw grab handles on the overlay edges.
    pub show_drag_handles: bool,
    pub display: DisplayContext,
}

impl Default for ConnectedChartsConfig {
    fn default() -> Self {
        Self {
            overlay_color: DEFAULT_OVERLAY_COLOR,
            drag_threshold_dp: DEFAULT_DRAG_THRESHOLD_DP,
            initial_window_fraction: 0.25,
            min_window_width: 0.0,
            show_drag_handles: true,
            display: DisplayContext::default(),
        }
    }
}

impl ConnectedChartsConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_err("invalid connected charts configuration")
    }
}

#[derive(Debug)]
pub struct ConnectedCharts {
    base_view: ChartView,
    overview_view: ChartView,
    base_dataset: Shared<Dataset>,
    controller: Rc<SyncController>,
    subscriptions: SyncSubscriptions,
    overlay_index: usize,
    overview_options: OverviewOptions,
    date_format: String,
    config: ConnectedChartsConfig,
}

impl ConnectedCharts {
    /// Builds both views with the default configuration.
    ///
    /// `chart_types` holds one entry per base series; `date_format` is a `strftime`
    /// pattern used for time X axes (empty picks one from the visible span).
    pub fn new(
        dataset: Dataset,
        renderer: RendererConfig,
        chart_types: &[ChartType],
        date_format: &str,
    ) -> Result<Self> {
        Self::with_config(
            dataset,
            renderer,
            chart_types,
            date_format,
            ConnectedChartsConfig::default(),
        )
    }

    pub fn with_config(
        dataset: Dataset,
        renderer: RendererConfig,
        chart_types: &[ChartType],
        date_format: &str,
        config: ConnectedChartsConfig,
    ) -> Result<Self> {
        validate(&dataset, &renderer, chart_types)?;
        let scale_count = renderer.scale_count;

        let mut base_axes = AxisRangeModel::new(scale_count);
        base_axes.set_pan_enabled(true, false);
        base_axes.set_zoom_enabled(true, false);

        let overview_options = OverviewOptions {
            initial_window_fraction: config.initial_window_fraction,
            min_window_width: config.min_window_width,
            x_format: renderer.x_format,
        };
        let overview = build_overview(&dataset, &mut base_axes, scale_count, &overview_options);
        let overlay_index = overview.overlay_index;

        let base_styles: Vec<SeriesStyle> = (0..dataset.series_count())
            .map(|i| renderer.style_at(i))
            .collect();
        let mut overview_styles: Vec<SeriesStyle> = base_styles
            .iter()
            .map(|s| SeriesStyle {
                line_width: OVERVIEW_LINE_WIDTH,
                ..*s
            })
            .collect();
        overview_styles.push(SeriesStyle::with_color(config.overlay_color));

        let mut overview_types = chart_types.to_vec();
        overview_types.push(if config.show_drag_handles {
            ChartType::DragControl
        } else {
            ChartType::Overlay
        });
        let mut overview_chart = CombinedChart::new(&overview_types);
        overview_chart.inject_context(config.display);

        let base_dataset = shared(dataset);
        let base_view = ChartView::new(
            base_dataset.clone(),
            shared(base_axes),
            CombinedChart::new(chart_types),
            base_styles,
        );

        let overview_dataset = shared(overview.dataset);
        let overview_axes = shared(overview.axes);
        let move_tool = MoveTool::new(
            overview_dataset.clone(),
            overview_axes.clone(),
            overlay_index,
            config.display.dp_to_px(config.drag_threshold_dp),
        );
        let overview_view = ChartView::new(
            overview_dataset,
            overview_axes,
            overview_chart,
            overview_styles,
        )
        .with_move_tool(move_tool)
        .with_handle_color(renderer.theme.drag_handle);

        let controller = Rc::new(SyncController::new(&base_view, &overview_view, overlay_index));
        let subscriptions = controller.attach(&base_view, &overview_view)?;

        info!(
            series = overlay_index,
            scale_count,
            start = overview.window.start,
            end = overview.window.end,
            "connected charts created"
        );

        Ok(Self {
            base_view,
            overview_view,
            base_dataset,
            controller,
            subscriptions,
            overlay_index,
            overview_options,
            date_format: date_format.to_owned(),
            config,
        })
    }

    /// Requests a redraw of both views.
    pub fn repaint(&self) {
        self.base_view.repaint();
        self.overview_view.repaint();
    }

    pub fn base_chart_view(&self) -> &ChartView {
        &self.base_view
    }

    pub fn base_chart_view_mut(&mut self) -> &mut ChartView {
        &mut self.base_view
    }

    pub fn overview_chart_view(&self) -> &ChartView {
        &self.overview_view
    }

    pub fn overview_chart_view_mut(&mut self) -> &mut ChartView {
        &mut self.overview_view
    }

    pub fn base_chart_renderer(&self) -> &Shared<AxisRangeModel> {
        self.base_view.axes()
    }

    pub fn overview_chart_renderer(&self) -> &Shared<AxisRangeModel> {
        self.overview_view.axes()
    }

    /// Index of the overlay series in the overview dataset.
    pub fn overlay_index(&self) -> usize {
        self.overlay_index
    }

    pub fn overlay_window(&self) -> Option<OverlayWindow> {
        self.overview_view
            .dataset()
            .borrow()
            .series_at(self.overlay_index)
            .and_then(OverlayWindow::from_series)
    }

    pub fn overlay_color(&self) -> Rgba {
        self.config.overlay_color
    }

    pub fn set_overlay_color(&mut self, color: Rgba) {
        self.config.overlay_color = color;
        if let Some(style) = self.overview_view.styles_mut().get_mut(self.overlay_index) {
            style.color = color;
        }
        self.overview_view.repaint();
    }

    pub fn config(&self) -> &ConnectedChartsConfig {
        &self.config
    }

    /// The base view's visible X range, formatted for display.
    pub fn visible_range_label(&self) -> Option<String> {
        let (start, end) = self.base_view.axes().borrow().x_range(0)?;
        Some(format_range(
            start,
            end,
            self.overview_options.x_format,
            &self.date_format,
        ))
    }

    /// Re-copies the base series into the overview after the host edited them,
    /// recomputes ranges and limits, and resyncs the overlay with the base view.
    ///
    /// The number of series must not change.
    pub fn resynchronize(&mut self) -> Result<()> {
        let base = self.base_dataset.borrow();
        ensure!(
            base.series_count() == self.overlay_index,
            "base dataset now has {} series, expected {}; rebuild the connected charts",
            base.series_count(),
            self.overlay_index
        );

        {
            let mut overview_dataset = self.overview_view.dataset().borrow_mut();
            resync_series(&base, &mut overview_dataset);
        }
        {
            let mut overview_axes = self.overview_view.axes().borrow_mut();
            let mut base_axes = self.base_view.axes().borrow_mut();
            let extent = DataExtent::compute(&base, base_axes.scale_count());
            apply_ranges(
                &extent,
                &mut overview_axes,
                &mut base_axes,
                &self.overview_options,
            );
            overview_axes.mark_initial_ranges();
            base_axes.refit_to_pan_limits();
        }
        drop(base);

        self.controller.on_base_view_changed();
        self.base_view.repaint();
        Ok(())
    }
}

impl Drop for ConnectedCharts {
    fn drop(&mut self) {
        SyncController::detach(&self.base_view, &self.overview_view, self.subscriptions);
    }
}

fn validate(dataset: &Dataset, renderer: &RendererConfig, chart_types: &[ChartType]) -> Result<()> {
    ensure!(renderer.scale_count > 0, "renderer must declare at least one scale group");
    ensure!(
        chart_types.len() == dataset.series_count(),
        "{} chart types given for {} series",
        chart_types.len(),
        dataset.series_count()
    );
    ensure!(
        !chart_types.iter().any(|t| matches!(t, ChartType::Overlay | ChartType::DragControl)),
        "overlay chart types are reserved for the overview window"
    );
    for (index, series) in dataset.iter().enumerate() {
        ensure!(
            series.scale_group() < renderer.scale_count,
            "series {} ('{}') uses scale group {} but only {} are configured",
            index,
            series.title(),
            series.scale_group(),
            renderer.scale_count
        );
    }
    Ok(())
}
