//! linked_chart crate: a detail chart paired with an overview chart whose
//! draggable window selects the detail's visible X range.

pub mod chart;
pub mod chart_view;
pub mod connected_charts;
pub mod data_types;
pub mod overview;
pub mod rendering;
pub mod scales;
pub mod sync_controller;
pub mod theme;
pub mod tools;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use chart::{ChartType, CombinedChart, DisplayContext, SupportsExternalContextInjection};
pub use chart_view::ChartView;
pub use connected_charts::{ConnectedCharts, ConnectedChartsConfig};
pub use data_types::{AxisFormat, AxisRangeModel, DataPoint, Dataset, RendererConfig, Series};
pub use sync_controller::SyncController;
pub use tools::{GestureMode, MoveTool, OverlayWindow};
pub use transform::{ScreenPoint, ScreenRect};
