//! Chart kinds
//!
//! A view draws each series with one chart kind, index for index. The overlay
//! kinds draw the overview's window series; the drag-control kind also draws
//! grab handles and needs display metrics injected by the host before it can
//! draw.

use crate::utils::dp_to_px;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display metrics supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayContext {
    /// Device pixels per density-independent pixel.
    pub density: f32,
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayContext {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    pub fn dp_to_px(&self, dp: f32) -> f32 {
        dp_to_px(dp, self.density)
    }
}

/// Chart kinds that can only draw once the host has injected its display context.
pub trait SupportsExternalContextInjection {
    fn inject_context(&mut self, context: DisplayContext);

    fn context(&self) -> Option<DisplayContext>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Line,
    Bar,
    Scatter,
    Overlay,
    DragControl,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Bar => "Bar",
            Self::Scatter => "Scatter",
            Self::Overlay => "Overlay",
            Self::DragControl => "DragControl",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartType {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "Line" => Self::Line,
            "Bar" => Self::Bar,
            "Scatter" => Self::Scatter,
            "Overlay" => Self::Overlay,
            "DragControl" => Self::DragControl,
            other => bail!("unknown chart type '{other}'"),
        })
    }
}

/// Shades the plot outside the overlay window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayChart;

/// Shades the plot outside the overlay window and draws a grab handle on each edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragControlChart {
    context: Option<DisplayContext>,
}

impl DragControlChart {
    pub const HANDLE_HALF_WIDTH_DP: f32 = 8.0;

    /// Half width of a grab handle in device pixels.
    pub fn handle_half_width(&self) -> Result<f32> {
        match self.context {
            Some(ctx) => Ok(ctx.dp_to_px(Self::HANDLE_HALF_WIDTH_DP)),
            None => bail!("display context has to be injected before drawing a drag control chart"),
        }
    }
}

impl SupportsExternalContextInjection for DragControlChart {
    fn inject_context(&mut self, context: DisplayContext) {
        self.context = Some(context);
    }

    fn context(&self) -> Option<DisplayContext> {
        self.context
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Overlay(OverlayChart),
    DragControl(DragControlChart),
}

impl ChartKind {
    pub fn chart_type(&self) -> ChartType {
        match self {
            Self::Line => ChartType::Line,
            Self::Bar => ChartType::Bar,
            Self::Scatter => ChartType::Scatter,
            Self::Overlay(_) => ChartType::Overlay,
            Self::DragControl(_) => ChartType::DragControl,
        }
    }

    pub fn is_overlay(&self) -> bool {
        matches!(self, Self::Overlay(_) | Self::DragControl(_))
    }

    pub fn context_injectable_mut(&mut self) -> Option<&mut dyn SupportsExternalContextInjection> {
        match self {
            Self::DragControl(chart) => Some(chart),
            _ => None,
        }
    }
}

impl From<ChartType> for ChartKind {
    fn from(chart_type: ChartType) -> Self {
        match chart_type {
            ChartType::Line => Self::Line,
            ChartType::Bar => Self::Bar,
            ChartType::Scatter => Self::Scatter,
            ChartType::Overlay => Self::Overlay(OverlayChart),
            ChartType::DragControl => Self::DragControl(DragControlChart::default()),
        }
    }
}

/// One chart kind per series of a view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinedChart {
    kinds: Vec<ChartKind>,
}

impl CombinedChart {
    pub fn new(types: &[ChartType]) -> Self {
        Self {
            kinds: types.iter().copied().map(ChartKind::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn kind_at(&self, index: usize) -> Option<&ChartKind> {
        self.kinds.get(index)
    }

    pub fn kinds(&self) -> &[ChartKind] {
        &self.kinds
    }

    /// Hands the context to every kind that accepts one; returns how many did.
    pub fn inject_context(&mut self, context: DisplayContext) -> usize {
        let mut injected = 0;
        for chart in self.kinds.iter_mut().filter_map(ChartKind::context_injectable_mut) {
            chart.inject_context(context);
            injected += 1;
        }
        injected
    }
}
