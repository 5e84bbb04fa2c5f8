use crate::data_types::AxisFormat;
use crate::theme::{ChartTheme, Rgba};
use serde::{Deserialize, Serialize};

/// Visual settings for one series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub color: Rgba,
    pub line_width: f32,
    pub point_radius: f32,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            color: Rgba::new(0, 0, 255, 255),
            line_width: 2.0,
            point_radius: 3.0,
        }
    }
}

impl SeriesStyle {
    pub fn with_color(color: Rgba) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }
}

/// Renderer settings shared by both views: scale groups, series styling and
/// how X values are interpreted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub scale_count: usize,
    pub series_styles: Vec<SeriesStyle>,
    pub x_format: AxisFormat,
    pub theme: ChartTheme,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            scale_count: 1,
            series_styles: vec![],
            x_format: AxisFormat::Numeric,
            theme: ChartTheme::default(),
        }
    }
}

impl RendererConfig {
    /// Style for series `index`, falling back to the theme palette.
    pub fn style_at(&self, index: usize) -> SeriesStyle {
        self.series_styles
            .get(index)
            .copied()
            .unwrap_or_else(|| SeriesStyle::with_color(self.theme.palette_color(index)))
    }
}
