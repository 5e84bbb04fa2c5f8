//! Display-list rendering
//!
//! Turns a view's dataset into draw commands in screen space. The host
//! rasterises the commands; nothing here touches pixels.

use crate::chart::{ChartKind, CombinedChart};
use crate::data_types::{DataPoint, Dataset, Series, SeriesStyle};
use crate::theme::Rgba;
use crate::transform::{PlotTransform, ScreenPoint, ScreenRect};
use eyre::Result;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Polyline {
        points: Vec<ScreenPoint>,
        color: Rgba,
        width: f32,
    },
    Marker {
        center: ScreenPoint,
        radius: f32,
        color: Rgba,
    },
    FillRect {
        rect: ScreenRect,
        color: Rgba,
    },
}

fn project(series: &Series, transform: &PlotTransform) -> Vec<ScreenPoint> {
    series
        .points()
        .iter()
        .map(|p| transform.data_to_screen(*p, series.scale_group()))
        .collect()
}

fn paint_bars(
    series: &Series,
    style: &SeriesStyle,
    transform: &PlotTransform,
    out: &mut Vec<DrawCommand>,
) {
    let bounds = transform.bounds();
    let baseline = transform
        .data_to_screen(DataPoint::new(0.0, 0.0), series.scale_group())
        .y
        .clamp(bounds.top(), bounds.bottom());
    let bar_width = (bounds.width / series.len().max(1) as f32 * 0.8).max(1.0);
    for point in series.points() {
        let top = transform.data_to_screen(*point, series.scale_group());
        out.push(DrawCommand::FillRect {
            rect: ScreenRect::from_edges(
                top.x - bar_width / 2.0,
                top.y,
                top.x + bar_width / 2.0,
                baseline,
            ),
            color: style.color,
        });
    }
}

/// Shades everything outside the window; returns the on-screen window edges.
fn paint_overlay_shade(
    series: &Series,
    color: Rgba,
    transform: &PlotTransform,
    out: &mut Vec<DrawCommand>,
) -> Option<(f32, f32)> {
    let bounds = transform.bounds();
    let [start, end] = series.points() else {
        return None;
    };
    let left = transform
        .data_to_screen(*start, 0)
        .x
        .clamp(bounds.left(), bounds.right());
    let right = transform
        .data_to_screen(*end, 0)
        .x
        .clamp(bounds.left(), bounds.right());

    out.push(DrawCommand::FillRect {
        rect: ScreenRect::from_edges(bounds.left(), bounds.top(), left, bounds.bottom()),
        color,
    });
    out.push(DrawCommand::FillRect {
        rect: ScreenRect::from_edges(right, bounds.top(), bounds.right(), bounds.bottom()),
        color,
    });
    Some((left, right))
}

/// Paints every series with the chart kind at its index.
///
/// Series without a chart kind are skipped. Fails if a drag-control overlay
/// has not been given its display context.
pub fn paint_chart(
    dataset: &Dataset,
    chart: &CombinedChart,
    styles: &[SeriesStyle],
    handle_color: Rgba,
    transform: &PlotTransform,
) -> Result<Vec<DrawCommand>> {
    let mut out = Vec::new();
    for (index, series) in dataset.iter().enumerate() {
        let Some(kind) = chart.kind_at(index) else {
            continue;
        };
        let style = styles.get(index).copied().unwrap_or_default();
        match kind {
            ChartKind::Line => {
                if !series.is_empty() {
                    out.push(DrawCommand::Polyline {
                        points: project(series, transform),
                        color: style.color,
                        width: style.line_width,
                    });
                }
            }
            ChartKind::Scatter => {
                out.extend(project(series, transform).into_iter().map(|center| {
                    DrawCommand::Marker {
                        center,
                        radius: style.point_radius,
                        color: style.color,
                    }
                }));
            }
            ChartKind::Bar => paint_bars(series, &style, transform, &mut out),
            ChartKind::Overlay(_) => {
                paint_overlay_shade(series, style.color, transform, &mut out);
            }
            ChartKind::DragControl(drag) => {
                let half_width = drag.handle_half_width()?;
                if let Some((left, right)) =
                    paint_overlay_shade(series, style.color, transform, &mut out)
                {
                    let bounds = transform.bounds();
                    for edge in [left.round(), right.round()] {
                        out.push(DrawCommand::FillRect {
                            rect: ScreenRect::from_edges(
                                edge - half_width,
                                bounds.top(),
                                edge + half_width,
                                bounds.bottom(),
                            ),
                            color: handle_color,
                        });
                    }
                }
            }
        }
    }
    Ok(out)
}
