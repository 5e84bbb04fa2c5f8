pub mod date_formatter;

/// Converts density-independent pixels to whole device pixels.
pub fn dp_to_px(dp: f32, density: f32) -> f32 {
    (dp * density + 0.5).floor()
}
