use serde::{Deserialize, Serialize};

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Semi-transparent black.
pub const DEFAULT_OVERLAY_COLOR: Rgba = Rgba::new(0, 0, 0, 128);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub drag_handle: Rgba,
    pub palette: Vec<Rgba>,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            drag_handle: Rgba::new(255, 255, 255, 204),
            palette: vec![
                Rgba::opaque(31, 119, 180),
                Rgba::opaque(255, 127, 14),
                Rgba::opaque(44, 160, 44),
                Rgba::opaque(214, 39, 40),
                Rgba::opaque(148, 103, 189),
            ],
        }
    }
}

impl ChartTheme {
    pub fn palette_color(&self, index: usize) -> Rgba {
        if self.palette.is_empty() {
            return Rgba::opaque(0, 0, 255);
        }
        self.palette[index % self.palette.len()]
    }
}
