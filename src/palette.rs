//! Fixed color palette for the Mandelbrot field.

use crate::error::FractalError;
use crate::geometry::Color;

/// The "Hope" palette (http://www.colourlovers.com/palette/524048/Hope),
/// eight entries with the first three repeated.
const HOPE_PALETTE: [&str; 8] = [
    "#04182B", "#5A8C8C", "#F2D99D", "#738585", "#AB1111", "#04182B", "#5A8C8C", "#F2D99D",
];

/// Ordered, non-empty sequence of colors. Built once per field computation
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, FractalError> {
        if colors.is_empty() {
            return Err(FractalError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// First palette entry, used for points that never escape when no solid
    /// color was requested.
    pub fn first(&self) -> Color {
        self.colors[0]
    }

    /// Color for an escape count, cycling through the palette.
    pub fn color_for(&self, iterations: u32) -> Color {
        self.colors[iterations as usize % self.colors.len()]
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Builds the hardcoded palette. A malformed entry in the table is a
/// programming error and surfaces as `MalformedHexColor` at construction.
pub fn build_palette() -> Result<Palette, FractalError> {
    let colors = HOPE_PALETTE
        .iter()
        .map(|hex| Color::from_hex(hex))
        .collect::<Result<Vec<_>, _>>()?;
    Palette::new(colors)
}
