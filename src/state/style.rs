use egui_plot::Corner;

use crate::state::attributes::SeriesColor;

/// Fallback series colors, cycled by series index.
pub const COLOR_PALETTE: [SeriesColor; 12] = [
    SeriesColor::rgb(255, 0, 0),     // Red
    SeriesColor::rgb(0, 255, 0),     // Green
    SeriesColor::rgb(0, 0, 255),     // Blue
    SeriesColor::rgb(255, 255, 0),   // Yellow
    SeriesColor::rgb(255, 0, 255),   // Magenta
    SeriesColor::rgb(0, 255, 255),   // Cyan
    SeriesColor::rgb(255, 165, 0),   // Orange
    SeriesColor::rgb(128, 0, 128),   // Purple
    SeriesColor::rgb(0, 128, 0),     // Dark Green
    SeriesColor::rgb(0, 0, 128),     // Navy
    SeriesColor::rgb(255, 192, 203), // Pink
    SeriesColor::rgb(165, 42, 42),   // Brown
];

pub fn color_for_index(index: usize) -> SeriesColor {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

/// Styling applied to one render pass.
///
/// Values here only fill in what a bundle leaves unset; per-series
/// attributes always win.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Marker radius in points.
    pub marker_size: f32,
    /// Bar width in data units.
    pub bar_width: f64,
    /// Fill alpha of uncertainty bands, 0.0..=1.0.
    pub band_alpha: f32,
    /// Line width in points.
    pub line_width: f32,
    pub legend_corner: Corner,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            marker_size: 4.0,
            bar_width: 0.25,
            band_alpha: 0.25,
            line_width: 1.5,
            legend_corner: Corner::LeftBottom,
        }
    }
}

impl StyleConfig {
    /// Clamp user-edited values back into a drawable range.
    pub fn sanitized(mut self) -> Self {
        self.marker_size = self.marker_size.clamp(0.5, 30.0);
        self.bar_width = self.bar_width.clamp(0.01, 10.0);
        self.band_alpha = self.band_alpha.clamp(0.0, 1.0);
        self.line_width = self.line_width.clamp(0.1, 20.0);
        self
    }
}
