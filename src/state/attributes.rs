use serde::{Deserialize, Serialize};

/// Optional per-bundle attributes a caller may supply alongside the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    PlotTypes,
    MarkerShapes,
    Colors,
    LineWidths,
    MarkerSizes,
    Title,
    Labels,
    Legends,
    Limits,
    UncertaintyLowerBound,
    UncertaintyUpperBound,
}

impl Attribute {
    /// All attributes, in the order they are validated.
    pub const ALL: [Attribute; 11] = [
        Attribute::PlotTypes,
        Attribute::MarkerShapes,
        Attribute::Colors,
        Attribute::LineWidths,
        Attribute::MarkerSizes,
        Attribute::Title,
        Attribute::Labels,
        Attribute::Legends,
        Attribute::Limits,
        Attribute::UncertaintyLowerBound,
        Attribute::UncertaintyUpperBound,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::PlotTypes => "PlotTypes",
            Attribute::MarkerShapes => "MarkerShapes",
            Attribute::Colors => "Colors",
            Attribute::LineWidths => "LineWidths",
            Attribute::MarkerSizes => "MarkerSizes",
            Attribute::Title => "Title",
            Attribute::Labels => "Labels",
            Attribute::Legends => "Legends",
            Attribute::Limits => "Limits",
            Attribute::UncertaintyLowerBound => "UncertaintyLowerBound",
            Attribute::UncertaintyUpperBound => "UncertaintyUpperBound",
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Number of entries this attribute must carry for a bundle of
    /// `series_count` series.
    pub fn expected_len(&self, series_count: usize) -> usize {
        match self {
            Attribute::Title => 1,
            Attribute::Labels => 2,
            Attribute::Limits => 4,
            _ => series_count,
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotType {
    Line,
    Scatter,
    Bars,
}

impl Default for PlotType {
    fn default() -> Self {
        PlotType::Line
    }
}

impl PlotType {
    pub const ALL: [PlotType; 3] = [PlotType::Line, PlotType::Scatter, PlotType::Bars];

    pub fn name(&self) -> &'static str {
        match self {
            PlotType::Line => "Line",
            PlotType::Scatter => "Scatter",
            PlotType::Bars => "Bars",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerShape {
    Circle,
    Square,
    Diamond,
    Up,
    Down,
    Left,
    Right,
    Cross,
    Plus,
    Asterisk,
}

impl MarkerShape {
    pub const ALL: [MarkerShape; 10] = [
        MarkerShape::Circle,
        MarkerShape::Square,
        MarkerShape::Diamond,
        MarkerShape::Up,
        MarkerShape::Down,
        MarkerShape::Left,
        MarkerShape::Right,
        MarkerShape::Cross,
        MarkerShape::Plus,
        MarkerShape::Asterisk,
    ];

    /// Single-character glyph, as used in MATLAB line specs.
    pub fn glyph(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "o",
            MarkerShape::Square => "s",
            MarkerShape::Diamond => "d",
            MarkerShape::Up => "^",
            MarkerShape::Down => "v",
            MarkerShape::Left => "<",
            MarkerShape::Right => ">",
            MarkerShape::Cross => "x",
            MarkerShape::Plus => "+",
            MarkerShape::Asterisk => "*",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            MarkerShape::Circle => "circle",
            MarkerShape::Square => "square",
            MarkerShape::Diamond => "diamond",
            MarkerShape::Up => "triangle (up)",
            MarkerShape::Down => "triangle (down)",
            MarkerShape::Left => "triangle (left)",
            MarkerShape::Right => "triangle (right)",
            MarkerShape::Cross => "x-mark",
            MarkerShape::Plus => "plus",
            MarkerShape::Asterisk => "star",
        }
    }

    /// Matches either the glyph or the long name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.glyph() == name || m.long_name().eq_ignore_ascii_case(name))
    }

    pub fn to_egui(self) -> egui_plot::MarkerShape {
        match self {
            MarkerShape::Circle => egui_plot::MarkerShape::Circle,
            MarkerShape::Square => egui_plot::MarkerShape::Square,
            MarkerShape::Diamond => egui_plot::MarkerShape::Diamond,
            MarkerShape::Up => egui_plot::MarkerShape::Up,
            MarkerShape::Down => egui_plot::MarkerShape::Down,
            MarkerShape::Left => egui_plot::MarkerShape::Left,
            MarkerShape::Right => egui_plot::MarkerShape::Right,
            MarkerShape::Cross => egui_plot::MarkerShape::Cross,
            MarkerShape::Plus => egui_plot::MarkerShape::Plus,
            MarkerShape::Asterisk => egui_plot::MarkerShape::Asterisk,
        }
    }
}

/// Straight (unmultiplied) RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesColor(pub [u8; 4]);

impl SeriesColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        SeriesColor([r, g, b, 255])
    }

    pub fn color32(&self) -> egui::Color32 {
        let [r, g, b, a] = self.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }

    /// Same color with alpha scaled to `alpha` (0.0..=1.0).
    pub fn with_alpha(&self, alpha: f32) -> egui::Color32 {
        let [r, g, b, _] = self.0;
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_lookup_ignores_case() {
        assert_eq!(Attribute::from_name("colors"), Some(Attribute::Colors));
        assert_eq!(
            Attribute::from_name("UNCERTAINTYLOWERBOUND"),
            Some(Attribute::UncertaintyLowerBound)
        );
        assert_eq!(Attribute::from_name("data1"), None);
    }

    #[test]
    fn fixed_arity_attributes() {
        assert_eq!(Attribute::Title.expected_len(7), 1);
        assert_eq!(Attribute::Labels.expected_len(7), 2);
        assert_eq!(Attribute::Limits.expected_len(7), 4);
        assert_eq!(Attribute::Colors.expected_len(7), 7);
    }

    #[test]
    fn marker_lookup_accepts_glyph_and_name() {
        assert_eq!(MarkerShape::from_name("^"), Some(MarkerShape::Up));
        assert_eq!(MarkerShape::from_name("Triangle (Down)"), Some(MarkerShape::Down));
        assert_eq!(MarkerShape::from_name("star"), Some(MarkerShape::Asterisk));
        assert_eq!(MarkerShape::from_name("hexagon"), None);
    }

    #[test]
    fn plot_type_lookup() {
        assert_eq!(PlotType::from_name("bars"), Some(PlotType::Bars));
        assert_eq!(PlotType::from_name("Histogram"), None);
        assert_eq!(PlotType::default(), PlotType::Line);
    }

    #[test]
    fn alpha_override_keeps_rgb() {
        let c = SeriesColor::rgb(10, 20, 30).with_alpha(0.5);
        assert_eq!(c.a(), 128);
    }
}
