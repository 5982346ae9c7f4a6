use serde::{Deserialize, Serialize};

use crate::state::attributes::{Attribute, MarkerShape, PlotType, SeriesColor};

/// Which optional attributes the caller supplied for a bundle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesFeatureFlags {
    pub plot_types: bool,
    pub marker_shapes: bool,
    pub colors: bool,
    pub line_widths: bool,
    pub marker_sizes: bool,
    pub title: bool,
    pub labels: bool,
    pub legends: bool,
    pub limits: bool,
    pub uncertainty_lower: bool,
    pub uncertainty_upper: bool,
}

impl SeriesFeatureFlags {
    pub fn is_set(&self, attribute: Attribute) -> bool {
        match attribute {
            Attribute::PlotTypes => self.plot_types,
            Attribute::MarkerShapes => self.marker_shapes,
            Attribute::Colors => self.colors,
            Attribute::LineWidths => self.line_widths,
            Attribute::MarkerSizes => self.marker_sizes,
            Attribute::Title => self.title,
            Attribute::Labels => self.labels,
            Attribute::Legends => self.legends,
            Attribute::Limits => self.limits,
            Attribute::UncertaintyLowerBound => self.uncertainty_lower,
            Attribute::UncertaintyUpperBound => self.uncertainty_upper,
        }
    }

    pub fn set(&mut self, attribute: Attribute) {
        let flag = match attribute {
            Attribute::PlotTypes => &mut self.plot_types,
            Attribute::MarkerShapes => &mut self.marker_shapes,
            Attribute::Colors => &mut self.colors,
            Attribute::LineWidths => &mut self.line_widths,
            Attribute::MarkerSizes => &mut self.marker_sizes,
            Attribute::Title => &mut self.title,
            Attribute::Labels => &mut self.labels,
            Attribute::Legends => &mut self.legends,
            Attribute::Limits => &mut self.limits,
            Attribute::UncertaintyLowerBound => &mut self.uncertainty_lower,
            Attribute::UncertaintyUpperBound => &mut self.uncertainty_upper,
        };
        *flag = true;
    }

    /// Both bounds are needed to shade a band.
    pub fn has_uncertainty_band(&self) -> bool {
        self.uncertainty_lower && self.uncertainty_upper
    }
}

/// One subplot cell: the series data plus its optional styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotBundle {
    /// Independent variable, one sequence per series. Empty until normalized
    /// when the caller supplied only dependent data.
    pub primary_axis: Vec<Vec<f64>>,
    /// Dependent variable, one sequence per series.
    pub secondary_axis: Vec<Vec<f64>>,
    pub plot_types: Vec<PlotType>,
    pub marker_shapes: Vec<MarkerShape>,
    pub colors: Vec<SeriesColor>,
    pub line_widths: Vec<f64>,
    pub marker_sizes: Vec<f64>,
    pub title: Vec<String>,
    pub labels: Vec<String>,
    pub legends: Vec<String>,
    /// xmin, xmax, ymin, ymax
    pub limits: Vec<f64>,
    pub uncertainty_lower: Vec<Vec<f64>>,
    pub uncertainty_upper: Vec<Vec<f64>>,
    pub flags: SeriesFeatureFlags,
}

impl PlotBundle {
    /// A bundle carrying only dependent-variable data.
    pub fn from_series(secondary_axis: Vec<Vec<f64>>) -> Self {
        Self {
            secondary_axis,
            ..Default::default()
        }
    }

    /// Number of series, taken from the independent axis once it exists.
    pub fn series_count(&self) -> usize {
        if self.primary_axis.is_empty() {
            self.secondary_axis.len()
        } else {
            self.primary_axis.len()
        }
    }

    /// Length of the sequence backing `attribute`.
    pub fn attribute_len(&self, attribute: Attribute) -> usize {
        match attribute {
            Attribute::PlotTypes => self.plot_types.len(),
            Attribute::MarkerShapes => self.marker_shapes.len(),
            Attribute::Colors => self.colors.len(),
            Attribute::LineWidths => self.line_widths.len(),
            Attribute::MarkerSizes => self.marker_sizes.len(),
            Attribute::Title => self.title.len(),
            Attribute::Labels => self.labels.len(),
            Attribute::Legends => self.legends.len(),
            Attribute::Limits => self.limits.len(),
            Attribute::UncertaintyLowerBound => self.uncertainty_lower.len(),
            Attribute::UncertaintyUpperBound => self.uncertainty_upper.len(),
        }
    }

    pub fn title_or_default(&self) -> &str {
        match self.title.first() {
            Some(t) if self.flags.title => t.as_str(),
            _ => "Figure",
        }
    }

    pub fn plot_type(&self, series: usize) -> PlotType {
        if self.flags.plot_types {
            self.plot_types.get(series).copied().unwrap_or_default()
        } else {
            PlotType::default()
        }
    }

    pub fn legend(&self, series: usize) -> &str {
        if self.flags.legends {
            self.legends.get(series).map(String::as_str).unwrap_or("")
        } else {
            ""
        }
    }

    pub fn color(&self, series: usize) -> Option<SeriesColor> {
        if self.flags.colors {
            self.colors.get(series).copied()
        } else {
            None
        }
    }

    pub fn marker_shape(&self, series: usize) -> Option<MarkerShape> {
        if self.flags.marker_shapes {
            self.marker_shapes.get(series).copied()
        } else {
            None
        }
    }

    pub fn line_width(&self, series: usize) -> Option<f64> {
        if self.flags.line_widths {
            self.line_widths.get(series).copied()
        } else {
            None
        }
    }

    pub fn marker_size(&self, series: usize) -> Option<f64> {
        if self.flags.marker_sizes {
            self.marker_sizes.get(series).copied()
        } else {
            None
        }
    }
}

/// One figure window: a name, a rows x cols grid, one bundle per cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRequest {
    pub name: String,
    /// rows, cols; kept as the caller supplied them until validated.
    pub grid: Vec<f64>,
    pub plots: Vec<PlotBundle>,
}

impl FigureRequest {
    pub fn new(name: impl Into<String>, rows: usize, cols: usize, plots: Vec<PlotBundle>) -> Self {
        Self {
            name: name.into(),
            grid: vec![rows as f64, cols as f64],
            plots,
        }
    }

    /// Grid shape when it is two positive integers whose product fits in
    /// a `usize`.
    pub fn grid_shape(&self) -> Option<(usize, usize)> {
        let &[rows, cols] = self.grid.as_slice() else {
            return None;
        };
        let rows = grid_dimension(rows)?;
        let cols = grid_dimension(cols)?;
        rows.checked_mul(cols).map(|_| (rows, cols))
    }

    /// Number of cells in the grid, `None` when the grid is invalid.
    pub fn cell_count(&self) -> Option<usize> {
        self.grid_shape().map(|(rows, cols)| rows * cols)
    }
}

fn grid_dimension(value: f64) -> Option<usize> {
    if value.fract() != 0.0 || value < 1.0 {
        return None;
    }
    // `as` saturates, so a value that does not survive the trip back is
    // out of range.
    let dim = value as usize;
    (dim as f64 == value).then_some(dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_round_trip_through_attribute() {
        let mut flags = SeriesFeatureFlags::default();
        for attribute in Attribute::ALL {
            assert!(!flags.is_set(attribute));
            flags.set(attribute);
            assert!(flags.is_set(attribute));
        }
        assert!(flags.has_uncertainty_band());
    }

    #[test]
    fn series_count_falls_back_to_dependent_axis() {
        let mut bundle = PlotBundle::from_series(vec![vec![1.0], vec![2.0]]);
        assert_eq!(bundle.series_count(), 2);
        bundle.primary_axis = vec![vec![1.0]];
        assert_eq!(bundle.series_count(), 1);
    }

    #[test]
    fn unflagged_styling_is_ignored() {
        let bundle = PlotBundle {
            title: vec!["Pressure".into()],
            colors: vec![SeriesColor::rgb(1, 2, 3)],
            ..PlotBundle::from_series(vec![vec![1.0]])
        };
        assert_eq!(bundle.title_or_default(), "Figure");
        assert_eq!(bundle.color(0), None);
    }

    #[test]
    fn grid_shape_rejects_fractional_and_zero() {
        let mut fig = FigureRequest::new("f", 2, 3, Vec::new());
        assert_eq!(fig.grid_shape(), Some((2, 3)));
        fig.grid = vec![1.5, 2.0];
        assert_eq!(fig.grid_shape(), None);
        fig.grid = vec![0.0, 2.0];
        assert_eq!(fig.grid_shape(), None);
        fig.grid = vec![1.0];
        assert_eq!(fig.grid_shape(), None);
    }

    #[test]
    fn grid_shape_rejects_out_of_range_dimensions() {
        let mut fig = FigureRequest::new("f", 1, 1, Vec::new());
        fig.grid = vec![1e19, 1e19];
        assert_eq!(fig.grid_shape(), None);
        assert_eq!(fig.cell_count(), None);
        fig.grid = vec![f64::INFINITY, 1.0];
        assert_eq!(fig.grid_shape(), None);
        fig.grid = vec![f64::NAN, 1.0];
        assert_eq!(fig.grid_shape(), None);
        // Each side fits, the product does not.
        fig.grid = vec![4_294_967_296.0, 4_294_967_296.0];
        assert_eq!(fig.grid_shape(), None);
        fig.grid = vec![3.0, 4.0];
        assert_eq!(fig.cell_count(), Some(12));
    }
}
