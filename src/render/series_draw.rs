use crate::state::attributes::{MarkerShape, PlotType, SeriesColor};
use crate::state::plot_bundle::PlotBundle;
use crate::state::style::{color_for_index, StyleConfig};

/// Everything needed to push one series into a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDraw {
    pub name: String,
    pub plot_type: PlotType,
    pub points: Vec<[f64; 2]>,
    pub color: SeriesColor,
    pub line_width: f32,
    /// Marker drawn on each sample. Lines only get one when asked for.
    pub marker: Option<MarkerShape>,
    pub marker_radius: f32,
    /// Convex quads between consecutive samples of the uncertainty band.
    pub band: Option<Vec<[[f64; 2]; 4]>>,
}

/// Resolve per-series styling against `style` for every series in a
/// normalized, validated bundle.
pub fn series_draws(bundle: &PlotBundle, style: &StyleConfig) -> Vec<SeriesDraw> {
    let band_requested = bundle.flags.uncertainty_lower || bundle.flags.uncertainty_upper;
    if band_requested && !bundle.flags.has_uncertainty_band() {
        tracing::warn!("Only one uncertainty bound supplied; band not drawn");
    }

    bundle
        .primary_axis
        .iter()
        .zip(&bundle.secondary_axis)
        .enumerate()
        .map(|(i, (x, y))| {
            let plot_type = bundle.plot_type(i);
            let marker = match plot_type {
                PlotType::Scatter => Some(bundle.marker_shape(i).unwrap_or(MarkerShape::Circle)),
                PlotType::Line => bundle.marker_shape(i),
                PlotType::Bars => None,
            };

            let band = if bundle.flags.has_uncertainty_band() {
                match (bundle.uncertainty_lower.get(i), bundle.uncertainty_upper.get(i)) {
                    (Some(lower), Some(upper)) => Some(band_quads(x, lower, upper)),
                    _ => None,
                }
            } else {
                None
            };

            SeriesDraw {
                name: bundle.legend(i).to_string(),
                plot_type,
                points: points(x, y),
                color: bundle.color(i).unwrap_or_else(|| color_for_index(i)),
                line_width: bundle.line_width(i).map_or(style.line_width, |w| w as f32),
                marker,
                marker_radius: bundle.marker_size(i).map_or(style.marker_size, |s| s as f32),
                band,
            }
        })
        .collect()
}

/// Pair up samples into a buffer sized to the series.
pub fn points(x: &[f64], y: &[f64]) -> Vec<[f64; 2]> {
    let mut out = Vec::with_capacity(x.len().min(y.len()));
    out.extend(x.iter().zip(y).map(|(&x, &y)| [x, y]));
    out
}

/// Split the band between `lower` and `upper` into one quad per segment.
///
/// Each quad is ordered so it stays convex even when the bounds cross.
pub fn band_quads(x: &[f64], lower: &[f64], upper: &[f64]) -> Vec<[[f64; 2]; 4]> {
    let n = x.len().min(lower.len()).min(upper.len());
    let mut quads = Vec::with_capacity(n.saturating_sub(1));
    for i in 1..n {
        let (lo0, hi0) = (lower[i - 1].min(upper[i - 1]), lower[i - 1].max(upper[i - 1]));
        let (lo1, hi1) = (lower[i].min(upper[i]), lower[i].max(upper[i]));
        quads.push([
            [x[i - 1], lo0],
            [x[i], lo1],
            [x[i], hi1],
            [x[i - 1], hi0],
        ]);
    }
    quads
}
