use crate::error::FigureError;
use crate::processing::validate::validate_figure;
use crate::state::plot_bundle::{FigureRequest, PlotBundle};

/// Fill in an implicit sample index when only dependent data was supplied.
///
/// A bundle that already has an independent axis is returned unchanged, so
/// normalizing twice is the same as normalizing once.
pub fn normalize(mut bundle: PlotBundle) -> PlotBundle {
    if bundle.primary_axis.is_empty() && !bundle.secondary_axis.is_empty() {
        bundle.primary_axis = bundle
            .secondary_axis
            .iter()
            .map(|series| sample_index(series.len()))
            .collect();
        tracing::debug!(
            "Synthesized sample index for {} series",
            bundle.primary_axis.len()
        );
    }
    bundle
}

/// 1, 2, ..., len
pub fn sample_index(len: usize) -> Vec<f64> {
    (1..=len).map(|i| i as f64).collect()
}

/// Normalize every bundle of a figure and validate the result.
///
/// Any invalid bundle rejects the whole figure.
pub fn prepare_figure(mut figure: FigureRequest) -> Result<FigureRequest, FigureError> {
    figure.plots = figure.plots.into_iter().map(normalize).collect();
    validate_figure(&figure)?;
    Ok(figure)
}

/// Prepare a batch of figures, stopping at the first invalid one.
pub fn prepare_figures(figures: Vec<FigureRequest>) -> Result<Vec<FigureRequest>, FigureError> {
    figures.into_iter().map(prepare_figure).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_index_per_series() {
        let bundle = normalize(PlotBundle::from_series(vec![
            vec![10.0, 20.0, 30.0],
            vec![5.0, 5.0, 5.0],
        ]));
        assert_eq!(
            bundle.primary_axis,
            vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]]
        );
        assert_eq!(bundle.secondary_axis[0], vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn ragged_series_get_their_own_length() {
        let bundle = normalize(PlotBundle::from_series(vec![vec![7.0], vec![1.0, 2.0]]));
        assert_eq!(bundle.primary_axis, vec![vec![1.0], vec![1.0, 2.0]]);
    }

    #[test]
    fn existing_primary_axis_is_untouched() {
        let bundle = PlotBundle {
            primary_axis: vec![vec![0.5, 0.75]],
            secondary_axis: vec![vec![1.0, 2.0]],
            ..Default::default()
        };
        assert_eq!(normalize(bundle.clone()), bundle);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize(PlotBundle::from_series(vec![vec![3.0, 1.0, 4.0]]));
        let twice = normalize(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_bundle_stays_empty() {
        let bundle = normalize(PlotBundle::default());
        assert!(bundle.primary_axis.is_empty());
    }

    #[test]
    fn prepare_normalizes_before_validating() {
        let mut bundle = PlotBundle::from_series(vec![vec![1.0, 2.0, 3.0]]);
        bundle.flags.colors = true;
        bundle.colors = vec![crate::state::attributes::SeriesColor::rgb(0, 0, 0)];
        let figure = prepare_figure(FigureRequest::new("f", 1, 1, vec![bundle])).unwrap();
        assert_eq!(figure.plots[0].primary_axis, vec![vec![1.0, 2.0, 3.0]]);
    }

    #[test]
    fn prepare_rejects_whole_batch_on_bad_figure() {
        let good = FigureRequest::new("good", 1, 1, vec![PlotBundle::from_series(vec![vec![1.0]])]);
        let bad = FigureRequest::new("bad", 1, 2, vec![PlotBundle::from_series(vec![vec![1.0]])]);
        assert!(prepare_figures(vec![good, bad]).is_err());
    }
}
