use crate::error::{FigureError, ValidationError};
use crate::state::attributes::Attribute;
use crate::state::plot_bundle::{FigureRequest, PlotBundle};

/// Check that every flagged attribute matches the bundle's series layout.
///
/// Attributes are checked in [`Attribute::ALL`] order and the first
/// mismatch is returned.
pub fn validate(bundle: &PlotBundle) -> Result<(), ValidationError> {
    if bundle.secondary_axis.is_empty() {
        return Err(ValidationError::MissingData);
    }

    let series_count = bundle.series_count();
    for attribute in Attribute::ALL {
        if !bundle.flags.is_set(attribute) {
            continue;
        }
        let expected = attribute.expected_len(series_count);
        let actual = bundle.attribute_len(attribute);
        if actual != expected {
            return Err(ValidationError::ShapeMismatch {
                attribute,
                expected,
                actual,
            });
        }
    }

    check_axes(bundle)?;
    check_bound_samples(bundle)
}

fn check_axes(bundle: &PlotBundle) -> Result<(), ValidationError> {
    if bundle.primary_axis.is_empty() {
        return Ok(());
    }
    if bundle.primary_axis.len() != bundle.secondary_axis.len() {
        return Err(ValidationError::AxisSeriesMismatch {
            primary: bundle.primary_axis.len(),
            secondary: bundle.secondary_axis.len(),
        });
    }
    for (series, (x, y)) in bundle
        .primary_axis
        .iter()
        .zip(&bundle.secondary_axis)
        .enumerate()
    {
        if x.len() != y.len() {
            return Err(ValidationError::SampleCountMismatch {
                series,
                primary: x.len(),
                secondary: y.len(),
            });
        }
    }
    Ok(())
}

fn check_bound_samples(bundle: &PlotBundle) -> Result<(), ValidationError> {
    let bounds = [
        (Attribute::UncertaintyLowerBound, &bundle.uncertainty_lower),
        (Attribute::UncertaintyUpperBound, &bundle.uncertainty_upper),
    ];
    for (attribute, bound) in bounds {
        if !bundle.flags.is_set(attribute) {
            continue;
        }
        for (series, (b, y)) in bound.iter().zip(&bundle.secondary_axis).enumerate() {
            if b.len() != y.len() {
                return Err(ValidationError::BoundSampleMismatch {
                    attribute,
                    series,
                    expected: y.len(),
                    actual: b.len(),
                });
            }
        }
    }
    Ok(())
}

/// Validate the grid shape, the cell count and every bundle of a figure.
pub fn validate_figure(figure: &FigureRequest) -> Result<(), FigureError> {
    let (rows, cols) = figure.grid_shape().ok_or_else(|| FigureError::InvalidGrid {
        figure: figure.name.clone(),
        grid: figure.grid.clone(),
    })?;

    let expected = rows.checked_mul(cols).ok_or_else(|| FigureError::InvalidGrid {
        figure: figure.name.clone(),
        grid: figure.grid.clone(),
    })?;
    if figure.plots.len() != expected {
        return Err(FigureError::CellCountMismatch {
            figure: figure.name.clone(),
            rows,
            cols,
            expected,
            actual: figure.plots.len(),
        });
    }

    for (cell, bundle) in figure.plots.iter().enumerate() {
        validate(bundle).map_err(|source| FigureError::Bundle {
            figure: figure.name.clone(),
            cell,
            source,
        })?;
    }
    Ok(())
}
