//! Classifies loosely-typed plot structures into [`PlotBundle`]s.
//!
//! Field names are matched case-insensitively. `data1` alone is the
//! dependent variable; `data1` with `data2` gives independent and dependent
//! variables. Every recognised attribute key raises its feature flag.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::data::reshape::{reshape, MatrixLayout};
use crate::data::tables::lookup_color;
use crate::error::AdapterError;
use crate::state::attributes::{Attribute, MarkerShape, PlotType};
use crate::state::plot_bundle::{FigureRequest, PlotBundle};

/// Upper bound on the series a single matrix block may declare.
const MAX_BLOCK_SERIES: usize = 1 << 16;

/// A flat numeric block with its matrix shape.
#[derive(Debug, Clone, Deserialize)]
struct MatrixBlock {
    /// rows, cols. Each column is one series.
    dims: [usize; 2],
    values: Vec<f64>,
    #[serde(default)]
    layout: MatrixLayout,
}

/// Turn a single plot structure into a bundle.
pub fn bundle_from_value(value: &Value) -> Result<PlotBundle, AdapterError> {
    let fields = value.as_object().ok_or(AdapterError::NotAnObject)?;

    let mut data1 = None;
    let mut data2 = None;
    let mut bundle = PlotBundle::default();

    for (key, value) in fields {
        let lower = key.to_ascii_lowercase();
        match lower.as_str() {
            "data1" => data1 = Some(numeric_block(key, value)?),
            "data2" => data2 = Some(numeric_block(key, value)?),
            _ => match Attribute::from_name(key) {
                Some(attribute) => {
                    apply_attribute(&mut bundle, attribute, key, value)?;
                    bundle.flags.set(attribute);
                }
                None => tracing::warn!("Ignoring unrecognised plot field {key:?}"),
            },
        }
    }

    match (data1, data2) {
        (Some(x), Some(y)) => {
            bundle.primary_axis = x;
            bundle.secondary_axis = y;
        }
        (Some(y), None) => bundle.secondary_axis = y,
        (None, _) => return Err(AdapterError::MissingData),
    }
    Ok(bundle)
}

fn apply_attribute(
    bundle: &mut PlotBundle,
    attribute: Attribute,
    key: &str,
    value: &Value,
) -> Result<(), AdapterError> {
    match attribute {
        Attribute::PlotTypes => {
            bundle.plot_types = strings(key, value)?
                .iter()
                .map(|s| PlotType::from_name(s).ok_or_else(|| AdapterError::UnknownPlotType(s.clone())))
                .collect::<Result<_, _>>()?;
        }
        Attribute::MarkerShapes => {
            bundle.marker_shapes = strings(key, value)?
                .iter()
                .map(|s| MarkerShape::from_name(s).ok_or_else(|| AdapterError::UnknownMarker(s.clone())))
                .collect::<Result<_, _>>()?;
        }
        Attribute::Colors => {
            bundle.colors = strings(key, value)?
                .iter()
                .map(|s| lookup_color(s).ok_or_else(|| AdapterError::UnknownColor(s.clone())))
                .collect::<Result<_, _>>()?;
        }
        Attribute::LineWidths => bundle.line_widths = numbers(key, value)?,
        Attribute::MarkerSizes => bundle.marker_sizes = numbers(key, value)?,
        Attribute::Title => bundle.title = strings(key, value)?,
        Attribute::Labels => bundle.labels = strings(key, value)?,
        Attribute::Legends => bundle.legends = strings(key, value)?,
        Attribute::Limits => bundle.limits = numbers(key, value)?,
        Attribute::UncertaintyLowerBound => bundle.uncertainty_lower = numeric_block(key, value)?,
        Attribute::UncertaintyUpperBound => bundle.uncertainty_upper = numeric_block(key, value)?,
    }
    Ok(())
}

fn invalid(field: &str, reason: impl Into<String>) -> AdapterError {
    AdapterError::InvalidField {
        field: field.to_string(),
        reason: reason.into(),
    }
}

fn number(field: &str, value: &Value) -> Result<f64, AdapterError> {
    value
        .as_f64()
        .ok_or_else(|| invalid(field, format!("expected a number, found {value}")))
}

fn numbers(field: &str, value: &Value) -> Result<Vec<f64>, AdapterError> {
    match value {
        Value::Array(items) => items.iter().map(|v| number(field, v)).collect(),
        other => Ok(vec![number(field, other)?]),
    }
}

fn strings(field: &str, value: &Value) -> Result<Vec<String>, AdapterError> {
    let one = |v: &Value| {
        v.as_str()
            .map(str::to_string)
            .ok_or_else(|| invalid(field, format!("expected a string, found {v}")))
    };
    match value {
        Value::Array(items) => items.iter().map(one).collect(),
        other => Ok(vec![one(other)?]),
    }
}

/// One sequence per series from a scalar, a vector, a list of vectors or a
/// shaped matrix block.
fn numeric_block(field: &str, value: &Value) -> Result<Vec<Vec<f64>>, AdapterError> {
    match value {
        Value::Number(_) => Ok(vec![vec![number(field, value)?]]),
        Value::Array(items) if items.iter().all(Value::is_array) && !items.is_empty() => {
            items.iter().map(|series| numbers(field, series)).collect()
        }
        Value::Array(_) => Ok(vec![numbers(field, value)?]),
        Value::Object(_) => {
            let block: MatrixBlock = serde_json::from_value(value.clone())
                .map_err(|e| invalid(field, e.to_string()))?;
            let [rows, cols] = block.dims;
            if cols > MAX_BLOCK_SERIES {
                return Err(invalid(
                    field,
                    format!("dims declare {cols} series, at most {MAX_BLOCK_SERIES} are supported"),
                ));
            }
            if rows.checked_mul(cols) != Some(block.values.len()) {
                return Err(invalid(
                    field,
                    format!("dims {rows}x{cols} do not match {} values", block.values.len()),
                ));
            }
            reshape(&block.values, cols, block.layout).map_err(|source| AdapterError::Reshape {
                field: field.to_string(),
                source,
            })
        }
        other => Err(invalid(field, format!("expected numeric data, found {other}"))),
    }
}

fn field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    fields
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

/// Turn a figure object (`name`, `grid`, `plots`) into a request.
pub fn figure_from_value(value: &Value) -> Result<FigureRequest, AdapterError> {
    let fields = value.as_object().ok_or(AdapterError::NotAnObject)?;

    let name = match field(fields, "name") {
        Some(v) => v
            .as_str()
            .ok_or_else(|| invalid("name", "expected a string"))?
            .to_string(),
        None => "Figure".to_string(),
    };
    let grid = numbers(
        "grid",
        field(fields, "grid").ok_or(AdapterError::MissingFigureField("grid"))?,
    )?;
    let plots = match field(fields, "plots").ok_or(AdapterError::MissingFigureField("plots"))? {
        Value::Array(items) => items.iter().map(bundle_from_value).collect::<Result<_, _>>()?,
        single @ Value::Object(_) => vec![bundle_from_value(single)?],
        _ => return Err(invalid("plots", "expected an array of plot structures")),
    };

    Ok(FigureRequest { name, grid, plots })
}

/// A document holds one figure object or an array of them.
pub fn figures_from_document(value: &Value) -> Result<Vec<FigureRequest>, AdapterError> {
    match value {
        Value::Array(items) => items.iter().map(figure_from_value).collect(),
        other => Ok(vec![figure_from_value(other)?]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReshapeError;
    use crate::state::attributes::SeriesColor;
    use serde_json::json;

    #[test]
    fn single_data_field_is_dependent() {
        let bundle = bundle_from_value(&json!({ "data1": [1.0, 2.0, 3.0] })).unwrap();
        assert!(bundle.primary_axis.is_empty());
        assert_eq!(bundle.secondary_axis, vec![vec![1.0, 2.0, 3.0]]);
        assert_eq!(bundle.flags, Default::default());
    }

    #[test]
    fn two_data_fields_are_x_and_y() {
        let bundle = bundle_from_value(&json!({
            "Data1": [[0, 1], [0, 1]],
            "DATA2": [[5, 6], [7, 8]],
        }))
        .unwrap();
        assert_eq!(bundle.primary_axis, vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        assert_eq!(bundle.secondary_axis, vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
    }

    #[test]
    fn matrix_block_is_reshaped_by_columns() {
        let bundle = bundle_from_value(&json!({
            "data1": { "dims": [3, 2], "values": [1, 2, 3, 4, 5, 6] },
        }))
        .unwrap();
        assert_eq!(bundle.secondary_axis, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);

        let bundle = bundle_from_value(&json!({
            "data1": { "dims": [3, 2], "values": [1, 2, 3, 4, 5, 6], "layout": "row-major" },
        }))
        .unwrap();
        assert_eq!(bundle.secondary_axis, vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
    }

    #[test]
    fn matrix_block_dims_must_match_values() {
        let err = bundle_from_value(&json!({
            "data1": { "dims": [2, 2], "values": [1, 2, 3] },
        }))
        .unwrap_err();
        assert!(matches!(err, AdapterError::InvalidField { .. }));
    }

    #[test]
    fn oversized_block_dims_are_rejected() {
        let err = figures_from_document(&json!({
            "name": "f",
            "grid": [1, 1],
            "plots": [{ "data1": { "dims": [4_611_686_018_427_387_904_u64, 4], "values": [] } }],
        }))
        .unwrap_err();
        assert!(matches!(err, AdapterError::InvalidField { .. }));

        let err = bundle_from_value(&json!({
            "data1": { "dims": [0, 1_000_000_000_000_u64], "values": [] },
        }))
        .unwrap_err();
        assert!(matches!(err, AdapterError::InvalidField { .. }));
    }

    #[test]
    fn zero_column_block_is_malformed() {
        let err = bundle_from_value(&json!({
            "data1": { "dims": [0, 0], "values": [] },
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            AdapterError::Reshape { source: ReshapeError::ZeroSeries, .. }
        ));
    }

    #[test]
    fn attributes_set_flags_and_map_names() {
        let bundle = bundle_from_value(&json!({
            "data1": [[1, 2]],
            "plottypes": "Scatter",
            "MarkerShapes": ["triangle (up)"],
            "colors": ["dodgerblue"],
            "LineWidths": 2,
            "Title": "Run 4",
            "Labels": ["time", "value"],
            "Limits": [0, 1, 0, 1],
            "UncertaintyLowerBound": [[0.5, 1.5]],
        }))
        .unwrap();
        assert_eq!(bundle.plot_types, vec![PlotType::Scatter]);
        assert_eq!(bundle.marker_shapes, vec![MarkerShape::Up]);
        assert_eq!(bundle.colors, vec![SeriesColor::rgb(30, 144, 255)]);
        assert_eq!(bundle.line_widths, vec![2.0]);
        assert_eq!(bundle.title, vec!["Run 4".to_string()]);
        assert_eq!(bundle.uncertainty_lower, vec![vec![0.5, 1.5]]);
        assert!(bundle.flags.plot_types && bundle.flags.colors && bundle.flags.limits);
        assert!(bundle.flags.uncertainty_lower && !bundle.flags.uncertainty_upper);
        assert!(!bundle.flags.legends);
    }

    #[test]
    fn unknown_names_are_errors() {
        let err = bundle_from_value(&json!({ "data1": [1], "Colors": ["Chartreuse"] })).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownColor(name) if name == "Chartreuse"));
        let err = bundle_from_value(&json!({ "data1": [1], "MarkerShapes": ["hex"] })).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownMarker(_)));
        let err = bundle_from_value(&json!({ "data1": [1], "PlotTypes": ["Pie"] })).unwrap_err();
        assert!(matches!(err, AdapterError::UnknownPlotType(_)));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let bundle = bundle_from_value(&json!({ "data1": [1], "Opacity": 0.5 })).unwrap();
        assert_eq!(bundle.flags, Default::default());
    }

    #[test]
    fn missing_data_is_an_error() {
        assert!(matches!(
            bundle_from_value(&json!({ "Title": "empty" })),
            Err(AdapterError::MissingData)
        ));
        assert!(matches!(bundle_from_value(&json!([1, 2])), Err(AdapterError::NotAnObject)));
    }

    #[test]
    fn wrong_value_types_are_reported() {
        let err = bundle_from_value(&json!({ "data1": [1, "two"] })).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidField { field, .. } if field == "data1"));
        let err = bundle_from_value(&json!({ "data1": [1], "Title": 3 })).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidField { .. }));
    }

    #[test]
    fn document_with_one_or_many_figures() {
        let fig = json!({ "Name": "A", "Grid": [1, 1], "Plots": [{ "data1": [1, 2] }] });
        assert_eq!(figures_from_document(&fig).unwrap().len(), 1);
        let doc = json!([fig.clone(), fig]);
        let figures = figures_from_document(&doc).unwrap();
        assert_eq!(figures.len(), 2);
        assert_eq!(figures[0].name, "A");
        assert_eq!(figures[0].grid, vec![1.0, 1.0]);
    }

    #[test]
    fn figure_requires_grid_and_plots() {
        assert!(matches!(
            figure_from_value(&json!({ "plots": [] })),
            Err(AdapterError::MissingFigureField("grid"))
        ));
        assert!(matches!(
            figure_from_value(&json!({ "grid": [1, 1] })),
            Err(AdapterError::MissingFigureField("plots"))
        ));
    }
}
