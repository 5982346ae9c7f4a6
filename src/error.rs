use thiserror::Error;

use crate::state::attributes::Attribute;

/// A bundle whose optional attributes disagree with its series layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{attribute} expects {expected} entries, found {actual}")]
    ShapeMismatch {
        attribute: Attribute,
        expected: usize,
        actual: usize,
    },
    #[error("no dependent-variable data supplied")]
    MissingData,
    #[error("independent axis has {primary} series but dependent axis has {secondary}")]
    AxisSeriesMismatch { primary: usize, secondary: usize },
    #[error("series {series}: independent axis has {primary} samples but dependent axis has {secondary}")]
    SampleCountMismatch {
        series: usize,
        primary: usize,
        secondary: usize,
    },
    #[error("series {series}: {attribute} has {actual} samples, data has {expected}")]
    BoundSampleMismatch {
        attribute: Attribute,
        series: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReshapeError {
    #[error("cannot split a block into zero series")]
    ZeroSeries,
    #[error("{len} samples do not split evenly into {series_count} series")]
    MalformedInput { len: usize, series_count: usize },
}

/// Failures while classifying loosely-typed fields into a bundle or figure.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("plot structure must be an object")]
    NotAnObject,
    #[error("plot structure has no data1 field")]
    MissingData,
    #[error("field {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("field {field}: {source}")]
    Reshape {
        field: String,
        #[source]
        source: ReshapeError,
    },
    #[error("unknown color name {0:?}")]
    UnknownColor(String),
    #[error("unknown marker shape {0:?}")]
    UnknownMarker(String),
    #[error("unknown plot type {0:?}")]
    UnknownPlotType(String),
    #[error("figure is missing {0}")]
    MissingFigureField(&'static str),
}

/// Failure to validate one figure, with the offending cell when known.
#[derive(Debug, Error)]
pub enum FigureError {
    #[error("figure {figure:?}: grid must be two positive integers, got {grid:?}")]
    InvalidGrid { figure: String, grid: Vec<f64> },
    #[error("figure {figure:?}: grid {rows}x{cols} needs {expected} plots, found {actual}")]
    CellCountMismatch {
        figure: String,
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    #[error("figure {figure:?}, plot {cell}: {source}")]
    Bundle {
        figure: String,
        cell: usize,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: {source}")]
    Adapter {
        path: String,
        #[source]
        source: AdapterError,
    },
    #[error("{path}: {reason}")]
    Malformed { path: String, reason: String },
    #[error("unsupported file type: {0}")]
    UnsupportedExtension(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Figure(#[from] FigureError),
    /// The windowing backend failed. Its error is not `Send`, so only the
    /// message is kept.
    #[error("window error: {0}")]
    Window(String),
}

impl From<eframe::Error> for SessionError {
    fn from(e: eframe::Error) -> Self {
        SessionError::Window(e.to_string())
    }
}
