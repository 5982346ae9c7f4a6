//! Validate, normalize and display plot figures described by loosely-typed
//! numeric data (JSON figure documents or CSV columns).

pub mod app;
pub mod data;
pub mod error;
pub mod processing;
pub mod render;
pub mod session;
pub mod state;
pub mod ui;

pub use error::{AdapterError, FigureError, LoadError, ReshapeError, SessionError, ValidationError};
pub use processing::normalize::{normalize, prepare_figure, prepare_figures};
pub use processing::validate::{validate, validate_figure};
pub use session::{show_figures, SessionOptions};
pub use state::plot_bundle::{FigureRequest, PlotBundle, SeriesFeatureFlags};
