pub mod attributes;
pub mod plot_bundle;
pub mod style;
pub mod theme;
