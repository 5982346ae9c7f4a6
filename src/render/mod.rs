pub mod figure_plot;
pub mod series_draw;
