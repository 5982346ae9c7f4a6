use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotBounds, PlotPoints, PlotUi, Points, Polygon};

use crate::processing::limits::{explicit_limits, resolve_limits, AxisLimits};
use crate::render::series_draw::{series_draws, SeriesDraw};
use crate::state::attributes::PlotType;
use crate::state::plot_bundle::{FigureRequest, PlotBundle};
use crate::state::style::StyleConfig;

/// Smallest plot cell before the grid starts overflowing its window.
const MIN_CELL: egui::Vec2 = egui::vec2(160.0, 120.0);

/// How a plot cell frames its data.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Framing {
    /// Bounds fixed by the bundle's own limits.
    Fixed { min: [f64; 2], max: [f64; 2] },
    /// Auto-fit, widened to cover the data extents.
    Fit(AxisLimits),
}

fn framing(bundle: &PlotBundle) -> Framing {
    match explicit_limits(bundle) {
        Some(AxisLimits {
            x: Some((x_min, x_max)),
            y: Some((y_min, y_max)),
        }) => Framing::Fixed {
            min: [x_min, y_min],
            max: [x_max, y_max],
        },
        _ => Framing::Fit(resolve_limits(bundle)),
    }
}

/// Draw a prepared figure as a rows x cols grid of plots filling `ui`.
///
/// `figure_id` keys the plots' zoom and pan memory, so it must stay the
/// same for a figure across frames.
pub fn show_figure(ui: &mut egui::Ui, figure_id: u64, figure: &FigureRequest, style: &StyleConfig) {
    let Some((rows, cols)) = figure.grid_shape() else {
        return;
    };

    let spacing = ui.spacing().item_spacing;
    let available = ui.available_size();
    let heading = ui.text_style_height(&egui::TextStyle::Heading) + spacing.y;
    let cell = egui::vec2(
        (available.x - spacing.x * (cols as f32 - 1.0)) / cols as f32,
        (available.y - spacing.y * (rows as f32 - 1.0)) / rows as f32 - heading,
    )
    .max(MIN_CELL);

    egui::Grid::new(("figure_grid", figure_id))
        .num_columns(cols)
        .spacing(spacing)
        .show(ui, |ui| {
            for row in 0..rows {
                for col in 0..cols {
                    let index = row * cols + col;
                    if let Some(bundle) = figure.plots.get(index) {
                        ui.vertical(|ui| {
                            let id = egui::Id::new(("figure_plot", figure_id, index));
                            show_bundle(ui, id, bundle, style, cell);
                        });
                    }
                }
                ui.end_row();
            }
        });
}

fn show_bundle(
    ui: &mut egui::Ui,
    id: egui::Id,
    bundle: &PlotBundle,
    style: &StyleConfig,
    size: egui::Vec2,
) {
    ui.label(egui::RichText::new(bundle.title_or_default()).heading());

    let mut plot = Plot::new(id)
        .width(size.x)
        .height(size.y)
        .legend(Legend::default().position(style.legend_corner));

    if bundle.flags.labels {
        if let [x_label, y_label] = bundle.labels.as_slice() {
            plot = plot.x_axis_label(x_label.clone()).y_axis_label(y_label.clone());
        }
    }

    // Fixed bounds are set on first show and again after a double-click reset.
    let applied_key = id.with("limits_applied");
    let mut fixed = None;
    match framing(bundle) {
        Framing::Fixed { min, max } => {
            let applied = ui.ctx().data(|d| d.get_temp::<bool>(applied_key)).unwrap_or(false);
            if !applied {
                fixed = Some(PlotBounds::from_min_max(min, max));
            }
        }
        Framing::Fit(extent) => {
            if let Some((min, max)) = extent.x {
                plot = plot.include_x(min).include_x(max);
            }
            if let Some((min, max)) = extent.y {
                plot = plot.include_y(min).include_y(max);
            }
        }
    }
    let set_bounds = fixed.is_some();

    let draws = series_draws(bundle, style);
    let response = plot.show(ui, |plot_ui| {
        if let Some(bounds) = fixed {
            plot_ui.set_plot_bounds(bounds);
        }
        for draw in &draws {
            push_series(plot_ui, draw, style);
        }
    });

    if set_bounds {
        ui.ctx().data_mut(|d| d.insert_temp(applied_key, true));
    } else if response.response.double_clicked() {
        ui.ctx().data_mut(|d| d.remove::<bool>(applied_key));
    }
}

fn push_series(plot_ui: &mut PlotUi, draw: &SeriesDraw, style: &StyleConfig) {
    let color = draw.color.color32();

    match draw.plot_type {
        PlotType::Line => {
            plot_ui.line(
                Line::new(PlotPoints::new(draw.points.clone()))
                    .color(color)
                    .width(draw.line_width)
                    .name(&draw.name),
            );
        }
        // Markers only, pushed below.
        PlotType::Scatter => {}
        PlotType::Bars => {
            let bars = draw
                .points
                .iter()
                .map(|&[x, y]| Bar::new(x, y).width(style.bar_width))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).color(color).name(&draw.name));
        }
    }

    if let Some(shape) = draw.marker {
        plot_ui.points(
            Points::new(PlotPoints::new(draw.points.clone()))
                .shape(shape.to_egui())
                .radius(draw.marker_radius)
                .filled(true)
                .color(color)
                .name(&draw.name),
        );
    }

    if let Some(band) = &draw.band {
        let fill = draw.color.with_alpha(style.band_alpha);
        for quad in band {
            plot_ui.polygon(
                Polygon::new(PlotPoints::new(quad.to_vec()))
                    .fill_color(fill)
                    .stroke(egui::Stroke::NONE)
                    .name(&draw.name),
            );
        }
    }
}
