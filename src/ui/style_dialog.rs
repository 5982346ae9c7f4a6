use egui_plot::Corner;

use crate::state::style::StyleConfig;

const LEGEND_CORNERS: [(Corner, &str); 4] = [
    (Corner::LeftBottom, "Bottom left"),
    (Corner::RightBottom, "Bottom right"),
    (Corner::LeftTop, "Top left"),
    (Corner::RightTop, "Top right"),
];

/// Show the style window. Returns `true` while it should stay open,
/// `false` when the user closes it.
pub fn show_style_dialog(ctx: &egui::Context, style: &mut StyleConfig) -> bool {
    let mut open = true;

    egui::Window::new("Plot Style")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("Defaults for unset attributes").strong());
            ui.add_space(4.0);

            egui::Grid::new("style_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Marker size");
                    ui.add(egui::Slider::new(&mut style.marker_size, 0.5..=30.0));
                    ui.end_row();

                    ui.label("Line width");
                    ui.add(egui::Slider::new(&mut style.line_width, 0.1..=20.0));
                    ui.end_row();

                    ui.label("Bar width");
                    ui.add(egui::Slider::new(&mut style.bar_width, 0.01..=10.0).logarithmic(true));
                    ui.end_row();

                    ui.label("Band opacity");
                    ui.add(egui::Slider::new(&mut style.band_alpha, 0.0..=1.0));
                    ui.end_row();

                    ui.label("Legend");
                    let current = LEGEND_CORNERS
                        .iter()
                        .find(|(c, _)| *c == style.legend_corner)
                        .map_or("Bottom left", |(_, label)| *label);
                    egui::ComboBox::from_id_salt("legend_corner")
                        .selected_text(current)
                        .show_ui(ui, |ui| {
                            for (corner, label) in LEGEND_CORNERS {
                                ui.selectable_value(&mut style.legend_corner, corner, label);
                            }
                        });
                    ui.end_row();
                });

            ui.add_space(6.0);
            if ui.button("Reset").clicked() {
                *style = StyleConfig::default();
            }
        });

    open
}
