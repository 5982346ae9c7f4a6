use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::data::loader::{self, CsvOptions};
use crate::processing::normalize::prepare_figures;
use crate::render::figure_plot::show_figure;
use crate::state::plot_bundle::FigureRequest;
use crate::state::style::StyleConfig;
use crate::state::theme::Theme;
use crate::ui::style_dialog::show_style_dialog;

/// Pending background file load.
struct PendingLoad {
    path: PathBuf,
    result: Arc<Mutex<Option<Result<Vec<FigureRequest>, String>>>>,
}

/// A figure on screen. Its id outlives closing other figures, so window
/// placement and plot zoom stay with the figure.
#[derive(Debug)]
struct OpenFigure {
    id: u64,
    figure: FigureRequest,
}

#[derive(Debug, Default)]
struct OpenFigures {
    next_id: u64,
    open: Vec<OpenFigure>,
}

impl OpenFigures {
    fn extend(&mut self, figures: impl IntoIterator<Item = FigureRequest>) {
        for figure in figures {
            self.open.push(OpenFigure { id: self.next_id, figure });
            self.next_id += 1;
        }
    }

    fn close(&mut self, ids: &[u64]) {
        self.open.retain(|f| !ids.contains(&f.id));
    }

    fn clear(&mut self) {
        self.open.clear();
    }

    fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

/// Viewer for prepared figures, one window per figure.
pub struct FigureApp {
    /// Normalized and validated figures.
    figures: OpenFigures,
    pub style: StyleConfig,
    pub theme: Theme,
    pub csv_options: CsvOptions,
    pub show_style: bool,
    /// An error message to display until dismissed.
    pub error_message: Option<String>,
    pending_load: Option<PendingLoad>,
}

impl FigureApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        figures: Vec<FigureRequest>,
        style: StyleConfig,
        theme: Theme,
        csv_options: CsvOptions,
    ) -> Self {
        let ctx = &cc.egui_ctx;
        let mut egui_style = (*ctx.style()).clone();
        egui_style.spacing.button_padding = egui::vec2(10.0, 5.0);
        egui_style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        egui_style.spacing.window_margin = egui::Margin::same(12);
        egui_style.visuals.window_corner_radius = egui::CornerRadius::same(8);
        ctx.set_style(egui_style);
        ctx.set_visuals(theme.visuals());

        let mut open = OpenFigures::default();
        open.extend(figures);

        Self {
            figures: open,
            style,
            theme,
            csv_options,
            show_style: false,
            error_message: None,
            pending_load: None,
        }
    }

    fn open_file_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Figure Files", &["json", "csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        {
            self.load_file(path);
        }
    }

    /// Load and prepare a file on a worker thread so the UI stays responsive.
    fn load_file(&mut self, path: PathBuf) {
        let result = Arc::new(Mutex::new(None));
        let result_clone = Arc::clone(&result);
        let path_clone = path.clone();
        let csv_options = self.csv_options;

        std::thread::spawn(move || {
            let loaded = loader::load_file(&path_clone, csv_options)
                .map_err(|e| e.to_string())
                .and_then(|figures| prepare_figures(figures).map_err(|e| e.to_string()));
            if let Ok(mut slot) = result_clone.lock() {
                *slot = Some(loaded);
            }
        });

        self.pending_load = Some(PendingLoad { path, result });
    }

    fn poll_pending_load(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_load else {
            return;
        };
        let finished = pending.result.lock().ok().and_then(|mut slot| slot.take());
        match finished {
            Some(Ok(figures)) => {
                tracing::info!("Added {} figure(s) from {:?}", figures.len(), pending.path);
                self.figures.extend(figures);
                self.pending_load = None;
            }
            Some(Err(e)) => {
                tracing::error!("Failed to load {:?}: {e}", pending.path);
                self.error_message = Some(e);
                self.pending_load = None;
            }
            None => ctx.request_repaint(),
        }
    }

    fn show_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open...").clicked() {
                        ui.close_menu();
                        self.open_file_dialog();
                    }
                    if ui.button("Close all figures").clicked() {
                        ui.close_menu();
                        self.figures.clear();
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Plot style...").clicked() {
                        ui.close_menu();
                        self.show_style = true;
                    }
                    let next = self.theme.toggle();
                    if ui.button(format!("{} theme", next.label())).clicked() {
                        ui.close_menu();
                        self.theme = next;
                        ctx.set_visuals(self.theme.visuals());
                    }
                });
                if self.pending_load.is_some() {
                    ui.spinner();
                }
            });
        });
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut dropped_paths: Vec<PathBuf> = Vec::new();
        ctx.input(|i| {
            for file in &i.raw.dropped_files {
                if let Some(path) = &file.path {
                    dropped_paths.push(path.clone());
                }
            }
        });
        // One load at a time; later drops in the same frame are ignored.
        if let Some(path) = dropped_paths.into_iter().next() {
            if self.pending_load.is_none() {
                self.load_file(path);
            }
        }
        self.poll_pending_load(ctx);

        self.show_menu(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.figures.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("Open or drop a .json or .csv file").weak());
                });
            }
        });

        let mut closed = Vec::new();
        for OpenFigure { id, figure } in &self.figures.open {
            let mut open = true;
            egui::Window::new(figure.name.as_str())
                .id(egui::Id::new(("figure_window", *id)))
                .open(&mut open)
                .default_size([900.0, 600.0])
                .resizable(true)
                .show(ctx, |ui| show_figure(ui, *id, figure, &self.style));
            if !open {
                closed.push(*id);
            }
        }
        self.figures.close(&closed);

        if self.show_style {
            self.show_style = show_style_dialog(ctx, &mut self.style);
            self.style = self.style.clone().sanitized();
        }

        if let Some(message) = self.error_message.clone() {
            let mut open = true;
            egui::Window::new("Error")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(self.theme.error_color(), message);
                });
            if !open {
                self.error_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(figures: &OpenFigures) -> Vec<u64> {
        figures.open.iter().map(|f| f.id).collect()
    }

    #[test]
    fn ids_survive_closing_earlier_figures() {
        let mut figures = OpenFigures::default();
        figures.extend(["a", "b", "c"].map(|name| FigureRequest::new(name, 1, 1, Vec::new())));
        assert_eq!(ids(&figures), vec![0, 1, 2]);

        figures.close(&[0]);
        assert_eq!(ids(&figures), vec![1, 2]);
        assert_eq!(figures.open[0].figure.name, "b");

        figures.extend([FigureRequest::new("d", 1, 1, Vec::new())]);
        assert_eq!(ids(&figures), vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut figures = OpenFigures::default();
        figures.extend([FigureRequest::new("a", 1, 1, Vec::new())]);
        figures.clear();
        assert!(figures.is_empty());
        figures.extend([FigureRequest::new("b", 1, 1, Vec::new())]);
        assert_eq!(ids(&figures), vec![1]);
    }
}
