use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

/// Viewer color scheme, selectable with `--theme` or from the View menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// egui visuals with the plot area painted in [`Theme::plot_background`].
    ///
    /// egui_plot fills its frame with `extreme_bg_color`.
    pub fn visuals(self) -> Visuals {
        let mut visuals = match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        };
        visuals.extreme_bg_color = self.plot_background();
        visuals
    }

    pub fn plot_background(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(20, 20, 20),
            Theme::Light => Color32::WHITE,
        }
    }

    /// Text color for load and validation errors.
    pub fn error_color(self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(230, 90, 90),
            Theme::Light => Color32::from_rgb(180, 30, 30),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}
