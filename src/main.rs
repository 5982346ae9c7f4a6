use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use oxidefigure::data::loader::{self, CsvOptions};
use oxidefigure::data::tables;
use oxidefigure::session::{show_figures, SessionOptions};
use oxidefigure::state::theme::Theme;

/// Display plot figures from JSON figure documents or CSV files
#[derive(Parser)]
#[command(name = "oxidefigure", version, about)]
struct Cli {
    /// Figure documents (.json) or CSV files (.csv). Opens a file picker when empty.
    files: Vec<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, env = "OXIDEFIGURE_THEME", default_value = "dark")]
    theme: Theme,

    /// Treat the first CSV column as the shared x axis
    #[arg(long)]
    x_column: bool,

    /// Window width in points
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Window height in points
    #[arg(long, default_value_t = 720.0)]
    height: f32,

    /// Log filter, e.g. "info" or "oxidefigure=debug"
    #[arg(long, env = "OXIDEFIGURE_LOG")]
    log_level: Option<String>,

    /// Print one of the built-in name tables and exit
    #[arg(long, value_enum)]
    list: Option<ListKind>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    Attributes,
    PlotTypes,
    Colors,
    Markers,
}

fn print_table(kind: ListKind) {
    match kind {
        ListKind::Attributes => tables::attribute_names().iter().for_each(|n| println!("{n}")),
        ListKind::PlotTypes => tables::plot_type_names().iter().for_each(|n| println!("{n}")),
        ListKind::Colors => {
            for (name, color) in tables::color_table() {
                let [r, g, b, _] = color.0;
                println!("{name:<20} #{r:02x}{g:02x}{b:02x}");
            }
        }
        ListKind::Markers => {
            for (glyph, name, _) in tables::marker_table() {
                println!("{glyph}  {name}");
            }
        }
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    if let Some(kind) = cli.list {
        print_table(kind);
        return Ok(());
    }

    let csv_options = CsvOptions { x_column: cli.x_column };

    let mut files = cli.files;
    if files.is_empty() {
        match rfd::FileDialog::new()
            .add_filter("Figure Files", &["json", "csv"])
            .pick_files()
        {
            Some(picked) => files = picked,
            None => bail!("no input files"),
        }
    }

    let mut figures = Vec::new();
    for path in &files {
        let loaded = loader::load_file(path, csv_options)
            .with_context(|| format!("failed to load {}", path.display()))?;
        figures.extend(loaded);
    }

    let options = SessionOptions {
        inner_size: [cli.width, cli.height],
        theme: cli.theme,
        csv_options,
        ..Default::default()
    };
    show_figures(figures, options).context("cannot display figures")?;
    Ok(())
}
