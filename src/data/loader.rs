use std::path::Path;

use crate::data::adapter::figures_from_document;
use crate::data::reshape::{reshape, MatrixLayout};
use crate::error::LoadError;
use crate::state::plot_bundle::{FigureRequest, PlotBundle};

/// How CSV columns map onto series.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    /// Use the first column as the shared independent variable.
    pub x_column: bool,
}

/// Load a figure document (`.json`) or a CSV quick plot (`.csv`).
pub fn load_file(path: &Path, csv_options: CsvOptions) -> Result<Vec<FigureRequest>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let figures = match ext.as_str() {
        "json" => load_json(path)?,
        "csv" => vec![load_csv(path, csv_options)?],
        _ => return Err(LoadError::UnsupportedExtension(format!(".{ext}"))),
    };
    tracing::info!("Loaded {} figure(s) from {:?}", figures.len(), path);
    Ok(figures)
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn read_text(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: display(path),
        source,
    })?;
    // Fall back to latin1 when the file is not UTF-8.
    Ok(String::from_utf8(content.clone())
        .unwrap_or_else(|_| content.iter().map(|&b| b as char).collect()))
}

pub fn load_json(path: &Path) -> Result<Vec<FigureRequest>, LoadError> {
    let text = read_text(path)?;
    let value: serde_json::Value = serde_json::from_str(&text).map_err(|source| LoadError::Json {
        path: display(path),
        source,
    })?;
    figures_from_document(&value).map_err(|source| LoadError::Adapter {
        path: display(path),
        source,
    })
}

/// Build a 1x1 figure from a CSV file of numeric columns.
///
/// A first row with no numeric cell is taken as column names and becomes
/// the legends. Empty or unparseable cells become NaN gaps.
pub fn load_csv(path: &Path, options: CsvOptions) -> Result<FigureRequest, LoadError> {
    let text = read_text(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| LoadError::Csv {
            path: display(path),
            source,
        })?;
        let row: Vec<String> = record.iter().map(|s| s.trim().to_string()).collect();
        if row.iter().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }

    let has_header = rows
        .first()
        .is_some_and(|first| first.iter().all(|c| c.parse::<f64>().is_err()));
    let header = if has_header { Some(rows.remove(0)) } else { None };

    let num_cols = header
        .as_ref()
        .map(Vec::len)
        .into_iter()
        .chain(rows.iter().map(Vec::len))
        .max()
        .unwrap_or(0);
    let min_cols = if options.x_column { 2 } else { 1 };
    if rows.is_empty() || num_cols < min_cols {
        return Err(LoadError::Malformed {
            path: display(path),
            reason: format!("need at least {min_cols} numeric column(s) and one data row"),
        });
    }

    // Column-major block: one contiguous run per CSV column.
    let mut flat = Vec::with_capacity(rows.len() * num_cols);
    for col in 0..num_cols {
        for row in &rows {
            let value = row
                .get(col)
                .and_then(|c| c.parse::<f64>().ok())
                .unwrap_or(f64::NAN);
            flat.push(value);
        }
    }
    let mut columns = reshape(&flat, num_cols, MatrixLayout::ColumnMajor).map_err(|e| {
        LoadError::Malformed {
            path: display(path),
            reason: e.to_string(),
        }
    })?;

    let mut names: Vec<String> = (0..num_cols)
        .map(|i| {
            header
                .as_ref()
                .and_then(|h| h.get(i))
                .filter(|n| !n.is_empty())
                .cloned()
                .unwrap_or_else(|| format!("Column {}", i + 1))
        })
        .collect();

    let mut bundle = PlotBundle::default();
    if options.x_column {
        let x = columns.remove(0);
        let x_name = names.remove(0);
        bundle.primary_axis = vec![x; columns.len()];
        bundle.labels = vec![x_name, String::new()];
        bundle.flags.labels = true;
    }
    bundle.secondary_axis = columns;
    if header.is_some() {
        bundle.legends = names;
        bundle.flags.legends = true;
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Figure")
        .to_string();
    bundle.title = vec![stem.clone()];
    bundle.flags.title = true;

    Ok(FigureRequest::new(stem, 1, 1, vec![bundle]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn csv_columns_become_series() {
        let file = write_temp(".csv", "a,b\n1,10\n2,20\n3,30\n");
        let figure = load_csv(file.path(), CsvOptions::default()).unwrap();
        let bundle = &figure.plots[0];
        assert_eq!(bundle.secondary_axis, vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]);
        assert!(bundle.primary_axis.is_empty());
        assert_eq!(bundle.legends, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(figure.grid, vec![1.0, 1.0]);
    }

    #[test]
    fn csv_x_column_is_shared() {
        let file = write_temp(".csv", "t,u,v\n0,1,2\n1,3,4\n");
        let figure = load_csv(file.path(), CsvOptions { x_column: true }).unwrap();
        let bundle = &figure.plots[0];
        assert_eq!(bundle.primary_axis, vec![vec![0.0, 1.0], vec![0.0, 1.0]]);
        assert_eq!(bundle.secondary_axis, vec![vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert_eq!(bundle.legends, vec!["u".to_string(), "v".to_string()]);
        assert_eq!(bundle.labels[0], "t");
    }

    #[test]
    fn csv_without_header_has_no_legends() {
        let file = write_temp(".csv", "1,2\n3,\n");
        let figure = load_csv(file.path(), CsvOptions::default()).unwrap();
        let bundle = &figure.plots[0];
        assert!(!bundle.flags.legends);
        assert_eq!(bundle.secondary_axis[0], vec![1.0, 3.0]);
        assert!(bundle.secondary_axis[1][1].is_nan());
    }

    #[test]
    fn csv_with_only_header_is_rejected() {
        let file = write_temp(".csv", "a,b\n");
        assert!(matches!(
            load_csv(file.path(), CsvOptions::default()),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn json_document_is_loaded() {
        let file = write_temp(
            ".json",
            r#"{"name": "Demo", "grid": [1, 1], "plots": [{"data1": [4, 5, 6]}]}"#,
        );
        let figures = load_file(file.path(), CsvOptions::default()).unwrap();
        assert_eq!(figures[0].name, "Demo");
        assert_eq!(figures[0].plots[0].secondary_axis, vec![vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn bad_json_reports_path() {
        let file = write_temp(".json", "{ not json");
        let err = load_file(file.path(), CsvOptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_temp(".xlsx", "");
        assert!(matches!(
            load_file(file.path(), CsvOptions::default()),
            Err(LoadError::UnsupportedExtension(_))
        ));
    }
}
