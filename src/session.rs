use std::sync::{Mutex, PoisonError};

use eframe::egui;

use crate::app::FigureApp;
use crate::data::loader::CsvOptions;
use crate::error::SessionError;
use crate::processing::normalize::prepare_figures;
use crate::state::plot_bundle::FigureRequest;
use crate::state::style::StyleConfig;
use crate::state::theme::Theme;

/// Held for the whole lifetime of a blocking window session.
static SESSION_LOCK: Mutex<()> = Mutex::new(());

/// Window and styling configuration for one session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub title: String,
    pub inner_size: [f32; 2],
    pub theme: Theme,
    pub style: StyleConfig,
    pub csv_options: CsvOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            title: "OxideFigure".to_string(),
            inner_size: [1280.0, 720.0],
            theme: Theme::default(),
            style: StyleConfig::default(),
            csv_options: CsvOptions::default(),
        }
    }
}

/// Run `f` while holding the process-wide session lock.
///
/// Callers on other threads block until `f` returns. A lock poisoned by a
/// panicking session is taken over rather than propagated.
pub fn run_exclusive<T>(f: impl FnOnce() -> T) -> T {
    let _guard = SESSION_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    f()
}

/// Validate `figures`, then open a window showing them and block until it
/// is closed.
///
/// Invalid figures are reported before any window is created.
pub fn show_figures(figures: Vec<FigureRequest>, options: SessionOptions) -> Result<(), SessionError> {
    let figures = prepare_figures(figures)?;

    run_exclusive(|| {
        tracing::info!("Opening session with {} figure(s)", figures.len());

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(options.title.as_str())
                .with_inner_size(options.inner_size)
                .with_min_inner_size([480.0, 320.0])
                .with_drag_and_drop(true),
            ..Default::default()
        };

        let SessionOptions {
            title,
            theme,
            style,
            csv_options,
            ..
        } = options;

        let result = eframe::run_native(
            &title,
            native_options,
            Box::new(move |cc| {
                Ok(Box::new(FigureApp::new(cc, figures, style, theme, csv_options)))
            }),
        );

        tracing::info!("Session closed");
        result.map_err(SessionError::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FigureError;
    use crate::state::plot_bundle::PlotBundle;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn sessions_never_overlap() {
        let active = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let active = Arc::clone(&active);
                let max_seen = Arc::clone(&max_seen);
                thread::spawn(move || {
                    run_exclusive(|| {
                        let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                        max_seen.fetch_max(now, Ordering::SeqCst);
                        thread::sleep(Duration::from_millis(10));
                        active.fetch_sub(1, Ordering::SeqCst);
                    })
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let _ = thread::spawn(|| run_exclusive(|| panic!("session crashed"))).join();
        assert_eq!(run_exclusive(|| 7), 7);
    }

    #[test]
    fn session_error_crosses_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<SessionError>();

        let err = SessionError::from(FigureError::InvalidGrid {
            figure: "f".to_string(),
            grid: vec![0.0],
        });
        let wrapped = anyhow::Error::new(err).context("cannot display figures");
        assert!(wrapped.to_string().contains("cannot display figures"));
    }

    #[test]
    fn invalid_figures_fail_before_any_window() {
        let figure = FigureRequest::new("bad", 2, 1, vec![PlotBundle::from_series(vec![vec![1.0]])]);
        let err = show_figures(vec![figure], SessionOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Figure(FigureError::CellCountMismatch { expected: 2, actual: 1, .. })
        ));
    }
}
