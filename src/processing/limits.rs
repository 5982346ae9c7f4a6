use crate::state::plot_bundle::PlotBundle;

/// Smallest and largest finite sample across all series.
///
/// Returns `None` when there is no finite sample at all.
pub fn data_min_max(series: &[Vec<f64>]) -> Option<(f64, f64)> {
    let mut pool: Vec<f64> = series
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite())
        .collect();
    if pool.is_empty() {
        return None;
    }
    pool.sort_by(f64::total_cmp);
    pool.dedup();
    Some((pool[0], pool[pool.len() - 1]))
}

/// Axis bounds for one plot. `None` on an axis means auto-fit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisLimits {
    pub x: Option<(f64, f64)>,
    pub y: Option<(f64, f64)>,
}

/// The bundle's own `[x_min, x_max, y_min, y_max]`, when flagged and finite.
pub fn explicit_limits(bundle: &PlotBundle) -> Option<AxisLimits> {
    if !bundle.flags.limits {
        return None;
    }
    match bundle.limits.as_slice() {
        &[x_min, x_max, y_min, y_max] if bundle.limits.iter().all(|v| v.is_finite()) => {
            Some(AxisLimits {
                x: Some((x_min, x_max)),
                y: Some((y_min, y_max)),
            })
        }
        _ => None,
    }
}

/// Explicit limits when the bundle carries them, else the data extents.
pub fn resolve_limits(bundle: &PlotBundle) -> AxisLimits {
    explicit_limits(bundle).unwrap_or_else(|| AxisLimits {
        x: data_min_max(&bundle.primary_axis),
        y: data_min_max(&bundle.secondary_axis),
    })
}
