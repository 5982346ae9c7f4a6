use serde::{Deserialize, Serialize};

use crate::error::ReshapeError;

/// Storage order of a flat numeric block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatrixLayout {
    /// Each series is one contiguous run (MATLAB's column storage).
    #[default]
    ColumnMajor,
    /// Series are interleaved sample by sample.
    RowMajor,
}

/// Split `flat` into `series_count` equally sized series.
///
/// A block whose length is not a multiple of `series_count` is rejected
/// rather than dropping the trailing partial series.
pub fn reshape(
    flat: &[f64],
    series_count: usize,
    layout: MatrixLayout,
) -> Result<Vec<Vec<f64>>, ReshapeError> {
    if series_count == 0 {
        return Err(ReshapeError::ZeroSeries);
    }
    if flat.len() % series_count != 0 {
        return Err(ReshapeError::MalformedInput {
            len: flat.len(),
            series_count,
        });
    }

    let samples = flat.len() / series_count;
    let series = match layout {
        MatrixLayout::ColumnMajor => {
            if samples == 0 {
                vec![Vec::new(); series_count]
            } else {
                flat.chunks_exact(samples).map(<[f64]>::to_vec).collect()
            }
        }
        MatrixLayout::RowMajor => (0..series_count)
            .map(|s| {
                flat.iter()
                    .skip(s)
                    .step_by(series_count)
                    .copied()
                    .collect()
            })
            .collect(),
    };
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_keeps_runs_together() {
        let out = reshape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, MatrixLayout::ColumnMajor).unwrap();
        assert_eq!(out, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn row_major_deinterleaves() {
        let out = reshape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, MatrixLayout::RowMajor).unwrap();
        assert_eq!(out, vec![vec![1.0, 3.0, 5.0], vec![2.0, 4.0, 6.0]]);
    }

    #[test]
    fn uneven_length_is_rejected() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_eq!(
            reshape(&flat, 2, MatrixLayout::ColumnMajor),
            Err(ReshapeError::MalformedInput { len: 7, series_count: 2 })
        );
        assert!(reshape(&flat, 2, MatrixLayout::RowMajor).is_err());
    }

    #[test]
    fn zero_series_is_rejected() {
        assert_eq!(
            reshape(&[1.0], 0, MatrixLayout::ColumnMajor),
            Err(ReshapeError::ZeroSeries)
        );
    }

    #[test]
    fn empty_block_gives_empty_series() {
        let out = reshape(&[], 3, MatrixLayout::ColumnMajor).unwrap();
        assert_eq!(out, vec![Vec::<f64>::new(); 3]);
    }
}
