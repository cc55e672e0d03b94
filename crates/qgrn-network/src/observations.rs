//! Initial expression priors from observed single-cell data.

use crate::error::{NetworkError, NetworkResult};

/// Fraction of cells expressing each gene.
///
/// `observations` is a cells × genes matrix. Entries greater than zero count
/// as expressed, so both raw counts and an already binarised matrix work.
/// The result has one ratio per column, in column order. NaN or infinite
/// entries are rejected.
pub fn activation_ratios<R>(observations: &[R], num_genes: usize) -> NetworkResult<Vec<f64>>
where
    R: AsRef<[f64]>,
{
    if observations.is_empty() {
        return Err(NetworkError::EmptyObservations);
    }

    let mut active = vec![0usize; num_genes];
    for (row, cell) in observations.iter().enumerate() {
        let cell = cell.as_ref();
        if cell.len() != num_genes {
            return Err(NetworkError::ObservationShape {
                row,
                expected: num_genes,
                got: cell.len(),
            });
        }
        for (column, (count, &value)) in active.iter_mut().zip(cell).enumerate() {
            if !value.is_finite() {
                return Err(NetworkError::InvalidObservation { row, column, value });
            }
            if value > 0.0 {
                *count += 1;
            }
        }
    }

    let cells = observations.len() as f64;
    Ok(active.into_iter().map(|n| n as f64 / cells).collect())
}
