//! Conversion of raw weights into a probability distribution.

use crate::{InsertionError, Result};

/// Divides every weight by the total so the result sums to one.
///
/// Order and length are preserved.
///
/// # Errors
/// Returns [`InsertionError::ZeroTotalWeight`] when the weights sum to zero,
/// including the empty slice.
///
/// # Examples
/// ```
/// use liana_core::normalize;
///
/// let probabilities = normalize(&[1.0, 3.0])?;
/// assert_eq!(probabilities, vec![0.25, 0.75]);
/// assert!(normalize(&[0.0, 0.0]).is_err());
/// # Ok::<(), liana_core::InsertionError>(())
/// ```
pub fn normalize(weights: &[f64]) -> Result<Vec<f64>> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(InsertionError::ZeroTotalWeight {
            candidates: weights.len(),
        });
    }
    Ok(weights.iter().map(|weight| weight / total).collect())
}
