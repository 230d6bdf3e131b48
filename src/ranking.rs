use std::cmp::Ordering;

use ndarray::{Array2, ArrayView2};

use crate::error::TransformError;

/// Converts per-object relevance scores into explicit rankings.
///
/// `y_pred` has shape `(batch, n_objects)`. Each output row is a permutation
/// of `{0, …, n_objects - 1}` where rank `0` marks the best-scoring object:
/// the indices are argsorted by descending score and the resulting
/// permutation inverted, so `out[i]` is the rank of the object at position
/// `i`. Exact score ties resolve to the order the stable sort preserves,
/// which callers must not rely on.
///
/// # Errors
/// Returns `TransformError::ShapeMismatch` if `y_pred` is not `n_objects`
/// wide and `TransformError::TooFewObjects` when `n_objects` is zero.
pub fn scores_to_rankings(
    n_objects: usize,
    y_pred: ArrayView2<f32>,
) -> Result<Array2<f32>, TransformError> {
    if n_objects == 0 {
        return Err(TransformError::TooFewObjects { got: 0, min: 1 });
    }
    if y_pred.ncols() != n_objects {
        return Err(TransformError::ShapeMismatch {
            what: "score columns",
            got: y_pred.ncols(),
            expected: n_objects,
        });
    }

    let mut rankings = Array2::zeros(y_pred.raw_dim());
    for (scores, mut ranks) in y_pred.outer_iter().zip(rankings.outer_iter_mut()) {
        let mut order: Vec<usize> = (0..n_objects).collect();
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
        for (rank, &object) in order.iter().enumerate() {
            ranks[object] = rank as f32;
        }
    }
    Ok(rankings)
}

/// Counts the labeled instances and objects in a padded label matrix.
///
/// Padded positions are marked with negative values; a row made entirely of
/// them contributes no instance. Returns `(n_instances, n_objects)`.
pub fn instances_and_objects(y_true: ArrayView2<f32>) -> (usize, usize) {
    let n_objects = y_true.ncols();
    if n_objects == 0 {
        return (0, 0);
    }
    let labeled = y_true.iter().filter(|&&v| v >= 0.0).count();
    (labeled / n_objects, n_objects)
}
