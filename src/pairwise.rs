use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, ArrayView3, Axis};

use crate::error::TransformError;

/// Pairwise comparison samples produced from one or more choice instances.
///
/// Row `k` of `x1` and `x2` holds the two sides of pair `k`; `y_double[k]`
/// is the one-hot form of the preference and `y_single[k]` its scalar form
/// (`1.0` when position 0 is preferred, `0.0` otherwise). The arrays are
/// always freshly allocated; caller inputs are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseInstances {
    pub x1: Array2<f32>,
    pub x2: Array2<f32>,
    pub y_double: Array2<f32>,
    pub y_single: Array1<f32>,
}

impl PairwiseInstances {
    /// Number of pairs held.
    pub fn len(&self) -> usize {
        self.y_single.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Expands one object set into labeled comparison pairs against the chosen
/// object.
///
/// Every object in `x` is paired with `choice`, yielding `x.nrows()` pairs.
/// Pairs at even generation indices (0, 2, 4, …) have their sides swapped,
/// with labels flipped to match, so a pairwise classifier cannot exploit a
/// fixed left/right position of the chosen object. Odd-length inputs simply
/// end on an unswapped pair.
///
/// # Errors
/// Returns `TransformError::TooFewObjects` if `x` holds fewer than two
/// objects, and `TransformError::ShapeMismatch` if `choice` is not as wide
/// as one row of `x`.
pub fn generate_pairwise_instances(
    x: ArrayView2<f32>,
    choice: ArrayView1<f32>,
) -> Result<PairwiseInstances, TransformError> {
    let (n_objects, n_features) = x.dim();
    if n_objects < 2 {
        return Err(TransformError::TooFewObjects { got: n_objects, min: 2 });
    }
    if choice.len() != n_features {
        return Err(TransformError::ShapeMismatch {
            what: "choice feature width",
            got: choice.len(),
            expected: n_features,
        });
    }

    let mut x1 = Array2::zeros((n_objects, n_features));
    let mut x2 = Array2::zeros((n_objects, n_features));
    let mut y_double = Array2::zeros((n_objects, 2));
    let mut y_single = Array1::zeros(n_objects);

    for (i, object) in x.outer_iter().enumerate() {
        if i % 2 == 0 {
            // Swapped pair: the chosen object sits on the left and loses.
            x1.row_mut(i).assign(&choice);
            x2.row_mut(i).assign(&object);
            y_double[[i, 1]] = 1.0;
        } else {
            x1.row_mut(i).assign(&object);
            x2.row_mut(i).assign(&choice);
            y_double[[i, 0]] = 1.0;
            y_single[i] = 1.0;
        }
    }

    Ok(PairwiseInstances { x1, x2, y_double, y_single })
}

/// Applies [`generate_pairwise_instances`] across a whole dataset and
/// concatenates the results into flat training arrays.
///
/// `x` has shape `(n_instances, n_objects, n_features)`; `y[i]` is the index
/// of the chosen object of instance `i`. Instances are processed in order, so
/// the output ordering is deterministic given a deterministic input order.
/// The chosen object is paired with every object of its instance, itself
/// included, so the output holds exactly `n_instances * n_objects` pairs.
///
/// # Errors
/// Returns `TransformError::ShapeMismatch` if `y` is not one index per
/// instance, and `TransformError::ChoiceIndexOutOfBounds` if any index does
/// not address an object. Validation runs before any pair is generated.
pub fn generate_complete_pairwise_dataset(
    x: ArrayView3<f32>,
    y: &[usize],
) -> Result<PairwiseInstances, TransformError> {
    let (n_instances, n_objects, n_features) = x.dim();
    if y.len() != n_instances {
        return Err(TransformError::ShapeMismatch {
            what: "chosen indices",
            got: y.len(),
            expected: n_instances,
        });
    }
    if let Some((instance, &index)) = y.iter().enumerate().find(|(_, &c)| c >= n_objects) {
        return Err(TransformError::ChoiceIndexOutOfBounds { instance, index, n_objects });
    }

    let total_pairs = n_instances * n_objects;
    let mut x1 = Array2::zeros((total_pairs, n_features));
    let mut x2 = Array2::zeros((total_pairs, n_features));
    let mut y_double = Array2::zeros((total_pairs, 2));
    let mut y_single = Array1::zeros(total_pairs);

    for (i, (instance, &chosen)) in x.axis_iter(Axis(0)).zip(y).enumerate() {
        let pairs = generate_pairwise_instances(instance, instance.row(chosen))?;
        let rows = s![i * n_objects..(i + 1) * n_objects, ..];
        x1.slice_mut(rows).assign(&pairs.x1);
        x2.slice_mut(rows).assign(&pairs.x2);
        y_double.slice_mut(rows).assign(&pairs.y_double);
        y_single
            .slice_mut(s![i * n_objects..(i + 1) * n_objects])
            .assign(&pairs.y_single);
    }

    Ok(PairwiseInstances { x1, x2, y_double, y_single })
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{arr1, arr2, arr3, Array3};

    #[test]
    fn three_objects_alternate_swap() {
        let x = arr2(&[[1.0], [2.0], [3.0]]);
        let choice = arr1(&[9.0]);

        let pairs = generate_pairwise_instances(x.view(), choice.view()).unwrap();

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.x1, arr2(&[[9.0], [2.0], [9.0]]));
        assert_eq!(pairs.x2, arr2(&[[1.0], [9.0], [3.0]]));
        assert_eq!(pairs.y_double, arr2(&[[0.0, 1.0], [1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(pairs.y_single, arr1(&[0.0, 1.0, 0.0]));
    }

    #[test]
    fn every_pair_contains_its_object_and_the_choice() {
        let x = arr2(&[[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0], [5.0, 50.0]]);
        let choice = arr1(&[7.0, 70.0]);

        let pairs = generate_pairwise_instances(x.view(), choice.view()).unwrap();

        assert_eq!(pairs.len(), x.nrows());
        for i in 0..pairs.len() {
            let left = pairs.x1.row(i);
            let right = pairs.x2.row(i);
            if i % 2 == 0 {
                assert_eq!(left, choice.view());
                assert_eq!(right, x.row(i));
            } else {
                assert_eq!(left, x.row(i));
                assert_eq!(right, choice.view());
            }
        }
    }

    #[test]
    fn swap_count_is_half_rounded_up() {
        for n in 2..=7usize {
            let x = Array2::from_shape_fn((n, 1), |(i, _)| i as f32);
            let choice = arr1(&[-1.0]);
            let pairs = generate_pairwise_instances(x.view(), choice.view()).unwrap();

            let zeros = pairs.y_single.iter().filter(|&&v| v == 0.0).count();
            assert_eq!(zeros, n.div_ceil(2), "n = {n}");
        }
    }

    #[test]
    fn labels_are_one_hot_and_consistent() {
        let x = arr2(&[[0.5], [1.5], [2.5], [3.5]]);
        let choice = arr1(&[2.5]);
        let pairs = generate_pairwise_instances(x.view(), choice.view()).unwrap();

        for k in 0..pairs.len() {
            let row = pairs.y_double.row(k);
            assert_eq!(row[0] + row[1], 1.0);
            assert!(row[0] == 0.0 || row[0] == 1.0);
            assert_eq!(row[0], pairs.y_single[k]);
        }
    }

    #[test]
    fn rejects_choice_width_mismatch() {
        let x = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let choice = arr1(&[1.0]);
        let err = generate_pairwise_instances(x.view(), choice.view()).unwrap_err();
        assert_eq!(
            err,
            TransformError::ShapeMismatch { what: "choice feature width", got: 1, expected: 2 }
        );
    }

    #[test]
    fn rejects_single_object_set() {
        let x = arr2(&[[1.0]]);
        let choice = arr1(&[1.0]);
        let err = generate_pairwise_instances(x.view(), choice.view()).unwrap_err();
        assert_eq!(err, TransformError::TooFewObjects { got: 1, min: 2 });
    }

    #[test]
    fn complete_dataset_concatenates_in_instance_order() {
        // Two instances of three 1-feature objects; chosen indices 0 and 2.
        let x = arr3(&[[[1.0], [2.0], [3.0]], [[4.0], [5.0], [6.0]]]);
        let y = [0usize, 2];

        let pairs = generate_complete_pairwise_dataset(x.view(), &y).unwrap();

        assert_eq!(pairs.len(), 6);
        // Instance 0 chose object 0 (value 1.0), instance 1 chose object 2 (6.0).
        assert_eq!(pairs.x1, arr2(&[[1.0], [2.0], [1.0], [6.0], [5.0], [6.0]]));
        assert_eq!(pairs.x2, arr2(&[[1.0], [1.0], [3.0], [4.0], [6.0], [6.0]]));
        assert_eq!(pairs.y_single, arr1(&[0.0, 1.0, 0.0, 0.0, 1.0, 0.0]));
    }

    #[test]
    fn chosen_object_is_paired_with_itself() {
        let x = arr3(&[[[1.0], [2.0]]]);
        let pairs = generate_complete_pairwise_dataset(x.view(), &[0]).unwrap();

        // Pair 0 compares the chosen object against itself; both sides match.
        assert_eq!(pairs.x1.row(0), pairs.x2.row(0));
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn rejects_out_of_bounds_chosen_index() {
        let x = arr3(&[[[1.0], [2.0]], [[3.0], [4.0]]]);
        let err = generate_complete_pairwise_dataset(x.view(), &[0, 2]).unwrap_err();
        assert_eq!(
            err,
            TransformError::ChoiceIndexOutOfBounds { instance: 1, index: 2, n_objects: 2 }
        );
    }

    #[test]
    fn rejects_index_count_mismatch() {
        let x: Array3<f32> = Array3::zeros((3, 2, 1));
        let err = generate_complete_pairwise_dataset(x.view(), &[0, 1]).unwrap_err();
        assert_eq!(
            err,
            TransformError::ShapeMismatch { what: "chosen indices", got: 2, expected: 3 }
        );
    }
}
