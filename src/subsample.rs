use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::{rngs::StdRng, SeedableRng};

use crate::error::TransformError;
use crate::problems::LearningProblem;

/// Default number of objects per sub-sampled choice set.
pub const DEFAULT_BUCKET_WIDTH: usize = 5;

/// Default base seed for bucket randomization.
pub const DEFAULT_SEED: u64 = 42;

/// Reduced training set produced by [`ChoiceSubSampler::sub_sample`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubSampledChoices {
    /// Shape `(n_instances * bucket_size, n_objects)`.
    pub x_train: Array2<f32>,
    /// Chosen-object index per reduced instance, derived by argmax over the
    /// gathered selection scores.
    pub y_train: Array1<usize>,
}

/// Deterministically shards wide discrete-choice instances into fixed-width
/// choice sets.
///
/// A problem with `n_total_objects` candidates per instance is split into
/// `bucket_size = n_total_objects / n_objects` buckets. Bucket `i` draws its
/// own random columns from a source seeded with `seed + i`, so repeated runs
/// reproduce the same training set and buckets stay independent. The seed is
/// an explicit parameter rather than global RNG state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceSubSampler {
    n_objects: usize,
    seed: u64,
    problem: LearningProblem,
}

impl Default for ChoiceSubSampler {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKET_WIDTH)
    }
}

impl ChoiceSubSampler {
    /// Creates a sampler producing choice sets of `n_objects` candidates.
    pub fn new(n_objects: usize) -> Self {
        Self {
            n_objects,
            seed: DEFAULT_SEED,
            problem: LearningProblem::DiscreteChoice,
        }
    }

    /// Overrides the base seed used for bucket randomization.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Tags log output with the given problem family.
    pub fn for_problem(mut self, problem: LearningProblem) -> Self {
        self.problem = problem;
        self
    }

    /// Sub-samples the feature matrix `x` and its parallel selection-score
    /// matrix `s`, both of shape `(n_instances, n_total_objects)`.
    ///
    /// Column `j` of every reduced instance is drawn from the `j`-th stride
    /// of width `bucket_size`, so each reduced choice set spans the full
    /// candidate range. Buckets are concatenated along the instance axis.
    /// The output is a pure function of `(x, s, n_objects, seed)`.
    ///
    /// # Errors
    /// Returns `TransformError::ShapeMismatch` if `s` is not shaped like
    /// `x`, `TransformError::TooFewObjects` for a bucket width below 2, and
    /// `TransformError::EmptyBucket` when an instance has fewer candidates
    /// than the bucket width.
    pub fn sub_sample(
        &self,
        x: ArrayView2<f32>,
        s: ArrayView2<f32>,
    ) -> Result<SubSampledChoices, TransformError> {
        let (n_instances, n_total_objects) = x.dim();
        if s.nrows() != n_instances {
            return Err(TransformError::ShapeMismatch {
                what: "selection matrix instances",
                got: s.nrows(),
                expected: n_instances,
            });
        }
        if s.ncols() != n_total_objects {
            return Err(TransformError::ShapeMismatch {
                what: "selection matrix objects",
                got: s.ncols(),
                expected: n_total_objects,
            });
        }
        if self.n_objects < 2 {
            return Err(TransformError::TooFewObjects { got: self.n_objects, min: 2 });
        }
        let bucket_size = n_total_objects / self.n_objects;
        if bucket_size == 0 {
            return Err(TransformError::EmptyBucket {
                n_total_objects,
                n_objects: self.n_objects,
            });
        }

        log::info!(
            target: self.problem.as_str(),
            "###### X instances {} objects {} bucket_size {} ######",
            n_instances,
            n_total_objects,
            bucket_size
        );

        let mut x_train = Array2::zeros((n_instances * bucket_size, self.n_objects));
        let mut y_train = Array1::zeros(n_instances * bucket_size);

        for bucket in 0..bucket_size {
            let mut rng = StdRng::seed_from_u64(self.seed + bucket as u64);
            let idx: Array2<usize> = Array2::random_using(
                (n_instances, self.n_objects),
                Uniform::new(0, bucket_size),
                &mut rng,
            );

            let base = bucket * n_instances;
            for instance in 0..n_instances {
                let mut best = 0;
                let mut best_score = f32::NEG_INFINITY;
                for j in 0..self.n_objects {
                    // Offset the draw into the j-th stride of the candidate axis.
                    let column = idx[[instance, j]] + j * bucket_size;
                    x_train[[base + instance, j]] = x[[instance, column]];
                    let score = s[[instance, column]];
                    if score > best_score {
                        best_score = score;
                        best = j;
                    }
                }
                y_train[base + instance] = best;
            }
        }

        log::info!(
            target: self.problem.as_str(),
            "Sampled instances {} objects {}",
            x_train.nrows(),
            x_train.ncols()
        );

        Ok(SubSampledChoices { x_train, y_train })
    }
}
