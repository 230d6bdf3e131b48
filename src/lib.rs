//! Deterministic dataset transformations for choice-function and ranking
//! learners: pairwise-instance expansion, fixed-width discrete-choice
//! sub-sampling, and score-to-rank recovery.

mod error;
mod pairwise;
mod problems;
mod ranking;
mod subsample;

pub use error::TransformError;
pub use pairwise::{
    generate_complete_pairwise_dataset, generate_pairwise_instances, PairwiseInstances,
};
pub use problems::LearningProblem;
pub use ranking::{instances_and_objects, scores_to_rankings};
pub use subsample::{ChoiceSubSampler, SubSampledChoices, DEFAULT_BUCKET_WIDTH, DEFAULT_SEED};
