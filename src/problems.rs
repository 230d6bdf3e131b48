use std::fmt;

/// The learning-problem families the transformations serve.
///
/// The string forms are the canonical dataset identifiers and double as log
/// targets, so observability output can be filtered per problem family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LearningProblem {
    ObjectRanking,
    LabelRanking,
    DyadRanking,
    DiscreteChoice,
    ChoiceFunctions,
}

impl LearningProblem {
    /// Returns the canonical identifier for this problem family.
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningProblem::ObjectRanking => "object_ranking",
            LearningProblem::LabelRanking => "label_ranking",
            LearningProblem::DyadRanking => "dyad_ranking",
            LearningProblem::DiscreteChoice => "discrete_choice",
            LearningProblem::ChoiceFunctions => "choice_functions",
        }
    }
}

impl fmt::Display for LearningProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
