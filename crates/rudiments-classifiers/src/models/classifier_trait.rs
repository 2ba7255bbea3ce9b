use crate::error::Result;

/// Contract shared by the trained learners so that the evaluation harness
/// can score any of them. Training is learner-specific and stays outside
/// the trait; a value implementing it is already fitted and immutable.
pub trait Classifier {
    /// One query as the learner sees it (numeric row, categorical row, document vector).
    type Sample: ?Sized;
    type Label;

    fn classify(&self, sample: &Self::Sample) -> Result<Self::Label>;

    /// Optional human readable name for the model
    fn name(&self) -> &str {
        "classifier"
    }
}
