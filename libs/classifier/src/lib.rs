use std::path::PathBuf;

mod aggregator;
mod corpus;
mod scorer;
mod tokenizer;
mod trainer;

pub use scorer::{score, ScoreError};
pub use trainer::{train, TrainError};

/// Everything a training or scoring run needs to know. Callers fill this
/// in from their own configuration source; the classifier itself never
/// reads the environment.
pub struct ClassifierConfig {
    pub corpus_location: PathBuf,
    pub model_location: PathBuf,
    pub class: String,
    pub chunk_count: usize,
}

/// An inbound document to score. Scoring only looks at text.
pub struct Document {
    pub headline: String,
    pub description: String,
}

impl Document {
    pub(crate) fn text(&self) -> String {
        format!("{} {}", self.description, self.headline)
    }
}
