use persistance::fs::{load_table, ReadTableError};
use thiserror::Error;

use crate::{tokenizer::tokenize, ClassifierConfig, Document};

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("no trained model for class {0}")]
    ModelNotFound(String),
    #[error("could not load probability table: {0}")]
    TableUnreadable(ReadTableError),
}

/// Scores a document against the configured class's persisted table. The
/// result is an unnormalized sum of per-token weights — comparable across
/// classes scored with their own tables, but not a probability. Tokens
/// the table has never seen contribute nothing.
pub async fn score(config: &ClassifierConfig, document: &Document) -> Result<f64, ScoreError> {
    let table = match load_table(&config.model_location, &config.class).await {
        Ok(table) => table,
        Err(ReadTableError::TableNotFound) => {
            return Err(ScoreError::ModelNotFound(config.class.clone()))
        }
        Err(err) => return Err(ScoreError::TableUnreadable(err)),
    };
    let sum = tokenize(&document.text())
        .iter()
        .map(|token| table.get(token).copied().unwrap_or(0.0))
        .sum();
    Ok(sum)
}
