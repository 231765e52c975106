use std::{io, mem, path::Path};

use log::info;
use persistance::fs::{write_table, ProbabilityTable, WriteTableError};
use thiserror::Error;

use crate::{
    aggregator::{Aggregator, FrequencyTable},
    corpus::{self, Record},
    ClassifierConfig,
};

#[derive(Error, Debug)]
pub enum TrainError {
    #[error("could not read corpus: {0}")]
    CorpusUnreadable(#[from] io::Error),
    #[error("could not persist probability table: {0}")]
    Persist(#[from] WriteTableError),
}

/// One aggregation pass over the corpus. Chunk windows are keyed to the
/// record's position in the corpus, not to how many records `keep`
/// accepted, so both passes cut the stream at the same boundaries. Every
/// full window dispatches one worker; records left in a trailing partial
/// window are absorbed synchronously as seeds.
pub(crate) async fn aggregate_corpus<F>(
    path: &Path,
    chunk_size: usize,
    seed: FrequencyTable,
    keep: F,
) -> io::Result<FrequencyTable>
where
    F: Fn(&Record) -> bool,
{
    let mut aggregator = Aggregator::new(seed);
    let mut chunk = Vec::with_capacity(chunk_size);
    for (position, record) in corpus::records(path)?.enumerate() {
        if keep(&record) {
            chunk.push(record.text());
        }
        if (position + 1) % chunk_size == 0 {
            aggregator.dispatch(mem::take(&mut chunk));
        }
    }
    if !chunk.is_empty() {
        aggregator.absorb(&chunk);
    }
    Ok(aggregator.join().await)
}

/// Trains the configured class: a vocabulary pass over the whole corpus,
/// a counting pass over the class's own documents seeded with that
/// vocabulary, Laplace smoothing, then one atomic write of the table.
pub async fn train(config: &ClassifierConfig) -> Result<(), TrainError> {
    let lines = corpus::line_count(&config.corpus_location)?;
    let chunk_size = (lines / config.chunk_count.max(1)).max(1);

    let vocabulary =
        aggregate_corpus(&config.corpus_location, chunk_size, FrequencyTable::new(), |_| true)
            .await?;
    info!("built vocabulary of {} tokens", vocabulary.len());

    let class = config.class.as_str();
    let counts = aggregate_corpus(&config.corpus_location, chunk_size, vocabulary, |record| {
        record.category == class
    })
    .await?;

    let total: usize = counts.values().sum();
    let vocabulary_size = counts.len();
    let mut probabilities = ProbabilityTable::with_capacity(vocabulary_size);
    for (token, count) in counts {
        probabilities.insert(token, (count as f64 + 1.0) / ((total + vocabulary_size) as f64));
    }

    write_table(&config.model_location, &config.class, &probabilities).await?;
    info!("trained {} over {} tokens", config.class, vocabulary_size);
    Ok(())
}
