use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use futures::future::join_all;
use tokio::task::JoinHandle;

use crate::tokenizer::tokenize;

pub(crate) type FrequencyTable = HashMap<String, usize>;

/// How a worker folds a chunk's tokens into the shared table.
#[derive(Clone, Copy)]
pub(crate) enum Tally {
    /// Bump tokens the table already knows; record a first sighting at
    /// zero. A stored count is therefore the number of repeat
    /// occurrences, one less than the raw occurrence total.
    Count,
    /// Record missing tokens at zero and leave existing counts alone.
    /// Used for the leftover partial chunk at the end of a pass.
    Seed,
}

/// Fans tokenization out across one worker task per chunk, all of them
/// funneling counts into a single shared table. `join` is the barrier:
/// nobody reads the table until every worker has finished.
pub(crate) struct Aggregator {
    table: Arc<Mutex<FrequencyTable>>,
    workers: Vec<JoinHandle<()>>,
}

impl Aggregator {
    pub(crate) fn new(seed: FrequencyTable) -> Self {
        Aggregator {
            table: Arc::new(Mutex::new(seed)),
            workers: Vec::new(),
        }
    }

    pub(crate) fn dispatch(&mut self, chunk: Vec<String>) {
        if chunk.is_empty() {
            return;
        }
        let table = Arc::clone(&self.table);
        self.workers
            .push(tokio::spawn(async move { tally(&chunk, &table, Tally::Count) }));
    }

    /// Processes a chunk on the caller, without a worker.
    pub(crate) fn absorb(&self, chunk: &[String]) {
        tally(chunk, &self.table, Tally::Seed);
    }

    pub(crate) async fn join(self) -> FrequencyTable {
        for worker in join_all(self.workers).await {
            worker.unwrap();
        }
        Arc::try_unwrap(self.table).unwrap().into_inner().unwrap()
    }
}

fn tally(chunk: &[String], table: &Mutex<FrequencyTable>, mode: Tally) {
    for text in chunk {
        for token in tokenize(text) {
            // lock per token, not per chunk
            let mut table = table.lock().unwrap();
            match mode {
                Tally::Count => {
                    if let Some(count) = table.get_mut(&token) {
                        *count += 1;
                    } else {
                        table.insert(token, 0);
                    }
                }
                Tally::Seed => {
                    table.entry(token).or_insert(0);
                }
            }
        }
    }
}
