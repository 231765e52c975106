use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tokio::fs;

/// A trained model: token → Laplace-smoothed weight. Immutable once
/// written; retraining replaces the whole file.
pub type ProbabilityTable = HashMap<String, f64>;

#[derive(Error, Debug)]
pub enum WriteTableError {
    #[error("could not serialize table: {0}")]
    Serialize(#[from] csv::Error),
    #[error("could not write table to disk: {0}")]
    Write(#[from] io::Error),
}

#[derive(Error, Debug)]
pub enum ReadTableError {
    #[error("no table found for class")]
    TableNotFound,
    #[error("could not read table: {0}")]
    Read(#[from] io::Error),
}

pub fn table_location(model_location: &Path, class: &str) -> PathBuf {
    model_location.join(format!("{}.csv", class))
}

/// Writes a class's table as `word,weight` rows, weights fixed to ten
/// decimal places. The rows land in a scratch file that is renamed over
/// the final path, so a crash mid-write never leaves a partial table
/// where a reader would find it.
pub async fn write_table(
    model_location: &Path,
    class: &str,
    table: &ProbabilityTable,
) -> Result<(), WriteTableError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["word", "weight"])?;
    for (word, weight) in table {
        let weight = format!("{:.10}", weight);
        writer.write_record([word.as_str(), weight.as_str()])?;
    }
    let rows = writer.into_inner().map_err(|err| err.into_error())?;

    let location = table_location(model_location, class);
    fs::create_dir_all(model_location).await?;
    let scratch = location.with_extension("csv.tmp");
    fs::write(&scratch, rows).await?;
    fs::rename(&scratch, &location).await?;
    Ok(())
}

/// Loads a class's table, discarding the header row. A weight that does
/// not parse as a number is kept at zero instead of failing the load.
pub async fn load_table(
    model_location: &Path,
    class: &str,
) -> Result<ProbabilityTable, ReadTableError> {
    let location = table_location(model_location, class);
    if !location.exists() {
        return Err(ReadTableError::TableNotFound);
    }
    let raw = fs::read_to_string(&location).await?;
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut table = ProbabilityTable::new();
    for record in reader.records().flatten() {
        if let (Some(word), Some(weight)) = (record.get(0), record.get(1)) {
            table.insert(word.to_owned(), weight.parse().unwrap_or(0.0));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_a_table() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = ProbabilityTable::new();
        table.insert(String::from("stocks"), 0.25);
        table.insert(String::from("rally"), 0.0001220703125);
        write_table(dir.path(), "BUSINESS", &table).await.unwrap();

        let loaded = load_table(dir.path(), "BUSINESS").await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert!((loaded["stocks"] - 0.25).abs() < 1e-9);
        // stored to ten decimal places
        assert!((loaded["rally"] - 0.0001220703).abs() < 1e-9);
    }

    #[tokio::test]
    async fn header_row_is_not_an_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = ProbabilityTable::new();
        table.insert(String::from("stocks"), 0.5);
        write_table(dir.path(), "BUSINESS", &table).await.unwrap();

        let loaded = load_table(dir.path(), "BUSINESS").await.unwrap();
        assert!(!loaded.contains_key("word"));
    }

    #[tokio::test]
    async fn malformed_weights_parse_as_zero() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            table_location(dir.path(), "BUSINESS"),
            "word,weight\nstocks,0.2500000000\nrally,not-a-number\n",
        )
        .unwrap();

        let loaded = load_table(dir.path(), "BUSINESS").await.unwrap();
        assert!((loaded["stocks"] - 0.25).abs() < 1e-9);
        assert_eq!(loaded["rally"], 0.0);
    }

    #[tokio::test]
    async fn missing_table_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_table(dir.path(), "SPORTS").await.unwrap_err();
        assert!(matches!(err, ReadTableError::TableNotFound));
    }

    #[tokio::test]
    async fn rewriting_replaces_the_table_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let mut table = ProbabilityTable::new();
        table.insert(String::from("stocks"), 0.25);
        table.insert(String::from("rally"), 0.125);
        write_table(dir.path(), "BUSINESS", &table).await.unwrap();

        let mut retrained = ProbabilityTable::new();
        retrained.insert(String::from("market"), 0.5);
        write_table(dir.path(), "BUSINESS", &retrained).await.unwrap();

        let loaded = load_table(dir.path(), "BUSINESS").await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("market"));
        assert!(!dir.path().join("BUSINESS.csv.tmp").exists());
    }
}
