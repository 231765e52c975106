use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use serde::Deserialize;

/// One line of the newline-delimited JSON corpus. The dataset carries
/// more fields (`date`, `link`, `authors`); only these three are read.
#[derive(Deserialize, Debug)]
pub(crate) struct Record {
    #[serde(rename = "short_description", default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) headline: String,
    #[serde(default)]
    pub(crate) category: String,
}

impl Record {
    pub(crate) fn text(&self) -> String {
        format!("{} {}", self.description, self.headline)
    }
}

/// Streams the corpus record by record. Lines that fail to parse are
/// skipped; the stream itself keeps going.
pub(crate) fn records(path: &Path) -> io::Result<impl Iterator<Item = Record>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file)
        .lines()
        .map_while(Result::ok)
        .filter_map(|line| serde_json::from_str(&line).ok()))
}

pub(crate) fn line_count(path: &Path) -> io::Result<usize> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut count = 0;
    loop {
        let buffered = reader.fill_buf()?;
        if buffered.is_empty() {
            break;
        }
        count += buffered.iter().filter(|&&byte| byte == b'\n').count();
        let consumed = buffered.len();
        reader.consume(consumed);
    }
    Ok(count)
}
