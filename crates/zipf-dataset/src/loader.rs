//! Reading a generated dataset back, the way a downstream sketch evaluator
//! does: build the record list plus exact per-flow and per-pair frequencies.
//!
//! Ids are taken exactly as written. The generator already emits 1-based ids,
//! so no offset is applied and id 0 is accepted like any other value.

use crate::error::Result;
use crate::record::Record;
use ahash::AHashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A dataset file loaded into memory with its ground-truth counts.
#[derive(Debug, Default)]
pub struct LoadedDataset {
    pub records: Vec<Record>,
    /// Occurrences of each flow id.
    pub flow_counts: AHashMap<u32, u64>,
    /// Occurrences of each (flow, element) pair, keyed by `Record::packed`.
    pub pair_counts: AHashMap<u64, u64>,
    /// Lines that did not hold two unsigned integers.
    pub skipped_lines: u64,
}

impl LoadedDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn unique_flows(&self) -> usize {
        self.flow_counts.len()
    }

    pub fn unique_pairs(&self) -> usize {
        self.pair_counts.len()
    }

    fn push(&mut self, record: Record) {
        *self.flow_counts.entry(record.flow_id).or_insert(0) += 1;
        *self.pair_counts.entry(record.packed()).or_insert(0) += 1;
        self.records.push(record);
    }
}

/// Parse one `"<flow> <element>"` line. Extra trailing fields are ignored.
pub fn parse_line(line: &str) -> Option<Record> {
    let mut fields = line.split_whitespace();
    let flow_id = fields.next()?.parse().ok()?;
    let element_id = fields.next()?.parse().ok()?;
    Some(Record::new(flow_id, element_id))
}

pub fn load_dataset(path: &Path) -> Result<LoadedDataset> {
    let file = File::open(path)?;
    let loaded = read_dataset(BufReader::new(file))?;
    tracing::info!(
        path = %path.display(),
        records = loaded.len(),
        unique_flows = loaded.unique_flows(),
        skipped = loaded.skipped_lines,
        "dataset loaded"
    );
    Ok(loaded)
}

pub fn read_dataset<R: BufRead>(reader: R) -> Result<LoadedDataset> {
    let mut loaded = LoadedDataset::default();
    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(record) => loaded.push(record),
            None => {
                if !line.trim().is_empty() {
                    tracing::debug!(line = %line, "skipping malformed line");
                }
                loaded.skipped_lines += 1;
            }
        }
    }
    Ok(loaded)
}
