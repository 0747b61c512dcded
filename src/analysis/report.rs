use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::scan::RunLengthMap;

/// Summary of one analysis run, serialized as the JSON output of
/// `runmax analyze`. Letters are sorted for stable output.
#[derive(Serialize, Debug)]
pub struct AnalysisReport {
    pub sequences: usize,
    pub longest_runs: BTreeMap<char, usize>,
}

impl AnalysisReport {
    pub fn new(sequences: usize, combined: &RunLengthMap) -> Self {
        Self {
            sequences,
            longest_runs: combined.iter().map(|(&letter, &len)| (letter, len)).collect(),
        }
    }
}
