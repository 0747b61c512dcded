use crate::analysis::error::AnalysisError;
use crate::analysis::reduce::all_longest;
use crate::analysis::scan::{longest_runs, RunLengthMap};
use crate::exec::SequenceExecutor;

/// Scan every sequence in order and merge into one global map.
pub fn analyze_serial(sequences: &[String]) -> Result<RunLengthMap, AnalysisError> {
    let per_sequence: Vec<RunLengthMap> = sequences.iter().map(|seq| longest_runs(seq)).collect();
    all_longest(&per_sequence)
}

/// Fan the per-sequence scan out through an executor and merge the
/// collected results. Produces the same map as `analyze_serial` for the
/// same input, whatever the completion order.
pub fn analyze_with(
    executor: &dyn SequenceExecutor,
    sequences: &[String],
) -> Result<RunLengthMap, AnalysisError> {
    let per_sequence = executor.run_all(sequences, longest_runs)?;
    all_longest(&per_sequence)
}
