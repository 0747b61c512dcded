//! Parallel execution boundary - fans the per-sequence scan out across
//! workers and hands the collected results to the reducer.

pub mod pool;

use std::time::Duration;

use rayon::prelude::*;
use tracing::warn;

use crate::analysis::error::AnalysisError;
use crate::analysis::scan::RunLengthMap;

pub use pool::ThreadPoolExecutor;

/// Per-sequence scan function applied by an executor's workers.
pub type SequenceWorker = fn(&str) -> RunLengthMap;

/// Runs a worker over every sequence in a collection and collects one
/// result per sequence, in input order. Completion order across workers
/// is unconstrained; the reduction is commutative, so the merged answer
/// is the same either way. Implementations must never return a partial
/// result set as a success.
pub trait SequenceExecutor {
    fn run_all(
        &self,
        sequences: &[String],
        worker: SequenceWorker,
    ) -> Result<Vec<RunLengthMap>, AnalysisError>;
}

/// In-order single-threaded execution, for baselines and tests.
pub struct SerialExecutor;

impl SequenceExecutor for SerialExecutor {
    fn run_all(
        &self,
        sequences: &[String],
        worker: SequenceWorker,
    ) -> Result<Vec<RunLengthMap>, AnalysisError> {
        Ok(sequences.iter().map(|seq| worker(seq)).collect())
    }
}

/// Data-parallel execution on the rayon thread pool. Each worker builds
/// its own local map; nothing is shared across workers.
pub struct RayonExecutor;

impl SequenceExecutor for RayonExecutor {
    fn run_all(
        &self,
        sequences: &[String],
        worker: SequenceWorker,
    ) -> Result<Vec<RunLengthMap>, AnalysisError> {
        Ok(sequences.par_iter().map(|seq| worker(seq)).collect())
    }
}

/// Create an executor by mode name. Unknown modes fall back to rayon
/// with a logged warning.
pub fn create_executor(
    mode: &str,
    workers: usize,
    unit_timeout: Duration,
) -> Box<dyn SequenceExecutor> {
    match mode {
        "serial" => Box::new(SerialExecutor),
        "rayon" => Box::new(RayonExecutor),
        "pool" => Box::new(ThreadPoolExecutor::new(workers, unit_timeout)),
        other => {
            warn!("Unknown execution mode '{}', using rayon", other);
            Box::new(RayonExecutor)
        }
    }
}
