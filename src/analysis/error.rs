use std::fmt;
use std::time::Duration;

/// Errors surfaced by reduction and by the parallel execution boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// An entry with an invalid value reached the reducer. The reduction
    /// aborts before folding anything from the offending map.
    InvalidValueType { symbol: String, value: String },
    /// A parallel unit of work missed its collection deadline. Reported
    /// separately from generic failure so callers can decide retry policy.
    WorkerTimeout { pending: usize, waited: Duration },
    /// Unrecoverable failure in the execution substrate. The batch result
    /// is this sentinel, never a partial mapping presented as complete.
    ExecutionFailure(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidValueType { symbol, value } => {
                write!(f, "invalid run length for symbol {:?}: {}", symbol, value)
            }
            AnalysisError::WorkerTimeout { pending, waited } => {
                write!(
                    f,
                    "timed out after {:.2}s with {} unit(s) outstanding",
                    waited.as_secs_f64(),
                    pending
                )
            }
            AnalysisError::ExecutionFailure(msg) => {
                write!(f, "execution failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
