//! Longest-run analysis - per-sequence scanning and global reduction.

pub mod batch;
pub mod error;
pub mod reduce;
pub mod report;
pub mod scan;

pub use error::AnalysisError;
pub use scan::RunLengthMap;
