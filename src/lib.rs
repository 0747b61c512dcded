//! runmax - parallel longest-run analysis for DNA/RNA sequences.
//!
//! Scans each sequence for the letter(s) with the longest contiguous run
//! and reduces per-sequence results into one global mapping holding the
//! longest run ever observed per letter.

pub mod analysis;
pub mod cli;
pub mod cli_main;
pub mod exec;
pub mod io;
pub mod simulate;
