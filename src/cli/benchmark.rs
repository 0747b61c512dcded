use std::time::Instant;

use crate::analysis::batch::{analyze_serial, analyze_with};
use crate::exec::RayonExecutor;
use crate::simulate::generate_random_sequences;

/// Timed serial-vs-parallel comparison over random sequences.
pub fn benchmark_longest_runs(num_seqs: usize, seq_length: usize) {
    println!(
        "Generating {} test sequences of length {}",
        num_seqs, seq_length
    );
    let sequences = generate_random_sequences(num_seqs, seq_length);

    println!("Running serial analysis");
    let start = Instant::now();
    let serial_answer = analyze_serial(&sequences);
    let serial_secs = start.elapsed().as_secs_f64();

    println!("Running parallel analysis");
    let start = Instant::now();
    let parallel_answer = analyze_with(&RayonExecutor, &sequences);
    let parallel_secs = start.elapsed().as_secs_f64();

    match (serial_answer, parallel_answer) {
        (Ok(serial), Ok(parallel)) => {
            println!("  Serial: {:.2} seconds - {:?}", serial_secs, serial);
            println!("Parallel: {:.2} seconds - {:?}", parallel_secs, parallel);
            if serial != parallel {
                eprintln!("Warning: serial and parallel answers differ");
            } else if parallel_secs > 0.0 {
                println!("Speedup: {:.2}x", serial_secs / parallel_secs);
            }
        }
        (serial, parallel) => {
            if let Err(e) = serial {
                eprintln!("Serial analysis failed: {}", e);
            }
            if let Err(e) = parallel {
                eprintln!("Parallel analysis failed: {}", e);
            }
        }
    }
}
