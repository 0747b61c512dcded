use std::collections::BTreeMap;
use std::fs;
use std::time::Duration;

use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use runmax::analysis::batch::analyze_with;
use runmax::analysis::reduce::all_longest_json;
use runmax::analysis::report::AnalysisReport;
use runmax::analysis::RunLengthMap;
use runmax::cli::benchmark::benchmark_longest_runs;
use runmax::cli_main::{Cli, Commands};
use runmax::exec::create_executor;
use runmax::io::fasta::{read_fasta_sequences, FastaWriter};
use runmax::simulate::generate_random_sequences;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            output,
            mode,
            threads,
            timeout_secs,
        } => {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .expect("Failed to initialize thread pool");

            let sequences = match read_fasta_sequences(&input) {
                Ok(seqs) => seqs,
                Err(e) => {
                    eprintln!("Error reading {}: {}", input, e);
                    std::process::exit(1);
                }
            };
            info!("Read {} sequences from {}", sequences.len(), input);

            let executor = create_executor(&mode, threads, Duration::from_secs(timeout_secs));
            match analyze_with(executor.as_ref(), &sequences) {
                Ok(combined) => {
                    let report = AnalysisReport::new(sequences.len(), &combined);
                    if let Err(e) = emit_json(&report, output.as_deref()) {
                        eprintln!("Error writing result: {}", e);
                        std::process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Analysis failed: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Generate {
            output,
            num_seqs,
            seq_length,
        } => {
            println!(
                "Generating {} sequences of length {} into {}",
                num_seqs, seq_length, output
            );
            let sequences = generate_random_sequences(num_seqs, seq_length);
            if let Err(e) = write_fasta(&output, &sequences) {
                eprintln!("Error writing {}: {}", output, e);
                std::process::exit(1);
            }
        }

        Commands::Benchmark {
            num_seqs,
            seq_length,
            threads,
        } => {
            ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .expect("Failed to initialize thread pool");

            benchmark_longest_runs(num_seqs, seq_length);
        }

        Commands::Merge { inputs } => match merge_result_files(&inputs) {
            Ok(combined) => {
                let sorted: BTreeMap<char, usize> = combined.iter().map(|(&k, &v)| (k, v)).collect();
                if let Err(e) = emit_json(&sorted, None) {
                    eprintln!("Error writing result: {}", e);
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Merge failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// Print a result as pretty JSON, to stdout or a file.
fn emit_json<T: serde::Serialize>(value: &T, output: Option<&str>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => fs::write(path, json + "\n"),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}

fn write_fasta(path: &str, sequences: &[String]) -> std::io::Result<()> {
    let mut writer = FastaWriter::new(path)?;
    for (i, seq) in sequences.iter().enumerate() {
        writer.write_record(&format!("seq_{}", i), seq)?;
    }
    writer.finish()
}

/// Load per-batch JSON result maps from disk and reduce them.
fn merge_result_files(paths: &[String]) -> Result<RunLengthMap, Box<dyn std::error::Error>> {
    let mut maps = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        let map = value
            .as_object()
            .ok_or_else(|| format!("{} does not contain a JSON object", path))?
            .clone();
        maps.push(map);
    }
    info!("Merging {} result file(s)", maps.len());
    Ok(all_longest_json(&maps)?)
}
