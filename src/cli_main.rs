use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "runmax", version, about = "Parallel longest-run analysis for DNA/RNA sequences", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a FASTA file and report the longest run per letter
    Analyze {
        /// Input FASTA(.gz) file
        #[arg(short, long)]
        input: String,

        /// Optional output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Execution mode: serial, rayon, or pool
        #[arg(long, default_value = "rayon")]
        mode: String,

        /// Number of threads to use
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,

        /// Per-unit result timeout in seconds (pool mode)
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
    },

    /// Generate random nucleotide sequences as FASTA test data
    Generate {
        /// Output FASTA(.gz) file
        #[arg(short, long)]
        output: String,

        /// Number of sequences to generate
        #[arg(long, default_value_t = 100_000)]
        num_seqs: usize,

        /// Length of each sequence
        #[arg(long, default_value_t = 1000)]
        seq_length: usize,
    },

    /// Compare serial and parallel analysis over random sequences
    Benchmark {
        /// Number of sequences to generate
        #[arg(long, default_value_t = 100_000)]
        num_seqs: usize,

        /// Length of each sequence
        #[arg(long, default_value_t = 1000)]
        seq_length: usize,

        /// Number of threads to use
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Merge per-batch JSON result maps into one global map
    Merge {
        /// Input JSON result files
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}
