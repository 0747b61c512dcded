use rand::Rng;

const BASES: [char; 4] = ['g', 'a', 't', 'c'];

/// Generate random nucleotide sequences for benchmarks and test data.
pub fn generate_random_sequences(num_seqs: usize, seq_length: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..num_seqs)
        .map(|_| {
            (0..seq_length)
                .map(|_| BASES[rng.gen_range(0..BASES.len())])
                .collect()
        })
        .collect()
}
