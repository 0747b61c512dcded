use std::collections::HashMap;

/// Letter to longest contiguous run length, holding only the letter(s)
/// tied for the longest run in the scope it was computed over.
pub type RunLengthMap = HashMap<char, usize>;

/// Find the letter(s) with the longest contiguous run in one sequence.
///
/// Scans left to right, committing the current run into the per-letter
/// best whenever the letter changes (and once more for the final run),
/// then keeps only the entries equal to the sequence-wide maximum. Ties
/// are all kept: `"aaabbbaabb"` yields `{a: 3, b: 3}`.
///
/// An empty sequence yields an empty map.
pub fn longest_runs(seq: &str) -> RunLengthMap {
    let mut chars = seq.chars();
    let mut prev = match chars.next() {
        Some(c) => c,
        None => return RunLengthMap::new(),
    };

    let mut best: RunLengthMap = HashMap::new();
    let mut current = 1usize;

    for c in chars {
        if c == prev {
            current += 1;
        } else {
            commit_run(&mut best, prev, current);
            prev = c;
            current = 1;
        }
    }
    commit_run(&mut best, prev, current);

    let max = best.values().copied().max().unwrap_or(0);
    best.retain(|_, len| *len == max);
    best
}

/// Record a finished run, keeping the longest seen for that letter.
fn commit_run(best: &mut RunLengthMap, letter: char, length: usize) {
    let entry = best.entry(letter).or_insert(0);
    if length > *entry {
        *entry = length;
    }
}

/// Scan each sequence in a collection independently, keyed by its
/// position index. Results are per-sequence, never combined; use
/// `reduce::all_longest` to merge them.
pub fn longest_runs_each(sequences: &[String]) -> HashMap<usize, RunLengthMap> {
    sequences
        .iter()
        .enumerate()
        .map(|(i, seq)| (i, longest_runs(seq)))
        .collect()
}
