use std::collections::HashMap;

use runmax::analysis::batch::{analyze_serial, analyze_with};
use runmax::analysis::reduce::{all_longest, fold_longest};
use runmax::analysis::scan::{longest_runs, longest_runs_each, RunLengthMap};
use runmax::exec::RayonExecutor;
use runmax::simulate::generate_random_sequences;

fn map(entries: &[(char, usize)]) -> RunLengthMap {
    entries.iter().copied().collect()
}

/// Reference implementation: longest run per letter by explicit grouping.
fn brute_force_longest_runs(seq: &str) -> RunLengthMap {
    let mut best: HashMap<char, usize> = HashMap::new();
    let chars: Vec<char> = seq.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let mut j = i;
        while j < chars.len() && chars[j] == chars[i] {
            j += 1;
        }
        let entry = best.entry(chars[i]).or_insert(0);
        if j - i > *entry {
            *entry = j - i;
        }
        i = j;
    }
    let max = best.values().copied().max().unwrap_or(0);
    best.retain(|_, len| *len == max);
    best
}

#[test]
fn test_documented_scan_examples() {
    assert_eq!(longest_runs("aacbbb"), map(&[('b', 3)]));
    assert_eq!(longest_runs("aabbbaabbc"), map(&[('b', 3)]));
    assert_eq!(longest_runs("aaabbbaabb"), map(&[('a', 3), ('b', 3)]));
    assert_eq!(longest_runs(""), RunLengthMap::new());
}

#[test]
fn test_scan_matches_brute_force_on_random_sequences() {
    for seq in generate_random_sequences(50, 200) {
        assert_eq!(longest_runs(&seq), brute_force_longest_runs(&seq), "{}", seq);
    }
}

#[test]
fn test_scan_values_all_equal_the_maximum() {
    for seq in generate_random_sequences(20, 300) {
        let result = longest_runs(&seq);
        let max = result.values().copied().max().unwrap();
        assert!(result.values().all(|&len| len == max));
        assert!(max >= 1);
    }
}

#[test]
fn test_documented_reduce_example() {
    let inputs = vec![
        map(&[('a', 4)]),
        map(&[('b', 6), ('a', 2)]),
        map(&[('b', 10)]),
    ];
    assert_eq!(all_longest(&inputs).unwrap(), map(&[('a', 4), ('b', 10)]));
}

#[test]
fn test_scan_then_reduce_equals_whole_collection_scan() {
    // Reducing per-sequence winners over single-sequence collections must
    // agree with scanning the lone sequence directly.
    let seqs: Vec<String> = vec!["aaatttt".into(), "ccg".into()];
    let per_index = longest_runs_each(&seqs);
    let maps: Vec<RunLengthMap> = (0..seqs.len()).map(|i| per_index[&i].clone()).collect();
    let combined = all_longest(&maps).unwrap();
    assert_eq!(combined, map(&[('t', 4), ('c', 2)]));
}

#[test]
fn test_parallel_equals_serial_on_random_collection() {
    let seqs = generate_random_sequences(200, 100);
    let serial = analyze_serial(&seqs).unwrap();
    let parallel = analyze_with(&RayonExecutor, &seqs).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn test_streaming_reduce_equals_batch_reduce() {
    let seqs = generate_random_sequences(100, 80);
    let per_sequence: Vec<RunLengthMap> = seqs.iter().map(|s| longest_runs(s)).collect();

    let batch = all_longest(&per_sequence).unwrap();

    let mut streamed = RunLengthMap::new();
    for result in &per_sequence {
        fold_longest(&mut streamed, result).unwrap();
    }
    assert_eq!(streamed, batch);
}
