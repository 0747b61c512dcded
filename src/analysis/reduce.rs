use serde_json::Value;

use crate::analysis::error::AnalysisError;
use crate::analysis::scan::RunLengthMap;

/// Merge per-sequence results into one global longest-run map.
///
/// Point-wise maximum fold: each letter maps to the largest length
/// recorded for it across all inputs. The fold is commutative and
/// associative, so the result is independent of input order and of
/// whether the inputs came from serial or parallel scans. Each map is
/// validated before any of its entries are folded.
pub fn all_longest(maps: &[RunLengthMap]) -> Result<RunLengthMap, AnalysisError> {
    for map in maps {
        validate(map)?;
    }

    let mut combined = RunLengthMap::new();
    for map in maps {
        for (&letter, &length) in map {
            let entry = combined.entry(letter).or_insert(0);
            if length > *entry {
                *entry = length;
            }
        }
    }
    Ok(combined)
}

/// Fold one result into an accumulator, for incremental reduction as
/// worker results stream in. Equivalent to `all_longest` over the same
/// inputs in any order. The incoming map is validated before any entry
/// is applied, so a bad map never leaves the accumulator half-updated.
pub fn fold_longest(acc: &mut RunLengthMap, map: &RunLengthMap) -> Result<(), AnalysisError> {
    validate(map)?;
    for (&letter, &length) in map {
        let entry = acc.entry(letter).or_insert(0);
        if length > *entry {
            *entry = length;
        }
    }
    Ok(())
}

/// Merge result maps that crossed a process boundary as JSON, e.g.
/// per-partition result files emitted by distributed workers. A
/// non-numeric or zero value, or a key that is not exactly one letter,
/// fails with `InvalidValueType` before anything is folded.
pub fn all_longest_json(
    maps: &[serde_json::Map<String, Value>],
) -> Result<RunLengthMap, AnalysisError> {
    let mut typed = Vec::with_capacity(maps.len());
    for map in maps {
        let mut entries = RunLengthMap::new();
        for (key, value) in map {
            let length = value.as_u64().ok_or_else(|| AnalysisError::InvalidValueType {
                symbol: key.clone(),
                value: value.to_string(),
            })? as usize;

            let mut chars = key.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => {
                    return Err(AnalysisError::InvalidValueType {
                        symbol: key.clone(),
                        value: value.to_string(),
                    })
                }
            };
            entries.insert(letter, length);
        }
        typed.push(entries);
    }
    all_longest(&typed)
}

/// A RunLengthMap never holds a zero length; reject one before folding.
fn validate(map: &RunLengthMap) -> Result<(), AnalysisError> {
    for (&letter, &length) in map {
        if length == 0 {
            return Err(AnalysisError::InvalidValueType {
                symbol: letter.to_string(),
                value: "0".to_string(),
            });
        }
    }
    Ok(())
}
