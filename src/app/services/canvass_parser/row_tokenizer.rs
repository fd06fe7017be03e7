//! Data-row tokenization into precinct label and vote counts
//!
//! A table row lists a precinct label followed by one numeric column per
//! candidate. The candidate count is known before any row is read, so
//! the split point is the last `candidate_count` whitespace-delimited
//! tokens.

/// Split a table line into a precinct label and exactly
/// `candidate_count` vote tokens.
///
/// Returns `None` when the line has fewer tokens than the candidate
/// count; the caller reports that as a structural error for its block.
pub fn tokenize_row(line: &str, candidate_count: usize) -> Option<(String, Vec<String>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < candidate_count {
        return None;
    }

    let split = tokens.len() - candidate_count;
    let precinct = tokens[..split].join(" ");
    let votes = tokens[split..].iter().map(|t| t.to_string()).collect();
    Some((precinct, votes))
}
