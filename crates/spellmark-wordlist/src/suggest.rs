// Suggestion ranking for wordlist dictionaries.
//
// Candidates come from the base word set, scored by Levenshtein distance
// with a hard cap; ties break alphabetically so the output is stable. A
// stored replacement for the exact word always ranks first.

/// Maximum edit distance a candidate may have from the misspelled word.
const MAX_DISTANCE: usize = 2;

/// Rank correction candidates for `word`, best first.
pub(crate) fn rank<'a>(
    word: &str,
    preferred: Option<&String>,
    candidates: impl Iterator<Item = &'a String>,
    max: usize,
) -> Vec<String> {
    let mut scored: Vec<(usize, &'a String)> = candidates
        .filter_map(|candidate| {
            let distance = edit_distance(word, candidate);
            (distance > 0 && distance <= MAX_DISTANCE).then_some((distance, candidate))
        })
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let mut out: Vec<String> = Vec::new();
    if let Some(preferred) = preferred {
        out.push(preferred.clone());
    }
    for (_, candidate) in scored {
        if out.iter().any(|s| s == candidate) {
            continue;
        }
        out.push(candidate.clone());
        if out.len() >= max {
            break;
        }
    }
    out.truncate(max);
    out
}

/// Levenshtein distance over codepoints, two-row formulation.
pub(crate) fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
