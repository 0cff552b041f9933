//! "Did you mean" hints for mistyped trait names

/// Levenshtein edit distance between two strings, by character.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows instead of the full matrix
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Up to three candidates within `max_distance` of `query`, closest first.
///
/// Comparison ignores case, so `hermitcrab` still finds `hermitCrab`.
pub fn suggest<'a>(query: &str, candidates: &[&'a str], max_distance: usize) -> Vec<&'a str> {
    let query = query.to_lowercase();

    let mut scored: Vec<(&str, usize)> = candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein_distance(&query, &candidate.to_lowercase())))
        .filter(|(_, distance)| *distance <= max_distance)
        .collect();

    // Stable sort keeps catalog order among ties
    scored.sort_by_key(|(_, distance)| *distance);
    scored.into_iter().take(3).map(|(s, _)| s).collect()
}

/// Format a "did you mean?" line, or `None` when there is nothing to suggest.
pub fn format_suggestion(suggestions: &[&str]) -> Option<String> {
    match suggestions {
        [] => None,
        [one] => Some(format!("Did you mean '{}'?", one)),
        [first, second] => Some(format!("Did you mean '{}' or '{}'?", first, second)),
        [first, second, third, ..] => {
            Some(format!("Did you mean '{}', '{}', or '{}'?", first, second, third))
        }
    }
}
