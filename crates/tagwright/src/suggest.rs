//! Typo suggestions for names that failed to resolve.

use std::cmp::Reverse;

use strsim::levenshtein;

/// Maximum number of suggestions returned by [`compute_suggestions`].
const MAX_SUGGESTIONS: usize = 3;

/// Largest edit distance [`closest_match`] accepts.
pub const CLOSEST_MATCH_DISTANCE: usize = 4;

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names of up to 3 characters
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first, ties in alphabetical order
///
/// # Example
///
/// ```
/// use tagwright::compute_suggestions;
///
/// let names = ["upper", "lower", "slug"];
/// assert_eq!(compute_suggestions("uppr", names), vec!["upper"]);
/// assert!(compute_suggestions("zzzzz", names).is_empty());
/// ```
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            (dist <= max_distance && dist > 0).then_some((dist, candidate))
        })
        .collect();

    suggestions.sort_unstable();
    suggestions.dedup();
    suggestions
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, s)| s.to_string())
        .collect()
}

/// The single nearest candidate within [`CLOSEST_MATCH_DISTANCE`] edits.
///
/// Unlike [`compute_suggestions`] the threshold does not shrink for short
/// names. Ties go to the alphabetically last candidate, so `len` prefers
/// `length` over `join` and `last`.
///
/// ```
/// use tagwright::closest_match;
///
/// let names = ["join", "last", "length"];
/// assert_eq!(closest_match("len", names).as_deref(), Some("length"));
/// assert_eq!(closest_match("zzzzz", names), None);
/// ```
pub fn closest_match<'a>(name: &str, available: impl IntoIterator<Item = &'a str>) -> Option<String> {
    available
        .into_iter()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|&(dist, _)| dist > 0 && dist <= CLOSEST_MATCH_DISTANCE)
        .max_by_key(|&(dist, candidate)| (Reverse(dist), candidate))
        .map(|(_, candidate)| candidate.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_allow_one_edit() {
        assert_eq!(compute_suggestions("ab", ["abc", "xyz"]), vec!["abc"]);
        assert!(compute_suggestions("ab", ["abcd"]).is_empty());
    }

    #[test]
    fn ties_are_alphabetical() {
        assert_eq!(
            compute_suggestions("cat", ["hat", "bat", "rat", "mat"]),
            vec!["bat", "hat", "mat"]
        );
    }

    #[test]
    fn closest_match_reaches_four_edits() {
        assert_eq!(closest_match("uppercase", ["upper", "lower"]).as_deref(), Some("upper"));
        assert_eq!(closest_match("abcde", ["vwxyz"]), None);
        assert_eq!(compute_suggestions("uppercase", ["upper"]), Vec::<String>::new());
        assert_eq!(closest_match("trunc", ["trim", "truncate"]).as_deref(), Some("truncate"));
    }

    #[test]
    fn exact_matches_are_not_suggested() {
        assert_eq!(closest_match("slug", ["slug"]), None);
    }
}
