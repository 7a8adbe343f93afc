/// Normalized 0-100 similarity between a query and a candidate id.
///
/// The whole-string Levenshtein ratio handles typos; a windowed ratio
/// handles short queries against long ids (prefixes, embedded names).
/// Windowed scores are damped so a full-string match always outranks a
/// substring match of the same quality.
pub fn similarity(query: &str, candidate: &str) -> u8 {
    let full = strsim::normalized_levenshtein(query, candidate);
    let partial = best_window_ratio(query, candidate) * PARTIAL_DAMPING;
    to_score(full.max(partial))
}

const PARTIAL_DAMPING: f64 = 0.9;

fn to_score(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Best Levenshtein ratio of the shorter string against every
/// equal-length window of the longer one.
fn best_window_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = long.chars().collect();
    let mut best = 0.0_f64;
    for window in long_chars.windows(short_len) {
        let window: String = window.iter().collect();
        best = best.max(strsim::normalized_levenshtein(short, &window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(similarity("firefox", "firefox"), 100);
    }

    #[test]
    fn test_trailing_typo_clears_auto_accept() {
        assert!(similarity("firefoxx", "firefox") >= 80);
    }

    #[test]
    fn test_prefix_of_longer_id_scores_90() {
        assert_eq!(similarity("fire", "firefox"), 90);
    }

    #[test]
    fn test_name_embedded_in_reverse_dns_id() {
        assert!(similarity("gimp", "org.gimp.gimp") >= 80);
    }

    #[test]
    fn test_unrelated_strings_stay_below_cutoff() {
        assert!(similarity("xyz", "firefox") < 80);
        assert!(similarity("xyz", "code") < 80);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(similarity("", "firefox"), 0);
    }
}
