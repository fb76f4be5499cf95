//! Best-boundary selection
//!
//! Given the collected candidates for a word sequence, pick the single cut
//! that balances viability (neither half too short), centeredness, and rule
//! score.

use crate::boundary::Boundary;
use crate::types::{words_char_len, Word};

/// Pick the best viable boundary for splitting a word sequence.
///
/// A candidate is viable when both halves exceed `min_length` trimmed
/// characters. Among viable candidates the one closest to the sequence
/// midpoint wins; ties go to the higher score, then to the lowest index.
/// Out-of-range candidate indices are skipped. Returns `None` when there
/// is nothing viable.
pub fn find_best_boundary(
    words: &[Word],
    boundaries: &[Boundary],
    min_length: usize,
) -> Option<Boundary> {
    if words.is_empty() || boundaries.is_empty() {
        return None;
    }

    let target_mid = (words.len() - 1) as f64 / 2.0;
    let mut best: Option<(&Boundary, f64)> = None;

    for boundary in boundaries {
        if boundary.index + 1 >= words.len() {
            continue;
        }
        let left_len = words_char_len(&words[..=boundary.index]);
        let right_len = words_char_len(&words[boundary.index + 1..]);
        if left_len <= min_length || right_len <= min_length {
            continue;
        }

        let distance = (boundary.index as f64 - target_mid).abs();
        let better = match best {
            None => true,
            Some((current, current_distance)) => {
                // Distances are half-integers, so exact comparison is sound
                distance < current_distance
                    || (distance == current_distance && boundary.score > current.score)
            }
        };
        if better {
            best = Some((boundary, distance));
        }
    }

    best.map(|(boundary, _)| boundary.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryCollector, BoundaryKind};
    use crate::language::LanguageProfile;
    use crate::types::Word;

    fn w(text: &str, start: f64, end: f64) -> Word {
        Word::new(text, start, end)
    }

    fn pause(index: usize, score: f64) -> Boundary {
        Boundary {
            index,
            kind: BoundaryKind::Pause { gap: 1.0 },
            score,
        }
    }

    fn sample_words(n: usize) -> Vec<Word> {
        (0..n)
            .map(|i| w(if i == 0 { "word" } else { " word" }, i as f64, i as f64 + 0.5))
            .collect()
    }

    #[test]
    fn empty_inputs_yield_none() {
        assert!(find_best_boundary(&[], &[pause(0, 0.5)], 3).is_none());
        assert!(find_best_boundary(&sample_words(4), &[], 3).is_none());
    }

    #[test]
    fn unviable_candidates_yield_none() {
        // A cut after index 0 leaves a 4-character left half, not above 10
        let words = sample_words(2);
        assert!(find_best_boundary(&words, &[pause(0, 0.9)], 10).is_none());
    }

    #[test]
    fn closest_to_midpoint_wins() {
        let words = sample_words(7); // midpoint at index 3
        let candidates = vec![pause(1, 0.9), pause(3, 0.2), pause(5, 0.9)];
        let best = find_best_boundary(&words, &candidates, 3).unwrap();
        assert_eq!(best.index, 3);
    }

    #[test]
    fn equidistant_tie_goes_to_higher_score() {
        let words = sample_words(7); // midpoint at index 3
        let candidates = vec![pause(2, 0.3), pause(4, 0.8)];
        let best = find_best_boundary(&words, &candidates, 3).unwrap();
        assert_eq!(best.index, 4);
    }

    #[test]
    fn full_tie_goes_to_lowest_index() {
        let words = sample_words(7);
        let candidates = vec![pause(2, 0.5), pause(4, 0.5)];
        let best = find_best_boundary(&words, &candidates, 3).unwrap();
        assert_eq!(best.index, 2);
    }

    #[test]
    fn out_of_range_indices_are_skipped() {
        let words = sample_words(3);
        let candidates = vec![pause(7, 1.0)];
        assert!(find_best_boundary(&words, &candidates, 1).is_none());
    }

    #[test]
    fn works_with_collected_boundaries() {
        let words = vec![
            w("First,", 0.0, 0.5),
            w(" second", 0.5, 1.0),
            w(" third,", 1.0, 1.5),
            w(" fourth", 1.5, 2.0),
        ];
        let profile = LanguageProfile::get("en");
        let boundaries = BoundaryCollector::collect(&words, profile);
        let best = find_best_boundary(&words, &boundaries, 3).unwrap();
        // Commas at 0 and 2; midpoint is 1.5, so index 2 wins on distance
        assert_eq!(best.index, 2);
        assert!(matches!(best.kind, BoundaryKind::WeakPunct { .. }));
    }
}
