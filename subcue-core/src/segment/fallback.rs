//! Layer 3: readability enforcement
//!
//! Segments that exceed the line-width, duration, or reading-speed limits
//! are split in two, and the halves are re-examined until nothing violates.
//! Splitting prefers a linguistically meaningful boundary (semantic
//! protection) and degrades through weak punctuation, pauses, and plain
//! character counts. The recursion is driven by an explicit work stack so
//! adversarial inputs cannot exhaust the native stack.

use tracing::warn;

use crate::boundary::{
    find_best_boundary, gap_between, splits_hyphenated_compound, trailing_char,
    BoundaryCollector, MIN_PAUSE_GAP,
};
use crate::language::{display_width, LanguageProfile};
use crate::segment::SegmenterConfig;
use crate::types::{words_char_len, Word};

/// Viability floor handed to the selector; keeps both halves at 3+ characters.
const PROTECTED_MIN_HALF: usize = 2;

/// Stripped half length at which a weak-punctuation split is rejected and
/// redone by character count.
const RUNT_HALF_LEN: usize = 2;

/// Split every violating segment until all output respects the limits or no
/// usable split point remains.
pub(crate) fn enforce_limits(
    parts: Vec<Vec<Word>>,
    config: &SegmenterConfig,
    profile: &LanguageProfile,
) -> Vec<Vec<Word>> {
    let mut output = Vec::with_capacity(parts.len());
    for part in parts {
        let mut stack = vec![part];
        while let Some(mut current) = stack.pop() {
            if current.len() < 2 || !violates_limits(&current, config) {
                if current.len() < 2 && violates_limits(&current, config) {
                    warn!(
                        chars = words_char_len(&current),
                        "single-word segment exceeds limits, emitting unchanged"
                    );
                }
                output.push(current);
                continue;
            }

            let cut = protected_cut(&current, config, profile)
                .or_else(|| mechanical_cut(&current, config, profile));
            match cut {
                Some(index) if index + 1 < current.len() => {
                    let right = current.split_off(index + 1);
                    // Right half pushed first so the left half pops next and
                    // output order matches input order
                    stack.push(right);
                    stack.push(current);
                }
                _ => {
                    warn!(
                        chars = words_char_len(&current),
                        words = current.len(),
                        "segment exceeds limits but has no usable split point"
                    );
                    output.push(current);
                }
            }
        }
    }
    output
}

/// Whether a word run violates any readability limit.
pub(crate) fn violates_limits(words: &[Word], config: &SegmenterConfig) -> bool {
    let mut text = String::new();
    for word in words {
        text.push_str(&word.text);
    }
    let text = text.trim();

    if display_width(text) > config.max_cpl {
        return true;
    }

    let duration = segment_duration(words);
    if duration > config.max_duration {
        return true;
    }
    duration > 0.0 && text.chars().count() as f64 / duration > config.max_cps
}

fn segment_duration(words: &[Word]) -> f64 {
    match (words.first(), words.last()) {
        (Some(first), Some(last)) => (last.end - first.start).max(0.0),
        _ => 0.0,
    }
}

/// Semantic protection: the collector/selector pair picks a meaningful cut.
fn protected_cut(
    words: &[Word],
    config: &SegmenterConfig,
    profile: &LanguageProfile,
) -> Option<usize> {
    if !config.use_semantic_protection {
        return None;
    }
    let boundaries = BoundaryCollector::collect(words, profile);
    find_best_boundary(words, &boundaries, PROTECTED_MIN_HALF).map(|b| b.index)
}

/// The mechanical chain: weak punctuation, then pauses, then characters.
fn mechanical_cut(
    words: &[Word],
    config: &SegmenterConfig,
    profile: &LanguageProfile,
) -> Option<usize> {
    let midpoint = (words.len() - 1) as f64 / 2.0;

    let weak: Vec<usize> = (0..words.len() - 1)
        .filter(|&i| {
            trailing_char(&words[i].text).is_some_and(|ch| profile.is_weak_punct(ch))
                && !splits_hyphenated_compound(&words[i], &words[i + 1])
        })
        .collect();
    if !weak.is_empty() {
        let index = nearest_to(&weak, midpoint);
        if words_char_len(&words[..=index]) <= RUNT_HALF_LEN
            || words_char_len(&words[index + 1..]) <= RUNT_HALF_LEN
        {
            // A runt half defeats the purpose; redo by character count
            return char_count_cut(words, config);
        }
        return Some(index);
    }

    if let Some(index) = pause_cut(words, config, midpoint) {
        return Some(index);
    }

    char_count_cut(words, config)
}

/// Best pause cut: longest gap, penalized by distance from the midpoint.
fn pause_cut(words: &[Word], config: &SegmenterConfig, midpoint: f64) -> Option<usize> {
    let pauses: Vec<(usize, f64)> = (0..words.len() - 1)
        .filter_map(|i| {
            let gap = gap_between(&words[i], &words[i + 1]);
            (gap > MIN_PAUSE_GAP).then_some((i, gap))
        })
        .collect();
    if pauses.is_empty() {
        return None;
    }

    // Prefer cuts that keep both halves at least min_duration long, but use
    // every pause when that filter empties the field
    let last_end = words.last().map_or(0.0, |w| w.end);
    let first_start = words.first().map_or(0.0, |w| w.start);
    let long_enough: Vec<(usize, f64)> = pauses
        .iter()
        .copied()
        .filter(|&(i, _)| {
            words[i].end - first_start >= config.min_duration
                && last_end - words[i + 1].start >= config.min_duration
        })
        .collect();
    let candidates = if long_enough.is_empty() { &pauses } else { &long_enough };

    let len = words.len() as f64;
    candidates
        .iter()
        .copied()
        .map(|(i, gap)| (i, gap - (i as f64 - midpoint).abs() / len))
        .max_by(|a, b| {
            // Higher score wins; equal scores resolve to the lower index
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.0.cmp(&a.0))
        })
        .map(|(i, _)| i)
}

/// Split at the word boundary whose prefix length is closest to an even
/// share of the text, skipping hyphenated compounds.
fn char_count_cut(words: &[Word], config: &SegmenterConfig) -> Option<usize> {
    let total: usize = words.iter().map(|w| w.text.chars().count()).sum();
    if total == 0 {
        return None;
    }
    let pieces = total.div_ceil(config.max_cpl.max(1)).max(2);
    let target = total / pieces;

    let mut best: Option<(usize, usize)> = None;
    let mut prefix = 0;
    for i in 0..words.len() - 1 {
        prefix += words[i].text.chars().count();
        if splits_hyphenated_compound(&words[i], &words[i + 1]) {
            continue;
        }
        let distance = prefix.abs_diff(target);
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }
    best.map(|(i, _)| i)
}

/// Index from `candidates` nearest to the midpoint, lowest index on ties.
fn nearest_to(candidates: &[usize], midpoint: f64) -> usize {
    let mut best = candidates[0];
    let mut best_distance = (best as f64 - midpoint).abs();
    for &candidate in &candidates[1..] {
        let distance = (candidate as f64 - midpoint).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}
