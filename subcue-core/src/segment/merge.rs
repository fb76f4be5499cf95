//! Incomplete-segment merging
//!
//! Final pass over the segment list: fragments too short to stand alone, or
//! sentence tails that start lowercase without closing punctuation, are
//! folded into their neighbors. Folding never reorders words and never
//! joins two already-complete segments.

use crate::language::ends_with_strong_terminal;
use crate::types::Segment;

/// Default minimum stripped length for a standalone segment.
pub const DEFAULT_MERGE_MIN_LENGTH: usize = 3;

/// Fold incomplete segments into their neighbors.
///
/// One left-to-right pass folds each incomplete segment into the preceding
/// one; an incomplete leading segment is folded forward into its successor.
/// The pass repeats until nothing merges, so the operation is idempotent:
/// `merge(merge(s)) == merge(s)` for any input.
pub fn merge_incomplete_segments(mut segments: Vec<Segment>, min_length: usize) -> Vec<Segment> {
    loop {
        let before = segments.len();
        segments = merge_pass(segments, min_length);
        if segments.len() == before {
            return segments;
        }
    }
}

fn merge_pass(segments: Vec<Segment>, min_length: usize) -> Vec<Segment> {
    let mut output: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match output.last_mut() {
            // The first segment is provisional: it always opens an
            // accumulator even when incomplete
            Some(previous) if is_incomplete(&segment, min_length) => {
                previous.words.extend(segment.words);
            }
            _ => output.push(segment),
        }
    }

    if output.len() >= 2 && is_incomplete(&output[0], min_length) {
        let first = output.remove(0);
        let mut words = first.words;
        words.append(&mut output[0].words);
        output[0].words = words;
    }

    output
}

/// Whether a segment cannot stand alone as a subtitle cue.
pub(crate) fn is_incomplete(segment: &Segment, min_length: usize) -> bool {
    let text = segment.text();
    if text.chars().count() < min_length {
        return true;
    }

    let terminated = segment
        .words
        .iter()
        .rev()
        .find(|w| !w.text.trim().is_empty())
        .map(|w| ends_with_strong_terminal(&w.text))
        .unwrap_or(false);
    let lowercase_start = text.chars().next().is_some_and(char::is_lowercase);

    !terminated && lowercase_start
}
