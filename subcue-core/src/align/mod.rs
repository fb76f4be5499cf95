//! Speaker alignment
//!
//! Matches transcript words against independently computed diarization
//! spans. Both lists are ordered by start time, so a monotonic cursor walks
//! the words once: it only ever advances past words proven to end before
//! the current span starts, which stays safe for later spans because span
//! starts ascend. Words genuinely overlapping several spans are claimed by
//! all of them; exclusivity is not this engine's concern.

use tracing::debug;

use crate::error::{AlignError, Result};
use crate::types::{MatchQuality, SpeakerSegment, SpeakerSpan, Word};

/// Default minimum fraction of a word's duration inside a span to claim it.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Fraction of the word interval covered by the span interval.
///
/// Zero for words without positive duration and for disjoint intervals.
pub fn overlap_ratio(word_start: f64, word_end: f64, span_start: f64, span_end: f64) -> f64 {
    let word_duration = word_end - word_start;
    if word_duration <= 0.0 {
        return 0.0;
    }
    let intersection = (word_end.min(span_end) - word_start.max(span_start)).max(0.0);
    intersection / word_duration
}

/// Word-to-span matcher.
#[derive(Debug, Clone)]
pub struct SpeakerAligner {
    overlap_threshold: f64,
}

impl Default for SpeakerAligner {
    fn default() -> Self {
        Self::new(DEFAULT_OVERLAP_THRESHOLD)
    }
}

impl SpeakerAligner {
    /// Create an aligner with a claim threshold in `(0, 1]`.
    pub fn new(overlap_threshold: f64) -> Self {
        Self { overlap_threshold }
    }

    /// The active claim threshold.
    pub fn overlap_threshold(&self) -> f64 {
        self.overlap_threshold
    }

    /// Produce one speaker-labeled segment per span, in span order.
    ///
    /// `words` must be ordered by start time, `spans` by span start. Spans
    /// that match no words still yield a segment with empty text. Fails
    /// only on empty inputs or a transcript with no timestamps at all.
    pub fn align(&self, words: &[Word], spans: &[SpeakerSpan]) -> Result<Vec<SpeakerSegment>> {
        if words.is_empty() {
            return Err(AlignError::EmptyTranscript);
        }
        if spans.is_empty() {
            return Err(AlignError::EmptySpans);
        }
        if words.iter().all(Word::is_untimed) {
            return Err(AlignError::MissingTimestamps);
        }

        let mut segments = Vec::with_capacity(spans.len());
        let mut cursor = 0;
        for span in spans {
            while cursor < words.len() && words[cursor].end < span.start {
                cursor += 1;
            }

            let mut matched = Vec::new();
            let mut index = cursor;
            while index < words.len() && words[index].start < span.end {
                let word = &words[index];
                if overlap_ratio(word.start, word.end, span.start, span.end)
                    >= self.overlap_threshold
                {
                    matched.push(word.clone());
                }
                index += 1;
            }

            if matched.is_empty() {
                debug!(
                    speaker = %span.speaker,
                    start = span.start,
                    end = span.end,
                    "span matched no words"
                );
            }
            segments.push(build_segment(span, matched));
        }

        Ok(segments)
    }
}

fn build_segment(span: &SpeakerSpan, matched: Vec<Word>) -> SpeakerSegment {
    let mut text = String::new();
    for word in &matched {
        text.push_str(&word.text);
    }

    SpeakerSegment {
        speaker: span.speaker.clone(),
        start: span.start,
        end: span.end,
        duration: span.duration(),
        text: text.trim().to_string(),
        word_count: matched.len(),
        speaker_confidence: span.confidence,
        match_quality: compute_match_quality(span, &matched),
        words: matched,
    }
}

/// Coverage statistics for a span's matched words.
///
/// Matched-word intervals are clamped to the span and merged before
/// measuring coverage, so overlapping words are not double-counted.
fn compute_match_quality(span: &SpeakerSpan, matched: &[Word]) -> MatchQuality {
    let mut covered = 0.0;
    let mut current: Option<(f64, f64)> = None;
    for word in matched {
        let start = word.start.max(span.start);
        let end = word.end.min(span.end);
        if end <= start {
            continue;
        }
        match current {
            Some((cur_start, cur_end)) if start <= cur_end => {
                current = Some((cur_start, cur_end.max(end)));
            }
            Some((cur_start, cur_end)) => {
                covered += cur_end - cur_start;
                current = Some((start, end));
            }
            None => current = Some((start, end)),
        }
    }
    if let Some((cur_start, cur_end)) = current {
        covered += cur_end - cur_start;
    }

    let span_duration = span.duration();
    let coverage_ratio = if span_duration > 0.0 {
        (covered / span_duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let full_matches = matched
        .iter()
        .filter(|w| w.start >= span.start && w.end <= span.end)
        .count();

    MatchQuality {
        matched_word_count: matched.len(),
        coverage_ratio,
        full_matches,
        partial_overlaps: matched.len() - full_matches,
    }
}
