//! Core value types shared across the engine
//!
//! Everything here is a plain value: no behavior beyond derived accessors,
//! no shared ownership. The transcription and diarization collaborators
//! produce `Word` and `SpeakerSpan` lists; the engine produces `Segment`
//! and `SpeakerSegment` lists.

use serde::{Deserialize, Serialize};

use crate::language::display_width;

/// A single timestamped ASR output token.
///
/// `text` is kept exactly as the transcription engine produced it, leading
/// whitespace included; segment text is assembled by raw concatenation so
/// the original spacing survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Token text, whitespace preserved
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds (invariant: `start <= end`)
    pub end: f64,
    /// Recognition probability, if the transcription engine reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f32>,
    /// Informational per-word speaker tag; never read by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Word {
    /// Create a word with text and timestamps only.
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            probability: None,
            speaker: None,
        }
    }

    /// Word duration in seconds, clamped to zero for malformed input.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Whether the transcription engine emitted no timestamp for this word.
    pub fn is_untimed(&self) -> bool {
        self.start == 0.0 && self.end == 0.0
    }
}

/// A contiguous run of words forming one subtitle cue.
///
/// The word list is never empty, never reordered, and owns its words;
/// text and timing are derived, not stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// The words of this cue, in original transcript order
    pub words: Vec<Word>,
}

impl Segment {
    /// Wrap a non-empty word run.
    pub fn new(words: Vec<Word>) -> Self {
        debug_assert!(!words.is_empty(), "segment must contain at least one word");
        Self { words }
    }

    /// Cue text: raw concatenation of word texts, trimmed at the edges.
    pub fn text(&self) -> String {
        words_text(&self.words)
    }

    /// Start time of the first word.
    pub fn start(&self) -> f64 {
        self.words.first().map_or(0.0, |w| w.start)
    }

    /// End time of the last word.
    pub fn end(&self) -> f64 {
        self.words.last().map_or(0.0, |w| w.end)
    }

    /// Cue duration in seconds.
    pub fn duration(&self) -> f64 {
        (self.end() - self.start()).max(0.0)
    }

    /// Character count of the trimmed cue text.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }

    /// CJK-aware display width of the trimmed cue text.
    pub fn display_width(&self) -> usize {
        display_width(&self.text())
    }

    /// Number of words in the cue.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// A diarization time-span labeled with a speaker identity.
///
/// Supplied read-only by the diarization collaborator, ordered by `start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSpan {
    /// Span start in seconds
    pub start: f64,
    /// Span end in seconds
    pub end: f64,
    /// Speaker identity assigned by the diarization engine
    pub speaker: String,
    /// Diarization confidence for this span
    pub confidence: f32,
}

impl SpeakerSpan {
    /// Create a span.
    pub fn new(start: f64, end: f64, speaker: impl Into<String>, confidence: f32) -> Self {
        Self {
            start,
            end,
            speaker: speaker.into(),
            confidence,
        }
    }

    /// Span duration in seconds, clamped to zero.
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

/// How well a speaker span's matched words cover the span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchQuality {
    /// Number of words claimed by the span
    pub matched_word_count: usize,
    /// Fraction of the span duration covered by matched words, in `[0, 1]`
    pub coverage_ratio: f64,
    /// Matched words lying entirely inside the span
    pub full_matches: usize,
    /// Matched words that only partially overlap the span
    pub partial_overlaps: usize,
}

/// A speaker-labeled cue produced by the alignment path.
///
/// Timing comes from the span, not from the matched words, so a span that
/// matched nothing still carries its own interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeakerSegment {
    /// Speaker identity from the span
    pub speaker: String,
    /// Span start in seconds
    pub start: f64,
    /// Span end in seconds
    pub end: f64,
    /// Span duration in seconds
    pub duration: f64,
    /// Concatenated matched-word text, trimmed; empty when nothing matched
    pub text: String,
    /// Number of matched words
    pub word_count: usize,
    /// The matched words, in transcript order
    pub words: Vec<Word>,
    /// Diarization confidence carried over from the span
    pub speaker_confidence: f32,
    /// Span coverage statistics
    pub match_quality: MatchQuality,
}

/// Raw concatenation of word texts, trimmed at the edges.
pub fn words_text(words: &[Word]) -> String {
    let mut text = String::with_capacity(words.iter().map(|w| w.text.len()).sum());
    for word in words {
        text.push_str(&word.text);
    }
    text.trim().to_string()
}

/// Character count of the trimmed concatenation of a word run.
pub fn words_char_len(words: &[Word]) -> usize {
    let mut total = 0;
    for word in words {
        total += word.text.chars().count();
    }
    // Subtract edge whitespace without building the joined string
    let leading = words
        .iter()
        .flat_map(|w| w.text.chars())
        .take_while(|c| c.is_whitespace())
        .count();
    if leading == total {
        return 0;
    }
    let trailing = words
        .iter()
        .rev()
        .flat_map(|w| w.text.chars().rev())
        .take_while(|c| c.is_whitespace())
        .count();
    total - leading - trailing
}
