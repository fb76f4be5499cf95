//! Data transfer objects for the public API
//!
//! Flat, serializable snapshots of the engine output, suitable for a
//! rendering or AI-correction collaborator. Serde support is feature-gated
//! like the rest of the crate.

use subcue_core::{MatchQuality, Segment, SpeakerSegment, Word};

/// One subtitle cue.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cue {
    /// Cue text, trimmed
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
    /// Duration in seconds
    pub duration: f64,
    /// Number of words in the cue
    pub word_count: usize,
    /// The underlying words
    pub words: Vec<Word>,
}

impl From<Segment> for Cue {
    fn from(segment: Segment) -> Self {
        Self {
            text: segment.text(),
            start: segment.start(),
            end: segment.end(),
            duration: segment.duration(),
            word_count: segment.word_count(),
            words: segment.words,
        }
    }
}

/// One speaker-labeled cue from the alignment path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeakerCue {
    /// Speaker identity
    pub speaker: String,
    /// Span start in seconds
    pub start: f64,
    /// Span end in seconds
    pub end: f64,
    /// Span duration in seconds
    pub duration: f64,
    /// Matched text, trimmed; empty when the span matched nothing
    pub text: String,
    /// Number of matched words
    pub word_count: usize,
    /// The matched words
    pub words: Vec<Word>,
    /// Diarization confidence for the span
    pub speaker_confidence: f32,
    /// Span coverage statistics
    pub match_quality: MatchQuality,
}

impl From<SpeakerSegment> for SpeakerCue {
    fn from(segment: SpeakerSegment) -> Self {
        Self {
            speaker: segment.speaker,
            start: segment.start,
            end: segment.end,
            duration: segment.duration,
            text: segment.text,
            word_count: segment.word_count,
            words: segment.words,
            speaker_confidence: segment.speaker_confidence,
            match_quality: segment.match_quality,
        }
    }
}

/// Processing metadata attached to every output.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Words received
    pub word_count: usize,
    /// Cues produced
    pub cue_count: usize,
    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Segmentation output: ordered cues plus metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The subtitle cues, in transcript order
    pub cues: Vec<Cue>,
    /// Processing metadata
    pub metadata: Metadata,
}

/// Alignment output: one speaker cue per span plus metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignedOutput {
    /// Speaker-labeled cues, in span order
    pub cues: Vec<SpeakerCue>,
    /// Processing metadata
    pub metadata: Metadata,
}
