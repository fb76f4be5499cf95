//! Subtitle cue segmentation and speaker alignment
//!
//! This crate turns a stream of word-level timestamped transcription output
//! into well-formed subtitle cues. Two independent paths share the same
//! word type:
//!
//! - **Segmentation**: strong-punctuation splitting, an optional external
//!   semantic sentence detector, and a readability-enforcement layer that
//!   splits anything over the line-width, duration, or reading-speed
//!   limits, followed by a merge pass for dangling fragments.
//! - **Alignment**: matching the same words against diarization speaker
//!   spans, producing one speaker-labeled cue per span with match-quality
//!   statistics.
//!
//! Every operation is a pure, synchronous function over in-memory values;
//! the outer pipeline may run independent transcript chunks concurrently.
//!
//! # Example
//!
//! ```rust
//! use subcue_core::{Segmenter, SegmenterConfig, Word};
//!
//! let segmenter = Segmenter::new(SegmenterConfig::default());
//! let words = vec![
//!     Word::new("Hello", 0.0, 0.5),
//!     Word::new(" world.", 0.5, 1.0),
//!     Word::new(" How", 1.5, 2.0),
//!     Word::new(" are", 2.0, 2.3),
//!     Word::new(" you?", 2.3, 2.8),
//! ];
//! let segments = segmenter.segment(&words);
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[0].text(), "Hello world.");
//! ```

#![warn(missing_docs)]

pub mod align;
pub mod boundary;
pub mod error;
pub mod language;
pub mod segment;
pub mod types;

pub use align::{overlap_ratio, SpeakerAligner, DEFAULT_OVERLAP_THRESHOLD};
pub use boundary::{
    find_best_boundary, Boundary, BoundaryCollector, BoundaryKind, BoundaryList, MIN_PAUSE_GAP,
};
pub use error::{AlignError, Result};
pub use language::{display_width, ends_with_strong_terminal, LanguageProfile, STRONG_TERMINALS};
pub use segment::{
    merge_incomplete_segments, Segmenter, SegmenterConfig, SentenceSplit, SEMANTIC_LANGUAGES,
};
pub use types::{MatchQuality, Segment, SpeakerSegment, SpeakerSpan, Word};
