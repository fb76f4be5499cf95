//! The three-layer segmentation engine
//!
//! Layer 1 cuts at strong punctuation, Layer 2 optionally replaces that
//! with an external semantic detector's sentences, and Layer 3 splits
//! whatever still violates the readability limits. A final merge pass
//! folds fragments into their neighbors. Across all layers every input
//! word appears exactly once, in original order.

mod fallback;
mod merge;
mod semantic;
mod strong;

pub use merge::{merge_incomplete_segments, DEFAULT_MERGE_MIN_LENGTH};
pub use semantic::{is_semantic_language, SentenceSplit, SEMANTIC_LANGUAGES};

use std::sync::Arc;

use crate::language::LanguageProfile;
use crate::types::{Segment, Word};

/// Tunables of the segmentation path, with subtitle-standard defaults.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Language code resolved against the built-in profiles
    pub language: String,
    /// Maximum characters per line, in display columns
    pub max_cpl: usize,
    /// Maximum characters per second
    pub max_cps: f64,
    /// Minimum cue duration in seconds, used as a pause-split guard
    pub min_duration: f64,
    /// Maximum cue duration in seconds
    pub max_duration: f64,
    /// Prefer a meaningful boundary over a mechanical cut when splitting
    pub use_semantic_protection: bool,
    /// Minimum stripped length for a standalone cue in the merge pass
    pub merge_min_length: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_cpl: 42,
            max_cps: 18.0,
            min_duration: 1.0,
            max_duration: 7.0,
            use_semantic_protection: true,
            merge_min_length: DEFAULT_MERGE_MIN_LENGTH,
        }
    }
}

/// The segmentation engine.
///
/// Owns its configuration and optional semantic detector; `segment` is a
/// pure function of its input and can be called concurrently from the
/// outer pipeline on independent transcript chunks.
pub struct Segmenter {
    config: SegmenterConfig,
    profile: &'static LanguageProfile,
    detector: Option<Arc<dyn SentenceSplit>>,
}

impl Segmenter {
    /// Create a segmenter from configuration.
    pub fn new(config: SegmenterConfig) -> Self {
        let profile = LanguageProfile::get(&config.language);
        Self {
            config,
            profile,
            detector: None,
        }
    }

    /// Attach an external sentence-boundary detector for Layer 2.
    pub fn with_detector(mut self, detector: Arc<dyn SentenceSplit>) -> Self {
        self.detector = Some(detector);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// The resolved language profile.
    pub fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    /// Segment a word sequence into subtitle cues.
    ///
    /// Infallible: an empty input yields an empty output, and degenerate
    /// inputs (a single giant token) come back unchanged rather than
    /// dropped. The output is a contiguous partition of the input.
    pub fn segment(&self, words: &[Word]) -> Vec<Segment> {
        if words.is_empty() {
            return Vec::new();
        }

        let layer1 = strong::split_on_strong_terminals(words);

        let base = match &self.detector {
            Some(detector) if is_semantic_language(&self.config.language) => {
                match semantic::semantic_split(
                    words,
                    layer1.len(),
                    detector.as_ref(),
                    &self.config.language,
                ) {
                    Some(projected) => projected,
                    None => layer1,
                }
            }
            _ => layer1,
        };

        let limited = fallback::enforce_limits(base, &self.config, self.profile);

        let segments = limited.into_iter().map(Segment::new).collect();
        merge_incomplete_segments(segments, self.config.merge_min_length)
    }
}
