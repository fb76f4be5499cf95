//! Public API for subcue subtitle segmentation and speaker alignment
//!
//! This crate provides a stable interface over the `subcue-core` engine:
//! a configured [`CueProcessor`] turns timestamped words into subtitle
//! cues, and aligns words against diarization spans into speaker-labeled
//! cues. Internal engine types stay behind flat, serializable DTOs.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::time::Instant;

use subcue_core::{Segmenter, SpeakerAligner};

pub use config::{Config, ConfigBuilder};
pub use dto::{AlignedOutput, Cue, Metadata, Output, SpeakerCue};
pub use error::{ApiError, Result};

// Re-export the value types and the detector seam so callers do not need
// to depend on the core crate directly
pub use subcue_core::{MatchQuality, SentenceSplit, SpeakerSpan, Word};

/// Main entry point for cue processing.
///
/// Holds a configured segmenter and aligner; both paths are pure and the
/// processor can be shared freely across threads by the outer pipeline.
pub struct CueProcessor {
    segmenter: Segmenter,
    aligner: SpeakerAligner,
    config: Config,
}

impl CueProcessor {
    /// Create a processor with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a processor for a specific language.
    pub fn with_language(language: &str) -> Result<Self> {
        Self::with_config(Config::builder().language(language).build()?)
    }

    /// Create a processor with custom configuration.
    pub fn with_config(config: Config) -> Result<Self> {
        let mut segmenter = Segmenter::new(config.to_segmenter_config());
        if let Some(detector) = &config.detector {
            segmenter = segmenter.with_detector(detector.clone());
        }
        let aligner = SpeakerAligner::new(config.overlap_threshold);
        Ok(Self {
            segmenter,
            aligner,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Segment words into subtitle cues.
    pub fn segment(&self, words: &[Word]) -> Result<Output> {
        let started = Instant::now();
        let segments = self.segmenter.segment(words);
        let cues: Vec<Cue> = segments.into_iter().map(Cue::from).collect();
        let metadata = Metadata {
            word_count: words.len(),
            cue_count: cues.len(),
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        Ok(Output { cues, metadata })
    }

    /// Align words against speaker spans into speaker-labeled cues.
    pub fn align(&self, words: &[Word], spans: &[SpeakerSpan]) -> Result<AlignedOutput> {
        let started = Instant::now();
        let segments = self.aligner.align(words, spans)?;
        let cues: Vec<SpeakerCue> = segments.into_iter().map(SpeakerCue::from).collect();
        let metadata = Metadata {
            word_count: words.len(),
            cue_count: cues.len(),
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };
        Ok(AlignedOutput { cues, metadata })
    }
}

// Convenience functions

/// Segment words with the default configuration.
pub fn segment_words(words: &[Word]) -> Result<Output> {
    CueProcessor::new()?.segment(words)
}

/// Segment words with a specific language.
pub fn segment_words_with_language(words: &[Word], language: &str) -> Result<Output> {
    CueProcessor::with_language(language)?.segment(words)
}

/// Align words against speaker spans with the default configuration.
pub fn align_words(words: &[Word], spans: &[SpeakerSpan]) -> Result<AlignedOutput> {
    CueProcessor::new()?.align(words, spans)
}
