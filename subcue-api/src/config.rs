//! High-level configuration API

use std::sync::Arc;

use subcue_core::{SegmenterConfig, SentenceSplit};

use crate::error::{ApiError, Result};

/// High-level configuration for cue processing.
///
/// Carries the readability tunables with subtitle-standard defaults and an
/// optional external sentence detector for the semantic layer. Unknown
/// language codes are not an error; they resolve to the English profile.
#[derive(Clone)]
pub struct Config {
    /// Language code for profile and semantic-layer resolution
    pub language: String,
    /// Maximum characters per line, in display columns
    pub max_cpl: usize,
    /// Maximum characters per second
    pub max_cps: f64,
    /// Minimum cue duration in seconds
    pub min_duration: f64,
    /// Maximum cue duration in seconds
    pub max_duration: f64,
    /// Minimum fraction of a word inside a span for the aligner to claim it
    pub overlap_threshold: f64,
    /// Minimum stripped length of a standalone cue in the merge pass
    pub merge_min_length: usize,
    /// Prefer meaningful boundaries over mechanical cuts when splitting
    pub semantic_protection: bool,
    /// External sentence-boundary detector, if any
    pub detector: Option<Arc<dyn SentenceSplit>>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("language", &self.language)
            .field("max_cpl", &self.max_cpl)
            .field("max_cps", &self.max_cps)
            .field("min_duration", &self.min_duration)
            .field("max_duration", &self.max_duration)
            .field("overlap_threshold", &self.overlap_threshold)
            .field("merge_min_length", &self.merge_min_length)
            .field("semantic_protection", &self.semantic_protection)
            .field("detector", &self.detector.as_ref().map(|_| "<dyn SentenceSplit>"))
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        let core = SegmenterConfig::default();
        Self {
            language: core.language,
            max_cpl: core.max_cpl,
            max_cps: core.max_cps,
            min_duration: core.min_duration,
            max_duration: core.max_duration,
            overlap_threshold: subcue_core::DEFAULT_OVERLAP_THRESHOLD,
            merge_min_length: core.merge_min_length,
            semantic_protection: core.use_semantic_protection,
            detector: None,
        }
    }
}

impl Config {
    /// Create a builder.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The core segmenter configuration this maps to.
    pub(crate) fn to_segmenter_config(&self) -> SegmenterConfig {
        SegmenterConfig {
            language: self.language.clone(),
            max_cpl: self.max_cpl,
            max_cps: self.max_cps,
            min_duration: self.min_duration,
            max_duration: self.max_duration,
            use_semantic_protection: self.semantic_protection,
            merge_min_length: self.merge_min_length,
        }
    }
}

/// Configuration builder.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language code.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the maximum characters per line.
    pub fn max_cpl(mut self, max_cpl: usize) -> Self {
        self.config.max_cpl = max_cpl;
        self
    }

    /// Set the maximum characters per second.
    pub fn max_cps(mut self, max_cps: f64) -> Self {
        self.config.max_cps = max_cps;
        self
    }

    /// Set the minimum cue duration in seconds.
    pub fn min_duration(mut self, seconds: f64) -> Self {
        self.config.min_duration = seconds;
        self
    }

    /// Set the maximum cue duration in seconds.
    pub fn max_duration(mut self, seconds: f64) -> Self {
        self.config.max_duration = seconds;
        self
    }

    /// Set the aligner's overlap threshold.
    pub fn overlap_threshold(mut self, threshold: f64) -> Self {
        self.config.overlap_threshold = threshold;
        self
    }

    /// Set the merge pass minimum length.
    pub fn merge_min_length(mut self, min_length: usize) -> Self {
        self.config.merge_min_length = min_length;
        self
    }

    /// Toggle semantic protection in the fallback splitter.
    pub fn semantic_protection(mut self, enabled: bool) -> Self {
        self.config.semantic_protection = enabled;
        self
    }

    /// Attach an external sentence-boundary detector.
    pub fn detector(mut self, detector: Arc<dyn SentenceSplit>) -> Self {
        self.config.detector = Some(detector);
        self
    }

    /// Validate and build the configuration.
    pub fn build(self) -> Result<Config> {
        let config = self.config;
        if config.max_cpl == 0 {
            return Err(ApiError::Config("max_cpl must be at least 1".to_string()));
        }
        if config.max_cps <= 0.0 {
            return Err(ApiError::Config("max_cps must be positive".to_string()));
        }
        if config.max_duration <= 0.0 {
            return Err(ApiError::Config("max_duration must be positive".to_string()));
        }
        if config.min_duration < 0.0 {
            return Err(ApiError::Config(
                "min_duration must not be negative".to_string(),
            ));
        }
        if config.min_duration > config.max_duration {
            return Err(ApiError::Config(
                "min_duration must not exceed max_duration".to_string(),
            ));
        }
        if !(config.overlap_threshold > 0.0 && config.overlap_threshold <= 1.0) {
            return Err(ApiError::Config(
                "overlap_threshold must be in (0, 1]".to_string(),
            ));
        }
        if config.merge_min_length == 0 {
            return Err(ApiError::Config(
                "merge_min_length must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_tunables() {
        let config = Config::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.max_cpl, 42);
        assert_eq!(config.max_cps, 18.0);
        assert_eq!(config.min_duration, 1.0);
        assert_eq!(config.max_duration, 7.0);
        assert_eq!(config.overlap_threshold, 0.5);
        assert_eq!(config.merge_min_length, 3);
        assert!(config.semantic_protection);
        assert!(config.detector.is_none());
    }

    #[test]
    fn builder_rejects_nonsense() {
        assert!(Config::builder().max_cpl(0).build().is_err());
        assert!(Config::builder().max_cps(0.0).build().is_err());
        assert!(Config::builder().overlap_threshold(0.0).build().is_err());
        assert!(Config::builder().overlap_threshold(1.5).build().is_err());
        assert!(Config::builder()
            .min_duration(8.0)
            .max_duration(7.0)
            .build()
            .is_err());
    }

    #[test]
    fn builder_sets_all_fields() {
        let config = Config::builder()
            .language("zh")
            .max_cpl(20)
            .max_cps(12.0)
            .min_duration(0.5)
            .max_duration(6.0)
            .overlap_threshold(0.6)
            .merge_min_length(2)
            .semantic_protection(false)
            .build()
            .unwrap();
        assert_eq!(config.language, "zh");
        assert_eq!(config.max_cpl, 20);
        assert!(!config.semantic_protection);
        assert_eq!(config.to_segmenter_config().max_cps, 12.0);
    }
}
