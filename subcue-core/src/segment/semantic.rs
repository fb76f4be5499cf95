//! Layer 2: semantic sentence splitting
//!
//! An externally supplied sentence-boundary detector may replace the Layer-1
//! segmentation for languages it supports. The detector works on plain text;
//! its sentences are re-projected onto word boundaries by character offset.
//! Any disagreement between detector output and the input text is resolved
//! by silently keeping the Layer-1 result.

use tracing::debug;

use crate::types::Word;

/// External sentence-boundary detector.
///
/// Implementations split text into sentences whose concatenation reproduces
/// the input exactly; the engine validates this and falls back to its own
/// segmentation when it does not hold.
pub trait SentenceSplit: Send + Sync {
    /// Split `text` into sentences for `language`.
    fn split(&self, text: &str, language: &str) -> Vec<String>;
}

/// Languages the semantic layer is allowed to run for.
pub const SEMANTIC_LANGUAGES: [&str; 22] = [
    "am", "ar", "bg", "da", "de", "el", "en", "es", "fa", "fr", "hi", "hy", "it", "ja", "kk",
    "mr", "my", "nl", "pl", "ru", "ur", "zh",
];

/// Whether the semantic layer may run for a language code.
pub fn is_semantic_language(code: &str) -> bool {
    let primary = code
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    SEMANTIC_LANGUAGES.contains(&primary.as_str())
}

/// Run the detector and project its sentences onto word boundaries.
///
/// Returns `None` (keep Layer 1) when the detector's output fails
/// validation: total length differs from the input, or the detector
/// collapsed to a single sentence where Layer 1 found several.
pub(crate) fn semantic_split(
    words: &[Word],
    layer1_count: usize,
    detector: &dyn SentenceSplit,
    language: &str,
) -> Option<Vec<Vec<Word>>> {
    if words.is_empty() {
        return None;
    }

    let mut text = String::new();
    for word in words {
        text.push_str(&word.text);
    }

    let sentences = detector.split(&text, language);
    if sentences.is_empty() {
        return None;
    }

    let input_chars = text.chars().count();
    let output_chars: usize = sentences.iter().map(|s| s.chars().count()).sum();
    if output_chars != input_chars {
        debug!(
            input_chars,
            output_chars, "sentence detector changed text length, keeping layer 1"
        );
        return None;
    }

    if sentences.len() <= 1 && layer1_count > 1 {
        debug!("sentence detector collapsed to one sentence, keeping layer 1");
        return None;
    }

    project_onto_words(words, &sentences)
}

/// Map sentence character spans back to word boundaries.
///
/// A word belongs to the sentence its *start* offset falls in; a sentence
/// that contains no word start force-claims the first word at or after its
/// span start so that no sentence comes out empty.
fn project_onto_words(words: &[Word], sentences: &[String]) -> Option<Vec<Vec<Word>>> {
    let mut start_offsets = Vec::with_capacity(words.len());
    let mut offset = 0;
    for word in words {
        start_offsets.push(offset);
        offset += word.text.chars().count();
    }

    let mut cuts = Vec::with_capacity(sentences.len());
    let mut word_index = 0;
    let mut sentence_end = 0;
    for sentence in sentences {
        sentence_end += sentence.chars().count();
        let claimed_from = word_index;
        while word_index < words.len() && start_offsets[word_index] < sentence_end {
            word_index += 1;
        }
        if claimed_from == word_index {
            // Force-claim one word; if none remain the projection failed
            if word_index >= words.len() {
                debug!("sentence span beyond last word, keeping layer 1");
                return None;
            }
            word_index += 1;
        }
        cuts.push(word_index);
    }

    // Trailing words whose text is empty have start offsets equal to the
    // total length; attach them to the final sentence
    if let Some(last) = cuts.last_mut() {
        *last = words.len();
    }

    let mut segments = Vec::with_capacity(cuts.len());
    let mut begin = 0;
    for cut in cuts {
        if cut > begin {
            segments.push(words[begin..cut].to_vec());
            begin = cut;
        }
    }
    debug_assert_eq!(begin, words.len());
    Some(segments)
}
