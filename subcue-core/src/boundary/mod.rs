//! Candidate cut-point detection
//!
//! The collector scans a word sequence once and proposes scored cut points
//! between adjacent words. Four rules apply in fixed precedence order, first
//! match wins, at most one boundary per index. The precedence order is part
//! of the contract and is not derivable from the scores alone; keep it as
//! written.

mod selector;

pub use selector::find_best_boundary;

use smallvec::SmallVec;

use crate::language::LanguageProfile;
use crate::types::Word;

/// Minimum silence between two words for the pause-sensitive rules, seconds.
pub const MIN_PAUSE_GAP: f64 = 0.3;

/// Gap length at which a pause scores 1.0, seconds.
pub const PAUSE_SCORE_NORMALIZER: f64 = 2.0;

/// A candidate cut point after `words[index]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    /// Cut after this word index
    pub index: usize,
    /// The rule that proposed the cut, with its payload
    pub kind: BoundaryKind,
    /// Rule confidence in `[0, 1]`
    pub score: f64,
}

/// The rule that produced a boundary, carrying what it matched on.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryKind {
    /// The left word ends in weak punctuation
    WeakPunct {
        /// The punctuation character matched
        ch: char,
    },
    /// The right word is a conjunction
    Conjunction {
        /// The conjunction, lower-cased
        word: String,
    },
    /// The right word is a sentence starter preceded by a pause
    SentenceStarter {
        /// The starter token
        word: String,
    },
    /// A plain silence between the words
    Pause {
        /// Gap length in seconds
        gap: f64,
    },
}

/// Per-call boundary candidate list; stays on the stack for short segments.
pub type BoundaryList = SmallVec<[Boundary; 16]>;

/// Scans word sequences for candidate cut points.
pub struct BoundaryCollector;

impl BoundaryCollector {
    /// Collect candidate boundaries for a word sequence, ordered by index.
    pub fn collect(words: &[Word], profile: &LanguageProfile) -> BoundaryList {
        let mut boundaries = BoundaryList::new();
        if words.len() < 2 {
            return boundaries;
        }

        for index in 0..words.len() - 1 {
            let left = &words[index];
            let right = &words[index + 1];

            if let Some(ch) = trailing_char(&left.text) {
                if profile.is_weak_punct(ch) && !splits_hyphenated_compound(left, right) {
                    boundaries.push(Boundary {
                        index,
                        kind: BoundaryKind::WeakPunct { ch },
                        score: 0.9,
                    });
                    continue;
                }
            }

            let right_token = right.text.trim();
            if profile.is_conjunction(right_token) {
                boundaries.push(Boundary {
                    index,
                    kind: BoundaryKind::Conjunction {
                        word: right_token.to_lowercase(),
                    },
                    score: 0.7,
                });
                continue;
            }

            let gap = gap_between(left, right);
            if gap > MIN_PAUSE_GAP {
                if profile.is_sentence_starter(right_token) {
                    boundaries.push(Boundary {
                        index,
                        kind: BoundaryKind::SentenceStarter {
                            word: right_token.to_string(),
                        },
                        score: 0.5,
                    });
                } else {
                    boundaries.push(Boundary {
                        index,
                        kind: BoundaryKind::Pause { gap },
                        score: (gap / PAUSE_SCORE_NORMALIZER).min(1.0),
                    });
                }
            }
        }

        boundaries
    }
}

/// Silence between two adjacent words, clamped to zero for overlaps.
pub(crate) fn gap_between(left: &Word, right: &Word) -> f64 {
    (right.start - left.end).max(0.0)
}

/// Last character of a word's trimmed text.
pub(crate) fn trailing_char(text: &str) -> Option<char> {
    text.trim_end().chars().next_back()
}

/// Whether cutting between two words would split a token hyphenated across
/// them ("well-" + "known"). A dash followed by a fresh spaced token is a
/// genuine break, not a compound.
pub(crate) fn splits_hyphenated_compound(left: &Word, right: &Word) -> bool {
    let left_glued = !left.text.ends_with(char::is_whitespace);
    let right_glued = !right.text.starts_with(char::is_whitespace);
    (left.text.trim_end().ends_with('-') && right_glued)
        || (right.text.trim_start().starts_with('-') && left_glued)
}
