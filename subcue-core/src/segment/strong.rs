//! Layer 1: strong-punctuation splitting
//!
//! Cuts after every word whose trimmed text ends in strong sentence-final
//! punctuation, except where the period belongs to an abbreviation or a
//! run of single-letter initials. Word-conserving: the output is a
//! contiguous partition of the input.

use crate::boundary::trailing_char;
use crate::language::is_strong_terminal;
use crate::types::Word;

/// Periods in these tokens never terminate a sentence. Compared against the
/// trimmed, lower-cased token.
const ABBREVIATIONS: &[&str] = &[
    "mr.", "mrs.", "ms.", "dr.", "prof.", "sr.", "jr.", "st.", "rev.", "gen.", "rep.", "sen.",
    "gov.", "capt.", "sgt.", "col.", "vs.", "etc.", "e.g.", "i.e.", "cf.", "a.m.", "p.m.",
    "u.s.", "u.k.", "u.n.", "u.s.a.", "inc.", "ltd.", "co.", "corp.", "dept.", "est.", "no.",
    "vol.", "approx.", "min.", "max.",
];

/// Split a word sequence after strong terminals.
pub(crate) fn split_on_strong_terminals(words: &[Word]) -> Vec<Vec<Word>> {
    let mut segments = Vec::new();
    let mut current: Vec<Word> = Vec::new();

    for (index, word) in words.iter().enumerate() {
        current.push(word.clone());
        let terminal = trailing_char(&word.text).is_some_and(is_strong_terminal);
        if terminal && !is_protected(words, index) {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Whether the terminal period of `words[index]` is protected from cutting.
///
/// Only periods can be abbreviation dots; the CJK terminals and `!`/`?`
/// always cut.
fn is_protected(words: &[Word], index: usize) -> bool {
    let token = words[index].text.trim();
    if !token.ends_with('.') {
        return false;
    }

    if ABBREVIATIONS.contains(&token.to_lowercase().as_str()) {
        return true;
    }

    // Multi-initial token such as "U.S.A." taken as one word
    if initial_letter_count(token) >= 2 {
        return true;
    }

    // A lone initial ("U.") protects only next to another one
    if is_single_initial(token) {
        let prev = index
            .checked_sub(1)
            .map(|i| is_single_initial(words[i].text.trim()));
        let next = words.get(index + 1).map(|w| is_single_initial(w.text.trim()));
        return prev == Some(true) || next == Some(true);
    }

    false
}

/// Whether a token is exactly one letter followed by a period.
fn is_single_initial(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(letter), Some('.'), None) if letter.is_alphabetic()
    )
}

/// Number of single-letter dot-separated parts when the whole token is made
/// of them ("U.S.A." gives 3), zero otherwise.
fn initial_letter_count(token: &str) -> usize {
    if !token.ends_with('.') {
        return 0;
    }
    let mut count = 0;
    for part in token[..token.len() - 1].split('.') {
        let mut chars = part.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if letter.is_alphabetic() => count += 1,
            _ => return 0,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(text: &str, start: f64, end: f64) -> Word {
        Word::new(text, start, end)
    }

    fn texts(segments: &[Vec<Word>]) -> Vec<String> {
        segments.iter().map(|s| crate::types::words_text(s)).collect()
    }

    #[test]
    fn splits_after_sentence_final_punctuation() {
        let words = vec![
            w("Hello", 0.0, 0.5),
            w(" world.", 0.5, 1.0),
            w(" How", 1.5, 2.0),
            w(" are", 2.0, 2.3),
            w(" you?", 2.3, 2.8),
        ];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(texts(&segments), ["Hello world.", "How are you?"]);
    }

    #[test]
    fn abbreviations_do_not_terminate() {
        let words = vec![
            w("Dr.", 0.0, 0.3),
            w(" Smith", 0.3, 0.8),
            w(" is", 0.8, 1.0),
            w(" here", 1.0, 1.4),
            w(".", 1.4, 1.5),
        ];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn adjacent_initials_do_not_terminate() {
        let words = vec![
            w("The", 0.0, 0.3),
            w(" U.", 0.3, 0.5),
            w(" S.", 0.5, 0.7),
            w(" economy", 0.7, 1.2),
            w(" grew.", 1.2, 1.8),
        ];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn lone_single_initial_still_terminates() {
        // "plan B." closes the sentence; there is no adjacent initial
        let words = vec![
            w("Use", 0.0, 0.3),
            w(" plan", 0.3, 0.6),
            w(" B.", 0.6, 0.9),
            w(" Go", 1.4, 1.7),
            w(" now.", 1.7, 2.0),
        ];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn multi_initial_token_does_not_terminate() {
        let words = vec![
            w("The", 0.0, 0.3),
            w(" U.S.A.", 0.3, 0.9),
            w(" won", 0.9, 1.3),
            w(" gold.", 1.3, 1.8),
        ];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(segments.len(), 1);
    }

    #[test]
    fn cjk_terminals_cut() {
        let words = vec![w("你好。", 0.0, 0.5), w("再见。", 0.5, 1.0)];
        let segments = split_on_strong_terminals(&words);
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn conserves_every_word_in_order() {
        let words = vec![
            w("One.", 0.0, 0.5),
            w(" Two.", 0.5, 1.0),
            w(" Three", 1.0, 1.5),
        ];
        let segments = split_on_strong_terminals(&words);
        let flat: Vec<Word> = segments.into_iter().flatten().collect();
        assert_eq!(flat, words);
    }
}
