//! Per-language rule tables and character width
//!
//! A [`LanguageProfile`] is an immutable static table of the punctuation and
//! word lists the boundary rules consult. Exactly seven profiles are built
//! in (en, zh, ja, ko, de, fr, es); lookup is case-insensitive, tolerates a
//! region subtag (`zh-CN` resolves to `zh`), and falls back to English for
//! anything unknown. The fallback is an explicit match arm, not a default
//! map entry.

mod profiles;
mod width;

pub use width::{char_display_width, display_width, is_cjk_char};

/// Strong sentence-final punctuation, shared by every profile.
pub const STRONG_TERMINALS: [char; 7] = ['.', '!', '?', '。', '！', '？', '…'];

/// Whether a character terminates a sentence in any supported language.
pub fn is_strong_terminal(ch: char) -> bool {
    STRONG_TERMINALS.contains(&ch)
}

/// Whether the trimmed text ends in strong sentence-final punctuation.
pub fn ends_with_strong_terminal(text: &str) -> bool {
    text.trim_end()
        .chars()
        .next_back()
        .is_some_and(is_strong_terminal)
}

/// Immutable per-language rule table.
///
/// All fields reference static data; profiles are looked up, never built.
#[derive(Debug)]
pub struct LanguageProfile {
    /// ISO 639-1 code of the profile
    pub code: &'static str,
    /// Soft break punctuation (commas and friends), distinct from
    /// [`STRONG_TERMINALS`]
    pub weak_punct: &'static [char],
    /// Words that prefer to open a new line (matched lower-cased)
    pub conjunctions: &'static [&'static str],
    /// Words that commonly open a sentence (matched case-sensitively)
    pub sentence_starters: &'static [&'static str],
    /// Whether the language is written in CJK script
    pub is_cjk: bool,
    /// Nominal column width of one character in this script
    pub width_factor: u8,
}

impl LanguageProfile {
    /// Resolve a language code to its profile.
    ///
    /// Case-insensitive; a region subtag after `-` or `_` is ignored.
    /// Unknown or empty codes resolve to English.
    pub fn get(code: &str) -> &'static LanguageProfile {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => &profiles::ZH,
            "ja" => &profiles::JA,
            "ko" => &profiles::KO,
            "de" => &profiles::DE,
            "fr" => &profiles::FR,
            "es" => &profiles::ES,
            // "en" and everything unrecognized
            _ => &profiles::EN,
        }
    }

    /// Whether a character is weak punctuation in this language.
    pub fn is_weak_punct(&self, ch: char) -> bool {
        self.weak_punct.contains(&ch)
    }

    /// Whether a token is a conjunction; the comparison lower-cases the input.
    pub fn is_conjunction(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.conjunctions.contains(&lowered.as_str())
    }

    /// Whether a token is a sentence starter; case-sensitive.
    pub fn is_sentence_starter(&self, token: &str) -> bool {
        self.sentence_starters.contains(&token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(LanguageProfile::get("ZH").code, "zh");
        assert_eq!(LanguageProfile::get("Ja").code, "ja");
    }

    #[test]
    fn lookup_strips_region_subtag() {
        assert_eq!(LanguageProfile::get("zh-CN").code, "zh");
        assert_eq!(LanguageProfile::get("ko_KR").code, "ko");
    }

    #[test]
    fn unknown_and_empty_fall_back_to_english() {
        assert_eq!(LanguageProfile::get("xx").code, "en");
        assert_eq!(LanguageProfile::get("").code, "en");
        assert_eq!(LanguageProfile::get("en-US").code, "en");
    }

    #[test]
    fn cjk_profiles_declare_double_width() {
        for code in ["zh", "ja", "ko"] {
            let profile = LanguageProfile::get(code);
            assert!(profile.is_cjk);
            assert_eq!(profile.width_factor, 2);
        }
        assert!(!LanguageProfile::get("en").is_cjk);
        assert_eq!(LanguageProfile::get("fr").width_factor, 1);
    }

    #[test]
    fn strong_terminals_are_not_weak_punct() {
        for code in ["en", "zh", "ja", "ko", "de", "fr", "es"] {
            let profile = LanguageProfile::get(code);
            for ch in STRONG_TERMINALS {
                assert!(!profile.is_weak_punct(ch), "{code} treats {ch} as weak");
            }
        }
    }

    #[test]
    fn terminal_detection_trims_trailing_whitespace() {
        assert!(ends_with_strong_terminal("Hello. "));
        assert!(ends_with_strong_terminal("你好。"));
        assert!(!ends_with_strong_terminal("Hello,"));
        assert!(!ends_with_strong_terminal("   "));
    }

    #[test]
    fn conjunction_match_is_case_insensitive() {
        let en = LanguageProfile::get("en");
        assert!(en.is_conjunction("And"));
        assert!(en.is_conjunction("because"));
        assert!(!en.is_conjunction("banana"));
    }

    #[test]
    fn starter_match_is_case_sensitive() {
        let en = LanguageProfile::get("en");
        assert!(en.is_sentence_starter("However"));
        assert!(!en.is_sentence_starter("however"));
    }
}
