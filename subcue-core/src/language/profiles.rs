//! Built-in language profile tables
//!
//! Closed, compile-time set of seven profiles. The tables are deliberately
//! small: weak punctuation marks soft break points, conjunctions mark words
//! that prefer to start a new line, and sentence starters mark words that
//! combined with a pause suggest a fresh sentence.

use super::LanguageProfile;

/// English
pub(super) static EN: LanguageProfile = LanguageProfile {
    code: "en",
    weak_punct: &[',', ';', ':', '-'],
    conjunctions: &[
        "and", "but", "or", "so", "because", "yet", "nor", "while", "although", "though",
        "however", "therefore", "meanwhile",
    ],
    sentence_starters: &[
        "I", "The", "He", "She", "We", "They", "It", "You", "But", "And", "So", "However",
        "Then", "Now", "Well", "What", "Why", "How", "When", "Where", "Who", "There", "This",
        "That",
    ],
    is_cjk: false,
    width_factor: 1,
};

/// Simplified and traditional Chinese
pub(super) static ZH: LanguageProfile = LanguageProfile {
    code: "zh",
    weak_punct: &['，', '、', '；', '：'],
    conjunctions: &[
        "但是", "但", "因为", "所以", "而且", "或者", "然后", "如果", "虽然", "不过", "并且",
        "而", "还有",
    ],
    sentence_starters: &[
        "我", "你", "他", "她", "我们", "你们", "他们", "这", "那", "这个", "那个", "现在",
        "然后", "所以", "但是", "因为",
    ],
    is_cjk: true,
    width_factor: 2,
};

/// Japanese
pub(super) static JA: LanguageProfile = LanguageProfile {
    code: "ja",
    weak_punct: &['、', '，', '；'],
    conjunctions: &[
        "しかし", "そして", "でも", "だから", "また", "それで", "つまり", "それから", "ただ",
        "けれども",
    ],
    sentence_starters: &[
        "私", "僕", "これ", "それ", "あれ", "でも", "しかし", "そして", "今", "まず",
    ],
    is_cjk: true,
    width_factor: 2,
};

/// Korean
pub(super) static KO: LanguageProfile = LanguageProfile {
    code: "ko",
    weak_punct: &[',', '、', ';'],
    conjunctions: &[
        "그리고", "그러나", "하지만", "그래서", "또한", "그런데", "또는", "그러면", "왜냐하면",
    ],
    sentence_starters: &[
        "나는", "저는", "우리는", "그리고", "하지만", "그래서", "이것은", "그것은", "지금",
    ],
    is_cjk: true,
    width_factor: 2,
};

/// German
pub(super) static DE: LanguageProfile = LanguageProfile {
    code: "de",
    weak_punct: &[',', ';', ':', '-'],
    conjunctions: &[
        "und", "oder", "aber", "denn", "sondern", "weil", "dass", "obwohl", "während", "also",
        "doch",
    ],
    sentence_starters: &[
        "Ich", "Der", "Die", "Das", "Er", "Sie", "Wir", "Es", "Ihr", "Aber", "Und", "Dann",
        "Jetzt", "Was", "Wie", "Warum", "Wo", "Wer",
    ],
    is_cjk: false,
    width_factor: 1,
};

/// French
pub(super) static FR: LanguageProfile = LanguageProfile {
    code: "fr",
    weak_punct: &[',', ';', ':', '-'],
    conjunctions: &[
        "et", "ou", "mais", "donc", "car", "ni", "or", "puis", "alors", "quand", "parce",
    ],
    sentence_starters: &[
        "Je", "Il", "Elle", "Nous", "Vous", "Ils", "Elles", "Le", "La", "Les", "On", "Mais",
        "Et", "Alors", "Donc", "Pourquoi", "Comment",
    ],
    is_cjk: false,
    width_factor: 1,
};

/// Spanish
pub(super) static ES: LanguageProfile = LanguageProfile {
    code: "es",
    weak_punct: &[',', ';', ':', '-'],
    conjunctions: &[
        "y", "e", "o", "u", "pero", "porque", "pues", "aunque", "mientras", "si", "como",
        "sino",
    ],
    sentence_starters: &[
        "Yo", "Él", "Ella", "Nosotros", "Ustedes", "Ellos", "El", "La", "Los", "Las", "Pero",
        "Y", "Entonces", "Ahora", "Qué", "Cómo", "Por",
    ],
    is_cjk: false,
    width_factor: 1,
};
