//! End-to-end segmentation tests

use subcue_core::{
    display_width, merge_incomplete_segments, Segment, Segmenter, SegmenterConfig, Word,
};

fn w(text: &str, start: f64, end: f64) -> Word {
    Word::new(text, start, end)
}

fn segmenter() -> Segmenter {
    Segmenter::new(SegmenterConfig::default())
}

fn flatten(segments: &[Segment]) -> Vec<Word> {
    segments.iter().flat_map(|s| s.words.clone()).collect()
}

#[test]
fn two_sentences_become_two_cues_with_exact_timing() {
    let words = vec![
        w("Hello", 0.0, 0.5),
        w(" world.", 0.5, 1.0),
        w(" How", 1.5, 2.0),
        w(" are", 2.0, 2.3),
        w(" you?", 2.3, 2.8),
    ];
    let segments = Segmenter::new(SegmenterConfig {
        max_cpl: 50,
        ..SegmenterConfig::default()
    })
    .segment(&words);

    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text(), "Hello world.");
    assert_eq!(segments[1].text(), "How are you?");
    assert_eq!((segments[0].start(), segments[0].end()), (0.0, 1.0));
    assert_eq!((segments[1].start(), segments[1].end()), (1.5, 2.8));
}

#[test]
fn abbreviation_is_protected_from_splitting() {
    let words = vec![
        w("Dr.", 0.0, 0.3),
        w(" Smith", 0.3, 0.8),
        w(" is", 0.8, 1.0),
        w(" here", 1.0, 1.4),
        w(".", 1.4, 1.5),
    ];
    let segments = segmenter().segment(&words);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text(), "Dr. Smith is here.");
}

#[test]
fn long_sentence_is_split_under_the_line_limit() {
    // 49 columns in one sentence; the comma carries the split and both
    // halves come out complete, so the merge pass keeps them apart
    let words = vec![
        w("The", 0.0, 0.2),
        w(" quick", 0.2, 0.5),
        w(" brown", 0.5, 0.8),
        w(" fox,", 0.8, 1.2),
        w(" it", 1.6, 1.8),
        w(" jumped", 1.8, 2.2),
        w(" over", 2.2, 2.5),
        w(" the", 2.5, 2.7),
        w(" lazy", 2.7, 3.0),
        w(" dog.", 3.0, 3.4),
    ];
    let segments = segmenter().segment(&words);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text(), "The quick brown fox,");
    assert_eq!(segments[1].text(), "it jumped over the lazy dog.");
    for segment in &segments {
        assert!(display_width(&segment.text()) <= 42);
    }
    assert_eq!(flatten(&segments), words);
}

#[test]
fn unterminated_runon_prefers_completeness_over_the_line_limit() {
    // With no terminal punctuation anywhere, every split half after the
    // first starts lowercase and unterminated, and the merge pass folds
    // the pieces back together: sentence integrity wins over line width
    let words = vec![
        w("this", 0.0, 0.3),
        w(" keeps", 0.3, 0.7),
        w(" going", 0.7, 1.0),
        w(" and", 1.0, 1.2),
        w(" going", 1.2, 1.5),
        w(" without", 1.5, 1.9),
        w(" ever", 1.9, 2.2),
        w(" stopping", 2.2, 2.7),
        w(" anywhere", 2.7, 3.2),
    ];
    let segments = segmenter().segment(&words);
    assert_eq!(segments.len(), 1);
    assert_eq!(flatten(&segments), words);
}

#[test]
fn word_conservation_across_a_mixed_transcript() {
    let words = vec![
        w("Right.", 0.0, 0.4),
        w(" So", 0.9, 1.1),
        w(" the", 1.1, 1.3),
        w(" plan", 1.3, 1.6),
        w(" is", 1.6, 1.8),
        w(" simple,", 1.8, 2.3),
        w(" we", 2.3, 2.5),
        w(" wait.", 2.5, 3.0),
        w(" Questions?", 3.6, 4.2),
    ];
    let segments = segmenter().segment(&words);
    assert_eq!(flatten(&segments), words);
    // Contiguous partition: boundaries line up exactly
    let mut position = 0;
    for segment in &segments {
        assert_eq!(segment.words, words[position..position + segment.words.len()]);
        position += segment.words.len();
    }
    assert_eq!(position, words.len());
}

#[test]
fn segmentation_is_deterministic() {
    let words = vec![
        w("One", 0.0, 0.3),
        w(" two,", 0.3, 0.8),
        w(" three", 1.3, 1.7),
        w(" four.", 1.7, 2.2),
    ];
    let first = segmenter().segment(&words);
    let second = segmenter().segment(&words);
    assert_eq!(first, second);
}

#[test]
fn cjk_width_drives_the_line_limit() {
    // 12 ideographs are 24 columns wide; a 20-column limit forces a split
    let words = vec![
        w("这是一个很长的句子，", 0.0, 2.0),
        w("需要被切分开", 2.0, 4.0),
    ];
    let segments = Segmenter::new(SegmenterConfig {
        language: "zh".to_string(),
        max_cpl: 20,
        ..SegmenterConfig::default()
    })
    .segment(&words);
    assert_eq!(segments.len(), 2);
}

#[test]
fn merge_example_folds_dangling_fragment() {
    let segments = vec![
        Segment::new(vec![w("We are done.", 0.0, 1.0)]),
        Segment::new(vec![w(" ok", 1.0, 1.2)]),
    ];
    let merged = merge_incomplete_segments(segments, 3);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].text(), "We are done. ok");
}

#[test]
fn giant_unsplittable_token_survives() {
    let token = "x".repeat(80);
    let words = vec![w(&token, 0.0, 2.0)];
    let segments = segmenter().segment(&words);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text(), token);
}
