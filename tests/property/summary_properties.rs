use proptest::prelude::*;
use rapid_summarizer::{
    cosine, SentenceVector, SummarizerConfig, SummaryOptions, SummaryOutcome, TextSummarizer,
};

const WORDS: &[&str] = &[
    "river", "engine", "garden", "planet", "signal", "copper", "harbor", "violin", "glacier",
    "lantern", "orbit", "meadow", "falcon", "crystal", "canyon", "archive",
];

fn summarizer() -> TextSummarizer {
    TextSummarizer::new(SummarizerConfig::default()).unwrap()
}

/// A capitalized sentence of 2..6 content words ending with a period
fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 2..6).prop_map(|words| {
        let mut text = words.join(" ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text.push('.');
        text
    })
}

fn document(sentences: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), sentences).prop_map(|s| s.join(" "))
}

fn token_vector() -> impl Strategy<Value = SentenceVector> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12)
        .prop_map(|words| SentenceVector::from_tokens(words.into_iter()))
}

fn options() -> impl Strategy<Value = SummaryOptions> {
    (0.05f64..=1.0, 1usize..4, 0usize..8, any::<bool>()).prop_map(
        |(ratio, min_sentences, extra, remove_duplicates)| SummaryOptions {
            ratio,
            min_sentences,
            max_sentences: min_sentences + extra,
            remove_duplicates,
        },
    )
}

proptest! {
    #[test]
    fn cosine_is_bounded_and_symmetric(a in token_vector(), b in token_vector()) {
        let ab = cosine(&a, &b);
        let ba = cosine(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(cosine(&SentenceVector::new(), &a), 0.0);
    }

    #[test]
    fn short_input_is_returned_unchanged(text in document(1..3), opts in options()) {
        let opts = SummaryOptions {
            min_sentences: opts.min_sentences.max(2),
            max_sentences: opts.max_sentences.max(2),
            ..opts
        };
        let s = summarizer();
        prop_assume!(s.segment(&text).len() <= opts.min_sentences);
        prop_assert_eq!(s.generate_summary(&text, &opts).unwrap(), text);
    }

    #[test]
    fn selection_preserves_document_order(text in document(3..25), opts in options()) {
        let report = summarizer().summarize_with_details(&text, &opts).unwrap();
        let indices = report.selected_indices();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_length_is_bounded(text in document(3..25), opts in options()) {
        let report = summarizer().summarize_with_details(&text, &opts).unwrap();
        let n = report.surviving_sentences;
        if report.total_sentences > opts.min_sentences && n > opts.min_sentences {
            prop_assert_eq!(report.outcome, SummaryOutcome::Ranked);
            let count = report.selected.len();
            prop_assert!(count >= opts.min_sentences);
            prop_assert!(count <= opts.max_sentences.min(n));
        }
    }

    #[test]
    fn unique_count_never_exceeds_total(text in document(0..20)) {
        let stats = summarizer().get_duplicate_statistics(&text);
        prop_assert!(stats.unique_sentences <= stats.total_sentences);
        prop_assert!((0.0..=100.0).contains(&stats.duplicate_percentage));
        if stats.duplicate_sentences == 0 {
            prop_assert_eq!(stats.duplicate_percentage, 0.0);
        }
        if stats.total_sentences > 0 {
            prop_assert!(stats.unique_sentences >= 1);
        }
    }
}

#[test]
fn exact_duplicate_example() {
    let stats =
        summarizer().get_duplicate_statistics("The sky is blue. The sky is blue. It is sunny today.");

    assert_eq!(stats.unique_sentences, 2);
    assert_eq!(stats.duplicate_sentences, 1);
    assert!((stats.duplicate_percentage - 33.33).abs() < 1e-9);
}

#[test]
fn near_duplicate_example() {
    let s = summarizer();
    let sentences = s.segment(
        "The quick brown fox jumps over the lazy dog. \
         The  quick brown fox, jumps over the lazy dog! \
         Glaciers carve deep valleys.",
    );
    assert_eq!(sentences.len(), 3);

    let deduped = s.dedupe(&sentences);
    assert_eq!(deduped.original_indices, vec![0, 2]);
}

#[test]
fn empty_input_example() {
    let s = summarizer();
    let opts = SummaryOptions::default();
    assert_eq!(s.generate_summary("", &opts).unwrap(), "");
    assert_eq!(s.generate_summary("   ", &opts).unwrap(), "");
}
