//! Sentence segmentation
//!
//! Boundary detection sits behind the [`SentenceDetector`] trait. The default
//! [`AbbreviationAwareDetector`] starts from UAX #29 sentence boundaries and
//! rejoins fragments that end in a known abbreviation or an initial, using a
//! per-language abbreviation list. The [`Segmenter`] adds trimming, index
//! assignment, and a period-splitting fallback for text where boundary
//! detection finds at most one sentence.

use crate::types::Sentence;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Texts longer than this (in characters) are eligible for the fallback split
const FALLBACK_MIN_CHARS: usize = 50;

/// Lowercased, without the final period
const ENGLISH_ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "rev", "hon", "gen", "col", "lt",
    "sgt", "capt", "gov", "sen", "rep", "vs", "e.g", "i.e", "cf", "approx", "inc", "ltd", "corp",
    "dept", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const GERMAN_ABBREVIATIONS: &[&str] = &[
    "dr", "prof", "hr", "fr", "z.b", "bzw", "ca", "nr", "str", "evtl", "ggf", "vgl", "d.h", "u.a",
];

const FRENCH_ABBREVIATIONS: &[&str] = &[
    "m", "mme", "mlle", "dr", "pr", "cf", "p.ex", "env", "av", "bd",
];

const SPANISH_ABBREVIATIONS: &[&str] = &[
    "sr", "sra", "srta", "dr", "dra", "ud", "uds", "p.ej", "aprox", "av",
];

/// A language-aware sentence boundary detector
///
/// Returns `(byte_offset, fragment)` pairs in document order. Fragments may
/// carry surrounding whitespace; the [`Segmenter`] trims them.
pub trait SentenceDetector {
    /// Split text into raw sentence fragments
    fn detect<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)>;
}

/// UAX #29 sentence boundaries that do not split after abbreviations
///
/// A boundary is dropped when the fragment before it ends with a listed
/// abbreviation ("Dr.", "e.g.") or a single capital initial ("J.").
#[derive(Debug, Clone)]
pub struct AbbreviationAwareDetector {
    abbreviations: FxHashSet<String>,
}

impl Default for AbbreviationAwareDetector {
    fn default() -> Self {
        Self::english()
    }
}

impl AbbreviationAwareDetector {
    /// English abbreviations
    pub fn english() -> Self {
        Self::from_list(ENGLISH_ABBREVIATIONS)
    }

    /// Abbreviations for a language code or name
    ///
    /// Languages without a list only keep initials together.
    pub fn for_language(language: &str) -> Self {
        let list: &[&str] = match language.trim().to_lowercase().as_str() {
            "en" | "english" => ENGLISH_ABBREVIATIONS,
            "de" | "german" => GERMAN_ABBREVIATIONS,
            "fr" | "french" => FRENCH_ABBREVIATIONS,
            "es" | "spanish" => SPANISH_ABBREVIATIONS,
            _ => &[],
        };
        Self::from_list(list)
    }

    /// Create a detector from abbreviations written with or without the final period
    pub fn from_list<S: AsRef<str>>(abbreviations: &[S]) -> Self {
        let mut detector = Self {
            abbreviations: FxHashSet::default(),
        };
        detector.add_abbreviations(abbreviations);
        detector
    }

    /// Add more abbreviations
    pub fn add_abbreviations<I, S>(&mut self, abbreviations: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for abbreviation in abbreviations {
            let word = abbreviation.as_ref().trim().trim_end_matches('.');
            if !word.is_empty() {
                self.abbreviations.insert(word.to_lowercase());
            }
        }
    }

    /// Check if a fragment ends with an abbreviation rather than a sentence
    fn ends_with_abbreviation(&self, fragment: &str) -> bool {
        let Some(body) = fragment.trim_end().strip_suffix('.') else {
            return false;
        };
        let word = body
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(body)
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if word.is_empty() {
            return false;
        }

        let mut chars = word.chars();
        let is_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
        is_initial || self.abbreviations.contains(word.to_lowercase().as_str())
    }
}

impl SentenceDetector for AbbreviationAwareDetector {
    fn detect<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
        let mut fragments = Vec::new();
        let mut pending: Option<usize> = None;

        for (offset, fragment) in text.split_sentence_bound_indices() {
            let start = pending.take().unwrap_or(offset);
            if self.ends_with_abbreviation(fragment) {
                pending = Some(start);
                continue;
            }
            fragments.push((start, &text[start..offset + fragment.len()]));
        }

        if let Some(start) = pending {
            fragments.push((start, &text[start..]));
        }
        fragments
    }
}

/// Splits raw text into indexed [`Sentence`]s
#[derive(Debug, Clone, Default)]
pub struct Segmenter<D = AbbreviationAwareDetector> {
    detector: D,
}

impl Segmenter<AbbreviationAwareDetector> {
    /// Create a segmenter with the English abbreviation-aware detector
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: SentenceDetector> Segmenter<D> {
    /// Create a segmenter around a custom detector
    pub fn with_detector(detector: D) -> Self {
        Self { detector }
    }

    /// Segment text into sentences with monotonically assigned indices
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let sentences = collect_trimmed(self.detector.detect(text));

        if sentences.len() <= 1
            && text.chars().count() > FALLBACK_MIN_CHARS
            && text.contains('.')
        {
            return split_on_periods(text);
        }

        sentences
    }
}

/// Trim fragments, drop blanks, and number the survivors
fn collect_trimmed(fragments: Vec<(usize, &str)>) -> Vec<Sentence> {
    let mut sentences = Vec::with_capacity(fragments.len());
    for (offset, fragment) in fragments {
        if let Some((start, trimmed)) = trim_with_offset(offset, fragment) {
            let index = sentences.len();
            sentences.push(Sentence::new(trimmed, start, start + trimmed.len(), index));
        }
    }
    sentences
}

/// Re-split on literal periods, re-appending a period to each fragment
///
/// Offsets cover the trimmed fragment plus the period that ended it, when
/// the original text had one.
fn split_on_periods(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut offset = 0;

    for piece in text.split('.') {
        if let Some((start, trimmed)) = trim_with_offset(offset, piece) {
            let piece_end = offset + piece.len();
            let end = if piece_end < text.len() {
                piece_end + 1
            } else {
                start + trimmed.len()
            };
            let index = sentences.len();
            sentences.push(Sentence::new(format!("{trimmed}."), start, end, index));
        }
        offset += piece.len() + 1;
    }

    sentences
}

fn trim_with_offset(offset: usize, fragment: &str) -> Option<(usize, &str)> {
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        return None;
    }
    let leading = fragment.len() - fragment.trim_start().len();
    Some((offset + leading, trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_segmentation() {
        let text = "The sky is blue. The grass is green! Is it raining?";
        let sentences = Segmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec!["The sky is blue.", "The grass is green!", "Is it raining?"]
        );
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_blank_input() {
        assert!(Segmenter::new().segment("").is_empty());
        assert!(Segmenter::new().segment("  \n\t ").is_empty());
    }

    #[test]
    fn test_fallback_for_unspaced_periods() {
        let text = "repeat this phrase.repeat this phrase.and one more thing here.final bit";
        let sentences = Segmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec![
                "repeat this phrase.",
                "repeat this phrase.",
                "and one more thing here.",
                "final bit.",
            ]
        );
        assert_eq!(sentences[3].index, 3);
        assert_eq!(&text[sentences[0].start..sentences[0].end], "repeat this phrase.");
        assert_eq!(&text[sentences[3].start..sentences[3].end], "final bit");
    }

    #[test]
    fn test_no_fallback_for_short_text() {
        let text = "short.text.here";
        let sentences = Segmenter::new().segment(text);
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, text);
    }

    #[test]
    fn test_abbreviations_do_not_end_sentences() {
        let text = "Dr. Smith went to Washington. He met Mr. Jones there. \
                    They talked about policy for hours. Then they left.";
        let sentences = Segmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec![
                "Dr. Smith went to Washington.",
                "He met Mr. Jones there.",
                "They talked about policy for hours.",
                "Then they left.",
            ]
        );
        for s in &sentences {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_latin_abbreviations_and_initials() {
        let text = "Bring fruit, e.g. Apples or pears. The author J. Smith agreed. We left early.";
        let sentences = Segmenter::new().segment(text);

        assert_eq!(
            texts(&sentences),
            vec![
                "Bring fruit, e.g. Apples or pears.",
                "The author J. Smith agreed.",
                "We left early.",
            ]
        );
    }

    #[test]
    fn test_trailing_abbreviation_keeps_text() {
        let text = "The meeting is with Prof. Lee and Dr.";
        let sentences = Segmenter::new().segment(text);
        assert_eq!(texts(&sentences), vec![text]);
    }

    #[test]
    fn test_language_specific_abbreviations() {
        let text = "Wir treffen Hr. Weber morgen. Er kommt um neun.";

        let german = Segmenter::with_detector(AbbreviationAwareDetector::for_language("de"));
        assert_eq!(german.segment(text).len(), 2);

        let unlisted = Segmenter::with_detector(AbbreviationAwareDetector::for_language("fi"));
        assert_eq!(unlisted.segment(text).len(), 3);
    }

    #[test]
    fn test_custom_abbreviations() {
        let mut detector = AbbreviationAwareDetector::from_list(&["Ave."]);
        detector.add_abbreviations(["blvd"]);
        let text = "She lives on Park Ave. Near the river. He lives on Sunset Blvd. Out west.";

        let sentences = Segmenter::with_detector(detector).segment(text);
        assert_eq!(
            texts(&sentences),
            vec!["She lives on Park Ave. Near the river.", "He lives on Sunset Blvd. Out west."]
        );
    }

    #[test]
    fn test_custom_detector() {
        struct LineDetector;

        impl SentenceDetector for LineDetector {
            fn detect<'a>(&self, text: &'a str) -> Vec<(usize, &'a str)> {
                let mut offset = 0;
                text.split('\n')
                    .map(|line| {
                        let start = offset;
                        offset += line.len() + 1;
                        (start, line)
                    })
                    .collect()
            }
        }

        let sentences = Segmenter::with_detector(LineDetector).segment("first line\n\nsecond line");
        assert_eq!(texts(&sentences), vec!["first line", "second line"]);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[1].start, 12);
    }
}
