//! Lexical Sentiment Scoring
//!
//! Small fixed lexicon standing in for a full sentiment model. The score is
//! the mean polarity of matched words, so it always lands in [-1, 1] and is
//! 0 when nothing matches.

/// (word, polarity) pairs. Polarities roughly follow common sentiment
/// lexicons; only words plausible in profile bios are listed.
const LEXICON: &[(&str, f64)] = &[
    // Positive
    ("love", 0.8),
    ("loving", 0.7),
    ("great", 0.8),
    ("good", 0.7),
    ("happy", 0.8),
    ("best", 1.0),
    ("amazing", 0.9),
    ("awesome", 0.9),
    ("beautiful", 0.85),
    ("enthusiast", 0.5),
    ("passionate", 0.6),
    ("fun", 0.6),
    ("enjoy", 0.5),
    ("excited", 0.6),
    ("wonderful", 0.9),
    ("friendly", 0.5),
    ("adventure", 0.4),
    ("free", 0.4),
    ("win", 0.6),
    ("rich", 0.4),
    ("guaranteed", 0.3),
    ("easy", 0.4),
    ("quick", 0.3),
    ("perfect", 1.0),
    ("nice", 0.6),
    ("cool", 0.4),
    ("fan", 0.3),
    ("addict", 0.2),
    ("lover", 0.6),
    // Negative
    ("hate", -0.8),
    ("bad", -0.7),
    ("worst", -1.0),
    ("terrible", -0.9),
    ("awful", -0.9),
    ("sad", -0.6),
    ("angry", -0.7),
    ("boring", -0.5),
    ("ugly", -0.7),
    ("annoying", -0.6),
    ("scam", -0.8),
    ("fake", -0.5),
    ("urgent", -0.3),
    ("limited", -0.2),
    ("problem", -0.4),
    ("broke", -0.4),
    ("tired", -0.3),
    ("lonely", -0.5),
    ("poor", -0.5),
    ("never", -0.2),
];

fn word_polarity(word: &str) -> Option<f64> {
    LEXICON
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, p)| *p)
}

/// Polarity of a text in [-1, 1]: mean polarity over lexicon matches.
pub fn polarity(text: &str) -> f64 {
    let mut sum = 0.0;
    let mut matched = 0usize;
    for token in text.split_whitespace() {
        let word: String = token
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect::<String>()
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        if let Some(p) = word_polarity(&word) {
            sum += p;
            matched += 1;
        }
    }
    if matched == 0 {
        return 0.0;
    }
    (sum / matched as f64).clamp(-1.0, 1.0)
}
