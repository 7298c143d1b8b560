//! General-purpose polarity signal.
//!
//! Polarity is the emotional tone of a text (positive, negative or neutral)
//! independent of any stance lexicon. The sentiment scorer only needs a
//! number in `[-1, 1]`, so the source sits behind the [`PolaritySource`]
//! trait and can be swapped for a model-backed implementation through the
//! analyzer builder.

use std::collections::{HashMap, HashSet};

use crate::text::Token;

/// Source of raw text polarity.
pub trait PolaritySource: Send + Sync {
    /// Source name for logging/debugging.
    fn name(&self) -> &str;

    /// Polarity of the tokenized text in `[-1, 1]`; `0.0` when neutral or
    /// when nothing in the text carries sentiment.
    fn polarity(&self, tokens: &[Token]) -> f64;
}

/// Word valences in `[-1, 1]`.
const VALENCES: &[(&str, f64)] = &[
    // Positive
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("blessed", 0.6),
    ("brave", 0.6),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("celebrate", 0.5),
    ("courage", 0.5),
    ("delighted", 0.8),
    ("enjoy", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("free", 0.4),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.6),
    ("great", 0.8),
    ("happy", 0.8),
    ("heroes", 0.6),
    ("heroic", 0.6),
    ("hope", 0.3),
    ("hopeful", 0.5),
    ("joy", 0.8),
    ("kind", 0.6),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("nice", 0.6),
    ("peace", 0.4),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("proud", 0.8),
    ("relief", 0.4),
    ("safe", 0.5),
    ("strong", 0.4),
    ("support", 0.3),
    ("thank", 0.4),
    ("thanks", 0.4),
    ("together", 0.2),
    ("victory", 0.6),
    ("win", 0.5),
    ("wonderful", 1.0),
    // Negative
    ("afraid", -0.6),
    ("angry", -0.5),
    ("appalling", -0.9),
    ("atrocity", -0.9),
    ("awful", -1.0),
    ("bad", -0.7),
    ("barbaric", -0.9),
    ("brutal", -0.9),
    ("cruel", -1.0),
    ("dead", -0.2),
    ("death", -0.5),
    ("despicable", -1.0),
    ("destroyed", -0.6),
    ("devastating", -0.8),
    ("disgrace", -0.8),
    ("disgusting", -1.0),
    ("evil", -1.0),
    ("fear", -0.5),
    ("heartbreaking", -0.8),
    ("horrible", -1.0),
    ("horrific", -1.0),
    ("horror", -0.8),
    ("hate", -0.8),
    ("hatred", -0.8),
    ("kill", -0.6),
    ("killed", -0.6),
    ("killing", -0.6),
    ("murder", -0.9),
    ("murdered", -0.9),
    ("outrage", -0.7),
    ("pain", -0.6),
    ("sad", -0.5),
    ("scared", -0.6),
    ("shame", -0.6),
    ("shameful", -0.8),
    ("sick", -0.7),
    ("suffer", -0.6),
    ("suffering", -0.6),
    ("terrible", -1.0),
    ("tragedy", -0.75),
    ("tragic", -0.75),
    ("ugly", -0.7),
    ("unacceptable", -0.7),
    ("violence", -0.6),
    ("violent", -0.6),
    ("war", -0.4),
    ("worse", -0.7),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Tokens that flip the next sentiment word. `t` covers split contractions
/// (`don't` tokenizes as `don`, `t`).
const NEGATORS: &[&str] = &["not", "no", "never", "nor", "cannot", "nothing", "t"];

/// Multipliers applied to the next sentiment word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.5),
    ("extremely", 1.5),
    ("incredibly", 1.4),
    ("really", 1.3),
    ("so", 1.3),
    ("totally", 1.3),
    ("very", 1.3),
    ("slightly", 0.5),
    ("somewhat", 0.7),
];

/// Non-sentiment tokens a negator reaches across (`not a good day`).
const NEGATION_WINDOW: usize = 3;

/// Negated valences flip sign and lose half their strength.
const NEGATION_FACTOR: f64 = -0.5;

/// Dictionary-based polarity in the spirit of pattern-style lexicons.
///
/// Each sentiment word contributes its valence, scaled by a preceding
/// intensifier and flipped by a preceding negator; the polarity is the mean
/// contribution over sentiment words.
#[derive(Debug, Clone)]
pub struct LexiconPolarity {
    valences: HashMap<String, f64>,
    negators: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl LexiconPolarity {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().map(|&(w, v)| (w.to_string(), v)).collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(w, f)| (w.to_string(), f))
                .collect(),
        }
    }

    /// Add or replace a word valence (clamped to `[-1, 1]`).
    pub fn with_valence(mut self, word: impl Into<String>, valence: f64) -> Self {
        self.valences
            .insert(word.into().to_lowercase(), valence.clamp(-1.0, 1.0));
        self
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(word).copied()
    }
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolaritySource for LexiconPolarity {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, tokens: &[Token]) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;
        let mut negation_left = 0usize;
        let mut intensity = 1.0;

        for token in tokens {
            let word = token.text.as_str();
            if self.negators.contains(word) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(word) {
                intensity *= factor;
                continue;
            }
            match self.valences.get(word) {
                Some(&valence) => {
                    let mut value = valence * intensity;
                    if negation_left > 0 {
                        value *= NEGATION_FACTOR;
                    }
                    total += value.clamp(-1.0, 1.0);
                    count += 1;
                    negation_left = 0;
                    intensity = 1.0;
                }
                None => {
                    negation_left = negation_left.saturating_sub(1);
                    intensity = 1.0;
                }
            }
        }

        if count == 0 {
            0.0
        } else {
            (total / count as f64).clamp(-1.0, 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn polarity(text: &str) -> f64 {
        LexiconPolarity::new().polarity(&tokenize(text))
    }

    #[test]
    fn neutral_text_is_zero() {
        assert_eq!(polarity("just had coffee this morning"), 0.0);
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn positive_and_negative_words() {
        assert!(polarity("what a wonderful day") > 0.5);
        assert!(polarity("this is horrible") < -0.5);
    }

    #[test]
    fn mean_over_sentiment_words() {
        // good (0.7) and bad (-0.7) cancel
        assert!(polarity("good and bad").abs() < 1e-12);
    }

    #[test]
    fn negation_flips_and_halves() {
        let p = polarity("this is not good");
        assert!((p - (-0.35)).abs() < 1e-12, "got {p}");
    }

    #[test]
    fn negation_reaches_across_filler_words() {
        assert!(polarity("not a good day") < 0.0);
        assert!(polarity("I don't love it") < 0.0);
    }

    #[test]
    fn negation_expires() {
        // four filler tokens between negator and sentiment word
        assert!(polarity("no one here at all is happy") > 0.0);
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        let plain = polarity("good");
        let intense = polarity("very good");
        assert!(intense > plain);
        assert!(polarity("absolutely perfect") <= 1.0);
    }

    #[test]
    fn custom_valence() {
        let source = LexiconPolarity::new().with_valence("Meh", -0.2);
        assert_eq!(source.valence("meh"), Some(-0.2));
        assert!(source.polarity(&tokenize("meh")) < 0.0);
    }
}
