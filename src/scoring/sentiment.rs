//! Stance-anchored sentiment.
//!
//! Raw polarity says nothing about stance on its own ("so happy today" is
//! not political). The scorer therefore anchors polarity to the dominant
//! lexicon side of the same text: positive tone around side-A phrases
//! pushes towards A, positive tone around side-B phrases towards B. Without
//! a dominant side the polarity is damped to near-noise.

use std::sync::Arc;

use crate::config::SentimentConfig;
use crate::lexicon::Lexicon;
use crate::text::Token;
use crate::types::Category;

use super::polarity::PolaritySource;

/// Below this squashed polarity the anchored score counts as "no tone".
const FLAT_POLARITY: f64 = 0.1;

/// Anchored scores below this magnitude receive the fallback bias.
const WEAK_ANCHOR: f64 = 0.2;

#[derive(Clone)]
pub struct SentimentScorer {
    source: Arc<dyn PolaritySource>,
    lexicon: Arc<Lexicon>,
    config: SentimentConfig,
}

impl std::fmt::Debug for SentimentScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentScorer")
            .field("source", &self.source.name())
            .field("config", &self.config)
            .finish()
    }
}

impl SentimentScorer {
    pub fn new(
        source: Arc<dyn PolaritySource>,
        lexicon: Arc<Lexicon>,
        config: SentimentConfig,
    ) -> Self {
        Self {
            source,
            lexicon,
            config,
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Signed sentiment score in `[-1, 1]` on the stance axis.
    pub fn score(&self, tokens: &[Token], dominant: Option<Category>) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }
        let raw = self.source.polarity(tokens).clamp(-1.0, 1.0);
        let scaled = (self.config.gain * raw).tanh();

        let Some(category) = dominant else {
            return (self.config.neutral_damping * scaled).clamp(-1.0, 1.0);
        };

        let sign = category.sign();
        let mut boost = 0.0;
        if self.lexicon.has_symbol(tokens) {
            boost += self.config.symbol_boost;
        }
        if self.lexicon.has_emotion_term(tokens) {
            boost += self.config.emotion_boost;
        }

        let mut anchored = sign * (scaled + boost);
        if scaled.abs() < FLAT_POLARITY && anchored.abs() < WEAK_ANCHOR {
            anchored += sign * self.config.fallback_bias;
        }
        anchored.clamp(-1.0, 1.0)
    }
}
