//! Builder for configuring analyzer instances

use std::sync::Arc;

use tracing::debug;

use super::StanceAnalyzer;
use crate::aggregate::Aggregator;
use crate::config::{AnalyzerConfig, Config, ConfidenceWeights, ScoreWeights, SentimentConfig};
use crate::lexicon::Lexicon;
use crate::scoring::{KeywordScorer, LexiconPolarity, PolaritySource, PostScorer, SentimentScorer};
use crate::Result;

/// Builder for configuring [`StanceAnalyzer`] instances.
///
/// Every setter is optional; unset parts fall back to the built-in lexicon,
/// the built-in polarity source and [`AnalyzerConfig::default`].
pub struct StanceAnalyzerBuilder {
    config: AnalyzerConfig,
    lexicon: Option<Arc<Lexicon>>,
    polarity: Option<Arc<dyn PolaritySource>>,
}

impl StanceAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            lexicon: None,
            polarity: None,
        }
    }

    /// Replace the whole scoring configuration.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Apply a loaded config file: its analyzer section and its lexicon.
    pub fn config_file(self, config: &Config) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        Ok(self.config(config.analyzer.clone()).lexicon(lexicon))
    }

    /// Use a custom lexicon.
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Some(Arc::new(lexicon));
        self
    }

    /// Use a lexicon already shared with other analyzers.
    pub fn shared_lexicon(mut self, lexicon: Arc<Lexicon>) -> Self {
        self.lexicon = Some(lexicon);
        self
    }

    /// Use a custom polarity source for the sentiment component.
    pub fn polarity(mut self, source: impl PolaritySource + 'static) -> Self {
        self.polarity = Some(Arc::new(source));
        self
    }

    /// Set the keyword and sentiment weights (must sum to 1).
    pub fn weights(mut self, keyword: f64, sentiment: f64) -> Self {
        self.config.weights = ScoreWeights { keyword, sentiment };
        self
    }

    /// Set the classification threshold τ.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = threshold;
        self
    }

    pub fn sentiment(mut self, sentiment: SentimentConfig) -> Self {
        self.config.sentiment = sentiment;
        self
    }

    pub fn confidence(mut self, confidence: ConfidenceWeights) -> Self {
        self.config.confidence = confidence;
        self
    }

    /// Cap the number of posts analyzed per batch.
    pub fn max_posts(mut self, max_posts: usize) -> Self {
        self.config.max_posts = max_posts;
        self
    }

    /// Validate the configuration and build the analyzer.
    ///
    /// Returns [`StanceError::Configuration`](crate::StanceError::Configuration)
    /// for any out-of-range setting.
    pub fn build(self) -> Result<StanceAnalyzer> {
        self.config.validate()?;

        let lexicon = self.lexicon.unwrap_or_else(|| Arc::new(Lexicon::default()));
        let polarity = self
            .polarity
            .unwrap_or_else(|| Arc::new(LexiconPolarity::new()));

        debug!(
            lexicon_entries = lexicon.len(),
            polarity = polarity.name(),
            keyword_weight = self.config.weights.keyword,
            sentiment_weight = self.config.weights.sentiment,
            threshold = self.config.threshold,
            "building stance analyzer"
        );

        let scorer = PostScorer::new(
            KeywordScorer::new(lexicon.clone()),
            SentimentScorer::new(polarity, lexicon.clone(), self.config.sentiment),
            self.config.weights,
            self.config.threshold,
        );
        let aggregator = Aggregator::new(self.config.confidence);

        Ok(StanceAnalyzer::new_internal(
            scorer,
            aggregator,
            lexicon,
            self.config,
        ))
    }
}

impl Default for StanceAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
