//! Analyzer configuration.
//!
//! All scoring constants (component weights, the classification threshold,
//! sentiment shaping and confidence coefficients) live in
//! [`AnalyzerConfig`]. It is validated once when an analyzer is built and
//! never changes afterwards, so every score in a run uses the same numbers.
//!
//! Configuration files are TOML with the following resolution order:
//! 1. `--config <path>` (explicit path)
//! 2. `~/.stancemeter/config.toml` (user)
//! 3. `/etc/stancemeter/config.toml` (system)
//!
//! ```toml
//! lexicon = "/etc/stancemeter/lexicon.toml"
//!
//! [analyzer]
//! threshold = 0.1
//! max_posts = 100
//!
//! [analyzer.weights]
//! keyword = 0.7
//! sentiment = 0.3
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::lexicon::Lexicon;
use crate::{Result, StanceError};

/// Tolerance for coefficient sets that must sum to 1.
pub const SUM_TOLERANCE: f64 = 1e-6;

/// Configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    /// Custom lexicon file; the built-in lexicon is used when absent.
    /// Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

/// Scoring configuration for one analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub weights: ScoreWeights,
    /// Symmetric classification threshold τ (default: 0.1).
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub sentiment: SentimentConfig,
    #[serde(default)]
    pub confidence: ConfidenceWeights,
    /// Maximum posts per analysis; extra posts are dropped (default: 100).
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            threshold: default_threshold(),
            sentiment: SentimentConfig::default(),
            confidence: ConfidenceWeights::default(),
            max_posts: default_max_posts(),
        }
    }
}

fn default_threshold() -> f64 {
    0.1
}

fn default_max_posts() -> usize {
    100
}

/// Weights of the keyword and sentiment components in a post's combined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Default: 0.7.
    #[serde(default = "default_keyword_weight")]
    pub keyword: f64,
    /// Default: 0.3.
    #[serde(default = "default_sentiment_weight")]
    pub sentiment: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword: default_keyword_weight(),
            sentiment: default_sentiment_weight(),
        }
    }
}

fn default_keyword_weight() -> f64 {
    0.7
}

fn default_sentiment_weight() -> f64 {
    0.3
}

/// Shaping of the sentiment signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Raw polarity is squashed with `tanh(gain * raw)` (default: 2.5).
    #[serde(default = "default_gain")]
    pub gain: f64,
    /// Multiplier for polarity in posts without a dominant lexicon side
    /// (default: 0.2).
    #[serde(default = "default_neutral_damping")]
    pub neutral_damping: f64,
    /// Added to anchored polarity when a stance symbol is present (default: 0.15).
    #[serde(default = "default_symbol_boost")]
    pub symbol_boost: f64,
    /// Added to anchored polarity when an emotion term is present (default: 0.25).
    #[serde(default = "default_emotion_boost")]
    pub emotion_boost: f64,
    /// Directional nudge when anchored polarity is near zero (default: 0.25).
    #[serde(default = "default_fallback_bias")]
    pub fallback_bias: f64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            gain: default_gain(),
            neutral_damping: default_neutral_damping(),
            symbol_boost: default_symbol_boost(),
            emotion_boost: default_emotion_boost(),
            fallback_bias: default_fallback_bias(),
        }
    }
}

fn default_gain() -> f64 {
    2.5
}

fn default_neutral_damping() -> f64 {
    0.2
}

fn default_symbol_boost() -> f64 {
    0.15
}

fn default_emotion_boost() -> f64 {
    0.25
}

fn default_fallback_bias() -> f64 {
    0.25
}

/// Coefficients of the user-level confidence formula:
///
/// `confidence = strength * mean|score| + consistency * agreement + stability * (1 - stddev)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    /// Default: 0.5.
    #[serde(default = "default_strength")]
    pub strength: f64,
    /// Default: 0.4.
    #[serde(default = "default_consistency")]
    pub consistency: f64,
    /// Default: 0.1.
    #[serde(default = "default_stability")]
    pub stability: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            strength: default_strength(),
            consistency: default_consistency(),
            stability: default_stability(),
        }
    }
}

fn default_strength() -> f64 {
    0.5
}

fn default_consistency() -> f64 {
    0.4
}

fn default_stability() -> f64 {
    0.1
}

fn check_unit(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(StanceError::Configuration(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}

fn check_sum(name: &str, values: &[f64]) -> Result<()> {
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() <= SUM_TOLERANCE {
        Ok(())
    } else {
        Err(StanceError::Configuration(format!(
            "{name} must sum to 1, got {sum}"
        )))
    }
}

impl AnalyzerConfig {
    /// Check every value against its valid range.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        check_unit("threshold", self.threshold)?;
        self.sentiment.validate()?;
        self.confidence.validate()?;
        if self.max_posts == 0 {
            return Err(StanceError::Configuration(
                "max_posts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        check_unit("weights.keyword", self.keyword)?;
        check_unit("weights.sentiment", self.sentiment)?;
        check_sum("weights", &[self.keyword, self.sentiment])
    }
}

impl SentimentConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.gain.is_finite() && self.gain > 0.0) {
            return Err(StanceError::Configuration(format!(
                "sentiment.gain must be positive, got {}",
                self.gain
            )));
        }
        check_unit("sentiment.neutral_damping", self.neutral_damping)?;
        if self.neutral_damping >= 1.0 {
            return Err(StanceError::Configuration(
                "sentiment.neutral_damping must be below 1".to_string(),
            ));
        }
        check_unit("sentiment.symbol_boost", self.symbol_boost)?;
        check_unit("sentiment.emotion_boost", self.emotion_boost)?;
        check_unit("sentiment.fallback_bias", self.fallback_bias)
    }
}

impl ConfidenceWeights {
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("confidence.strength", self.strength),
            ("confidence.consistency", self.consistency),
            ("confidence.stability", self.stability),
        ] {
            check_unit(name, value)?;
        }
        check_sum(
            "confidence coefficients",
            &[self.strength, self.consistency, self.stability],
        )
    }
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// Resolution order:
    /// 1. Explicit path (if provided)
    /// 2. `~/.stancemeter/config.toml`
    /// 3. `/etc/stancemeter/config.toml`
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_config_path(explicit_path)?.ok_or_else(|| {
            StanceError::Configuration(
                "No config file found. Create ~/.stancemeter/config.toml or /etc/stancemeter/config.toml"
                    .to_string(),
            )
        })?;
        Self::load_from_file(&path)
    }

    /// Like [`Config::load`], but falls back to built-in defaults when no
    /// config file exists. An explicit path must still exist.
    pub fn load_or_default(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a TOML config document and validate the analyzer section.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| StanceError::Configuration(format!("Failed to parse config: {e}")))?;
        config.analyzer.validate()?;
        Ok(config)
    }

    /// The lexicon this config selects.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => Lexicon::from_path(path),
            None => Ok(Lexicon::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StanceError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let mut config = Self::from_toml_str(&content).map_err(|e| match e {
            StanceError::Configuration(msg) => {
                StanceError::Configuration(format!("{msg} (in {path:?})"))
            }
            other => other,
        })?;

        // Relative lexicon paths are relative to the config file
        if let (Some(lexicon), Some(dir)) = (&config.lexicon, path.parent()) {
            if lexicon.is_relative() {
                config.lexicon = Some(dir.join(lexicon));
            }
        }
        Ok(config)
    }

    /// Resolve the config file path, `None` when no candidate exists.
    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(StanceError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        // User config
        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".stancemeter").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        // System config
        let system_config = PathBuf::from("/etc/stancemeter/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }
}
