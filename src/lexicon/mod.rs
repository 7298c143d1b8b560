//! Weighted stance lexicons.
//!
//! A [`Lexicon`] holds the phrases for both sides of the stance axis, each
//! with a weight in `(0, 1]`. It is built once, validated, and then only
//! read: share one instance (it is `Send + Sync`) across every analysis.
//!
//! Phrases are stored as normalized token sequences (see [`crate::text`])
//! and indexed by their first token, longest phrase first, so the keyword
//! scanner can take the longest match at each position in one lookup.
//!
//! # Lexicon files
//!
//! Custom lexicons load from TOML:
//!
//! ```toml
//! symbols = ["🇮🇱", "🇵🇸"]
//! emotion_terms = ["massacre"]
//!
//! [[pro_a]]
//! phrase = "stand with israel"
//! weight = 1.0
//!
//! [[pro_b]]
//! phrase = "free palestine"
//! weight = 1.0
//! ```

mod default;

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::text::{self, Token};
use crate::types::Category;
use crate::{Result, StanceError};

/// A single lexicon phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    /// Normalized phrase (tokens joined by spaces).
    pub phrase: String,
    pub tokens: Vec<String>,
    pub category: Category,
    pub weight: f64,
}

/// Validated, indexed stance lexicon.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    /// First token → entry indices, longest phrase first.
    index: HashMap<String, Vec<usize>>,
    symbols: HashSet<String>,
    emotion_terms: Vec<String>,
}

impl Lexicon {
    /// Start an empty lexicon.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Parse a TOML lexicon document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content)
            .map_err(|e| StanceError::Configuration(format!("Failed to parse lexicon: {e}")))?;
        file.into_builder().build()
    }

    /// Load a TOML lexicon file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StanceError::Configuration(format!("Failed to read lexicon file {path:?}: {e}"))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entries of one side.
    pub fn category(&self, category: Category) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a phrase (any spelling that normalizes to it).
    pub fn get(&self, phrase: &str) -> Option<&LexiconEntry> {
        let tokens: Vec<String> = text::tokenize(phrase).into_iter().map(|t| t.text).collect();
        let first = tokens.first()?;
        self.index
            .get(first)?
            .iter()
            .map(|&i| &self.entries[i])
            .find(|e| e.tokens == tokens)
    }

    /// Longest entry whose tokens match `tokens` starting at `at`.
    pub fn longest_match_at<'a>(&'a self, tokens: &'a [Token], at: usize) -> Option<&'a LexiconEntry> {
        self.matches_at(tokens, at).next()
    }

    /// Every entry whose tokens match `tokens` starting at `at`, longest first.
    pub fn matches_at<'a>(
        &'a self,
        tokens: &'a [Token],
        at: usize,
    ) -> impl Iterator<Item = &'a LexiconEntry> + 'a {
        let candidates = tokens
            .get(at)
            .and_then(|first| self.index.get(&first.text))
            .map(Vec::as_slice)
            .unwrap_or_default();
        candidates
            .iter()
            .map(|&i| &self.entries[i])
            .filter(move |entry| {
                let end = at + entry.tokens.len();
                end <= tokens.len()
                    && tokens[at..end]
                        .iter()
                        .zip(&entry.tokens)
                        .all(|(t, e)| &t.text == e)
            })
    }

    /// Whether any token is one of the intensifying symbols.
    pub fn has_symbol(&self, tokens: &[Token]) -> bool {
        tokens.iter().any(|t| self.symbols.contains(&t.text))
    }

    /// Whether any token starts with one of the emotion stems.
    pub fn has_emotion_term(&self, tokens: &[Token]) -> bool {
        tokens.iter().any(|t| {
            self.emotion_terms
                .iter()
                .any(|stem| t.text.starts_with(stem.as_str()))
        })
    }
}

impl Default for Lexicon {
    /// The built-in lexicon.
    fn default() -> Self {
        let mut builder = Lexicon::builder();
        for &(phrase, weight) in default::PRO_A {
            builder = builder.pro_a(phrase, weight);
        }
        for &(phrase, weight) in default::PRO_B {
            builder = builder.pro_b(phrase, weight);
        }
        for &symbol in default::SYMBOLS {
            builder = builder.symbol(symbol);
        }
        for &term in default::EMOTION_TERMS {
            builder = builder.emotion_term(term);
        }
        builder.build().expect("built-in lexicon is valid")
    }
}

/// Builder for [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    phrases: Vec<(String, Category, f64)>,
    symbols: Vec<String>,
    emotion_terms: Vec<String>,
}

impl LexiconBuilder {
    /// Add a side-A phrase.
    pub fn pro_a(self, phrase: impl Into<String>, weight: f64) -> Self {
        self.phrase(phrase, Category::ProA, weight)
    }

    /// Add a side-B phrase.
    pub fn pro_b(self, phrase: impl Into<String>, weight: f64) -> Self {
        self.phrase(phrase, Category::ProB, weight)
    }

    pub fn phrase(mut self, phrase: impl Into<String>, category: Category, weight: f64) -> Self {
        self.phrases.push((phrase.into(), category, weight));
        self
    }

    /// Add a glyph that intensifies anchored sentiment.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    /// Add a stem that intensifies anchored sentiment.
    pub fn emotion_term(mut self, term: impl Into<String>) -> Self {
        self.emotion_terms.push(term.into());
        self
    }

    /// Validate and index the lexicon.
    ///
    /// Fails with [`StanceError::Configuration`] when a weight is outside
    /// `(0, 1]`, a phrase normalizes to nothing, or the same phrase is listed
    /// for both sides. A phrase repeated on one side keeps its larger weight.
    pub fn build(self) -> Result<Lexicon> {
        let mut by_phrase: HashMap<Vec<String>, (Category, f64)> = HashMap::new();
        let mut order: Vec<Vec<String>> = Vec::new();

        for (phrase, category, weight) in self.phrases {
            if !weight.is_finite() || weight <= 0.0 || weight > 1.0 {
                return Err(StanceError::Configuration(format!(
                    "lexicon weight for '{phrase}' must be in (0, 1], got {weight}"
                )));
            }
            let tokens: Vec<String> = text::tokenize(&phrase).into_iter().map(|t| t.text).collect();
            if tokens.is_empty() {
                return Err(StanceError::Configuration(format!(
                    "lexicon phrase '{phrase}' has no words"
                )));
            }
            match by_phrase.get_mut(&tokens) {
                Some((existing, _)) if *existing != category => {
                    return Err(StanceError::Configuration(format!(
                        "lexicon phrase '{phrase}' is listed for both {existing} and {category}"
                    )));
                }
                Some((_, existing_weight)) => {
                    *existing_weight = existing_weight.max(weight);
                }
                None => {
                    by_phrase.insert(tokens.clone(), (category, weight));
                    order.push(tokens);
                }
            }
        }

        let entries = order
            .into_iter()
            .map(|tokens| {
                let (category, weight) = by_phrase[&tokens];
                LexiconEntry {
                    phrase: tokens.join(" "),
                    tokens,
                    category,
                    weight,
                }
            })
            .collect();

        Ok(Self::index(entries, self.symbols, self.emotion_terms))
    }

    fn index(
        entries: Vec<LexiconEntry>,
        symbols: Vec<String>,
        emotion_terms: Vec<String>,
    ) -> Lexicon {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            index.entry(entry.tokens[0].clone()).or_default().push(i);
        }
        for candidates in index.values_mut() {
            candidates.sort_by(|&a, &b| {
                entries[b]
                    .tokens
                    .len()
                    .cmp(&entries[a].tokens.len())
                    .then_with(|| entries[a].phrase.cmp(&entries[b].phrase))
            });
        }

        let symbols = symbols
            .iter()
            .map(|s| text::normalize(s))
            .filter(|s| !s.is_empty())
            .collect();
        let emotion_terms = emotion_terms
            .iter()
            .map(|t| text::normalize(t))
            .filter(|t| !t.is_empty())
            .collect();

        debug!(entries = entries.len(), "lexicon indexed");
        Lexicon {
            entries,
            index,
            symbols,
            emotion_terms,
        }
    }
}

/// On-disk lexicon layout.
#[derive(Debug, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    pro_a: Vec<PhraseEntry>,
    #[serde(default)]
    pro_b: Vec<PhraseEntry>,
    #[serde(default)]
    symbols: Vec<String>,
    #[serde(default)]
    emotion_terms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PhraseEntry {
    phrase: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl LexiconFile {
    fn into_builder(self) -> LexiconBuilder {
        let mut builder = Lexicon::builder();
        for entry in self.pro_a {
            builder = builder.pro_a(entry.phrase, entry.weight);
        }
        for entry in self.pro_b {
            builder = builder.pro_b(entry.phrase, entry.weight);
        }
        for symbol in self.symbols {
            builder = builder.symbol(symbol);
        }
        for term in self.emotion_terms {
            builder = builder.emotion_term(term);
        }
        builder
    }
}
