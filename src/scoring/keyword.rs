//! Keyword scoring against the stance lexicon.

use std::collections::HashMap;
use std::sync::Arc;

use crate::lexicon::{Lexicon, LexiconEntry};
use crate::text::Token;
use crate::types::{Category, KeywordMatch};

/// Keyword evidence found in one text.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordScore {
    /// `(pro_a - pro_b) / (pro_a + pro_b)`, or `0.0` without matches.
    pub score: f64,
    /// Summed weight of distinct side-A phrases.
    pub pro_a: f64,
    /// Summed weight of distinct side-B phrases.
    pub pro_b: f64,
    /// Distinct matched phrases in order of first occurrence.
    pub matches: Vec<KeywordMatch>,
}

impl KeywordScore {
    pub fn empty() -> Self {
        Self {
            score: 0.0,
            pro_a: 0.0,
            pro_b: 0.0,
            matches: Vec::new(),
        }
    }

    /// The side with the larger cumulative weight; `None` without matches or
    /// on an exact tie.
    pub fn dominant(&self) -> Option<Category> {
        if self.pro_a > self.pro_b {
            Some(Category::ProA)
        } else if self.pro_b > self.pro_a {
            Some(Category::ProB)
        } else {
            None
        }
    }
}

/// Scans token streams for lexicon phrases.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    lexicon: Arc<Lexicon>,
}

impl KeywordScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a tokenized text.
    ///
    /// Phrases are claimed longest first across the whole text (leftmost
    /// first among equal lengths), and a phrase is dropped when any of its
    /// tokens is already claimed. So `free palestine` never also counts
    /// `palestine`, and in `gaza war on terror` the three-word
    /// `war on terror` wins over the earlier `gaza war`. Each distinct phrase
    /// contributes its weight once.
    pub fn score(&self, tokens: &[Token]) -> KeywordScore {
        let mut candidates: Vec<(usize, &LexiconEntry)> = (0..tokens.len())
            .flat_map(|at| self.lexicon.matches_at(tokens, at).map(move |e| (at, e)))
            .collect();
        candidates.sort_by(|(a_at, a), (b_at, b)| {
            b.tokens.len().cmp(&a.tokens.len()).then(a_at.cmp(b_at))
        });

        let mut covered = vec![false; tokens.len()];
        let mut claimed: Vec<(usize, &LexiconEntry)> = Vec::new();
        for (at, entry) in candidates {
            let end = at + entry.tokens.len();
            if covered[at..end].iter().any(|&c| c) {
                continue;
            }
            covered[at..end].fill(true);
            claimed.push((at, entry));
        }
        claimed.sort_by_key(|&(at, _)| at);

        let mut matches: Vec<KeywordMatch> = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (at, entry) in claimed {
            let end = at + entry.tokens.len();
            let span = tokens[at].span.start..tokens[end - 1].span.end;
            match seen.get(entry.phrase.as_str()) {
                Some(&i) => matches[i].spans.push(span),
                None => {
                    seen.insert(entry.phrase.as_str(), matches.len());
                    matches.push(KeywordMatch {
                        term: entry.phrase.clone(),
                        category: entry.category,
                        weight: entry.weight,
                        spans: vec![span],
                    });
                }
            }
        }

        let (pro_a, pro_b) = matches
            .iter()
            .fold((0.0, 0.0), |(a, b), m| match m.category {
                Category::ProA => (a + m.weight, b),
                Category::ProB => (a, b + m.weight),
            });
        let total = pro_a + pro_b;
        let score = if total > 0.0 {
            ((pro_a - pro_b) / total).clamp(-1.0, 1.0)
        } else {
            0.0
        };

        KeywordScore {
            score,
            pro_a,
            pro_b,
            matches,
        }
    }
}
