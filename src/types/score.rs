//! Per-post scoring output.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::{Category, Stance};

/// One lexicon phrase found in a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// The lexicon phrase, in its normalized form.
    pub term: String,
    pub category: Category,
    pub weight: f64,
    /// Byte ranges of every occurrence in the original post text, in order.
    ///
    /// The phrase contributes `weight` once regardless of how many spans
    /// there are.
    pub spans: Vec<Range<usize>>,
}

impl KeywordMatch {
    /// Byte range of the first occurrence.
    pub fn first_span(&self) -> Option<&Range<usize>> {
        self.spans.first()
    }
}

/// Scoring result for a single post.
///
/// Invariants: all scores lie in `[-1, 1]`, `combined_score` is the clipped
/// weighted sum of the two component scores, and `stance` is
/// `Stance::from_score(combined_score, threshold)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostScore {
    /// The original (un-normalized) post text.
    pub text: String,
    pub keyword_score: f64,
    pub sentiment_score: f64,
    pub combined_score: f64,
    pub stance: Stance,
    /// Matched phrases ordered by first occurrence.
    pub matches: Vec<KeywordMatch>,
}

/// A run of post text, tagged with the lexicon side it matched (if any).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub category: Option<Category>,
}

impl PostScore {
    /// Score for a post with no usable text.
    pub fn empty(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyword_score: 0.0,
            sentiment_score: 0.0,
            combined_score: 0.0,
            stance: Stance::Neutral,
            matches: Vec::new(),
        }
    }

    /// Split the original text into plain and matched segments.
    ///
    /// Concatenating the segment texts reproduces `self.text` exactly, so a
    /// display layer can wrap the tagged ones in highlighting markup.
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut spans: Vec<(Range<usize>, Category)> = self
            .matches
            .iter()
            .flat_map(|m| m.spans.iter().map(move |s| (s.clone(), m.category)))
            .collect();
        spans.sort_by_key(|(span, _)| span.start);

        let mut segments = Vec::with_capacity(spans.len() * 2 + 1);
        let mut cursor = 0;
        for (span, category) in spans {
            // Skip spans that overlap the previous one or fall outside the text
            let (Some(before), Some(matched)) = (
                self.text.get(cursor..span.start),
                self.text.get(span.start..span.end),
            ) else {
                continue;
            };
            if !before.is_empty() {
                segments.push(Segment {
                    text: before,
                    category: None,
                });
            }
            segments.push(Segment {
                text: matched,
                category: Some(category),
            });
            cursor = span.end;
        }
        if let Some(rest) = self.text.get(cursor..) {
            if !rest.is_empty() {
                segments.push(Segment {
                    text: rest,
                    category: None,
                });
            }
        }
        segments
    }
}
