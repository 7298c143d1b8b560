//! Post-level scoring: keyword and sentiment combined into one label.

use tracing::debug;

use crate::config::ScoreWeights;
use crate::text;
use crate::types::{Post, PostScore, Stance};

use super::keyword::KeywordScorer;
use super::sentiment::SentimentScorer;

/// Scores single posts.
///
/// `combined = clip(w_kw * keyword + w_sent * sentiment, -1, 1)`, classified
/// with [`Stance::from_score`] against the configured threshold.
#[derive(Debug, Clone)]
pub struct PostScorer {
    keywords: KeywordScorer,
    sentiment: SentimentScorer,
    weights: ScoreWeights,
    threshold: f64,
}

impl PostScorer {
    pub fn new(
        keywords: KeywordScorer,
        sentiment: SentimentScorer,
        weights: ScoreWeights,
        threshold: f64,
    ) -> Self {
        Self {
            keywords,
            sentiment,
            weights,
            threshold,
        }
    }

    pub fn score_post(&self, post: &Post) -> PostScore {
        self.score_text(&post.text)
    }

    /// Score raw text. Blank text yields an all-zero neutral score.
    pub fn score_text(&self, raw: &str) -> PostScore {
        let tokens = text::tokenize(raw);
        if tokens.is_empty() {
            return PostScore::empty(raw);
        }

        let keyword = self.keywords.score(&tokens);
        let dominant = keyword.dominant();
        let sentiment_score = self.sentiment.score(&tokens, dominant);

        let combined_score = (self.weights.keyword * keyword.score
            + self.weights.sentiment * sentiment_score)
            .clamp(-1.0, 1.0);
        let stance = Stance::from_score(combined_score, self.threshold);

        if !keyword.matches.is_empty() {
            debug!(
                terms = ?keyword.matches.iter().map(|m| m.term.as_str()).collect::<Vec<_>>(),
                keyword_score = keyword.score,
                sentiment_score,
                combined_score,
                %stance,
                "keywords matched"
            );
        }

        PostScore {
            text: raw.to_string(),
            keyword_score: keyword.score,
            sentiment_score,
            combined_score,
            stance,
            matches: keyword.matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::SentimentConfig;
    use crate::lexicon::Lexicon;
    use crate::scoring::LexiconPolarity;

    fn scorer(lexicon: Lexicon) -> PostScorer {
        let lexicon = Arc::new(lexicon);
        PostScorer::new(
            KeywordScorer::new(lexicon.clone()),
            SentimentScorer::new(
                Arc::new(LexiconPolarity::new()),
                lexicon,
                SentimentConfig::default(),
            ),
            ScoreWeights::default(),
            0.1,
        )
    }

    #[test]
    fn blank_text_is_neutral_zero() {
        let score = scorer(Lexicon::default()).score_text("  \n\t ");
        assert_eq!(score.keyword_score, 0.0);
        assert_eq!(score.sentiment_score, 0.0);
        assert_eq!(score.combined_score, 0.0);
        assert_eq!(score.stance, Stance::Neutral);
        assert!(score.matches.is_empty());
        assert_eq!(score.text, "  \n\t ");
    }

    #[test]
    fn combined_is_weighted_sum() {
        let score = scorer(Lexicon::default()).score_text("Stand with Israel. So proud of our people");
        let expected = 0.7 * score.keyword_score + 0.3 * score.sentiment_score;
        assert!((score.combined_score - expected.clamp(-1.0, 1.0)).abs() < 1e-12);
        assert_eq!(score.stance, Stance::ProA);
    }

    #[test]
    fn stand_with_israel_scenario() {
        let lexicon = Lexicon::builder()
            .pro_a("stand with israel", 0.8)
            .pro_a("idf", 0.6)
            .build()
            .unwrap();
        let score = scorer(lexicon).score_text("I stand with Israel and the IDF");
        assert_eq!(score.keyword_score, 1.0);
        assert_eq!(score.stance, Stance::ProA);
        let terms: Vec<&str> = score.matches.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["stand with israel", "idf"]);
    }

    #[test]
    fn free_palestine_scenario() {
        let lexicon = Lexicon::builder()
            .pro_b("free palestine", 1.0)
            .pro_b("end the occupation", 1.0)
            .pro_b("occupation", 0.6)
            .pro_b("palestine", 0.3)
            .build()
            .unwrap();
        let score = scorer(lexicon).score_text("free palestine, end the occupation");
        assert_eq!(score.keyword_score, -1.0);
        assert_eq!(score.stance, Stance::ProB);
        assert_eq!(score.matches.len(), 2);
    }

    #[test]
    fn unrelated_text_is_neutral() {
        let score = scorer(Lexicon::default()).score_text("just had coffee this morning");
        assert_eq!(score.keyword_score, 0.0);
        assert!(score.sentiment_score.abs() < 0.05);
        assert!(score.combined_score.abs() < 0.05);
        assert_eq!(score.stance, Stance::Neutral);
    }

    #[test]
    fn happy_unrelated_text_stays_neutral() {
        let score = scorer(Lexicon::default()).score_text("I'm so happy today, wonderful weather!");
        assert_eq!(score.keyword_score, 0.0);
        assert!(score.combined_score.abs() <= 0.1);
        assert_eq!(score.stance, Stance::Neutral);
    }
}
