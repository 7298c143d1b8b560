//! Stance analysis entry point.
//!
//! [`StanceAnalyzer`] drives the post scorer over a batch of already-fetched
//! posts and aggregates the results. It holds no mutable state: one
//! instance can serve any number of concurrent analyses.

mod builder;

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::aggregate::Aggregator;
use crate::config::AnalyzerConfig;
use crate::lexicon::Lexicon;
use crate::scoring::PostScorer;
use crate::telemetry;
use crate::types::{Analysis, AnalysisResult, Post, PostScore};
use crate::StanceError;

pub use builder::StanceAnalyzerBuilder;

/// Scores batches of posts and aggregates them into a user-level stance.
#[derive(Debug, Clone)]
pub struct StanceAnalyzer {
    scorer: PostScorer,
    aggregator: Aggregator,
    lexicon: Arc<Lexicon>,
    config: AnalyzerConfig,
}

impl StanceAnalyzer {
    /// Create a new builder for configuring the analyzer.
    pub fn builder() -> StanceAnalyzerBuilder {
        StanceAnalyzerBuilder::new()
    }

    /// Analyzer with the built-in lexicon and default configuration.
    pub fn new() -> Self {
        StanceAnalyzerBuilder::new()
            .build()
            .expect("default configuration is valid")
    }

    pub(crate) fn new_internal(
        scorer: PostScorer,
        aggregator: Aggregator,
        lexicon: Arc<Lexicon>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            scorer,
            aggregator,
            lexicon,
            config,
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a single text.
    pub fn score_text(&self, text: &str) -> PostScore {
        self.scorer.score_text(text)
    }

    /// Score a single post.
    pub fn score_post(&self, post: &Post) -> PostScore {
        self.scorer.score_post(post)
    }

    /// Aggregate scores produced earlier (e.g. from a detail view).
    pub fn aggregate(&self, scores: &[PostScore]) -> AnalysisResult {
        self.aggregator.aggregate(scores)
    }

    /// Analyze one user's batch of posts.
    ///
    /// Posts with an `id` seen earlier in the batch are skipped, and at most
    /// `max_posts` posts are analyzed. An empty batch yields
    /// [`AnalysisResult::empty`]. The returned [`Analysis`] is stamped with
    /// the engine version so stored output can be matched to its build.
    pub fn analyze(&self, posts: &[Post]) -> Analysis {
        let start = Instant::now();

        let selected = self.select(posts);
        let scores: Vec<PostScore> = selected
            .into_iter()
            .map(|post| self.scorer.score_post(post))
            .collect();
        for score in &scores {
            metrics::counter!(telemetry::POSTS_SCORED_TOTAL,
                "stance" => score.stance.as_str(),
            )
            .increment(1);
        }

        let result = self.aggregator.aggregate(&scores);

        metrics::counter!(telemetry::ANALYSES_TOTAL).increment(1);
        metrics::histogram!(telemetry::ANALYSIS_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
        info!(
            posts = result.post_count,
            stance = %result.stance,
            confidence = result.confidence,
            average_score = result.average_score,
            "analysis complete"
        );

        Analysis {
            result,
            posts: scores,
            rejected: 0,
            version: crate::version_string(),
        }
    }

    /// Analyze raw fetcher records.
    ///
    /// Each record must be an object with a string `text`; anything else is
    /// logged, counted in [`Analysis::rejected`] and skipped. Optional fields
    /// that fail to decode are dropped rather than rejecting the post. If
    /// every record is rejected the result is the empty-batch result.
    pub fn analyze_records(&self, records: &[Value]) -> Analysis {
        let mut posts = Vec::with_capacity(records.len());
        let mut rejected = 0;

        for (index, record) in records.iter().enumerate() {
            match decode_record(index, record) {
                Ok(post) => posts.push(post),
                Err((reason, error)) => {
                    warn!(index, reason, %error, "skipping malformed post");
                    metrics::counter!(telemetry::POSTS_REJECTED_TOTAL,
                        "reason" => reason,
                    )
                    .increment(1);
                    rejected += 1;
                }
            }
        }

        let mut analysis = self.analyze(&posts);
        analysis.rejected = rejected;
        analysis
    }

    /// Analyze a JSON document of fetcher records.
    ///
    /// Accepts either a top-level array of records or an object carrying
    /// them under `posts`. Anything else is
    /// [`StanceError::InvalidInput`]; bad individual records are handled as
    /// in [`analyze_records`](Self::analyze_records).
    pub fn analyze_json(&self, input: &str) -> crate::Result<Analysis> {
        let document: Value = serde_json::from_str(input)?;
        let records = match &document {
            Value::Array(records) => records,
            Value::Object(object) => match object.get("posts") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(StanceError::InvalidInput(
                        "expected a `posts` array".to_string(),
                    ));
                }
            },
            _ => {
                return Err(StanceError::InvalidInput(
                    "expected an array of posts".to_string(),
                ));
            }
        };
        Ok(self.analyze_records(records))
    }

    /// Analyze several users' batches concurrently.
    ///
    /// Batches are spread over the rayon thread pool and share this
    /// analyzer. Results are keyed by user name; a repeated name keeps the
    /// later batch.
    pub fn compare<N, P>(&self, users: &[(N, P)]) -> BTreeMap<String, AnalysisResult>
    where
        N: AsRef<str> + Sync,
        P: AsRef<[Post]> + Sync,
    {
        users
            .par_iter()
            .map(|(name, posts)| (name.as_ref().to_string(), self.analyze(posts.as_ref()).result))
            .collect()
    }

    /// Drop duplicate ids and apply the post cap, preserving input order.
    fn select<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(posts.len().min(self.config.max_posts));

        for post in posts {
            if let Some(id) = post.id.as_deref() {
                if !seen.insert(id) {
                    debug!(id, "skipping duplicate post");
                    continue;
                }
            }
            if selected.len() == self.config.max_posts {
                warn!(
                    max_posts = self.config.max_posts,
                    total = posts.len(),
                    "post cap reached, ignoring remaining posts"
                );
                break;
            }
            selected.push(post);
        }
        selected
    }
}

impl Default for StanceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode one fetcher record, or explain why it's unusable.
fn decode_record(index: usize, record: &Value) -> Result<Post, (&'static str, StanceError)> {
    let malformed = |reason: &str| StanceError::MalformedPost {
        index,
        reason: reason.to_string(),
    };

    let Some(object) = record.as_object() else {
        return Err(("not_an_object", malformed("record is not an object")));
    };
    let text = match object.get("text") {
        Some(Value::String(text)) => text,
        Some(_) => return Err(("missing_text", malformed("text field is not a string"))),
        None => return Err(("missing_text", malformed("missing text field"))),
    };

    match serde_json::from_value::<Post>(record.clone()) {
        Ok(post) => Ok(post),
        Err(e) => {
            debug!(index, error = %e, "dropping undecodable optional fields");
            let mut post = Post::new(text.as_str());
            post.id = object.get("id").and_then(Value::as_str).map(str::to_string);
            Ok(post)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_accepts_minimal_record() {
        let post = decode_record(0, &json!({"text": "hello"})).unwrap();
        assert_eq!(post.text, "hello");
    }

    #[test]
    fn decode_rejects_missing_text() {
        let (reason, err) = decode_record(3, &json!({"id": "x"})).unwrap_err();
        assert_eq!(reason, "missing_text");
        assert!(matches!(err, StanceError::MalformedPost { index: 3, .. }));
    }

    #[test]
    fn decode_rejects_non_string_text() {
        let (reason, _) = decode_record(0, &json!({"text": 42})).unwrap_err();
        assert_eq!(reason, "missing_text");
    }

    #[test]
    fn decode_rejects_non_object() {
        let (reason, _) = decode_record(0, &json!("just a string")).unwrap_err();
        assert_eq!(reason, "not_an_object");
    }

    #[test]
    fn decode_tolerates_bad_optional_fields() {
        let post = decode_record(
            0,
            &json!({"id": "p1", "text": "hi", "metrics": {"like_count": "lots"}}),
        )
        .unwrap();
        assert_eq!(post.text, "hi");
        assert_eq!(post.id.as_deref(), Some("p1"));
        assert!(post.engagement.is_none());
    }

    #[test]
    fn select_drops_duplicates_then_caps() {
        let analyzer = StanceAnalyzer::builder().max_posts(2).build().unwrap();
        let posts = vec![
            Post::new("a").with_id("1"),
            Post::new("a again").with_id("1"),
            Post::new("b"),
            Post::new("c"),
        ];
        let selected = analyzer.select(&posts);
        let texts: Vec<&str> = selected.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
