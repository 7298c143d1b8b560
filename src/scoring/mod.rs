//! Per-post scoring pipeline.
//!
//! [`KeywordScorer`] and [`SentimentScorer`] each produce one component
//! score; [`PostScorer`] normalizes a post once, runs both, and combines
//! them into the post's label.

pub mod keyword;
pub mod polarity;
pub mod post;
pub mod sentiment;

pub use keyword::{KeywordScore, KeywordScorer};
pub use polarity::{LexiconPolarity, PolaritySource};
pub use post::PostScorer;
pub use sentiment::SentimentScorer;
