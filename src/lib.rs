//! Stancemeter - stance scoring and aggregation for social media posts
//!
//! This crate classifies short texts as leaning towards one of two opposing
//! positions (`pro_a` / `pro_b`) or neither, using a weighted keyword
//! lexicon combined with a sentiment component, and aggregates a user's
//! posts into an overall stance with a confidence value.
//!
//! Fetching posts is out of scope: callers hand the analyzer posts they
//! already have.
//!
//! # Example
//!
//! ```rust
//! use stancemeter::{Post, Stance, StanceAnalyzer};
//!
//! let analyzer = StanceAnalyzer::new();
//!
//! let score = analyzer.score_text("Free Palestine, end the occupation");
//! assert_eq!(score.stance, Stance::ProB);
//!
//! let analysis = analyzer.analyze(&[
//!     Post::new("I stand with Israel"),
//!     Post::new("Bring them home"),
//!     Post::new("Lovely weather today"),
//! ]);
//! println!("{}", analysis.result);
//! ```
//!
//! # Custom configuration
//!
//! ```rust
//! use stancemeter::{Lexicon, Stance, StanceAnalyzer};
//!
//! let lexicon = Lexicon::builder()
//!     .pro_a("team red", 1.0)
//!     .pro_b("team blue", 1.0)
//!     .build()?;
//!
//! let analyzer = StanceAnalyzer::builder()
//!     .lexicon(lexicon)
//!     .weights(0.8, 0.2)
//!     .threshold(0.15)
//!     .build()?;
//!
//! assert_eq!(analyzer.score_text("go team blue").stance, Stance::ProB);
//! # Ok::<(), stancemeter::StanceError>(())
//! ```

pub mod aggregate;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod scoring;
pub mod telemetry;
pub mod text;
pub mod types;
pub mod version;

// Re-export main types at crate root
pub use analyzer::{StanceAnalyzer, StanceAnalyzerBuilder};
pub use config::{AnalyzerConfig, Config};
pub use error::{Result, StanceError};
pub use lexicon::Lexicon;
pub use scoring::PolaritySource;
pub use version::{PKG_VERSION, version_string};

// Re-export all types
pub use types::{
    Analysis, AnalysisResult, Category, Engagement, KeywordMatch, Post, PostScore, Segment, Stance,
    StanceDistribution,
};
