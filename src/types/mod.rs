//! Public types for the stancemeter API.

mod analysis;
mod post;
mod score;
mod stance;

pub use analysis::{Analysis, AnalysisResult, StanceDistribution};
pub use post::{Engagement, Post};
pub use score::{KeywordMatch, PostScore, Segment};
pub use stance::{Category, Stance};
