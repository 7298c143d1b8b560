//! User-level analysis output.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{PostScore, Stance};

/// Fraction of posts per stance label.
///
/// Always carries exactly the three labels. For a non-empty batch the
/// fractions sum to 1; for an empty batch they are all 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StanceDistribution {
    pub pro_a: f64,
    pub pro_b: f64,
    pub neutral: f64,
}

impl StanceDistribution {
    /// Build from per-label counts over `total` posts.
    pub fn from_counts(pro_a: usize, pro_b: usize, neutral: usize) -> Self {
        let total = pro_a + pro_b + neutral;
        if total == 0 {
            return Self::default();
        }
        let total = total as f64;
        Self {
            pro_a: pro_a as f64 / total,
            pro_b: pro_b as f64 / total,
            neutral: neutral as f64 / total,
        }
    }

    pub fn get(&self, stance: Stance) -> f64 {
        match stance {
            Stance::ProA => self.pro_a,
            Stance::ProB => self.pro_b,
            Stance::Neutral => self.neutral,
        }
    }

    /// Iterate `(label, fraction)` pairs in `Stance::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Stance, f64)> + '_ {
        Stance::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    pub fn total(&self) -> f64 {
        self.pro_a + self.pro_b + self.neutral
    }
}

/// Aggregate stance of one user over one batch of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub stance: Stance,
    /// How consistently and strongly the posts back `stance`, in `[0, 1]`.
    pub confidence: f64,
    /// Mean combined score, in `[-1, 1]`.
    pub average_score: f64,
    pub stance_distribution: StanceDistribution,
    pub post_count: usize,
}

impl AnalysisResult {
    /// The defined result for a batch with no valid posts.
    pub fn empty() -> Self {
        Self {
            stance: Stance::Neutral,
            confidence: 0.0,
            average_score: 0.0,
            stance_distribution: StanceDistribution::default(),
            post_count: 0,
        }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Posts analyzed: {}", self.post_count)?;
        writeln!(f, "Overall stance: {}", self.stance)?;
        writeln!(f, "Confidence: {:.2}", self.confidence)?;
        writeln!(f, "Average score: {:.2}", self.average_score)?;
        writeln!(f, "Stance distribution:")?;
        for (stance, fraction) in self.stance_distribution.iter() {
            writeln!(f, "  {stance}: {:.1}%", fraction * 100.0)?;
        }
        Ok(())
    }
}

/// Full output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub result: AnalysisResult,
    /// Per-post detail, in input order (rejected and duplicate records omitted).
    pub posts: Vec<PostScore>,
    /// Number of input records rejected as malformed.
    #[serde(default)]
    pub rejected: usize,
    /// Engine build that produced this analysis, from [`crate::version_string`].
    #[serde(default)]
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_from_counts() {
        let dist = StanceDistribution::from_counts(6, 1, 3);
        assert!((dist.pro_a - 0.6).abs() < 1e-12);
        assert!((dist.pro_b - 0.1).abs() < 1e-12);
        assert!((dist.neutral - 0.3).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_from_zero_counts_is_all_zero() {
        let dist = StanceDistribution::from_counts(0, 0, 0);
        assert_eq!(dist.total(), 0.0);
    }

    #[test]
    fn distribution_serializes_as_label_map() {
        let dist = StanceDistribution::from_counts(1, 0, 1);
        let json = serde_json::to_value(dist).unwrap();
        assert_eq!(json["pro_a"], 0.5);
        assert_eq!(json["pro_b"], 0.0);
        assert_eq!(json["neutral"], 0.5);
    }

    #[test]
    fn empty_result_is_neutral_with_zero_confidence() {
        let result = AnalysisResult::empty();
        assert_eq!(result.stance, Stance::Neutral);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.post_count, 0);
    }

    #[test]
    fn display_lists_every_label() {
        let result = AnalysisResult {
            stance: Stance::ProA,
            confidence: 0.75,
            average_score: 0.4,
            stance_distribution: StanceDistribution::from_counts(3, 0, 1),
            post_count: 4,
        };
        let text = result.to_string();
        assert!(text.contains("Overall stance: pro_a"));
        assert!(text.contains("pro_a: 75.0%"));
        assert!(text.contains("pro_b: 0.0%"));
        assert!(text.contains("neutral: 25.0%"));
    }

    #[test]
    fn analysis_without_version_still_deserializes() {
        let json = serde_json::json!({
            "result": AnalysisResult::empty(),
            "posts": [],
        });
        let analysis: Analysis = serde_json::from_value(json).unwrap();
        assert_eq!(analysis.rejected, 0);
        assert!(analysis.version.is_empty());
    }
}
