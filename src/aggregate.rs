//! User-level aggregation of post scores.
//!
//! # Overall stance
//!
//! The label with the most posts wins. On a tie, a non-neutral label wins
//! only when the batch's average score leans its way (`> 0` for `ProA`,
//! `< 0` for `ProB`); otherwise the result is `Neutral`. An even A/B split
//! with a zero average is therefore neutral.
//!
//! The tie-break reads the average over every post in the batch, neutral
//! posts included. It does not compare the mean score of each tied label, so
//! a slightly negative neutral post can hand a tie to `ProB` even when the
//! `ProA` posts are individually stronger.
//!
//! # Confidence
//!
//! ```text
//! confidence = clip(strength    * mean(|score|)
//!                 + consistency * share of posts agreeing with the overall stance
//!                 + stability   * (1 - stddev(score)), 0, 1)
//! ```
//!
//! `stddev` is the population standard deviation of the combined scores.
//! Scores live in `[-1, 1]`, so it never exceeds 1 and needs no further
//! normalization; a single post has zero spread.

use crate::config::ConfidenceWeights;
use crate::types::{AnalysisResult, PostScore, Stance, StanceDistribution};

/// Reduces one batch of [`PostScore`]s to an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    weights: ConfidenceWeights,
}

impl Aggregator {
    pub fn new(weights: ConfidenceWeights) -> Self {
        Self { weights }
    }

    pub fn aggregate(&self, scores: &[PostScore]) -> AnalysisResult {
        if scores.is_empty() {
            return AnalysisResult::empty();
        }
        let n = scores.len() as f64;

        let mut counts = [0usize; 3];
        let mut sum = 0.0;
        let mut abs_sum = 0.0;
        for score in scores {
            counts[label_index(score.stance)] += 1;
            sum += score.combined_score;
            abs_sum += score.combined_score.abs();
        }
        let average_score = (sum / n).clamp(-1.0, 1.0);
        let stance_distribution = StanceDistribution::from_counts(counts[0], counts[1], counts[2]);
        let stance = overall_stance(&counts, average_score);

        let strength = abs_sum / n;
        let consistency = stance_distribution.get(stance);
        let variance = scores
            .iter()
            .map(|s| (s.combined_score - average_score).powi(2))
            .sum::<f64>()
            / n;
        let spread = variance.sqrt().clamp(0.0, 1.0);

        let confidence = (self.weights.strength * strength
            + self.weights.consistency * consistency
            + self.weights.stability * (1.0 - spread))
            .clamp(0.0, 1.0);

        AnalysisResult {
            stance,
            confidence,
            average_score,
            stance_distribution,
            post_count: scores.len(),
        }
    }
}

fn label_index(stance: Stance) -> usize {
    match stance {
        Stance::ProA => 0,
        Stance::ProB => 1,
        Stance::Neutral => 2,
    }
}

fn overall_stance(counts: &[usize; 3], average_score: f64) -> Stance {
    let max = counts.iter().copied().max().unwrap_or(0);
    let tied: Vec<Stance> = Stance::ALL
        .into_iter()
        .filter(|&s| counts[label_index(s)] == max)
        .collect();
    if let [only] = tied.as_slice() {
        return *only;
    }
    let leaning = Stance::from_score(average_score, 0.0);
    if leaning != Stance::Neutral && tied.contains(&leaning) {
        leaning
    } else {
        Stance::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(combined: f64, stance: Stance) -> PostScore {
        PostScore {
            combined_score: combined,
            stance,
            ..PostScore::empty("")
        }
    }

    #[test]
    fn empty_batch() {
        let result = Aggregator::default().aggregate(&[]);
        assert_eq!(result, AnalysisResult::empty());
    }

    #[test]
    fn single_post_has_no_spread() {
        let result = Aggregator::new(ConfidenceWeights::default())
            .aggregate(&[post(0.8, Stance::ProA)]);
        assert_eq!(result.stance, Stance::ProA);
        // 0.5 * 0.8 + 0.4 * 1.0 + 0.1 * 1.0
        assert!((result.confidence - 0.9).abs() < 1e-12);
        assert!((result.average_score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn pro_a_pro_b_tie_follows_average() {
        let weights = ConfidenceWeights::default();
        let leaning_b = [post(0.3, Stance::ProA), post(-0.9, Stance::ProB)];
        assert_eq!(Aggregator::new(weights).aggregate(&leaning_b).stance, Stance::ProB);

        let balanced = [post(0.5, Stance::ProA), post(-0.5, Stance::ProB)];
        assert_eq!(Aggregator::new(weights).aggregate(&balanced).stance, Stance::Neutral);
    }

    #[test]
    fn tie_with_neutral_needs_matching_average() {
        let weights = ConfidenceWeights::default();
        let towards_a = [post(0.6, Stance::ProA), post(0.05, Stance::Neutral)];
        assert_eq!(Aggregator::new(weights).aggregate(&towards_a).stance, Stance::ProA);

        // Average is negative, so the tied ProA label does not win
        let away = [
            post(0.2, Stance::ProA),
            post(-0.09, Stance::Neutral),
            post(-0.9, Stance::ProB),
            post(0.0, Stance::Neutral),
            post(0.3, Stance::ProA),
        ];
        let result = Aggregator::new(weights).aggregate(&away);
        assert_eq!(result.stance, Stance::Neutral);
    }

    #[test]
    fn tie_break_uses_batch_average_not_label_means() {
        // ProA posts average 0.12 against ProB's -0.11, but the neutral post
        // pulls the batch average below zero.
        let posts = [
            post(0.12, Stance::ProA),
            post(0.12, Stance::ProA),
            post(-0.11, Stance::ProB),
            post(-0.11, Stance::ProB),
            post(-0.09, Stance::Neutral),
        ];
        let result = Aggregator::default().aggregate(&posts);
        assert!(result.average_score < 0.0);
        assert_eq!(result.stance, Stance::ProB);
    }

    #[test]
    fn three_way_tie_follows_average() {
        let posts = [
            post(0.2, Stance::ProA),
            post(-0.6, Stance::ProB),
            post(0.0, Stance::Neutral),
        ];
        assert_eq!(Aggregator::default().aggregate(&posts).stance, Stance::ProB);
    }

    #[test]
    fn confidence_is_clipped() {
        let weights = ConfidenceWeights {
            strength: 1.0,
            consistency: 0.0,
            stability: 0.0,
        };
        let result = Aggregator::new(weights).aggregate(&[post(-1.0, Stance::ProB)]);
        assert!(result.confidence <= 1.0);
        assert_eq!(result.confidence, 1.0);
    }
}
