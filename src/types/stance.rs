//! Stance labels.
//!
//! Stance is measured on a single signed axis: positive scores lean towards
//! side A, negative scores towards side B. The built-in lexicon maps side A
//! to pro-Israel and side B to pro-Palestine language.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified stance of a post or a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Leans towards side A (positive axis).
    ProA,
    /// Leans towards side B (negative axis).
    ProB,
    /// No clear lean.
    Neutral,
}

impl Stance {
    /// All labels, in distribution order.
    pub const ALL: [Stance; 3] = [Stance::ProA, Stance::ProB, Stance::Neutral];

    /// Classify a signed score against a symmetric threshold.
    ///
    /// `score > threshold` is `ProA`, `score < -threshold` is `ProB`, anything
    /// in between (inclusive) is `Neutral`.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            Stance::ProA
        } else if score < -threshold {
            Stance::ProB
        } else {
            Stance::Neutral
        }
    }

    /// Direction on the stance axis: `1.0`, `-1.0` or `0.0`.
    pub fn sign(self) -> f64 {
        match self {
            Stance::ProA => 1.0,
            Stance::ProB => -1.0,
            Stance::Neutral => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stance::ProA => "pro_a",
            Stance::ProB => "pro_b",
            Stance::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The side a lexicon phrase belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ProA,
    ProB,
}

impl Category {
    /// Direction on the stance axis: `1.0` for `ProA`, `-1.0` for `ProB`.
    pub fn sign(self) -> f64 {
        match self {
            Category::ProA => 1.0,
            Category::ProB => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        Stance::from(self).as_str()
    }
}

impl From<Category> for Stance {
    fn from(category: Category) -> Self {
        match category {
            Category::ProA => Stance::ProA,
            Category::ProB => Stance::ProB,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_from_score_pro_a() {
        assert_eq!(Stance::from_score(0.5, 0.1), Stance::ProA);
    }

    #[test]
    fn stance_from_score_pro_b() {
        assert_eq!(Stance::from_score(-0.5, 0.1), Stance::ProB);
    }

    #[test]
    fn stance_from_score_threshold_is_neutral() {
        // The threshold itself is not strictly greater, so it stays neutral
        assert_eq!(Stance::from_score(0.1, 0.1), Stance::Neutral);
        assert_eq!(Stance::from_score(-0.1, 0.1), Stance::Neutral);
        assert_eq!(Stance::from_score(0.0, 0.1), Stance::Neutral);
    }

    #[test]
    fn stance_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Stance::ProA).unwrap(), "\"pro_a\"");
        assert_eq!(
            serde_json::from_str::<Stance>("\"neutral\"").unwrap(),
            Stance::Neutral
        );
    }

    #[test]
    fn category_converts_to_stance() {
        assert_eq!(Stance::from(Category::ProB), Stance::ProB);
        assert_eq!(Category::ProB.sign(), -1.0);
    }
}
