use super::config::Thresholds;
use serde::{Deserialize, Serialize};

/// Severity used by renderers to colour the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Positive,
    Neutral,
    Negative,
}

impl RecommendationTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    pub tier: RecommendationTier,
}

impl Recommendation {
    pub const BUY: &'static str = "Buy it.";
    pub const CONSIDER: &'static str = "Consider carefully.";
    pub const PASS: &'static str = "Don't buy it.";

    fn new(text: &str, tier: RecommendationTier) -> Self {
        Self {
            text: text.to_string(),
            tier,
        }
    }
}

pub(crate) fn recommend(pds: i16, thresholds: &Thresholds) -> Recommendation {
    if pds >= thresholds.buy {
        Recommendation::new(Recommendation::BUY, RecommendationTier::Positive)
    } else if pds < thresholds.consider {
        Recommendation::new(Recommendation::PASS, RecommendationTier::Negative)
    } else {
        Recommendation::new(Recommendation::CONSIDER, RecommendationTier::Neutral)
    }
}

/// Five-band description shown next to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreVerdict {
    Great,
    Aligned,
    NeedsConsideration,
    Inadvisable,
    StronglyDiscouraged,
}

impl ScoreVerdict {
    pub fn from_pds(pds: i16) -> Self {
        match pds {
            7.. => Self::Great,
            5..=6 => Self::Aligned,
            0..=4 => Self::NeedsConsideration,
            -5..=-1 => Self::Inadvisable,
            _ => Self::StronglyDiscouraged,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Great => "This looks like a great purchase!",
            Self::Aligned => "This purchase aligns with your financial goals.",
            Self::NeedsConsideration => "This purchase requires more consideration.",
            Self::Inadvisable => "This purchase may not be advisable right now.",
            Self::StronglyDiscouraged => "This purchase is strongly discouraged.",
        }
    }
}
