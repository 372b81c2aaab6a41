//! Purchase Decision Score (PDS) engine.
//!
//! Five factors (discretionary income, opportunity cost, goal alignment,
//! long-term impact and behaviour) are each scored in `[-2, 2]` from the
//! submitted [`PurchaseInputs`]. Their sum is the PDS, which the configured
//! [`Thresholds`] turn into a [`Recommendation`]. Everything here is pure and
//! safe to call from any number of tasks at once.

mod config;
mod domain;
mod explain;
mod recommendation;
mod rules;

#[cfg(test)]
mod tests;

pub use config::{
    FactorLabels, ScoringConfig, Thresholds, PDS_BUY_THRESHOLD, PDS_CONSIDER_THRESHOLD,
};
pub use domain::{
    FactorCode, FactorScores, HighInterestDebt, PurchaseInputs, PurchaseUrgency,
    DEFAULT_LEFTOVER_INCOME, FACTOR_MAX, FACTOR_MIN,
};
pub use recommendation::{Recommendation, RecommendationTier, ScoreVerdict};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score the five factors for a purchase using the local heuristic.
///
/// Never fails: a missing income falls back to
/// [`DEFAULT_LEFTOVER_INCOME`] and out-of-range costs simply land in the
/// outer steps of each rule.
pub fn score_purchase(inputs: &PurchaseInputs) -> FactorScores {
    let ratio = inputs.cost_to_income_ratio();
    let goal = inputs.main_financial_goal.to_lowercase();
    let item = inputs.item_name.to_lowercase();

    let d = rules::discretionary(ratio);
    let o = rules::opportunity(ratio, inputs.has_high_interest_debt());
    let g = rules::goal_alignment(&goal, &item);
    let l = rules::long_term(&item);
    let b = rules::behavioral(&inputs.purchase_urgency, ratio);

    debug!(item = %inputs.item_name, ratio, d, o, g, l, b, "scored purchase factors");

    let mut factors = FactorScores::new();
    factors.set(FactorCode::D, d);
    factors.explain(FactorCode::D, explain::discretionary(inputs, d));
    factors.set(FactorCode::O, o);
    factors.explain(FactorCode::O, explain::opportunity(inputs, o));
    factors.set(FactorCode::G, g);
    factors.explain(FactorCode::G, explain::goal_alignment(inputs, g));
    factors.set(FactorCode::L, l);
    factors.explain(FactorCode::L, explain::long_term(l));
    factors.set(FactorCode::B, b);
    factors.explain(FactorCode::B, explain::behavioral(inputs, b));
    factors
}

/// Sum of the five factor scores; factors that were never set count as 0.
pub fn compute_pds(factors: &FactorScores) -> i16 {
    FactorCode::ordered()
        .into_iter()
        .map(|code| i16::from(factors.get(code)))
        .sum()
}

/// Recommendation for `pds` under the default thresholds.
pub fn get_recommendation(pds: i16) -> Recommendation {
    recommendation::recommend(pds, &Thresholds::default())
}

/// Scoring rules bundled with the configured thresholds and labels.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: ScoringConfig,
}

impl DecisionEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, inputs: &PurchaseInputs) -> ScoreCard {
        self.evaluate(score_purchase(inputs))
    }

    /// Aggregate factors produced elsewhere (e.g. by a remote analyzer).
    pub fn evaluate(&self, factors: FactorScores) -> ScoreCard {
        let pds = compute_pds(&factors);
        ScoreCard {
            recommendation: self.recommend(pds),
            verdict: ScoreVerdict::from_pds(pds),
            factors,
            pds,
        }
    }

    pub fn recommend(&self, pds: i16) -> Recommendation {
        recommendation::recommend(pds, &self.config.thresholds)
    }
}

/// Factors, aggregate and recommendation for one purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub factors: FactorScores,
    pub pds: i16,
    pub recommendation: Recommendation,
    pub verdict: ScoreVerdict,
}
