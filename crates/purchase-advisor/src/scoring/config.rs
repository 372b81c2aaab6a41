use super::domain::FactorCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PDS_BUY_THRESHOLD: i16 = 5;
pub const PDS_CONSIDER_THRESHOLD: i16 = 0;

/// Cut-offs turning a PDS into a recommendation.
///
/// `pds >= buy` is a buy, `pds < consider` is a pass, everything between is
/// left to the buyer's judgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    pub buy: i16,
    pub consider: i16,
}

impl Thresholds {
    pub fn is_ordered(&self) -> bool {
        self.consider <= self.buy
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            buy: PDS_BUY_THRESHOLD,
            consider: PDS_CONSIDER_THRESHOLD,
        }
    }
}

/// Display names keyed by factor code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorLabels(BTreeMap<FactorCode, String>);

impl FactorLabels {
    pub fn label(&self, code: FactorCode) -> &str {
        self.0
            .get(&code)
            .map(String::as_str)
            .unwrap_or_else(|| code.default_label())
    }

    pub fn set(&mut self, code: FactorCode, label: impl Into<String>) {
        self.0.insert(code, label.into());
    }
}

impl Default for FactorLabels {
    fn default() -> Self {
        Self(
            FactorCode::ordered()
                .into_iter()
                .map(|code| (code, code.default_label().to_string()))
                .collect(),
        )
    }
}

/// Tunables consumed by [`super::DecisionEngine`]; the factor rules themselves
/// are fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub thresholds: Thresholds,
    pub labels: FactorLabels,
}
