use super::remote::RemoteAnalyzer;
use super::AnalysisError;
use crate::scoring::{
    score_purchase, DecisionEngine, FactorScores, PurchaseInputs, Recommendation, ScoreVerdict,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Which path produced the factor scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSource {
    Remote,
    Fallback,
}

/// Response body for one analysed purchase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub item_name: String,
    pub item_cost: f64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub extra_context: String,
    pub factors: FactorScores,
    pub pds: i16,
    pub recommendation: Recommendation,
    pub verdict: ScoreVerdict,
    pub verdict_description: &'static str,
    pub source: AnalysisSource,
    pub analyzed_at: DateTime<Utc>,
}

/// Remote analyzer wrapped with the local heuristic as fallback.
pub struct AnalysisService<R: ?Sized> {
    remote: Arc<R>,
    engine: DecisionEngine,
    timeout: Duration,
}

impl<R> AnalysisService<R>
where
    R: RemoteAnalyzer + ?Sized + 'static,
{
    pub fn new(remote: Arc<R>, engine: DecisionEngine, timeout: Duration) -> Self {
        Self {
            remote,
            engine,
            timeout,
        }
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// Always answers: remote failures are logged and replaced by the
    /// heuristic score.
    pub async fn analyze(&self, inputs: PurchaseInputs) -> Analysis {
        let (factors, source) = match self.remote_factors(&inputs).await {
            Ok(factors) => (factors, AnalysisSource::Remote),
            Err(AnalysisError::Unavailable) => {
                debug!(item = %inputs.item_name, "no remote analyzer; using fallback heuristic");
                (score_purchase(&inputs), AnalysisSource::Fallback)
            }
            Err(err) => {
                warn!(error = %err, item = %inputs.item_name, "remote analysis failed; using fallback heuristic");
                (score_purchase(&inputs), AnalysisSource::Fallback)
            }
        };

        let card = self.engine.evaluate(factors);

        Analysis {
            item_name: inputs.item_name,
            item_cost: inputs.item_cost,
            extra_context: inputs.extra_context,
            factors: card.factors,
            pds: card.pds,
            recommendation: card.recommendation,
            verdict: card.verdict,
            verdict_description: card.verdict.description(),
            source,
            analyzed_at: Utc::now(),
        }
    }

    async fn remote_factors(&self, inputs: &PurchaseInputs) -> Result<FactorScores, AnalysisError> {
        let factors = tokio::time::timeout(self.timeout, self.remote.analyze(inputs))
            .await
            .map_err(|_| AnalysisError::Timeout(self.timeout))??;

        if let Some(code) = factors.first_missing() {
            return Err(AnalysisError::MissingFactor(code));
        }
        if let Some((factor, value)) = factors.out_of_range() {
            return Err(AnalysisError::OutOfRange {
                factor,
                value: i64::from(value),
            });
        }
        Ok(factors)
    }
}
