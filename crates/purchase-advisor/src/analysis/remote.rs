use super::AnalysisError;
use crate::scoring::{FactorCode, FactorScores, PurchaseInputs, FACTOR_MAX, FACTOR_MIN};
use async_trait::async_trait;
use serde::Deserialize;

/// Richer, out-of-process analysis consulted before the local heuristic.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    async fn analyze(&self, inputs: &PurchaseInputs) -> Result<FactorScores, AnalysisError>;
}

/// Stand-in used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableAnalyzer;

#[async_trait]
impl RemoteAnalyzer for UnavailableAnalyzer {
    async fn analyze(&self, _inputs: &PurchaseInputs) -> Result<FactorScores, AnalysisError> {
        Err(AnalysisError::Unavailable)
    }
}

/// POSTs the inputs as JSON and reads back a flat factor payload.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteAnalyzer for HttpAnalyzer {
    async fn analyze(&self, inputs: &PurchaseInputs) -> Result<FactorScores, AnalysisError> {
        let payload: FactorPayload = self
            .client
            .post(&self.endpoint)
            .json(inputs)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        payload.into_scores()
    }
}

/// Wire shape of a remote answer: `{"D": 1, "D_explanation": "...", ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactorPayload {
    #[serde(rename = "D")]
    pub d: Option<i64>,
    #[serde(rename = "D_explanation")]
    pub d_explanation: Option<String>,
    #[serde(rename = "O")]
    pub o: Option<i64>,
    #[serde(rename = "O_explanation")]
    pub o_explanation: Option<String>,
    #[serde(rename = "G")]
    pub g: Option<i64>,
    #[serde(rename = "G_explanation")]
    pub g_explanation: Option<String>,
    #[serde(rename = "L")]
    pub l: Option<i64>,
    #[serde(rename = "L_explanation")]
    pub l_explanation: Option<String>,
    #[serde(rename = "B")]
    pub b: Option<i64>,
    #[serde(rename = "B_explanation")]
    pub b_explanation: Option<String>,
}

impl FactorPayload {
    /// Every factor must be present and within `[-2, 2]`.
    pub fn into_scores(self) -> Result<FactorScores, AnalysisError> {
        let entries = [
            (FactorCode::D, self.d, self.d_explanation),
            (FactorCode::O, self.o, self.o_explanation),
            (FactorCode::G, self.g, self.g_explanation),
            (FactorCode::L, self.l, self.l_explanation),
            (FactorCode::B, self.b, self.b_explanation),
        ];

        let mut scores = FactorScores::new();
        for (code, value, explanation) in entries {
            let value = value.ok_or(AnalysisError::MissingFactor(code))?;
            if value < i64::from(FACTOR_MIN) || value > i64::from(FACTOR_MAX) {
                return Err(AnalysisError::OutOfRange {
                    factor: code,
                    value,
                });
            }
            scores.set(code, value as i8);
            if let Some(text) = explanation {
                scores.explain(code, text);
            }
        }
        Ok(scores)
    }
}
