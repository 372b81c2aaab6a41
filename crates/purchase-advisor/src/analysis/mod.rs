//! Remote-first purchase analysis with a local fallback.
//!
//! An [`AnalysisService`] asks its [`RemoteAnalyzer`] for factor scores and,
//! when that call fails, times out, or returns scores outside `[-2, 2]`,
//! answers with [`crate::scoring::score_purchase`] instead. The engine never
//! touches the network; the fallback policy lives entirely here.

mod remote;
pub mod request;
pub mod router;
mod service;

pub use remote::{FactorPayload, HttpAnalyzer, RemoteAnalyzer, UnavailableAnalyzer};
pub use request::{AnalyzePurchaseRequest, NumberField, QuickAnalysisRequest};
pub use router::{analysis_router, FactorCatalogue};
pub use service::{Analysis, AnalysisService, AnalysisSource};

use crate::scoring::FactorCode;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("remote analysis unavailable")]
    Unavailable,
    #[error("remote analysis timed out after {0:?}")]
    Timeout(Duration),
    #[error("remote analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote analysis omitted factor {0}")]
    MissingFactor(FactorCode),
    #[error("remote analysis scored {factor} = {value}, outside [-2, 2]")]
    OutOfRange { factor: FactorCode, value: i64 },
}
