use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::remote::RemoteAnalyzer;
use super::request::{AnalyzePurchaseRequest, QuickAnalysisRequest};
use super::service::{Analysis, AnalysisService};
use crate::error::AppError;
use crate::scoring::{FactorCode, Thresholds, FACTOR_MAX, FACTOR_MIN};

/// Router builder exposing the analysis endpoints.
pub fn analysis_router<R>(service: Arc<AnalysisService<R>>) -> Router
where
    R: RemoteAnalyzer + ?Sized + 'static,
{
    Router::new()
        .route("/api/analyze-purchase", post(analyze_purchase_handler::<R>))
        .route("/api/analyze", post(quick_analysis_handler::<R>))
        .route("/api/factors", get(factor_catalogue_handler::<R>))
        .with_state(service)
}

pub(crate) async fn analyze_purchase_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
    payload: Result<Json<AnalyzePurchaseRequest>, JsonRejection>,
) -> Result<Json<Analysis>, AppError>
where
    R: RemoteAnalyzer + ?Sized + 'static,
{
    let Json(request) = payload?;
    let inputs = request.into_inputs()?;
    Ok(Json(service.analyze(inputs).await))
}

pub(crate) async fn quick_analysis_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
    payload: Result<Json<QuickAnalysisRequest>, JsonRejection>,
) -> Result<Json<Analysis>, AppError>
where
    R: RemoteAnalyzer + ?Sized + 'static,
{
    let Json(request) = payload?;
    let inputs = request.into_inputs()?;
    Ok(Json(service.analyze(inputs).await))
}

/// Codes, labels and bands a UI needs for cards, radar axes and the gauge.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorCatalogue {
    pub factors: Vec<FactorDescriptor>,
    pub factor_range: [i8; 2],
    pub pds_range: [i16; 2],
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactorDescriptor {
    pub code: FactorCode,
    pub label: String,
}

pub(crate) async fn factor_catalogue_handler<R>(
    State(service): State<Arc<AnalysisService<R>>>,
) -> Json<FactorCatalogue>
where
    R: RemoteAnalyzer + ?Sized + 'static,
{
    let config = service.engine().config();
    let factors = FactorCode::ordered()
        .into_iter()
        .map(|code| FactorDescriptor {
            code,
            label: config.labels.label(code).to_string(),
        })
        .collect::<Vec<_>>();
    let span = factors.len() as i16;

    Json(FactorCatalogue {
        factors,
        factor_range: [FACTOR_MIN, FACTOR_MAX],
        pds_range: [span * i16::from(FACTOR_MIN), span * i16::from(FACTOR_MAX)],
        thresholds: config.thresholds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::UnavailableAnalyzer;
    use crate::scoring::{DecisionEngine, FactorLabels, ScoringConfig};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::time::Duration;
    use tower::ServiceExt;

    fn router() -> Router {
        let mut labels = FactorLabels::default();
        labels.set(FactorCode::B, "Impulse Check");
        let engine = DecisionEngine::new(ScoringConfig {
            labels,
            ..ScoringConfig::default()
        });
        analysis_router(Arc::new(AnalysisService::new(
            Arc::new(UnavailableAnalyzer),
            engine,
            Duration::from_millis(100),
        )))
    }

    async fn post_raw(uri: &str, body: impl Into<Body>) -> (StatusCode, Value) {
        let response = router()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(body.into())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(uri, serde_json::to_vec(&body).unwrap()).await
    }

    #[tokio::test]
    async fn analyze_purchase_returns_factors_and_recommendation() {
        let (status, body) = post_json(
            "/api/analyze-purchase",
            json!({
                "itemName": "Laptop computer",
                "itemCost": "100",
                "leftoverIncome": 2000,
                "hasHighInterestDebt": "No",
                "mainFinancialGoal": "Grow my business",
                "purchaseUrgency": "Mixed",
                "extraContext": "For freelance work",
                "imageBase64": null
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // D=2, O=1, G=-1, L=1, B=0
        assert_eq!(body["pds"], json!(3));
        assert_eq!(body["factors"]["L"], json!(1));
        assert!(body["factors"]["G_explanation"].is_string());
        assert_eq!(body["recommendation"]["text"], json!("Consider carefully."));
        assert_eq!(body["recommendation"]["tier"], json!("neutral"));
        assert_eq!(body["source"], json!("fallback"));
        assert_eq!(body["extraContext"], json!("For freelance work"));
    }

    #[tokio::test]
    async fn analyze_purchase_rejects_malformed_cost() {
        let (status, body) = post_json(
            "/api/analyze-purchase",
            json!({ "itemName": "Laptop", "itemCost": "cheap" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("itemCost"));
    }

    #[tokio::test]
    async fn mistyped_fields_get_a_json_error_body() {
        let (status, body) = post_json(
            "/api/analyze-purchase",
            json!({ "itemName": 5, "itemCost": 20 }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body:"));
    }

    #[tokio::test]
    async fn malformed_json_gets_a_json_error_body() {
        let (status, body) = post_raw("/api/analyze", "{\"itemName\": ").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body:"));
    }

    #[tokio::test]
    async fn quick_analysis_uses_basic_defaults() {
        let (status, body) = post_json(
            "/api/analyze",
            json!({ "itemName": "Emergency radio", "itemCost": 60 }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        // ratio 0.06 against the 1000 floor: D=2, O=1; savings goal with an
        // emergency item: G=1; no long-term keyword: L=0; mixed: B=0.
        assert_eq!(body["pds"], json!(4));
        assert_eq!(body["itemName"], json!("Emergency radio"));
        assert!(body.get("extraContext").is_none());
    }

    #[tokio::test]
    async fn factor_catalogue_reflects_configured_labels() {
        let response = router()
            .oneshot(Request::get("/api/factors").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["factors"][0], json!({ "code": "D", "label": "Discretionary Income" }));
        assert_eq!(body["factors"][4]["label"], json!("Impulse Check"));
        assert_eq!(body["pdsRange"], json!([-10, 10]));
        assert_eq!(body["thresholds"], json!({ "buy": 5, "consider": 0 }));
    }
}
