//! Request payloads accepted over HTTP and their conversion into
//! [`PurchaseInputs`]. Browser forms send numbers as strings, so numeric
//! fields accept either shape.

use crate::error::ValidationError;
use crate::scoring::{PurchaseInputs, PurchaseUrgency};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum NumberField {
    Number(f64),
    Text(String),
}

impl NumberField {
    /// `Ok(None)` for blank text.
    fn parse(self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        let value = match self {
            NumberField::Number(value) => value,
            NumberField::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| ValidationError::NotANumber { field, value: raw })?
            }
        };
        if !value.is_finite() {
            return Err(ValidationError::NotFinite { field });
        }
        Ok(Some(value))
    }
}

fn required_number(
    field: &'static str,
    value: Option<NumberField>,
) -> Result<f64, ValidationError> {
    value
        .map(|number| number.parse(field))
        .transpose()?
        .flatten()
        .ok_or(ValidationError::Missing { field })
}

fn optional_number(
    field: &'static str,
    value: Option<NumberField>,
) -> Result<f64, ValidationError> {
    Ok(value
        .map(|number| number.parse(field))
        .transpose()?
        .flatten()
        .unwrap_or(0.0))
}

fn item_name(raw: Option<String>) -> String {
    raw.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| PurchaseInputs::UNNAMED_ITEM.to_string())
}

/// Advanced form: the full set of financial context.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzePurchaseRequest {
    pub item_name: Option<String>,
    pub item_cost: Option<NumberField>,
    pub leftover_income: Option<NumberField>,
    pub has_high_interest_debt: Option<String>,
    pub main_financial_goal: Option<String>,
    pub purchase_urgency: Option<String>,
    pub extra_context: Option<String>,
}

impl AnalyzePurchaseRequest {
    pub fn into_inputs(self) -> Result<PurchaseInputs, ValidationError> {
        Ok(PurchaseInputs {
            item_name: item_name(self.item_name),
            item_cost: required_number("itemCost", self.item_cost)?,
            leftover_income: optional_number("leftoverIncome", self.leftover_income)?,
            has_high_interest_debt: self.has_high_interest_debt.unwrap_or_default().into(),
            main_financial_goal: self.main_financial_goal.unwrap_or_default(),
            purchase_urgency: PurchaseUrgency::from(self.purchase_urgency.unwrap_or_default()),
            extra_context: self.extra_context.unwrap_or_default(),
        })
    }
}

/// Basic form: item and cost only; the rest comes from
/// [`PurchaseInputs::quick`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAnalysisRequest {
    pub item_name: Option<String>,
    pub item_cost: Option<NumberField>,
}

impl QuickAnalysisRequest {
    pub fn into_inputs(self) -> Result<PurchaseInputs, ValidationError> {
        let item_cost = required_number("itemCost", self.item_cost)?;
        Ok(PurchaseInputs::quick(item_name(self.item_name), item_cost))
    }
}
