use serde::de::{self, IgnoredAny};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Substituted for a missing, zero, or non-numeric leftover income.
pub const DEFAULT_LEFTOVER_INCOME: f64 = 1000.0;

pub const FACTOR_MIN: i8 = -2;
pub const FACTOR_MAX: i8 = 2;

/// Purchase and financial context submitted for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInputs {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub item_cost: f64,
    /// Monthly discretionary income. Zero means "not provided".
    #[serde(default)]
    pub leftover_income: f64,
    #[serde(default)]
    pub has_high_interest_debt: HighInterestDebt,
    #[serde(default)]
    pub main_financial_goal: String,
    #[serde(default)]
    pub purchase_urgency: PurchaseUrgency,
    /// Carried through for display; never read by the scoring rules.
    #[serde(default)]
    pub extra_context: String,
}

impl PurchaseInputs {
    pub const QUICK_GOAL: &'static str = "Save for emergencies";
    pub const UNNAMED_ITEM: &'static str = "Unnamed";

    /// Inputs for the basic form, which only asks for the item and its cost.
    pub fn quick(item_name: impl Into<String>, item_cost: f64) -> Self {
        let item_name = item_name.into();
        let item_name = if item_name.trim().is_empty() {
            Self::UNNAMED_ITEM.to_string()
        } else {
            item_name.trim().to_string()
        };

        Self {
            item_name,
            item_cost,
            leftover_income: DEFAULT_LEFTOVER_INCOME.max(item_cost * 2.0),
            has_high_interest_debt: HighInterestDebt::No,
            main_financial_goal: Self::QUICK_GOAL.to_string(),
            purchase_urgency: PurchaseUrgency::Mixed,
            extra_context: String::new(),
        }
    }

    pub fn effective_leftover_income(&self) -> f64 {
        if self.leftover_income == 0.0 || self.leftover_income.is_nan() {
            DEFAULT_LEFTOVER_INCOME
        } else {
            self.leftover_income
        }
    }

    /// Cost-to-income ratio. Negative costs yield a negative ratio, which the
    /// rules treat as very affordable.
    pub fn cost_to_income_ratio(&self) -> f64 {
        self.item_cost / self.effective_leftover_income()
    }

    pub fn has_high_interest_debt(&self) -> bool {
        self.has_high_interest_debt == HighInterestDebt::Yes
    }
}

/// `"Yes"` on the wire means the buyer carries high-interest debt; any other
/// value is read as `No`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HighInterestDebt {
    Yes,
    #[default]
    No,
}

impl From<String> for HighInterestDebt {
    fn from(value: String) -> Self {
        if value == "Yes" {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl From<HighInterestDebt> for String {
    fn from(value: HighInterestDebt) -> Self {
        match value {
            HighInterestDebt::Yes => "Yes".to_string(),
            HighInterestDebt::No => "No".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PurchaseUrgency {
    UrgentNeeds,
    Mixed,
    MostlyWants,
    /// Free text outside the three known answers; scored as neutral.
    Other(String),
    #[default]
    Unspecified,
}

impl PurchaseUrgency {
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::UrgentNeeds => Some("Urgent Needs"),
            Self::Mixed => Some("Mixed"),
            Self::MostlyWants => Some("Mostly Wants"),
            Self::Other(text) => Some(text.as_str()),
            Self::Unspecified => None,
        }
    }
}

impl From<String> for PurchaseUrgency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Urgent Needs" => Self::UrgentNeeds,
            "Mixed" => Self::Mixed,
            "Mostly Wants" => Self::MostlyWants,
            "" => Self::Unspecified,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for PurchaseUrgency {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PurchaseUrgency> for String {
    fn from(value: PurchaseUrgency) -> Self {
        value.label().unwrap_or_default().to_string()
    }
}

/// The five scored dimensions, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FactorCode {
    D,
    O,
    G,
    L,
    B,
}

impl FactorCode {
    pub const fn ordered() -> [Self; 5] {
        [Self::D, Self::O, Self::G, Self::L, Self::B]
    }

    pub const fn default_label(self) -> &'static str {
        match self {
            Self::D => "Discretionary Income",
            Self::O => "Opportunity Cost",
            Self::G => "Goal Alignment",
            Self::L => "Long-Term Impact",
            Self::B => "Behavioral",
        }
    }

    /// Wire key carrying the explanation for this factor.
    pub const fn explanation_key(self) -> &'static str {
        match self {
            Self::D => "D_explanation",
            Self::O => "O_explanation",
            Self::G => "G_explanation",
            Self::L => "L_explanation",
            Self::B => "B_explanation",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::O => "O",
            Self::G => "G",
            Self::L => "L",
            Self::B => "B",
        }
    }
}

impl fmt::Display for FactorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-factor scores with an explanation sentence for each.
///
/// On the wire this is a flat object: `{"D": 1, "D_explanation": "...", ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorScores {
    scores: BTreeMap<FactorCode, i8>,
    explanations: BTreeMap<FactorCode, String>,
}

impl FactorScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, code: FactorCode, value: i8) {
        self.scores.insert(code, value);
    }

    pub fn explain(&mut self, code: FactorCode, text: impl Into<String>) {
        self.explanations.insert(code, text.into());
    }

    /// Score for `code`, or 0 when the factor was never set.
    pub fn get(&self, code: FactorCode) -> i8 {
        self.scores.get(&code).copied().unwrap_or(0)
    }

    pub fn contains(&self, code: FactorCode) -> bool {
        self.scores.contains_key(&code)
    }

    pub fn explanation(&self, code: FactorCode) -> Option<&str> {
        self.explanations.get(&code).map(String::as_str)
    }

    /// First factor, in presentation order, that was never set.
    pub fn first_missing(&self) -> Option<FactorCode> {
        FactorCode::ordered()
            .into_iter()
            .find(|code| !self.contains(*code))
    }

    /// First factor whose value falls outside `[-2, 2]`.
    pub fn out_of_range(&self) -> Option<(FactorCode, i8)> {
        self.scores
            .iter()
            .find(|(_, value)| !(FACTOR_MIN..=FACTOR_MAX).contains(*value))
            .map(|(code, value)| (*code, *value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactorCode, i8, Option<&str>)> + '_ {
        FactorCode::ordered()
            .into_iter()
            .map(move |code| (code, self.get(code), self.explanation(code)))
    }
}

impl Serialize for FactorScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map =
            serializer.serialize_map(Some(self.scores.len() + self.explanations.len()))?;
        for code in FactorCode::ordered() {
            if let Some(value) = self.scores.get(&code) {
                map.serialize_entry(code.as_str(), value)?;
            }
            if let Some(text) = self.explanations.get(&code) {
                map.serialize_entry(code.explanation_key(), text)?;
            }
        }
        map.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlatEntry {
    Score(i8),
    Text(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for FactorScores {
    /// Unknown keys are ignored; a factor key must hold an integer and an
    /// explanation key a string.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = BTreeMap::<String, FlatEntry>::deserialize(deserializer)?;
        let mut factors = FactorScores::new();

        for code in FactorCode::ordered() {
            match entries.remove(code.as_str()) {
                Some(FlatEntry::Score(value)) => factors.set(code, value),
                Some(_) => {
                    return Err(de::Error::custom(format!(
                        "factor {code} must be an integer"
                    )))
                }
                None => {}
            }
            match entries.remove(code.explanation_key()) {
                Some(FlatEntry::Text(text)) => factors.explain(code, text),
                Some(_) => {
                    return Err(de::Error::custom(format!(
                        "{} must be a string",
                        code.explanation_key()
                    )))
                }
                None => {}
            }
        }
        Ok(factors)
    }
}
