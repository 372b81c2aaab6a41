use super::domain::{PurchaseInputs, PurchaseUrgency};

pub(crate) fn discretionary(inputs: &PurchaseInputs, score: i8) -> String {
    let fit = if score > 0 { "fits well" } else { "might strain" };
    format!(
        "With your monthly leftover income of ${:.2}, this purchase {fit} your budget.",
        inputs.effective_leftover_income()
    )
}

pub(crate) fn opportunity(inputs: &PurchaseInputs, score: i8) -> String {
    let lead = if score > 0 {
        "Good use of funds compared to alternatives"
    } else {
        "Consider if there are better uses for this money"
    };
    let tail = if inputs.has_high_interest_debt() {
        ", especially with your high-interest debt."
    } else {
        "."
    };
    format!("{lead}{tail}")
}

pub(crate) fn goal_alignment(inputs: &PurchaseInputs, score: i8) -> String {
    let verb = if score > 0 {
        "aligns with"
    } else {
        "may not directly support"
    };
    let goal = inputs.main_financial_goal.trim();
    if goal.is_empty() {
        format!("This purchase {verb} your financial goals.")
    } else {
        format!("This purchase {verb} your goal to {goal}.")
    }
}

pub(crate) fn long_term(score: i8) -> String {
    let lead = if score > 0 {
        "This may provide long-term value"
    } else {
        "Consider the long-term benefits, which seem limited"
    };
    format!("{lead} based on the nature of the item.")
}

pub(crate) fn behavioral(inputs: &PurchaseInputs, score: i8) -> String {
    let kind = match &inputs.purchase_urgency {
        PurchaseUrgency::Unspecified => "a mixed need/want".to_string(),
        other => other.label().unwrap_or_default().to_lowercase(),
    };
    let outcome = if score > 0 {
        "justifies the purchase"
    } else {
        "suggests you might want to reconsider"
    };
    format!("This appears to be {kind}, which {outcome}.")
}
