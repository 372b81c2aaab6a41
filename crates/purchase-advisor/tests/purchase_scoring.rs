use purchase_advisor::analysis::FactorPayload;
use purchase_advisor::scoring::{
    compute_pds, get_recommendation, score_purchase, DecisionEngine, FactorCode, FactorScores,
    HighInterestDebt, PurchaseInputs, PurchaseUrgency, RecommendationTier,
};
use serde_json::json;

fn purchase(item_name: &str, item_cost: f64, leftover_income: f64) -> PurchaseInputs {
    PurchaseInputs {
        item_name: item_name.to_string(),
        item_cost,
        leftover_income,
        has_high_interest_debt: HighInterestDebt::No,
        main_financial_goal: String::new(),
        purchase_urgency: PurchaseUrgency::Mixed,
        extra_context: String::new(),
    }
}

#[test]
fn documented_factor_scenarios_hold() {
    assert_eq!(
        score_purchase(&purchase("Sandwich", 100.0, 2000.0)).get(FactorCode::D),
        2
    );
    assert_eq!(
        score_purchase(&purchase("Sandwich", 2500.0, 2000.0)).get(FactorCode::D),
        -2
    );

    let mut indebted = purchase("Sandwich", 10.0, 2000.0);
    indebted.has_high_interest_debt = HighInterestDebt::Yes;
    assert_eq!(score_purchase(&indebted).get(FactorCode::O), -2);

    let mut emergency = purchase("Emergency fund kit", 100.0, 2000.0);
    emergency.main_financial_goal = "Save for emergencies".to_string();
    assert_eq!(score_purchase(&emergency).get(FactorCode::G), 1);

    assert_eq!(
        score_purchase(&purchase("Laptop computer", 100.0, 2000.0)).get(FactorCode::L),
        1
    );

    let mut wants = purchase("Designer bag", 1500.0, 2000.0);
    wants.purchase_urgency = PurchaseUrgency::MostlyWants;
    assert_eq!(score_purchase(&wants).get(FactorCode::B), -2);

    let mut aggregate = FactorScores::new();
    for (code, value) in [
        (FactorCode::D, 2),
        (FactorCode::O, 1),
        (FactorCode::G, 1),
        (FactorCode::L, 1),
        (FactorCode::B, 0),
    ] {
        aggregate.set(code, value);
    }
    let pds = compute_pds(&aggregate);
    assert_eq!(pds, 5);
    let recommendation = get_recommendation(pds);
    assert_eq!(recommendation.text, "Buy it.");
    assert_eq!(recommendation.tier, RecommendationTier::Positive);
}

#[test]
fn inputs_deserialize_from_form_payload() {
    let inputs: PurchaseInputs = serde_json::from_value(json!({
        "itemName": "Power tool set",
        "itemCost": 240.0,
        "leftoverIncome": 1200.0,
        "hasHighInterestDebt": "Yes",
        "mainFinancialGoal": "Start a business",
        "purchaseUrgency": "Urgent Needs",
        "extraContext": "Contract work next month"
    }))
    .expect("inputs parse");

    assert!(inputs.has_high_interest_debt());
    assert_eq!(inputs.purchase_urgency, PurchaseUrgency::UrgentNeeds);

    let card = DecisionEngine::default().score(&inputs);
    // ratio 0.2: D=1, debt: O=-2, business goal w/o business item: G=-1,
    // tool: L=1, urgent: B=2.
    assert_eq!(card.pds, 1);
    assert_eq!(card.recommendation.tier, RecommendationTier::Neutral);
}

#[test]
fn sparse_payload_falls_back_to_defaults() {
    let inputs: PurchaseInputs =
        serde_json::from_value(json!({ "itemName": "Vacation", "itemCost": 600 }))
            .expect("inputs parse");

    assert_eq!(inputs.effective_leftover_income(), 1000.0);
    assert_eq!(inputs.has_high_interest_debt, HighInterestDebt::No);
    assert_eq!(inputs.purchase_urgency, PurchaseUrgency::Unspecified);

    let factors = score_purchase(&inputs);
    assert_eq!(factors.get(FactorCode::D), -1);
    assert_eq!(factors.get(FactorCode::L), -1);
    assert_eq!(factors.get(FactorCode::B), 0);
}

#[test]
fn unknown_debt_and_urgency_answers_are_neutral() {
    let inputs: PurchaseInputs = serde_json::from_value(json!({
        "itemName": "Gadget",
        "itemCost": 10,
        "leftoverIncome": 2000,
        "hasHighInterestDebt": "yes",
        "purchaseUrgency": "Whenever"
    }))
    .expect("inputs parse");

    assert_eq!(inputs.has_high_interest_debt, HighInterestDebt::No);
    assert_eq!(
        inputs.purchase_urgency,
        PurchaseUrgency::Other("Whenever".to_string())
    );
    let factors = score_purchase(&inputs);
    assert_eq!(factors.get(FactorCode::O), 1);
    assert_eq!(factors.get(FactorCode::B), 0);
    assert!(factors
        .explanation(FactorCode::B)
        .expect("behavioral explanation")
        .contains("whenever"));
}

#[test]
fn quick_inputs_apply_basic_form_defaults() {
    let cheap = PurchaseInputs::quick("  Headphones ", 120.0);
    assert_eq!(cheap.item_name, "Headphones");
    assert_eq!(cheap.leftover_income, 1000.0);
    assert_eq!(cheap.main_financial_goal, "Save for emergencies");
    assert_eq!(cheap.purchase_urgency, PurchaseUrgency::Mixed);

    let pricey = PurchaseInputs::quick("", 4000.0);
    assert_eq!(pricey.item_name, "Unnamed");
    assert_eq!(pricey.leftover_income, 8000.0);
    // Doubled income keeps the ratio at 0.5 for anything above 500.
    assert_eq!(score_purchase(&pricey).get(FactorCode::D), -1);
}

#[test]
fn factor_scores_round_trip_through_json() {
    let factors = score_purchase(&purchase("Laptop computer", 100.0, 2000.0));
    let value = serde_json::to_value(&factors).expect("factors serialize");

    assert_eq!(value["L"], json!(1));
    assert!(value["D_explanation"].is_string());
    assert!(value.get("scores").is_none());

    let decoded: FactorScores = serde_json::from_value(value).expect("factors deserialize");
    assert_eq!(decoded, factors);
}

#[test]
fn serialized_factors_are_accepted_as_a_remote_payload() {
    let factors = score_purchase(&purchase("Laptop computer", 100.0, 2000.0));
    let payload: FactorPayload =
        serde_json::from_value(serde_json::to_value(&factors).expect("factors serialize"))
            .expect("payload parses");

    assert_eq!(payload.into_scores().expect("complete payload"), factors);
}

#[test]
fn flat_factor_json_rejects_mistyped_values() {
    let decoded: FactorScores = serde_json::from_value(json!({
        "D": 2, "D_explanation": "cheap", "image": "ignored"
    }))
    .expect("unknown keys ignored");
    assert_eq!(decoded.get(FactorCode::D), 2);
    assert!(!decoded.contains(FactorCode::O));

    let err = serde_json::from_value::<FactorScores>(json!({ "D": "two" }))
        .expect_err("string score rejected");
    assert!(err.to_string().contains("factor D must be an integer"));
}
