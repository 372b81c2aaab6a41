use crate::scoring::{
    DecisionEngine, FactorCode, FactorScores, HighInterestDebt, PurchaseInputs, PurchaseUrgency,
    ScoringConfig, Thresholds,
};

/// Affordable, neutral purchase: every rule lands on its middle branch
/// unless a test overrides a field.
pub(super) fn inputs(item_name: &str, item_cost: f64, leftover_income: f64) -> PurchaseInputs {
    PurchaseInputs {
        item_name: item_name.to_string(),
        item_cost,
        leftover_income,
        has_high_interest_debt: HighInterestDebt::No,
        main_financial_goal: "Travel more".to_string(),
        purchase_urgency: PurchaseUrgency::Mixed,
        extra_context: String::new(),
    }
}

pub(super) fn factors(d: i8, o: i8, g: i8, l: i8, b: i8) -> FactorScores {
    let mut factors = FactorScores::new();
    factors.set(FactorCode::D, d);
    factors.set(FactorCode::O, o);
    factors.set(FactorCode::G, g);
    factors.set(FactorCode::L, l);
    factors.set(FactorCode::B, b);
    factors
}

pub(super) fn engine_with_thresholds(buy: i16, consider: i16) -> DecisionEngine {
    DecisionEngine::new(ScoringConfig {
        thresholds: Thresholds { buy, consider },
        ..ScoringConfig::default()
    })
}

/// Cartesian sample across the inputs that steer the rules.
pub(super) fn input_grid() -> Vec<PurchaseInputs> {
    let names = [
        "Laptop computer",
        "Health insurance",
        "Luxury watch",
        "Streaming service",
        "Emergency fund kit",
        "Business course",
        "Sandwich",
    ];
    let goals = [
        "Save for emergencies",
        "Pay off debt",
        "Invest in my business",
        "Improve health",
        "",
    ];
    let costs = [-50.0, 0.0, 100.0, 499.0, 1500.0, 2500.0, 1.0e9];
    let incomes = [0.0, 2000.0, -300.0, f64::NAN];
    let urgencies = [
        PurchaseUrgency::UrgentNeeds,
        PurchaseUrgency::Mixed,
        PurchaseUrgency::MostlyWants,
        PurchaseUrgency::Unspecified,
        PurchaseUrgency::Other("Someday".to_string()),
    ];

    let mut grid = Vec::new();
    for name in names {
        for goal in goals {
            for cost in costs {
                for income in incomes {
                    for urgency in &urgencies {
                        for debt in [HighInterestDebt::Yes, HighInterestDebt::No] {
                            grid.push(PurchaseInputs {
                                item_name: name.to_string(),
                                item_cost: cost,
                                leftover_income: income,
                                has_high_interest_debt: debt,
                                main_financial_goal: goal.to_string(),
                                purchase_urgency: urgency.clone(),
                                extra_context: String::new(),
                            });
                        }
                    }
                }
            }
        }
    }
    grid
}
