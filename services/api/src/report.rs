use clap::Args;
use purchase_advisor::config::AppConfig;
use purchase_advisor::error::AppError;
use purchase_advisor::scoring::{
    DecisionEngine, FactorLabels, HighInterestDebt, PurchaseInputs, PurchaseUrgency, ScoreCard,
};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Name of the item being considered
    #[arg(long)]
    pub(crate) item: String,
    /// Cost of the item
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) cost: f64,
    /// Monthly leftover income (defaults to 1000 when omitted or zero)
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) income: Option<f64>,
    /// The buyer carries high-interest debt
    #[arg(long)]
    pub(crate) high_interest_debt: bool,
    /// Main financial goal, e.g. "Save for emergencies"
    #[arg(long)]
    pub(crate) goal: Option<String>,
    /// "Urgent Needs", "Mixed" or "Mostly Wants"
    #[arg(long)]
    pub(crate) urgency: Option<String>,
    /// Free-form context shown alongside the result
    #[arg(long)]
    pub(crate) context: Option<String>,
    /// Print the score card as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl ScoreArgs {
    fn into_inputs(self) -> PurchaseInputs {
        PurchaseInputs {
            item_name: self.item,
            item_cost: self.cost,
            leftover_income: self.income.unwrap_or(0.0),
            has_high_interest_debt: if self.high_interest_debt {
                HighInterestDebt::Yes
            } else {
                HighInterestDebt::No
            },
            main_financial_goal: self.goal.unwrap_or_default(),
            purchase_urgency: PurchaseUrgency::from(self.urgency.unwrap_or_default()),
            extra_context: self.context.unwrap_or_default(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct QuickArgs {
    /// Name of the item being considered
    pub(crate) item: String,
    /// Cost of the item
    #[arg(allow_negative_numbers = true)]
    pub(crate) cost: f64,
    /// Print the score card as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a PurchaseInputs,
    #[serde(flatten)]
    card: &'a ScoreCard,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let json = args.json;
    print_report(&args.into_inputs(), json)
}

pub(crate) fn run_quick(args: QuickArgs) -> Result<(), AppError> {
    let inputs = PurchaseInputs::quick(args.item, args.cost);
    print_report(&inputs, args.json)
}

fn print_report(inputs: &PurchaseInputs, json: bool) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = DecisionEngine::new(config.scoring);
    let card = engine.score(inputs);

    if json {
        let body = serde_json::to_string_pretty(&JsonReport {
            inputs,
            card: &card,
        })
        .map_err(std::io::Error::from)?;
        println!("{body}");
    } else {
        print!("{}", render_report(inputs, &card, &engine.config().labels));
    }
    Ok(())
}

pub(crate) fn render_report(
    inputs: &PurchaseInputs,
    card: &ScoreCard,
    labels: &FactorLabels,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Purchase decision for {} (${:.2})",
        inputs.item_name, inputs.item_cost
    );
    if !inputs.extra_context.is_empty() {
        let _ = writeln!(out, "Context: {}", inputs.extra_context);
    }

    let _ = writeln!(out, "\nFactor scores:");
    for (code, value, explanation) in card.factors.iter() {
        let _ = writeln!(out, "  {code} {:<22} {value:+}", labels.label(code));
        if let Some(explanation) = explanation {
            let _ = writeln!(out, "      {explanation}");
        }
    }

    let _ = writeln!(out, "\nPDS: {} (range -10 to 10)", card.pds);
    let _ = writeln!(
        out,
        "Recommendation: {} [{}]",
        card.recommendation.text,
        card.recommendation.tier.label()
    );
    let _ = writeln!(out, "{}", card.verdict.description());
    out
}
