use crate::report::{run_quick, run_score, QuickArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use purchase_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Purchase Advisor",
    about = "Score prospective purchases and serve the purchase advisor API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a purchase against the full set of financial inputs
    Score(ScoreArgs),
    /// Score a purchase from just its name and cost
    Quick(QuickArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Quick(args) => run_quick(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["purchase-advisor"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_full_inputs() {
        let cli = Cli::try_parse_from([
            "purchase-advisor",
            "score",
            "--item",
            "Standing desk",
            "--cost",
            "350",
            "--income",
            "1500",
            "--high-interest-debt",
            "--goal",
            "Save for emergencies",
            "--urgency",
            "Mostly Wants",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.item, "Standing desk");
                assert_eq!(args.cost, 350.0);
                assert_eq!(args.income, Some(1500.0));
                assert!(args.high_interest_debt);
                assert_eq!(args.urgency.as_deref(), Some("Mostly Wants"));
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn quick_takes_positional_item_and_cost() {
        let cli = Cli::try_parse_from(["purchase-advisor", "quick", "Headphones", "120"])
            .expect("parses");

        match cli.command {
            Some(Command::Quick(args)) => {
                assert_eq!(args.item, "Headphones");
                assert_eq!(args.cost, 120.0);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
