use crate::commands::{run_ask, run_predict, run_tutor, AskArgs, PredictArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_predictor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Predictor",
    about = "Score loan applications, explain the result, and chat with the loan tutor",
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
    /// Score a single application and print the explanation breakdown
    Predict(PredictArgs),
    /// Ask the loan tutor one question
    Ask(AskArgs),
    /// Start an interactive tutor session on stdin
    Tutor,
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
        Command::Predict(args) => run_predict(args),
        Command::Ask(args) => run_ask(args),
        Command::Tutor => run_tutor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["loan-predictor"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn predict_accepts_form_values() {
        let cli = Cli::try_parse_from([
            "loan-predictor",
            "predict",
            "--education",
            "Not Graduate",
            "--dependents",
            "3+",
            "--credit-history",
            "0",
            "--applicant-income",
            "4200",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Predict(args)) => {
                let input = args.application();
                assert_eq!(input.applicant_income, 4200);
                assert_eq!(input.dependents.as_str(), "3+");
                assert_eq!(input.education.as_str(), "Not Graduate");
                assert_eq!(input.credit_history.flag(), 0);
                assert_eq!(input.loan_amount, 150);
            }
            other => panic!("expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_unknown_options() {
        let err = Cli::try_parse_from(["loan-predictor", "predict", "--property-area", "Suburb"])
            .expect_err("not a valid area");
        assert!(err.to_string().contains("Suburb"));
    }

    #[test]
    fn ask_joins_question_words() {
        let cli = Cli::try_parse_from(["loan-predictor", "ask", "why", "was", "I", "denied?"])
            .expect("parses");
        match cli.command {
            Some(Command::Ask(args)) => assert_eq!(args.question(), "why was I denied?"),
            other => panic!("expected ask command, got {other:?}"),
        }
    }
}
