use clap::Args;
use loan_predictor::error::AppError;
use loan_predictor::prediction::{
    ApplicationInput, CreditHistory, Dependents, Education, Gender, Married,
    PredictionBreakdown, PropertyArea, ScoreEngine, SelfEmployed,
};
use loan_predictor::tutor::{ChatTranscript, TutorResponder, QUICK_QUESTIONS};
use std::io::{self, BufRead, Write};

/// Application fields, defaulting to the intake form's starting values.
#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    #[arg(long, default_value = "Male")]
    pub(crate) gender: Gender,
    #[arg(long, default_value = "Yes")]
    pub(crate) married: Married,
    /// 0, 1, 2 or 3+
    #[arg(long, default_value = "0")]
    pub(crate) dependents: Dependents,
    /// Graduate or "Not Graduate"
    #[arg(long, default_value = "Graduate")]
    pub(crate) education: Education,
    #[arg(long, default_value = "No")]
    pub(crate) self_employed: SelfEmployed,
    /// Monthly applicant income
    #[arg(long, default_value_t = 5000)]
    pub(crate) applicant_income: u32,
    /// Monthly co-applicant income
    #[arg(long, default_value_t = 0)]
    pub(crate) coapplicant_income: u32,
    /// Loan amount in thousands
    #[arg(long, default_value_t = 150)]
    pub(crate) loan_amount: u32,
    /// Loan term in months
    #[arg(long, default_value_t = 360, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) loan_amount_term: u32,
    /// 1 for a good repayment record, 0 for poor
    #[arg(long, default_value = "1")]
    pub(crate) credit_history: CreditHistory,
    /// Urban, Semiurban or Rural
    #[arg(long, default_value = "Urban")]
    pub(crate) property_area: PropertyArea,
    /// Print the raw prediction result as JSON instead of the breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

impl PredictArgs {
    pub(crate) fn application(&self) -> ApplicationInput {
        ApplicationInput {
            gender: self.gender,
            married: self.married,
            dependents: self.dependents,
            education: self.education,
            self_employed: self.self_employed,
            applicant_income: self.applicant_income,
            coapplicant_income: self.coapplicant_income,
            loan_amount: self.loan_amount,
            loan_amount_term: self.loan_amount_term,
            credit_history: self.credit_history,
            property_area: self.property_area,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct AskArgs {
    /// Question for the tutor
    #[arg(required = true, num_args = 1..)]
    pub(crate) question: Vec<String>,
}

impl AskArgs {
    pub(crate) fn question(&self) -> String {
        self.question.join(" ")
    }
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let result = ScoreEngine::default().evaluate(&args.application());

    if args.json {
        let rendered = serde_json::to_string_pretty(&result).map_err(io::Error::from)?;
        println!("{rendered}");
    } else {
        println!("{}", PredictionBreakdown::from_result(&result));
    }

    Ok(())
}

pub(crate) fn run_ask(args: AskArgs) -> Result<(), AppError> {
    let responder = TutorResponder::standard();
    println!("{}", responder.answer(&args.question()));
    Ok(())
}

pub(crate) fn run_tutor() -> Result<(), AppError> {
    let responder = TutorResponder::standard();
    let mut transcript = ChatTranscript::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(greeting) = transcript.last() {
        writeln!(stdout, "Tutor: {}", greeting.message)?;
    }
    writeln!(stdout, "\nQuick questions (enter a number or type your own):")?;
    for (index, question) in QUICK_QUESTIONS.iter().enumerate() {
        writeln!(stdout, "  {}. {question}", index + 1)?;
    }

    loop {
        write!(stdout, "\nYou: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if matches!(input, "exit" | "quit") {
            break;
        }

        let question = resolve_quick_question(input).unwrap_or(input);
        if let Some(reply) = transcript.ask(question, &responder) {
            writeln!(stdout, "Tutor: {}", reply.message)?;
        }
    }

    Ok(())
}

fn resolve_quick_question(input: &str) -> Option<&'static str> {
    let index = input.parse::<usize>().ok()?;
    QUICK_QUESTIONS.get(index.checked_sub(1)?).copied()
}
