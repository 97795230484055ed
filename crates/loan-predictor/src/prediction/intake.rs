use std::str::FromStr;

use serde_json::{Map, Value};

use super::domain::{
    ApplicationInput, CreditHistory, Dependents, Education, Gender, Married, PropertyArea,
    SelfEmployed, UnknownOption,
};

/// Validation errors raised before an application reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputViolation {
    #[error("application payload must be a JSON object")]
    NotAnObject,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} must be a whole number")]
    NotNumeric(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
    #[error("Loan_Amount_Term must be greater than zero")]
    NonPositiveTerm,
    #[error("Credit_History must be 0 or 1, found {0}")]
    CreditHistoryOutOfRange(u64),
    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),
}

impl InputViolation {
    /// Name of the offending field, when the violation concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            InputViolation::NotAnObject => None,
            InputViolation::MissingField(field)
            | InputViolation::NotNumeric(field)
            | InputViolation::Negative(field) => Some(field),
            InputViolation::NonPositiveTerm => Some("Loan_Amount_Term"),
            InputViolation::CreditHistoryOutOfRange(_) => Some(CreditHistory::FIELD),
            InputViolation::UnknownOption(err) => Some(err.field),
        }
    }
}

/// Guard responsible for producing `ApplicationInput` values from raw request bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    /// Check fields in form order and build a typed application.
    pub fn application_from_json(
        &self,
        payload: &Value,
    ) -> Result<ApplicationInput, InputViolation> {
        let fields = payload.as_object().ok_or(InputViolation::NotAnObject)?;

        let gender = categorical::<Gender>(fields, Gender::FIELD)?;
        let married = categorical::<Married>(fields, Married::FIELD)?;
        let dependents = dependents(fields)?;
        let education = categorical::<Education>(fields, Education::FIELD)?;
        let self_employed = categorical::<SelfEmployed>(fields, SelfEmployed::FIELD)?;
        let applicant_income = amount(fields, "ApplicantIncome")?;
        let coapplicant_income = amount(fields, "CoapplicantIncome")?;
        let loan_amount = amount(fields, "LoanAmount")?;

        let loan_amount_term = amount(fields, "Loan_Amount_Term")?;
        if loan_amount_term == 0 {
            return Err(InputViolation::NonPositiveTerm);
        }

        let credit_flag = whole_number(fields, CreditHistory::FIELD)?;
        let credit_history = u8::try_from(credit_flag)
            .ok()
            .and_then(CreditHistory::from_flag)
            .ok_or(InputViolation::CreditHistoryOutOfRange(credit_flag))?;

        let property_area = categorical::<PropertyArea>(fields, PropertyArea::FIELD)?;

        Ok(ApplicationInput {
            gender,
            married,
            dependents,
            education,
            self_employed,
            applicant_income,
            coapplicant_income,
            loan_amount,
            loan_amount_term,
            credit_history,
            property_area,
        })
    }
}

fn present<'a>(
    fields: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, InputViolation> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(InputViolation::MissingField(field)),
        Some(Value::String(text)) if text.trim().is_empty() => {
            Err(InputViolation::MissingField(field))
        }
        Some(value) => Ok(value),
    }
}

fn categorical<T>(fields: &Map<String, Value>, field: &'static str) -> Result<T, InputViolation>
where
    T: FromStr<Err = UnknownOption>,
{
    match present(fields, field)? {
        Value::String(text) => Ok(text.parse::<T>()?),
        other => Err(UnknownOption {
            field,
            value: other.to_string(),
        }
        .into()),
    }
}

fn dependents(fields: &Map<String, Value>) -> Result<Dependents, InputViolation> {
    let value = present(fields, Dependents::FIELD)?;
    let unknown = || UnknownOption {
        field: Dependents::FIELD,
        value: value.to_string(),
    };

    match value {
        Value::String(text) => Ok(text.parse::<Dependents>()?),
        Value::Number(number) => match number.as_u64() {
            Some(0) => Ok(Dependents::Zero),
            Some(1) => Ok(Dependents::One),
            Some(2) => Ok(Dependents::Two),
            _ => Err(unknown().into()),
        },
        _ => Err(unknown().into()),
    }
}

fn whole_number(fields: &Map<String, Value>, field: &'static str) -> Result<u64, InputViolation> {
    let Value::Number(number) = present(fields, field)? else {
        return Err(InputViolation::NotNumeric(field));
    };

    if let Some(value) = number.as_u64() {
        return Ok(value);
    }

    let negative = number
        .as_i64()
        .map(|value| value < 0)
        .or_else(|| number.as_f64().map(|value| value < 0.0))
        .unwrap_or(false);
    if negative {
        Err(InputViolation::Negative(field))
    } else {
        Err(InputViolation::NotNumeric(field))
    }
}

fn amount(fields: &Map<String, Value>, field: &'static str) -> Result<u32, InputViolation> {
    let value = whole_number(fields, field)?;
    u32::try_from(value).map_err(|_| InputViolation::NotNumeric(field))
}
