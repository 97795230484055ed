use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Dependents, Education, Gender, Married, PropertyArea, SelfEmployed};

pub const OFFERED_TERMS: [u32; 6] = [120, 180, 240, 300, 360, 480];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read loan dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid loan dataset CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("loan dataset is missing the {0} column")]
    MissingColumn(&'static str),
    #[error("loan dataset has no values for {0}")]
    EmptyColumn(&'static str),
    #[error("loan dataset row {row}: {column} value '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Observed spread of a numeric input across the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericRange {
    pub min: i64,
    pub max: i64,
    pub median: i64,
}

impl NumericRange {
    fn from_values(column: &'static str, mut values: Vec<f64>) -> Result<Self, DatasetError> {
        if values.is_empty() {
            return Err(DatasetError::EmptyColumn(column));
        }
        values.sort_by(f64::total_cmp);

        let mid = values.len() / 2;
        let median = if values.len() % 2 == 0 {
            (values[mid - 1] + values[mid]) / 2.0
        } else {
            values[mid]
        };

        Ok(Self {
            min: values[0] as i64,
            max: values[values.len() - 1] as i64,
            median: median as i64,
        })
    }
}

/// Numeric ranges for the free-form amount fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceRanges {
    pub applicant_income: NumericRange,
    pub coapplicant_income: NumericRange,
    pub loan_amount: NumericRange,
}

impl ReferenceRanges {
    /// Ranges of the public loan-prediction training set.
    pub const fn builtin() -> Self {
        Self {
            applicant_income: NumericRange {
                min: 150,
                max: 81_000,
                median: 3_812,
            },
            coapplicant_income: NumericRange {
                min: 0,
                max: 41_667,
                median: 1_188,
            },
            loan_amount: NumericRange {
                min: 9,
                max: 700,
                median: 128,
            },
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Blank cells are skipped, mirroring how missing values are ignored in the source data.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in [APPLICANT_INCOME, COAPPLICANT_INCOME, LOAN_AMOUNT] {
            if !headers.iter().any(|header| header == column) {
                return Err(DatasetError::MissingColumn(column));
            }
        }

        let mut applicant = Vec::new();
        let mut coapplicant = Vec::new();
        let mut loan = Vec::new();

        for (index, record) in csv_reader.deserialize::<DatasetRow>().enumerate() {
            let row = record?;
            let line = index + 1;
            push_number(&mut applicant, row.applicant_income, APPLICANT_INCOME, line)?;
            push_number(&mut coapplicant, row.coapplicant_income, COAPPLICANT_INCOME, line)?;
            push_number(&mut loan, row.loan_amount, LOAN_AMOUNT, line)?;
        }

        Ok(Self {
            applicant_income: NumericRange::from_values(APPLICANT_INCOME, applicant)?,
            coapplicant_income: NumericRange::from_values(COAPPLICANT_INCOME, coapplicant)?,
            loan_amount: NumericRange::from_values(LOAN_AMOUNT, loan)?,
        })
    }
}

impl Default for ReferenceRanges {
    fn default() -> Self {
        Self::builtin()
    }
}

const APPLICANT_INCOME: &str = "ApplicantIncome";
const COAPPLICANT_INCOME: &str = "CoapplicantIncome";
const LOAN_AMOUNT: &str = "LoanAmount";

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "ApplicantIncome", default, deserialize_with = "blank_as_none")]
    applicant_income: Option<String>,
    #[serde(rename = "CoapplicantIncome", default, deserialize_with = "blank_as_none")]
    coapplicant_income: Option<String>,
    #[serde(rename = "LoanAmount", default, deserialize_with = "blank_as_none")]
    loan_amount: Option<String>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty() && value.trim() != "NA"))
}

fn push_number(
    values: &mut Vec<f64>,
    raw: Option<String>,
    column: &'static str,
    row: usize,
) -> Result<(), DatasetError> {
    let Some(raw) = raw else {
        return Ok(());
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            values.push(value);
            Ok(())
        }
        _ => Err(DatasetError::InvalidNumber {
            row,
            column,
            value: raw,
        }),
    }
}

/// Input domains published to the front end so it can build the application form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCatalog {
    pub features: CatalogFeatures,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFeatures {
    #[serde(rename = "Gender")]
    pub gender: Vec<&'static str>,
    #[serde(rename = "Married")]
    pub married: Vec<&'static str>,
    #[serde(rename = "Dependents")]
    pub dependents: Vec<&'static str>,
    #[serde(rename = "Education")]
    pub education: Vec<&'static str>,
    #[serde(rename = "Self_Employed")]
    pub self_employed: Vec<&'static str>,
    #[serde(rename = "Property_Area")]
    pub property_area: Vec<&'static str>,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: NumericRange,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: NumericRange,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: NumericRange,
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: Vec<u32>,
    #[serde(rename = "Credit_History")]
    pub credit_history: Vec<u8>,
}

impl ModelCatalog {
    pub fn new(ranges: ReferenceRanges) -> Self {
        Self {
            features: CatalogFeatures {
                gender: Gender::all().iter().map(|option| option.as_str()).collect(),
                married: Married::all().iter().map(|option| option.as_str()).collect(),
                dependents: Dependents::all().iter().map(|option| option.as_str()).collect(),
                education: Education::all().iter().map(|option| option.as_str()).collect(),
                self_employed: SelfEmployed::all()
                    .iter()
                    .map(|option| option.as_str())
                    .collect(),
                property_area: PropertyArea::all()
                    .iter()
                    .map(|option| option.as_str())
                    .collect(),
                applicant_income: ranges.applicant_income,
                coapplicant_income: ranges.coapplicant_income,
                loan_amount: ranges.loan_amount,
                loan_amount_term: OFFERED_TERMS.to_vec(),
                credit_history: vec![0, 1],
            },
        }
    }

    /// Build from the configured dataset, or the built-in ranges when none is set.
    pub fn load(dataset_path: Option<&Path>) -> Result<Self, DatasetError> {
        let ranges = match dataset_path {
            Some(path) => ReferenceRanges::from_path(path)?,
            None => ReferenceRanges::builtin(),
        };
        Ok(Self::new(ranges))
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new(ReferenceRanges::builtin())
    }
}
