use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Raised when categorical text falls outside the field's closed domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field} option")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

macro_rules! categorical {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const FIELD: &'static str = $field;

            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

categorical!(Gender, "Gender", { Male => "Male", Female => "Female" });
categorical!(Married, "Married", { Yes => "Yes", No => "No" });
categorical!(
    /// Number of dependents; the top bucket is open ended.
    Dependents, "Dependents", { Zero => "0", One => "1", Two => "2", ThreePlus => "3+" }
);
categorical!(Education, "Education", { Graduate => "Graduate", NotGraduate => "Not Graduate" });
categorical!(SelfEmployed, "Self_Employed", { Yes => "Yes", No => "No" });
categorical!(
    PropertyArea, "Property_Area", { Urban => "Urban", Semiurban => "Semiurban", Rural => "Rural" }
);

/// Repayment track record, carried on the wire as `1` (good) or `0` (poor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditHistory {
    Poor,
    Good,
}

impl CreditHistory {
    pub const FIELD: &'static str = "Credit_History";

    pub const fn flag(self) -> u8 {
        match self {
            CreditHistory::Poor => 0,
            CreditHistory::Good => 1,
        }
    }

    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(CreditHistory::Poor),
            1 => Some(CreditHistory::Good),
            _ => None,
        }
    }
}

impl FromStr for CreditHistory {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_flag)
            .ok_or_else(|| UnknownOption {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }
}

impl Serialize for CreditHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.flag())
    }
}

/// A loan application exactly as collected by the intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationInput {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Married")]
    pub married: Married,
    #[serde(rename = "Dependents")]
    pub dependents: Dependents,
    #[serde(rename = "Education")]
    pub education: Education,
    #[serde(rename = "Self_Employed")]
    pub self_employed: SelfEmployed,
    /// Monthly income in currency units.
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: u32,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: u32,
    /// Requested amount in thousands of currency units.
    #[serde(rename = "LoanAmount")]
    pub loan_amount: u32,
    /// Term in months, always positive.
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: u32,
    #[serde(rename = "Credit_History")]
    pub credit_history: CreditHistory,
    #[serde(rename = "Property_Area")]
    pub property_area: PropertyArea,
}

impl ApplicationInput {
    pub fn total_income(&self) -> u64 {
        u64::from(self.applicant_income) + u64::from(self.coapplicant_income)
    }
}

/// The eight illustrative features reported alongside every decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureName {
    CreditHistory,
    ApplicantIncome,
    LoanAmount,
    EducationGraduate,
    PropertyAreaUrban,
    MarriedYes,
    CoapplicantIncome,
    SelfEmployedYes,
}

impl FeatureName {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::CreditHistory,
            Self::ApplicantIncome,
            Self::LoanAmount,
            Self::EducationGraduate,
            Self::PropertyAreaUrban,
            Self::MarriedYes,
            Self::CoapplicantIncome,
            Self::SelfEmployedYes,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::CreditHistory => "Credit_History",
            Self::ApplicantIncome => "ApplicantIncome",
            Self::LoanAmount => "LoanAmount",
            Self::EducationGraduate => "Education_Graduate",
            Self::PropertyAreaUrban => "Property_Area_Urban",
            Self::MarriedYes => "Married_Yes",
            Self::CoapplicantIncome => "CoapplicantIncome",
            Self::SelfEmployedYes => "Self_Employed_Yes",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditHistory => "Credit History",
            Self::ApplicantIncome => "Applicant Income",
            Self::LoanAmount => "Loan Amount",
            Self::EducationGraduate => "Education (Graduate)",
            Self::PropertyAreaUrban => "Property Area (Urban)",
            Self::MarriedYes => "Married Status",
            Self::CoapplicantIncome => "Co-applicant Income",
            Self::SelfEmployedYes => "Self Employed",
        }
    }
}

impl Serialize for FeatureName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

/// Signed per-feature contributions, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureImportance {
    entries: Vec<(FeatureName, f64)>,
}

impl FeatureImportance {
    pub(crate) fn from_entries(entries: Vec<(FeatureName, f64)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(FeatureName, f64)] {
        &self.entries
    }

    pub fn get(&self, feature: FeatureName) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureImportance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name.key(), value)?;
        }
        map.end()
    }
}

/// Display probabilities; `approved + rejected == 1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Probability {
    pub approved: f64,
    pub rejected: f64,
}

impl Probability {
    pub fn from_approved(approved: f64) -> Self {
        Self {
            approved,
            rejected: 1.0 - approved,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanDecision {
    Approved,
    Rejected,
}

impl LoanDecision {
    pub const fn flag(self) -> u8 {
        match self {
            LoanDecision::Approved => 1,
            LoanDecision::Rejected => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LoanDecision::Approved => "Approved",
            LoanDecision::Rejected => "Rejected",
        }
    }
}

/// Engine output as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub prediction_text: &'static str,
    pub probability: Probability,
    pub feature_importance: FeatureImportance,
}

impl PredictionResult {
    pub(crate) fn new(
        decision: LoanDecision,
        probability: Probability,
        feature_importance: FeatureImportance,
    ) -> Self {
        Self {
            prediction: decision.flag(),
            prediction_text: decision.label(),
            probability,
            feature_importance,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.prediction == LoanDecision::Approved.flag()
    }
}
