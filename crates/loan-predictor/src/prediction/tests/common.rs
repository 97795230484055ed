use axum::response::Response;
use serde_json::{json, Value};

use crate::prediction::domain::{
    ApplicationInput, CreditHistory, Dependents, Education, Gender, Married, PropertyArea,
    SelfEmployed,
};

/// The intake form's default application.
pub(super) fn application() -> ApplicationInput {
    ApplicationInput {
        gender: Gender::Male,
        married: Married::Yes,
        dependents: Dependents::Zero,
        education: Education::Graduate,
        self_employed: SelfEmployed::No,
        applicant_income: 5000,
        coapplicant_income: 0,
        loan_amount: 150,
        loan_amount_term: 360,
        credit_history: CreditHistory::Good,
        property_area: PropertyArea::Urban,
    }
}

pub(super) fn application_json() -> Value {
    json!({
        "Gender": "Male",
        "Married": "Yes",
        "Dependents": "0",
        "Education": "Graduate",
        "Self_Employed": "No",
        "ApplicantIncome": 5000,
        "CoapplicantIncome": 0,
        "LoanAmount": 150,
        "Loan_Amount_Term": 360,
        "Credit_History": 1,
        "Property_Area": "Urban"
    })
}

pub(super) fn with_field(field: &str, value: Value) -> Value {
    let mut payload = application_json();
    payload
        .as_object_mut()
        .expect("fixture is an object")
        .insert(field.to_string(), value);
    payload
}

pub(super) fn without_field(field: &str) -> Value {
    let mut payload = application_json();
    payload
        .as_object_mut()
        .expect("fixture is an object")
        .remove(field);
    payload
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("valid json")
}
