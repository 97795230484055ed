use super::common::*;
use serde_json::json;

use crate::prediction::domain::{Dependents, Education, UnknownOption};
use crate::prediction::intake::{InputViolation, IntakeGuard};

#[test]
fn accepts_form_payload() {
    let input = IntakeGuard
        .application_from_json(&application_json())
        .expect("payload is valid");

    assert_eq!(input, application());
}

#[test]
fn accepts_open_ended_dependents_and_numeric_buckets() {
    let input = IntakeGuard
        .application_from_json(&with_field("Dependents", json!("3+")))
        .expect("3+ is a valid bucket");
    assert_eq!(input.dependents, Dependents::ThreePlus);

    let input = IntakeGuard
        .application_from_json(&with_field("Dependents", json!(2)))
        .expect("numeric bucket accepted");
    assert_eq!(input.dependents, Dependents::Two);

    let err = IntakeGuard
        .application_from_json(&with_field("Dependents", json!(3)))
        .expect_err("3 must be sent as 3+");
    assert_eq!(err.field(), Some("Dependents"));
}

#[test]
fn not_graduate_text_is_recognized() {
    let input = IntakeGuard
        .application_from_json(&with_field("Education", json!("Not Graduate")))
        .expect("valid education");
    assert_eq!(input.education, Education::NotGraduate);
}

#[test]
fn rejects_non_object_payloads() {
    assert_eq!(
        IntakeGuard.application_from_json(&json!([1, 2, 3])),
        Err(InputViolation::NotAnObject)
    );
}

#[test]
fn rejects_missing_null_and_blank_fields() {
    assert_eq!(
        IntakeGuard.application_from_json(&without_field("LoanAmount")),
        Err(InputViolation::MissingField("LoanAmount"))
    );
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("Married", json!(null))),
        Err(InputViolation::MissingField("Married"))
    );
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("Property_Area", json!("   "))),
        Err(InputViolation::MissingField("Property_Area"))
    );
}

#[test]
fn reports_first_failing_field_in_form_order() {
    let mut payload = without_field("Gender");
    payload
        .as_object_mut()
        .expect("object")
        .remove("Credit_History");

    assert_eq!(
        IntakeGuard.application_from_json(&payload),
        Err(InputViolation::MissingField("Gender"))
    );
}

#[test]
fn rejects_non_numeric_amounts() {
    for value in [json!("5000"), json!(true), json!(5000.5), json!(4_294_967_296u64)] {
        assert_eq!(
            IntakeGuard.application_from_json(&with_field("ApplicantIncome", value)),
            Err(InputViolation::NotNumeric("ApplicantIncome"))
        );
    }
}

#[test]
fn rejects_negative_amounts() {
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("CoapplicantIncome", json!(-1))),
        Err(InputViolation::Negative("CoapplicantIncome"))
    );
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("LoanAmount", json!(-12.5))),
        Err(InputViolation::Negative("LoanAmount"))
    );
}

#[test]
fn rejects_zero_term_and_out_of_range_credit_history() {
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("Loan_Amount_Term", json!(0))),
        Err(InputViolation::NonPositiveTerm)
    );
    assert_eq!(
        IntakeGuard.application_from_json(&with_field("Credit_History", json!(2))),
        Err(InputViolation::CreditHistoryOutOfRange(2))
    );
}

#[test]
fn rejects_options_outside_the_domain() {
    let err = IntakeGuard
        .application_from_json(&with_field("Gender", json!("male")))
        .expect_err("options are case sensitive");

    assert_eq!(
        err,
        InputViolation::UnknownOption(UnknownOption {
            field: "Gender",
            value: "male".to_string(),
        })
    );
    assert_eq!(err.to_string(), "'male' is not a valid Gender option");
    assert_eq!(err.field(), Some("Gender"));
}
