//! Tests for flourish-model types.

use flourish_model::constants::{NO, OTHER};
use flourish_model::{ChoiceOption, FieldValue, Submission, SubmissionEnvelope};

#[test]
fn submission_parses_mixed_values() {
    let submission = Submission::from_json_str(
        r#"{
            "feeding_hiv_status": "No",
            "hiv_status_aware": null,
            "report_datetime": "2024-03-01T09:30:00Z",
            "during_preg_influencers": ["OTHER", {"short_name": "family", "name": "Family"}],
            "breastfeeding_duration": 6
        }"#,
    )
    .expect("parse submission");

    assert!(submission.equals("feeding_hiv_status", NO));
    assert!(submission.is_blank("hiv_status_aware"));
    assert!(
        submission
            .get("report_datetime")
            .and_then(FieldValue::as_datetime)
            .is_some()
    );
    assert!(submission.selected("during_preg_influencers", OTHER));
    assert_eq!(
        submission.choices("during_preg_influencers")[1],
        ChoiceOption::new("family", "Family")
    );
    assert_eq!(
        submission.get("breastfeeding_duration"),
        Some(&FieldValue::Number(6.0))
    );
}

#[test]
fn absent_and_empty_fields_are_blank() {
    let submission = Submission::new()
        .with("comment", "  ")
        .with("referral_reason", FieldValue::Choices(vec![]));

    assert!(submission.is_blank("comment"));
    assert!(submission.is_blank("referral_reason"));
    assert!(submission.is_blank("never_submitted"));
    assert!(submission.choices("never_submitted").is_empty());
}

#[test]
fn envelope_accepts_single_object_and_array() {
    let single = r#"{"form": "medical_history", "fields": {}, "instance_id": "abc"}"#;
    let parsed = SubmissionEnvelope::parse_many(single).expect("parse single");
    assert_eq!(parsed.len(), 1);
    assert!(!parsed[0].context.is_new_record());

    let many = r#"[
        {"form": "medical_history", "subject": {"subject_identifier": "B142-040990462-2", "hiv_status": "POS"}},
        {"form": "breastfeeding_questionnaire", "visit": {"report_datetime": "2024-03-01T09:00:00Z"}}
    ]"#;
    let parsed = SubmissionEnvelope::parse_many(many).expect("parse array");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].context.subject_hiv_status(), Some("POS"));
    assert!(parsed[1].context.visit.is_some());
    assert!(parsed[1].context.is_new_record());
}

#[test]
fn envelope_rejects_blank_form_name() {
    let err = SubmissionEnvelope::parse_many(r#"{"form": " "}"#).unwrap_err();
    assert!(err.to_string().contains("empty form name"));
}
