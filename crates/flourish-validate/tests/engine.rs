//! Form registry, base CRF checks and settings applied through the engine.

use chrono::{TimeZone, Utc};
use flourish_model::constants::NEG;
use flourish_model::{
    SubjectContext, Submission, SubmissionEnvelope, ValidationContext, VisitContext,
};
use flourish_validate::{
    AccumulationPolicy, Category, FormError, FormValidator, NON_FIELD_ERRORS, ValidatorSettings,
    all_forms, get_form, validate_envelope, validate_submission,
};

fn visit_context() -> ValidationContext {
    let visit = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    ValidationContext::new().with_visit(VisitContext::new(visit))
}

#[test]
fn registry_lists_every_form_once() {
    let ids: Vec<&str> = all_forms().iter().map(|form| form.id()).collect();
    assert_eq!(
        ids,
        [
            "breastfeeding_questionnaire",
            "caregiver_social_work_referral",
            "medical_history"
        ]
    );
    assert!(get_form("medical_history").is_some());
    assert!(get_form("maternal_death_report").is_none());
}

#[test]
fn unknown_form_is_an_error() {
    let err = validate_submission(
        "maternal_death_report",
        &Submission::new(),
        &ValidationContext::new(),
        &ValidatorSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, FormError::UnknownForm(ref id) if id == "maternal_death_report"));
    assert!(err.as_failure().is_none());
    assert!(err.suggestion().is_some());
}

#[test]
fn report_before_visit_is_reported_before_form_rules() {
    let early = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let submission = Submission::new().with("report_datetime", early);

    let err = validate_submission(
        "caregiver_social_work_referral",
        &submission,
        &visit_context(),
        &ValidatorSettings::default(),
    )
    .unwrap_err();
    let failure = err.as_failure().unwrap();
    assert_eq!(failure.errors.len(), 1);
    assert_eq!(failure.errors[0].field, "report_datetime");
    assert_eq!(failure.errors[0].category, Category::Temporal);
    assert_eq!(
        failure.errors[0].message,
        "Report datetime cannot be before visit datetime."
    );
}

#[test]
fn new_record_for_offstudy_subject_rejected() {
    let offstudy = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    let context = ValidationContext::new()
        .with_subject(SubjectContext::new("B142-040990462-2").with_offstudy(offstudy));

    let err = validate_submission(
        "caregiver_social_work_referral",
        &Submission::new(),
        &context,
        &ValidatorSettings::default(),
    )
    .unwrap_err();
    let failure = err.as_failure().unwrap();
    assert_eq!(failure.errors[0].field, NON_FIELD_ERRORS);
    assert_eq!(failure.errors[0].category, Category::Lifecycle);

    let existing = context.with_instance_id("5b1e");
    assert!(
        validate_submission(
            "caregiver_social_work_referral",
            &Submission::new(),
            &existing,
            &ValidatorSettings::default(),
        )
        .is_ok()
    );
}

#[test]
fn skipped_base_checks_let_form_rules_decide() {
    let early = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let submission = Submission::new().with("report_datetime", early);
    let settings = ValidatorSettings::from_toml_str(
        r#"skip_base_checks = ["caregiver_social_work_referral"]"#,
    )
    .unwrap();

    assert!(
        validate_submission(
            "caregiver_social_work_referral",
            &submission,
            &visit_context(),
            &settings,
        )
        .is_ok()
    );
}

#[test]
fn collect_all_reports_every_failure() {
    let settings = ValidatorSettings::new().with_policy(AccumulationPolicy::CollectAll);
    let submission = Submission::new().with("hiv_status_during_preg", NEG);

    let err = validate_submission(
        "breastfeeding_questionnaire",
        &submission,
        &ValidationContext::new(),
        &settings,
    )
    .unwrap_err();
    let failure = err.as_failure().unwrap();
    let rendered: Vec<String> = failure.errors.iter().map(ToString::to_string).collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    influenced_during_preg: This field is required.
    influenced_after_delivery: This field is required.
    ");
    assert_eq!(failure.count_by_category()[&Category::Presence], 2);
}

#[test]
fn message_overrides_apply_by_code() {
    let settings = ValidatorSettings::new().with_message("required", "Please answer {field}.");
    let submission = Submission::new().with("referral_for", "child");

    let err = validate_submission(
        "caregiver_social_work_referral",
        &submission,
        &ValidationContext::new(),
        &settings,
    )
    .unwrap_err();
    let failure = err.as_failure().unwrap();
    assert_eq!(
        failure.by_field()["child_exposure_status"],
        ["Please answer child_exposure_status."]
    );
}

#[test]
fn envelope_from_json_validates_with_context() {
    let json = r#"{
        "form": "breastfeeding_questionnaire",
        "fields": {
            "report_datetime": "2024-02-28T10:00:00Z",
            "hiv_status_during_preg": "NEG"
        },
        "visit": {"report_datetime": "2024-03-01T09:00:00Z", "visit_code": "2001M"}
    }"#;
    let envelopes = SubmissionEnvelope::parse_many(json).unwrap();

    let err = validate_envelope(&envelopes[0], &ValidatorSettings::default()).unwrap_err();
    assert_eq!(
        err.as_failure().unwrap().first().unwrap().code,
        "report_before_visit"
    );
    assert_eq!(
        err.to_string(),
        "breastfeeding_questionnaire failed validation with 1 error(s)"
    );
}

#[test]
fn envelope_with_other_as_string_requires_free_text() {
    let json = r#"{
        "form": "breastfeeding_questionnaire",
        "fields": {
            "during_preg_influencers": "OTHER",
            "after_delivery_influencers": ["nurse"],
            "influenced_after_delivery": "clinic nurse",
            "feeding_hiv_status": "Yes",
            "hiv_status_during_preg": "NEG",
            "six_months_feeding": "No",
            "received_training": ["clinic_session"],
            "training_outcome": "learnt to latch"
        }
    }"#;
    let envelopes = SubmissionEnvelope::parse_many(json).unwrap();

    let err = validate_envelope(&envelopes[0], &ValidatorSettings::default()).unwrap_err();
    let failure = err.as_failure().unwrap();
    assert_eq!(failure.errors.len(), 1);
    assert_eq!(failure.errors[0].field, "during_preg_influencers_other");
    assert_eq!(failure.errors[0].code, "other_specify_required");
}

#[test]
fn report_datetime_that_is_not_a_datetime_is_rejected() {
    let json = r#"{
        "form": "caregiver_social_work_referral",
        "fields": {"report_datetime": "2024-02-28 10:00"},
        "visit": {"report_datetime": "2024-03-01T09:00:00Z"}
    }"#;
    let envelopes = SubmissionEnvelope::parse_many(json).unwrap();

    let err = validate_envelope(&envelopes[0], &ValidatorSettings::default()).unwrap_err();
    let error = err.as_failure().unwrap().first().unwrap().clone();
    assert_eq!(error.field, "report_datetime");
    assert_eq!(error.code, "invalid_datetime");
    assert_eq!(error.category, Category::Temporal);
}
