use assert_matches::assert_matches;
use civic_core::error::CoreError;
use civic_core::report::sanitize::strip_protected_fields;
use civic_core::report::{
    prepare_report, resolve_profile, validate, Category, ReportRecord, ValidationResult,
};
use serde_json::json;

fn record(body: serde_json::Value) -> ReportRecord {
    ReportRecord::from_json(body).expect("fixture should parse")
}

#[test]
fn other_report_with_desc_and_location_is_valid() {
    let r = record(json!({ "desc": "pothole", "locationString": "Main St" }));
    assert_eq!(validate(0, &r).unwrap(), ValidationResult::Valid);
}

#[test]
fn unknown_category_on_empty_record() {
    assert_matches!(
        validate(99, &ReportRecord::default()),
        Err(CoreError::UnknownCategory(99))
    );
}

#[test]
fn every_id_outside_the_enumeration_is_unknown() {
    for id in -3..0 {
        assert_matches!(resolve_profile(id), Err(CoreError::UnknownCategory(_)));
    }
    for id in 9..20 {
        assert_matches!(resolve_profile(id), Err(CoreError::UnknownCategory(_)));
    }
    for id in 0..=8 {
        assert!(resolve_profile(id).is_ok());
    }
}

#[test]
fn garbage_missing_everything() {
    let err = validate(7, &ReportRecord::default()).unwrap().into_result().unwrap_err();
    assert_eq!(err.to_string(), "Missing description. Missing location info.");
}

#[test]
fn dog_feces_rejects_desc_even_with_valid_location() {
    let r = record(json!({ "locationString": "Park", "desc": "big one" }));
    let err = validate(2, &r).unwrap_err();
    assert_matches!(&err, CoreError::InvalidFieldsForCategory(fields) if fields == &["desc"]);
    assert_eq!(
        err.to_string(),
        "Invalid fields for given report category: desc"
    );
}

#[test]
fn location_exclusivity_for_located_categories() {
    let both = record(json!({
        "locationString": "Main St",
        "locationGeo": { "latitude": 1.0, "longitude": 2.0 },
    }));
    let neither = ReportRecord::default();
    let one = record(json!({ "locationGeo": { "latitude": 1.0, "longitude": 2.0 } }));

    for id in [2, 3, 4] {
        assert_eq!(
            validate(id, &both).unwrap(),
            ValidationResult::Invalid("Location info is ambiguous.".into())
        );
        assert_eq!(
            validate(id, &neither).unwrap(),
            ValidationResult::Invalid("Missing location info.".into())
        );
        assert!(validate(id, &one).unwrap().is_valid());
    }
}

#[test]
fn luminary_exclusivity() {
    let both = record(json!({
        "luminaryCode": "L-12",
        "image": { "id": "a1", "extension": ".png" },
    }));
    assert_eq!(
        validate(1, &both).unwrap(),
        ValidationResult::Invalid("Luminary code and image are both present.".into())
    );
    assert_eq!(
        validate(1, &ReportRecord::default()).unwrap(),
        ValidationResult::Invalid("Missing luminary code.".into())
    );
    assert!(validate(1, &record(json!({ "luminaryCode": "L-12" })))
        .unwrap()
        .is_valid());
}

#[test]
fn validation_is_deterministic() {
    let r = record(json!({ "locationString": "Main St", "locationGeo": { "latitude": 0.0, "longitude": 0.0 } }));
    for category in Category::ALL {
        let first = format!("{:?}", validate(category.id(), &r));
        let second = format!("{:?}", validate(category.id(), &r));
        assert_eq!(first, second);
    }
}

#[test]
fn validation_is_usable_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let r = ReportRecord {
                    desc: Some(format!("report {i}")),
                    location_string: Some("Main St".into()),
                    ..Default::default()
                };
                validate(Category::Garbage.id(), &r).unwrap()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), ValidationResult::Valid);
    }
}

#[test]
fn full_pre_commit_pipeline_from_raw_body() {
    let mut body = json!({
        "category": 5,
        "creator": "forged",
        "status": 1,
        "desc": "  bench is broken  ",
        "locationGeo": { "latitude": 40.4168, "longitude": -3.7038 },
    });
    assert_eq!(strip_protected_fields(&mut body), 2);

    let mut r = record(body);
    assert_eq!(prepare_report(&mut r).unwrap(), Category::FacilitiesFault);
    assert_eq!(r.desc.as_deref(), Some("bench is broken"));
}

#[test]
fn pre_commit_pipeline_surfaces_rule_violations() {
    let mut r = record(json!({ "category": 8, "locationString": "   " }));
    let err = prepare_report(&mut r).unwrap_err();
    assert!(err.is_client_error());
    assert_matches!(
        err,
        CoreError::ReportRuleViolation(msg) if msg == "Missing description. Missing location info."
    );
}
