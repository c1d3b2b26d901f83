//! Integration tests for the sanitize/merge contract

use indexmap::IndexMap;
use settings_form::domain::SanitizerRegistry;
use settings_form::{FieldKind, RequestContext, SettingValue, SettingsRecord};

mod common;
use common::{harness, harness_with, harness_with_record, record, submitted};

#[tokio::test]
async fn submitted_value_overwrites_existing() {
    let h = harness_with_record(record(&[("currency", "USD")]));

    let merged = h
        .service
        .submit(
            submitted(&[("currency", "EUR")]),
            RequestContext::section_scoped("general", "main"),
        )
        .await
        .unwrap();

    assert_eq!(merged.get("currency"), Some(&SettingValue::text("EUR")));
    assert_eq!(merged.len(), 1);
}

#[tokio::test]
async fn group_sentinel_removes_existing_key() {
    let h = harness_with_record(record(&[("test_mode", "1")]));

    let merged = h
        .service
        .submit(
            submitted(&[("test_mode", "-1")]),
            RequestContext::section_scoped("gateways", "main"),
        )
        .await
        .unwrap();

    assert!(!merged.contains("test_mode"));
}

#[tokio::test]
async fn group_sentinel_leaves_absent_key_absent() {
    let h = harness();

    let merged = h
        .service
        .submit(
            submitted(&[("gateways", "-1")]),
            RequestContext::section_scoped("gateways", "main"),
        )
        .await
        .unwrap();

    assert!(!merged.contains("gateways"));
}

#[tokio::test]
async fn checked_group_persists_the_enabled_map() {
    let h = harness();

    let enabled: IndexMap<String, String> = [
        ("paddle".to_string(), "1".to_string()),
        ("stripe".to_string(), "1".to_string()),
    ]
    .into_iter()
    .collect();
    let mut values = submitted(&[]);
    values.insert("gateways".to_string(), SettingValue::Map(enabled.clone()));

    let merged = h
        .service
        .submit(values, RequestContext::section_scoped("gateways", "main"))
        .await
        .unwrap();

    assert_eq!(merged.get("gateways"), Some(&SettingValue::Map(enabled)));
}

#[tokio::test]
async fn nonempty_text_round_trips() {
    let h = harness();

    let merged = h
        .service
        .submit(
            submitted(&[("license_key", "abc-123")]),
            RequestContext::section_scoped("extensions", "main"),
        )
        .await
        .unwrap();

    assert_eq!(
        merged.get("license_key"),
        Some(&SettingValue::text("abc-123"))
    );
}

#[tokio::test]
async fn empty_text_submission_removes_the_key() {
    let h = harness_with_record(record(&[("license_key", "abc-123")]));

    let merged = h
        .service
        .submit(
            submitted(&[("license_key", "")]),
            RequestContext::section_scoped("extensions", "main"),
        )
        .await
        .unwrap();

    assert!(!merged.contains("license_key"));
}

#[tokio::test]
async fn fields_outside_the_submitted_index_are_untouched() {
    // test_mode lives on the gateways tab; a general/main submission must
    // not see it.
    let h = harness_with_record(record(&[("test_mode", "1"), ("currency", "USD")]));

    let merged = h
        .service
        .submit(
            submitted(&[("currency", "EUR")]),
            RequestContext::section_scoped("general", "main"),
        )
        .await
        .unwrap();

    assert_eq!(merged.get("test_mode"), Some(&SettingValue::text("1")));
}

#[tokio::test]
async fn fields_in_the_index_but_absent_from_the_submission_are_pruned() {
    // currency_position sits in general/main's index; submitting the
    // section without it drops the persisted value. Downstream behavior
    // depends on this prune.
    let h = harness_with_record(record(&[("currency_position", "after")]));

    let merged = h
        .service
        .submit(
            submitted(&[("currency", "EUR")]),
            RequestContext::section_scoped("general", "main"),
        )
        .await
        .unwrap();

    assert!(!merged.contains("currency_position"));
    assert_eq!(merged.get("currency"), Some(&SettingValue::text("EUR")));
}

#[tokio::test]
async fn full_save_retains_unsubmitted_keys() {
    let h = harness_with_record(record(&[("payment_page", "12")]));

    let merged = h.service.save_all(submitted(&[])).await.unwrap();

    assert_eq!(merged.get("payment_page"), Some(&SettingValue::text("12")));
}

#[tokio::test]
async fn full_save_removes_keys_submitted_empty() {
    let h = harness_with_record(record(&[("currency", "USD"), ("payment_page", "12")]));

    let merged = h
        .service
        .save_all(submitted(&[("currency", "")]))
        .await
        .unwrap();

    assert!(!merged.contains("currency"));
    assert_eq!(merged.get("payment_page"), Some(&SettingValue::text("12")));
}

#[test]
fn merging_the_same_submission_twice_is_idempotent() {
    let h = harness();
    let existing = record(&[("currency", "USD"), ("currency_position", "after")]);
    let ctx = RequestContext::section_scoped("general", "main");
    let values = submitted(&[("currency", "EUR"), ("payment_page", "")]);

    let once = h.service.sanitize_merge(&existing, values.clone(), &ctx);
    let twice = h.service.sanitize_merge(&once, values, &ctx);

    assert_eq!(once, twice);
}

#[test]
fn scoped_defaults_fall_back_to_general_main() {
    // No tab/section in the context, but still section-scoped: the
    // configured defaults (general/main) drive the index.
    let h = harness();
    let existing = record(&[("currency_position", "after")]);
    let ctx = RequestContext {
        tab: None,
        section: None,
        section_override: None,
        scoped: true,
    };

    let merged = h.service.sanitize_merge(&existing, submitted(&[]), &ctx);

    assert!(!merged.contains("currency_position"));
}

#[test]
fn section_override_wins_over_the_detected_section() {
    let h = harness();
    let existing = record(&[("currency_position", "after")]);

    // Without the override the bogus section sees no fields and prunes
    // nothing.
    let detected = RequestContext::section_scoped("general", "bogus");
    let merged = h
        .service
        .sanitize_merge(&existing, submitted(&[]), &detected);
    assert!(merged.contains("currency_position"));

    let overridden =
        RequestContext::section_scoped("general", "bogus").with_section_override("main");
    let merged = h
        .service
        .sanitize_merge(&existing, submitted(&[]), &overridden);
    assert!(!merged.contains("currency_position"));
}

#[test]
fn legacy_tab_level_fields_stay_in_the_section_index() {
    // legacy_token is contributed at tab level; a main-section submission
    // must still apply its text pruning rule.
    let h = harness();
    let existing = record(&[("legacy_token", "tok")]);
    let ctx = RequestContext::section_scoped("extensions", "main");

    let merged = h
        .service
        .sanitize_merge(&existing, submitted(&[("legacy_token", "")]), &ctx);
    assert!(!merged.contains("legacy_token"));

    let merged = h
        .service
        .sanitize_merge(&existing, submitted(&[("legacy_token", "fresh")]), &ctx);
    assert_eq!(merged.get("legacy_token"), Some(&SettingValue::text("fresh")));
}

#[test]
fn header_submissions_pass_through_untouched() {
    // Non-persistable kinds are skipped entirely: merged but never
    // sanitized or pruned.
    let h = harness();
    let ctx = RequestContext::section_scoped("general", "main");

    let merged = h.service.sanitize_merge(
        &SettingsRecord::new(),
        submitted(&[("page_settings", "anything")]),
        &ctx,
    );

    assert_eq!(
        merged.get("page_settings"),
        Some(&SettingValue::text("anything"))
    );
}

#[test]
fn kind_sanitizers_run_before_generic_sanitizers() {
    let mut sanitizers = SanitizerRegistry::new();
    sanitizers.register_kind_sanitizer(FieldKind::Text, |value, _id| match value {
        SettingValue::Text(text) => SettingValue::Text(text.trim().to_string()),
        other => other,
    });
    sanitizers.register_generic_sanitizer(|value, id| match value {
        SettingValue::Text(text) if id == "license_key" => {
            SettingValue::Text(text.to_uppercase())
        }
        other => other,
    });
    let h = harness_with(SettingsRecord::new(), sanitizers);

    let merged = h.service.sanitize_merge(
        &SettingsRecord::new(),
        submitted(&[("license_key", "  abc-123  ")]),
        &RequestContext::section_scoped("extensions", "main"),
    );

    assert_eq!(
        merged.get("license_key"),
        Some(&SettingValue::text("ABC-123"))
    );
}

#[test]
fn tab_hooks_run_before_section_hooks() {
    let mut sanitizers = SanitizerRegistry::new();
    sanitizers.register_tab_sanitizer("general", |mut values| {
        values.insert("currency".to_string(), SettingValue::text("EUR"));
        values
    });
    sanitizers.register_section_sanitizer("general", "main", |mut values| {
        if values.get("currency") == Some(&SettingValue::text("EUR")) {
            values.insert("currency".to_string(), SettingValue::text("GBP"));
        }
        values
    });
    let h = harness_with(SettingsRecord::new(), sanitizers);

    let merged = h.service.sanitize_merge(
        &SettingsRecord::new(),
        submitted(&[("currency", "USD")]),
        &RequestContext::section_scoped("general", "main"),
    );

    assert_eq!(merged.get("currency"), Some(&SettingValue::text("GBP")));
}

#[tokio::test]
async fn scoped_submissions_report_an_updated_notice() {
    let h = harness();

    h.service
        .submit(
            submitted(&[("currency", "EUR")]),
            RequestContext::section_scoped("general", "main"),
        )
        .await
        .unwrap();

    assert_eq!(h.notices.messages(), vec!["Settings updated."]);
}

#[tokio::test]
async fn full_saves_do_not_report_notices() {
    let h = harness();

    h.service
        .save_all(submitted(&[("currency", "EUR")]))
        .await
        .unwrap();

    assert!(h.notices.messages().is_empty());
}
