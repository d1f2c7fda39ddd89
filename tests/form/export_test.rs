use crate::utils::{Broken, Duplicated, Member, sample_member, sample_profile};
use record_forms::{
    AttributeError, ExportOptions, FieldKind, FormConfig, FormError, FormExporter, FormRecord,
};
use serde_json::json;

fn row_keys(form: &record_forms::FormDescriptor, section: &str) -> Vec<String> {
    form.section(section)
        .unwrap_or_else(|| panic!("missing section {section}"))
        .keys()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_profile_scenario_wire_format() {
    let form = FormExporter::default()
        .export(&sample_profile(), &ExportOptions::new().with_title("Profile"))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&form).unwrap(),
        json!({
            "title": "Profile",
            "sections": [{
                "rows": [
                    {
                        "key": "name",
                        "title": "Name",
                        "kind": "string",
                        "placeholder": "Name",
                        "value": "Ada"
                    },
                    {
                        "key": "birthday",
                        "title": "Birthday",
                        "kind": "date",
                        "placeholder": "Birthday",
                        "value": 789_000_000.0
                    }
                ]
            }]
        })
    );
}

#[test]
fn test_excluded_columns_never_appear() {
    let form = sample_profile().to_form(&ExportOptions::default()).unwrap();

    for key in ["id", "created_at", "owner_id"] {
        assert!(form.field(key).is_none(), "{key} should not be exported");
    }
}

#[test]
fn test_exposed_timestamps_land_in_default() {
    let options = ExportOptions::new().expose_auto_date_fields(true);
    let form = FormExporter::default().export(&sample_member(), &options).unwrap();

    let default_keys = row_keys(&form, "default");
    assert!(default_keys.contains(&"created_at".to_string()));
    assert!(default_keys.contains(&"updated_at".to_string()));
    assert_eq!(form.field("created_at").unwrap().kind, Some(FieldKind::Date));
    assert_eq!(form.field("created_at").unwrap().value, json!(1_500_000_000.0));

    // Identifier and relation columns stay out regardless of the flag
    assert!(form.field("id").is_none());
    assert!(form.field("team_id").is_none());
}

#[test]
fn test_section_order_and_routing() {
    let form = FormExporter::default()
        .export(&sample_member(), &ExportOptions::default())
        .unwrap();

    let keys: Vec<_> = form.sections.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, ["default", "contact", "work", "extra"]);

    let titles: Vec<_> = form.sections.iter().map(|s| s.title.as_deref()).collect();
    assert_eq!(titles, [None, Some("Contact"), Some("Work"), None]);

    assert_eq!(
        row_keys(&form, "default"),
        ["name", "bio", "age", "score", "active", "tags", "joined_on"]
    );
    assert_eq!(row_keys(&form, "contact"), ["email", "phone"]);
    assert!(row_keys(&form, "work").is_empty());
    assert_eq!(row_keys(&form, "extra"), ["nickname"]);
}

#[test]
fn test_every_field_appears_once() {
    let form = FormExporter::default()
        .export(&sample_member(), &ExportOptions::new().expose_auto_date_fields(true))
        .unwrap();

    let mut keys: Vec<_> = form.rows().map(|row| row.key.clone()).collect();
    let total = keys.len();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn test_field_kinds_and_values() {
    let form = sample_member().to_form(&ExportOptions::default()).unwrap();

    let expectations = [
        ("name", Some(FieldKind::String), json!("Grace")),
        ("bio", Some(FieldKind::Text), json!("Compiler pioneer")),
        ("age", Some(FieldKind::Number), json!(36)),
        ("score", Some(FieldKind::Number), json!(4.5)),
        ("active", Some(FieldKind::Check), json!(true)),
        ("tags", None, json!("navy,cobol")),
        ("joined_on", Some(FieldKind::Date), json!(-836_438_400.0)),
    ];

    for (key, kind, value) in expectations {
        let field = form.field(key).unwrap();
        assert_eq!(field.kind, kind, "kind of {key}");
        assert_eq!(field.value, value, "value of {key}");
    }
}

#[test]
fn test_override_title_replaces_label() {
    let form = sample_member().to_form(&ExportOptions::default()).unwrap();

    let phone = form.field("phone").unwrap();
    assert_eq!(phone.title, "Phone number");
    assert_eq!(phone.placeholder, "Phone");

    let joined = form.field("joined_on").unwrap();
    assert_eq!(joined.title, "Joined on");
}

#[test]
fn test_default_section_title() {
    let options = ExportOptions::new()
        .with_title("Member")
        .with_default_section_title("General");
    let form = FormExporter::default().export(&sample_member(), &options).unwrap();

    assert_eq!(form.title.as_deref(), Some("Member"));
    assert_eq!(form.sections[0].title.as_deref(), Some("General"));
}

#[test]
fn test_null_values_are_exported_as_null() {
    let mut member = sample_member();
    member.bio = None;
    member.joined_on = None;

    let form = member.to_form(&ExportOptions::default()).unwrap();
    assert_eq!(form.field("bio").unwrap().value, json!(null));
    assert_eq!(form.field("joined_on").unwrap().value, json!(null));
}

#[test]
fn test_strict_field_kinds_rejects_unmapped_types() {
    let exporter = FormExporter::new(FormConfig {
        strict_field_kinds: true,
        ..FormConfig::default()
    });

    let err = exporter
        .export(&sample_member(), &ExportOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        FormError::UnsupportedFieldKind { ref column, .. } if column == "tags"
    ));

    // Profile has no unmapped column types
    assert!(exporter.export(&sample_profile(), &ExportOptions::default()).is_ok());
}

#[test]
fn test_export_leaves_record_untouched() {
    let member = sample_member();
    let before = member.clone();
    let _ = member.to_form(&ExportOptions::new().expose_auto_date_fields(true)).unwrap();
    assert_eq!(member, before);
}

#[test]
fn test_exports_are_independent_of_earlier_flags() {
    let member = sample_member();
    let exposed = member
        .to_form(&ExportOptions::new().expose_auto_date_fields(true))
        .unwrap();
    let hidden = member.to_form(&ExportOptions::default()).unwrap();

    assert!(exposed.field("created_at").is_some());
    assert!(hidden.field("created_at").is_none());
}

#[test]
fn test_getter_failures_propagate() {
    let err = Broken::default()
        .to_form(&ExportOptions::default())
        .unwrap_err();

    assert!(matches!(
        err,
        FormError::Attribute(AttributeError::UnknownAttribute { ref name }) if name == "ghost"
    ));
}

#[test]
fn test_member_schema_is_shared() {
    let first = <Member as record_forms::Record>::schema();
    let second = <Member as record_forms::Record>::schema();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_duplicate_columns_cannot_produce_a_form() {
    let record = Duplicated {
        id: 1,
        name: "Ada".to_string(),
    };

    let err = record.to_form(&ExportOptions::default()).unwrap_err();
    assert!(matches!(err, FormError::Schema(ref msg) if msg.contains("name")));
}
