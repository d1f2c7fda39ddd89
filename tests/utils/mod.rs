use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use record_forms::{
    Attributes, ColumnDescriptor, FieldOverrides, Record, RecordSchema, SectionRegistry,
    Submission,
};

/// The profile record from the reference scenario:
/// `id, name(string), birthday(date), created_at(timestamp), owner_id(relation)`
#[derive(Debug, Clone, PartialEq, Attributes)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub birthday: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub owner_id: Option<i64>,
}

impl Record for Profile {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new("profile")
                .column("id", "integer")
                .column("name", "string")
                .column("birthday", "date")
                .column("created_at", "time")
                .with_column(ColumnDescriptor::new("owner_id", "integer").as_relation())
                .build()
                .expect("profile schema")
        })
    }
}

/// Timestamp at whole `seconds` past the epoch
#[must_use]
pub fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

#[must_use]
pub fn sample_profile() -> Profile {
    Profile {
        id: 1,
        name: "Ada".to_string(),
        birthday: Some(at(789_000_000)),
        created_at: Some(at(1_600_000_000)),
        owner_id: Some(7),
    }
}

/// A record using every column type, section overrides and an unmapped type
#[derive(Debug, Clone, PartialEq, Default, Attributes)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub age: Option<i32>,
    pub score: f64,
    pub active: bool,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub nickname: Option<String>,
    pub tags: Option<String>,
    pub joined_on: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub team_id: Option<i64>,
    #[attribute(skip)]
    pub dirty: bool,
}

impl Record for Member {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new("member")
                .column("id", "integer")
                .column("name", "string")
                .column("bio", "text")
                .column("age", "integer")
                .column("score", "float")
                .column("active", "boolean")
                .with_column(
                    ColumnDescriptor::new("email", "string")
                        .with_form(FieldOverrides::new().section("contact")),
                )
                .with_column(
                    ColumnDescriptor::new("phone", "string").with_form(
                        FieldOverrides::new()
                            .section("contact")
                            .title("Phone number"),
                    ),
                )
                .with_column(
                    ColumnDescriptor::new("nickname", "string")
                        .with_form(FieldOverrides::new().section("extra")),
                )
                .column("tags", "array")
                .column("joined_on", "date")
                .column("created_at", "time")
                .column("updated_at", "time")
                .with_column(ColumnDescriptor::new("team_id", "integer").as_relation())
                .with_sections(
                    SectionRegistry::new()
                        .register("contact", Some("Contact"))
                        .register("work", Some("Work")),
                )
                .build()
                .expect("member schema")
        })
    }
}

#[must_use]
pub fn sample_member() -> Member {
    Member {
        id: 42,
        name: "Grace".to_string(),
        bio: Some("Compiler pioneer".to_string()),
        age: Some(36),
        score: 4.5,
        active: true,
        email: Some("grace@example.com".to_string()),
        phone: Some("555-0100".to_string()),
        nickname: Some("Amazing Grace".to_string()),
        tags: Some("navy,cobol".to_string()),
        joined_on: NaiveDate::from_ymd_opt(1943, 7, 1),
        created_at: Some(at(1_500_000_000)),
        updated_at: Some(at(1_500_086_400)),
        team_id: Some(3),
        dirty: false,
    }
}

/// A record whose schema names a column the struct does not have
#[derive(Debug, Clone, Default, Attributes)]
pub struct Broken {
    pub id: i64,
    pub name: String,
}

impl Record for Broken {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new("broken")
                .column("id", "integer")
                .column("name", "string")
                .column("ghost", "string")
                .build()
                .expect("broken schema")
        })
    }
}

/// A record whose schema declares `name` twice and was never built
#[derive(Debug, Clone, PartialEq, Default, Attributes)]
pub struct Duplicated {
    pub id: i64,
    pub name: String,
}

impl Record for Duplicated {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new("duplicated")
                .column("id", "integer")
                .column("name", "string")
                .column("name", "text")
        })
    }
}

/// Build a submission from a `json!` object
#[must_use]
pub fn submission(value: serde_json::Value) -> Submission {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("submission must be a JSON object, got {other}"),
    }
}
