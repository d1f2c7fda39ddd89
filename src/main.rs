use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, TimeZone, Utc};
use clap::Parser;
use log::{info, warn};
use record_forms::{
    Attributes, ColumnDescriptor, ExportOptions, FieldOverrides, FormConfig, FormExporter,
    FormImporter, Record, RecordSchema, SectionRegistry, Submission,
};
use std::sync::OnceLock;

/// Sample record used to demonstrate a form round trip
#[derive(Debug, Clone, Attributes)]
struct Profile {
    id: i64,
    name: String,
    bio: Option<String>,
    birthday: Option<DateTime<Utc>>,
    email: Option<String>,
    newsletter: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_id: Option<i64>,
}

impl Record for Profile {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            RecordSchema::new("profile")
                .column("id", "integer")
                .column("name", "string")
                .column("bio", "text")
                .column("birthday", "date")
                .with_column(
                    ColumnDescriptor::new("email", "string").with_form(
                        FieldOverrides::new()
                            .section("contact")
                            .placeholder("me@example.com"),
                    ),
                )
                .with_column(
                    ColumnDescriptor::new("newsletter", "boolean")
                        .with_form(FieldOverrides::new().section("contact")),
                )
                .column("created_at", "time")
                .column("updated_at", "time")
                .with_column(ColumnDescriptor::new("owner_id", "integer").as_relation())
                .with_sections(SectionRegistry::new().register("contact", Some("Contact")))
                .build()
                .expect("profile columns are unique")
        })
    }
}

/// Export a sample profile as a form and optionally apply a submission to it
#[derive(Parser)]
#[command(name = "record-forms")]
#[command(about = "Describe a sample record as a form and apply submitted values")]
struct Cli {
    /// JSON file with form configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include the created/updated timestamp columns
    #[arg(long = "expose-dates")]
    expose_auto_date_fields: bool,

    /// JSON object of submitted form values to apply
    submission: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = match &args.config {
        Some(path) => FormConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => FormConfig::default(),
    };
    info!("Using configuration: {config:?}");

    let now = Utc::now();
    let mut profile = Profile {
        id: 1,
        name: "Ada Lovelace".to_string(),
        bio: None,
        birthday: Utc.timestamp_opt(789_000_000, 0).single(),
        email: Some("ada@example.com".to_string()),
        newsletter: false,
        created_at: now,
        updated_at: now,
        owner_id: Some(7),
    };

    let options = ExportOptions::new()
        .with_title("Profile")
        .with_default_section_title("General")
        .expose_auto_date_fields(args.expose_auto_date_fields);
    let form = FormExporter::new(config.clone()).export(&profile, &options)?;
    println!("{}", serde_json::to_string_pretty(&form)?);

    let Some(path) = args.submission else {
        info!("No submission file given, done");
        return Ok(());
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("reading submission {}", path.display()))?;
    let submission: Submission = serde_json::from_str(&content)
        .with_context(|| format!("parsing submission {}", path.display()))?;

    if submission.is_empty() {
        warn!("Submission {} is empty", path.display());
    }

    FormImporter::new(config).import_into(&mut profile, &submission, args.expose_auto_date_fields)?;
    info!("Record after import (not saved): {profile:?}");

    Ok(())
}
