//! Submitted form values back into a record

use rustc_hash::FxHashSet;

use super::sections::eligible_columns;
use super::temporal;
use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::record::{ColumnDescriptor, Record, Value};

/// Submitted form data: field key to transport value
pub type Submission = serde_json::Map<String, serde_json::Value>;

/// Writes submitted values onto records
#[derive(Debug, Clone, Default)]
pub struct FormImporter {
    config: FormConfig,
}

impl FormImporter {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Assign every submitted eligible column on `record`
    ///
    /// Columns missing from `submitted` are left alone. The record is changed
    /// in memory only; saving it is up to the caller. All values are coerced
    /// before the first assignment, so a coercion error leaves the record as
    /// it was.
    pub fn import_into<R: Record>(
        &self,
        record: &mut R,
        submitted: &Submission,
        expose_auto_date_fields: bool,
    ) -> Result<()> {
        let schema = R::schema();
        schema.validate()?;
        let columns: Vec<&ColumnDescriptor> =
            eligible_columns(schema, expose_auto_date_fields).collect();

        let known: FxHashSet<&str> = columns.iter().map(|column| column.name.as_str()).collect();
        for key in submitted.keys().filter(|key| !known.contains(key.as_str())) {
            if self.config.reject_unknown_columns {
                return Err(FormError::UnknownColumn(key.clone()));
            }
            log::debug!("Ignoring submitted key {key}: not an eligible column of {}", schema.name());
        }

        let assignments = columns
            .into_iter()
            .filter_map(|column| {
                submitted
                    .get(&column.name)
                    .map(|submitted| coerce(column, submitted).map(|value| (column, value)))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Importing {} of {} submitted values into {}",
            assignments.len(),
            submitted.len(),
            schema.name()
        );

        for (column, value) in assignments {
            log::trace!("Assigning {} = {:?}", column.name, value);
            record.set_attribute(&column.name, value)?;
        }

        Ok(())
    }
}

/// Native value for a submitted transport value
///
/// Date and time columns turn numbers and parseable text into timestamps.
/// Every other column takes the value as submitted.
pub fn coerce(column: &ColumnDescriptor, submitted: &serde_json::Value) -> Result<Value> {
    if column.column_type.is_temporal() {
        let timestamp = match submitted {
            serde_json::Value::Null => return Ok(Value::Null),
            serde_json::Value::Number(n) => n.as_f64().and_then(temporal::from_epoch_seconds),
            serde_json::Value::String(s) => temporal::parse_timestamp(s),
            _ => None,
        };
        return timestamp
            .map(Value::Timestamp)
            .ok_or_else(|| FormError::InvalidTimestamp {
                column: column.name.clone(),
                value: submitted.to_string(),
            });
    }

    Value::from_json(submitted).ok_or_else(|| FormError::UnsupportedValue {
        column: column.name.clone(),
    })
}
