//! The record layer as seen by the form mapper
//!
//! Persistence is not handled here. This module only describes what a record
//! type must expose so it can be rendered as a form and filled back in:
//! a static [`RecordSchema`] and string-keyed attribute access.

pub mod column;
pub mod schema;
pub mod value;

pub use column::{ColumnDescriptor, ColumnType};
pub use schema::{DEFAULT_CREATED_AT, DEFAULT_IDENTIFIER, DEFAULT_UPDATED_AT, RecordSchema};
pub use value::{AttributeValue, Value};

use crate::error::AttributeError;

/// String-keyed getter and setter access to a record's attributes
///
/// Usually derived with `#[derive(Attributes)]`.
pub trait Attributes {
    /// Read an attribute
    fn attribute(&self, name: &str) -> Result<Value, AttributeError>;

    /// Write an attribute in memory
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<(), AttributeError>;
}

/// A record type with a schema shared by all of its instances
pub trait Record: Attributes {
    /// The schema of this record type, built once
    fn schema() -> &'static RecordSchema;
}
