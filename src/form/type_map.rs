//! Column type to field kind mapping

use super::descriptor::FieldKind;
use crate::record::ColumnType;

/// Field kind for a column type
///
/// Returns `None` for tags outside the fixed table.
#[must_use]
pub fn kind_of(column_type: &ColumnType) -> Option<FieldKind> {
    match column_type {
        ColumnType::String => Some(FieldKind::String),
        ColumnType::Date | ColumnType::Time => Some(FieldKind::Date),
        ColumnType::Int | ColumnType::Integer | ColumnType::Float | ColumnType::Double => {
            Some(FieldKind::Number)
        }
        ColumnType::Bool | ColumnType::Boolean => Some(FieldKind::Check),
        ColumnType::Text => Some(FieldKind::Text),
        ColumnType::Other(_) => None,
    }
}
