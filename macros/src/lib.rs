//! Procedural macros for the record-forms crate
//!
//! This crate provides the `Attributes` derive, which generates string-keyed
//! getter and setter access to a record struct's fields.

use proc_macro::TokenStream;

mod attributes_impl;

/// Attributes derive macro
///
/// Generates an implementation of `record_forms::Attributes` for a struct
/// with named fields. Every field type must implement
/// `record_forms::AttributeValue`.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Attributes)]
/// struct Profile {
///     id: i64,
///     name: String,
///
///     #[attribute(name = "birthday")]
///     born_at: Option<chrono::DateTime<chrono::Utc>>,
///
///     #[attribute(skip)]
///     dirty: bool,
/// }
/// ```
#[proc_macro_derive(Attributes, attributes(attribute))]
pub fn derive_attributes(input: TokenStream) -> TokenStream {
    attributes_impl::process_derive_attributes(input)
}
