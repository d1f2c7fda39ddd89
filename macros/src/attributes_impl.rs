//! Attributes derive macro implementation
//!
//! This module contains the implementation of the Attributes derive macro,
//! which maps attribute names to struct fields for reading and writing
//! `record_forms::Value`s.

use std::collections::HashSet;

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput};

/// Receiver for the struct that derives Attributes
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(attribute), supports(struct_named))]
struct AttributesReceiver {
    /// The struct identifier
    ident: syn::Ident,
    generics: syn::Generics,
    /// The struct data with parsed fields
    data: ast::Data<(), AttributesFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(attribute))]
struct AttributesFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// Attribute name, defaults to the field name
    #[darling(default, rename = "name")]
    attribute_name: Option<String>,
    /// Leave the field out of attribute access
    #[darling(default)]
    skip: bool,
}

/// Process the Attributes derive macro
pub fn process_derive_attributes(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let receiver = match AttributesReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    match generate_attributes_impl(&receiver) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate the `Attributes` implementation
fn generate_attributes_impl(
    receiver: &AttributesReceiver,
) -> darling::Result<proc_macro2::TokenStream> {
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let mut errors = darling::Error::accumulator();
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    let mut idents = Vec::new();

    for field in fields.iter().filter(|field| !field.skip) {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = field
            .attribute_name
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());

        if !seen.insert(name.clone()) {
            errors.push(
                darling::Error::custom(format!("duplicate attribute name `{name}`"))
                    .with_span(ident),
            );
            continue;
        }

        names.push(name);
        idents.push(ident);
    }
    errors.finish()?;

    let struct_name = &receiver.ident;
    let (impl_generics, ty_generics, where_clause) = receiver.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::record_forms::Attributes for #struct_name #ty_generics #where_clause {
            fn attribute(
                &self,
                name: &str,
            ) -> ::core::result::Result<::record_forms::Value, ::record_forms::AttributeError> {
                match name {
                    #(
                        #names => ::core::result::Result::Ok(
                            ::record_forms::AttributeValue::to_value(&self.#idents),
                        ),
                    )*
                    _ => ::core::result::Result::Err(::record_forms::AttributeError::unknown(name)),
                }
            }

            #[allow(unused_variables)]
            fn set_attribute(
                &mut self,
                name: &str,
                value: ::record_forms::Value,
            ) -> ::core::result::Result<(), ::record_forms::AttributeError> {
                match name {
                    #(
                        #names => {
                            self.#idents = ::record_forms::AttributeValue::from_value(value)
                                .map_err(|mismatch| mismatch.for_attribute(name))?;
                            ::core::result::Result::Ok(())
                        }
                    )*
                    _ => ::core::result::Result::Err(::record_forms::AttributeError::unknown(name)),
                }
            }
        }
    })
}
