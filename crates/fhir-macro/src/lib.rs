//! Derive macros for the `meridian-fhir` object model.
//!
//! * `#[derive(FhirModel)]` turns a struct into one layer of the FHIR
//!   element/resource hierarchy: ordered reader/writer, serde glue, parent
//!   accessor delegation and a fluent `{Name}Builder`.
//! * `#[derive(FhirChoice)]` turns a single-value-per-variant enum into a
//!   `name[x]` choice group.
//!
//! The generated code refers to `::meridian_fhir`, so it compiles inside that
//! crate (which aliases itself) and in any crate depending on it.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod choice;
mod model;

#[proc_macro_derive(FhirModel, attributes(fhir))]
pub fn derive_fhir_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    model::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(FhirChoice, attributes(fhir))]
pub fn derive_fhir_choice(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    choice::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
