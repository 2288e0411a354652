//! Expansion of `#[derive(FhirChoice)]` for `name[x]` sum types.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attrs::is_fallback;

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "FhirChoice can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FhirChoice does not support generic enums",
        ));
    }

    let mut idents = Vec::with_capacity(data.variants.len());
    let mut suffixes = Vec::with_capacity(data.variants.len());
    let mut fallback = None;
    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {}
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "choice variants must wrap exactly one value, e.g. `String(String)`",
                ));
            }
        }
        if is_fallback(&variant.attrs)? {
            if fallback.is_some() {
                return Err(syn::Error::new_spanned(
                    variant,
                    "only one variant may be marked #[fhir(fallback)]",
                ));
            }
            fallback = Some(&variant.ident);
            continue;
        }
        idents.push(&variant.ident);
        suffixes.push(variant.ident.to_string());
    }

    let keeps_unmodeled = fallback.is_some();
    let (fallback_suffix, fallback_read, fallback_write) = match fallback {
        Some(ident) => (
            quote! { Self::#ident(unmodeled) => unmodeled.suffix.as_str(), },
            quote! {
                fn read_unmodeled(
                    value: ::meridian_fhir::choice::UnmodeledValue,
                ) -> ::core::option::Option<Self> {
                    ::core::option::Option::Some(Self::#ident(value))
                }
            },
            quote! {
                Self::#ident(unmodeled) => ::core::result::Result::Ok(unmodeled.value.clone()),
            },
        ),
        None => (quote! {}, quote! {}, quote! {}),
    };

    Ok(quote! {
        impl ::meridian_fhir::choice::ChoiceType for #name {
            const VARIANTS: &'static [&'static str] = &[#(#suffixes),*];
            const KEEPS_UNMODELED: bool = #keeps_unmodeled;

            fn type_suffix(&self) -> &str {
                match self {
                    #(Self::#idents(_) => #suffixes,)*
                    #fallback_suffix
                }
            }

            #fallback_read

            fn read_variant(
                suffix: &str,
                value: ::meridian_fhir::__private::serde_json::Value,
            ) -> ::core::result::Result<Self, ::meridian_fhir::FhirError> {
                match suffix {
                    #(#suffixes => ::meridian_fhir::layer::FhirValue::from_json(value).map(Self::#idents),)*
                    other => ::core::result::Result::Err(
                        ::meridian_fhir::FhirError::unknown_choice_variant(other),
                    ),
                }
            }

            fn write_variant(
                &self,
            ) -> ::core::result::Result<
                ::meridian_fhir::__private::serde_json::Value,
                ::meridian_fhir::FhirError,
            > {
                match self {
                    #(Self::#idents(value) => ::meridian_fhir::layer::FhirValue::to_json(value),)*
                    #fallback_write
                }
            }
        }

        impl ::meridian_fhir::layer::Property for ::core::option::Option<#name> {
            fn take(
                raw: &mut ::meridian_fhir::layer::JsonObject,
                key: &str,
            ) -> ::core::result::Result<Self, ::meridian_fhir::FhirError> {
                ::meridian_fhir::choice::take_choice(raw, key)
            }

            fn put(
                &self,
                key: &str,
                out: &mut ::meridian_fhir::layer::JsonObject,
            ) -> ::core::result::Result<(), ::meridian_fhir::FhirError> {
                ::meridian_fhir::choice::put_choice(self.as_ref(), key, out)
            }
        }
    })
}
